//! Capability traits for animals and their composites.

use std::io::{self, Write};

/// Anything that can make a sound.
pub trait Animal {
    fn sound(&self) -> &'static str;

    fn make_sound(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.sound())
    }
}

/// Name used in the movement lines, e.g. "cat is walking!".
pub trait Species {
    fn species(&self) -> &'static str;
}

pub trait Walker: Species {
    fn walk(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} is walking!", self.species())
    }
}

pub trait Runner: Species {
    fn run(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} is running!", self.species())
    }
}

pub trait Flier: Species {
    fn fly(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} is flying!", self.species())
    }
}

// Composites: requires both parts at once
pub trait CompositeAnimal: Walker + Runner {}

pub trait CompositeBird: Walker + Flier {}

impl<T: Walker + Runner + ?Sized> CompositeAnimal for T {}

impl<T: Walker + Flier + ?Sized> CompositeBird for T {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cat;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dog;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Eagle;

impl Animal for Cat {
    fn sound(&self) -> &'static str {
        "meow!"
    }
}

impl Animal for Dog {
    fn sound(&self) -> &'static str {
        "woof!"
    }
}

impl Species for Cat {
    fn species(&self) -> &'static str {
        "cat"
    }
}

impl Species for Eagle {
    fn species(&self) -> &'static str {
        "eagle"
    }
}

impl Walker for Cat {}
impl Runner for Cat {}

impl Walker for Eagle {}
impl Flier for Eagle {}

/// Only needs `Walker`, so a `dyn CompositeAnimal` or `dyn CompositeBird` fits too.
pub fn walk<W: Walker + ?Sized>(w: &W, out: &mut dyn Write) -> io::Result<()> {
    w.walk(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(f: impl FnOnce(&mut dyn Write) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_sounds_are_single_lines() {
        let animals: Vec<Box<dyn Animal>> = vec![Box::new(Cat), Box::new(Dog)];
        let lines: Vec<String> = animals
            .iter()
            .map(|a| capture(|out| a.make_sound(out)))
            .collect();
        assert_eq!(lines, vec!["meow!\n", "woof!\n"]);
    }

    #[test]
    fn test_make_sound_is_repeatable() {
        let first = capture(|out| Cat.make_sound(out));
        let second = capture(|out| Cat.make_sound(out));
        assert_eq!(first, second);
    }

    #[test]
    fn test_cat_moves() {
        assert_eq!(capture(|out| Cat.walk(out)), "cat is walking!\n");
        assert_eq!(capture(|out| Cat.run(out)), "cat is running!\n");
    }

    #[test]
    fn test_eagle_moves() {
        assert_eq!(capture(|out| Eagle.walk(out)), "eagle is walking!\n");
        assert_eq!(capture(|out| Eagle.fly(out)), "eagle is flying!\n");
    }

    #[test]
    fn test_composites_accepted_where_walker_required() {
        let cc: &dyn CompositeAnimal = &Cat;
        let e: &dyn CompositeBird = &Eagle;

        assert_eq!(capture(|out| walk(cc, out)), capture(|out| cc.walk(out)));
        assert_eq!(capture(|out| walk(e, out)), capture(|out| e.walk(out)));
        assert_eq!(capture(|out| walk(&Cat, out)), "cat is walking!\n");
    }

    #[test]
    fn test_composite_keeps_extra_capability() {
        let cc: Box<dyn CompositeAnimal> = Box::new(Cat);
        assert_eq!(capture(|out| cc.run(out)), "cat is running!\n");
    }
}
