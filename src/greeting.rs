use std::io::{self, Write};

/// A greeting strategy for a named person.
pub trait Greeter {
    fn greet(&self, name: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Russian;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct American;

impl Greeter for Russian {
    fn greet(&self, name: &str) -> String {
        format!("Привет, {}", name)
    }
}

impl Greeter for American {
    fn greet(&self, name: &str) -> String {
        format!("Hello, {}", name)
    }
}

/// Writes the greeting on its own line. The caller never learns which
/// strategy it was handed.
pub fn say_hello(g: &dyn Greeter, name: &str, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", g.greet(name))
}
