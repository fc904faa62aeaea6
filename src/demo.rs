//! The fixed demonstration sequence.

use std::io::Write;

use crate::animals::{
    walk, Animal, Cat, CompositeAnimal, CompositeBird, Dog, Eagle, Flier, Runner, Walker,
};
use crate::config::DemoConfig;
use crate::error::DemoError;
use crate::greeting::{say_hello, American, Russian};
use crate::inspect::{describe_all, sample_values};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Sounds,
    Composites,
    Greetings,
    Inspection,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Sounds,
        Section::Composites,
        Section::Greetings,
        Section::Inspection,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Sounds => "Sound-maker dispatch",
            Section::Composites => "Composite capabilities",
            Section::Greetings => "Greeter dispatch",
            Section::Inspection => "Runtime type inspection",
        }
    }
}

pub fn run_section(
    section: Section,
    out: &mut dyn Write,
    config: &DemoConfig,
) -> Result<(), DemoError> {
    match section {
        Section::Sounds => {
            let c: &dyn Animal = &Cat;
            let d: &dyn Animal = &Dog;
            c.make_sound(out)?;
            d.make_sound(out)?;
        }
        Section::Composites => {
            let cc: &dyn CompositeAnimal = &Cat;
            let e: &dyn CompositeBird = &Eagle;
            cc.walk(out)?;
            cc.run(out)?;
            e.walk(out)?;
            e.fly(out)?;
            // Both are just walkers here
            walk(cc, out)?;
            walk(e, out)?;
        }
        Section::Greetings => {
            say_hello(&Russian, &config.russian_name, out)?;
            say_hello(&American, &config.american_name, out)?;
        }
        Section::Inspection => {
            describe_all(&sample_values(), out)?;
        }
    }
    Ok(())
}

pub fn run(out: &mut dyn Write, config: &DemoConfig) -> Result<(), DemoError> {
    for section in Section::ALL {
        run_section(section, out, config)?;
    }
    Ok(())
}
