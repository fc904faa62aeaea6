//! # Interfaces in Rust
//!
//! A small tour of how values of different types are used through shared
//! capabilities:
//!
//! ## Static dispatch through narrow traits
//! - `Animal` (makes a sound), implemented by `Cat` and `Dog`
//! - `Greeter` (greets a named person), implemented by `Russian` and `American`
//!
//! ## Composition
//! - `CompositeAnimal` = `Walker + Runner`
//! - `CompositeBird` = `Walker + Flier`
//! - Anything composite can be handed to a function that only needs `Walker`
//!
//! ## Runtime type inspection
//! - A `HashMap<String, Box<dyn Dynamic>>` holding an integer, a float and a bool
//! - A type switch with two explicit cases and a fallback naming the type
//!
//! Run the whole tour with: `cargo run --bin interfaces`

pub mod animals;
pub mod config;
pub mod demo;
pub mod error;
pub mod greeting;
pub mod inspect;

pub use animals::{
    walk, Animal, Cat, CompositeAnimal, CompositeBird, Dog, Eagle, Flier, Runner, Species, Walker,
};
pub use config::DemoConfig;
pub use demo::{run, run_section, Section};
pub use error::DemoError;
pub use greeting::{say_hello, American, Greeter, Russian};
pub use inspect::{classify, describe_all, sample_values, Dynamic, Kind};
