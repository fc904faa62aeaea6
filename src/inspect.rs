//! Runtime type inspection over a map of arbitrarily typed values.
//!
//! `Dynamic` plays the role of an "any value" slot: it can be downcast back
//! to a concrete type, and it always knows the name of the type it holds,
//! which is what the fallback branch of [`classify`] reports.

use std::any::{type_name, Any};
use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};

pub trait Dynamic: Any {
    fn as_any(&self) -> &dyn Any;
    fn type_name(&self) -> &'static str;
}

impl<T: Any> Dynamic for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }
}

/// Result of the type switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Integer,
    Float64,
    Other(&'static str),
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Integer => write!(f, "is an integer"),
            Kind::Float64 => write!(f, "is a float64"),
            Kind::Other(name) => write!(f, "is {}", name),
        }
    }
}

/// Two explicit cases, everything else falls through to `Other`.
///
/// A `Box<dyn Dynamic>` is itself `Dynamic`, so a boxed slot is unwrapped
/// and classified by what it holds.
pub fn classify(value: &dyn Dynamic) -> Kind {
    let any = value.as_any();
    if let Some(inner) = any.downcast_ref::<Box<dyn Dynamic>>() {
        return classify(&**inner);
    }

    if any.is::<i64>() {
        Kind::Integer
    } else if any.is::<f64>() {
        Kind::Float64
    } else {
        Kind::Other(value.type_name())
    }
}

pub fn sample_values() -> HashMap<String, Box<dyn Dynamic>> {
    let mut m: HashMap<String, Box<dyn Dynamic>> = HashMap::new();
    m.insert("one".to_string(), Box::new(1_i64));
    m.insert("two".to_string(), Box::new(2.0_f64));
    m.insert("three".to_string(), Box::new(true));
    m
}

/// One line per entry, in whatever order the map yields them.
pub fn describe_all(
    values: &HashMap<String, Box<dyn Dynamic>>,
    out: &mut dyn Write,
) -> io::Result<()> {
    for (key, value) in values {
        writeln!(out, "{} {}", key, classify(value.as_ref()))?;
    }
    Ok(())
}
