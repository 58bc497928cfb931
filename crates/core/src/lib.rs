//! Core library for foobarqix
//!
//! This crate implements the **Functional Core** of the foobarqix application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The project uses a two-crate architecture:
//!
//! - **`foobarqix_core`** (this crate): Pure transformation functions with zero I/O
//! - **`foobarqix`**: argument parsing, configuration files, logging and output
//!   (the Imperative Shell)
//!
//! Every function in this crate is deterministic: the same raw input, mapping
//! and separator always produce the same output, and nothing is read from or
//! written to the outside world.
//!
//! # Module Organization
//!
//! - [`input`]: validation of the raw value into a positive integer
//! - [`digits`]: decimal digit decomposition
//! - [`mapping`]: the ordered key to label mapping
//! - [`transform`]: the transformations (multipliers, occurrences, digit sum)
//! - [`composer`]: merging transformation outputs into one string
//! - [`policy`]: the built-in FooBarQix and InfQixFoo policies and custom ones
//!
//! # Example Usage
//!
//! ```rust
//! use foobarqix_core::policy::Policy;
//!
//! let output = Policy::FooBarQix.composer().process("15").unwrap();
//! assert_eq!(output, "Foo, Bar, Bar");
//!
//! assert!(foobarqix_core::process("-4").is_err());
//! ```

pub mod composer;
pub mod digits;
pub mod input;
pub mod mapping;
pub mod policy;
pub mod transform;

pub use composer::{Classification, Composer, Part, Placement};
pub use input::{validate, InvalidInput, RawInput};
pub use mapping::{Mapping, MappingError, Rule};
pub use policy::{Policy, PolicyConfig};
pub use transform::{DigitSumDivisibility, Multipliers, Occurrences, Transformation};

/// Classify `raw` with the FooBarQix policy
pub fn process(raw: impl Into<RawInput>) -> Result<String, InvalidInput> {
    Policy::FooBarQix.composer().process(raw)
}
