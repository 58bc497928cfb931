//! Composition of transformations
//!
//! A [`Composer`] runs an ordered list of transformations against one
//! validated integer and merges their outputs:
//!
//! - **joined** transformations: empty results are dropped, the rest are
//!   joined with the separator;
//! - **appended** transformations: their results are concatenated directly
//!   onto the joined part, without a separator.
//!
//! FooBarQix only has joined transformations. InfQixFoo appends the digit sum
//! check, which is why its last label is glued to the previous one.

use serde::Serialize;

use crate::input::{validate, InvalidInput, RawInput};
use crate::mapping::Mapping;
use crate::transform::Transformation;

/// How a transformation's result is merged into the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Joined,
    Appended,
}

/// Result of a single transformation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Part {
    pub transformation: &'static str,
    pub placement: Placement,
    pub output: String,
}

/// Full outcome of one invocation: every part plus the merged output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub input: u64,
    pub separator: String,
    pub parts: Vec<Part>,
    pub output: String,
}

/// A mapping, a separator and the transformations to run against them
#[derive(Debug)]
pub struct Composer {
    mapping: Mapping,
    separator: String,
    joined: Vec<Box<dyn Transformation>>,
    appended: Vec<Box<dyn Transformation>>,
}

impl Composer {
    pub fn new(mapping: Mapping, separator: impl Into<String>) -> Self {
        Self {
            mapping,
            separator: separator.into(),
            joined: Vec::new(),
            appended: Vec::new(),
        }
    }

    /// Add a transformation whose non-empty result is separator-joined
    pub fn join(mut self, transformation: impl Transformation + 'static) -> Self {
        self.joined.push(Box::new(transformation));
        self
    }

    /// Add a transformation whose result is appended without a separator
    pub fn append(mut self, transformation: impl Transformation + 'static) -> Self {
        self.appended.push(Box::new(transformation));
        self
    }

    /// Validate `raw` and return the composed output
    pub fn process(&self, raw: impl Into<RawInput>) -> Result<String, InvalidInput> {
        self.classify(raw).map(|classification| classification.output)
    }

    /// Validate `raw` and return the composed output with every part
    pub fn classify(&self, raw: impl Into<RawInput>) -> Result<Classification, InvalidInput> {
        let n = validate(raw)?;
        Ok(self.compose(n))
    }

    /// Run every transformation against an already validated integer
    pub fn compose(&self, n: u64) -> Classification {
        let run = |transformation: &dyn Transformation, placement: Placement| Part {
            transformation: transformation.name(),
            placement,
            output: transformation.detect(n, &self.mapping, &self.separator),
        };

        let parts: Vec<Part> = self
            .joined
            .iter()
            .map(|t| run(t.as_ref(), Placement::Joined))
            .chain(
                self.appended
                    .iter()
                    .map(|t| run(t.as_ref(), Placement::Appended)),
            )
            .collect();

        let mut output = parts
            .iter()
            .filter(|part| part.placement == Placement::Joined && !part.output.is_empty())
            .map(|part| part.output.as_str())
            .collect::<Vec<_>>()
            .join(self.separator.as_str());

        for part in parts.iter().filter(|p| p.placement == Placement::Appended) {
            output.push_str(&part.output);
        }

        Classification {
            input: n,
            separator: self.separator.clone(),
            parts,
            output,
        }
    }
}
