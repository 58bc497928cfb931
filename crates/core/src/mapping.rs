//! Ordered key to label mapping
//!
//! The mapping drives every transformation: keys are divisors for the
//! multiplier search and digits for the occurrence scan, labels are what ends
//! up in the output. Order matters both for iteration and for the order in
//! which matched labels are joined.

use serde::{Deserialize, Serialize};

/// Error type for building a mapping
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error("Mapping keys must be positive integers")]
    ZeroKey,

    #[error("Label for key {0} must not be empty")]
    EmptyLabel(u64),

    #[error("Duplicate mapping key: {0}")]
    DuplicateKey(u64),

    #[error("Divisor must be a positive integer")]
    ZeroDivisor,
}

/// A single `key -> label` entry, as written in configuration files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rule {
    pub key: u64,
    pub label: String,
}

/// Ordered mapping from positive integer keys to non-empty labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping(Vec<(u64, String)>);

impl Mapping {
    /// Build a mapping, keeping the given order
    pub fn new<I, S>(entries: I) -> Result<Self, MappingError>
    where
        I: IntoIterator<Item = (u64, S)>,
        S: Into<String>,
    {
        let mut pairs: Vec<(u64, String)> = Vec::new();

        for (key, label) in entries {
            let label = label.into();

            if key == 0 {
                return Err(MappingError::ZeroKey);
            }
            if label.is_empty() {
                return Err(MappingError::EmptyLabel(key));
            }
            if pairs.iter().any(|(existing, _)| *existing == key) {
                return Err(MappingError::DuplicateKey(key));
            }

            pairs.push((key, label));
        }

        Ok(Mapping(pairs))
    }

    /// Build a mapping from rules known to satisfy the invariants
    pub(crate) fn from_trusted(rules: Vec<Rule>) -> Self {
        debug_assert!(Mapping::try_from(rules.clone()).is_ok());
        Mapping(rules.into_iter().map(|rule| (rule.key, rule.label)).collect())
    }

    /// Keys in mapping order
    pub fn keys(&self) -> impl Iterator<Item = u64> + '_ {
        self.0.iter().map(|(key, _)| *key)
    }

    /// Label for `key`, if the key is present
    pub fn label(&self, key: u64) -> Option<&str> {
        self.0
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, label)| label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &str)> + '_ {
        self.0.iter().map(|(key, label)| (*key, label.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<Rule>> for Mapping {
    type Error = MappingError;

    fn try_from(rules: Vec<Rule>) -> Result<Self, Self::Error> {
        Mapping::new(rules.into_iter().map(|rule| (rule.key, rule.label)))
    }
}
