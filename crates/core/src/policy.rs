//! Built-in and configurable policies
//!
//! A policy is a mapping, a separator and the transformations composed over
//! them. Two policies ship built in:
//!
//! | Policy    | Mapping              | Separator | Digit sum divisor |
//! |-----------|----------------------|-----------|-------------------|
//! | FooBarQix | 3 Foo, 5 Bar, 7 Qix  | `", "`    | none              |
//! | InfQixFoo | 8 Inf, 7 Qix, 3 Foo  | `"; "`    | 8 (appended)      |
//!
//! Anything else can be described with a [`PolicyConfig`].

use serde::{Deserialize, Serialize};

use crate::composer::Composer;
use crate::mapping::{Mapping, MappingError, Rule};
use crate::transform::{DigitSumDivisibility, Multipliers, Occurrences};

pub const DEFAULT_SEPARATOR: &str = ", ";

/// The policies that ship with the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    FooBarQix,
    InfQixFoo,
}

impl Policy {
    pub fn config(self) -> PolicyConfig {
        match self {
            Policy::FooBarQix => PolicyConfig {
                separator: ", ".to_string(),
                divisor: None,
                rules: builtin(&[(3, "Foo"), (5, "Bar"), (7, "Qix")]),
            },
            Policy::InfQixFoo => PolicyConfig {
                separator: "; ".to_string(),
                divisor: Some(8),
                rules: builtin(&[(8, "Inf"), (7, "Qix"), (3, "Foo")]),
            },
        }
    }

    pub fn composer(self) -> Composer {
        let config = self.config();
        let mapping = Mapping::from_trusted(config.rules);
        let composer = Composer::new(mapping, config.separator)
            .join(Multipliers)
            .join(Occurrences);

        match config.divisor {
            Some(divisor) => composer.append(DigitSumDivisibility::from_trusted(divisor)),
            None => composer,
        }
    }
}

fn builtin(pairs: &[(u64, &str)]) -> Vec<Rule> {
    pairs
        .iter()
        .map(|(key, label)| Rule {
            key: *key,
            label: label.to_string(),
        })
        .collect()
}

/// Description of a policy, as read from a TOML file or built from flags
///
/// ```toml
/// separator = "; "
/// divisor = 8
///
/// [[rules]]
/// key = 8
/// label = "Inf"
/// ```
///
/// Without a `divisor` the policy joins multipliers and occurrences, like
/// FooBarQix. With one, the digit sum check is appended, like InfQixFoo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    #[serde(default = "default_separator")]
    pub separator: String,

    #[serde(default)]
    pub divisor: Option<u64>,

    #[serde(default)]
    pub rules: Vec<Rule>,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl PolicyConfig {
    /// Build the composer, checking the mapping and divisor invariants
    pub fn composer(&self) -> Result<Composer, MappingError> {
        let mapping = Mapping::try_from(self.rules.clone())?;
        let composer = Composer::new(mapping, self.separator.clone())
            .join(Multipliers)
            .join(Occurrences);

        Ok(match self.divisor {
            Some(divisor) => composer.append(DigitSumDivisibility::new(divisor)?),
            None => composer,
        })
    }
}
