//! Input validation
//!
//! Pure functions for turning the raw value handed over by the shell into the
//! positive integer every transformation works on. Validation runs exactly
//! once per invocation, before any detector sees the value.

/// Raised when the raw value is not a positive integer.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("\"{raw}\" is not a positive integer!")]
pub struct InvalidInput {
    /// The raw value as it was received
    pub raw: String,
}

/// A value as received from the outside world, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    Text(String),
    Integer(i128),
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        RawInput::Text(value.to_string())
    }
}

impl From<String> for RawInput {
    fn from(value: String) -> Self {
        RawInput::Text(value)
    }
}

macro_rules! raw_input_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RawInput {
                fn from(value: $ty) -> Self {
                    RawInput::Integer(value as i128)
                }
            }
        )*
    };
}

raw_input_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl std::fmt::Display for RawInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawInput::Text(text) => write!(f, "{}", text),
            RawInput::Integer(value) => write!(f, "{}", value),
        }
    }
}

/// Validate a raw value into a positive integer
///
/// Strings must consist of ASCII digits only: no sign, no whitespace, no
/// separators. Leading zeros are accepted ("007" is 7). Zero, negative values
/// and values that do not fit into a `u64` are rejected.
pub fn validate(raw: impl Into<RawInput>) -> Result<u64, InvalidInput> {
    let raw = raw.into();

    let value = match &raw {
        RawInput::Text(text) => parse_numeral(text),
        RawInput::Integer(value) => u64::try_from(*value).ok(),
    };

    match value {
        Some(n) if n > 0 => Ok(n),
        _ => Err(InvalidInput {
            raw: raw.to_string(),
        }),
    }
}

fn parse_numeral(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    text.parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // string input
    // ============================================================================

    #[test]
    fn test_validate_plain_numeral() {
        assert_eq!(validate("42"), Ok(42));
    }

    #[test]
    fn test_validate_leading_zeros() {
        assert_eq!(validate("007"), Ok(7));
    }

    #[test]
    fn test_validate_rejects_negative() {
        let err = validate("-4").unwrap_err();
        assert_eq!(err.raw, "-4");
        assert_eq!(err.to_string(), "\"-4\" is not a positive integer!");
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert!(validate("0").is_err());
        assert!(validate("000").is_err());
    }

    #[test]
    fn test_validate_rejects_non_numeric() {
        assert!(validate("abc").is_err());
        assert!(validate("12abc").is_err());
        assert!(validate("1.5").is_err());
    }

    #[test]
    fn test_validate_rejects_sign_and_whitespace() {
        assert!(validate("+4").is_err());
        assert!(validate(" 4").is_err());
        assert!(validate("4\n").is_err());
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert!(validate("").is_err());
    }

    #[test]
    fn test_validate_rejects_overflow() {
        assert!(validate("18446744073709551616").is_err());
        assert_eq!(validate("18446744073709551615"), Ok(u64::MAX));
    }

    // ============================================================================
    // integer input
    // ============================================================================

    #[test]
    fn test_validate_positive_integer() {
        assert_eq!(validate(15_i32), Ok(15));
        assert_eq!(validate(15_u64), Ok(15));
    }

    #[test]
    fn test_validate_rejects_non_positive_integer() {
        assert_eq!(
            validate(0_i64),
            Err(InvalidInput {
                raw: "0".to_string()
            })
        );
        assert!(validate(-4_i32).is_err());
    }
}
