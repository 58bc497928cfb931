use super::Transformation;
use crate::digits::digit_sum;
use crate::mapping::{Mapping, MappingError};

/// Checks whether the sum of the input's digits is divisible by `divisor`
///
/// When it is, the output is the mapping's label for `divisor`, or the
/// divisor itself when the mapping has no such key. The separator is unused.
#[derive(Debug, Clone, Copy)]
pub struct DigitSumDivisibility {
    divisor: u64,
}

impl DigitSumDivisibility {
    pub fn new(divisor: u64) -> Result<Self, MappingError> {
        if divisor == 0 {
            return Err(MappingError::ZeroDivisor);
        }
        Ok(Self { divisor })
    }

    pub(crate) fn from_trusted(divisor: u64) -> Self {
        debug_assert!(divisor > 0);
        Self { divisor }
    }
}

impl Transformation for DigitSumDivisibility {
    fn name(&self) -> &'static str {
        "digit-sum"
    }

    fn detect(&self, n: u64, mapping: &Mapping, _separator: &str) -> String {
        if digit_sum(n) % self.divisor != 0 {
            return String::new();
        }

        mapping
            .label(self.divisor)
            .map(str::to_string)
            .unwrap_or_else(|| self.divisor.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inf_qix_foo() -> Mapping {
        Mapping::new([(8, "Inf"), (7, "Qix"), (3, "Foo")]).unwrap()
    }

    #[test]
    fn test_divisible_sum_uses_label() {
        let detector = DigitSumDivisibility::new(8).unwrap();
        assert_eq!(detector.detect(62, &inf_qix_foo(), "; "), "Inf");
        assert_eq!(detector.detect(800, &inf_qix_foo(), "; "), "Inf");
    }

    #[test]
    fn test_non_divisible_sum_is_empty() {
        let detector = DigitSumDivisibility::new(8).unwrap();
        assert_eq!(detector.detect(10, &inf_qix_foo(), "; "), "");
    }

    #[test]
    fn test_missing_label_falls_back_to_divisor() {
        let detector = DigitSumDivisibility::new(9).unwrap();
        assert_eq!(detector.detect(18, &inf_qix_foo(), "; "), "9");
    }

    #[test]
    fn test_separator_is_ignored() {
        let detector = DigitSumDivisibility::new(8).unwrap();
        assert_eq!(
            detector.detect(62, &inf_qix_foo(), "; "),
            detector.detect(62, &inf_qix_foo(), "")
        );
    }

    #[test]
    fn test_zero_divisor_rejected() {
        assert_eq!(
            DigitSumDivisibility::new(0).unwrap_err(),
            MappingError::ZeroDivisor
        );
    }
}
