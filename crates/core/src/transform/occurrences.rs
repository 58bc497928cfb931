use super::Transformation;
use crate::digits::digits;
use crate::mapping::Mapping;

/// Emits a label for every digit of the input that is a mapping key, in the
/// order the digits occur.
#[derive(Debug, Clone, Copy, Default)]
pub struct Occurrences;

impl Transformation for Occurrences {
    fn name(&self) -> &'static str {
        "occurrences"
    }

    fn detect(&self, n: u64, mapping: &Mapping, separator: &str) -> String {
        let mut output = String::new();

        for digit in digits(n) {
            if let Some(label) = mapping.label(u64::from(digit)) {
                if !output.is_empty() {
                    output.push_str(separator);
                }
                output.push_str(label);
            }
        }

        output
    }
}
