//! Multiplier combination search
//!
//! Finds the largest subset of mapping keys whose product divides the input.
//! Subsets are tried from the largest size down, and within one size in
//! lexicographic order of key positions, so the first hit is both maximal and
//! deterministic.

use super::Transformation;
use crate::mapping::Mapping;

#[derive(Debug, Clone, Copy, Default)]
pub struct Multipliers;

impl Transformation for Multipliers {
    fn name(&self) -> &'static str {
        "multipliers"
    }

    /// Labels of the largest dividing key subset, or `n` itself when none divides
    fn detect(&self, n: u64, mapping: &Mapping, separator: &str) -> String {
        let keys: Vec<u64> = mapping.keys().collect();

        for size in (1..=keys.len()).rev() {
            for combination in Combinations::new(keys.len(), size) {
                let divides = product(&keys, &combination).is_some_and(|p| n % p == 0);

                if divides {
                    // Positions are ascending, so labels come out in mapping order
                    return mapping
                        .iter()
                        .enumerate()
                        .filter(|(position, _)| combination.contains(position))
                        .map(|(_, (_, label))| label)
                        .collect::<Vec<_>>()
                        .join(separator);
                }
            }
        }

        n.to_string()
    }
}

/// Product of the keys at `positions`; `None` when it overflows, which also
/// means it cannot divide any `u64`.
fn product(keys: &[u64], positions: &[usize]) -> Option<u64> {
    positions
        .iter()
        .try_fold(1u64, |acc, &position| acc.checked_mul(keys[position]))
}

/// Lexicographic `k`-combinations of the positions `0..n`
#[derive(Debug)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let current = self.indices.clone();
        let k = self.indices.len();

        // Rightmost position that can still move forward
        match (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(current)
    }
}
