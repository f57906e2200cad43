//! Target subsets: validated, ordered sets of basis indices.

use crate::error::{Result, ScssError};
use rng::ONDRng;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Widest register a subset may address (elements are stored as `u64`).
pub const MAX_QUBITS: usize = 63;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubsetFormat {
    Decimal,
    Binary,
}

impl FromStr for SubsetFormat {
    type Err = ScssError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "d" | "decimal" => Ok(Self::Decimal),
            "b" | "binary" => Ok(Self::Binary),
            _ => Err(ScssError::Parse {
                token: s.to_string(),
            }),
        }
    }
}

/// Distinct basis indices on `num_qubits` qubits, kept in the given order:
/// element `i` is the image of index `i` of the Grover-Rudolph register.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subset {
    num_qubits: usize,
    elements: Vec<u64>,
}

impl Subset {
    pub fn new(num_qubits: usize, elements: Vec<u64>) -> Result<Self> {
        if num_qubits == 0 || num_qubits > MAX_QUBITS {
            return Err(ScssError::QubitCount {
                num_qubits,
                max: MAX_QUBITS,
            });
        }
        if elements.is_empty() {
            return Err(ScssError::EmptySubset);
        }

        let bound = 1u64 << num_qubits;
        let mut seen = HashSet::with_capacity(elements.len());
        for (index, &element) in elements.iter().enumerate() {
            if element >= bound {
                return Err(ScssError::ElementOutOfRange {
                    element,
                    index,
                    num_qubits,
                });
            }
            if !seen.insert(element) {
                return Err(ScssError::DuplicateElement { element });
            }
        }

        Ok(Self {
            num_qubits,
            elements,
        })
    }

    pub fn with_cardinality(num_qubits: usize, card: usize, elements: Vec<u64>) -> Result<Self> {
        if elements.len() != card {
            return Err(ScssError::CardinalityMismatch {
                expected: card,
                got: elements.len(),
            });
        }
        Self::new(num_qubits, elements)
    }

    /// Comma- or whitespace-separated list. Binary tokens may carry a `0b`
    /// prefix, are read MSB first and have at most `num_qubits` digits.
    pub fn parse(num_qubits: usize, text: &str, format: SubsetFormat) -> Result<Self> {
        let elements = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| parse_element(t, format, num_qubits))
            .collect::<Result<Vec<u64>>>()?;
        Self::new(num_qubits, elements)
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn cardinality(&self) -> usize {
        self.elements.len()
    }

    pub fn elements(&self) -> &[u64] {
        &self.elements
    }

    pub fn contains(&self, x: u64) -> bool {
        self.elements.contains(&x)
    }

    pub fn to_binary_strings(&self) -> Vec<String> {
        self.elements
            .iter()
            .map(|x| format!("{:0width$b}", x, width = self.num_qubits))
            .collect()
    }
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.elements.iter().map(u64::to_string).collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}

fn parse_element(token: &str, format: SubsetFormat, num_qubits: usize) -> Result<u64> {
    let parsed = match format {
        SubsetFormat::Decimal => token.parse::<u64>().ok(),
        SubsetFormat::Binary => {
            let digits = token.strip_prefix("0b").unwrap_or(token);
            if digits.len() > num_qubits {
                return Err(ScssError::TokenTooWide {
                    token: token.to_string(),
                    num_qubits,
                });
            }
            u64::from_str_radix(digits, 2).ok()
        }
    };
    parsed.ok_or_else(|| ScssError::Parse {
        token: token.to_string(),
    })
}

/// Produces target subsets of a fixed size on a fixed register.
#[derive(Clone, Copy, Debug)]
pub struct SubsetGenerator {
    pub num_qubits: usize,
    pub card: usize,
}

impl SubsetGenerator {
    pub fn new(num_qubits: usize, card: usize) -> Self {
        Self { num_qubits, card }
    }

    /// `[1, 2, 4, .., 2^(n-1)]`, the weight-one strings. Ignores `card`.
    pub fn powers_of_two(&self) -> Result<Subset> {
        let elements = (0..self.num_qubits).map(|i| 1u64 << i).collect();
        Subset::new(self.num_qubits, elements)
    }

    /// `card` distinct indices drawn uniformly, ascending.
    pub fn random(&self, rng: &mut ONDRng) -> Result<Subset> {
        if self.num_qubits == 0 || self.num_qubits > MAX_QUBITS {
            return Err(ScssError::QubitCount {
                num_qubits: self.num_qubits,
                max: MAX_QUBITS,
            });
        }
        let bound = 1u64 << self.num_qubits;
        if self.card as u64 > bound {
            return Err(ScssError::CardinalityTooLarge {
                card: self.card,
                max: bound,
            });
        }
        Subset::new(self.num_qubits, rng.sample_distinct(self.card, bound))
    }
}
