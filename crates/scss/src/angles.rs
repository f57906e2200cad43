//! Rotation angles for the Grover-Rudolph uniform superposition over
//! `{0, .., card-1}`.
//!
//! The state is built bit by bit, least significant first. A [`Prefix`]
//! `(level, value)` fixes bits `0..level` to `value`; its rotation on qubit
//! `level` splits the remaining elements by their next bit in proportion to
//! how many lie on each side.

use crate::error::{Result, ScssError};

/// Bits `0..level` of an index, fixed to `value`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Prefix {
    pub level: usize,
    pub value: u64,
}

/// Number of qubits the uniform superposition over `card` values occupies.
pub fn qubits_required(card: usize) -> usize {
    if card <= 1 {
        0
    } else {
        (usize::BITS - (card - 1).leading_zeros()) as usize
    }
}

/// Count of `x < card` with `x ≡ residue (mod modulus)`.
fn count_residue(card: u64, residue: u64, modulus: u64) -> u64 {
    if residue >= card {
        0
    } else {
        (card - 1 - residue) / modulus + 1
    }
}

#[derive(Clone, Debug)]
pub struct GroverRudolphAngles {
    card: usize,
}

impl GroverRudolphAngles {
    pub fn new(card: usize) -> Result<Self> {
        if card == 0 {
            return Err(ScssError::EmptySubset);
        }
        Ok(Self { card })
    }

    pub fn card(&self) -> usize {
        self.card
    }

    /// Every prefix whose split is non-trivial, by level then value.
    /// There are exactly `card - 1` of them.
    pub fn prefixes(&self) -> Vec<Prefix> {
        let card = self.card as u64;
        let mut out = Vec::with_capacity(self.card.saturating_sub(1));
        for level in 0..qubits_required(self.card) {
            let half = 1u64 << level;
            for value in 0..half {
                if value + half < card {
                    out.push(Prefix { level, value });
                }
            }
        }
        out
    }

    /// `(N0, N1)`: elements under `prefix` whose bit `prefix.level` is 0 / 1.
    pub fn partition_counts(&self, prefix: Prefix) -> (u64, u64) {
        let card = self.card as u64;
        let half = 1u64 << prefix.level;
        let modulus = half << 1;
        (
            count_residue(card, prefix.value, modulus),
            count_residue(card, prefix.value + half, modulus),
        )
    }

    pub fn partition_angle(n0: u64, n1: u64) -> Result<f64> {
        let total = n0 + n1;
        if total == 0 {
            return Err(ScssError::EmptyPartition);
        }
        Ok(2.0 * (n0 as f64 / total as f64).sqrt().acos())
    }

    pub fn angles(&self) -> Result<Vec<f64>> {
        self.prefixes()
            .into_iter()
            .map(|p| {
                let (n0, n1) = self.partition_counts(p);
                Self::partition_angle(n0, n1)
            })
            .collect()
    }
}
