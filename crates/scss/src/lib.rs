//! Circuits preparing semi-classical subset states: equal-amplitude
//! superpositions over a chosen set of computational basis states.
//!
//! Preparation runs in two stages. A Grover-Rudolph stage loads the uniform
//! superposition over `{0, .., m-1}` ([`grover_rudolph`]); a permutation
//! stage then maps index `i` to the `i`-th subset element, one cycle at a
//! time, with a single ancilla ([`permutation`], [`cycle`]).

pub mod angles;
pub mod circuit;
pub mod cycle;
pub mod error;
pub mod gates;
pub mod grover_rudolph;
pub mod permutation;
pub mod prepare;
pub mod subset;

pub use circuit::{Circuit, CircuitStats, Control, Operation};
pub use error::{Result, ScssError};
pub use prepare::{prepare, Preparation};
pub use subset::{Subset, SubsetFormat, SubsetGenerator};
