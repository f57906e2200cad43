//! Circuits for a single cyclic basis permutation, using one ancilla.
//!
//! For a cycle `(x0 x1 .. x(l-1))` on `n` work qubits, each step `k` marks
//! `|x_k>` on the ancilla with an `n`-controlled X and then, under the
//! ancilla, flips the bits in which `x_k` and `x_(k+1)` differ. The state
//! that just arrived at `x_(k+1)` is unmarked by the next step's control,
//! and a final marker on `x0` clears the ancilla for the wrap-around.

use crate::circuit::{Circuit, Control, Operation};
use crate::error::{Result, ScssError};
use std::collections::HashSet;
use tracing::debug;

/// Work qubits whose bit differs between `from` and `to`.
pub fn gray_code_flips(from: u64, to: u64, num_qubits: usize) -> Vec<usize> {
    let diff = from ^ to;
    (0..num_qubits).filter(|&q| (diff >> q) & 1 == 1).collect()
}

/// Controls that fire exactly on basis state `x` of the work register.
fn basis_controls(x: u64, num_qubits: usize) -> Vec<Control> {
    (0..num_qubits)
        .map(|q| Control {
            qubit: q,
            value: (x >> q) & 1 == 1,
        })
        .collect()
}

#[derive(Clone, Debug)]
pub struct CyclePermutation {
    num_qubits: usize,
    cycle: Vec<u64>,
}

impl CyclePermutation {
    pub fn new(num_qubits: usize, cycle: Vec<u64>) -> Result<Self> {
        let invalid = |reason: &str| ScssError::InvalidCycle {
            cycle: cycle.clone(),
            reason: reason.to_string(),
        };
        if cycle.len() < 2 {
            return Err(invalid("needs at least two elements"));
        }
        if num_qubits >= 64 || cycle.iter().any(|&x| x >> num_qubits != 0) {
            return Err(invalid("element out of range for the register"));
        }
        let distinct: HashSet<u64> = cycle.iter().copied().collect();
        if distinct.len() != cycle.len() {
            return Err(invalid("repeated element"));
        }
        Ok(Self { num_qubits, cycle })
    }

    pub fn ancilla(&self) -> usize {
        self.num_qubits
    }

    pub fn cycle(&self) -> &[u64] {
        &self.cycle
    }

    /// Appends the cycle onto work qubits `0..n` and ancilla `n`.
    pub fn append_to(&self, circuit: &mut Circuit) -> Result<()> {
        if circuit.num_qubits < self.num_qubits + 1 {
            return Err(ScssError::QubitOutOfRange {
                qubit: self.ancilla(),
                num_qubits: circuit.num_qubits,
            });
        }
        let n = self.num_qubits;
        let anc = self.ancilla();
        let l = self.cycle.len();

        for k in 0..l {
            let from = self.cycle[k];
            let to = self.cycle[(k + 1) % l];
            circuit.push(Operation::mcx(basis_controls(from, n), anc))?;
            for q in gray_code_flips(from, to, n) {
                circuit.push(Operation::cx(anc, q))?;
            }
        }
        circuit.push(Operation::mcx(basis_controls(self.cycle[0], n), anc))?;

        debug!(cycle = ?self.cycle, "appended cycle permutation");
        Ok(())
    }
}

/// Product of `cycles` on `num_qubits` work qubits plus one ancilla.
pub fn permutation_circuit(num_qubits: usize, cycles: &[Vec<u64>]) -> Result<Circuit> {
    let mut circuit = Circuit::new(num_qubits + 1);
    for cycle in cycles {
        CyclePermutation::new(num_qubits, cycle.clone())?.append_to(&mut circuit)?;
    }
    Ok(circuit)
}
