//! Flat gate-list circuit model.

use crate::error::{Result, ScssError};
use crate::gates::Gate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Widest circuit whose basis states fit in a `u64`.
pub const MAX_CIRCUIT_QUBITS: usize = 64;

/// A control line: the operation fires only when `qubit` reads `value`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    pub qubit: usize,
    pub value: bool,
}

impl Control {
    pub fn on(qubit: usize) -> Self {
        Self { qubit, value: true }
    }

    pub fn off(qubit: usize) -> Self {
        Self { qubit, value: false }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub gate: Gate,
    pub target: usize,
    pub controls: Vec<Control>,
}

impl Operation {
    pub fn x(target: usize) -> Self {
        Self {
            gate: Gate::X,
            target,
            controls: Vec::new(),
        }
    }

    pub fn cx(control: usize, target: usize) -> Self {
        Self {
            gate: Gate::X,
            target,
            controls: vec![Control::on(control)],
        }
    }

    pub fn mcx(controls: Vec<Control>, target: usize) -> Self {
        Self {
            gate: Gate::X,
            target,
            controls,
        }
    }

    pub fn ry(theta: f64, target: usize) -> Self {
        Self {
            gate: Gate::Ry(theta),
            target,
            controls: Vec::new(),
        }
    }

    pub fn mcry(theta: f64, controls: Vec<Control>, target: usize) -> Self {
        Self {
            gate: Gate::Ry(theta),
            target,
            controls,
        }
    }

    /// Whether every qubit touched is addressable in a `u64` basis index.
    pub fn fits_u64(&self) -> bool {
        self.target < MAX_CIRCUIT_QUBITS
            && self.controls.iter().all(|c| c.qubit < MAX_CIRCUIT_QUBITS)
    }

    /// `(mask, value)` such that the operation fires on basis state `x`
    /// iff `x & mask == value`. Requires [`Operation::fits_u64`].
    pub fn control_mask(&self) -> (u64, u64) {
        self.controls.iter().fold((0, 0), |(mask, val), c| {
            let bit = 1u64 << c.qubit;
            (mask | bit, if c.value { val | bit } else { val })
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.gate {
            Gate::X => write!(f, "X q{}", self.target)?,
            Gate::Ry(theta) => write!(f, "Ry({:.6}) q{}", theta, self.target)?,
        }
        if !self.controls.is_empty() {
            write!(f, " |")?;
            for c in &self.controls {
                write!(f, " q{}={}", c.qubit, c.value as u8)?;
            }
        }
        Ok(())
    }
}

/// Gate counts for a circuit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CircuitStats {
    pub total: usize,
    pub single_qubit: usize,
    pub controlled: usize,
    pub max_controls: usize,
    pub x_gates: usize,
    pub ry_gates: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    pub num_qubits: usize,
    pub ops: Vec<Operation>,
}

impl Circuit {
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            ops: Vec::new(),
        }
    }

    pub fn push(&mut self, op: Operation) -> Result<()> {
        if self.num_qubits > MAX_CIRCUIT_QUBITS {
            return Err(ScssError::QubitCount {
                num_qubits: self.num_qubits,
                max: MAX_CIRCUIT_QUBITS,
            });
        }
        if op.target >= self.num_qubits {
            return Err(ScssError::QubitOutOfRange {
                qubit: op.target,
                num_qubits: self.num_qubits,
            });
        }
        let mut seen = HashSet::with_capacity(op.controls.len());
        for c in &op.controls {
            if c.qubit >= self.num_qubits {
                return Err(ScssError::QubitOutOfRange {
                    qubit: c.qubit,
                    num_qubits: self.num_qubits,
                });
            }
            if c.qubit == op.target {
                return Err(ScssError::TargetIsControl { qubit: c.qubit });
            }
            if !seen.insert(c.qubit) {
                return Err(ScssError::DuplicateControl { qubit: c.qubit });
            }
        }
        self.ops.push(op);
        Ok(())
    }

    /// Appends every operation of `other`, which may be narrower.
    pub fn append(&mut self, other: &Circuit) -> Result<()> {
        for op in &other.ops {
            self.push(op.clone())?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn stats(&self) -> CircuitStats {
        let mut s = CircuitStats {
            total: self.ops.len(),
            ..CircuitStats::default()
        };
        for op in &self.ops {
            if op.controls.is_empty() {
                s.single_qubit += 1;
            } else {
                s.controlled += 1;
            }
            s.max_controls = s.max_controls.max(op.controls.len());
            match op.gate {
                Gate::X => s.x_gates += 1,
                Gate::Ry(_) => s.ry_gates += 1,
            }
        }
        s
    }

    /// Runs the circuit on a single basis state. `None` if any gate is not a
    /// basis permutation or touches a qubit beyond bit 63.
    pub fn permute_basis(&self, mut x: u64) -> Option<u64> {
        for op in &self.ops {
            if !op.gate.is_classical() || !op.fits_u64() {
                return None;
            }
            let (mask, val) = op.control_mask();
            if x & mask == val {
                x ^= 1 << op.target;
            }
        }
        Some(x)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "circuit on {} qubits, {} ops", self.num_qubits, self.ops.len())?;
        for (i, op) in self.ops.iter().enumerate() {
            writeln!(f, "{:>5}: {}", i, op)?;
        }
        Ok(())
    }
}
