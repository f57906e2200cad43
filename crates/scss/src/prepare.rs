use crate::angles::GroverRudolphAngles;
use crate::circuit::Circuit;
use crate::cycle::CyclePermutation;
use crate::error::{Result, ScssError};
use crate::grover_rudolph::GroverRudolphCircuit;
use crate::permutation::SubsetPermutation;
use crate::subset::Subset;
use tracing::{debug, info};

/// Everything produced while building the preparation circuit for one subset.
#[derive(Clone, Debug)]
pub struct Preparation {
    pub subset: Subset,
    pub angles: Vec<f64>,
    pub mapping: Vec<(u64, u64)>,
    pub cycles: Vec<Vec<u64>>,
    /// Work qubits `0..n`, ancilla `n`.
    pub circuit: Circuit,
    /// Number of leading operations belonging to the Grover-Rudolph stage.
    pub gr_ops: usize,
}

impl Preparation {
    pub fn num_qubits(&self) -> usize {
        self.subset.num_qubits()
    }

    pub fn ancilla(&self) -> usize {
        self.num_qubits()
    }

    pub fn grover_rudolph_stage(&self) -> Circuit {
        Circuit {
            num_qubits: self.circuit.num_qubits,
            ops: self.circuit.ops[..self.gr_ops].to_vec(),
        }
    }

    pub fn permutation_stage(&self) -> Circuit {
        Circuit {
            num_qubits: self.circuit.num_qubits,
            ops: self.circuit.ops[self.gr_ops..].to_vec(),
        }
    }

    pub fn summary(&self) -> String {
        let stats = self.circuit.stats();
        format!(
            "n={} card={} rotations={} cycles={} ops={} (controlled={}, max_controls={})",
            self.num_qubits(),
            self.subset.cardinality(),
            self.angles.len(),
            self.cycles.len(),
            stats.total,
            stats.controlled,
            stats.max_controls,
        )
    }
}

/// Builds the circuit taking `|0..0>|0>` to the uniform superposition over
/// `subset` with the ancilla returned to `|0>`.
pub fn prepare(num_qubits: usize, subset: &Subset) -> Result<Preparation> {
    if subset.num_qubits() != num_qubits {
        return Err(ScssError::WidthMismatch {
            subset: subset.num_qubits(),
            register: num_qubits,
        });
    }
    let card = subset.cardinality();

    let angles = GroverRudolphAngles::new(card)?.angles()?;
    debug!(card, ?angles, "grover-rudolph angles");

    let permutation = SubsetPermutation::new(subset);
    let mapping = permutation.mapping();
    debug!(mapping = %permutation, "index to subset mapping");

    let cycles = permutation.cycles();
    debug!(?cycles, "permutation cycles");

    let mut circuit = Circuit::new(num_qubits + 1);
    GroverRudolphCircuit::new(card)?.append_to(&mut circuit)?;
    let gr_ops = circuit.len();

    for cycle in &cycles {
        CyclePermutation::new(num_qubits, cycle.clone())?.append_to(&mut circuit)?;
    }

    let prep = Preparation {
        subset: subset.clone(),
        angles,
        mapping,
        cycles,
        circuit,
        gr_ops,
    };
    info!(
        gr_ops = prep.gr_ops,
        permutation_ops = prep.circuit.len() - prep.gr_ops,
        "prepared {}",
        prep.summary()
    );
    Ok(prep)
}
