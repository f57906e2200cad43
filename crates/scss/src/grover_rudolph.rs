use crate::angles::{qubits_required, GroverRudolphAngles, Prefix};
use crate::circuit::{Circuit, Control, Operation};
use crate::error::{Result, ScssError};
use tracing::debug;

/// Uniform superposition over `{0, .., card-1}` from `|0..0>` using
/// `card - 1` (multi-)controlled Ry rotations.
#[derive(Clone, Debug)]
pub struct GroverRudolphCircuit {
    angles: GroverRudolphAngles,
}

impl GroverRudolphCircuit {
    pub fn new(card: usize) -> Result<Self> {
        Ok(Self {
            angles: GroverRudolphAngles::new(card)?,
        })
    }

    pub fn card(&self) -> usize {
        self.angles.card()
    }

    pub fn rotations(&self) -> Result<Vec<(Prefix, f64)>> {
        let prefixes = self.angles.prefixes();
        let thetas = self.angles.angles()?;
        Ok(prefixes.into_iter().zip(thetas).collect())
    }

    pub fn build(&self, num_qubits: usize) -> Result<Circuit> {
        let mut circuit = Circuit::new(num_qubits);
        self.append_to(&mut circuit)?;
        Ok(circuit)
    }

    /// Rotations act on the low `qubits_required(card)` qubits of `circuit`.
    pub fn append_to(&self, circuit: &mut Circuit) -> Result<()> {
        let required = qubits_required(self.card());
        if circuit.num_qubits < required.max(1) {
            return Err(ScssError::TooFewQubits {
                num_qubits: circuit.num_qubits,
                card: self.card(),
                required,
            });
        }

        for (prefix, theta) in self.rotations()? {
            let controls: Vec<Control> = (0..prefix.level)
                .map(|q| Control {
                    qubit: q,
                    value: (prefix.value >> q) & 1 == 1,
                })
                .collect();
            debug!(
                level = prefix.level,
                value = prefix.value,
                theta,
                "grover-rudolph rotation"
            );
            circuit.push(Operation::mcry(theta, controls, prefix.level))?;
        }
        Ok(())
    }
}
