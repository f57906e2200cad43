use crate::error::{Result, SimError};
use rayon::prelude::*;
use scss::{gates::C64, Circuit, Operation, Subset};

/// Largest register simulated densely (2^26 amplitudes, 1 GiB).
pub const MAX_SIM_QUBITS: usize = 26;

/// Below this width gate application stays on the calling thread.
const PAR_MIN_QUBITS: usize = 12;

/// Dense little-endian state vector: amplitude `x` belongs to the basis state
/// whose qubit `k` holds bit `k` of `x`.
#[derive(Clone, Debug)]
pub struct StateVector {
    num_qubits: usize,
    amps: Vec<C64>,
}

impl StateVector {
    pub fn zero(num_qubits: usize) -> Result<Self> {
        if num_qubits > MAX_SIM_QUBITS {
            return Err(SimError::TooManyQubits {
                num_qubits,
                max: MAX_SIM_QUBITS,
            });
        }
        let mut amps = vec![C64::new(0.0, 0.0); 1 << num_qubits];
        amps[0] = C64::new(1.0, 0.0);
        Ok(Self { num_qubits, amps })
    }

    pub fn from_amplitudes(amps: Vec<C64>) -> Result<Self> {
        let len = amps.len();
        if len == 0 || !len.is_power_of_two() {
            return Err(SimError::NotPowerOfTwo { len });
        }
        let num_qubits = len.trailing_zeros() as usize;
        if num_qubits > MAX_SIM_QUBITS {
            return Err(SimError::TooManyQubits {
                num_qubits,
                max: MAX_SIM_QUBITS,
            });
        }
        Ok(Self { num_qubits, amps })
    }

    /// Runs `circuit` from `|0..0>`.
    pub fn run(circuit: &Circuit) -> Result<Self> {
        let mut psi = Self::zero(circuit.num_qubits)?;
        psi.apply_circuit(circuit)?;
        Ok(psi)
    }

    pub fn apply_circuit(&mut self, circuit: &Circuit) -> Result<()> {
        if circuit.num_qubits != self.num_qubits {
            return Err(SimError::WidthMismatch {
                state: self.num_qubits,
                circuit: circuit.num_qubits,
            });
        }
        for op in &circuit.ops {
            self.apply(op)?;
        }
        Ok(())
    }

    pub fn apply(&mut self, op: &Operation) -> Result<()> {
        let out_of_range = std::iter::once(op.target)
            .chain(op.controls.iter().map(|c| c.qubit))
            .find(|&q| q >= self.num_qubits);
        if let Some(qubit) = out_of_range {
            return Err(SimError::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            });
        }

        let u = op.gate.matrix();
        let (mask, val) = op.control_mask();
        let half = 1usize << op.target;
        let block = half << 1;

        // Each block pairs amplitudes differing only in the target bit.
        let kernel = |(b, chunk): (usize, &mut [C64])| {
            let (lo, hi) = chunk.split_at_mut(half);
            let base = b * block;
            for j in 0..half {
                if ((base + j) as u64) & mask != val {
                    continue;
                }
                let a0 = lo[j];
                let a1 = hi[j];
                lo[j] = u[0][0] * a0 + u[0][1] * a1;
                hi[j] = u[1][0] * a0 + u[1][1] * a1;
            }
        };

        if self.num_qubits >= PAR_MIN_QUBITS {
            self.amps.par_chunks_mut(block).enumerate().for_each(&kernel);
        } else {
            self.amps.chunks_mut(block).enumerate().for_each(&kernel);
        }
        Ok(())
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn amplitudes(&self) -> &[C64] {
        &self.amps
    }

    pub fn probabilities(&self) -> Vec<f64> {
        self.amps.iter().map(|a| a.norm_sqr()).collect()
    }

    pub fn norm(&self) -> f64 {
        self.amps.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt()
    }

    /// `<self|other>`
    pub fn inner(&self, other: &StateVector) -> Result<C64> {
        if self.num_qubits != other.num_qubits {
            return Err(SimError::WidthMismatch {
                state: self.num_qubits,
                circuit: other.num_qubits,
            });
        }
        Ok(self
            .amps
            .iter()
            .zip(&other.amps)
            .map(|(a, b)| a.conj() * b)
            .sum())
    }

    pub fn fidelity(&self, other: &StateVector) -> Result<f64> {
        Ok(self.inner(other)?.norm_sqr())
    }

    /// Basis states with probability above `eps`, ascending.
    pub fn support(&self, eps: f64) -> Vec<u64> {
        self.amps
            .iter()
            .enumerate()
            .filter(|(_, a)| a.norm_sqr() > eps)
            .map(|(x, _)| x as u64)
            .collect()
    }

    /// Total probability of states with `qubit` set.
    pub fn weight_on(&self, qubit: usize) -> f64 {
        self.amps
            .iter()
            .enumerate()
            .filter(|(x, _)| (x >> qubit) & 1 == 1)
            .map(|(_, a)| a.norm_sqr())
            .sum()
    }
}

/// `|C>` on `total_qubits` qubits: equal real amplitudes on the subset,
/// every qubit above the subset's width left at `|0>`.
pub fn ideal_scss(total_qubits: usize, subset: &Subset) -> Result<StateVector> {
    if total_qubits < subset.num_qubits() {
        return Err(SimError::WidthMismatch {
            state: total_qubits,
            circuit: subset.num_qubits(),
        });
    }
    let mut psi = StateVector::zero(total_qubits)?;
    psi.amps[0] = C64::new(0.0, 0.0);
    let a = 1.0 / (subset.cardinality() as f64).sqrt();
    for &x in subset.elements() {
        psi.amps[x as usize] = C64::new(a, 0.0);
    }
    Ok(psi)
}
