use crate::error::{Result, SimError};
use crate::statevector::StateVector;
use tn::{mps::MPS, truncation::Truncation};

/// Bond dimensions and entanglement entropies (bits) across every cut
/// `0..=k | k+1..`.
#[derive(Clone, Debug, PartialEq)]
pub struct EntanglementProfile {
    pub bond_dims: Vec<usize>,
    pub entropies: Vec<f64>,
}

impl EntanglementProfile {
    pub fn chi_max(&self) -> usize {
        self.bond_dims.iter().copied().max().unwrap_or(1)
    }

    pub fn max_entropy(&self) -> f64 {
        self.entropies.iter().copied().fold(0.0, f64::max)
    }
}

pub fn entanglement_profile(psi: &StateVector, trunc: Truncation) -> Result<EntanglementProfile> {
    let mps = MPS::from_amplitudes(psi.amplitudes(), trunc).ok_or(SimError::NotPowerOfTwo {
        len: psi.amplitudes().len(),
    })?;
    let bond_dims = mps.bond_dims();
    let entropies = (0..bond_dims.len()).map(|b| mps.entropy(b)).collect();
    Ok(EntanglementProfile {
        bond_dims,
        entropies,
    })
}
