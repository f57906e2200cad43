use crate::error::Result;
use crate::statevector::{ideal_scss, StateVector};
use scss::Preparation;
use tracing::{info, warn};

/// Outcome of running a preparation circuit against the ideal subset state.
#[derive(Clone, Debug)]
pub struct Verification {
    pub fidelity: f64,
    /// probability left on the ancilla's `|1>`
    pub ancilla_weight: f64,
    pub support: Vec<u64>,
    pub max_amplitude_error: f64,
    pub state: StateVector,
}

impl Verification {
    pub fn ancilla_clean(&self, tol: f64) -> bool {
        self.ancilla_weight < tol
    }

    pub fn is_exact(&self, tol: f64) -> bool {
        1.0 - self.fidelity < tol && self.max_amplitude_error < tol && self.ancilla_clean(tol)
    }
}

pub fn verify(prep: &Preparation) -> Result<Verification> {
    let psi = StateVector::run(&prep.circuit)?;
    let ideal = ideal_scss(prep.circuit.num_qubits, &prep.subset)?;

    let fidelity = ideal.fidelity(&psi)?;
    let max_amplitude_error = psi
        .amplitudes()
        .iter()
        .zip(ideal.amplitudes())
        .map(|(a, b)| (a - b).norm())
        .fold(0.0, f64::max);
    let ancilla_weight = psi.weight_on(prep.ancilla());
    let support = psi.support(1e-12);

    if 1.0 - fidelity > 1e-9 {
        warn!(fidelity, "prepared state deviates from the target subset state");
    }
    info!(fidelity, ancilla_weight, max_amplitude_error, "verified preparation");

    Ok(Verification {
        fidelity,
        ancilla_weight,
        support,
        max_amplitude_error,
        state: psi,
    })
}
