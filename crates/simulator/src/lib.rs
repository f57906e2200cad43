use rng::ONDRng;
use scss::{prepare, SubsetGenerator};
use std::time::Instant;
use tracing::info;

pub mod entanglement;
pub mod error;
pub mod output;
pub mod sampling;
pub mod statevector;
pub mod verify;

pub use entanglement::{entanglement_profile, EntanglementProfile};
pub use error::{Result, SimError};
pub use sampling::sample_counts;
pub use statevector::{ideal_scss, StateVector, MAX_SIM_QUBITS};
pub use verify::{verify, Verification};

#[derive(Clone, Debug)]
pub struct BenchmarkReport {
    pub num_qubits: usize,
    pub card: usize,
    pub ops: usize,
    pub build_secs: f64,
    pub sim_secs: f64,
    pub fidelity: f64,
}

/// Times construction and dense simulation for one seeded random subset.
pub fn benchmark(num_qubits: usize, card: usize, seed: &str) -> Result<BenchmarkReport> {
    let mut rng = ONDRng::new(format!("{}-benchmark", seed).as_bytes());
    let subset = SubsetGenerator::new(num_qubits, card).random(&mut rng)?;

    let start = Instant::now();
    let prep = prepare(num_qubits, &subset)?;
    let build_secs = start.elapsed().as_secs_f64();

    let start = Instant::now();
    let v = verify(&prep)?;
    let sim_secs = start.elapsed().as_secs_f64();

    let report = BenchmarkReport {
        num_qubits,
        card,
        ops: prep.circuit.len(),
        build_secs,
        sim_secs,
        fidelity: v.fidelity,
    };
    info!(
        "Benchmark: n={}, card={}, ops={} → build {:.3} s, simulate {:.3} s",
        report.num_qubits, report.card, report.ops, report.build_secs, report.sim_secs
    );
    Ok(report)
}
