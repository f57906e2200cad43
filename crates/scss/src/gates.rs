use num_complex::Complex64;
use serde::{Deserialize, Serialize};

pub type C64 = Complex64;

/// The two gate kinds the preparation circuits are built from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "theta")]
pub enum Gate {
    X,
    Ry(f64),
}

impl Gate {
    pub fn matrix(&self) -> [[C64; 2]; 2] {
        match *self {
            Gate::X => pauli_x(),
            Gate::Ry(theta) => ry(theta),
        }
    }

    /// Whether the gate maps basis states to basis states.
    pub fn is_classical(&self) -> bool {
        matches!(self, Gate::X)
    }
}

pub fn pauli_x() -> [[C64; 2]; 2] {
    let z = C64::new(0.0, 0.0);
    let o = C64::new(1.0, 0.0);
    [[z, o], [o, z]]
}

/// Ry(θ)|0> = cos(θ/2)|0> + sin(θ/2)|1>
pub fn ry(theta: f64) -> [[C64; 2]; 2] {
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    [
        [C64::new(c, 0.0), C64::new(-s, 0.0)],
        [C64::new(s, 0.0), C64::new(c, 0.0)],
    ]
}
