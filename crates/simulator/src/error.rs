use scss::ScssError;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SimError {
    #[error("{num_qubits} qubits exceeds the dense simulation limit of {max}")]
    TooManyQubits { num_qubits: usize, max: usize },

    #[error("state has {state} qubits but the circuit acts on {circuit}")]
    WidthMismatch { state: usize, circuit: usize },

    #[error("qubit {qubit} is outside a {num_qubits}-qubit state")]
    QubitOutOfRange { qubit: usize, num_qubits: usize },

    #[error("amplitude vector of length {len} is not a power of two")]
    NotPowerOfTwo { len: usize },

    #[error(transparent)]
    Circuit(#[from] ScssError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
