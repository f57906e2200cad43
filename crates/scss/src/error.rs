//! Error types for subset-state circuit construction.

/// Errors raised while validating inputs or assembling circuits.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ScssError {
    /// Cardinality zero has no uniform superposition.
    #[error("cardinality must be at least 1")]
    EmptySubset,

    #[error("cardinality mismatch: expected {expected}, got {got}")]
    CardinalityMismatch { expected: usize, got: usize },

    #[error("cannot draw {card} distinct elements from {max} basis states")]
    CardinalityTooLarge { card: usize, max: u64 },

    #[error("element {element} at index {index} is out of range for {num_qubits} qubits")]
    ElementOutOfRange {
        element: u64,
        index: usize,
        num_qubits: usize,
    },

    #[error("element {element} appears more than once")]
    DuplicateElement { element: u64 },

    #[error("invalid qubit count {num_qubits}: supported range is 1..={max}")]
    QubitCount { num_qubits: usize, max: usize },

    /// The register is narrower than the Grover-Rudolph stage needs.
    #[error("too few qubits: cardinality {card} needs {required}, got {num_qubits}")]
    TooFewQubits {
        num_qubits: usize,
        card: usize,
        required: usize,
    },

    #[error("subset is defined on {subset} qubits but the register has {register}")]
    WidthMismatch { subset: usize, register: usize },

    #[error("qubit {qubit} is outside a {num_qubits}-qubit circuit")]
    QubitOutOfRange { qubit: usize, num_qubits: usize },

    #[error("qubit {qubit} is both target and control")]
    TargetIsControl { qubit: usize },

    #[error("qubit {qubit} appears more than once among the controls")]
    DuplicateControl { qubit: usize },

    #[error("invalid cycle {cycle:?}: {reason}")]
    InvalidCycle { cycle: Vec<u64>, reason: String },

    #[error("partition counts are both zero")]
    EmptyPartition,

    #[error("cannot parse subset element {token:?}")]
    Parse { token: String },

    #[error("binary element {token:?} is wider than {num_qubits} qubits")]
    TokenTooWide { token: String, num_qubits: usize },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScssError>;
