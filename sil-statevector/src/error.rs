//! Tipos de erro para sil-statevector

use thiserror::Error;

/// Resultado customizado para operações no vetor de estado
pub type QuantumResult<T> = Result<T, QuantumError>;

/// Erros de uso do simulador
///
/// Todos são erros do chamador: nenhum é recuperado internamente e a
/// validação acontece antes de qualquer mutação do estado.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantumError {
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Shape mismatch: expected {expected}x{expected} operator, got {actual}")]
    ShapeMismatch { expected: usize, actual: String },

    #[error("Qubit index {index} out of range for {qubits} qubits")]
    IndexOutOfRange { index: usize, qubits: usize },

    #[error("Control and target must differ, both are qubit {0}")]
    IdenticalIndices(usize),

    #[error("Operator is not unitary: max |U·U† - I| = {deviation}")]
    NotUnitary { deviation: f64 },

    #[error("Measurement draw must lie in [0, 1), got {0}")]
    InvalidDraw(f64),
}

impl QuantumError {
    /// Atalho para `ShapeMismatch` de matrizes quadradas
    pub(crate) fn shape(expected: usize, rows: usize, cols: usize) -> Self {
        Self::ShapeMismatch {
            expected,
            actual: format!("{rows}x{cols}"),
        }
    }
}
