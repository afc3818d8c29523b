//! Error conditions for Pauli-string construction and algebra.
//!
//! Every variant is a programming-contract violation surfaced synchronously
//! to the immediate caller; nothing is caught or retried internally, and no
//! operation returns a partial result on error.

use thiserror::Error;

/// Errors arising from Pauli-string construction and algebra.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PauliError {
    /// Operand vectors of unequal length.
    #[error("length mismatch: expected {expected}, got {found}")]
    LengthMismatch {
        expected: usize,
        found: usize,
    },

    /// Inconsistently shaped term/coefficient data.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Combining structures defined over different numbers of qubits.
    #[error("qubit count mismatch: {left} != {right}")]
    QubitCountMismatch {
        left: usize,
        right: usize,
    },

    /// A label character outside I, X, Y, Z.
    #[error("invalid Pauli label character '{0}'")]
    InvalidLabel(char),
}

pub type PauliResult<T> = Result<T, PauliError>;
