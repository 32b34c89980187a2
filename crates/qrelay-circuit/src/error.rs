//! Error types for circuit synthesis.

use thiserror::Error;

/// Result type for circuit operations.
pub type CircuitResult<T> = Result<T, CircuitError>;

/// Errors raised while constructing a circuit request.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum CircuitError {
    /// Qubit count outside the supported range.
    #[error("Qubits must be between {min}-{max}, got {got}")]
    QubitsOutOfRange {
        /// Requested qubit count.
        got: i64,
        /// Inclusive lower bound.
        min: u32,
        /// Inclusive upper bound.
        max: u32,
    },
}
