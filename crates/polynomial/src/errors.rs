//! Error types for polynomial operations.

use thiserror::Error;

/// Errors that can occur during polynomial operations.
///
/// Every variant is a precondition violation detected at the call site;
/// failing operations return before mutating any state.
#[derive(Debug, Error)]
pub enum PolynomialError {
    /// Negative coefficient index query
    #[error("coefficient index must be non-negative, got {index}")]
    InvalidIndex { index: i64 },

    /// Non-positive modulus passed to a modular operation
    #[error("modulus must be positive, got {modulus}")]
    InvalidModulus { modulus: i64 },

    /// Ternary weight exceeds the number of available coefficient positions
    #[error("ternary weight {weight} exceeds ring dimension {dimension}")]
    InvalidWeight { weight: usize, dimension: usize },
}
