//! Error handling for scheme operations
//!
//! Every public operation validates its inputs before sampling or doing any
//! ring arithmetic and reports problems through [`RlweError`]. The ring layer
//! itself never fails: it only ever sees values that were already checked.

use num_bigint::BigInt;
use thiserror::Error;

/// Errors surfaced at the boundary of key generation, encryption,
/// decryption and homomorphic combination.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RlweError {
    /// Scheme parameters cannot produce a working instance
    /// (q ≤ t, S ≤ 0, bad structural modulus, ...).
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// A supplied polynomial does not carry exactly `ring_dim` coefficients.
    #[error("degree mismatch: {what} has {actual} coefficients, expected {expected}")]
    DegreeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Two values that must share a modulus do not.
    #[error("modulus mismatch: {left} is incompatible with {right}")]
    ModulusMismatch { left: BigInt, right: BigInt },
}

impl RlweError {
    /// Create an [`RlweError::InvalidParameters`] from any message
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameters(msg.into())
    }
}

/// Result type for scheme operations
pub type Result<T> = std::result::Result<T, RlweError>;

/// Create an [`RlweError::InvalidParameters`] with format string support
macro_rules! invalid_params {
    ($($arg:tt)*) => {
        $crate::error::RlweError::InvalidParameters(format!($($arg)*))
    };
}

pub(crate) use invalid_params;
