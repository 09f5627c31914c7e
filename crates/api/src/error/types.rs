//! Error type definitions for the dcurve crates

use thiserror::Error as ThisError;

/// Primary error type for dcurve operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Input had the wrong number of bytes
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Key bytes do not describe a usable key
    #[error("{context}: invalid key")]
    InvalidKey { context: &'static str },

    /// Signature did not verify
    #[error("{context}: invalid signature")]
    InvalidSignature { context: &'static str },

    /// X25519 output was all zeros (small-order peer point)
    #[error("{context}: key agreement produced the all-zero value")]
    KeyAgreementFailed { context: &'static str },

    /// The random source failed to produce bytes
    #[error("{context}: random generation failed: {message}")]
    RandomGenerationError {
        context: &'static str,
        message: String,
    },
}

/// Result type for dcurve operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidKey { .. } => Self::InvalidKey { context },
            Self::InvalidSignature { .. } => Self::InvalidSignature { context },
            Self::KeyAgreementFailed { .. } => Self::KeyAgreementFailed { context },
            Self::RandomGenerationError { message, .. } => {
                Self::RandomGenerationError { context, message }
            }
        }
    }
}
