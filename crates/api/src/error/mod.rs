//! Error handling for the dcurve crates

pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

impl From<std::array::TryFromSliceError> for Error {
    fn from(_: std::array::TryFromSliceError) -> Self {
        Self::InvalidLength {
            context: "array conversion",
            expected: 0, // Unknown expected size
            actual: 0,   // Unknown actual size
        }
    }
}
