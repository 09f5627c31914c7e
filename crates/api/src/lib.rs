//! Public API traits and types for the dcurve library
//!
//! This crate provides the public API surface shared by the dcurve crates:
//! the error type and the trait definitions implemented by Ed25519 and X25519.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

pub use traits::{KeyAgreement, Signature, SignatureDerive};

// Re-export trait modules for direct access
pub use traits::{key_agreement, signature};
