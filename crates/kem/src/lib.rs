//! Key agreement for the dcurve library
//!
//! This crate implements X25519 (RFC 7748) on top of the backend selection
//! in `dcurve-algorithms`.

pub mod ecdh;

// Re-exports
pub use ecdh::{X25519, X25519PublicKey, X25519SecretKey, X25519SharedSecret};
