//! Elliptic-curve Diffie-Hellman key agreement

pub mod x25519;

// Re-export the X25519 types
pub use x25519::{X25519, X25519PublicKey, X25519SecretKey, X25519SharedSecret};
