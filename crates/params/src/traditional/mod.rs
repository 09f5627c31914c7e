//! Constants for the Curve25519 algorithms

pub mod ed25519;
pub mod x25519;
