//! Internal utilities shared by the dcurve crates
//!
//! Not part of the public API: constant-time comparison, little-endian
//! loads, and scalar bit manipulation for Curve25519.

pub mod constant_time;
pub mod endian;
pub mod scalar;
