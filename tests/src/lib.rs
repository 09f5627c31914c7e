//! Test vectors and helpers for the dcurve integration tests
pub mod vectors;

use dcurve_algorithms::Backend;

/// Decode a 32-byte hex string
pub fn hex32(s: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    hex::decode_to_slice(s, &mut out).expect("test vector must be 32 bytes of hex");
    out
}

/// Decode a 64-byte hex string
pub fn hex64(s: &str) -> [u8; 64] {
    let mut out = [0u8; 64];
    hex::decode_to_slice(s, &mut out).expect("test vector must be 64 bytes of hex");
    out
}

/// X25519 backends usable in this process
pub fn available_backends() -> Vec<Backend> {
    Backend::ALL.into_iter().filter(|b| b.is_available()).collect()
}
