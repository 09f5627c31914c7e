//! Curve operations used by Ed25519
//!
//! Thin wrappers over `curve25519-dalek`, which supplies the Edwards group
//! law, point encoding and scalar arithmetic mod L. Everything here works on
//! fixed-size byte arrays so the signing code never touches dalek types
//! beyond [`Scalar`] and [`EdwardsPoint`].

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::Scalar;
use zeroize::Zeroize;

/// Encode `[a]B` for a clamped secret scalar `a`
pub fn derive_public_key(clamped: &[u8; 32]) -> [u8; 32] {
    EdwardsPoint::mul_base_clamped(*clamped).compress().to_bytes()
}

/// Encode `[r]B`
pub fn scalar_mult_base(r: &Scalar) -> [u8; 32] {
    EdwardsPoint::mul_base(r).compress().to_bytes()
}

/// Reduce a 512-bit little-endian hash modulo L
pub fn reduce_512_to_scalar(hash: &[u8; 64]) -> Scalar {
    Scalar::from_bytes_mod_order_wide(hash)
}

/// Compute `s = (r + k·a) mod L`
pub fn compute_s(r: &Scalar, k: &Scalar, a: &[u8; 32]) -> [u8; 32] {
    let mut a = Scalar::from_bytes_mod_order(*a);
    let mut s = k * a + r;
    let out = s.to_bytes();
    a.zeroize();
    s.zeroize();
    out
}

/// Decode a compressed point; `None` if it is not on the curve
pub fn decompress(bytes: &[u8; 32]) -> Option<EdwardsPoint> {
    CompressedEdwardsY(*bytes).decompress()
}

/// Parse a scalar that must already be below L
pub fn canonical_scalar(bytes: &[u8; 32]) -> Option<Scalar> {
    Scalar::from_canonical_bytes(*bytes).into()
}

/// Encode `[k](-A) + [s]B` in variable time
///
/// Only public values (the challenge, the public key and S) go in.
pub fn verify_equation(k: &Scalar, neg_a: &EdwardsPoint, s: &Scalar) -> [u8; 32] {
    EdwardsPoint::vartime_double_scalar_mul_basepoint(k, neg_a, s)
        .compress()
        .to_bytes()
}
