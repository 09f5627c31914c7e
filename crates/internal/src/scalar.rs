//! Scalar bit manipulation shared by Ed25519 and X25519

use dcurve_params::traditional::ed25519::ED25519_GROUP_ORDER_WORDS;

use crate::endian::u64_words_from_le_bytes;

/// Apply the Curve25519 clamp in place
///
/// Clears the low three bits of byte 0, clears the top bit of byte 31 and
/// sets bit 254.
pub fn clamp(scalar: &mut [u8; 32]) {
    scalar[0] &= 248;
    scalar[31] &= 127;
    scalar[31] |= 64;
}

/// Set the bits that [`clamp`] clears and clear the bit it sets
///
/// Applied to freshly generated X25519 private keys so that a consumer that
/// forgets to clamp computes a wrong result every time instead of only
/// sometimes.
pub fn anti_clamp(scalar: &mut [u8; 32]) {
    scalar[0] |= 7;
    scalar[31] &= !0x40;
    scalar[31] |= 0x80;
}

/// Clear the most significant bit of an incoming u-coordinate
pub fn mask_u_coordinate(u: &[u8; 32]) -> [u8; 32] {
    let mut masked = *u;
    masked[31] &= 0x7f;
    masked
}

/// Returns true iff the little-endian integer `s` is strictly below the
/// Ed25519 group order L
///
/// Words are compared from most to least significant and the loop exits on
/// the first inequality. `s` is public (the S half of a signature) so the
/// early exit leaks nothing secret.
pub fn is_below_group_order(s: &[u8; 32]) -> bool {
    let words = u64_words_from_le_bytes(s);
    for i in (0..4).rev() {
        if words[i] < ED25519_GROUP_ORDER_WORDS[i] {
            return true;
        }
        if words[i] > ED25519_GROUP_ORDER_WORDS[i] {
            return false;
        }
    }
    // s == L
    false
}
