//! Byte-level Ed25519 (RFC 8032)
//!
//! Keys and signatures are plain arrays: a 32-byte seed, a 64-byte private
//! key (seed followed by public key), a 32-byte public key and a 64-byte
//! signature (R followed by S).

use dcurve_api::{Error, Result};
use dcurve_common::SecretBuffer;
use dcurve_internal::constant_time::ct_eq;
use dcurve_internal::scalar::{clamp, is_below_group_order};
use dcurve_params::traditional::ed25519::{
    ED25519_PRIVATE_KEY_SIZE, ED25519_PUBLIC_KEY_SIZE, ED25519_SEED_SIZE,
    ED25519_SIGNATURE_SIZE, ED25519_S_HIGH_BITS_MASK,
};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use sha2::digest::generic_array::GenericArray;
use sha2::{Digest, Sha512};
use tracing::trace;
use zeroize::{Zeroize, Zeroizing};

use super::operations;

/// SHA-512 over the concatenation of `parts`, streamed into the hasher
fn sha512(parts: &[&[u8]]) -> Zeroizing<[u8; 64]> {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }
    let mut out = Zeroizing::new([0u8; 64]);
    hasher.finalize_into(GenericArray::from_mut_slice(&mut out[..]));
    out
}

/// Expand a seed into the clamped secret scalar and the nonce prefix
fn expand_seed(seed: &[u8]) -> (SecretBuffer<32>, SecretBuffer<32>) {
    let digest = sha512(&[seed]);
    let mut scalar = SecretBuffer::<32>::zeroed();
    let mut prefix = SecretBuffer::<32>::zeroed();
    scalar.as_mut_array().copy_from_slice(&digest[..32]);
    prefix.as_mut_array().copy_from_slice(&digest[32..]);
    clamp(scalar.as_mut_array());
    (scalar, prefix)
}

/// Derive a key pair from a 32-byte seed
///
/// Returns `(public, private)` where `private` is the seed followed by
/// `public`.
pub fn ed25519_keypair_from_seed(
    seed: &[u8; ED25519_SEED_SIZE],
) -> ([u8; ED25519_PUBLIC_KEY_SIZE], [u8; ED25519_PRIVATE_KEY_SIZE]) {
    let (scalar, _prefix) = expand_seed(seed);
    let public = operations::derive_public_key(scalar.as_array());

    let mut private = [0u8; ED25519_PRIVATE_KEY_SIZE];
    private[..32].copy_from_slice(seed);
    private[32..].copy_from_slice(&public);
    (public, private)
}

/// Same as [`ed25519_keypair_from_seed`]
pub fn generate_ed25519_keypair_from_seed(
    seed: &[u8; ED25519_SEED_SIZE],
) -> ([u8; ED25519_PUBLIC_KEY_SIZE], [u8; ED25519_PRIVATE_KEY_SIZE]) {
    ed25519_keypair_from_seed(seed)
}

/// Generate a key pair from 32 bytes drawn from `rng`
///
/// The seed copy is wiped before returning.
///
/// # Errors
///
/// Returns `Error::RandomGenerationError` if the RNG fails.
pub fn ed25519_keypair<R: CryptoRng + RngCore>(
    rng: &mut R,
) -> Result<([u8; ED25519_PUBLIC_KEY_SIZE], [u8; ED25519_PRIVATE_KEY_SIZE])> {
    let mut seed = SecretBuffer::<ED25519_SEED_SIZE>::zeroed();
    rng.try_fill_bytes(seed.as_mut_array())
        .map_err(|e| Error::RandomGenerationError {
            context: "Ed25519 key generation",
            message: e.to_string(),
        })?;
    Ok(ed25519_keypair_from_seed(seed.as_array()))
}

/// Generate a key pair from the operating system's random source
pub fn generate_ed25519_keypair(
) -> Result<([u8; ED25519_PUBLIC_KEY_SIZE], [u8; ED25519_PRIVATE_KEY_SIZE])> {
    ed25519_keypair(&mut OsRng)
}

/// Sign `message` deterministically
///
/// 1. `r = SHA-512(prefix || M) mod L`, `R = [r]B`
/// 2. `k = SHA-512(R || A || M) mod L`
/// 3. `S = (r + k·a) mod L`
///
/// The public half of `private` is trusted as-is.
pub fn ed25519_sign(
    message: &[u8],
    private: &[u8; ED25519_PRIVATE_KEY_SIZE],
) -> [u8; ED25519_SIGNATURE_SIZE] {
    let (scalar, prefix) = expand_seed(&private[..32]);

    let mut r = operations::reduce_512_to_scalar(&sha512(&[prefix.as_slice(), message]));
    let big_r = operations::scalar_mult_base(&r);

    let mut k = operations::reduce_512_to_scalar(&sha512(&[&big_r, &private[32..], message]));
    let s = operations::compute_s(&r, &k, scalar.as_array());
    r.zeroize();
    k.zeroize();

    let mut signature = [0u8; ED25519_SIGNATURE_SIZE];
    signature[..32].copy_from_slice(&big_r);
    signature[32..].copy_from_slice(&s);
    signature
}

/// Verify `signature` over `message` under `public`
///
/// Rejects, in order: S with any of its top three bits set, a public key
/// that does not decode, S ≥ L, and finally a recomputed R that differs
/// from the signature's R. Never panics.
pub fn ed25519_verify(
    message: &[u8],
    signature: &[u8; ED25519_SIGNATURE_SIZE],
    public: &[u8; ED25519_PUBLIC_KEY_SIZE],
) -> bool {
    if signature[63] & ED25519_S_HIGH_BITS_MASK != 0 {
        trace!("Ed25519 verify: high bits of S set");
        return false;
    }

    let a = match operations::decompress(public) {
        Some(point) => point,
        None => {
            trace!("Ed25519 verify: public key does not decode");
            return false;
        }
    };

    let mut s_bytes = [0u8; 32];
    s_bytes.copy_from_slice(&signature[32..]);
    if !is_below_group_order(&s_bytes) {
        trace!("Ed25519 verify: S is not below the group order");
        return false;
    }
    let s = match operations::canonical_scalar(&s_bytes) {
        Some(s) => s,
        None => return false,
    };

    let neg_a = -a;
    let k = operations::reduce_512_to_scalar(&sha512(&[&signature[..32], public, message]));
    let check = operations::verify_equation(&k, &neg_a, &s);

    let valid = ct_eq(check, &signature[..32]);
    if !valid {
        trace!("Ed25519 verify: equation does not hold");
    }
    valid
}
