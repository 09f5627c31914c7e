//! Byte-level X25519 (RFC 7748)
//!
//! Private scalars are stored unclamped; every operation clamps a private
//! copy that is wiped before returning, including on the abort path.

use dcurve_algorithms::x25519::{abort_unavailable, Backend};
use dcurve_api::{Error, Result};
use dcurve_common::SecretBuffer;
use dcurve_internal::constant_time::ct_is_zero;
use dcurve_internal::scalar::{anti_clamp, clamp};
use dcurve_params::traditional::x25519::{
    X25519_PUBLIC_KEY_SIZE, X25519_SCALAR_SIZE, X25519_SHARED_SECRET_SIZE,
};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

fn demask(private: &[u8; X25519_SCALAR_SIZE]) -> SecretBuffer<X25519_SCALAR_SIZE> {
    let mut demasked = SecretBuffer::new(*private);
    clamp(demasked.as_mut_array());
    demasked
}

/// Compute the public value `clamp(private) · 9`
pub fn x25519_public_from_private(
    private: &[u8; X25519_SCALAR_SIZE],
) -> [u8; X25519_PUBLIC_KEY_SIZE] {
    x25519_public_from_private_with_backend(Backend::preferred(), private)
}

/// [`x25519_public_from_private`] on an explicit backend
///
/// Aborts the process if `backend` is not available.
pub fn x25519_public_from_private_with_backend(
    backend: Backend,
    private: &[u8; X25519_SCALAR_SIZE],
) -> [u8; X25519_PUBLIC_KEY_SIZE] {
    let demasked = demask(private);
    match backend.scalarmult_base(demasked.as_array()) {
        Some(public) => public,
        None => {
            drop(demasked);
            abort_unavailable(backend)
        }
    }
}

/// Generate `(public, private)` from 32 bytes drawn from `rng`
///
/// The stored private key has the clamping bits deliberately inverted (low
/// three bits set, bit 254 clear, bit 255 set). A consumer that forgets to
/// clamp gets a wrong answer every time rather than only sometimes.
///
/// # Errors
///
/// Returns `Error::RandomGenerationError` if the RNG fails.
pub fn x25519_keypair<R: CryptoRng + RngCore>(
    rng: &mut R,
) -> Result<([u8; X25519_PUBLIC_KEY_SIZE], [u8; X25519_SCALAR_SIZE])> {
    x25519_keypair_with_backend(Backend::preferred(), rng)
}

/// [`x25519_keypair`] on an explicit backend
pub fn x25519_keypair_with_backend<R: CryptoRng + RngCore>(
    backend: Backend,
    rng: &mut R,
) -> Result<([u8; X25519_PUBLIC_KEY_SIZE], [u8; X25519_SCALAR_SIZE])> {
    let mut private = SecretBuffer::<X25519_SCALAR_SIZE>::zeroed();
    rng.try_fill_bytes(private.as_mut_array())
        .map_err(|e| Error::RandomGenerationError {
            context: "X25519 key generation",
            message: e.to_string(),
        })?;
    anti_clamp(private.as_mut_array());

    let public = x25519_public_from_private_with_backend(backend, private.as_array());
    Ok((public, *private.as_array()))
}

/// Generate a key pair from the operating system's random source
pub fn generate_x25519_keypair(
) -> Result<([u8; X25519_PUBLIC_KEY_SIZE], [u8; X25519_SCALAR_SIZE])> {
    x25519_keypair(&mut OsRng)
}

/// Compute the shared secret `clamp(private) · peer`
///
/// The flag is `false` when the result is all zeros, which happens for
/// small-order peer values. The zero output is still returned; callers must
/// check the flag.
pub fn x25519(
    private: &[u8; X25519_SCALAR_SIZE],
    peer: &[u8; X25519_PUBLIC_KEY_SIZE],
) -> ([u8; X25519_SHARED_SECRET_SIZE], bool) {
    x25519_with_backend(Backend::preferred(), private, peer)
}

/// [`x25519`] on an explicit backend
///
/// Aborts the process if `backend` is not available.
pub fn x25519_with_backend(
    backend: Backend,
    private: &[u8; X25519_SCALAR_SIZE],
    peer: &[u8; X25519_PUBLIC_KEY_SIZE],
) -> ([u8; X25519_SHARED_SECRET_SIZE], bool) {
    let demasked = demask(private);
    match backend.scalarmult(demasked.as_array(), peer) {
        Some(shared) => {
            let ok = !ct_is_zero(&shared);
            (shared, ok)
        }
        None => {
            drop(demasked);
            abort_unavailable(backend)
        }
    }
}
