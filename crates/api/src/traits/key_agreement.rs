//! Key agreement traits for dcurve

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Diffie-Hellman style key agreement
///
/// Both parties call [`KeyAgreement::agree`] with their own secret key and
/// the peer's public key and obtain the same shared secret.
pub trait KeyAgreement {
    /// Public key type
    type PublicKey: Clone;

    /// Secret key type
    type SecretKey: Zeroize + Clone;

    /// Shared secret type
    type SharedSecret: Zeroize;

    /// Key pair type
    type KeyPair;

    /// Returns the name of this algorithm
    fn name() -> &'static str;

    /// Generate a new key pair using the provided RNG
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract the public key from a key pair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract the secret key from a key pair
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Compute the public key matching a secret key
    fn derive_public_key(secret_key: &Self::SecretKey) -> Self::PublicKey;

    /// Compute the shared secret with a peer
    ///
    /// # Errors
    ///
    /// Returns `Error::KeyAgreementFailed` when the peer key leads to a
    /// degenerate shared secret.
    fn agree(secret_key: &Self::SecretKey, peer: &Self::PublicKey) -> Result<Self::SharedSecret>;
}
