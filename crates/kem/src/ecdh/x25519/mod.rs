//! X25519 key agreement (RFC 7748)
//!
//! Two layers, as for Ed25519:
//!
//! - byte-level functions ([`x25519`], [`x25519_public_from_private`], ...)
//!   returning the shared secret together with a success flag
//! - the typed [`X25519`] scheme implementing `dcurve_api::KeyAgreement`
//!
//! The scalar multiplication itself runs on the backend chosen by
//! [`Backend::preferred`](dcurve_algorithms::Backend::preferred); the
//! `*_with_backend` variants force one.
//!
//! # Example
//!
//! ```
//! use dcurve_kem::X25519;
//! use dcurve_api::KeyAgreement;
//! use rand::rngs::OsRng;
//!
//! # fn main() -> dcurve_api::Result<()> {
//! let (alice_pk, alice_sk) = X25519::keypair(&mut OsRng)?;
//! let (bob_pk, bob_sk) = X25519::keypair(&mut OsRng)?;
//!
//! let k1 = X25519::agree(&alice_sk, &bob_pk)?;
//! let k2 = X25519::agree(&bob_sk, &alice_pk)?;
//! assert_eq!(k1.as_bytes(), k2.as_bytes());
//! # Ok(())
//! # }
//! ```

use dcurve_api::{Error, KeyAgreement, Result};
use dcurve_common::SecretBuffer;
use dcurve_params::traditional::x25519::{
    X25519_PUBLIC_KEY_SIZE, X25519_SCALAR_SIZE, X25519_SHARED_SECRET_SIZE,
};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

mod rfc7748;

pub use rfc7748::{
    generate_x25519_keypair, x25519, x25519_keypair, x25519_keypair_with_backend,
    x25519_public_from_private, x25519_public_from_private_with_backend, x25519_with_backend,
};

/// X25519 key agreement
pub struct X25519;

/// X25519 public value (u-coordinate)
///
/// Not validated: any 32 bytes are accepted, and a degenerate value shows
/// up as a failed agreement.
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct X25519PublicKey([u8; X25519_PUBLIC_KEY_SIZE]);

/// X25519 private scalar, stored unclamped
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct X25519SecretKey(SecretBuffer<X25519_SCALAR_SIZE>);

/// Shared secret from X25519
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct X25519SharedSecret(SecretBuffer<X25519_SHARED_SECRET_SIZE>);

impl core::fmt::Debug for X25519PublicKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("X25519PublicKey")
            .field(&format_args!("{}..", hex::encode(&self.0[..4])))
            .finish()
    }
}

impl core::fmt::Debug for X25519SecretKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("X25519SecretKey([REDACTED])")
    }
}

impl core::fmt::Debug for X25519SharedSecret {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("X25519SharedSecret([REDACTED])")
    }
}

impl X25519PublicKey {
    /// Create a public key from bytes (length check only)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let key: [u8; X25519_PUBLIC_KEY_SIZE] =
            bytes.try_into().map_err(|_| Error::InvalidLength {
                context: "X25519PublicKey::from_bytes",
                expected: X25519_PUBLIC_KEY_SIZE,
                actual: bytes.len(),
            })?;
        Ok(Self(key))
    }

    /// Export the public key to bytes
    pub fn to_bytes(&self) -> [u8; X25519_PUBLIC_KEY_SIZE] {
        self.0
    }
}

impl X25519SecretKey {
    /// Create a secret key from bytes
    ///
    /// Every 32-byte string is a usable X25519 key; clamping happens on use.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != X25519_SCALAR_SIZE {
            return Err(Error::InvalidLength {
                context: "X25519SecretKey::from_bytes",
                expected: X25519_SCALAR_SIZE,
                actual: bytes.len(),
            });
        }
        let mut buffer = SecretBuffer::<X25519_SCALAR_SIZE>::zeroed();
        buffer.as_mut_array().copy_from_slice(bytes);
        Ok(Self(buffer))
    }

    /// Export the secret key to bytes (zeroized on drop)
    pub fn to_bytes(&self) -> Zeroizing<[u8; X25519_SCALAR_SIZE]> {
        Zeroizing::new(*self.0.as_array())
    }

    /// The matching public value
    pub fn public_key(&self) -> X25519PublicKey {
        X25519PublicKey(x25519_public_from_private(self.0.as_array()))
    }
}

impl X25519SharedSecret {
    /// Borrow the shared secret
    pub fn as_bytes(&self) -> &[u8; X25519_SHARED_SECRET_SIZE] {
        self.0.as_array()
    }

    /// Copy the shared secret out (zeroized on drop)
    pub fn to_bytes(&self) -> Zeroizing<[u8; X25519_SHARED_SECRET_SIZE]> {
        Zeroizing::new(*self.0.as_array())
    }
}

impl KeyAgreement for X25519 {
    type PublicKey = X25519PublicKey;
    type SecretKey = X25519SecretKey;
    type SharedSecret = X25519SharedSecret;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        "X25519"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair> {
        let (public, mut private) = x25519_keypair(rng)?;
        let secret = X25519SecretKey(SecretBuffer::new(private));
        private.zeroize();
        Ok((X25519PublicKey(public), secret))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn derive_public_key(secret_key: &Self::SecretKey) -> Self::PublicKey {
        secret_key.public_key()
    }

    fn agree(secret_key: &Self::SecretKey, peer: &Self::PublicKey) -> Result<Self::SharedSecret> {
        let (mut shared, ok) = x25519(secret_key.0.as_array(), &peer.0);
        let secret = X25519SharedSecret(SecretBuffer::new(shared));
        shared.zeroize();
        if ok {
            Ok(secret)
        } else {
            Err(Error::KeyAgreementFailed { context: "X25519" })
        }
    }
}
