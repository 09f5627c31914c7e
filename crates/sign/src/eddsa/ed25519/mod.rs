//! Typed Ed25519 keys and the [`Signature`](SignatureTrait) implementation
//!
//! These wrap the byte-level functions in [`super::rfc8032`] with length
//! checks, redacted `Debug` output and zeroize-on-drop secret keys.

use dcurve_api::{Error, Result, Signature as SignatureTrait, SignatureDerive};
use dcurve_common::SecretBuffer;
use dcurve_internal::constant_time::ct_eq;
use dcurve_params::traditional::ed25519::{
    ED25519_PRIVATE_KEY_SIZE, ED25519_PUBLIC_KEY_SIZE, ED25519_SEED_SIZE, ED25519_SIGNATURE_SIZE,
};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use super::rfc8032;

/// Ed25519 signature scheme
///
/// # Security Considerations
///
/// - Always use a cryptographically secure RNG for key generation
/// - Never reuse seeds across different applications or purposes
/// - Secret keys are cleared from memory when dropped
pub struct Ed25519;

/// Ed25519 public key (32 bytes, compressed Edwards point)
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct Ed25519PublicKey(pub [u8; ED25519_PUBLIC_KEY_SIZE]);

impl core::fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ed25519PublicKey")
            .field("algorithm", &"Ed25519")
            .finish()
    }
}

/// Ed25519 secret key: the seed together with its public key
///
/// Only the seed needs to be stored; [`Ed25519SecretKey::from_seed`]
/// rebuilds the rest.
#[derive(Clone)]
pub struct Ed25519SecretKey {
    /// The original 32-byte seed, wiped on drop
    seed: SecretBuffer<ED25519_SEED_SIZE>,
    /// `[a]B` for the scalar derived from the seed
    public: [u8; ED25519_PUBLIC_KEY_SIZE],
}

impl Zeroize for Ed25519SecretKey {
    fn zeroize(&mut self) {
        self.seed.zeroize();
        self.public.zeroize();
    }
}

// Debug without key material
impl core::fmt::Debug for Ed25519SecretKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ed25519SecretKey")
            .field("algorithm", &"Ed25519")
            .finish()
    }
}

/// Ed25519 signature (64 bytes: R || S)
#[derive(Clone, PartialEq, Eq)]
pub struct Ed25519Signature(pub [u8; ED25519_SIGNATURE_SIZE]);

impl core::fmt::Debug for Ed25519Signature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ed25519Signature")
            .field("length", &self.0.len())
            .finish()
    }
}

impl Ed25519PublicKey {
    /// Create a public key from bytes
    ///
    /// Only the length is checked here. Whether the bytes decode to a curve
    /// point is checked at verification time.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let key: [u8; ED25519_PUBLIC_KEY_SIZE] =
            bytes.try_into().map_err(|_| Error::InvalidLength {
                context: "Ed25519PublicKey::from_bytes",
                expected: ED25519_PUBLIC_KEY_SIZE,
                actual: bytes.len(),
            })?;
        Ok(Ed25519PublicKey(key))
    }

    /// Convert public key to bytes
    pub fn to_bytes(&self) -> [u8; ED25519_PUBLIC_KEY_SIZE] {
        self.0
    }
}

impl Ed25519SecretKey {
    /// Rebuild a secret key from its 32-byte seed
    ///
    /// ```
    /// use dcurve_sign::{Ed25519, Ed25519SecretKey};
    /// use dcurve_api::Signature;
    ///
    /// # fn main() -> dcurve_api::Result<()> {
    /// let secret = Ed25519SecretKey::from_seed(&[42u8; 32]);
    /// let public = secret.public_key();
    ///
    /// let signature = Ed25519::sign(b"test", &secret)?;
    /// Ed25519::verify(b"test", &signature, &public)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_seed(seed: &[u8; ED25519_SEED_SIZE]) -> Self {
        let (public, private) = rfc8032::ed25519_keypair_from_seed(seed);
        Self::wrap(public, private)
    }

    /// Load a 64-byte private key (seed followed by public key)
    ///
    /// # Errors
    ///
    /// `Error::InvalidLength` for the wrong size, `Error::InvalidKey` when
    /// the public half does not belong to the seed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != ED25519_PRIVATE_KEY_SIZE {
            return Err(Error::InvalidLength {
                context: "Ed25519SecretKey::from_bytes",
                expected: ED25519_PRIVATE_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut seed = SecretBuffer::<ED25519_SEED_SIZE>::zeroed();
        seed.as_mut_array().copy_from_slice(&bytes[..ED25519_SEED_SIZE]);

        let key = Self::from_seed(seed.as_array());
        if !ct_eq(key.public_key().0, &bytes[ED25519_SEED_SIZE..]) {
            return Err(Error::InvalidKey {
                context: "Ed25519SecretKey::from_bytes",
            });
        }
        Ok(key)
    }

    fn wrap(
        public: [u8; ED25519_PUBLIC_KEY_SIZE],
        mut private: [u8; ED25519_PRIVATE_KEY_SIZE],
    ) -> Self {
        let mut seed = SecretBuffer::<ED25519_SEED_SIZE>::zeroed();
        seed.as_mut_array()
            .copy_from_slice(&private[..ED25519_SEED_SIZE]);
        private.zeroize();
        Self { seed, public }
    }

    /// The 32-byte seed, which is all that needs to be stored
    pub fn seed(&self) -> &[u8; ED25519_SEED_SIZE] {
        self.seed.as_array()
    }

    /// The matching public key
    pub fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey(self.public)
    }

    /// Export the full 64-byte private key (seed followed by public key)
    pub fn to_bytes(&self) -> Zeroizing<[u8; ED25519_PRIVATE_KEY_SIZE]> {
        let mut private = Zeroizing::new([0u8; ED25519_PRIVATE_KEY_SIZE]);
        private[..ED25519_SEED_SIZE].copy_from_slice(self.seed.as_slice());
        private[ED25519_SEED_SIZE..].copy_from_slice(&self.public);
        private
    }
}

impl Ed25519Signature {
    /// Create a signature from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let sig: [u8; ED25519_SIGNATURE_SIZE] =
            bytes.try_into().map_err(|_| Error::InvalidLength {
                context: "Ed25519Signature::from_bytes",
                expected: ED25519_SIGNATURE_SIZE,
                actual: bytes.len(),
            })?;
        Ok(Ed25519Signature(sig))
    }

    /// Convert signature to bytes
    pub fn to_bytes(&self) -> [u8; ED25519_SIGNATURE_SIZE] {
        self.0
    }
}

impl SignatureTrait for Ed25519 {
    type PublicKey = Ed25519PublicKey;
    type SecretKey = Ed25519SecretKey;
    type SignatureData = Ed25519Signature;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        "Ed25519"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair> {
        let (public, private) = rfc8032::ed25519_keypair(rng)?;
        Ok((Ed25519PublicKey(public), Ed25519SecretKey::wrap(public, private)))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> Result<Self::SignatureData> {
        let private = secret_key.to_bytes();
        Ok(Ed25519Signature(rfc8032::ed25519_sign(message, &private)))
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<()> {
        if rfc8032::ed25519_verify(message, &signature.0, &public_key.0) {
            Ok(())
        } else {
            Err(Error::InvalidSignature {
                context: "Ed25519 verify",
            })
        }
    }
}

impl SignatureDerive for Ed25519 {
    const MIN_SEED_SIZE: usize = ED25519_SEED_SIZE;

    /// Derive a key pair from the first 32 bytes of `seed`
    fn derive_keypair(seed: &[u8]) -> Result<Self::KeyPair> {
        if seed.len() < Self::MIN_SEED_SIZE {
            return Err(Error::InvalidLength {
                context: "Ed25519::derive_keypair",
                expected: Self::MIN_SEED_SIZE,
                actual: seed.len(),
            });
        }
        let mut seed_array = SecretBuffer::<ED25519_SEED_SIZE>::zeroed();
        seed_array
            .as_mut_array()
            .copy_from_slice(&seed[..ED25519_SEED_SIZE]);

        let secret = Ed25519SecretKey::from_seed(seed_array.as_array());
        Ok((secret.public_key(), secret))
    }

    fn derive_public_key(secret_key: &Self::SecretKey) -> Result<Self::PublicKey> {
        Ok(secret_key.public_key())
    }
}
