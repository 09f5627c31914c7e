//! EdDSA over edwards25519 (Ed25519, RFC 8032)
//!
//! Two layers:
//!
//! - byte-level functions ([`ed25519_sign`], [`ed25519_verify`], ...) over
//!   fixed-size arrays, returning `bool` from verification
//! - the typed [`Ed25519`] scheme implementing `dcurve_api::Signature`
//!
//! Group arithmetic comes from `curve25519-dalek`; hashing from `sha2`.
//!
//! # Example
//!
//! ```
//! use dcurve_sign::eddsa::Ed25519;
//! use dcurve_api::Signature;
//! use rand::rngs::OsRng;
//!
//! # fn main() -> dcurve_api::Result<()> {
//! let mut rng = OsRng;
//! let (public_key, secret_key) = Ed25519::keypair(&mut rng)?;
//!
//! let message = b"Hello, Ed25519!";
//! let signature = Ed25519::sign(message, &secret_key)?;
//!
//! assert!(Ed25519::verify(message, &signature, &public_key).is_ok());
//! # Ok(())
//! # }
//! ```

mod ed25519;
mod operations;
mod rfc8032;

pub use ed25519::{Ed25519, Ed25519PublicKey, Ed25519SecretKey, Ed25519Signature};
pub use rfc8032::{
    ed25519_keypair, ed25519_keypair_from_seed, ed25519_sign, ed25519_verify,
    generate_ed25519_keypair, generate_ed25519_keypair_from_seed,
};
