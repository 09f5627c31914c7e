//! # dcurve
//!
//! Ed25519 signatures and X25519 key agreement over Curve25519.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! dcurve = "0.1"
//! ```
//!
//! ## Features
//!
//! - `portable` (default): compile the portable X25519 backend used when the
//!   CPU offers neither accelerated backend
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`dcurve-api`]: error type and the `Signature` / `KeyAgreement` traits
//! - [`dcurve-algorithms`]: CPU capability detection and X25519 backends
//! - [`dcurve-sign`]: Ed25519
//! - [`dcurve-kem`]: X25519
//!
//! The byte-level operations are re-exported at the crate root:
//!
//! ```
//! # fn main() -> dcurve::api::Result<()> {
//! let (public, private) = dcurve::generate_ed25519_keypair()?;
//! let signature = dcurve::ed25519_sign(b"message", &private);
//! assert!(dcurve::ed25519_verify(b"message", &signature, &public));
//!
//! let (alice_public, alice_private) = dcurve::generate_x25519_keypair()?;
//! let (bob_public, bob_private) = dcurve::generate_x25519_keypair()?;
//! let (ab, ok_a) = dcurve::x25519(&alice_private, &bob_public);
//! let (ba, ok_b) = dcurve::x25519(&bob_private, &alice_public);
//! assert!(ok_a && ok_b);
//! assert_eq!(ab, ba);
//! # Ok(())
//! # }
//! ```

// Core re-exports
pub use dcurve_algorithms as algorithms;
pub use dcurve_api as api;
pub use dcurve_common as common;
pub use dcurve_internal as internal;
pub use dcurve_kem as kem;
pub use dcurve_params as params;
pub use dcurve_sign as sign;

pub use dcurve_kem::ecdh::x25519::{
    generate_x25519_keypair, x25519, x25519_keypair, x25519_public_from_private,
};
pub use dcurve_sign::eddsa::{
    ed25519_keypair, ed25519_sign, ed25519_verify, generate_ed25519_keypair,
    generate_ed25519_keypair_from_seed,
};

/// Common imports for dcurve users
pub mod prelude {
    pub use crate::api::{Error, KeyAgreement, Result, Signature};
    pub use crate::common::SecretBuffer;
    pub use crate::kem::{X25519, X25519PublicKey, X25519SecretKey, X25519SharedSecret};
    pub use crate::sign::{Ed25519, Ed25519PublicKey, Ed25519SecretKey, Ed25519Signature};
}
