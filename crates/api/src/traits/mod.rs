//! Trait definitions for dcurve algorithms

pub mod key_agreement;
pub mod signature;

pub use key_agreement::KeyAgreement;
pub use signature::{Signature, SignatureDerive};
