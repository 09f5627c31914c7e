//! Digital signatures for the dcurve library
//!
//! This crate implements Ed25519 (RFC 8032).

pub mod eddsa;

pub use eddsa::{Ed25519, Ed25519PublicKey, Ed25519SecretKey, Ed25519Signature};
