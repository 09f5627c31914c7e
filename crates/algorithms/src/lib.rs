//! X25519 backend selection for the dcurve library
//!
//! This crate answers two questions at runtime: which X25519 scalar
//! multiplication backends can this CPU run, and which one should it use.
//!
//! - [`cpu`]: one-time capability probe, cached for the process
//! - [`x25519`]: the [`Backend`] selector and the backends themselves
//!
//! Ed25519 group arithmetic is not here; it comes from `curve25519-dalek`
//! directly.

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod cpu;
pub mod x25519;

pub use cpu::{capabilities, Arch, Capabilities, DisableMask};
pub use x25519::{abort_unavailable, Backend};
