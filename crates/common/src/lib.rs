//! Common secret-handling types for the dcurve library

pub mod security;

// Re-export core security types
pub use security::SecretBuffer;
