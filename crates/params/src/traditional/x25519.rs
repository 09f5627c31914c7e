//! Constants for X25519 key agreement (RFC 7748)

/// Size of an X25519 private scalar in bytes
pub const X25519_SCALAR_SIZE: usize = 32;

/// Size of an X25519 public value (u-coordinate) in bytes
pub const X25519_PUBLIC_KEY_SIZE: usize = 32;

/// Size of the X25519 shared secret in bytes
pub const X25519_SHARED_SECRET_SIZE: usize = 32;

/// u-coordinate of the Curve25519 base point
pub const X25519_BASE_POINT: [u8; 32] = [
    9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// (A - 2) / 4 for Curve25519, used by the ladder's doubling step
pub const X25519_A24: u32 = 121_665;
