//! Constants for the Ed25519 signature algorithm (RFC 8032)

/// Size of the Ed25519 seed in bytes
pub const ED25519_SEED_SIZE: usize = 32;

/// Size of the Ed25519 public key in bytes
pub const ED25519_PUBLIC_KEY_SIZE: usize = 32;

/// Size of the Ed25519 expanded private key (seed followed by public key)
pub const ED25519_PRIVATE_KEY_SIZE: usize = 64;

/// Size of an Ed25519 signature in bytes (R followed by S)
pub const ED25519_SIGNATURE_SIZE: usize = 64;

/// Order of the prime subgroup, L = 2^252 + 27742317777372353535851937790883648493,
/// little-endian bytes
pub const ED25519_GROUP_ORDER: [u8; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
];

/// L as four u64 words, least significant first
pub const ED25519_GROUP_ORDER_WORDS: [u64; 4] = [
    0x5812_631a_5cf5_d3ed,
    0x14de_f9de_a2f7_9cd6,
    0x0000_0000_0000_0000,
    0x1000_0000_0000_0000,
];

/// Mask of the three bits of S[31] that are never set in a canonical S
pub const ED25519_S_HIGH_BITS_MASK: u8 = 0xe0;
