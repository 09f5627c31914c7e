//! Endianness utility functions

/// Read a little-endian u64 from the first eight bytes of `bytes`
///
/// # Panics
///
/// Panics if `bytes` is shorter than eight bytes.
pub fn u64_from_le_bytes(bytes: &[u8]) -> u64 {
    u64::from_le_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

/// Split a 32-byte little-endian integer into four u64 words, least significant first
pub fn u64_words_from_le_bytes(bytes: &[u8; 32]) -> [u64; 4] {
    [
        u64_from_le_bytes(&bytes[0..8]),
        u64_from_le_bytes(&bytes[8..16]),
        u64_from_le_bytes(&bytes[16..24]),
        u64_from_le_bytes(&bytes[24..32]),
    ]
}
