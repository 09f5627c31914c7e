//! Fixed-size secret buffers with guaranteed zeroization
//!
//! Scratch copies of private scalars (clamped X25519 keys, Ed25519 digests)
//! live in a [`SecretBuffer`] so that every exit path, including an early
//! return or an explicit `drop` before an abort, wipes them.

use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Fixed-size secret buffer that is zeroized when dropped
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBuffer<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBuffer<N> {
    /// Create a new secret buffer holding a copy of `data`
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create a zeroed secret buffer
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Get the length of the buffer
    pub fn len(&self) -> usize {
        N
    }

    /// Check if the buffer is empty (only for N == 0)
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Borrow the contents as a fixed-size array
    pub fn as_array(&self) -> &[u8; N] {
        &self.data
    }

    /// Mutably borrow the contents as a fixed-size array
    pub fn as_mut_array(&mut self) -> &mut [u8; N] {
        &mut self.data
    }

    /// Get a reference to the inner data
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> fmt::Debug for SecretBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBuffer<{}>([REDACTED])", N)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let buf = SecretBuffer::new([0x42u8; 32]);
        let shown = format!("{:?}", buf);
        assert_eq!(shown, "SecretBuffer<32>([REDACTED])");
        assert!(!shown.contains("42"));
    }

    #[test]
    fn test_zeroize_clears_contents() {
        let mut buf = SecretBuffer::new([0xa5u8; 16]);
        buf.as_mut_array()[0] = 1;
        assert_eq!(buf.as_slice()[0], 1);
        buf.zeroize();
        assert_eq!(buf.as_array(), &[0u8; 16]);
        assert_eq!(buf.len(), 16);
        assert!(!buf.is_empty());
    }
}
