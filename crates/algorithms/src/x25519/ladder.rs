//! Montgomery ladder shared by the in-crate X25519 backends
//!
//! The ladder is written once over [`FieldOps`]; each backend supplies its
//! own limb representation of GF(2^255 - 19).

use dcurve_common::SecretBuffer;
use dcurve_internal::scalar::{clamp, mask_u_coordinate};
use subtle::{Choice, ConditionallySelectable};
use zeroize::Zeroize;

/// p - 2 = 2^255 - 21, little-endian, the exponent used for inversion
const P_MINUS_2: [u8; 32] = [
    0xeb, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f,
];

/// Arithmetic in GF(2^255 - 19) needed by the ladder
///
/// Every operation runs in time independent of the operand values.
pub(crate) trait FieldOps: Copy + ConditionallySelectable + Zeroize {
    /// The additive identity
    fn zero() -> Self;

    /// The multiplicative identity
    fn one() -> Self;

    /// The u-coordinate of the base point, 9
    fn base_u() -> Self;

    /// Decode 32 little-endian bytes, ignoring bit 255
    fn from_bytes(bytes: &[u8; 32]) -> Self;

    /// Encode the canonical (fully reduced) value
    fn to_bytes(&self) -> [u8; 32];

    fn add(&self, rhs: &Self) -> Self;

    fn sub(&self, rhs: &Self) -> Self;

    fn mul(&self, rhs: &Self) -> Self;

    fn square(&self) -> Self {
        self.mul(self)
    }

    /// Multiply by (A - 2) / 4 = 121665
    fn mul_a24(&self) -> Self;

    /// Inversion by Fermat's little theorem, self^(p-2)
    ///
    /// The exponent is public, so branching on its bits is fine. Zero maps
    /// to zero.
    fn invert(&self) -> Self {
        let mut result = Self::one();
        for i in (0..255).rev() {
            result = result.square();
            if (P_MINUS_2[i >> 3] >> (i & 7)) & 1 == 1 {
                result = result.mul(self);
            }
        }
        result
    }
}

/// X25519 scalar multiplication `scalar · u`
///
/// The scalar is clamped on a private copy, as `MontgomeryPoint::mul_clamped`
/// does, so every backend agrees on unclamped input too.
pub(crate) fn mul<F: FieldOps>(scalar: &[u8; 32], u: &[u8; 32]) -> [u8; 32] {
    let x1 = F::from_bytes(&mask_u_coordinate(u));
    ladder(scalar, x1)
}

/// X25519 scalar multiplication by the base point
pub(crate) fn mul_base<F: FieldOps>(scalar: &[u8; 32]) -> [u8; 32] {
    ladder(scalar, F::base_u())
}

fn ladder<F: FieldOps>(scalar: &[u8; 32], x1: F) -> [u8; 32] {
    let mut key = SecretBuffer::new(*scalar);
    clamp(key.as_mut_array());
    let k = key.as_array();

    let mut x2 = F::one();
    let mut z2 = F::zero();
    let mut x3 = x1;
    let mut z3 = F::one();
    let mut swap = Choice::from(0u8);

    for t in (0..=254).rev() {
        let bit = Choice::from((k[t >> 3] >> (t & 7)) & 1);
        swap ^= bit;
        F::conditional_swap(&mut x2, &mut x3, swap);
        F::conditional_swap(&mut z2, &mut z3, swap);
        swap = bit;

        let a = x2.add(&z2);
        let aa = a.square();
        let b = x2.sub(&z2);
        let bb = b.square();
        let e = aa.sub(&bb);
        let c = x3.add(&z3);
        let d = x3.sub(&z3);
        let da = d.mul(&a);
        let cb = c.mul(&b);

        x3 = da.add(&cb).square();
        z3 = x1.mul(&da.sub(&cb).square());
        x2 = aa.mul(&bb);
        z2 = e.mul(&aa.add(&e.mul_a24()));
    }
    F::conditional_swap(&mut x2, &mut x3, swap);
    F::conditional_swap(&mut z2, &mut z3, swap);

    let out = x2.mul(&z2.invert()).to_bytes();

    x2.zeroize();
    z2.zeroize();
    x3.zeroize();
    z3.zeroize();
    out
}
