//! GF(2^255 - 19) in five 51-bit limbs
//!
//! Limb products are 64×64→128-bit multiplies, which is where BMI2's `mulx`
//! and ADX's carry chains pay off when the code is compiled with those
//! features enabled.

use dcurve_internal::endian::u64_from_le_bytes;
use dcurve_params::traditional::x25519::X25519_A24;
use subtle::{Choice, ConditionallySelectable};
use zeroize::Zeroize;

use super::ladder::FieldOps;

const MASK: u64 = (1 << 51) - 1;

/// 16p, limb by limb, added before subtracting so limbs never go negative
const SIXTEEN_P: [u64; 5] = [
    36_028_797_018_963_664, // 16 * (2^51 - 19)
    36_028_797_018_963_952, // 16 * (2^51 - 1)
    36_028_797_018_963_952,
    36_028_797_018_963_952,
    36_028_797_018_963_952,
];

/// Field element as `l0 + l1·2^51 + l2·2^102 + l3·2^153 + l4·2^204`
///
/// Limbs are kept below 2^54 between operations. Values are reduced modulo
/// p only weakly; [`FieldOps::to_bytes`] produces the canonical encoding.
#[derive(Clone, Copy, Debug, Zeroize)]
pub(crate) struct Fe51(pub(crate) [u64; 5]);

impl ConditionallySelectable for Fe51 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = [0u64; 5];
        for (i, limb) in out.iter_mut().enumerate() {
            *limb = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        Fe51(out)
    }
}

impl Fe51 {
    /// Carry each limb into the next, folding the top carry back times 19
    #[inline(always)]
    fn weak_reduce(mut l: [u64; 5]) -> Self {
        let c0 = l[0] >> 51;
        let c1 = l[1] >> 51;
        let c2 = l[2] >> 51;
        let c3 = l[3] >> 51;
        let c4 = l[4] >> 51;

        l[0] &= MASK;
        l[1] &= MASK;
        l[2] &= MASK;
        l[3] &= MASK;
        l[4] &= MASK;

        l[0] += c4 * 19;
        l[1] += c0;
        l[2] += c1;
        l[3] += c2;
        l[4] += c3;

        Fe51(l)
    }

    /// Reduce five 128-bit column sums to 51-bit limbs
    #[inline(always)]
    fn carry_wide(mut c: [u128; 5]) -> Self {
        let mut out = [0u64; 5];

        c[1] += c[0] >> 51;
        out[0] = (c[0] as u64) & MASK;
        c[2] += c[1] >> 51;
        out[1] = (c[1] as u64) & MASK;
        c[3] += c[2] >> 51;
        out[2] = (c[2] as u64) & MASK;
        c[4] += c[3] >> 51;
        out[3] = (c[3] as u64) & MASK;

        // With limbs below 2^54 the top column is below 2^111, so the carry
        // times 19 still fits in a u64 next to a 51-bit limb.
        let carry = (c[4] >> 51) as u64;
        out[4] = (c[4] as u64) & MASK;

        out[0] += carry * 19;
        out[1] += out[0] >> 51;
        out[0] &= MASK;

        Fe51(out)
    }
}

#[inline(always)]
fn m(x: u64, y: u64) -> u128 {
    (x as u128) * (y as u128)
}

impl FieldOps for Fe51 {
    fn zero() -> Self {
        Fe51([0, 0, 0, 0, 0])
    }

    fn one() -> Self {
        Fe51([1, 0, 0, 0, 0])
    }

    fn base_u() -> Self {
        Fe51([9, 0, 0, 0, 0])
    }

    fn from_bytes(bytes: &[u8; 32]) -> Self {
        // Limb i starts at bit 51·i: bytes 0, 6, 12, 19, 24 plus a shift
        Fe51([
            u64_from_le_bytes(&bytes[0..8]) & MASK,
            (u64_from_le_bytes(&bytes[6..14]) >> 3) & MASK,
            (u64_from_le_bytes(&bytes[12..20]) >> 6) & MASK,
            (u64_from_le_bytes(&bytes[19..27]) >> 1) & MASK,
            (u64_from_le_bytes(&bytes[24..32]) >> 12) & MASK,
        ])
    }

    fn to_bytes(&self) -> [u8; 32] {
        let mut l = Self::weak_reduce(self.0).0;

        // q = 1 iff the value is at least p; then subtract p by adding 19
        // and dropping bit 255.
        let mut q = (l[0] + 19) >> 51;
        q = (l[1] + q) >> 51;
        q = (l[2] + q) >> 51;
        q = (l[3] + q) >> 51;
        q = (l[4] + q) >> 51;

        l[0] += 19 * q;

        l[1] += l[0] >> 51;
        l[0] &= MASK;
        l[2] += l[1] >> 51;
        l[1] &= MASK;
        l[3] += l[2] >> 51;
        l[2] &= MASK;
        l[4] += l[3] >> 51;
        l[3] &= MASK;
        l[4] &= MASK;

        let mut out = [0u8; 32];
        let mut acc: u128 = 0;
        let mut bits = 0;
        let mut idx = 0;
        for limb in l {
            acc |= (limb as u128) << bits;
            bits += 51;
            while bits >= 8 {
                out[idx] = acc as u8;
                acc >>= 8;
                bits -= 8;
                idx += 1;
            }
        }
        // 255 bits leave seven for the last byte
        out[31] = acc as u8;
        out
    }

    fn add(&self, rhs: &Self) -> Self {
        let mut out = self.0;
        for (limb, r) in out.iter_mut().zip(rhs.0.iter()) {
            *limb += r;
        }
        Fe51(out)
    }

    fn sub(&self, rhs: &Self) -> Self {
        Self::weak_reduce([
            (self.0[0] + SIXTEEN_P[0]) - rhs.0[0],
            (self.0[1] + SIXTEEN_P[1]) - rhs.0[1],
            (self.0[2] + SIXTEEN_P[2]) - rhs.0[2],
            (self.0[3] + SIXTEEN_P[3]) - rhs.0[3],
            (self.0[4] + SIXTEEN_P[4]) - rhs.0[4],
        ])
    }

    fn mul(&self, rhs: &Self) -> Self {
        let a = &self.0;
        let b = &rhs.0;

        // 2^255 = 19 mod p folds the high columns back down
        let b1_19 = b[1] * 19;
        let b2_19 = b[2] * 19;
        let b3_19 = b[3] * 19;
        let b4_19 = b[4] * 19;

        let c0 = m(a[0], b[0]) + m(a[4], b1_19) + m(a[3], b2_19) + m(a[2], b3_19) + m(a[1], b4_19);
        let c1 = m(a[1], b[0]) + m(a[0], b[1]) + m(a[4], b2_19) + m(a[3], b3_19) + m(a[2], b4_19);
        let c2 = m(a[2], b[0]) + m(a[1], b[1]) + m(a[0], b[2]) + m(a[4], b3_19) + m(a[3], b4_19);
        let c3 = m(a[3], b[0]) + m(a[2], b[1]) + m(a[1], b[2]) + m(a[0], b[3]) + m(a[4], b4_19);
        let c4 = m(a[4], b[0]) + m(a[3], b[1]) + m(a[2], b[2]) + m(a[1], b[3]) + m(a[0], b[4]);

        Self::carry_wide([c0, c1, c2, c3, c4])
    }

    fn mul_a24(&self) -> Self {
        let k = X25519_A24 as u64;
        Self::carry_wide([
            m(self.0[0], k),
            m(self.0[1], k),
            m(self.0[2], k),
            m(self.0[3], k),
            m(self.0[4], k),
        ])
    }
}
