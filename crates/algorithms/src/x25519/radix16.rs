//! GF(2^255 - 19) in sixteen 16-bit limbs
//!
//! Small signed limbs keep every product well inside an i64, so this
//! representation needs no wide multiplier and no target features. It backs
//! the portable X25519 backend.

use subtle::{Choice, ConditionallySelectable};
use zeroize::Zeroize;

use super::ladder::FieldOps;

/// 121665 = 0xDB41 + 1·2^16
const A24: Fe16 = Fe16([0xdb41, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

/// Field element as `Σ l[i]·2^(16i)`, limbs signed and loosely reduced
#[derive(Clone, Copy, Debug, Zeroize)]
pub(crate) struct Fe16(pub(crate) [i64; 16]);

impl ConditionallySelectable for Fe16 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = [0i64; 16];
        for (i, limb) in out.iter_mut().enumerate() {
            *limb = i64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        Fe16(out)
    }
}

impl Fe16 {
    /// Bring every limb into [0, 2^16) except for a small carry left in
    /// limb 0, folding 2^256 = 38 mod p
    fn carry(&mut self) {
        let o = &mut self.0;
        for i in 0..16 {
            o[i] += 1 << 16;
            let c = o[i] >> 16;
            if i < 15 {
                o[i + 1] += c - 1;
            } else {
                o[0] += 38 * (c - 1);
            }
            o[i] -= c << 16;
        }
    }
}

impl FieldOps for Fe16 {
    fn zero() -> Self {
        Fe16([0; 16])
    }

    fn one() -> Self {
        let mut l = [0; 16];
        l[0] = 1;
        Fe16(l)
    }

    fn base_u() -> Self {
        let mut l = [0; 16];
        l[0] = 9;
        Fe16(l)
    }

    fn from_bytes(bytes: &[u8; 32]) -> Self {
        let mut l = [0i64; 16];
        for (i, limb) in l.iter_mut().enumerate() {
            *limb = bytes[2 * i] as i64 + ((bytes[2 * i + 1] as i64) << 8);
        }
        l[15] &= 0x7fff;
        Fe16(l)
    }

    fn to_bytes(&self) -> [u8; 32] {
        let mut t = *self;
        t.carry();
        t.carry();
        t.carry();

        // Subtract p twice, keeping the difference whenever it did not borrow
        for _ in 0..2 {
            let mut m = [0i64; 16];
            m[0] = t.0[0] - 0xffed;
            for i in 1..15 {
                m[i] = t.0[i] - 0xffff - ((m[i - 1] >> 16) & 1);
                m[i - 1] &= 0xffff;
            }
            m[15] = t.0[15] - 0x7fff - ((m[14] >> 16) & 1);
            let borrow = ((m[15] >> 16) & 1) as u8;
            m[14] &= 0xffff;
            let mut m = Fe16(m);
            Fe16::conditional_swap(&mut t, &mut m, Choice::from(1 - borrow));
            m.zeroize();
        }

        let mut out = [0u8; 32];
        for i in 0..16 {
            out[2 * i] = (t.0[i] & 0xff) as u8;
            out[2 * i + 1] = (t.0[i] >> 8) as u8;
        }
        t.zeroize();
        out
    }

    fn add(&self, rhs: &Self) -> Self {
        let mut out = self.0;
        for (limb, r) in out.iter_mut().zip(rhs.0.iter()) {
            *limb += r;
        }
        Fe16(out)
    }

    fn sub(&self, rhs: &Self) -> Self {
        let mut out = self.0;
        for (limb, r) in out.iter_mut().zip(rhs.0.iter()) {
            *limb -= r;
        }
        Fe16(out)
    }

    fn mul(&self, rhs: &Self) -> Self {
        let mut t = [0i64; 31];
        for i in 0..16 {
            for j in 0..16 {
                t[i + j] += self.0[i] * rhs.0[j];
            }
        }
        for i in 0..15 {
            t[i] += 38 * t[i + 16];
        }
        let mut out = [0i64; 16];
        out.copy_from_slice(&t[..16]);
        t.zeroize();

        let mut out = Fe16(out);
        out.carry();
        out.carry();
        out
    }

    fn mul_a24(&self) -> Self {
        self.mul(&A24)
    }
}
