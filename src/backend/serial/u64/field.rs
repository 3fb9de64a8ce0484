// -*- mode: rust; -*-
//
// This file is part of curve25519-birational.
// See LICENSE for licensing information.

//! Field arithmetic modulo \\(p = 2\^{255} - 19\\), using \\(64\\)-bit
//! limbs with \\(128\\)-bit products.
//!
//! A `FieldElement51` stores \\(x = \sum\_i x\_i 2\^{51 i}\\) in five
//! `u64`s.  Limbs are kept below \\(2\^{52}\\) between operations, which
//! leaves headroom for a handful of additions before a multiplication
//! needs its inputs below \\(2\^{54}\\).  Every value-producing
//! operation here performs at least a weak reduction, so callers never
//! have to track limb growth.

use core::fmt::Debug;
use core::ops::Neg;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallySelectable;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

const LOW_51_BIT_MASK: u64 = (1u64 << 51) - 1;

/// An element of \\(\mathbb Z / (2\^{255} - 19)\\), in radix \\(2\^{51}\\).
///
/// The representation is not canonical: two `FieldElement51`s with
/// different limbs may encode the same field element.  Compare them
/// through their canonical byte encodings, never limb-by-limb.
#[derive(Copy, Clone)]
pub struct FieldElement51(pub(crate) [u64; 5]);

impl Debug for FieldElement51 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "FieldElement51({:?})", &self.0[..])
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for FieldElement51 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// u64 * u64 = u128 multiply helper
#[inline(always)]
fn m(x: u64, y: u64) -> u128 {
    (x as u128) * (y as u128)
}

/// Read eight little-endian bytes starting at `offset`.
#[inline(always)]
fn load8(bytes: &[u8; 32], offset: usize) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&bytes[offset..offset + 8]);
    u64::from_le_bytes(word)
}

impl<'b> AddAssign<&'b FieldElement51> for FieldElement51 {
    fn add_assign(&mut self, rhs: &'b FieldElement51) {
        *self = &*self + rhs;
    }
}

impl<'a, 'b> Add<&'b FieldElement51> for &'a FieldElement51 {
    type Output = FieldElement51;
    fn add(self, rhs: &'b FieldElement51) -> FieldElement51 {
        let mut sum = self.0;
        for (s, r) in sum.iter_mut().zip(rhs.0.iter()) {
            *s += r;
        }
        FieldElement51::reduce(sum)
    }
}

impl<'b> SubAssign<&'b FieldElement51> for FieldElement51 {
    fn sub_assign(&mut self, rhs: &'b FieldElement51) {
        *self = &*self - rhs;
    }
}

impl<'a, 'b> Sub<&'b FieldElement51> for &'a FieldElement51 {
    type Output = FieldElement51;
    fn sub(self, rhs: &'b FieldElement51) -> FieldElement51 {
        // Add 16p before subtracting so that no limb can underflow; the
        // inputs are weakly reduced, hence below 2^52 < 16 * 2^51.
        FieldElement51::reduce([
            (self.0[0] + 36028797018963664u64) - rhs.0[0],
            (self.0[1] + 36028797018963952u64) - rhs.0[1],
            (self.0[2] + 36028797018963952u64) - rhs.0[2],
            (self.0[3] + 36028797018963952u64) - rhs.0[3],
            (self.0[4] + 36028797018963952u64) - rhs.0[4],
        ])
    }
}

impl<'b> MulAssign<&'b FieldElement51> for FieldElement51 {
    fn mul_assign(&mut self, rhs: &'b FieldElement51) {
        *self = &*self * rhs;
    }
}

impl<'a, 'b> Mul<&'b FieldElement51> for &'a FieldElement51 {
    type Output = FieldElement51;

    #[rustfmt::skip] // keep alignment of c* calculations
    fn mul(self, rhs: &'b FieldElement51) -> FieldElement51 {
        let a: &[u64; 5] = &self.0;
        let b: &[u64; 5] = &rhs.0;

        debug_assert!(a.iter().chain(b.iter()).all(|limb| *limb < (1 << 54)));

        // 2^255 = 19 (mod p), so limbs that wrap past the top come back
        // multiplied by 19.
        let b1_19 = b[1] * 19;
        let b2_19 = b[2] * 19;
        let b3_19 = b[3] * 19;
        let b4_19 = b[4] * 19;

        let c0: u128 = m(a[0], b[0]) + m(a[4], b1_19) + m(a[3], b2_19) + m(a[2], b3_19) + m(a[1], b4_19);
        let c1: u128 = m(a[1], b[0]) + m(a[0], b[1])  + m(a[4], b2_19) + m(a[3], b3_19) + m(a[2], b4_19);
        let c2: u128 = m(a[2], b[0]) + m(a[1], b[1])  + m(a[0], b[2])  + m(a[4], b3_19) + m(a[3], b4_19);
        let c3: u128 = m(a[3], b[0]) + m(a[2], b[1])  + m(a[1], b[2])  + m(a[0], b[3])  + m(a[4], b4_19);
        let c4: u128 = m(a[4], b[0]) + m(a[3], b[1])  + m(a[2], b[2])  + m(a[1], b[3])  + m(a[0], b[4]);

        FieldElement51::carry_wide([c0, c1, c2, c3, c4])
    }
}

impl<'a> Neg for &'a FieldElement51 {
    type Output = FieldElement51;
    fn neg(self) -> FieldElement51 {
        let mut output = *self;
        output.negate();
        output
    }
}

impl ConditionallySelectable for FieldElement51 {
    fn conditional_select(a: &FieldElement51, b: &FieldElement51, choice: Choice) -> FieldElement51 {
        let mut limbs = [0u64; 5];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        FieldElement51(limbs)
    }

    fn conditional_swap(a: &mut FieldElement51, b: &mut FieldElement51, choice: Choice) {
        for i in 0..5 {
            u64::conditional_swap(&mut a.0[i], &mut b.0[i], choice);
        }
    }

    fn conditional_assign(&mut self, other: &FieldElement51, choice: Choice) {
        for i in 0..5 {
            self.0[i].conditional_assign(&other.0[i], choice);
        }
    }
}

impl FieldElement51 {
    /// The field element \\(0\\).
    pub const ZERO: FieldElement51 = FieldElement51([0, 0, 0, 0, 0]);
    /// The field element \\(1\\).
    pub const ONE: FieldElement51 = FieldElement51([1, 0, 0, 0, 0]);
    /// The field element \\(-1 = p - 1\\).
    pub const MINUS_ONE: FieldElement51 = FieldElement51([
        2251799813685228,
        2251799813685247,
        2251799813685247,
        2251799813685247,
        2251799813685247,
    ]);

    /// Construct from limbs that are already below \\(2\^{51}\\).
    pub(crate) const fn from_limbs(limbs: [u64; 5]) -> FieldElement51 {
        FieldElement51(limbs)
    }

    /// Construct a small field element.
    pub const fn from_u64(x: u64) -> FieldElement51 {
        FieldElement51([x & LOW_51_BIT_MASK, x >> 51, 0, 0, 0])
    }

    /// Invert the sign of this field element.
    pub fn negate(&mut self) {
        // 16p - self, then a weak reduction.
        let neg = FieldElement51::reduce([
            36028797018963664u64 - self.0[0],
            36028797018963952u64 - self.0[1],
            36028797018963952u64 - self.0[2],
            36028797018963952u64 - self.0[3],
            36028797018963952u64 - self.0[4],
        ]);
        self.0 = neg.0;
    }

    /// Propagate carries so that every limb is below \\(2\^{51} + 2\^{13}\\).
    #[inline(always)]
    fn reduce(mut limbs: [u64; 5]) -> FieldElement51 {
        let c0 = limbs[0] >> 51;
        let c1 = limbs[1] >> 51;
        let c2 = limbs[2] >> 51;
        let c3 = limbs[3] >> 51;
        let c4 = limbs[4] >> 51;

        for limb in limbs.iter_mut() {
            *limb &= LOW_51_BIT_MASK;
        }

        // The carry out of the top limb wraps around times 19.
        limbs[0] += c4 * 19;
        limbs[1] += c0;
        limbs[2] += c1;
        limbs[3] += c2;
        limbs[4] += c3;

        FieldElement51(limbs)
    }

    /// Carry a vector of \\(128\\)-bit coefficients down to \\(51\\)-bit limbs.
    #[inline(always)]
    fn carry_wide(c: [u128; 5]) -> FieldElement51 {
        let mut out = [0u64; 5];
        let mut carry: u128 = 0;
        for i in 0..5 {
            let t = c[i] + carry;
            out[i] = (t as u64) & LOW_51_BIT_MASK;
            carry = t >> 51;
        }

        // carry < 2^64 / 19, so the product fits.
        out[0] += (carry as u64) * 19;
        out[1] += out[0] >> 51;
        out[0] &= LOW_51_BIT_MASK;

        FieldElement51(out)
    }

    /// Load a field element from the low 255 bits of a 32-byte
    /// little-endian string.  Bit 255 is ignored and values in
    /// \\([p, 2\^{255})\\) are accepted and reduced.
    pub fn from_bytes(bytes: &[u8; 32]) -> FieldElement51 {
        FieldElement51([
            load8(bytes, 0) & LOW_51_BIT_MASK,
            (load8(bytes, 6) >> 3) & LOW_51_BIT_MASK,
            (load8(bytes, 12) >> 6) & LOW_51_BIT_MASK,
            (load8(bytes, 19) >> 1) & LOW_51_BIT_MASK,
            (load8(bytes, 24) >> 12) & LOW_51_BIT_MASK,
        ])
    }

    /// Serialize to the canonical 32-byte little-endian encoding of the
    /// fully reduced value in \\([0, p)\\).  Bit 255 is always clear.
    pub fn to_bytes(self) -> [u8; 32] {
        let mut limbs = FieldElement51::reduce(self.0).0;

        // Now limbs < 2^51 + 2^13, so the value is below 2p.  Compute
        // q = 1 if value >= p by checking whether value + 19 overflows
        // 2^255, then subtract q * p by adding 19q and dropping bit 255.
        let mut q = (limbs[0] + 19) >> 51;
        for limb in &limbs[1..] {
            q = (limb + q) >> 51;
        }

        limbs[0] += 19 * q;
        for i in 0..4 {
            limbs[i + 1] += limbs[i] >> 51;
            limbs[i] &= LOW_51_BIT_MASK;
        }
        limbs[4] &= LOW_51_BIT_MASK;

        // Pack 5 x 51 = 255 bits into 32 bytes.
        let mut bytes = [0u8; 32];
        let mut acc: u128 = 0;
        let mut acc_bits = 0;
        let mut i = 0;
        for limb in limbs.iter() {
            acc |= (*limb as u128) << acc_bits;
            acc_bits += 51;
            while acc_bits >= 8 {
                bytes[i] = acc as u8;
                acc >>= 8;
                acc_bits -= 8;
                i += 1;
            }
        }
        bytes[31] = acc as u8;

        bytes
    }

    /// Compute `self^(2^k)` by `k` successive squarings.
    pub fn pow2k(&self, mut k: u32) -> FieldElement51 {
        debug_assert!(k > 0);
        let mut output = *self;
        while k > 0 {
            output = output.square();
            k -= 1;
        }
        output
    }

    /// Compute `self^2`.
    #[rustfmt::skip] // keep alignment of c* calculations
    pub fn square(&self) -> FieldElement51 {
        let a = &self.0;

        let a3_19 = a[3] * 19;
        let a4_19 = a[4] * 19;
        let d0 = a[0] * 2;
        let d1 = a[1] * 2;
        let d2 = a[2] * 2;
        let d4 = a[4] * 2;

        let c0: u128 = m(a[0],  a[0]) + m(d1, a4_19) + m(d2, a3_19);
        let c1: u128 = m(a[3], a3_19) + m(d0,  a[1]) + m(d2, a4_19);
        let c2: u128 = m(a[1],  a[1]) + m(d0,  a[2]) + m(d4, a3_19);
        let c3: u128 = m(a[4], a4_19) + m(d0,  a[3]) + m(d1,  a[2]);
        let c4: u128 = m(a[2],  a[2]) + m(d0,  a[4]) + m(d1,  a[3]);

        FieldElement51::carry_wide([c0, c1, c2, c3, c4])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// p - 1, little-endian.
    static P_MINUS_ONE: [u8; 32] = [
        0xec, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0x7f,
    ];

    #[test]
    fn minus_one_encoding() {
        assert_eq!(FieldElement51::MINUS_ONE.to_bytes(), P_MINUS_ONE);
        let mut one = FieldElement51::ONE;
        one.negate();
        assert_eq!(one.to_bytes(), P_MINUS_ONE);
    }

    #[test]
    fn non_canonical_input_is_reduced() {
        // p + 3 encodes as 3.
        let mut p_plus_three = P_MINUS_ONE;
        p_plus_three[0] = 0xf0;
        let fe = FieldElement51::from_bytes(&p_plus_three);
        assert_eq!(fe.to_bytes(), FieldElement51::from_u64(3).to_bytes());
    }

    #[test]
    fn high_bit_is_ignored() {
        let mut bytes = FieldElement51::from_u64(7).to_bytes();
        bytes[31] |= 0x80;
        assert_eq!(
            FieldElement51::from_bytes(&bytes).to_bytes(),
            FieldElement51::from_u64(7).to_bytes()
        );
    }

    #[test]
    fn square_matches_mul() {
        let mut bytes = [0u8; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = (i as u8).wrapping_mul(37).wrapping_add(11);
        }
        bytes[31] &= 0x7f;
        let a = FieldElement51::from_bytes(&bytes);
        assert_eq!((&a * &a).to_bytes(), a.square().to_bytes());
        assert_eq!(a.pow2k(3).to_bytes(), a.square().square().square().to_bytes());
    }

    #[test]
    fn sub_wraps_around() {
        let two = FieldElement51::from_u64(2);
        let five = FieldElement51::from_u64(5);
        let minus_three = &two - &five;
        assert_eq!((&minus_three + &FieldElement51::from_u64(3)).to_bytes(), [0u8; 32]);
    }

    #[test]
    fn conditional_swap_swaps_only_on_choice() {
        let mut a = FieldElement51::from_u64(1);
        let mut b = FieldElement51::from_u64(2);
        FieldElement51::conditional_swap(&mut a, &mut b, Choice::from(0));
        assert_eq!(a.to_bytes(), FieldElement51::from_u64(1).to_bytes());
        FieldElement51::conditional_swap(&mut a, &mut b, Choice::from(1));
        assert_eq!(a.to_bytes(), FieldElement51::from_u64(2).to_bytes());
        assert_eq!(b.to_bytes(), FieldElement51::from_u64(1).to_bytes());
    }
}
