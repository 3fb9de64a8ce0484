// -*- mode: rust; coding: utf-8; -*-
//
// This file is part of curve25519-birational.
// See LICENSE for licensing information.

//! Field arithmetic modulo \\(p = 2\^{255} - 19\\).
//!
//! The `field` module provides a type alias `field::FieldElement` to
//! the `u64` backend's field element, and the operations built on top
//! of the backend's ring arithmetic: inversion, the exponentiations
//! used for square roots, and constant-time comparisons.
//!
//! Every curve operation in this crate reaches modular inversion and
//! exponentiation through this module only.

use subtle::Choice;
use subtle::ConditionallyNegatable;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

use crate::backend;
use crate::backend::serial::u64::constants;

/// A `FieldElement` represents an element of the field
/// \\( \mathbb Z / (2\^{255} - 19)\\).
///
/// The `FieldElement` type is an alias for the backend's
/// `FieldElement51`; its limbs are not canonical, so equality is
/// always decided on the canonical byte encoding.
pub type FieldElement = backend::serial::u64::field::FieldElement51;

#[cfg(test)]
std::thread_local! {
    /// Number of calls to `FieldElement::invert` on this thread.
    pub(crate) static INVERSIONS: core::cell::Cell<usize> = const { core::cell::Cell::new(0) };
}

impl Eq for FieldElement {}

impl PartialEq for FieldElement {
    fn eq(&self, other: &FieldElement) -> bool {
        self.ct_eq(other).into()
    }
}

impl ConstantTimeEq for FieldElement {
    /// Test equality between two `FieldElement`s.  Since the
    /// internal representation is not canonical, the field elements
    /// are normalized to wire format before comparison.
    fn ct_eq(&self, other: &FieldElement) -> Choice {
        self.to_bytes().ct_eq(&other.to_bytes())
    }
}

impl FieldElement {
    /// Determine if this `FieldElement` is negative, in the sense
    /// used in the ed25519 paper: `x` is negative if the low bit is
    /// set.
    ///
    /// # Return
    ///
    /// If negative, return `Choice(1)`.  Otherwise, return `Choice(0)`.
    pub fn is_negative(&self) -> Choice {
        let bytes = self.to_bytes();
        (bytes[0] & 1).into()
    }

    /// Determine if this `FieldElement` is zero.
    ///
    /// # Return
    ///
    /// If zero, return `Choice(1)`.  Otherwise, return `Choice(0)`.
    pub fn is_zero(&self) -> Choice {
        let zero = [0u8; 32];
        let bytes = self.to_bytes();

        bytes.ct_eq(&zero)
    }

    /// Compute (self^(2^250-1), self^11), used as a helper function
    /// within invert(), pow_p58() and pow_p38().
    #[rustfmt::skip] // keep alignment of explanatory comments
    fn pow22501(&self) -> (FieldElement, FieldElement) {
        // Instead of managing which temporary variables are used
        // for what, we define as many as we need and leave stack
        // allocation to the compiler
        //
        // Each temporary variable t_i is of the form (self)^e_i.
        // Squaring t_i corresponds to multiplying e_i by 2,
        // so the pow2k function shifts e_i left by k places.
        // Multiplying t_i and t_j corresponds to adding e_i + e_j.
        //
        // Temporary t_i                      Nonzero bits of e_i
        //
        let t0  = self.square();           // 1         e_0 = 2^1
        let t1  = t0.square().square();    // 3         e_1 = 2^3
        let t2  = self * &t1;              // 3,0       e_2 = 2^3 + 2^0
        let t3  = &t0 * &t2;               // 3,1,0
        let t4  = t3.square();             // 4,2,1
        let t5  = &t2 * &t4;               // 4,3,2,1,0
        let t6  = t5.pow2k(5);             // 9,8,7,6,5
        let t7  = &t6 * &t5;               // 9,8,7,6,5,4,3,2,1,0
        let t8  = t7.pow2k(10);            // 19..10
        let t9  = &t8 * &t7;               // 19..0
        let t10 = t9.pow2k(20);            // 39..20
        let t11 = &t10 * &t9;              // 39..0
        let t12 = t11.pow2k(10);           // 49..10
        let t13 = &t12 * &t7;              // 49..0
        let t14 = t13.pow2k(50);           // 99..50
        let t15 = &t14 * &t13;             // 99..0
        let t16 = t15.pow2k(100);          // 199..100
        let t17 = &t16 * &t15;             // 199..0
        let t18 = t17.pow2k(50);           // 249..50
        let t19 = &t18 * &t13;             // 249..0

        (t19, t3)
    }

    /// Given a nonzero field element, compute its inverse.
    ///
    /// The inverse is computed as self^(p-2), since
    /// x^(p-2)x = x^(p-1) = 1 (mod p).
    ///
    /// This function returns zero on input zero.  Callers that divide
    /// check the denominator with `is_zero` first.
    #[rustfmt::skip] // keep alignment of explanatory comments
    pub fn invert(&self) -> FieldElement {
        #[cfg(test)]
        INVERSIONS.with(|c| c.set(c.get() + 1));

        // The bits of p-2 = 2^255 -19 -2 are 11010111111...11.
        //
        //                                 nonzero bits of exponent
        let (t19, t3) = self.pow22501();   // t19: 249..0 ; t3: 3,1,0
        let t20 = t19.pow2k(5);            // 254..5
        &t20 * &t3                         // 254..5,3,1,0
    }

    /// Raise this field element to the power (p-5)/8 = 2^252 - 3.
    #[rustfmt::skip] // keep alignment of explanatory comments
    pub fn pow_p58(&self) -> FieldElement {
        // The bits of (p-5)/8 are 101111.....11.
        //
        //                                 nonzero bits of exponent
        let (t19, _) = self.pow22501();    // 249..0
        let t20 = t19.pow2k(2);            // 251..2
        self * &t20                        // 251..2,0
    }

    /// Raise this field element to the power (p+3)/8 = 2^252 - 2.
    #[rustfmt::skip] // keep alignment of explanatory comments
    pub fn pow_p38(&self) -> FieldElement {
        // The bits of (p+3)/8 are 1111.....110.
        //
        //                                 nonzero bits of exponent
        let (t19, _) = self.pow22501();    // 249..0
        let t20 = t19.pow2k(2);            // 251..2
        &t20 * &self.square()              // 251..2,1
    }

    /// Compute a square root of `self`, if one exists.
    ///
    /// Since \\(p \equiv 5 \pmod 8\\), the candidate
    /// \\(r = x\^{(p+3)/8}\\) satisfies \\(r\^2 = \pm x\\) whenever
    /// \\(x\\) is a square.  If \\(r\^2 = -x\\), then
    /// \\(r \cdot 2\^{(p-1)/4}\\) is a root instead.
    ///
    /// # Return
    ///
    /// - `(Choice(1), r)` with \\(r\^2 = x\\) if `self` is a square
    ///   (including zero);
    /// - `(Choice(0), garbage)` if `self` is a nonsquare.
    ///
    /// The sign of the returned root is not normalized.
    pub fn sqrt(&self) -> (Choice, FieldElement) {
        let mut r = self.pow_p38();
        let check = r.square();

        let correct_sign_sqrt = check.ct_eq(self);
        let flipped_sign_sqrt = check.ct_eq(&(-self));

        let r_prime = &r * &constants::SQRT_M1;
        r.conditional_assign(&r_prime, flipped_sign_sqrt);

        (correct_sign_sqrt | flipped_sign_sqrt, r)
    }

    /// Return the root of `self` whose canonical encoding is even.
    pub(crate) fn sqrt_even(&self) -> (Choice, FieldElement) {
        let (was_square, mut r) = self.sqrt();
        let r_is_negative = r.is_negative();
        r.conditional_negate(r_is_negative);
        (was_square, r)
    }
}

#[cfg(test)]
mod test {
    use crate::field::*;

    /// Random element a of GF(2^255-19), from Sage
    /// a = 1070314506888354081329385823235218444233221\
    ///     2228051251926706380353716438957572
    static A_BYTES: [u8; 32] = [
        0x04, 0xfe, 0xdf, 0x98, 0xa7, 0xfa, 0x0a, 0x68, 0x84, 0x92, 0xbd, 0x59, 0x08, 0x07, 0xa7,
        0x03, 0x9e, 0xd1, 0xf6, 0xf2, 0xe1, 0xd9, 0xe2, 0xa4, 0xa4, 0x51, 0x47, 0x36, 0xf3, 0xc3,
        0xa9, 0x17,
    ];

    /// Byte representation of a**2
    static ASQ_BYTES: [u8; 32] = [
        0x75, 0x97, 0x24, 0x9e, 0xe6, 0x06, 0xfe, 0xab, 0x24, 0x04, 0x56, 0x68, 0x07, 0x91, 0x2d,
        0x5d, 0x0b, 0x0f, 0x3f, 0x1c, 0xb2, 0x6e, 0xf2, 0xe2, 0x63, 0x9c, 0x12, 0xba, 0x73, 0x0b,
        0xe3, 0x62,
    ];

    /// Byte representation of 1/a
    static AINV_BYTES: [u8; 32] = [
        0x96, 0x1b, 0xcd, 0x8d, 0x4d, 0x5e, 0xa2, 0x3a, 0xe9, 0x36, 0x37, 0x93, 0xdb, 0x7b, 0x4d,
        0x70, 0xb8, 0x0d, 0xc0, 0x55, 0xd0, 0x4c, 0x1d, 0x7b, 0x90, 0x71, 0xd8, 0xe9, 0xb6, 0x18,
        0xe6, 0x30,
    ];

    #[test]
    fn a_mul_a_vs_a_squared_constant() {
        let a = FieldElement::from_bytes(&A_BYTES);
        let asq = FieldElement::from_bytes(&ASQ_BYTES);
        assert_eq!(asq, &a * &a);
        assert_eq!(asq, a.square());
    }

    #[test]
    fn a_invert_vs_inverse_of_a_constant() {
        let a = FieldElement::from_bytes(&A_BYTES);
        let ainv = FieldElement::from_bytes(&AINV_BYTES);
        let should_be_inverse = a.invert();
        assert_eq!(ainv, should_be_inverse);
        assert_eq!(FieldElement::ONE, &a * &should_be_inverse);
    }

    #[test]
    fn invert_zero_is_zero() {
        assert_eq!(FieldElement::ZERO.invert(), FieldElement::ZERO);
    }

    #[test]
    fn sqrt_m1_squares_to_minus_one() {
        assert_eq!(constants::SQRT_M1.square(), FieldElement::MINUS_ONE);
    }

    #[test]
    fn sqrt_of_a_square() {
        let a = FieldElement::from_bytes(&A_BYTES);
        let asq = FieldElement::from_bytes(&ASQ_BYTES);
        let (ok, r) = asq.sqrt();
        assert!(bool::from(ok));
        assert!(r == a || r == -&a);

        let (ok, r) = asq.sqrt_even();
        assert!(bool::from(ok));
        assert!(!bool::from(r.is_negative()));
        assert_eq!(r.square(), asq);
    }

    #[test]
    fn sqrt_of_zero() {
        let (ok, r) = FieldElement::ZERO.sqrt();
        assert!(bool::from(ok));
        assert!(bool::from(r.is_zero()));
    }

    #[test]
    fn sqrt_of_nonsquare_fails() {
        // 2 is a nonsquare mod p, since p = 5 (mod 8).
        let (ok, _) = FieldElement::from_u64(2).sqrt();
        assert!(!bool::from(ok));
        // -1 is a square, so -2 is a nonsquare too.
        let (ok, _) = (-&FieldElement::from_u64(2)).sqrt();
        assert!(!bool::from(ok));
    }

    #[test]
    fn pow_p58_and_pow_p38_differ_by_one_power() {
        let a = FieldElement::from_bytes(&A_BYTES);
        assert_eq!(&a.pow_p58() * &a, a.pow_p38());
    }

    #[test]
    fn equality_uses_canonical_form() {
        // 0 and p have different limbs but the same value.
        let p_limbs = FieldElement::from_limbs([
            2251799813685229,
            2251799813685247,
            2251799813685247,
            2251799813685247,
            2251799813685247,
        ]);
        assert_eq!(p_limbs, FieldElement::ZERO);
        assert!(bool::from(p_limbs.is_zero()));
    }

    #[test]
    fn is_negative_is_parity() {
        assert!(!bool::from(FieldElement::from_u64(2).is_negative()));
        assert!(bool::from(FieldElement::from_u64(3).is_negative()));
        // p - 1 is even.
        assert!(!bool::from(FieldElement::MINUS_ONE.is_negative()));
    }
}
