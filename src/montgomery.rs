// -*- mode: rust; -*-
//
// This file is part of curve25519-birational.
// See LICENSE for licensing information.

//! Group operations for Curve25519, in Montgomery form.
//!
//! The Montgomery curve is
//! $$
//! B v\^2 = u\^3 + A u\^2 + u, \qquad A = 486662,\ B = 1.
//! $$
//! We use \\((u,v)\\) instead of \\((x,y)\\) for Montgomery coordinates
//! to avoid confusion with Edwards coordinates.
//!
//! Unlike the Edwards addition law, the affine Montgomery chord-and-tangent
//! law is not complete: it has no formula for the point at infinity, for
//! doubling a point of order two, or for adding a point to its inverse.
//! These cases are handled explicitly, and the point at infinity is its
//! own [`MontgomeryPoint::Infinity`] variant rather than a sentinel
//! coordinate.
//!
//! ## Encoding
//!
//! In "Montgomery u" format, as used in X25519, a point is represented
//! just by \\(u\\) in a [`CompressedMontgomeryU`].  Since two curve points
//! share each \\(u\\)-coordinate, roundtripping through the encoding
//! discards the sign of \\(v\\).

#![allow(non_snake_case)]

use core::ops::Neg;

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

use crate::birational;
use crate::constants;
use crate::edwards::{CompressedEdwardsY, EdwardsPoint};
use crate::errors::CurveError;
use crate::field::FieldElement;
use crate::scalar::clamp_integer;
use crate::scalar::Scalar;
use crate::scalar_mul;
use crate::traits::GroupLaw;
use crate::traits::Identity;
use crate::traits::ValidityCheck;

// ------------------------------------------------------------------------
// Compressed points
// ------------------------------------------------------------------------

/// The \\(u\\)-coordinate of a point on the Montgomery curve, as 32
/// little-endian bytes.
///
/// The point at infinity encodes as \\(u = 0\\), the same bytes as the
/// two-torsion point \\((0, 0)\\).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CompressedMontgomeryU(pub [u8; 32]);

impl ConstantTimeEq for CompressedMontgomeryU {
    fn ct_eq(&self, other: &CompressedMontgomeryU) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl CompressedMontgomeryU {
    /// Encode the \\(u\\)-coordinate of `point`.
    pub fn from_point(point: &MontgomeryPoint) -> CompressedMontgomeryU {
        match point {
            MontgomeryPoint::Infinity => CompressedMontgomeryU([0u8; 32]),
            MontgomeryPoint::Affine { u, .. } => CompressedMontgomeryU(u.to_bytes()),
        }
    }

    /// View this `CompressedMontgomeryU` as an array of bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Copy this `CompressedMontgomeryU` to an array of bytes.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Attempt to recover a curve point with this \\(u\\)-coordinate.
    ///
    /// Bit 255 is ignored and a non-canonical \\(u\\) is reduced mod
    /// \\(p\\).  Of the two candidate points \\((u, \pm v)\\) the one with
    /// even \\(v\\) is returned.
    ///
    /// # Return
    ///
    /// `Err(CurveError::InvalidEncoding)` if \\(u\\) is the coordinate of a
    /// point on the quadratic twist rather than on the curve.
    pub fn lift(&self) -> Result<MontgomeryPoint, CurveError> {
        let u = FieldElement::from_bytes(&self.0);

        let uu = u.square();
        let rhs = &(&(&uu * &u) + &(&constants::MONTGOMERY_A * &uu)) + &u;
        let vv = &rhs * &constants::MONTGOMERY_B.invert();

        let (is_square, v) = vv.sqrt_even();
        if !bool::from(is_square) {
            log::debug!("rejecting Montgomery u-coordinate: point lies on the twist");
            return Err(CurveError::InvalidEncoding);
        }

        Ok(MontgomeryPoint::Affine { u, v })
    }

    /// Attempt to convert to an `EdwardsPoint`, using the supplied
    /// choice of sign for the `EdwardsPoint`.
    ///
    /// This is the \\(y\\)-only half of the birational map,
    /// \\(y = (u-1)/(u+1)\\), followed by Edwards decompression, so it
    /// needs no \\(v\\).
    ///
    /// # Inputs
    ///
    /// * `sign`: a `u8` denoting the desired sign of the resulting
    ///   `EdwardsPoint`.  `0` denotes positive and `1` negative.
    ///
    /// # Return
    ///
    /// * `Err(CurveError::UndefinedMapping)` if \\(u = -1\\);
    /// * `Err(CurveError::InvalidEncoding)` if the resulting \\(y\\) is
    ///   not the coordinate of an Edwards point.
    pub fn to_edwards(&self, sign: u8) -> Result<EdwardsPoint, CurveError> {
        let u = FieldElement::from_bytes(&self.0);

        let u_plus_one = &u + &FieldElement::ONE;
        if bool::from(u_plus_one.is_zero()) {
            log::debug!("birational map undefined: u = -1");
            return Err(CurveError::UndefinedMapping);
        }
        let y = &(&u - &FieldElement::ONE) * &u_plus_one.invert();

        let mut y_bytes = y.to_bytes();
        y_bytes[31] ^= sign << 7;

        CompressedEdwardsY(y_bytes).decompress()
    }
}

#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "serde")]
impl Serialize for CompressedMontgomeryU {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut tup = serializer.serialize_tuple(32)?;
        for byte in self.as_bytes().iter() {
            tup.serialize_element(byte)?;
        }
        tup.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for CompressedMontgomeryU {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CompressedMontgomeryUVisitor;

        impl<'de> Visitor<'de> for CompressedMontgomeryUVisitor {
            type Value = CompressedMontgomeryU;

            fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                formatter.write_str("a curve25519 u-coordinate as a 32-byte array")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<CompressedMontgomeryU, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut bytes = [0u8; 32];
                #[allow(clippy::needless_range_loop)]
                for i in 0..32 {
                    bytes[i] = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &"expected 32 bytes"))?;
                }
                Ok(CompressedMontgomeryU(bytes))
            }
        }

        deserializer.deserialize_tuple(32, CompressedMontgomeryUVisitor)
    }
}

// ------------------------------------------------------------------------
// Affine points
// ------------------------------------------------------------------------

/// A point on the Montgomery form of Curve25519.
#[derive(Copy, Clone, Debug)]
pub enum MontgomeryPoint {
    /// The point at infinity, the neutral element of the group.
    Infinity,
    /// A finite point \\((u, v)\\).
    Affine {
        /// The \\(u\\)-coordinate.
        u: FieldElement,
        /// The \\(v\\)-coordinate.
        v: FieldElement,
    },
}

impl MontgomeryPoint {
    /// Construct a finite point from affine coordinates, checking the
    /// curve equation.
    pub fn from_coordinates(u: FieldElement, v: FieldElement) -> Option<MontgomeryPoint> {
        let point = MontgomeryPoint::Affine { u, v };
        if point.is_valid() {
            Some(point)
        } else {
            None
        }
    }

    /// Compress this point to its \\(u\\)-coordinate.
    pub fn compress(&self) -> CompressedMontgomeryU {
        CompressedMontgomeryU::from_point(self)
    }

    /// Convert this point to the corresponding `EdwardsPoint`.
    ///
    /// See [`birational::montgomery_to_edwards`] for the failure cases.
    pub fn to_edwards(&self) -> Result<EdwardsPoint, CurveError> {
        birational::montgomery_to_edwards(self)
    }

    /// Compute `scalar * self` with the constant-time Montgomery ladder.
    ///
    /// All 256 bits of `scalar` are used; it is not reduced first.
    pub fn mul(&self, scalar: &Scalar) -> Result<MontgomeryPoint, CurveError> {
        let product = scalar_mul::mul(scalar, &LadderPoint::from_point(self))?;
        Ok(product.to_point())
    }

    /// Fixed-base scalar multiplication by the X25519 basepoint.
    pub fn mul_base(scalar: &Scalar) -> Result<MontgomeryPoint, CurveError> {
        constants::X25519_BASEPOINT.mul(scalar)
    }

    /// Multiply this point by `clamp_integer(bytes)`.
    pub fn mul_clamped(&self, bytes: [u8; 32]) -> Result<MontgomeryPoint, CurveError> {
        self.mul(&Scalar::from_bits(clamp_integer(bytes)))
    }
}

impl Identity for MontgomeryPoint {
    fn identity() -> MontgomeryPoint {
        MontgomeryPoint::Infinity
    }
}

impl Default for MontgomeryPoint {
    fn default() -> MontgomeryPoint {
        MontgomeryPoint::identity()
    }
}

impl ValidityCheck for MontgomeryPoint {
    fn is_valid(&self) -> bool {
        match self {
            MontgomeryPoint::Infinity => true,
            MontgomeryPoint::Affine { u, v } => {
                let uu = u.square();
                let lhs = &constants::MONTGOMERY_B * &v.square();
                let rhs = &(&(&uu * u) + &(&constants::MONTGOMERY_A * &uu)) + u;
                lhs == rhs
            }
        }
    }
}

impl ConditionallySelectable for MontgomeryPoint {
    fn conditional_select(a: &MontgomeryPoint, b: &MontgomeryPoint, choice: Choice) -> Self {
        let a = LadderPoint::from_point(a);
        let b = LadderPoint::from_point(b);
        LadderPoint::conditional_select(&a, &b, choice).to_point()
    }
}

impl ConstantTimeEq for MontgomeryPoint {
    fn ct_eq(&self, other: &MontgomeryPoint) -> Choice {
        LadderPoint::from_point(self).ct_eq(&LadderPoint::from_point(other))
    }
}

impl PartialEq for MontgomeryPoint {
    fn eq(&self, other: &MontgomeryPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for MontgomeryPoint {}

// ------------------------------------------------------------------------
// Addition and Subtraction
// ------------------------------------------------------------------------

impl GroupLaw for MontgomeryPoint {
    /// Add two points with the affine chord law:
    /// $$
    /// \lambda = \frac{v\_1 - v\_2}{u\_1 - u\_2}, \quad
    /// u\_3 = B\lambda\^2 - A - u\_1 - u\_2, \quad
    /// v\_3 = \lambda(u\_1 - u\_3) - v\_1.
    /// $$
    ///
    /// Equal operands are doubled, infinity is neutral, and a point plus
    /// its inverse is infinity.
    fn add(&self, other: &MontgomeryPoint) -> Result<MontgomeryPoint, CurveError> {
        let sum = LadderPoint::from_point(self).add(&LadderPoint::from_point(other))?;
        Ok(sum.to_point())
    }

    /// Double a point with the affine tangent law:
    /// $$
    /// \lambda = \frac{3u\^2 + 2Au + 1}{2Bv}, \quad
    /// u\_3 = B\lambda\^2 - A - 2u, \quad
    /// v\_3 = \lambda(u - u\_3) - v.
    /// $$
    ///
    /// A point of order two, with \\(v = 0\\), doubles to infinity.
    fn double(&self) -> Result<MontgomeryPoint, CurveError> {
        Ok(LadderPoint::from_point(self).double()?.to_point())
    }
}

/// A Montgomery point whose infinity flag is a `Choice` rather than an
/// enum variant.
///
/// The group law on `LadderPoint` always evaluates both the chord and the
/// tangent formula, spends exactly one inversion, and picks the result
/// for the exceptional cases with masks.  The ladder runs on this type so
/// that neither the group law nor the accumulator swap branches on the
/// scalar.
#[derive(Copy, Clone)]
struct LadderPoint {
    u: FieldElement,
    v: FieldElement,
    is_infinity: Choice,
}

impl LadderPoint {
    fn from_point(point: &MontgomeryPoint) -> LadderPoint {
        match *point {
            MontgomeryPoint::Infinity => LadderPoint::identity(),
            MontgomeryPoint::Affine { u, v } => LadderPoint {
                u,
                v,
                is_infinity: Choice::from(0),
            },
        }
    }

    fn to_point(self) -> MontgomeryPoint {
        if bool::from(self.is_infinity) {
            MontgomeryPoint::Infinity
        } else {
            MontgomeryPoint::Affine {
                u: self.u,
                v: self.v,
            }
        }
    }

    /// The sum of \\((u\_1, v\_1)\\) and the other point on the line of
    /// slope `lambda` through it, whose \\(u\\)-coordinate is `u2`.
    fn on_line(
        lambda: &FieldElement,
        u1: &FieldElement,
        v1: &FieldElement,
        u2: &FieldElement,
    ) -> LadderPoint {
        let u3 = &(&(&(&constants::MONTGOMERY_B * &lambda.square()) - &constants::MONTGOMERY_A)
            - u1)
            - u2;
        let v3 = &(lambda * &(u1 - &u3)) - v1;
        LadderPoint {
            u: u3,
            v: v3,
            is_infinity: Choice::from(0),
        }
    }

    /// \\(3u\^2 + 2Au + 1\\), the numerator of the tangent slope.
    fn tangent_numerator(&self) -> FieldElement {
        let uu = self.u.square();
        let two_u = &self.u + &self.u;
        &(&(&(&uu + &uu) + &uu) + &(&constants::MONTGOMERY_A * &two_u)) + &FieldElement::ONE
    }

    /// \\(2Bv\\), the denominator of the tangent slope.
    fn tangent_denominator(&self) -> FieldElement {
        &constants::MONTGOMERY_B * &(&self.v + &self.v)
    }
}

impl Identity for LadderPoint {
    fn identity() -> LadderPoint {
        LadderPoint {
            u: FieldElement::ZERO,
            v: FieldElement::ZERO,
            is_infinity: Choice::from(1),
        }
    }
}

impl ConditionallySelectable for LadderPoint {
    fn conditional_select(a: &LadderPoint, b: &LadderPoint, choice: Choice) -> LadderPoint {
        LadderPoint {
            u: FieldElement::conditional_select(&a.u, &b.u, choice),
            v: FieldElement::conditional_select(&a.v, &b.v, choice),
            is_infinity: Choice::from(u8::conditional_select(
                &a.is_infinity.unwrap_u8(),
                &b.is_infinity.unwrap_u8(),
                choice,
            )),
        }
    }
}

impl ConstantTimeEq for LadderPoint {
    fn ct_eq(&self, other: &LadderPoint) -> Choice {
        let both_infinite = self.is_infinity & other.is_infinity;
        let both_finite = !self.is_infinity & !other.is_infinity;
        both_infinite | (both_finite & self.u.ct_eq(&other.u) & self.v.ct_eq(&other.v))
    }
}

impl GroupLaw for LadderPoint {
    #[rustfmt::skip] // keep alignment of explanatory comments
    fn add(&self, other: &LadderPoint) -> Result<LadderPoint, CurveError> {
        let (u1, v1) = (&self.u, &self.v);
        let (u2, v2) = (&other.u, &other.v);

        let same_u = u1.ct_eq(u2);
        let same_v = v1.ct_eq(v2);
        let opposite_v = v2.ct_eq(&-v1);

        // Denominators of the chord and tangent slopes.  Each one that is
        // zero is replaced by one; its slope is discarded below.
        let mut chord_den = u1 - u2;
        let mut tangent_den = self.tangent_denominator();
        chord_den.conditional_assign(&FieldElement::ONE, chord_den.is_zero());
        tangent_den.conditional_assign(&FieldElement::ONE, tangent_den.is_zero());

        // One inversion serves both denominators.
        let inv = (&chord_den * &tangent_den).invert();
        let chord_inv = &inv * &tangent_den;
        let tangent_inv = &inv * &chord_den;

        let chord_slope = &(v1 - v2) * &chord_inv;
        let tangent_slope = &self.tangent_numerator() * &tangent_inv;

        let mut sum = LadderPoint::on_line(&chord_slope, u1, v1, u2);
        let doubled = LadderPoint::on_line(&tangent_slope, u1, v1, u1);

        sum.conditional_assign(&doubled, same_u & same_v);          // P + P
        sum.conditional_assign(&LadderPoint::identity(), same_u & opposite_v); // P + (-P)
        sum.conditional_assign(self, other.is_infinity);            // P + O
        sum.conditional_assign(other, self.is_infinity);            // O + Q

        // Same u, but v2 is neither v1 nor -v1: not both on the curve.
        let both_finite = !self.is_infinity & !other.is_infinity;
        if bool::from(both_finite & same_u & !same_v & !opposite_v) {
            log::warn!("zero denominator in Montgomery addition; operand is off the curve");
            return Err(CurveError::InvariantViolation);
        }

        Ok(sum)
    }

    fn double(&self) -> Result<LadderPoint, CurveError> {
        // Zero only for a point of order two, whose result is replaced.
        let inv = self.tangent_denominator().invert();
        let slope = &self.tangent_numerator() * &inv;

        let mut doubled = LadderPoint::on_line(&slope, &self.u, &self.v, &self.u);

        // The tangent at a point of order two is vertical.
        doubled.conditional_assign(&LadderPoint::identity(), self.is_infinity | self.v.is_zero());

        Ok(doubled)
    }
}

// ------------------------------------------------------------------------
// Negation
// ------------------------------------------------------------------------

impl Neg for &MontgomeryPoint {
    type Output = MontgomeryPoint;

    fn neg(self) -> MontgomeryPoint {
        match self {
            MontgomeryPoint::Infinity => MontgomeryPoint::Infinity,
            MontgomeryPoint::Affine { u, v } => MontgomeryPoint::Affine { u: *u, v: -v },
        }
    }
}

impl Neg for MontgomeryPoint {
    type Output = MontgomeryPoint;

    fn neg(self) -> MontgomeryPoint {
        -&self
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------
