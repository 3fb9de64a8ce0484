// -*- mode: rust; -*-
//
// This file is part of curve25519-birational.
// See LICENSE for licensing information.

//! Group operations for Curve25519, in Edwards form.
//!
//! ## Encoding and Decoding
//!
//! Encoding is done by converting to and from a `CompressedEdwardsY`
//! struct, which is a typed wrapper around `[u8; 32]`.
//!
//! ## Equality Testing
//!
//! The `EdwardsPoint` struct implements the [`subtle::ConstantTimeEq`]
//! trait for constant-time equality checking, and also uses this to
//! ensure `Eq` equality checking runs in constant time.
//!
//! ## Affine coordinates
//!
//! Points are held as affine \\((x, y)\\) on the twisted Edwards curve
//! $$
//! -x\^2 + y\^2 = 1 + d x\^2 y\^2,
//! $$
//! and added with the complete affine addition law.  Every addition and
//! doubling costs one field inversion.
//!
//! ## Validity Checking
//!
//! There is no function for checking whether a point is valid.
//! Instead, the `EdwardsPoint` struct is guaranteed to hold a valid
//! point on the curve: decompression and
//! [`EdwardsPoint::from_coordinates`] check the curve equation.
//!
//! The only way a caller can obtain an off-curve point is through a bug
//! in this crate; the group law reports it as
//! [`CurveError::InvariantViolation`].

#![allow(non_snake_case)]

use core::array::TryFromSliceError;
use core::fmt::Debug;
use core::ops::Neg;

use subtle::Choice;
use subtle::ConditionallyNegatable;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

use crate::birational;
use crate::constants;
use crate::errors::CurveError;
use crate::field::FieldElement;
use crate::montgomery::MontgomeryPoint;
use crate::scalar::clamp_integer;
use crate::scalar::Scalar;
use crate::scalar_mul;
use crate::traits::GroupLaw;
use crate::traits::Identity;
use crate::traits::ValidityCheck;

// ------------------------------------------------------------------------
// Compressed points
// ------------------------------------------------------------------------

/// In "Edwards y" / "Ed25519" format, the curve point \\((x,y)\\) is
/// determined by the \\(y\\)-coordinate and the sign of \\(x\\).
///
/// The first 255 bits of a `CompressedEdwardsY` represent the
/// \\(y\\)-coordinate.  The high bit of the 32nd byte gives the sign of \\(x\\).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct CompressedEdwardsY(pub [u8; 32]);

impl ConstantTimeEq for CompressedEdwardsY {
    fn ct_eq(&self, other: &CompressedEdwardsY) -> Choice {
        self.as_bytes().ct_eq(other.as_bytes())
    }
}

impl Debug for CompressedEdwardsY {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "CompressedEdwardsY: {:?}", self.as_bytes())
    }
}

impl CompressedEdwardsY {
    /// View this `CompressedEdwardsY` as an array of bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Copy this `CompressedEdwardsY` to an array of bytes.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Construct a `CompressedEdwardsY` from a slice of bytes.
    ///
    /// # Errors
    ///
    /// Returns [`TryFromSliceError`] if the input `bytes` slice does not have
    /// a length of 32.
    pub fn from_slice(bytes: &[u8]) -> Result<CompressedEdwardsY, TryFromSliceError> {
        bytes.try_into().map(CompressedEdwardsY)
    }

    /// Attempt to decompress to an `EdwardsPoint`.
    ///
    /// The sign bit is the top bit of byte 31; the remaining 255 bits are
    /// \\(y\\), little-endian.  The \\(x\\)-coordinate is recovered from
    /// \\(x\^2 = (y\^2 - 1) / (d y\^2 + 1)\\).
    ///
    /// # Return
    ///
    /// `Err(CurveError::InvalidEncoding)` if
    ///
    /// * the 255-bit \\(y\\) is not below \\(p\\);
    /// * \\(x\^2\\) has no square root mod \\(p\\);
    /// * \\(x = 0\\) but the sign bit is set.
    pub fn decompress(&self) -> Result<EdwardsPoint, CurveError> {
        let (is_valid_y_coord, X, Y) = decompress::step_1(self);

        if !bool::from(is_valid_y_coord) {
            log::debug!("rejecting Edwards encoding: y is not the coordinate of a curve point");
            return Err(CurveError::InvalidEncoding);
        }

        decompress::step_2(self, X, Y)
    }
}

mod decompress {
    use super::*;

    /// Decode \\(y\\) and compute a candidate \\(x\\), returning whether
    /// \\(x\^2\\) had a square root.
    #[rustfmt::skip] // keep alignment of explanatory comments
    pub(super) fn step_1(repr: &CompressedEdwardsY) -> (Choice, FieldElement, FieldElement) {
        let mut y_bytes = repr.to_bytes();
        y_bytes[31] &= 0b0111_1111;

        let Y = FieldElement::from_bytes(&y_bytes);
        let is_canonical = Y.to_bytes().ct_eq(&y_bytes);

        let YY = Y.square();
        let u = &YY - &FieldElement::ONE;                  // u =  y²-1
        let v = &(&YY * &constants::EDWARDS_D) + &FieldElement::ONE; // v = dy²+1

        // v is never zero, since -1/d is not a square.
        let XX = &u * &v.invert();
        let (is_square, X) = XX.sqrt();

        (is_canonical & is_square, X, Y)
    }

    /// Fix the sign of \\(x\\) according to the encoding's sign bit.
    pub(super) fn step_2(
        repr: &CompressedEdwardsY,
        mut X: FieldElement,
        Y: FieldElement,
    ) -> Result<EdwardsPoint, CurveError> {
        let compressed_sign_bit = Choice::from(repr.as_bytes()[31] >> 7);

        if bool::from(X.is_zero() & compressed_sign_bit) {
            log::debug!("rejecting Edwards encoding: x = 0 with the sign bit set");
            return Err(CurveError::InvalidEncoding);
        }

        // X.is_negative() is the parity of the canonical value of x, so
        // flipping to p - x when it disagrees with the sign bit matches it.
        let flip_sign = X.is_negative() ^ compressed_sign_bit;
        X.conditional_negate(flip_sign);

        Ok(EdwardsPoint { x: X, y: Y })
    }
}

impl TryFrom<&[u8]> for CompressedEdwardsY {
    type Error = TryFromSliceError;

    fn try_from(slice: &[u8]) -> Result<CompressedEdwardsY, TryFromSliceError> {
        Self::from_slice(slice)
    }
}

impl Identity for CompressedEdwardsY {
    fn identity() -> CompressedEdwardsY {
        CompressedEdwardsY([
            1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0,
        ])
    }
}

impl Default for CompressedEdwardsY {
    fn default() -> CompressedEdwardsY {
        CompressedEdwardsY::identity()
    }
}

// ------------------------------------------------------------------------
// Serde support
// ------------------------------------------------------------------------
// Serializes to and from `EdwardsPoint` directly, doing compression
// and decompression internally.  This means that users can create
// structs containing `EdwardsPoint`s and use Serde's derived
// serializers to serialize those structures.

#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "serde")]
impl Serialize for EdwardsPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.compress().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl Serialize for CompressedEdwardsY {
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
impl<'de> Deserialize<'de> for EdwardsPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        CompressedEdwardsY::deserialize(deserializer)?
            .decompress()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for CompressedEdwardsY {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CompressedEdwardsYVisitor;

        impl<'de> Visitor<'de> for CompressedEdwardsYVisitor {
            type Value = CompressedEdwardsY;

            fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                formatter.write_str("32 bytes of data")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<CompressedEdwardsY, A::Error>
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
                Ok(CompressedEdwardsY(bytes))
            }
        }

        deserializer.deserialize_tuple(32, CompressedEdwardsYVisitor)
    }
}

// ------------------------------------------------------------------------
// Affine points
// ------------------------------------------------------------------------

/// An `EdwardsPoint` represents a point on the Edwards form of Curve25519,
/// in affine coordinates.
#[derive(Copy, Clone)]
pub struct EdwardsPoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

impl Identity for EdwardsPoint {
    fn identity() -> EdwardsPoint {
        EdwardsPoint {
            x: FieldElement::ZERO,
            y: FieldElement::ONE,
        }
    }
}

impl Default for EdwardsPoint {
    fn default() -> EdwardsPoint {
        EdwardsPoint::identity()
    }
}

impl ValidityCheck for EdwardsPoint {
    fn is_valid(&self) -> bool {
        let XX = self.x.square();
        let YY = self.y.square();
        let lhs = &YY - &XX;
        let rhs = &FieldElement::ONE + &(&constants::EDWARDS_D * &(&XX * &YY));

        lhs == rhs
    }
}

impl ConditionallySelectable for EdwardsPoint {
    fn conditional_select(a: &EdwardsPoint, b: &EdwardsPoint, choice: Choice) -> EdwardsPoint {
        EdwardsPoint {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl ConstantTimeEq for EdwardsPoint {
    fn ct_eq(&self, other: &EdwardsPoint) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl PartialEq for EdwardsPoint {
    fn eq(&self, other: &EdwardsPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for EdwardsPoint {}

impl Debug for EdwardsPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "EdwardsPoint{{\n\tx: {:?},\n\ty: {:?}\n}}", &self.x, &self.y)
    }
}

impl EdwardsPoint {
    /// Construct a point from affine coordinates, checking the curve equation.
    ///
    /// Returns `None` if \\(-x\^2 + y\^2 \neq 1 + d x\^2 y\^2\\).
    pub fn from_coordinates(x: FieldElement, y: FieldElement) -> Option<EdwardsPoint> {
        let point = EdwardsPoint { x, y };
        if point.is_valid() {
            Some(point)
        } else {
            None
        }
    }

    /// The affine \\(x\\)-coordinate.
    pub fn x(&self) -> FieldElement {
        self.x
    }

    /// The affine \\(y\\)-coordinate.
    pub fn y(&self) -> FieldElement {
        self.y
    }

    /// Compress this point to `CompressedEdwardsY` format.
    pub fn compress(&self) -> CompressedEdwardsY {
        let mut s = self.y.to_bytes();
        s[31] ^= self.x.is_negative().unwrap_u8() << 7;
        CompressedEdwardsY(s)
    }

    /// Convert this `EdwardsPoint` on the Edwards model to the
    /// corresponding `MontgomeryPoint` on the Montgomery model.
    ///
    /// See [`birational::edwards_to_montgomery`] for the failure cases.
    pub fn to_montgomery(&self) -> Result<MontgomeryPoint, CurveError> {
        birational::edwards_to_montgomery(self)
    }

    /// Compute `scalar * self` with the constant-time Montgomery ladder.
    ///
    /// All 256 bits of `scalar` are used; it is not reduced first.
    pub fn mul(&self, scalar: &Scalar) -> Result<EdwardsPoint, CurveError> {
        scalar_mul::mul(scalar, self)
    }

    /// Fixed-base scalar multiplication by the Ed25519 base point.
    pub fn mul_base(scalar: &Scalar) -> Result<EdwardsPoint, CurveError> {
        constants::ED25519_BASEPOINT_POINT.mul(scalar)
    }

    /// Multiply the basepoint by `clamp_integer(bytes)`.
    pub fn mul_base_clamped(bytes: [u8; 32]) -> Result<EdwardsPoint, CurveError> {
        EdwardsPoint::mul_base(&Scalar::from_bits(clamp_integer(bytes)))
    }
}

// ------------------------------------------------------------------------
// Addition and Subtraction
// ------------------------------------------------------------------------

impl GroupLaw for EdwardsPoint {
    /// Add two points with the complete twisted Edwards addition law
    /// (\\(a = -1\\)):
    /// $$
    /// x\_3 = \frac{x\_1 y\_2 + y\_1 x\_2}{1 + d x\_1 x\_2 y\_1 y\_2}, \qquad
    /// y\_3 = \frac{y\_1 y\_2 + x\_1 x\_2}{1 - d x\_1 x\_2 y\_1 y\_2}.
    /// $$
    #[rustfmt::skip] // keep alignment of explanatory comments
    fn add(&self, other: &EdwardsPoint) -> Result<EdwardsPoint, CurveError> {
        let x1x2 = &self.x * &other.x;
        let y1y2 = &self.y * &other.y;
        let x1y2 = &self.x * &other.y;
        let y1x2 = &self.y * &other.x;
        let t = &constants::EDWARDS_D * &(&x1x2 * &y1y2);

        let den_x = &FieldElement::ONE + &t;  // 1 + d x1 x2 y1 y2
        let den_y = &FieldElement::ONE - &t;  // 1 - d x1 x2 y1 y2

        // One inversion serves both denominators.
        let den = &den_x * &den_y;
        if bool::from(den.is_zero()) {
            log::warn!("zero denominator in Edwards addition; operand is off the curve");
            return Err(CurveError::InvariantViolation);
        }
        let den_inv = den.invert();

        let num_x = &x1y2 + &y1x2;
        let num_y = &y1y2 + &x1x2;

        Ok(EdwardsPoint {
            x: &(&num_x * &den_y) * &den_inv,
            y: &(&num_y * &den_x) * &den_inv,
        })
    }

    /// Double a point.
    ///
    /// This is the addition law with \\(P\_1 = P\_2\\), after substituting
    /// the curve equation into the denominators:
    /// $$
    /// x\_3 = \frac{2xy}{y\^2 - x\^2}, \qquad
    /// y\_3 = \frac{y\^2 + x\^2}{2 - y\^2 + x\^2}.
    /// $$
    #[rustfmt::skip] // keep alignment of explanatory comments
    fn double(&self) -> Result<EdwardsPoint, CurveError> {
        let XX = self.x.square();
        let YY = self.y.square();
        let XY = &self.x * &self.y;

        let den_x = &YY - &XX;                                   // = 1 + d x² y²
        let den_y = &(&FieldElement::ONE + &FieldElement::ONE) - &den_x; // = 1 - d x² y²

        let den = &den_x * &den_y;
        if bool::from(den.is_zero()) {
            log::warn!("zero denominator in Edwards doubling; operand is off the curve");
            return Err(CurveError::InvariantViolation);
        }
        let den_inv = den.invert();

        let num_x = &XY + &XY;
        let num_y = &YY + &XX;

        Ok(EdwardsPoint {
            x: &(&num_x * &den_y) * &den_inv,
            y: &(&num_y * &den_x) * &den_inv,
        })
    }
}

// ------------------------------------------------------------------------
// Negation
// ------------------------------------------------------------------------

impl Neg for &EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        EdwardsPoint {
            x: -&self.x,
            y: self.y,
        }
    }
}

impl Neg for EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        -&self
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::IsIdentity;
    use hex_literal::hex;

    /// Compressed Edwards Y form of 2*basepoint.
    static BASE2_CMPRSSD: CompressedEdwardsY = CompressedEdwardsY(hex!(
        "c9a3f86aae465f0e56513864510f3997561fa2c9e85ea21dc2292309f3cd6022"
    ));

    /// Little-endian x-coordinate of 2*basepoint.
    static BASE2_X: [u8; 32] =
        hex!("0ece43284ea1c5835fa4d715458e0d08ace733187d3b043d6c045a9f4c38ab36");

    /// Compressed Edwards Y form of 16*basepoint.
    static BASE16_CMPRSSD: CompressedEdwardsY = CompressedEdwardsY(hex!(
        "eb2767c137ab7ad8279c078eff116ab0786ead3a2e0f989f72c37f82f2969670"
    ));

    /// The little-endian encoding of p = 2^255 - 19.
    static P_BYTES: [u8; 32] =
        hex!("edffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f");

    #[test]
    fn basepoint_decompression_compression() {
        let base_X = FieldElement::from_bytes(&hex!(
            "1ad5258f602d56c9b2a7259560c72c695cdcd6fd31e2a4c0fe536ecdd3366921"
        ));
        let bp = constants::ED25519_BASEPOINT_COMPRESSED.decompress().unwrap();
        assert!(bp.is_valid());
        // Check that decompression actually gives the correct X coordinate
        assert_eq!(base_X, bp.x);
        assert_eq!(bp.compress(), constants::ED25519_BASEPOINT_COMPRESSED);
        assert_eq!(bp, constants::ED25519_BASEPOINT_POINT);
    }

    #[test]
    fn decompression_sign_handling() {
        // Manually set the high bit of the last byte to flip the sign
        let mut minus_basepoint_bytes = *constants::ED25519_BASEPOINT_COMPRESSED.as_bytes();
        minus_basepoint_bytes[31] |= 1 << 7;
        let minus_basepoint = CompressedEdwardsY(minus_basepoint_bytes)
            .decompress()
            .unwrap();
        // The coordinates should only differ by a flipped sign.
        assert_eq!(minus_basepoint.x, -(&constants::ED25519_BASEPOINT_POINT.x));
        assert_eq!(minus_basepoint.y, constants::ED25519_BASEPOINT_POINT.y);
        assert_eq!(minus_basepoint, -constants::ED25519_BASEPOINT_POINT);
    }

    #[test]
    fn decompression_rejects_nonsquare() {
        // y = 2 gives x^2 = 3 / (4d + 1), which is not a square.
        let mut bytes = [0u8; 32];
        bytes[0] = 2;
        assert_eq!(
            CompressedEdwardsY(bytes).decompress(),
            Err(CurveError::InvalidEncoding)
        );
    }

    #[test]
    fn decompression_rejects_non_canonical_y() {
        // y = p + 1 would reduce to the identity's y = 1.
        let mut bytes = P_BYTES;
        bytes[0] += 1;
        assert_eq!(
            CompressedEdwardsY(bytes).decompress(),
            Err(CurveError::InvalidEncoding)
        );
    }

    #[test]
    fn decompression_rejects_negative_zero() {
        let mut bytes = CompressedEdwardsY::identity().to_bytes();
        bytes[31] |= 0x80;
        assert_eq!(
            CompressedEdwardsY(bytes).decompress(),
            Err(CurveError::InvalidEncoding)
        );

        // y = -1 is the other point with x = 0.
        let minus_one = FieldElement::MINUS_ONE.to_bytes();
        let p = CompressedEdwardsY(minus_one).decompress().unwrap();
        assert!(bool::from(p.x.is_zero()));
        let mut bytes = minus_one;
        bytes[31] |= 0x80;
        assert!(CompressedEdwardsY(bytes).decompress().is_err());
    }

    #[test]
    fn identity_compresses_to_one() {
        assert_eq!(
            EdwardsPoint::identity().compress(),
            CompressedEdwardsY::identity()
        );
        assert!(CompressedEdwardsY::identity()
            .decompress()
            .unwrap()
            .is_identity());
    }

    #[test]
    fn basepoint_double_vs_basepoint2() {
        let B = constants::ED25519_BASEPOINT_POINT;
        let two_B = B.double().unwrap();
        assert_eq!(two_B.compress(), BASE2_CMPRSSD);
        assert_eq!(two_B.x.to_bytes(), BASE2_X);
        assert!(two_B.is_valid());
    }

    #[test]
    fn basepoint_plus_basepoint_vs_basepoint2() {
        let B = constants::ED25519_BASEPOINT_POINT;
        let bp_added = B.add(&B).unwrap();
        assert_eq!(bp_added.compress(), BASE2_CMPRSSD);
    }

    #[test]
    fn basepoint16_vs_repeated_doubling() {
        let mut P = constants::ED25519_BASEPOINT_POINT;
        for _ in 0..4 {
            P = P.double().unwrap();
        }
        assert_eq!(P.compress(), BASE16_CMPRSSD);
    }

    #[test]
    fn basepoint_mul_by_small_scalars() {
        let B = constants::ED25519_BASEPOINT_POINT;
        assert_eq!(
            EdwardsPoint::mul_base(&Scalar::from(2u64)).unwrap(),
            B.double().unwrap()
        );
        let three_B = B.double().unwrap().add(&B).unwrap();
        assert_eq!(B.mul(&Scalar::from(3u64)).unwrap(), three_B);
        assert!(B.mul(&Scalar::ZERO).unwrap().is_identity());
    }

    #[test]
    fn basepoint_mul_by_order_is_identity() {
        let P = EdwardsPoint::mul_base(&constants::BASEPOINT_ORDER).unwrap();
        assert!(P.is_identity());
    }

    #[test]
    fn ladder_cost_is_independent_of_scalar() {
        use crate::field::INVERSIONS;

        let B = constants::ED25519_BASEPOINT_POINT;
        for s in [Scalar::ZERO, -&Scalar::ONE] {
            INVERSIONS.with(|c| c.set(0));
            B.mul(&s).unwrap();
            assert_eq!(INVERSIONS.with(|c| c.get()), 512);
        }
    }

    #[test]
    fn identity_is_neutral() {
        let B = constants::ED25519_BASEPOINT_POINT;
        let id = EdwardsPoint::identity();
        assert_eq!(B.add(&id).unwrap(), B);
        assert_eq!(id.add(&B).unwrap(), B);
        assert_eq!(id.double().unwrap(), id);
    }

    #[test]
    fn add_negation_is_identity() {
        let B = constants::ED25519_BASEPOINT_POINT;
        assert!(B.add(&-B).unwrap().is_identity());
    }

    #[test]
    fn from_coordinates_checks_curve_equation() {
        let B = constants::ED25519_BASEPOINT_POINT;
        assert_eq!(EdwardsPoint::from_coordinates(B.x(), B.y()), Some(B));
        assert_eq!(
            EdwardsPoint::from_coordinates(B.x(), FieldElement::from_u64(2)),
            None
        );
    }

    #[test]
    fn off_curve_operands_violate_invariant() {
        // (1, 1) doubles with denominator y^2 - x^2 = 0.
        let P = EdwardsPoint {
            x: FieldElement::ONE,
            y: FieldElement::ONE,
        };
        assert!(!P.is_valid());
        assert_eq!(P.double(), Err(CurveError::InvariantViolation));

        // d * x1 * x2 * y1 * y2 = -1 zeroes the x denominator.
        let Q = EdwardsPoint {
            x: -&constants::EDWARDS_D.invert(),
            y: FieldElement::ONE,
        };
        assert_eq!(P.add(&Q), Err(CurveError::InvariantViolation));
    }

    #[test]
    fn from_slice_checks_length() {
        assert!(CompressedEdwardsY::from_slice(&[0u8; 31]).is_err());
        assert_eq!(
            CompressedEdwardsY::try_from(&BASE2_CMPRSSD.0[..]).unwrap(),
            BASE2_CMPRSSD
        );
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_bincode_basepoint_roundtrip() {
        use bincode;

        let encoded = bincode::serialize(&constants::ED25519_BASEPOINT_POINT).unwrap();
        let enc_compressed = bincode::serialize(&constants::ED25519_BASEPOINT_COMPRESSED).unwrap();
        assert_eq!(encoded, enc_compressed);

        // Check that the encoding is 32 bytes exactly
        assert_eq!(encoded.len(), 32);

        let dec_uncompressed: EdwardsPoint = bincode::deserialize(&encoded).unwrap();
        let dec_compressed: CompressedEdwardsY = bincode::deserialize(&encoded).unwrap();

        assert_eq!(dec_uncompressed, constants::ED25519_BASEPOINT_POINT);
        assert_eq!(dec_compressed, constants::ED25519_BASEPOINT_COMPRESSED);

        // Check that the encoding itself matches the usual one
        let raw_bytes = constants::ED25519_BASEPOINT_COMPRESSED.as_bytes();
        let bp: EdwardsPoint = bincode::deserialize(raw_bytes).unwrap();
        assert_eq!(bp, constants::ED25519_BASEPOINT_POINT);
    }
}
