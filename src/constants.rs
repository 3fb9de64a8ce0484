// -*- mode: rust; -*-
//
// This file is part of curve25519-birational.
// See LICENSE for licensing information.

//! Various constants, such as the Ed25519 and X25519 basepoints.
//!
//! All constants are compile-time values; nothing here is computed or
//! mutated at runtime.

#![allow(non_snake_case)]

use crate::backend::serial::u64::constants as limbs;
use crate::edwards::CompressedEdwardsY;
use crate::edwards::EdwardsPoint;
use crate::field::FieldElement;
use crate::montgomery::CompressedMontgomeryU;
use crate::montgomery::MontgomeryPoint;
use crate::scalar::Scalar;

/// The Edwards curve coefficient `a = -1`.
pub const EDWARDS_A: FieldElement = FieldElement::MINUS_ONE;

/// The Edwards curve coefficient
/// `d = 37095705934669439343138083508754565189542113879843219016388785533085940283555`.
pub const EDWARDS_D: FieldElement = limbs::EDWARDS_D;

/// The Montgomery curve coefficient `A = 486662`.
pub const MONTGOMERY_A: FieldElement = limbs::MONTGOMERY_A;

/// The Montgomery curve coefficient `B = 1`.
pub const MONTGOMERY_B: FieldElement = limbs::MONTGOMERY_B;

/// `sqrt(-486664) mod p`, the scaling constant of the birational map.
///
/// See [`birational::sqrt_minus_486664`](crate::birational::sqrt_minus_486664)
/// for the derivation of this particular root.
pub const SQRT_MINUS_APLUS2: FieldElement = limbs::SQRT_MINUS_APLUS2;

/// A square root of \\(-1\\), namely \\(2\^{(p-1)/4} \bmod p\\).
pub const SQRT_M1: FieldElement = limbs::SQRT_M1;

/// The Ed25519 basepoint, as an affine `EdwardsPoint`.
pub const ED25519_BASEPOINT_POINT: EdwardsPoint = EdwardsPoint {
    x: limbs::ED25519_BASEPOINT_X,
    y: limbs::ED25519_BASEPOINT_Y,
};

/// The Ed25519 basepoint, in `CompressedEdwardsY` format.
pub const ED25519_BASEPOINT_COMPRESSED: CompressedEdwardsY = CompressedEdwardsY([
    0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
]);

/// The X25519 basepoint `(9, v)`, as an affine `MontgomeryPoint`.
///
/// This is the image of the Ed25519 basepoint under the birational map.
pub const X25519_BASEPOINT: MontgomeryPoint = MontgomeryPoint::Affine {
    u: FieldElement::from_u64(9),
    v: limbs::X25519_BASEPOINT_V,
};

/// The X25519 basepoint, in `CompressedMontgomeryU` format.
pub const X25519_BASEPOINT_COMPRESSED: CompressedMontgomeryU = CompressedMontgomeryU([
    0x09, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
]);

/// `BASEPOINT_ORDER` is the order of the Ed25519 basepoint, i.e.,
/// $$
/// \ell = 2^\{252\} + 27742317777372353535851937790883648493.
/// $$
///
/// This value is not reduced; it is the one `Scalar` constant that is
/// not below \\(\ell\\).
pub const BASEPOINT_ORDER: Scalar = Scalar {
    bytes: [
        0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde,
        0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x10,
    ],
};
