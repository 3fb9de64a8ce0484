// -*- mode: rust; -*-
//
// This file is part of curve25519-birational.
// See LICENSE for licensing information.

//! This module contains backend-specific constant values, such as the 64-bit limbs of curve constants.

use super::field::FieldElement51;
use super::scalar::Scalar52;

/// Edwards `d` value, equal to `-121665/121666 mod p`.
pub(crate) const EDWARDS_D: FieldElement51 = FieldElement51::from_limbs([
    929955233495203,
    466365720129213,
    1662059464998953,
    2033849074728123,
    1442794654840575,
]);

/// Precomputed value of one of the square roots of -1 (mod p), namely `2^((p-1)/4)`.
pub(crate) const SQRT_M1: FieldElement51 = FieldElement51::from_limbs([
    1718705420411056,
    234908883556509,
    2233514472574048,
    2117202627021982,
    765476049583133,
]);

/// Montgomery curve coefficient `A = 486662`.
pub(crate) const MONTGOMERY_A: FieldElement51 = FieldElement51::from_limbs([486662, 0, 0, 0, 0]);

/// Montgomery curve coefficient `B = 1`.
pub(crate) const MONTGOMERY_B: FieldElement51 = FieldElement51::from_limbs([1, 0, 0, 0, 0]);

/// `sqrt(-(A+2)) = sqrt(-486664) mod p`, the root selected by
/// `a * (2a)^((p-5)/8) * (2a * ((2a)^((p-5)/8))^2 - 1)` with `a = -486664`.
pub(crate) const SQRT_MINUS_APLUS2: FieldElement51 = FieldElement51::from_limbs([
    557817479725543,
    1643290402203250,
    16226468853936,
    1304118542701054,
    1985241807451647,
]);

/// Affine `x` of the Ed25519 basepoint.
pub(crate) const ED25519_BASEPOINT_X: FieldElement51 = FieldElement51::from_limbs([
    1738742601995546,
    1146398526822698,
    2070867633025821,
    562264141797630,
    587772402128613,
]);

/// Affine `y = 4/5` of the Ed25519 basepoint.
pub(crate) const ED25519_BASEPOINT_Y: FieldElement51 = FieldElement51::from_limbs([
    1801439850948184,
    1351079888211148,
    450359962737049,
    900719925474099,
    1801439850948198,
]);

/// Affine `v` of the X25519 basepoint `u = 9`.
pub(crate) const X25519_BASEPOINT_V: FieldElement51 = FieldElement51::from_limbs([
    498776679568345,
    2196478692312381,
    1446154986911029,
    943862271874619,
    574914022836744,
]);

/// `L` is the order of base point, i.e. 2^252 + 27742317777372353535851937790883648493
pub(crate) const L: Scalar52 = Scalar52([
    0x0002631a5cf5d3ed,
    0x000dea2f79cd6581,
    0x000000000014def9,
    0x0000000000000000,
    0x0000100000000000,
]);

/// `L` * `LFACTOR` = -1 (mod 2^52)
pub(crate) const LFACTOR: u64 = 0x51da312547e1b;

/// `R` = R % L where R = 2^260
pub(crate) const R: Scalar52 = Scalar52([
    0x000f48bd6721e6ed,
    0x0003bab5ac67e45a,
    0x000fffffeb35e51b,
    0x000fffffffffffff,
    0x00000fffffffffff,
]);

/// `RR` = (R^2) % L where R = 2^260
pub(crate) const RR: Scalar52 = Scalar52([
    0x0009d265e952d13b,
    0x000d63c715bea69f,
    0x0005be65cb687604,
    0x0003dceec73d217f,
    0x000009411b7c309a,
]);
