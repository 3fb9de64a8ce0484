// -*- mode: rust; -*-
//
// This file is part of curve25519-birational.
// See LICENSE for licensing information.

//! The birational equivalence between edwards25519 and curve25519.
//!
//! With \\(r = \sqrt{-486664}\\), the maps are
//! $$
//! (x, y) \mapsto (u, v) = \left(\frac{1+y}{1-y},\ \frac{r u}{x}\right),
//! \qquad
//! (u, v) \mapsto (x, y) = \left(\frac{r u}{v},\ \frac{u-1}{u+1}\right).
//! $$
//!
//! Both are undefined on a small exceptional set.  On the Edwards side
//! these are the points with \\(x = 0\\), namely the identity \\((0, 1)\\)
//! and the point of order two \\((0, -1)\\).  On the Montgomery side they
//! are the point at infinity and the points with \\(v = 0\\) or
//! \\(u = -1\\).
//!
//! Each direction spends a single field inversion, shared between the two
//! coordinates.
//!
//! # Example
//!
//! ```
//! use curve25519_birational::birational;
//! use curve25519_birational::constants;
//!
//! let M = birational::edwards_to_montgomery(&constants::ED25519_BASEPOINT_POINT).unwrap();
//! assert_eq!(M, constants::X25519_BASEPOINT);
//!
//! let E = birational::montgomery_to_edwards(&M).unwrap();
//! assert_eq!(E, constants::ED25519_BASEPOINT_POINT);
//! ```

#![allow(non_snake_case)]

use crate::constants;
use crate::edwards::EdwardsPoint;
use crate::errors::CurveError;
use crate::field::FieldElement;
use crate::montgomery::MontgomeryPoint;

/// Compute \\(\sqrt{-486664} \bmod p\\) from scratch.
///
/// With \\(a = -486664\\) and \\(w = (2a)\^{(p-5)/8}\\), the root is
/// \\(a w (2 a w\^2 - 1)\\).  The result is the same every time and equals
/// [`constants::SQRT_MINUS_APLUS2`], which the maps use instead.
pub fn sqrt_minus_486664() -> FieldElement {
    let a = -&FieldElement::from_u64(486664);
    let two_a = &a + &a;
    let w = two_a.pow_p58();
    let i = &two_a * &w.square();
    &(&a * &w) * &(&i - &FieldElement::ONE)
}

/// Map an Edwards point to the Montgomery curve.
///
/// # Return
///
/// `Err(CurveError::UndefinedMapping)` if \\(x = 0\\) or \\(y = 1\\).
pub fn edwards_to_montgomery(point: &EdwardsPoint) -> Result<MontgomeryPoint, CurveError> {
    let one_plus_y = &FieldElement::ONE + &point.y;
    let one_minus_y = &FieldElement::ONE - &point.y;

    if bool::from(point.x.is_zero() | one_minus_y.is_zero()) {
        log::debug!("birational map undefined: Edwards point has x = 0 or y = 1");
        return Err(CurveError::UndefinedMapping);
    }

    // 1 / ((1 - y) x)
    let inv = (&one_minus_y * &point.x).invert();

    let u = &(&one_plus_y * &point.x) * &inv;
    let v = &(&constants::SQRT_MINUS_APLUS2 * &one_plus_y) * &inv;

    Ok(MontgomeryPoint::Affine { u, v })
}

/// Map a Montgomery point to the Edwards curve.
///
/// # Return
///
/// `Err(CurveError::UndefinedMapping)` for the point at infinity, or if
/// \\(v = 0\\) or \\(u = -1\\).
pub fn montgomery_to_edwards(point: &MontgomeryPoint) -> Result<EdwardsPoint, CurveError> {
    let (u, v) = match point {
        MontgomeryPoint::Infinity => {
            log::debug!("birational map undefined: point at infinity");
            return Err(CurveError::UndefinedMapping);
        }
        MontgomeryPoint::Affine { u, v } => (u, v),
    };

    let u_plus_one = u + &FieldElement::ONE;
    let u_minus_one = u - &FieldElement::ONE;

    if bool::from(v.is_zero() | u_plus_one.is_zero()) {
        log::debug!("birational map undefined: Montgomery point has v = 0 or u = -1");
        return Err(CurveError::UndefinedMapping);
    }

    // 1 / (v (u + 1))
    let inv = (v * &u_plus_one).invert();

    let x = &(&(&constants::SQRT_MINUS_APLUS2 * u) * &u_plus_one) * &inv;
    let y = &(&u_minus_one * v) * &inv;

    Ok(EdwardsPoint { x, y })
}
