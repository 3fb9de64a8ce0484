// -*- mode: rust; -*-
//
// This file is part of curve25519-birational.
// See LICENSE for licensing information.

//! Errors which may occur when decoding points, mapping them between
//! curve models, or running the group law on them.

use core::fmt;
use core::fmt::Display;

/// Errors returned by point decoding, the birational maps, and the
/// affine group laws.
///
/// This error may arise due to:
///
/// * Being given 32 bytes that encode no point on the curve, because the
///   recovered coordinate has no square root mod p.
///
/// * Applying a birational map to one of its exceptional inputs, where
///   the coordinate formula would divide by zero.
///
/// * A zero denominator inside an addition or doubling formula.  For
///   genuine curve points this cannot happen, so it means an off-curve
///   point was constructed somewhere upstream.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CurveError {
    /// The bytes correspond to no curve point.
    InvalidEncoding,
    /// The birational map has no image for this input (`x = 0`, `y = 1`,
    /// `u = -1`, `v = 0`, or the point at infinity).
    UndefinedMapping,
    /// A denominator that is nonzero for every curve point was zero.
    InvariantViolation,
}

impl Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CurveError::InvalidEncoding => write!(f, "Cannot decompress curve point"),
            CurveError::UndefinedMapping => {
                write!(f, "Birational map is undefined for this point")
            }
            CurveError::InvariantViolation => {
                write!(f, "Zero denominator in group law; input is not a curve point")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CurveError {}
