// -*- mode: rust; -*-
//
// This file is part of curve25519-birational.
// See LICENSE for licensing information.

//! Module for common traits.

use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

use crate::errors::CurveError;

// ------------------------------------------------------------------------
// Public Traits
// ------------------------------------------------------------------------

/// Trait for getting the identity element of a point type.
pub trait Identity {
    /// Returns the identity element of the curve.
    /// Can be used as a constructor.
    fn identity() -> Self;
}

/// Trait for testing if a curve point is equivalent to the identity point.
pub trait IsIdentity {
    /// Return true if this element is the identity element of the curve.
    fn is_identity(&self) -> bool;
}

/// Implement generic identity equality testing for a point representations
/// which have constant-time equality testing and a defined identity
/// constructor.
impl<T> IsIdentity for T
where
    T: ConstantTimeEq + Identity,
{
    fn is_identity(&self) -> bool {
        self.ct_eq(&T::identity()).into()
    }
}

/// The affine group law of a curve model.
///
/// Implementors are the point types the Montgomery ladder in
/// [`scalar_mul`](crate::scalar_mul) runs over.  The ladder swaps its
/// two accumulators with `conditional_swap`, so implementors must also
/// be `ConditionallySelectable`.
pub trait GroupLaw: Identity + ConditionallySelectable {
    /// Add two points.
    ///
    /// # Return
    ///
    /// `Err(CurveError::InvariantViolation)` if a denominator of the
    /// addition formula is zero, which only happens for off-curve input.
    fn add(&self, other: &Self) -> Result<Self, CurveError>;

    /// Double a point, with the same failure contract as `add`.
    fn double(&self) -> Result<Self, CurveError>;
}

// ------------------------------------------------------------------------
// Private Traits
// ------------------------------------------------------------------------

/// Trait for checking whether a point is on the curve.
///
/// Decoding always produces on-curve points; this is for debug
/// assertions and tests.
pub(crate) trait ValidityCheck {
    /// Checks whether the point is on the curve. Not CT.
    fn is_valid(&self) -> bool;
}
