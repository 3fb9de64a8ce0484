// -*- mode: rust; -*-
//
// This file is part of curve25519-birational.
// See LICENSE for licensing information.

//! Constant-time scalar multiplication with the Montgomery ladder.
//!
//! The ladder is generic over [`GroupLaw`], so the same code multiplies
//! Edwards and Montgomery points.  It walks all 256 bits of the scalar,
//! most significant first, and performs exactly one `add` and one
//! `double` per bit whatever the bit's value.  Instead of branching on
//! the bit, the two accumulators are exchanged with a constant-time
//! `conditional_swap`.

use subtle::Choice;

use crate::errors::CurveError;
use crate::scalar::Scalar;
use crate::traits::GroupLaw;

/// Compute `scalar * point`.
///
/// The accumulators start at \\(Q = \mathcal O\\) and \\(P = \\) `point`.
/// For each bit, a `0` gives \\((Q, P) \gets (2Q, Q+P)\\) and a `1` gives
/// \\((Q, P) \gets (Q+P, 2P)\\), keeping \\(P - Q\\) equal to `point`.
/// The result is \\(Q\\).
///
/// # Return
///
/// The group law's error, if any step fails.  For points on the curve no
/// step fails.
pub fn mul<G: GroupLaw>(scalar: &Scalar, point: &G) -> Result<G, CurveError> {
    let mut x0 = G::identity();
    let mut x1 = *point;

    // Go through the bits from most to least significant, using a sliding window of 2
    let mut prev_bit = false;
    for cur_bit in scalar.bits_le().rev() {
        // After the previous step, the accumulators are held swapped exactly
        // when prev_bit was set, and this step needs them swapped exactly
        // when cur_bit is set.
        let choice: u8 = (prev_bit ^ cur_bit) as u8;
        G::conditional_swap(&mut x0, &mut x1, choice.into());
        step(&mut x0, &mut x1)?;
        prev_bit = cur_bit;
    }
    // The final value of prev_bit above is scalar.bits()[0], i.e., the LSB of scalar
    G::conditional_swap(&mut x0, &mut x1, Choice::from(prev_bit as u8));

    Ok(x0)
}

/// One ladder rung: \\((a, b) \gets (2a, a + b)\\).
#[inline]
fn step<G: GroupLaw>(a: &mut G, b: &mut G) -> Result<(), CurveError> {
    let sum = a.add(b)?;
    let doubled = a.double()?;
    *a = doubled;
    *b = sum;
    Ok(())
}
