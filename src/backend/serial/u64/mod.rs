// -*- mode: rust; -*-
//
// This file is part of curve25519-birational.
// See LICENSE for licensing information.

//! The `u64` backend uses `u64`s and a `(u64, u64) -> u128` multiplier.
//!
//! Field elements are five `u64` limbs in radix \\(2\^{51}\\); scalars
//! are five `u64` limbs in radix \\(2\^{52}\\) with Montgomery
//! multiplication.

pub mod field;

pub mod scalar;

pub mod constants;
