// -*- mode: rust; -*-
//
// This file is part of curve25519-birational.
// See LICENSE for licensing information.

//! Serial implementations of field and scalar arithmetic.

pub mod u64;
