// -*- mode: rust; -*-
//
// This file is part of curve25519-birational.
// See LICENSE for licensing information.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! # curve25519-birational
//!
//! Affine point arithmetic on edwards25519 and curve25519, and the
//! birational map between them.
//!
//! * [`edwards`]: the twisted Edwards curve
//!   \\(-x\^2 + y\^2 = 1 + d x\^2 y\^2\\), its complete affine group law,
//!   and the 32-byte Ed25519 point encoding.
//! * [`montgomery`]: the Montgomery curve \\(v\^2 = u\^3 + 486662 u\^2 + u\\),
//!   its affine group law with explicit exceptional cases, and the
//!   \\(u\\)-only X25519 encoding.
//! * [`scalar_mul`]: a constant-time Montgomery ladder, generic over both
//!   group laws.
//! * [`birational`]: the coordinate maps between the two curves.
//! * [`x25519`]: X25519 keys derived from Ed25519 keys, and key agreement.
//!
//! All values are immutable and every operation is a pure function of its
//! arguments.  Fallible operations return [`CurveError`].
//!
//! ```
//! use curve25519_birational::constants::ED25519_BASEPOINT_POINT;
//! use curve25519_birational::scalar::Scalar;
//!
//! let s = Scalar::from(42u64);
//! let edwards = ED25519_BASEPOINT_POINT.mul(&s).unwrap();
//! let montgomery = edwards.to_montgomery().unwrap();
//! assert_eq!(montgomery.to_edwards().unwrap(), edwards);
//! ```

//------------------------------------------------------------------------
// External dependencies:
//------------------------------------------------------------------------

#[cfg(any(feature = "std", test))]
extern crate std;

//------------------------------------------------------------------------
// curve25519-birational public modules
//------------------------------------------------------------------------

// Scalar arithmetic mod l = 2^252 + ..., the order of the basepoints
pub mod scalar;

// Point operations on the Montgomery form of Curve25519
pub mod montgomery;

// Point operations on the Edwards form of Curve25519
pub mod edwards;

// The maps between the two forms
pub mod birational;

// The Montgomery ladder
pub mod scalar_mul;

// X25519 key derivation and agreement
pub mod x25519;

// Useful constants, like the Ed25519 basepoint
pub mod constants;

// External (and internal) traits.
pub mod traits;

// Finite field arithmetic mod p = 2^255 - 19
pub mod field;

// Errors
pub mod errors;

//------------------------------------------------------------------------
// curve25519-birational internal modules
//------------------------------------------------------------------------

// Arithmetic backends live here
pub(crate) mod backend;

pub use crate::edwards::{CompressedEdwardsY, EdwardsPoint};
pub use crate::errors::CurveError;
pub use crate::montgomery::{CompressedMontgomeryU, MontgomeryPoint};
pub use crate::scalar::Scalar;
