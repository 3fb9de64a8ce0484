// -*- mode: rust; -*-
//
// This file is part of curve25519-birational.
// See LICENSE for licensing information.

//! Arithmetic backends.
//!
//! The naming of the `u64` module is somewhat unfortunate, since it is
//! also the name of a primitive type.  Types and modules live in
//! different namespaces, so the compiler doesn't mind, and the module is
//! only ever used as `backend::serial::u64::field` or similar.

pub mod serial;
