// -*- mode: rust; -*-
//
// This file is part of curve25519-birational.
// See LICENSE for licensing information.

//! Arithmetic on scalars (integers mod the group order).
//!
//! Both the Ed25519 basepoint and the X25519 basepoint have prime order
//! \\( \ell = 2\^{252} + 27742317777372353535851937790883648493 \\).
//!
//! A [`Scalar`] is a 256-bit little-endian value.  Unlike a group-order
//! residue it is allowed to hold *any* 256-bit integer: the Montgomery
//! ladder consumes the full fixed-width bit pattern, so a scalar such as
//! a clamped X25519 secret is never reduced before multiplication.
//!
//! The arithmetic operators always return values reduced mod \\(\ell\\),
//! reducing their operands first if needed.
//!
//! # Constructing a scalar
//!
//! ```
//! use curve25519_birational::scalar::Scalar;
//!
//! // A scalar holding the raw bits, unreduced:
//! let s = Scalar::from_bits([0xff; 32]);
//! assert!(!s.is_canonical());
//!
//! // The same bytes reduced mod l:
//! let r = Scalar::from_bytes_mod_order([0xff; 32]);
//! assert!(r.is_canonical());
//! ```

use core::fmt::Debug;
use core::ops::{Add, Mul, Neg, Sub};
use core::ops::{AddAssign, MulAssign, SubAssign};

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

#[cfg(feature = "rand_core")]
use rand_core::{CryptoRng, RngCore};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::backend::serial::u64::scalar::Scalar52;

/// The `Scalar` struct holds an integer \\(s < 2\^{256}\\).
#[derive(Copy, Clone, Hash)]
pub struct Scalar {
    /// `bytes` is a little-endian byte encoding of an integer representing a scalar.
    pub(crate) bytes: [u8; 32],
}

impl Scalar {
    /// The scalar \\( 0 \\).
    pub const ZERO: Self = Self { bytes: [0u8; 32] };

    /// The scalar \\( 1 \\).
    pub const ONE: Self = Self {
        bytes: [
            0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ],
    };

    /// Construct a `Scalar` from a 256-bit little-endian integer without
    /// reducing it.
    ///
    /// All 256 bits are kept, including bit 255.  This is the constructor
    /// to use for ladder inputs whose bit pattern matters, such as clamped
    /// X25519 secrets.
    pub const fn from_bits(bytes: [u8; 32]) -> Scalar {
        Scalar { bytes }
    }

    /// Construct a `Scalar` by reducing a 256-bit little-endian integer
    /// modulo the group order \\( \ell \\).
    pub fn from_bytes_mod_order(bytes: [u8; 32]) -> Scalar {
        Scalar::from_bits(bytes).reduce()
    }

    /// Construct a `Scalar` by reducing a 512-bit little-endian integer
    /// modulo the group order \\( \ell \\).
    pub fn from_bytes_mod_order_wide(input: &[u8; 64]) -> Scalar {
        Scalar {
            bytes: Scalar52::from_bytes_wide(input).as_bytes(),
        }
    }

    /// Return a `Scalar` chosen uniformly at random using a user-provided RNG.
    ///
    /// # Inputs
    ///
    /// * `rng`: any RNG which implements the `RngCore + CryptoRng` interface.
    ///
    /// # Returns
    ///
    /// A random scalar within \\(\mathbb{Z} / \ell\mathbb{Z}\\).
    ///
    /// # Example
    ///
    /// ```
    /// use curve25519_birational::scalar::Scalar;
    /// use rand_core::OsRng;
    ///
    /// let a = Scalar::random(&mut OsRng);
    /// assert!(a.is_canonical());
    /// ```
    #[cfg(feature = "rand_core")]
    pub fn random<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        let mut scalar_bytes = [0u8; 64];
        rng.fill_bytes(&mut scalar_bytes);
        let s = Scalar::from_bytes_mod_order_wide(&scalar_bytes);

        #[cfg(feature = "zeroize")]
        scalar_bytes.zeroize();

        s
    }

    /// Convert this `Scalar` to its underlying sequence of bytes.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.bytes
    }

    /// View the little-endian byte encoding of the integer representing this Scalar.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Get the bits of the scalar, in little-endian order.
    ///
    /// The iterator always yields exactly 256 bits, including leading
    /// zeros; iterate with `.rev()` for most-significant-bit first.
    pub fn bits_le(&self) -> impl DoubleEndedIterator<Item = bool> + '_ {
        (0..256).map(|i| {
            // As i runs from 0..256, the bottom 3 bits index the bit, while the upper bits index
            // the byte. Since self.bytes is little-endian at the byte level, this iterator is
            // little-endian on the bit level
            ((self.bytes[i >> 3] >> (i & 7)) & 1u8) == 1
        })
    }

    /// Check whether this `Scalar` is the canonical representative mod \\(\ell\\).
    pub fn is_canonical(&self) -> bool {
        self.ct_eq(&self.reduce()).into()
    }

    /// Reduce this `Scalar` modulo \\(\ell\\).
    fn reduce(&self) -> Scalar {
        Scalar {
            bytes: self.unpack().reduce().as_bytes(),
        }
    }

    /// Unpack this `Scalar` to a `Scalar52` for arithmetic, reducing it first.
    fn unpack_reduced(&self) -> Scalar52 {
        self.unpack().reduce()
    }

    /// Unpack this `Scalar` to a `Scalar52` for arithmetic.
    fn unpack(&self) -> Scalar52 {
        Scalar52::from_bytes(&self.bytes)
    }
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Scalar{{\n\tbytes: {:?},\n}}", &self.bytes)
    }
}

impl Eq for Scalar {}
impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.bytes.ct_eq(&other.bytes)
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut bytes = [0u8; 32];
        #[allow(clippy::needless_range_loop)]
        for i in 0..32 {
            bytes[i] = u8::conditional_select(&a.bytes[i], &b.bytes[i], choice);
        }
        Scalar { bytes }
    }
}

impl Default for Scalar {
    fn default() -> Scalar {
        Scalar::ZERO
    }
}

impl From<u64> for Scalar {
    /// Construct a scalar from the given `u64`.
    ///
    /// # Inputs
    ///
    /// An `u64` to convert to a `Scalar`.
    ///
    /// # Returns
    ///
    /// A `Scalar` corresponding to the input `u64`.
    fn from(x: u64) -> Scalar {
        let mut s_bytes = [0u8; 32];
        s_bytes[..8].copy_from_slice(&x.to_le_bytes());
        Scalar { bytes: s_bytes }
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl<'a> MulAssign<&'a Scalar> for Scalar {
    fn mul_assign(&mut self, _rhs: &'a Scalar) {
        *self = Scalar {
            bytes: Scalar52::mul(&self.unpack_reduced(), &_rhs.unpack_reduced()).as_bytes(),
        };
    }
}

impl<'a> Mul<&'a Scalar> for &Scalar {
    type Output = Scalar;
    fn mul(self, _rhs: &'a Scalar) -> Scalar {
        let mut s = *self;
        s *= _rhs;
        s
    }
}

impl<'a> AddAssign<&'a Scalar> for Scalar {
    fn add_assign(&mut self, _rhs: &'a Scalar) {
        *self = Scalar {
            bytes: Scalar52::add(&self.unpack_reduced(), &_rhs.unpack_reduced()).as_bytes(),
        };
    }
}

impl<'a> Add<&'a Scalar> for &Scalar {
    type Output = Scalar;
    fn add(self, _rhs: &'a Scalar) -> Scalar {
        let mut s = *self;
        s += _rhs;
        s
    }
}

impl<'a> SubAssign<&'a Scalar> for Scalar {
    fn sub_assign(&mut self, _rhs: &'a Scalar) {
        *self = Scalar {
            bytes: Scalar52::sub(&self.unpack_reduced(), &_rhs.unpack_reduced()).as_bytes(),
        };
    }
}

impl<'a> Sub<&'a Scalar> for &Scalar {
    type Output = Scalar;
    fn sub(self, _rhs: &'a Scalar) -> Scalar {
        let mut s = *self;
        s -= _rhs;
        s
    }
}

impl Neg for &Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        Scalar {
            bytes: Scalar52::sub(&Scalar52::ZERO, &self.unpack_reduced()).as_bytes(),
        }
    }
}

impl Neg for Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        -&self
    }
}

impl Mul<Scalar> for Scalar {
    type Output = Scalar;
    fn mul(self, rhs: Scalar) -> Scalar {
        &self * &rhs
    }
}

impl Add<Scalar> for Scalar {
    type Output = Scalar;
    fn add(self, rhs: Scalar) -> Scalar {
        &self + &rhs
    }
}

impl Sub<Scalar> for Scalar {
    type Output = Scalar;
    fn sub(self, rhs: Scalar) -> Scalar {
        &self - &rhs
    }
}

/// Clamp a little-endian 32-byte integer for use as an X25519 secret.
///
/// Bits 0, 1 and 2 of byte 0 and bit 7 of byte 31 are cleared, and bit 6
/// of byte 31 is set.  The result is a multiple of the cofactor 8 lying in
/// \\([2\^{254}, 2\^{255})\\), so its top bit position is the same for
/// every secret.
pub const fn clamp_integer(mut bytes: [u8; 32]) -> [u8; 32] {
    bytes[0] &= 0b1111_1000;
    bytes[31] &= 0b0111_1111;
    bytes[31] |= 0b0100_0000;
    bytes
}
