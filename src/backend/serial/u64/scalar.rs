// -*- mode: rust; -*-
//
// This file is part of curve25519-birational.
// See LICENSE for licensing information.

//! Arithmetic mod \\(\ell = 2\^{252} + 27742317777372353535851937790883648493\\)
//! with five \\(52\\)-bit unsigned limbs.
//!
//! \\(51\\)-bit limbs would cover the \\(253\\)-bit range of reduced
//! scalars, but a \\(256\\)-bit unreduced scalar has to fit too, and
//! Montgomery reduction of a \\(5 \times 5\\) product needs the extra
//! headroom.  The largest coefficient of such a product is
//!
//! ```text
//! (0xfffffffffffff^2) * 5 = 0x4ffffffffffff60000000000005 (107 bits).
//! ```

use core::fmt::Debug;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use super::constants;

const LOW_52_BIT_MASK: u64 = (1u64 << 52) - 1;

/// An element of \\(\mathbb Z / \ell \mathbb Z\\) as five \\(52\\)-bit limbs.
#[derive(Copy, Clone)]
pub struct Scalar52(pub(crate) [u64; 5]);

impl Debug for Scalar52 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Scalar52({:?})", &self.0[..])
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Scalar52 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// u64 * u64 = u128 multiply helper
#[inline(always)]
fn m(x: u64, y: u64) -> u128 {
    (x as u128) * (y as u128)
}

/// Split `n` little-endian 64-bit words into 52-bit limbs.
fn words_to_limbs<const W: usize, const L: usize>(words: &[u64; W]) -> [u64; L] {
    let mut limbs = [0u64; L];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let bit = i * 52;
        let word = bit / 64;
        let shift = bit % 64;
        let mut value = words[word] >> shift;
        if shift > 12 && word + 1 < W {
            value |= words[word + 1] << (64 - shift);
        }
        *limb = value & LOW_52_BIT_MASK;
    }
    limbs
}

impl Scalar52 {
    /// The scalar \\( 0 \\).
    pub const ZERO: Scalar52 = Scalar52([0, 0, 0, 0, 0]);

    /// Unpack a 32 byte / 256 bit integer into 5 52-bit limbs.
    ///
    /// All 256 bits are kept; the result is not reduced mod \\(\ell\\).
    pub fn from_bytes(bytes: &[u8; 32]) -> Scalar52 {
        let mut words = [0u64; 4];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            *word = u64::from_le_bytes(buf);
        }
        Scalar52(words_to_limbs::<4, 5>(&words))
    }

    /// Reduce a 64 byte / 512 bit integer mod \\(\ell\\).
    pub fn from_bytes_wide(bytes: &[u8; 64]) -> Scalar52 {
        let mut words = [0u64; 8];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            *word = u64::from_le_bytes(buf);
        }

        // Ten 52-bit limbs cover 520 bits; the top one holds the last 32.
        let limbs = words_to_limbs::<8, 10>(&words);
        let mut lo = [0u64; 5];
        let mut hi = [0u64; 5];
        lo.copy_from_slice(&limbs[..5]);
        hi.copy_from_slice(&limbs[5..]);

        // (lo * R) / R = lo, and (hi * R^2) / R = hi * R = hi * 2^260.
        let lo = Scalar52::montgomery_mul(&Scalar52(lo), &constants::R);
        let hi = Scalar52::montgomery_mul(&Scalar52(hi), &constants::RR);

        Scalar52::add(&hi, &lo)
    }

    /// Pack the limbs of this `Scalar52` into 32 bytes.
    pub fn as_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        let mut acc: u128 = 0;
        let mut acc_bits = 0;
        let mut i = 0;
        for limb in self.0.iter() {
            acc |= (*limb as u128) << acc_bits;
            acc_bits += 52;
            while acc_bits >= 8 && i < 32 {
                bytes[i] = acc as u8;
                acc >>= 8;
                acc_bits -= 8;
                i += 1;
            }
        }
        bytes
    }

    /// Compute `a + b` (mod l)
    pub fn add(a: &Scalar52, b: &Scalar52) -> Scalar52 {
        let mut sum = Scalar52::ZERO;
        let mut carry: u64 = 0;
        for i in 0..5 {
            carry = a.0[i] + b.0[i] + (carry >> 52);
            sum.0[i] = carry & LOW_52_BIT_MASK;
        }

        // subtract l if the sum is >= l
        Scalar52::sub(&sum, &constants::L)
    }

    /// Compute `a - b` (mod l)
    pub fn sub(a: &Scalar52, b: &Scalar52) -> Scalar52 {
        let mut difference = Scalar52::ZERO;
        let mut borrow: u64 = 0;
        for i in 0..5 {
            borrow = a.0[i].wrapping_sub(b.0[i] + (borrow >> 63));
            difference.0[i] = borrow & LOW_52_BIT_MASK;
        }

        // conditionally add l if the difference is negative
        let underflow_mask = ((borrow >> 63) ^ 1).wrapping_sub(1);
        let mut carry: u64 = 0;
        for i in 0..5 {
            carry = (carry >> 52) + difference.0[i] + (constants::L.0[i] & underflow_mask);
            difference.0[i] = carry & LOW_52_BIT_MASK;
        }

        difference
    }

    /// Compute `a * b` as nine 128-bit coefficients.
    #[inline(always)]
    fn mul_internal(a: &Scalar52, b: &Scalar52) -> [u128; 9] {
        let mut z = [0u128; 9];
        for i in 0..5 {
            for j in 0..5 {
                z[i + j] += m(a.0[i], b.0[j]);
            }
        }
        z
    }

    /// Compute `limbs/R` (mod l), where R is the Montgomery modulus 2^260
    #[inline(always)]
    fn montgomery_reduce(limbs: &[u128; 9]) -> Scalar52 {
        let l = &constants::L.0;

        // First half: choose n_i so that the low limbs of limbs + n*l vanish.
        let mut n = [0u64; 5];
        let mut carry: u128 = 0;
        for i in 0..5 {
            let mut sum = carry + limbs[i];
            for j in 0..i {
                sum += m(n[j], l[i - j]);
            }
            n[i] = (sum as u64).wrapping_mul(constants::LFACTOR) & LOW_52_BIT_MASK;
            carry = (sum + m(n[i], l[0])) >> 52;
        }

        // limbs + n*l is divisible by R now; keep its upper half.
        let mut r = [0u64; 5];
        for i in 5..9 {
            let mut sum = carry + limbs[i];
            for j in (i - 4)..5 {
                sum += m(n[j], l[i - j]);
            }
            r[i - 5] = (sum as u64) & LOW_52_BIT_MASK;
            carry = sum >> 52;
        }
        r[4] = carry as u64;

        // result may be >= l, so attempt to subtract l
        Scalar52::sub(&Scalar52(r), &constants::L)
    }

    /// Compute `(a * b) / R` (mod l), where R is the Montgomery modulus 2^260
    #[inline(never)]
    pub fn montgomery_mul(a: &Scalar52, b: &Scalar52) -> Scalar52 {
        Scalar52::montgomery_reduce(&Scalar52::mul_internal(a, b))
    }

    /// Compute `a * b` (mod l)
    #[inline(never)]
    pub fn mul(a: &Scalar52, b: &Scalar52) -> Scalar52 {
        let ab = Scalar52::montgomery_mul(a, b);
        Scalar52::montgomery_mul(&ab, &constants::RR)
    }

    /// Reduce an arbitrary 256-bit value mod \\(\ell\\).
    pub fn reduce(&self) -> Scalar52 {
        Scalar52::montgomery_mul(self, &constants::R)
    }
}
