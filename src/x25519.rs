// -*- mode: rust; -*-
//
// This file is part of curve25519-birational.
// See LICENSE for licensing information.

//! X25519 keys, and their derivation from Ed25519 keys.
//!
//! An Ed25519 secret seed is hashed with SHA-512; the first half of the
//! digest, clamped, is the secret scalar of both the Ed25519 key and the
//! corresponding X25519 key.  The X25519 public key is the image of the
//! Ed25519 public point under the birational map, encoded as its
//! \\(u\\)-coordinate.
//!
//! # Example
//!
//! ```
//! use curve25519_birational::x25519::{Ed25519Keys, PublicKey, StaticSecret};
//!
//! let ed = Ed25519Keys::from_seed([7u8; 32]).unwrap();
//! let alice = ed.to_x25519().unwrap();
//!
//! let bob_secret = StaticSecret::from([9u8; 32]);
//! let bob_public = bob_secret.public_key().unwrap();
//!
//! let alice_shared = alice.secret.diffie_hellman(&bob_public).unwrap();
//! let bob_shared = bob_secret.diffie_hellman(&alice.public).unwrap();
//! assert_eq!(alice_shared.as_bytes(), bob_shared.as_bytes());
//! ```

use digest::generic_array::typenum::U64;
use digest::Digest;
use sha2::Sha512;

use subtle::ConstantTimeEq;

#[cfg(feature = "rand_core")]
use rand_core::{CryptoRng, RngCore};

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::birational;
use crate::edwards::{CompressedEdwardsY, EdwardsPoint};
use crate::errors::CurveError;
use crate::montgomery::{CompressedMontgomeryU, MontgomeryPoint};

pub use crate::scalar::clamp_integer;

/// Derive the clamped X25519 secret from an Ed25519 secret seed, using
/// SHA-512.
pub fn x25519_secret_from_ed25519_seed(seed: &[u8; 32]) -> [u8; 32] {
    x25519_secret_from_ed25519_seed_with::<Sha512>(seed)
}

/// Derive the clamped X25519 secret from an Ed25519 secret seed with a
/// caller-chosen 512-bit hash.
///
/// The secret is `clamp_integer(D(seed)[..32])`.
pub fn x25519_secret_from_ed25519_seed_with<D>(seed: &[u8; 32]) -> [u8; 32]
where
    D: Digest<OutputSize = U64>,
{
    let mut h = D::digest(seed);
    let mut lower = [0u8; 32];
    lower.copy_from_slice(&h[..32]);

    #[cfg(feature = "zeroize")]
    h.as_mut_slice().zeroize();
    #[cfg(not(feature = "zeroize"))]
    h.iter_mut().for_each(|b| *b = 0);

    clamp_integer(lower)
}

/// Convert a compressed Ed25519 public key to the X25519 public key of
/// the same secret.
///
/// # Return
///
/// * `Err(CurveError::InvalidEncoding)` if `public` does not decompress;
/// * `Err(CurveError::UndefinedMapping)` if it decompresses to a point
///   with \\(x = 0\\).
pub fn x25519_public_from_ed25519_public(
    public: &CompressedEdwardsY,
) -> Result<PublicKey, CurveError> {
    let point = public.decompress()?;
    let montgomery = birational::edwards_to_montgomery(&point)?;
    Ok(PublicKey(montgomery.compress()))
}

/// The bare, byte-oriented x25519 function: clamp `k`, lift `u` to a
/// curve point, and return the \\(u\\)-coordinate of the product.
///
/// Unlike the RFC 7748 function, a `u` on the quadratic twist is
/// rejected with `CurveError::InvalidEncoding`, since it names no point
/// of the curve.
pub fn x25519(k: [u8; 32], u: [u8; 32]) -> Result<[u8; 32], CurveError> {
    let point = CompressedMontgomeryU(u).lift()?;
    Ok(point.mul_clamped(k)?.compress().to_bytes())
}

/// An X25519 public key: a Montgomery \\(u\\)-coordinate.
///
/// Public keys carry no sign bit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct PublicKey(pub(crate) CompressedMontgomeryU);

impl From<[u8; 32]> for PublicKey {
    /// Given a byte array, construct a x25519 `PublicKey`.
    fn from(bytes: [u8; 32]) -> PublicKey {
        PublicKey(CompressedMontgomeryU(bytes))
    }
}

impl PublicKey {
    /// Convert this public key to a byte array.
    #[inline]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// View this public key as a byte array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        self.0.as_bytes()
    }
}

impl AsRef<[u8]> for PublicKey {
    /// View this public key as a byte array.
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for PublicKey {
    fn zeroize(&mut self) {
        self.0 .0.zeroize();
    }
}

/// An X25519 secret key which may be used for more than one exchange.
///
/// The bytes are stored unclamped; clamping happens on use.
#[derive(Clone)]
pub struct StaticSecret([u8; 32]);

impl StaticSecret {
    /// Generate a new `StaticSecret` with the supplied RNG.
    #[cfg(feature = "rand_core")]
    pub fn random<R: RngCore + CryptoRng + ?Sized>(csprng: &mut R) -> Self {
        // The secret key is random bytes. Clamping is done later.
        let mut bytes = [0u8; 32];
        csprng.fill_bytes(&mut bytes);
        StaticSecret(bytes)
    }

    /// The X25519 secret belonging to an Ed25519 secret seed.
    pub fn from_ed25519_seed(seed: &[u8; 32]) -> Self {
        StaticSecret(x25519_secret_from_ed25519_seed(seed))
    }

    /// Compute the public key \\(u(\mathrm{clamp}(k) \cdot B)\\).
    pub fn public_key(&self) -> Result<PublicKey, CurveError> {
        let point = MontgomeryPoint::mul_base(&self.clamped())?;
        Ok(PublicKey(point.compress()))
    }

    /// Perform a Diffie-Hellman key agreement between `self` and
    /// `their_public` key to produce a `SharedSecret`.
    ///
    /// # Return
    ///
    /// `Err(CurveError::InvalidEncoding)` if `their_public` lies on the
    /// quadratic twist.
    pub fn diffie_hellman(&self, their_public: &PublicKey) -> Result<SharedSecret, CurveError> {
        let point = their_public.0.lift()?;
        let shared = point.mul(&self.clamped())?;
        Ok(SharedSecret(shared.compress().to_bytes()))
    }

    /// Extract this key's bytes for serialization.
    #[inline]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// View this key as a byte array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    fn clamped(&self) -> crate::scalar::Scalar {
        crate::scalar::Scalar::from_bits(clamp_integer(self.0))
    }
}

impl From<[u8; 32]> for StaticSecret {
    /// Load a secret key from a byte array.
    fn from(bytes: [u8; 32]) -> StaticSecret {
        StaticSecret(bytes)
    }
}

impl AsRef<[u8]> for StaticSecret {
    /// View this key as a byte array.
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Drop for StaticSecret {
    fn drop(&mut self) {
        #[cfg(feature = "zeroize")]
        self.0.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl ZeroizeOnDrop for StaticSecret {}

/// The result of a Diffie-Hellman key exchange: the \\(u\\)-coordinate of
/// the shared point.
pub struct SharedSecret([u8; 32]);

impl SharedSecret {
    /// Convert this shared secret to a byte array.
    #[inline]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// View this shared secret key as a byte array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Ensure in constant-time that this shared secret did not result from a
    /// key exchange with non-contributory behaviour, i.e. that it is not
    /// all zeros.
    #[must_use]
    pub fn was_contributory(&self) -> bool {
        !bool::from(self.0.ct_eq(&[0u8; 32]))
    }
}

impl AsRef<[u8]> for SharedSecret {
    /// View this shared secret key as a byte array.
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Drop for SharedSecret {
    fn drop(&mut self) {
        #[cfg(feature = "zeroize")]
        self.0.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl ZeroizeOnDrop for SharedSecret {}

/// An Ed25519 key pair: a 32-byte secret seed and the compressed public
/// point.
///
/// Only key derivation is supported; there is no signing.
pub struct Ed25519Keys {
    /// The secret seed.
    pub seed: [u8; 32],
    /// The compressed public point \\(s \cdot B\\).
    pub public: CompressedEdwardsY,
}

impl Ed25519Keys {
    /// Derive the key pair for `seed`: the public key is
    /// \\(\mathrm{clamp}(\mathrm{SHA512}(seed)[..32]) \cdot B\\).
    pub fn from_seed(seed: [u8; 32]) -> Result<Ed25519Keys, CurveError> {
        let secret = x25519_secret_from_ed25519_seed(&seed);
        let public = EdwardsPoint::mul_base_clamped(secret)?.compress();
        Ok(Ed25519Keys { seed, public })
    }

    /// Derive the X25519 key pair for the same secret.
    ///
    /// The public key is mapped from `self.public`, not recomputed from
    /// the seed.
    pub fn to_x25519(&self) -> Result<X25519Keys, CurveError> {
        Ok(X25519Keys {
            secret: StaticSecret::from_ed25519_seed(&self.seed),
            public: x25519_public_from_ed25519_public(&self.public)?,
        })
    }
}

impl Drop for Ed25519Keys {
    fn drop(&mut self) {
        #[cfg(feature = "zeroize")]
        self.seed.zeroize();
    }
}

/// An X25519 key pair.
pub struct X25519Keys {
    /// The secret key.
    pub secret: StaticSecret,
    /// The public key.
    pub public: PublicKey,
}
