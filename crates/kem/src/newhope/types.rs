// kem/src/newhope/types.rs

//! Seed and shared-key types.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use core::fmt;
use common::security::SecureCompare;
use params::pqc::newhope::{NEWHOPE_SEED_BYTES, NEWHOPE_SHARED_BYTES};
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};

/// 32-byte seed expanded into the randomization bits of [`helprec`](super::helprec)
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct HelpRecSeed([u8; NEWHOPE_SEED_BYTES]);

impl HelpRecSeed {
    /// Wrap existing seed bytes
    pub fn new(bytes: [u8; NEWHOPE_SEED_BYTES]) -> Self {
        Self(bytes)
    }

    /// Copy a seed out of a slice that must be exactly 32 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("helprec seed", bytes.len(), NEWHOPE_SEED_BYTES)?;
        let mut seed = [0u8; NEWHOPE_SEED_BYTES];
        seed.copy_from_slice(bytes);
        Ok(Self(seed))
    }

    /// Draw a fresh seed from a cryptographic RNG
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut seed = Self([0u8; NEWHOPE_SEED_BYTES]);
        rng.fill_bytes(&mut seed.0);
        seed
    }

    /// Seed bytes
    pub fn as_bytes(&self) -> &[u8; NEWHOPE_SEED_BYTES] {
        &self.0
    }
}

impl AsRef<[u8]> for HelpRecSeed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for HelpRecSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HelpRecSeed([REDACTED])")
    }
}

/// The 32-byte key both parties recover
///
/// Comparison is constant time and the bytes are wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedKey([u8; NEWHOPE_SHARED_BYTES]);

impl SharedKey {
    pub(crate) fn zero() -> Self {
        Self([0u8; NEWHOPE_SHARED_BYTES])
    }

    pub(crate) fn as_mut_bytes(&mut self) -> &mut [u8; NEWHOPE_SHARED_BYTES] {
        &mut self.0
    }

    /// Wrap existing key bytes
    pub fn new(bytes: [u8; NEWHOPE_SHARED_BYTES]) -> Self {
        Self(bytes)
    }

    /// Key bytes
    pub fn as_bytes(&self) -> &[u8; NEWHOPE_SHARED_BYTES] {
        &self.0
    }
}

impl AsRef<[u8]> for SharedKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl ConstantTimeEq for SharedKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.secure_cmp(&other.0)
    }
}

impl PartialEq for SharedKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SharedKey {}

impl fmt::Debug for SharedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedKey([REDACTED])")
    }
}

#[cfg(feature = "alloc")]
impl api::SerializeSecret for SharedKey {
    fn from_bytes(bytes: &[u8]) -> api::Result<Self> {
        api::error::validate::length("shared key", bytes.len(), NEWHOPE_SHARED_BYTES)?;
        let mut key = Self::zero();
        key.0.copy_from_slice(bytes);
        Ok(key)
    }

    fn to_bytes_zeroizing(&self) -> zeroize::Zeroizing<Vec<u8>> {
        zeroize::Zeroizing::new(self.0.to_vec())
    }
}
