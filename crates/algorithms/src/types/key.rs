//! Secret key for the block primitive

use core::fmt;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};
use modecrypt_internal::constant_time::ct_eq;
use modecrypt_params::utils::symmetric::KEY_SIZE;

/// A 128-bit key, opaque to the modes and zeroized when dropped
///
/// Keys are not checked for strength. Equality is constant time and the
/// `Debug` output never shows key material.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Key {
    data: [u8; KEY_SIZE],
}

impl Key {
    /// Create a key from raw bytes
    pub fn new(data: [u8; KEY_SIZE]) -> Self {
        Self { data }
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("Key", slice.len(), KEY_SIZE)?;

        let mut data = [0u8; KEY_SIZE];
        data.copy_from_slice(slice);
        Ok(Self { data })
    }

    /// Create from a 128-bit integer, serialised big-endian
    pub fn from_u128(value: u128) -> Self {
        Self { data: value.to_be_bytes() }
    }

    /// Generate a random key
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut data = [0u8; KEY_SIZE];
        rng.fill_bytes(&mut data);
        Self { data }
    }

    /// Borrow the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.data
    }

    /// Key size in bytes
    pub fn size() -> usize {
        KEY_SIZE
    }
}

impl From<[u8; KEY_SIZE]> for Key {
    fn from(data: [u8; KEY_SIZE]) -> Self {
        Self::new(data)
    }
}

impl AsRef<[u8]> for Key {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.data, other.data)
    }
}

impl Eq for Key {}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key<{}>([REDACTED])", KEY_SIZE)
    }
}
