//! Initialization vectors and CTR nonces
//!
//! Both are non-secret per-message values. They are never checked for reuse:
//! keeping them unique per key is the caller's responsibility.

use core::fmt;
use core::ops::Deref;
use byteorder::{BigEndian, ByteOrder};
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::error::{validate, Result};
use modecrypt_params::utils::symmetric::{CTR_NONCE_SIZE, IV_SIZE};

/// Generic nonce type with compile-time size guarantee
#[derive(Clone, Zeroize)]
pub struct Nonce<const N: usize> {
    data: [u8; N],
}

/// 128-bit initialization vector for CBC, PCBC, CFB and OFB
pub type Iv = Nonce<IV_SIZE>;

/// 64-bit nonce for CTR
pub type CounterNonce = Nonce<CTR_NONCE_SIZE>;

impl<const N: usize> Nonce<N> {
    /// Create a new nonce from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create a zeroed nonce
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("Nonce", slice.len(), N)?;

        let mut data = [0u8; N];
        data.copy_from_slice(slice);
        Ok(Self { data })
    }

    /// Generate a random nonce
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut data = [0u8; N];
        rng.fill_bytes(&mut data);
        Self { data }
    }

    /// Borrow the nonce bytes
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.data
    }

    /// Get the size of this nonce in bytes
    pub fn size() -> usize {
        N
    }
}

impl Nonce<IV_SIZE> {
    /// Create an IV from a 128-bit integer, serialised big-endian
    pub fn from_u128(value: u128) -> Self {
        Self { data: value.to_be_bytes() }
    }
}

impl Nonce<CTR_NONCE_SIZE> {
    /// Create a CTR nonce from a 64-bit integer, serialised big-endian
    pub fn from_u64(value: u64) -> Self {
        let mut data = [0u8; CTR_NONCE_SIZE];
        BigEndian::write_u64(&mut data, value);
        Self { data }
    }

    /// Create a CTR nonce from the low 64 bits of a wider integer
    pub fn from_u128_truncated(value: u128) -> Self {
        Self::from_u64(value as u64)
    }

    /// The nonce as a big-endian integer
    pub fn to_u64(&self) -> u64 {
        BigEndian::read_u64(&self.data)
    }
}

impl<const N: usize> From<[u8; N]> for Nonce<N> {
    fn from(data: [u8; N]) -> Self {
        Self::new(data)
    }
}

impl<const N: usize> AsRef<[u8]> for Nonce<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> Deref for Nonce<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> PartialEq for Nonce<N> {
    fn eq(&self, other: &Self) -> bool {
        self.data.ct_eq(&other.data).into()
    }
}

impl<const N: usize> Eq for Nonce<N> {}

impl<const N: usize> fmt::Debug for Nonce<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nonce<{}>", N)
    }
}
