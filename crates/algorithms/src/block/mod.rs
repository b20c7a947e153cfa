//! Block primitive capability and the modes built on it
//!
//! The modes never hard-wire a cipher. They receive a [`BlockPrimitive`]: a
//! pair of total functions on 16-byte blocks, `decrypt_block` being the exact
//! inverse of `encrypt_block` under the same key.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::{boxed::Box, sync::Arc};
#[cfg(feature = "std")]
use std::sync::Arc;

use crate::error::Result;
use crate::types::{Block, Key};
use modecrypt_api::Direction;

pub mod aes;
pub mod modes;

// Re-exports
pub use aes::Aes128;
pub use modes::{Cbc, Cfb, Ctr, Ecb, Ofb, Pcbc};

/// A fixed-size 128-bit invertible block transform
///
/// Implementations should be total for 16-byte inputs. If one can fail (for
/// instance a hardware-backed cipher rejecting its key), the error is returned
/// to the caller of the mode unchanged and the whole call fails.
pub trait BlockPrimitive {
    /// Encrypts a single block
    fn encrypt_block(&self, key: &Key, block: &Block) -> Result<Block>;

    /// Decrypts a single block
    fn decrypt_block(&self, key: &Key, block: &Block) -> Result<Block>;

    /// Returns the name of the primitive
    fn name(&self) -> &'static str {
        "block primitive"
    }

    /// Runs the primitive in the given direction
    fn transform(&self, direction: Direction, key: &Key, block: &Block) -> Result<Block> {
        match direction {
            Direction::Encrypt => self.encrypt_block(key, block),
            Direction::Decrypt => self.decrypt_block(key, block),
        }
    }
}

impl<P: BlockPrimitive + ?Sized> BlockPrimitive for &P {
    fn encrypt_block(&self, key: &Key, block: &Block) -> Result<Block> {
        (**self).encrypt_block(key, block)
    }

    fn decrypt_block(&self, key: &Key, block: &Block) -> Result<Block> {
        (**self).decrypt_block(key, block)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

#[cfg(any(feature = "std", feature = "alloc"))]
impl<P: BlockPrimitive + ?Sized> BlockPrimitive for Box<P> {
    fn encrypt_block(&self, key: &Key, block: &Block) -> Result<Block> {
        (**self).encrypt_block(key, block)
    }

    fn decrypt_block(&self, key: &Key, block: &Block) -> Result<Block> {
        (**self).decrypt_block(key, block)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

#[cfg(any(feature = "std", feature = "alloc"))]
impl<P: BlockPrimitive + ?Sized> BlockPrimitive for Arc<P> {
    fn encrypt_block(&self, key: &Key, block: &Block) -> Result<Block> {
        (**self).encrypt_block(key, block)
    }

    fn decrypt_block(&self, key: &Key, block: &Block) -> Result<Block> {
        (**self).decrypt_block(key, block)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Adapts a pair of infallible functions into a [`BlockPrimitive`]
///
/// ```
/// use modecrypt_algorithms::{BlockPrimitive, FnPrimitive, Key};
///
/// let xor = |k: &Key, b: &[u8; 16]| -> [u8; 16] {
///     core::array::from_fn(|i| b[i] ^ k.as_bytes()[i])
/// };
/// let primitive = FnPrimitive::new("xor", xor, xor);
///
/// let key = Key::new([0x0f; 16]);
/// let block = [0xf0u8; 16];
/// let ct = primitive.encrypt_block(&key, &block).unwrap();
/// assert_eq!(ct, [0xff; 16]);
/// assert_eq!(primitive.decrypt_block(&key, &ct).unwrap(), block);
/// ```
#[derive(Clone, Copy)]
pub struct FnPrimitive<E, D> {
    name: &'static str,
    encrypt: E,
    decrypt: D,
}

impl<E, D> FnPrimitive<E, D>
where
    E: Fn(&Key, &Block) -> Block,
    D: Fn(&Key, &Block) -> Block,
{
    /// Wraps `encrypt` and its inverse `decrypt`
    pub fn new(name: &'static str, encrypt: E, decrypt: D) -> Self {
        Self { name, encrypt, decrypt }
    }
}

impl<E, D> BlockPrimitive for FnPrimitive<E, D>
where
    E: Fn(&Key, &Block) -> Block,
    D: Fn(&Key, &Block) -> Block,
{
    fn encrypt_block(&self, key: &Key, block: &Block) -> Result<Block> {
        Ok((self.encrypt)(key, block))
    }

    fn decrypt_block(&self, key: &Key, block: &Block) -> Result<Block> {
        Ok((self.decrypt)(key, block))
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

impl<E, D> core::fmt::Debug for FnPrimitive<E, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FnPrimitive").field("name", &self.name).finish()
    }
}
