//! Counter (CTR) mode
//!
//! Block `i` is XORed with `E(nonce || counter + i)`. The keystream depends
//! only on the nonce and the block index, so every block can be computed
//! independently and encryption equals decryption. Only the forward
//! primitive is used.
//!
//! Reusing a nonce under the same key reuses the keystream. Nothing here
//! tracks nonces; that is the caller's job.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::Zeroize;

use super::{apply_indexed, input_block, IndexedMode, ModeOfOperation};
use crate::block::BlockPrimitive;
use crate::error::Result;
use crate::types::{Block, CounterNonce, Key};
use modecrypt_api::{Direction, Mode};
use modecrypt_internal::constant_time::xor;

pub mod counter;

pub use counter::{counter_block, CounterBlocks};


/// CTR mode bound to a 64-bit nonce and a starting counter
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct Ctr {
    nonce: CounterNonce,
    initial_counter: u64,
}

impl Ctr {
    /// Creates a CTR instance whose counter starts at zero
    pub fn new(nonce: CounterNonce) -> Self {
        Self::with_initial_counter(nonce, 0)
    }

    /// Creates a CTR instance whose counter starts at `initial_counter`
    ///
    /// Useful for resuming a stream at a block offset.
    pub fn with_initial_counter(nonce: CounterNonce, initial_counter: u64) -> Self {
        Self { nonce, initial_counter }
    }

    /// The nonce
    pub fn nonce(&self) -> &CounterNonce {
        &self.nonce
    }

    /// Counter value used for block `index`
    #[inline]
    pub fn counter_at(&self, index: usize) -> u64 {
        self.initial_counter.wrapping_add(index as u64)
    }

    /// Keystream block for `index`
    pub fn keystream_block<P: BlockPrimitive + ?Sized>(
        &self,
        primitive: &P,
        key: &Key,
        index: usize,
    ) -> Result<Block> {
        primitive.encrypt_block(key, &counter_block(&self.nonce, self.counter_at(index)))
    }

    /// Counter blocks starting at the initial counter
    pub fn counter_blocks(&self) -> CounterBlocks<'_> {
        CounterBlocks::new(&self.nonce, self.initial_counter)
    }
}

impl ModeOfOperation for Ctr {
    fn mode(&self) -> Mode {
        Mode::Ctr
    }

    fn apply<P: BlockPrimitive + ?Sized>(
        &self,
        primitive: &P,
        key: &Key,
        direction: Direction,
        blocks: &[Block],
    ) -> Result<Vec<Block>> {
        apply_indexed(self, primitive, key, direction, blocks)
    }
}

impl IndexedMode for Ctr {
    fn block_at<P: BlockPrimitive + ?Sized>(
        &self,
        primitive: &P,
        key: &Key,
        _direction: Direction,
        blocks: &[Block],
        index: usize,
    ) -> Result<Block> {
        let block = input_block("CTR", blocks, index)?;
        Ok(xor(block, &self.keystream_block(primitive, key, index)?))
    }
}
