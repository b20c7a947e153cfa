//! Counter block layout
//!
//! ```text
//! bytes 0..8   nonce, big-endian
//! bytes 8..16  counter, big-endian
//! ```
//!
//! The counter wraps modulo 2⁶⁴ and never carries into the nonce half.

use byteorder::{BigEndian, ByteOrder};

use crate::types::{Block, CounterNonce};
use modecrypt_params::utils::symmetric::{BLOCK_SIZE, CTR_COUNTER_SIZE, CTR_NONCE_SIZE};

const _: () = assert!(CTR_NONCE_SIZE + CTR_COUNTER_SIZE == BLOCK_SIZE);

/// Builds the counter block `nonce || counter`
#[inline]
pub fn counter_block(nonce: &CounterNonce, counter: u64) -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    block[..CTR_NONCE_SIZE].copy_from_slice(nonce.as_bytes());
    BigEndian::write_u64(&mut block[CTR_NONCE_SIZE..], counter);
    block
}

/// Iterator over successive counter blocks for one nonce
#[derive(Clone, Debug)]
pub struct CounterBlocks<'a> {
    nonce: &'a CounterNonce,
    next: u64,
}

impl<'a> CounterBlocks<'a> {
    /// Starts at `initial`
    pub fn new(nonce: &'a CounterNonce, initial: u64) -> Self {
        Self { nonce, next: initial }
    }
}

impl Iterator for CounterBlocks<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        let block = counter_block(self.nonce, self.next);
        self.next = self.next.wrapping_add(1);
        Some(block)
    }
}
