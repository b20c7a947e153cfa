//! Splitting byte messages into whole blocks and joining them back
//!
//! Framing never pads. A message of `n` bytes yields `n / 16` blocks; the
//! `n % 16` trailing bytes are not part of any block.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::types::Block;
use modecrypt_params::utils::symmetric::BLOCK_SIZE;

/// Number of whole blocks in a message of `len` bytes
#[inline]
pub fn block_count(len: usize) -> usize {
    len / BLOCK_SIZE
}

/// Length of the output produced for a message of `len` bytes
#[inline]
pub fn framed_len(len: usize) -> usize {
    block_count(len) * BLOCK_SIZE
}

/// Splits `message` into whole blocks, dropping any trailing partial block
pub fn to_blocks(message: &[u8]) -> Vec<Block> {
    message
        .chunks_exact(BLOCK_SIZE)
        .map(|chunk| {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            block
        })
        .collect()
}

/// Concatenates blocks into a byte vector
pub fn from_blocks(blocks: &[Block]) -> Vec<u8> {
    let mut out = Vec::with_capacity(blocks.len() * BLOCK_SIZE);
    for block in blocks {
        out.extend_from_slice(block);
    }
    out
}

/// The bytes `to_blocks` drops: everything after the last whole block
///
/// ```
/// use modecrypt_algorithms::block::modes::framing;
///
/// let message = [7u8; 21];
/// assert_eq!(framing::trailing(&message), &[7u8; 5][..]);
/// assert!(framing::trailing(&message[..16]).is_empty());
/// ```
pub fn trailing(message: &[u8]) -> &[u8] {
    &message[framed_len(message.len())..]
}
