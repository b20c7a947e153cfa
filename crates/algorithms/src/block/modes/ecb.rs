//! Electronic Codebook (ECB) mode
//!
//! Every block goes through the primitive on its own: `out[i] = E(in[i])` to
//! encrypt and `out[i] = D(in[i])` to decrypt. Equal input blocks give equal
//! output blocks, so ECB leaks structure and is only suitable for single-block
//! values or as a building block.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use super::{apply_indexed, input_block, IndexedMode, ModeOfOperation};
use crate::block::BlockPrimitive;
use crate::error::Result;
use crate::types::{Block, Key};
use modecrypt_api::{Direction, Mode};

/// ECB mode; it takes no per-message parameter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ecb;

impl Ecb {
    /// Creates the mode
    pub const fn new() -> Self {
        Ecb
    }
}

impl ModeOfOperation for Ecb {
    fn mode(&self) -> Mode {
        Mode::Ecb
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

impl IndexedMode for Ecb {
    fn block_at<P: BlockPrimitive + ?Sized>(
        &self,
        primitive: &P,
        key: &Key,
        direction: Direction,
        blocks: &[Block],
        index: usize,
    ) -> Result<Block> {
        let block = input_block("ECB", blocks, index)?;
        primitive.transform(direction, key, block)
    }
}
