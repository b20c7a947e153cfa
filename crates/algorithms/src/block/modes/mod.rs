//! Block cipher modes of operation
//!
//! Each mode is a small value holding its per-message parameter (IV, nonce or
//! nothing) and implements [`ModeOfOperation`] over whole blocks. Framing a
//! byte message into blocks lives in [`framing`]; scheduling the work across
//! threads lives in the engine.
//!
//! Modes whose output block `i` depends only on input blocks that are already
//! known also implement [`IndexedMode`], which is what the engine fans out.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use super::BlockPrimitive;
use crate::error::{Error, Result};
use crate::types::{Block, Key};
use modecrypt_api::{Direction, Mode, Schedule};

pub mod cbc;
pub mod cfb;
pub mod ctr;
pub mod ecb;
mod feedback;
pub mod framing;
pub mod ofb;
pub mod pcbc;

// Re-exports
pub use cbc::Cbc;
pub use cfb::Cfb;
pub use ctr::Ctr;
pub use ecb::Ecb;
pub use feedback::FeedbackState;
pub use ofb::Ofb;
pub use pcbc::Pcbc;

/// A mode of operation over a sequence of whole blocks
pub trait ModeOfOperation {
    /// The mode this value implements
    fn mode(&self) -> Mode;

    /// How blocks may be scheduled in the given direction
    fn schedule(&self, direction: Direction) -> Schedule {
        self.mode().schedule(direction)
    }

    /// Transforms `blocks` in order, returning one output block per input block
    ///
    /// The first primitive error aborts the call; no partial output is returned.
    fn apply<P: BlockPrimitive + ?Sized>(
        &self,
        primitive: &P,
        key: &Key,
        direction: Direction,
        blocks: &[Block],
    ) -> Result<Vec<Block>>;
}

/// A mode whose output blocks can be computed independently by index
pub trait IndexedMode: ModeOfOperation {
    /// Computes output block `index` of the transform of `blocks`
    ///
    /// Fails with `InvalidParameter` when `index` is out of range or when the
    /// mode chains in this direction.
    fn block_at<P: BlockPrimitive + ?Sized>(
        &self,
        primitive: &P,
        key: &Key,
        direction: Direction,
        blocks: &[Block],
        index: usize,
    ) -> Result<Block>;
}

/// Bounds-checked block lookup shared by the indexed modes
pub(crate) fn input_block<'a>(
    context: &'static str,
    blocks: &'a [Block],
    index: usize,
) -> Result<&'a Block> {
    blocks
        .get(index)
        .ok_or_else(|| Error::param(context, "block index out of range"))
}

/// Computes every block through `block_at`, in order
pub(crate) fn apply_indexed<M, P>(
    mode: &M,
    primitive: &P,
    key: &Key,
    direction: Direction,
    blocks: &[Block],
) -> Result<Vec<Block>>
where
    M: IndexedMode + ?Sized,
    P: BlockPrimitive + ?Sized,
{
    (0..blocks.len())
        .map(|index| mode.block_at(primitive, key, direction, blocks, index))
        .collect()
}

/// Threads a feedback register through `blocks` one step at a time
pub(crate) fn chain<F>(blocks: &[Block], initial: FeedbackState, mut step: F) -> Result<Vec<Block>>
where
    F: FnMut(&FeedbackState, &Block) -> Result<(Block, FeedbackState)>,
{
    let mut out = Vec::with_capacity(blocks.len());
    let mut feedback = initial;
    for block in blocks {
        let (output, next) = step(&feedback, block)?;
        out.push(output);
        feedback = next;
    }
    Ok(out)
}
