//! Cipher Feedback (CFB) mode, full-block segments
//!
//! The previous ciphertext block (the IV for the first block) is encrypted
//! and the result XORed into the input:
//!
//! ```text
//! c[i] = p[i] ^ E(c[i-1])        c[-1] = IV
//! p[i] = c[i] ^ E(c[i-1])
//! ```
//!
//! Both directions use only the forward primitive. Decryption depends on
//! ciphertext alone and runs by index.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::Zeroize;

use super::{chain, input_block, FeedbackState, IndexedMode, ModeOfOperation};
use crate::block::BlockPrimitive;
use crate::error::{Error, Result};
use crate::types::{Block, Iv, Key};
use modecrypt_api::{Direction, Mode};
use modecrypt_internal::constant_time::xor;

/// CFB-128 mode bound to an initialization vector
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct Cfb {
    iv: Iv,
}

impl Cfb {
    /// Creates a CFB instance for one message
    pub fn new(iv: Iv) -> Self {
        Self { iv }
    }

    /// The initialization vector
    pub fn iv(&self) -> &Iv {
        &self.iv
    }

    /// One feedback step; the next feedback is the ciphertext block
    pub fn step<P: BlockPrimitive + ?Sized>(
        primitive: &P,
        key: &Key,
        direction: Direction,
        feedback: &FeedbackState,
        input: &Block,
    ) -> Result<(Block, FeedbackState)> {
        let output = xor(input, &primitive.encrypt_block(key, feedback.as_block())?);
        let ciphertext = match direction {
            Direction::Encrypt => output,
            Direction::Decrypt => *input,
        };
        Ok((output, FeedbackState::new(ciphertext)))
    }
}

impl ModeOfOperation for Cfb {
    fn mode(&self) -> Mode {
        Mode::Cfb
    }

    fn apply<P: BlockPrimitive + ?Sized>(
        &self,
        primitive: &P,
        key: &Key,
        direction: Direction,
        blocks: &[Block],
    ) -> Result<Vec<Block>> {
        chain(blocks, FeedbackState::from_iv(&self.iv), |feedback, block| {
            Self::step(primitive, key, direction, feedback, block)
        })
    }
}

impl IndexedMode for Cfb {
    fn block_at<P: BlockPrimitive + ?Sized>(
        &self,
        primitive: &P,
        key: &Key,
        direction: Direction,
        blocks: &[Block],
        index: usize,
    ) -> Result<Block> {
        if direction.is_encrypt() {
            return Err(Error::param("CFB", "encryption chains and cannot run by index"));
        }

        let block = input_block("CFB", blocks, index)?;
        let previous = match index {
            0 => self.iv.as_bytes(),
            _ => &blocks[index - 1],
        };
        Ok(xor(block, &primitive.encrypt_block(key, previous)?))
    }
}
