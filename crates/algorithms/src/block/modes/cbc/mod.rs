//! Cipher Block Chaining (CBC) mode
//!
//! Each plaintext block is XORed with the previous ciphertext block (the IV
//! for the first block) before encryption:
//!
//! ```text
//! c[i] = E(p[i] ^ c[i-1])        c[-1] = IV
//! p[i] = D(c[i]) ^ c[i-1]
//! ```
//!
//! Encryption is inherently sequential. Decryption only needs ciphertext
//! blocks the caller already has, so every block can be recovered
//! independently through [`IndexedMode::block_at`].

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::Zeroize;

use super::{chain, input_block, FeedbackState, IndexedMode, ModeOfOperation};
use crate::block::BlockPrimitive;
use crate::error::{Error, Result};
use crate::types::{Block, Iv, Key};
use modecrypt_api::{Direction, Mode};
use modecrypt_internal::constant_time::xor;


/// CBC mode bound to an initialization vector
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct Cbc {
    iv: Iv,
}

impl Cbc {
    /// Creates a CBC instance for one message
    pub fn new(iv: Iv) -> Self {
        Self { iv }
    }

    /// The initialization vector
    pub fn iv(&self) -> &Iv {
        &self.iv
    }

    /// One chaining step: transforms `input` against `feedback` and returns
    /// the output block together with the next feedback value
    pub fn step<P: BlockPrimitive + ?Sized>(
        primitive: &P,
        key: &Key,
        direction: Direction,
        feedback: &FeedbackState,
        input: &Block,
    ) -> Result<(Block, FeedbackState)> {
        match direction {
            Direction::Encrypt => {
                let ciphertext = primitive.encrypt_block(key, &xor(input, feedback.as_block()))?;
                Ok((ciphertext, FeedbackState::new(ciphertext)))
            }
            Direction::Decrypt => {
                let plaintext = xor(&primitive.decrypt_block(key, input)?, feedback.as_block());
                Ok((plaintext, FeedbackState::new(*input)))
            }
        }
    }
}

impl ModeOfOperation for Cbc {
    fn mode(&self) -> Mode {
        Mode::Cbc
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

impl IndexedMode for Cbc {
    fn block_at<P: BlockPrimitive + ?Sized>(
        &self,
        primitive: &P,
        key: &Key,
        direction: Direction,
        blocks: &[Block],
        index: usize,
    ) -> Result<Block> {
        if direction.is_encrypt() {
            return Err(Error::param("CBC", "encryption chains and cannot run by index"));
        }

        let block = input_block("CBC", blocks, index)?;
        let previous = match index {
            0 => self.iv.as_bytes(),
            _ => &blocks[index - 1],
        };
        Ok(xor(&primitive.decrypt_block(key, block)?, previous))
    }
}
