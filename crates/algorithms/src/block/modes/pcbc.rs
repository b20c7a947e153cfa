//! Propagating Cipher Block Chaining (PCBC) mode
//!
//! Like CBC, but the value chained into the next block is the XOR of the
//! plaintext and ciphertext of the current one:
//!
//! ```text
//! c[i] = E(p[i] ^ f[i])          f[0] = IV
//! p[i] = D(c[i]) ^ f[i]          f[i+1] = p[i] ^ c[i]
//! ```
//!
//! A corrupted ciphertext block garbles every plaintext block after it, and
//! both directions are sequential.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::Zeroize;

use super::{chain, FeedbackState, ModeOfOperation};
use crate::block::BlockPrimitive;
use crate::error::Result;
use crate::types::{Block, Iv, Key};
use modecrypt_api::{Direction, Mode};
use modecrypt_internal::constant_time::xor;

/// PCBC mode bound to an initialization vector
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct Pcbc {
    iv: Iv,
}

impl Pcbc {
    /// Creates a PCBC instance for one message
    pub fn new(iv: Iv) -> Self {
        Self { iv }
    }

    /// The initialization vector
    pub fn iv(&self) -> &Iv {
        &self.iv
    }

    /// One chaining step; the next feedback is always `plaintext ^ ciphertext`
    pub fn step<P: BlockPrimitive + ?Sized>(
        primitive: &P,
        key: &Key,
        direction: Direction,
        feedback: &FeedbackState,
        input: &Block,
    ) -> Result<(Block, FeedbackState)> {
        let (output, plaintext, ciphertext) = match direction {
            Direction::Encrypt => {
                let ciphertext = primitive.encrypt_block(key, &xor(input, feedback.as_block()))?;
                (ciphertext, *input, ciphertext)
            }
            Direction::Decrypt => {
                let plaintext = xor(&primitive.decrypt_block(key, input)?, feedback.as_block());
                (plaintext, plaintext, *input)
            }
        };
        Ok((output, FeedbackState::new(xor(&plaintext, &ciphertext))))
    }
}

impl ModeOfOperation for Pcbc {
    fn mode(&self) -> Mode {
        Mode::Pcbc
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
