//! Output Feedback (OFB) mode
//!
//! The IV is encrypted repeatedly to produce a keystream that is independent
//! of the message; each block is XORed with it:
//!
//! ```text
//! k[0] = E(IV)   k[i] = E(k[i-1])   out[i] = in[i] ^ k[i]
//! ```
//!
//! Encryption and decryption are the same operation. The keystream chain
//! makes both sequential.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::Zeroize;

use super::{chain, FeedbackState, ModeOfOperation};
use crate::block::BlockPrimitive;
use crate::error::Result;
use crate::types::{Block, Iv, Key};
use modecrypt_api::{Direction, Mode};
use modecrypt_internal::constant_time::xor;

/// OFB mode bound to an initialization vector
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct Ofb {
    iv: Iv,
}

impl Ofb {
    /// Creates an OFB instance for one message
    pub fn new(iv: Iv) -> Self {
        Self { iv }
    }

    /// The initialization vector
    pub fn iv(&self) -> &Iv {
        &self.iv
    }

    /// One keystream step; the next feedback is the keystream block itself
    ///
    /// `direction` does not affect the result.
    pub fn step<P: BlockPrimitive + ?Sized>(
        primitive: &P,
        key: &Key,
        _direction: Direction,
        feedback: &FeedbackState,
        input: &Block,
    ) -> Result<(Block, FeedbackState)> {
        let keystream = FeedbackState::new(primitive.encrypt_block(key, feedback.as_block())?);
        Ok((xor(input, keystream.as_block()), keystream))
    }

    /// The first `count` keystream blocks for this IV
    pub fn keystream<P: BlockPrimitive + ?Sized>(
        &self,
        primitive: &P,
        key: &Key,
        count: usize,
    ) -> Result<Vec<Block>> {
        let mut out = Vec::with_capacity(count);
        let mut register = FeedbackState::from_iv(&self.iv);
        for _ in 0..count {
            register = FeedbackState::new(primitive.encrypt_block(key, register.as_block())?);
            out.push(*register.as_block());
        }
        Ok(out)
    }
}

impl ModeOfOperation for Ofb {
    fn mode(&self) -> Mode {
        Mode::Ofb
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
