//! The register carried between blocks by the chaining modes

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::types::{Block, Iv};

/// Feedback register of a chaining mode
///
/// Holds the IV before the first block and the mode's feedback value
/// afterwards. The register is wiped when dropped, so intermediate keystream
/// (OFB) and plaintext-derived values (PCBC) do not linger.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct FeedbackState(Block);

impl FeedbackState {
    /// Wraps a raw block
    pub fn new(block: Block) -> Self {
        Self(block)
    }

    /// Starts a chain from an IV
    pub fn from_iv(iv: &Iv) -> Self {
        Self(*iv.as_bytes())
    }

    /// The current register value
    pub fn as_block(&self) -> &Block {
        &self.0
    }
}

impl From<&Iv> for FeedbackState {
    fn from(iv: &Iv) -> Self {
        Self::from_iv(iv)
    }
}

impl core::fmt::Debug for FeedbackState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("FeedbackState([REDACTED])")
    }
}
