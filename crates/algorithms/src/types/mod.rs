//! Fixed-size value types used by the modes
//!
//! A [`Key`] is secret and zeroized on drop. IVs and nonces share the generic
//! [`Nonce`] container: [`Iv`] is one full block, [`CounterNonce`] is the
//! 64-bit value CTR places in the high half of each counter block.

pub mod key;
pub mod nonce;

pub use key::Key;
pub use nonce::{CounterNonce, Iv, Nonce};

use modecrypt_params::utils::symmetric::BLOCK_SIZE;

/// One 128-bit block, the atomic unit of primitive input and output
pub type Block = [u8; BLOCK_SIZE];
