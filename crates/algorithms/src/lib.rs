//! Block cipher modes of operation
//!
//! This crate chains a fixed-size 128-bit block primitive into the six classic
//! modes of operation: ECB, CBC, PCBC, CFB, OFB and CTR. The primitive is an
//! injected capability ([`BlockPrimitive`]), so the mode logic can be driven by
//! the bundled [`Aes128`] or by any other invertible 16-byte transform.
//!
//! # Framing
//!
//! Messages are split into whole 16-byte blocks. A trailing partial block is
//! silently dropped and never transformed or emitted; no padding is applied.
//! Callers that need the original length can recover the dropped bytes with
//! [`block::modes::framing::trailing`] and re-append them.
//!
//! # Example
//!
//! ```
//! use modecrypt_algorithms::{Aes128, CounterNonce, Direction, Iv, Key, ModeEngine};
//!
//! let engine = ModeEngine::new(Aes128);
//! let key = Key::from_u128(0x2b7e1516_28aed2a6_abf71588_09cf4f3c);
//! let iv = Iv::from_u128(0x00010203_04050607_08090a0b_0c0d0e0f);
//!
//! let message = b"exactly thirty-two bytes long!!!";
//! let ciphertext = engine.cbc(&key, &iv, message, Direction::Encrypt).unwrap();
//! let plaintext = engine.cbc(&key, &iv, &ciphertext, Direction::Decrypt).unwrap();
//! assert_eq!(&plaintext[..], &message[..]);
//!
//! let nonce = CounterNonce::from_u64(42);
//! let ct = engine.ctr(&key, &nonce, message, 0u8).unwrap();
//! assert_eq!(engine.ctr(&key, &nonce, &ct, 1u8).unwrap(), message.to_vec());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Selectors shared with the API crate
pub use modecrypt_api::{Direction, IntoDirection, Mode, Schedule};

// Block primitive, framing and the six modes
pub mod block;
pub use block::{Aes128, BlockPrimitive, FnPrimitive};
pub use block::modes::{Cbc, Cfb, Ctr, Ecb, FeedbackState, IndexedMode, ModeOfOperation, Ofb, Pcbc};

// Mode engine facade
pub mod engine;
pub use engine::{EngineConfig, ModeEngine, Seed};

// Type system
pub mod types;
pub use types::{Block, CounterNonce, Iv, Key, Nonce};
