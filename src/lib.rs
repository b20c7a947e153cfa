//! # modecrypt
//!
//! Block cipher modes of operation over an injected 128-bit block primitive.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! modecrypt = "0.3"
//! ```
//!
//! ```
//! use modecrypt::prelude::*;
//!
//! let engine = ModeEngine::new(Aes128);
//! let key = Key::from_u128(0x2b7e151628aed2a6abf7158809cf4f3c);
//! let seed = Seed::Iv(Iv::from_u128(0x000102030405060708090a0b0c0d0e0f));
//! let message = [0x61u8; 40];
//!
//! let ct = engine.run(Mode::Pcbc, Direction::Encrypt, &key, &seed, &message).unwrap();
//! assert_eq!(ct.len(), 32); // the trailing 8 bytes are not a whole block
//! let pt = engine.run(Mode::Pcbc, Direction::Decrypt, &key, &seed, &ct).unwrap();
//! assert_eq!(&pt[..], &message[..32]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` and the thread-backed executor
//! - `alloc`: heap support on `no_std` targets
//! - `serde`: `Serialize`/`Deserialize` for `Mode`, `Direction` and `EngineConfig`
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`modecrypt-api`]: error type and the mode/direction selectors
//! - [`modecrypt-algorithms`]: block primitive, the six modes, the engine
//! - [`modecrypt-params`]: sizes and constants
//! - [`modecrypt-internal`]: constant-time helpers

#![cfg_attr(not(feature = "std"), no_std)]

pub use modecrypt_algorithms as algorithms;
pub use modecrypt_api as api;
pub use modecrypt_internal as internal;
pub use modecrypt_params as params;

/// Common imports for modecrypt users
pub mod prelude {
    // Error types
    pub use crate::api::{Error, Result};

    // Selectors
    pub use crate::api::{Direction, IntoDirection, Mode, Schedule};

    // Primitive capability and the bundled cipher
    pub use crate::algorithms::{Aes128, BlockPrimitive, FnPrimitive};

    // Engine and values
    pub use crate::algorithms::{
        Block, CounterNonce, EngineConfig, Iv, Key, ModeEngine, ModeOfOperation, Seed,
    };
}
