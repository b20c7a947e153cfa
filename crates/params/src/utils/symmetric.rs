//! Constants for block modes and the 128-bit block primitive

/// Block size of the primitive in bytes
pub const BLOCK_SIZE: usize = 16;

/// Key size in bytes
pub const KEY_SIZE: usize = 16;

/// Initialization vector size in bytes (one block)
pub const IV_SIZE: usize = BLOCK_SIZE;

/// CTR nonce size in bytes; occupies the high half of the counter block
pub const CTR_NONCE_SIZE: usize = 8;

/// CTR counter size in bytes; occupies the low half of the counter block
pub const CTR_COUNTER_SIZE: usize = BLOCK_SIZE - CTR_NONCE_SIZE;

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// AES-128 round count
pub const AES128_ROUNDS: usize = 10;

/// AES-128 expanded key size in bytes (11 round keys)
pub const AES128_EXPANDED_KEY_SIZE: usize = (AES128_ROUNDS + 1) * AES_BLOCK_SIZE;

/// Default number of blocks below which the engine never spawns workers
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;
