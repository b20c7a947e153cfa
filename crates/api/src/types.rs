//! Mode and direction selectors
//!
//! These are the two small enumerations a caller uses to tell the mode engine
//! what to do. Raw integer flags and strings are accepted at the boundary
//! through [`IntoDirection`] and [`core::str::FromStr`], and rejected there
//! with [`Error::InvalidDirection`] / [`Error::InvalidParameter`], so nothing
//! past the boundary ever sees an unvalidated selector.

use core::fmt;
use core::str::FromStr;

use crate::error::{validate, Error, Result};

/// Raw flag for encryption, matching the `0`/`1` convention of flag-based callers
pub const ENCRYPT_FLAG: u8 = 0;

/// Raw flag for decryption
pub const DECRYPT_FLAG: u8 = 1;

/// Which way a mode of operation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Plaintext to ciphertext
    Encrypt,
    /// Ciphertext to plaintext
    Decrypt,
}

impl Direction {
    /// The opposite direction
    pub fn inverse(self) -> Self {
        match self {
            Direction::Encrypt => Direction::Decrypt,
            Direction::Decrypt => Direction::Encrypt,
        }
    }

    /// The raw flag for this direction
    pub fn flag(self) -> u8 {
        match self {
            Direction::Encrypt => ENCRYPT_FLAG,
            Direction::Decrypt => DECRYPT_FLAG,
        }
    }

    /// Whether this is [`Direction::Encrypt`]
    pub fn is_encrypt(self) -> bool {
        self == Direction::Encrypt
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => f.write_str("encrypt"),
            Direction::Decrypt => f.write_str("decrypt"),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = Error;

    fn try_from(flag: u8) -> Result<Self> {
        Direction::try_from(i64::from(flag))
    }
}

impl TryFrom<i32> for Direction {
    type Error = Error;

    fn try_from(flag: i32) -> Result<Self> {
        Direction::try_from(i64::from(flag))
    }
}

impl TryFrom<i64> for Direction {
    type Error = Error;

    fn try_from(flag: i64) -> Result<Self> {
        validate::direction_flag("Direction", flag)?;
        Ok(if flag == i64::from(ENCRYPT_FLAG) {
            Direction::Encrypt
        } else {
            Direction::Decrypt
        })
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("encrypt") {
            Ok(Direction::Encrypt)
        } else if s.eq_ignore_ascii_case("decrypt") {
            Ok(Direction::Decrypt)
        } else {
            Err(Error::invalid_direction(
                "Direction",
                "expected \"encrypt\" or \"decrypt\"",
            ))
        }
    }
}

/// Conversion of a caller-supplied direction selector into a validated [`Direction`]
///
/// The mode engine accepts any `IntoDirection` so that raw flags are checked
/// once, at the engine boundary, before a single block is processed.
pub trait IntoDirection {
    /// Validate and convert
    fn into_direction(self) -> Result<Direction>;
}

impl IntoDirection for Direction {
    fn into_direction(self) -> Result<Direction> {
        Ok(self)
    }
}

impl IntoDirection for &Direction {
    fn into_direction(self) -> Result<Direction> {
        Ok(*self)
    }
}

impl IntoDirection for u8 {
    fn into_direction(self) -> Result<Direction> {
        Direction::try_from(self)
    }
}

impl IntoDirection for i32 {
    fn into_direction(self) -> Result<Direction> {
        Direction::try_from(self)
    }
}

impl IntoDirection for i64 {
    fn into_direction(self) -> Result<Direction> {
        Direction::try_from(self)
    }
}

impl IntoDirection for &str {
    fn into_direction(self) -> Result<Direction> {
        self.parse()
    }
}

/// Whether the per-block primitive calls of a mode may be issued concurrently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Every output block is computable from its index and the input alone
    Parallel,
    /// Block `i` needs state produced while processing block `i - 1`
    Sequential,
}

/// Block cipher modes of operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Electronic codebook
    Ecb,
    /// Cipher block chaining
    Cbc,
    /// Propagating cipher block chaining
    Pcbc,
    /// Cipher feedback (full-block segments)
    Cfb,
    /// Output feedback
    Ofb,
    /// Counter mode with a 64-bit nonce and 64-bit counter
    Ctr,
}

impl Mode {
    /// Every supported mode
    pub const ALL: [Mode; 6] = [Mode::Ecb, Mode::Cbc, Mode::Pcbc, Mode::Cfb, Mode::Ofb, Mode::Ctr];

    /// Lower-case mode name
    pub fn name(self) -> &'static str {
        match self {
            Mode::Ecb => "ecb",
            Mode::Cbc => "cbc",
            Mode::Pcbc => "pcbc",
            Mode::Cfb => "cfb",
            Mode::Ofb => "ofb",
            Mode::Ctr => "ctr",
        }
    }

    /// Whether the mode is seeded with a 128-bit IV
    pub fn requires_iv(self) -> bool {
        matches!(self, Mode::Cbc | Mode::Pcbc | Mode::Cfb | Mode::Ofb)
    }

    /// Whether the mode is seeded with a 64-bit nonce
    pub fn requires_nonce(self) -> bool {
        self == Mode::Ctr
    }

    /// Whether the primitive's decrypt operation is ever invoked
    pub fn uses_inverse_primitive(self) -> bool {
        matches!(self, Mode::Ecb | Mode::Cbc | Mode::Pcbc)
    }

    /// Parallel safety of the mode in the given direction
    ///
    /// | Mode | Encrypt | Decrypt |
    /// |------|---------|---------|
    /// | ECB  | parallel | parallel |
    /// | CBC  | sequential | parallel |
    /// | PCBC | sequential | sequential |
    /// | CFB  | sequential | parallel |
    /// | OFB  | sequential | sequential |
    /// | CTR  | parallel | parallel |
    pub fn schedule(self, direction: Direction) -> Schedule {
        match (self, direction) {
            (Mode::Ecb, _) | (Mode::Ctr, _) => Schedule::Parallel,
            (Mode::Cbc, Direction::Decrypt) | (Mode::Cfb, Direction::Decrypt) => Schedule::Parallel,
            _ => Schedule::Sequential,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Mode::ALL
            .iter()
            .copied()
            .find(|mode| s.eq_ignore_ascii_case(mode.name()))
            .ok_or_else(|| Error::param("Mode", "expected one of ecb, cbc, pcbc, cfb, ofb, ctr"))
    }
}
