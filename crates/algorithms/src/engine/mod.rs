//! The mode engine facade
//!
//! [`ModeEngine`] owns a block primitive and exposes one operation per mode.
//! Every operation follows the same path:
//!
//! 1. the direction is validated (raw flags, strings and [`Direction`] are all
//!    accepted); an invalid one fails with `InvalidDirection` before any block
//!    is framed or transformed
//! 2. the message is framed into whole blocks, dropping a trailing partial one
//! 3. the blocks run through the mode, on worker threads when the
//!    configuration and the mode's schedule allow it
//! 4. the output blocks are joined back into bytes
//!
//! No state survives between calls; one engine can serve many threads.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::Zeroizing;

use crate::block::modes::{framing, Cbc, Cfb, Ctr, Ecb, IndexedMode, ModeOfOperation, Ofb, Pcbc};
use crate::block::BlockPrimitive;
use crate::error::{Error, Result, ResultExt};
use crate::types::{Block, CounterNonce, Iv, Key};
use modecrypt_api::{Direction, IntoDirection, Mode, Schedule};

pub mod config;
#[cfg(feature = "std")]
mod executor;

pub use config::EngineConfig;


/// The per-message parameter handed to [`ModeEngine::run`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Seed {
    /// No parameter (ECB)
    #[default]
    None,
    /// A 128-bit IV (CBC, PCBC, CFB, OFB)
    Iv(Iv),
    /// A 64-bit nonce (CTR)
    Nonce(CounterNonce),
}

impl From<Iv> for Seed {
    fn from(iv: Iv) -> Self {
        Seed::Iv(iv)
    }
}

impl From<CounterNonce> for Seed {
    fn from(nonce: CounterNonce) -> Self {
        Seed::Nonce(nonce)
    }
}

/// Runs the six modes of operation over an injected block primitive
#[derive(Clone, Debug)]
pub struct ModeEngine<P> {
    primitive: P,
    config: EngineConfig,
}

impl<P: BlockPrimitive + Sync> ModeEngine<P> {
    /// Creates an engine that processes every block on the calling thread
    pub fn new(primitive: P) -> Self {
        Self {
            primitive,
            config: EngineConfig::default(),
        }
    }

    /// Creates an engine with an explicit configuration
    pub fn with_config(primitive: P, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { primitive, config })
    }

    /// The engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The block primitive
    pub fn primitive(&self) -> &P {
        &self.primitive
    }

    /// Whether `mode` may spread blocks across workers in `direction`
    pub fn schedule(&self, mode: Mode, direction: Direction) -> Schedule {
        mode.schedule(direction)
    }

    /// Runs `mode` with a seed chosen at run time
    ///
    /// `seed` must match the mode: [`Seed::None`] for ECB, [`Seed::Iv`] for
    /// CBC, PCBC, CFB and OFB, [`Seed::Nonce`] for CTR. Anything else fails
    /// with `InvalidParameter`.
    pub fn run(
        &self,
        mode: Mode,
        direction: impl IntoDirection,
        key: &Key,
        seed: &Seed,
        message: &[u8],
    ) -> Result<Vec<u8>> {
        let direction = direction.into_direction().with_context("ModeEngine::run")?;
        match (mode, seed) {
            (Mode::Ecb, Seed::None) => self.ecb(key, message, direction),
            (Mode::Cbc, Seed::Iv(iv)) => self.cbc(key, iv, message, direction),
            (Mode::Pcbc, Seed::Iv(iv)) => self.pcbc(key, iv, message, direction),
            (Mode::Cfb, Seed::Iv(iv)) => self.cfb(key, iv, message, direction),
            (Mode::Ofb, Seed::Iv(iv)) => self.ofb(key, iv, message, direction),
            (Mode::Ctr, Seed::Nonce(nonce)) => self.ctr(key, nonce, message, direction),
            (Mode::Ecb, _) => Err(Error::param("ModeEngine::run", "ECB takes no IV or nonce")),
            (Mode::Ctr, _) => Err(Error::param("ModeEngine::run", "CTR requires a 64-bit nonce")),
            (_, _) => Err(Error::param("ModeEngine::run", "mode requires a 128-bit IV")),
        }
    }

    /// Electronic Codebook
    pub fn ecb(&self, key: &Key, message: &[u8], direction: impl IntoDirection) -> Result<Vec<u8>> {
        let direction = direction.into_direction().with_context("ModeEngine::ecb")?;
        self.process_indexed(&Ecb, key, direction, message)
    }

    /// Cipher Block Chaining
    pub fn cbc(
        &self,
        key: &Key,
        iv: &Iv,
        message: &[u8],
        direction: impl IntoDirection,
    ) -> Result<Vec<u8>> {
        let direction = direction.into_direction().with_context("ModeEngine::cbc")?;
        self.process_indexed(&Cbc::new(iv.clone()), key, direction, message)
    }

    /// Propagating Cipher Block Chaining
    pub fn pcbc(
        &self,
        key: &Key,
        iv: &Iv,
        message: &[u8],
        direction: impl IntoDirection,
    ) -> Result<Vec<u8>> {
        let direction = direction.into_direction().with_context("ModeEngine::pcbc")?;
        self.process_chained(&Pcbc::new(iv.clone()), key, direction, message)
    }

    /// Cipher Feedback with full-block segments
    pub fn cfb(
        &self,
        key: &Key,
        iv: &Iv,
        message: &[u8],
        direction: impl IntoDirection,
    ) -> Result<Vec<u8>> {
        let direction = direction.into_direction().with_context("ModeEngine::cfb")?;
        self.process_indexed(&Cfb::new(iv.clone()), key, direction, message)
    }

    /// Output Feedback
    pub fn ofb(
        &self,
        key: &Key,
        iv: &Iv,
        message: &[u8],
        direction: impl IntoDirection,
    ) -> Result<Vec<u8>> {
        let direction = direction.into_direction().with_context("ModeEngine::ofb")?;
        self.process_chained(&Ofb::new(iv.clone()), key, direction, message)
    }

    /// Counter mode with a 64-bit nonce and a counter starting at zero
    pub fn ctr(
        &self,
        key: &Key,
        nonce: &CounterNonce,
        message: &[u8],
        direction: impl IntoDirection,
    ) -> Result<Vec<u8>> {
        let direction = direction.into_direction().with_context("ModeEngine::ctr")?;
        self.process_indexed(&Ctr::new(nonce.clone()), key, direction, message)
    }

    fn frame(&self, mode: Mode, direction: Direction, message: &[u8]) -> Zeroizing<Vec<Block>> {
        let blocks = Zeroizing::new(framing::to_blocks(message));
        log::debug!(
            "{} {} with {}: {} block(s), {} trailing byte(s) dropped",
            mode,
            direction,
            self.primitive.name(),
            blocks.len(),
            framing::trailing(message).len()
        );
        blocks
    }

    fn process_indexed<M>(
        &self,
        mode: &M,
        key: &Key,
        direction: Direction,
        message: &[u8],
    ) -> Result<Vec<u8>>
    where
        M: IndexedMode + Sync,
    {
        let blocks = self.frame(mode.mode(), direction, message);

        #[cfg(feature = "std")]
        {
            if self.config.fans_out(mode.schedule(direction), blocks.len()) {
                let out = Zeroizing::new(executor::parallel(
                    blocks.len(),
                    self.config.workers,
                    |index| mode.block_at(&self.primitive, key, direction, &blocks, index),
                )?);
                return Ok(framing::from_blocks(&out));
            }
        }

        let out = Zeroizing::new(mode.apply(&self.primitive, key, direction, &blocks)?);
        Ok(framing::from_blocks(&out))
    }

    fn process_chained<M: ModeOfOperation>(
        &self,
        mode: &M,
        key: &Key,
        direction: Direction,
        message: &[u8],
    ) -> Result<Vec<u8>> {
        let blocks = self.frame(mode.mode(), direction, message);
        let out = Zeroizing::new(mode.apply(&self.primitive, key, direction, &blocks)?);
        Ok(framing::from_blocks(&out))
    }
}
