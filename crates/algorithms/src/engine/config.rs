//! Run-time engine configuration

use crate::error::{validate, Result};
use modecrypt_api::Schedule;
use modecrypt_params::utils::symmetric::DEFAULT_PARALLEL_THRESHOLD;

/// How a [`ModeEngine`](super::ModeEngine) schedules block work
///
/// With one worker (the default) every block runs on the calling thread.
/// With more, messages of at least `parallel_threshold` blocks are split
/// across scoped threads whenever the mode allows it in that direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Number of threads block work may be spread over
    pub workers: usize,
    /// Minimum number of blocks before work is spread
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            workers: 1,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl EngineConfig {
    /// Every block on the calling thread
    pub fn sequential() -> Self {
        Self::default()
    }

    /// One worker per available core
    #[cfg(feature = "std")]
    pub fn available_parallelism() -> Self {
        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self::default().with_workers(workers)
    }

    /// Sets the worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Sets the block count at which work starts being spread
    pub fn with_parallel_threshold(mut self, blocks: usize) -> Self {
        self.parallel_threshold = blocks;
        self
    }

    /// Rejects a configuration with no workers
    pub fn validate(&self) -> Result<()> {
        validate::parameter(self.workers > 0, "EngineConfig", "workers must be at least 1")
    }

    /// Whether `blocks` blocks under `schedule` should be spread across workers
    pub fn fans_out(&self, schedule: Schedule, blocks: usize) -> bool {
        cfg!(feature = "std")
            && schedule == Schedule::Parallel
            && self.workers > 1
            && blocks > 1
            && blocks >= self.parallel_threshold
    }
}
