//! Index-addressed parallel block execution
//!
//! The output vector is allocated up front and split into contiguous chunks,
//! one per worker. Worker `w` writes exactly the slots for its index range,
//! so output order is input order no matter which thread finishes first.

use std::thread;

use crate::error::Result;
use crate::types::Block;
use modecrypt_params::utils::symmetric::BLOCK_SIZE;

/// Number of blocks each worker takes
fn chunk_len(count: usize, workers: usize) -> usize {
    let workers = workers.clamp(1, count.max(1));
    (count + workers - 1) / workers
}

/// Computes `f(0) .. f(count)` on up to `workers` scoped threads
///
/// Returns the first error in block order if any call fails. A panic in a
/// worker is resumed on the calling thread.
pub(crate) fn parallel<F>(count: usize, workers: usize, f: F) -> Result<Vec<Block>>
where
    F: Fn(usize) -> Result<Block> + Sync,
{
    if count == 0 {
        return Ok(Vec::new());
    }

    let per_worker = chunk_len(count, workers);
    let mut out = vec![[0u8; BLOCK_SIZE]; count];
    log::trace!(
        "fanning {} block(s) out to {} worker(s), {} per worker",
        count,
        (count + per_worker - 1) / per_worker,
        per_worker
    );

    thread::scope(|scope| {
        let handles: Vec<_> = out
            .chunks_mut(per_worker)
            .enumerate()
            .map(|(chunk, slots)| {
                let f = &f;
                scope.spawn(move || -> Result<()> {
                    let start = chunk * per_worker;
                    for (offset, slot) in slots.iter_mut().enumerate() {
                        *slot = f(start + offset)?;
                    }
                    Ok(())
                })
            })
            .collect();

        handles.into_iter().try_for_each(|handle| match handle.join() {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        })
    })?;

    Ok(out)
}
