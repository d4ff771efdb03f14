//! Multi-threaded fill.
//!
//! The requested length is split into one chunk per worker. Each worker fills its chunk
//! into a private buffer with its own PRNG, then takes the shared lock once and appends
//! the whole buffer. Generation never holds the lock.
//!
//! Chunking: with `t` effective threads and length `n`, the first `t - 1` chunks hold
//! `n / t` items each and the last chunk takes the rest, so the chunk sizes sum to `n`.
//!
//! Ordering: chunks land in the order workers acquire the lock. Positions in the output
//! carry no relation to chunk index and may differ between runs, even with fixed seeds.

use std::sync::Mutex;
use std::thread;

use rand::prelude::*;

use crate::error::FillError;
use crate::sampler::fill_with_rng;
use crate::seed::{ClockSeed, SeedSource};

/// How a fill of `total` items is split across workers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkPlan {
    total: usize,
    sizes: Vec<usize>,
}

impl ChunkPlan {
    /// Plan a fill of `length` items over `threads` workers.
    ///
    /// The worker count is clamped to `length`, so no chunk is empty. A request for
    /// zero workers with a non-zero length is treated as a request for one.
    pub fn new(length: usize, threads: usize) -> Self {
        if length == 0 {
            return Self {
                total: 0,
                sizes: Vec::new(),
            };
        }

        let requested = threads;
        let threads = threads.clamp(1, length);
        if threads != requested {
            log::debug!("{requested} threads requested for {length} items, using {threads}");
        }
        let chunk = length / threads;
        let mut sizes = vec![chunk; threads];
        if let Some(last) = sizes.last_mut() {
            *last = length - chunk * (threads - 1);
        }

        Self {
            total: length,
            sizes,
        }
    }

    /// Effective number of workers.
    pub fn threads(&self) -> usize {
        self.sizes.len()
    }

    /// Chunk size per worker, in spawn order.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Total number of items across all chunks.
    pub fn total(&self) -> usize {
        self.total
    }
}

/// Fill `length` elements from `source` using up to `threads` worker threads.
///
/// Each worker is seeded from [`ClockSeed`].
///
/// # Errors
///
/// - [`FillError::EmptySource`] if `source` is empty.
/// - [`FillError::Spawn`] if the OS refuses a worker thread.
/// - [`FillError::WorkerPanicked`] / [`FillError::Poisoned`] if a worker fails.
pub fn fill_threaded<T>(source: &[T], length: usize, threads: usize) -> Result<Vec<T>, FillError>
where
    T: Clone + Send + Sync,
{
    fill_threaded_with_seeds(source, length, threads, &mut ClockSeed)
}

/// [`fill_threaded`] with a caller-supplied seed source.
///
/// Seeds are drawn on the calling thread, one per chunk in spawn order, so a
/// deterministic `seeds` gives each chunk a reproducible stream. The merged order
/// still depends on scheduling.
pub fn fill_threaded_with_seeds<T, S>(
    source: &[T],
    length: usize,
    threads: usize,
    seeds: &mut S,
) -> Result<Vec<T>, FillError>
where
    T: Clone + Send + Sync,
    S: SeedSource + ?Sized,
{
    run_plan(source, &ChunkPlan::new(length, threads), seeds, None)
}

/// Run one worker per chunk of `plan`, each on a thread with `stack_size` bytes of
/// stack (the platform default when `None`).
///
/// Spawning stops at the first refused thread; workers already running are joined
/// before the error is returned.
pub(crate) fn run_plan<T, S>(
    source: &[T],
    plan: &ChunkPlan,
    seeds: &mut S,
    stack_size: Option<usize>,
) -> Result<Vec<T>, FillError>
where
    T: Clone + Send + Sync,
    S: SeedSource + ?Sized,
{
    if source.is_empty() {
        return Err(FillError::EmptySource);
    }
    if plan.total() == 0 {
        return Ok(Vec::new());
    }

    log::debug!(
        "fill of {} items over {} threads, chunks {:?}",
        plan.total(),
        plan.threads(),
        plan.sizes()
    );

    let out = Mutex::new(Vec::with_capacity(plan.total()));

    let (spawn_err, joined) = thread::scope(|scope| {
        let mut handles = Vec::with_capacity(plan.threads());
        let mut spawn_err = None;

        for (worker, &len) in plan.sizes().iter().enumerate() {
            let seed = seeds.next_seed();
            let out = &out;

            let mut builder = thread::Builder::new().name(format!("vgen-fill-{worker}"));
            if let Some(bytes) = stack_size {
                builder = builder.stack_size(bytes);
            }

            let spawned = builder.spawn_scoped(scope, move || -> Result<(), FillError> {
                let mut rng = StdRng::seed_from_u64(seed);
                let local = fill_with_rng(source, len, &mut rng)?;

                out.lock().map_err(|_| FillError::Poisoned)?.extend(local);
                log::trace!("worker {worker} merged {len} items");
                Ok(())
            });

            match spawned {
                Ok(h) => {
                    log::trace!("spawned worker {worker} for {len} items");
                    handles.push(h);
                }
                Err(e) => {
                    log::debug!("worker {worker} failed to spawn: {e}");
                    spawn_err = Some(FillError::Spawn {
                        worker,
                        reason: e.to_string(),
                    });
                    break;
                }
            }
        }

        // Join every handle before looking at any result.
        let joined: Vec<Result<Result<(), FillError>, usize>> = handles
            .into_iter()
            .enumerate()
            .map(|(worker, h)| h.join().map_err(|_| worker))
            .collect();
        (spawn_err, joined)
    });

    if let Some(e) = spawn_err {
        return Err(e);
    }
    for r in joined {
        match r {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(e),
            Err(worker) => return Err(FillError::WorkerPanicked { worker }),
        }
    }

    let mut out = out.into_inner().map_err(|_| FillError::Poisoned)?;
    out.shrink_to_fit();
    debug_assert_eq!(out.len(), plan.total());
    Ok(out)
}
