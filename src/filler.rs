//! Builder-style entry point.

use crate::dispatch::{run_plan, ChunkPlan};
use crate::error::FillError;
use crate::sampler::fill_with_seed;
use crate::seed::{ClockSeed, FixedSeed, SeedSource};

/// Configured fill: worker count, seeding, and worker stack size.
#[derive(Debug, Clone)]
pub struct Filler {
    threads: usize,
    seed: Option<u64>,
    stack_size: Option<usize>,
}

impl Default for Filler {
    fn default() -> Self {
        Self::new()
    }
}

impl Filler {
    /// Single-threaded, clock-seeded.
    pub fn new() -> Self {
        Self {
            threads: 1,
            seed: None,
            stack_size: None,
        }
    }

    /// Set the number of worker threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the stack size, in bytes, of each worker thread.
    ///
    /// Only threaded fills use it; the platform default applies otherwise.
    pub fn with_stack_size(mut self, bytes: usize) -> Self {
        self.stack_size = Some(bytes);
        self
    }

    /// The chunk plan [`Filler::fill`] would use for `length` items.
    pub fn plan(&self, length: usize) -> ChunkPlan {
        ChunkPlan::new(length, self.threads)
    }

    /// Fill `length` elements drawn uniformly from `source`.
    ///
    /// Runs on the calling thread when the plan has at most one chunk. With a seed set,
    /// a single-threaded fill is fully reproducible; a threaded fill reproduces the
    /// same elements but not necessarily in the same order.
    pub fn fill<T>(&self, source: &[T], length: usize) -> Result<Vec<T>, FillError>
    where
        T: Clone + Send + Sync,
    {
        let mut seeds: Box<dyn SeedSource> = match self.seed {
            Some(s) => Box::new(FixedSeed::new(s)),
            None => Box::new(ClockSeed),
        };

        let plan = self.plan(length);
        if plan.threads() <= 1 {
            return fill_with_seed(source, length, seeds.next_seed());
        }
        run_plan(source, &plan, &mut *seeds, self.stack_size)
    }
}
