//! Seed sources.
//!
//! Every fill builds its own PRNG from a `u64` seed. Where that seed comes from is
//! pluggable through [`SeedSource`]:
//!
//! - [`ClockSeed`]: wall-clock nanoseconds mixed with a process-wide call counter.
//!   Two calls landing in the same clock tick still get different seeds.
//! - [`FixedSeed`]: `base, base + 1, ...`, for tests and benchmarks. Adjacent seeds
//!   are fine here: `SeedableRng::seed_from_u64` already spreads them.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// A provider of PRNG seeds.
pub trait SeedSource {
    /// Produce the next seed.
    fn next_seed(&mut self) -> u64;
}

impl<S: SeedSource + ?Sized> SeedSource for &mut S {
    fn next_seed(&mut self) -> u64 {
        (**self).next_seed()
    }
}

/// SplitMix64 finalizer (Steele, Lea, Flood 2014); folds clock nanos and the call
/// counter into one seed.
#[inline]
fn mix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

static CLOCK_CALLS: AtomicU64 = AtomicU64::new(0);

/// Seeds from the high-resolution wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClockSeed;

impl SeedSource for ClockSeed {
    fn next_seed(&mut self) -> u64 {
        let call = CLOCK_CALLS.fetch_add(1, Ordering::Relaxed);
        // A clock set before the epoch still leaves the counter to separate calls.
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        mix64(nanos ^ mix64(call))
    }
}

/// A deterministic seed sequence: the i-th seed is `base + i` (wrapping).
#[derive(Debug, Clone)]
pub struct FixedSeed {
    base: u64,
    drawn: u64,
}

impl FixedSeed {
    /// Start a sequence at `base`.
    pub fn new(base: u64) -> Self {
        Self { base, drawn: 0 }
    }

    /// Number of seeds handed out so far.
    pub fn drawn(&self) -> u64 {
        self.drawn
    }
}

impl SeedSource for FixedSeed {
    fn next_seed(&mut self) -> u64 {
        let seed = self.base.wrapping_add(self.drawn);
        self.drawn += 1;
        seed
    }
}
