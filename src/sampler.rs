//! Uniform fill with replacement.
//!
//! Each output slot is an independent draw of an index from `0..source.len()`.
//! The index range is half-open: every draw lands on a valid element and all
//! elements are equally likely.
//!
//! Notes:
//! - `fill` seeds a fresh `StdRng` from [`ClockSeed`], so repeated calls (even from
//!   several threads at once) produce different outputs.
//! - `fill_with_rng` / `fill_with_seed` exist for deterministic testing/benchmarking.

use rand::prelude::*;

use crate::error::FillError;
use crate::seed::{ClockSeed, SeedSource};

/// Fill a vector of `length` elements drawn uniformly (with replacement) from `source`.
///
/// `length == 0` yields an empty vector.
///
/// # Errors
///
/// Returns [`FillError::EmptySource`] if `source` is empty.
pub fn fill<T: Clone>(source: &[T], length: usize) -> Result<Vec<T>, FillError> {
    fill_with_seed(source, length, ClockSeed.next_seed())
}

/// [`fill`] with a fixed seed.
pub fn fill_with_seed<T: Clone>(
    source: &[T],
    length: usize,
    seed: u64,
) -> Result<Vec<T>, FillError> {
    let mut rng = StdRng::seed_from_u64(seed);
    fill_with_rng(source, length, &mut rng)
}

/// [`fill`] with a caller-supplied RNG.
pub fn fill_with_rng<T: Clone, R: Rng + ?Sized>(
    source: &[T],
    length: usize,
    rng: &mut R,
) -> Result<Vec<T>, FillError> {
    if source.is_empty() {
        return Err(FillError::EmptySource);
    }

    let mut out = Vec::with_capacity(length);
    for _ in 0..length {
        let idx = rng.random_range(0..source.len());
        out.push(source[idx].clone());
    }
    Ok(out)
}
