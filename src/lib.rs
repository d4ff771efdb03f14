//! `vgen`: fill vectors with uniform draws from a small source slice.
//!
//! Sampling is with replacement: every output element is an independent, uniformly
//! chosen element of the source. The threaded variant splits the output into one
//! chunk per worker and merges the chunks under a single lock.
//!
//! Exposed modules:
//! - `sampler`: single-threaded fill (`fill`, `fill_with_seed`, `fill_with_rng`).
//! - `dispatch`: multi-threaded fill and its `ChunkPlan`.
//! - `filler`: the `Filler` builder (thread count + seed).
//! - `seed`: pluggable seed sources (`ClockSeed`, `FixedSeed`).
//! - `display`: `{v1,v2,...}` rendering.

#![forbid(unsafe_code)]

pub mod dispatch;
pub mod display;
pub mod error;
pub mod filler;
pub mod sampler;
pub mod seed;

pub use dispatch::{fill_threaded, fill_threaded_with_seeds, ChunkPlan};
pub use display::Braced;
pub use error::FillError;
pub use filler::Filler;
pub use sampler::{fill, fill_with_rng, fill_with_seed};
pub use seed::{ClockSeed, FixedSeed, SeedSource};
