//! Errors returned by the fill routines.

use thiserror::Error;

/// Errors for single- and multi-threaded fills.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FillError {
    /// The source slice has no elements to draw from.
    #[error("source must be non-empty")]
    EmptySource,
    /// The OS refused to start a worker thread.
    #[error("failed to spawn worker {worker}: {reason}")]
    Spawn { worker: usize, reason: String },
    /// A worker thread panicked before merging its chunk.
    #[error("worker {worker} panicked")]
    WorkerPanicked { worker: usize },
    /// The merge lock was poisoned by a panicking worker.
    #[error("output lock poisoned")]
    Poisoned,
}
