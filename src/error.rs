//! Error types shared by both symbol table implementations.

use thiserror::Error;

/// Why an `insert` left the table unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertError {
    #[error("key is already bound")]
    DuplicateKey,
    #[error("could not allocate the owned copy of the key")]
    OutOfMemory,
}

/// The initial bucket array could not be allocated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("could not allocate {buckets} buckets")]
pub struct AllocError {
    pub buckets: usize,
}

/// Rejected capacity schedule.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("capacity schedule has no steps")]
    Empty,
    #[error("capacity schedule step {step} has zero buckets")]
    ZeroBuckets { step: usize },
    #[error("capacity schedule step {step} ({got}) is not larger than the previous step ({prev})")]
    NotAscending { step: usize, prev: usize, got: usize },
}
