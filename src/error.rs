//! Error types for the simulator's input and configuration layers.
//!
//! Engine invariant violations are not represented here; they panic.

use thiserror::Error;

/// Result type alias for simulator operations.
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors raised before a simulation starts.
#[derive(Error, Debug)]
pub enum SimError {
    /// Input ended before the job count.
    #[error("missing job count")]
    MissingCount,

    /// Job count is not a positive integer.
    #[error("invalid job count `{0}`")]
    InvalidCount(String),

    /// Input ended before the policy token.
    #[error("missing scheduling policy")]
    MissingPolicy,

    /// Policy token is not one of FIFO, SJF, STCF, RR.
    #[error("unknown scheduling policy `{0}`")]
    UnknownPolicy(String),

    /// Fewer job records than the header announced.
    #[error("expected {expected} jobs, found {found}")]
    TooFewJobs { expected: usize, found: usize },

    /// A job record lacks one of its fields.
    #[error("job {index}: missing {field}")]
    MissingField { index: usize, field: &'static str },

    /// A numeric job field failed to parse.
    #[error("job {index}: invalid {field} `{value}`")]
    InvalidField {
        index: usize,
        field: &'static str,
        value: String,
    },

    /// Extra fields after the arrival time.
    #[error("job {index}: unexpected trailing data `{rest}`")]
    TrailingData { index: usize, rest: String },

    /// A job that needs no CPU time.
    #[error("job {index}: duration must be at least one tick")]
    ZeroDuration { index: usize },

    /// Arrival so late the clock can never pass it.
    #[error("job {index}: arrival time {arrival} is past the last schedulable tick")]
    ArrivalTooLate { index: usize, arrival: u64 },

    /// Nothing to schedule.
    #[error("no jobs to schedule")]
    NoJobs,

    /// Bad environment override.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
