//! Error types for the sortviz core.
//!
//! All operations return structured errors rather than panicking.
//! The only meaningful failures here are input-validation failures;
//! the system has no I/O, so no transient errors exist.

use thiserror::Error;

/// Top-level error type for all core operations.
///
/// Each variant corresponds to a specific failure domain:
/// - Input: token parsing and value validation
/// - Speed: playback speed outside the recognized set
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input validation failed (bad token, out-of-range or negative value)
    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// Playback speed is not one of the recognized multipliers
    #[error("invalid speed {value}: expected 0.5-3.0 in steps of 0.5")]
    InvalidSpeed { value: String },
}

/// Input validation errors.
///
/// Lenient parsing paths filter `NonNumeric` and `OutOfRange` silently;
/// the variants exist so strict callers and tests can observe them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Token did not parse as an integer
    #[error("non-numeric token: {token:?}")]
    NonNumeric { token: String },

    /// Value magnitude exceeds the supported range
    #[error("value {value} outside supported range (|v| <= {limit})")]
    OutOfRange { value: i64, limit: i64 },

    /// Negative value supplied to an algorithm that requires non-negative keys
    #[error("negative value {value}: counting and radix sort require non-negative input")]
    NegativeValue { value: i64 },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
