//! Error types for the timeline engine.
//!
//! Bad *data* (malformed dates, unknown references, out-of-range numbers)
//! never produces an error here; those records degrade to well-defined
//! defaults so one broken project can't take down the whole view. The
//! variants below cover caller bugs only.

use thiserror::Error;

/// A specialized Result type for timeline engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors signalling invalid arguments from the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A granularity literal other than `quarters`, `months`, or `weeks`.
    #[error("unknown granularity: {value} (expected quarters, months, or weeks)")]
    UnknownGranularity {
        /// The unsupported literal.
        value: String,
    },

    /// A date-range bound that does not parse as a date.
    #[error("invalid date bound: {value}")]
    InvalidDateBound {
        /// The malformed bound.
        value: String,
    },
}

impl Error {
    /// Creates an unknown granularity error.
    pub fn unknown_granularity(value: impl Into<String>) -> Self {
        Error::UnknownGranularity {
            value: value.into(),
        }
    }

    /// Creates an invalid date bound error.
    pub fn invalid_date_bound(value: impl Into<String>) -> Self {
        Error::InvalidDateBound {
            value: value.into(),
        }
    }
}
