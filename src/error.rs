use thiserror::Error;

/// Crate specific Errors implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// Scalar value outside of its documented inclusive bounds.
    #[error("value out of range: {0}")]
    OutOfRange(String),
    /// Token or pattern doesn't match the expected syntax.
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    /// Required argument is degenerate or unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Clock was queried before its required configuration was established.
    #[error("clock is not configured: {0}")]
    UnconfiguredClock(String),
    /// Wall-clock text failed to parse under the supplied pattern.
    #[error("unable to parse time string: {0}")]
    TimeParse(#[from] chrono::ParseError),
    /// Wall-clock fields which don't exist in the requested timezone (DST gap).
    #[error("nonexistent local time: {0}")]
    NonexistentLocalTime(String),
}
