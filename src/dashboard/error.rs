//! Dashboard error types

use thiserror::Error;

use super::metrics::GroupKind;

/// Unknown tab identifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown tab: {0}")]
pub struct TabParseError(pub String);

/// Unknown metric group identifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown metric group: {0}")]
pub struct GroupParseError(pub String);

/// Errors raised by a metrics source
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    /// Provider could not be reached
    #[error("Metrics source unavailable: {0}")]
    Unavailable(String),

    /// Provider answered with a non-success status
    #[error("Metrics source returned HTTP {status} for {group}")]
    Status { group: GroupKind, status: u16 },

    /// Payload did not describe the requested group
    #[error("Invalid payload for {group}: {reason}")]
    Decode { group: GroupKind, reason: String },
}

/// Errors raised while building a chart configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// No category labels were supplied
    #[error("Chart has no labels")]
    NoLabels,

    /// A series length differs from the label count
    #[error("Series '{series}' has {actual} values, expected {expected}")]
    LengthMismatch {
        series: String,
        expected: usize,
        actual: usize,
    },
}
