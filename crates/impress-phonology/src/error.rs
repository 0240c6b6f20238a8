//! Error types for feature table loading and text parsing.

use thiserror::Error;

/// Errors raised while loading a feature table or parsing user notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhonologyError {
    #[error("Unknown feature: {0}")]
    UnknownFeature(String),

    #[error("Unknown feature value: {0}")]
    UnknownValue(String),

    #[error("Feature table header is malformed: {0}")]
    MalformedHeader(String),

    #[error("Row {line} ({segment}): expected {expected} values, got {actual}")]
    ColumnCount {
        line: usize,
        segment: String,
        expected: usize,
        actual: usize,
    },

    #[error("Row {line}: invalid value {value:?} for {segment}")]
    InvalidCell {
        line: usize,
        segment: String,
        value: String,
    },

    #[error("Duplicate segment: {0}")]
    DuplicateSegment(String),

    #[error("Invalid constraint: {0}")]
    InvalidConstraint(String),
}

/// Result type for phonology operations
pub type Result<T> = std::result::Result<T, PhonologyError>;
