//! Error types for performance-map construction.

use thiserror::Error;

/// Errors raised while building a performance table.
///
/// Lookups never fail; every variant here describes malformed table data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapError {
    #[error("Table {table} needs at least 2 points, got {len}")]
    TooShort { table: &'static str, len: usize },

    #[error("Table {table} length mismatch: axis has {expected} points, values have {actual}")]
    LengthMismatch {
        table: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Axis of {table} is not strictly increasing at index {index}")]
    NotIncreasing { table: &'static str, index: usize },

    #[error("Non-finite entry in {table} at index {index}")]
    NonFinite { table: &'static str, index: usize },

    #[error("Out-of-range entry in {table} at index {index}: {what}")]
    OutOfRange {
        table: &'static str,
        index: usize,
        what: &'static str,
    },

    #[error("Invalid constant: {what}")]
    InvalidConstant { what: &'static str },
}

pub type MapResult<T> = Result<T, MapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MapError::NotIncreasing {
            table: "compressor speed",
            index: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("compressor speed"));
        assert!(msg.contains('3'));
    }
}
