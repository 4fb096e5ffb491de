//! Core numeric errors shared by every gas-path crate.

use thiserror::Error;

pub type TsResult<T> = Result<T, TsError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TsError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// A finite value outside a closed physical range, e.g. an efficiency above 1.
    #[error("{what} out of range: {value} not in [{min}, {max}]")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
