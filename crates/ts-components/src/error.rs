//! Error types for stage updates.

use thiserror::Error;
use ts_core::error::TsError;

/// Errors that can occur during a stage update.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type ComponentResult<T> = Result<T, ComponentError>;

impl From<TsError> for ComponentError {
    fn from(e: TsError) -> Self {
        match e {
            TsError::NonFinite { what, .. } => ComponentError::NonPhysical { what },
            TsError::InvalidArg { what } | TsError::OutOfRange { what, .. } => {
                ComponentError::InvalidArg { what }
            }
            TsError::Invariant { what } => ComponentError::NonPhysical { what },
        }
    }
}

impl From<ComponentError> for TsError {
    fn from(e: ComponentError) -> Self {
        match e {
            ComponentError::NonPhysical { what } => TsError::Invariant { what },
            ComponentError::InvalidArg { what } => TsError::InvalidArg { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ComponentError::NonPhysical { what: "density" };
        assert!(err.to_string().contains("density"));
    }

    #[test]
    fn error_conversion() {
        let comp_err = ComponentError::InvalidArg { what: "test" };
        let ts_err: TsError = comp_err.into();
        assert!(matches!(ts_err, TsError::InvalidArg { .. }));

        let back: ComponentError = TsError::NonFinite {
            what: "temperature",
            value: f64::NAN,
        }
        .into();
        assert_eq!(
            back,
            ComponentError::NonPhysical {
                what: "temperature"
            }
        );
    }
}
