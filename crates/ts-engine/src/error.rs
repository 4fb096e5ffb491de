//! Error types for engine assembly and tick execution.

use crate::phase::SimPhase;
use thiserror::Error;
use ts_components::ComponentError;

/// Errors reported to the driver by the engine.
///
/// A failed tick never alters the engine; the driver decides whether to hold
/// the last snapshot or stop.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("{operation} is not allowed in phase {actual}, expected {expected}")]
    WrongPhase {
        operation: &'static str,
        expected: SimPhase,
        actual: SimPhase,
    },

    #[error("Phase transition {from} -> {to} is not allowed")]
    InvalidTransition { from: SimPhase, to: SimPhase },

    #[error("Engine update called before initialize")]
    NotInitialized,

    #[error("Stage {stage} failed: {source}")]
    Stage {
        stage: &'static str,
        #[source]
        source: ComponentError,
    },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Attach the failing stage name to a component error.
pub(crate) fn in_stage(stage: &'static str) -> impl FnOnce(ComponentError) -> EngineError {
    move |source| EngineError::Stage { stage, source }
}
