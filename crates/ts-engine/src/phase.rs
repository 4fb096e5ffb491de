//! Simulation phase driven by the external scheduler.

use crate::error::{EngineError, EngineResult};
use std::fmt;

/// Phase of the surrounding simulation.
///
/// ```text
/// Idle -> Init -> Running <-> Paused
///   any -> Stopped -> Idle
/// ```
///
/// The engine may only be initialised in [`SimPhase::Init`] and updated in
/// [`SimPhase::Running`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SimPhase {
    #[default]
    Idle,
    Init,
    Running,
    Paused,
    Stopped,
}

impl SimPhase {
    pub fn can_transition_to(self, next: SimPhase) -> bool {
        use SimPhase::*;
        matches!(
            (self, next),
            (Idle, Init) | (Init, Running) | (Running, Paused) | (Paused, Running) | (Stopped, Idle)
        ) || (next == Stopped && self != Stopped)
    }

    /// Move to `next` if the transition is allowed.
    pub fn transition(self, next: SimPhase) -> EngineResult<SimPhase> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(EngineError::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SimPhase::Idle => "idle",
            SimPhase::Init => "init",
            SimPhase::Running => "running",
            SimPhase::Paused => "paused",
            SimPhase::Stopped => "stopped",
        }
    }
}

impl fmt::Display for SimPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nominal_lifecycle() {
        let phase = SimPhase::default()
            .transition(SimPhase::Init)
            .and_then(|p| p.transition(SimPhase::Running))
            .and_then(|p| p.transition(SimPhase::Paused))
            .and_then(|p| p.transition(SimPhase::Running))
            .and_then(|p| p.transition(SimPhase::Stopped))
            .and_then(|p| p.transition(SimPhase::Idle))
            .unwrap();
        assert_eq!(phase, SimPhase::Idle);
    }

    #[test]
    fn any_phase_can_stop() {
        for phase in [
            SimPhase::Idle,
            SimPhase::Init,
            SimPhase::Running,
            SimPhase::Paused,
        ] {
            assert!(phase.can_transition_to(SimPhase::Stopped));
        }
        assert!(!SimPhase::Stopped.can_transition_to(SimPhase::Stopped));
    }

    #[test]
    fn rejects_skipping_init() {
        assert!(!SimPhase::Idle.can_transition_to(SimPhase::Running));
        assert!(!SimPhase::Paused.can_transition_to(SimPhase::Init));
        assert!(!SimPhase::Stopped.can_transition_to(SimPhase::Running));
        assert_eq!(
            SimPhase::Idle.transition(SimPhase::Running),
            Err(EngineError::InvalidTransition {
                from: SimPhase::Idle,
                to: SimPhase::Running,
            })
        );
    }
}
