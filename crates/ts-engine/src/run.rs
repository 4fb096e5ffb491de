//! Fixed-tick driver loop.

use crate::assembly::EngineAssembly;
use crate::atmosphere::Atmosphere;
use crate::error::{EngineError, EngineResult};
use crate::inputs::TickInputs;
use crate::phase::SimPhase;
use crate::snapshot::EngineSnapshot;
use serde::Serialize;
use tracing::info;

/// Options for [`run_ticks`].
#[derive(Clone, Debug, PartialEq)]
pub struct RunOptions {
    /// Number of ticks to run
    pub ticks: u64,
    /// Tick period (seconds), used only to time-stamp records
    pub dt: f64,
    /// Record every N-th tick (decimation)
    pub record_every: u64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            ticks: 100,
            dt: 0.02,
            record_every: 1,
        }
    }
}

/// Recorded ticks of a run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RunRecord {
    /// Time of each record (seconds)
    pub t: Vec<f64>,
    pub snapshots: Vec<EngineSnapshot>,
}

impl RunRecord {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn last(&self) -> Option<&EngineSnapshot> {
        self.snapshots.last()
    }
}

/// Initialise `engine` and run it for `opts.ticks` ticks.
///
/// `schedule(tick, t)` supplies the inputs for each tick, starting at tick 1.
/// The phase is walked `Idle -> Init -> Running -> Stopped`. The last tick
/// is always recorded.
///
/// # Errors
/// Returns error for invalid options or the first failing tick.
pub fn run_ticks<F>(
    engine: &mut EngineAssembly,
    atmosphere: &dyn Atmosphere,
    mut schedule: F,
    opts: &RunOptions,
) -> EngineResult<RunRecord>
where
    F: FnMut(u64, f64) -> TickInputs,
{
    if !(opts.dt > 0.0 && opts.dt.is_finite()) {
        return Err(EngineError::InvalidArg {
            what: "dt must be positive",
        });
    }
    if opts.record_every == 0 {
        return Err(EngineError::InvalidArg {
            what: "record_every must be positive",
        });
    }

    let mut phase = SimPhase::Idle.transition(SimPhase::Init)?;
    engine.initialize(phase)?;
    phase = phase.transition(SimPhase::Running)?;
    info!(ticks = opts.ticks, dt = opts.dt, "run started");

    let mut record = RunRecord::default();
    for tick in 1..=opts.ticks {
        let t = tick as f64 * opts.dt;
        let inputs = schedule(tick, t);
        let snapshot = engine.update(phase, atmosphere, &inputs)?;
        if tick % opts.record_every == 0 || tick == opts.ticks {
            record.t.push(t);
            record.snapshots.push(snapshot.clone());
        }
    }

    phase.transition(SimPhase::Stopped)?;
    info!(records = record.len(), "run finished");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atmosphere::StandardAtmosphere;

    #[test]
    fn run_options_defaults() {
        let opts = RunOptions::default();
        assert_eq!(opts.ticks, 100);
        assert_eq!(opts.dt, 0.02);
        assert_eq!(opts.record_every, 1);
    }

    #[test]
    fn run_options_invalid() {
        let mut engine = EngineAssembly::reference();
        let atm = StandardAtmosphere::new();
        let opts = RunOptions {
            dt: 0.0,
            ..RunOptions::default()
        };
        assert!(run_ticks(&mut engine, &atm, |_, _| TickInputs::default(), &opts).is_err());
        let opts = RunOptions {
            record_every: 0,
            ..RunOptions::default()
        };
        assert!(run_ticks(&mut engine, &atm, |_, _| TickInputs::default(), &opts).is_err());
    }

    #[test]
    fn zero_ticks_records_nothing() {
        let mut engine = EngineAssembly::reference();
        let atm = StandardAtmosphere::new();
        let opts = RunOptions {
            ticks: 0,
            ..RunOptions::default()
        };
        let record = run_ticks(&mut engine, &atm, |_, _| TickInputs::default(), &opts).unwrap();
        assert!(record.is_empty());
        assert!(engine.is_initialized());
    }
}
