//! Turboshaft engine assembly and tick driver.
//!
//! Provides:
//! - [`EngineAssembly`]: the five gas-path stages wired in order, one pass per tick
//! - [`Atmosphere`] and the two-layer [`StandardAtmosphere`]
//! - [`SimPhase`]: the phase gate for `initialize` and `update`
//! - [`EngineSnapshot`]: serialisable per-tick station table
//! - [`run_ticks`]: fixed-tick loop with record decimation

pub mod assembly;
pub mod atmosphere;
pub mod error;
pub mod inputs;
pub mod phase;
pub mod run;
pub mod snapshot;

pub use assembly::{EngineAssembly, EngineOptions};
pub use atmosphere::{AmbientConditions, Atmosphere, StandardAtmosphere};
pub use error::{EngineError, EngineResult};
pub use inputs::TickInputs;
pub use phase::SimPhase;
pub use run::{RunOptions, RunRecord, run_ticks};
pub use snapshot::{EngineSnapshot, StationSnapshot};
