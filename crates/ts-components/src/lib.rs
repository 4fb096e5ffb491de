//! ts-components: gas-path stages of a free-turbine turboshaft.
//!
//! Stages, in gas-path order:
//! - [`Intake`]: freestream → compressor-face stagnation state
//! - [`Compressor`]: map-driven pressure ratio, efficiency and mass flow
//! - [`CombustionChamber`]: pressure loss, energy balance, lagged exit temperature
//! - [`Turbine`]: map-driven expansion of the gas-generator turbine
//! - [`FreeTurbine`]: expansion to exhaust pressure, delivered shaft power
//!
//! Each stage owns its station variables exclusively and borrows the shared
//! [`ts_maps::PerformanceMapStore`] for the duration of an update. Updates
//! validate their inputs and outputs and leave the stage untouched on error.
//!
//! # Example
//!
//! ```
//! use ts_components::{Compressor, Intake};
//! use ts_core::units::{k, pa, rpm};
//! use ts_maps::PerformanceMapStore;
//!
//! let maps = PerformanceMapStore::reference();
//! let mut intake = Intake::new();
//! let mut compressor = Compressor::new();
//!
//! let face = intake.update(k(288.15), pa(101_325.0), 0.0).unwrap();
//! let exit = compressor.update(&maps, &face, rpm(36_000.0)).unwrap();
//! assert!(exit.total_pressure.value > face.total_pressure.value);
//! ```

pub mod combustor;
pub mod common;
pub mod compressor;
pub mod error;
pub mod free_turbine;
pub mod intake;
pub mod station;
pub mod turbine;

#[cfg(test)]
pub(crate) mod test_utils;

pub use combustor::CombustionChamber;
pub use compressor::Compressor;
pub use error::{ComponentError, ComponentResult};
pub use free_turbine::FreeTurbine;
pub use intake::Intake;
pub use station::{FaceState, Station};
pub use turbine::{Turbine, TurbinePressureMethod};
