//! ts-maps: component performance maps for the turboshaft gas path.
//!
//! Provides:
//! - `interpolate`: clamped, piecewise-linear lookup in a monotonic table
//! - `MapAxis`: a validated, fixed-length, strictly increasing key table
//! - `CompressorMap`, `TurbineMap`, `FuelSchedule`: the per-component tables
//! - `PerformanceMapStore`: all tables plus the gas-path constants, shared
//!   read-only by the stages of one engine
//!
//! Out-of-range queries are never errors: every lookup clamps to the nearest
//! table endpoint. Malformed tables are rejected once, at construction.

pub mod axis;
pub mod compressor;
pub mod error;
pub mod fuel;
pub mod interpolate;
pub mod reference;
pub mod store;
pub mod turbine;

pub use axis::MapAxis;
pub use compressor::{CompressorMap, CompressorPoint};
pub use error::{MapError, MapResult};
pub use fuel::FuelSchedule;
pub use interpolate::interpolate;
pub use store::{GasPathConstants, PerformanceMapStore};
pub use turbine::TurbineMap;
