//! Shared fixtures for stage unit tests.

use ts_core::units::{k, kgps, mps, pa};
use ts_maps::{CompressorMap, GasPathConstants, PerformanceMapStore, TurbineMap};

use crate::station::{FaceState, Station};

/// Reference store with the compressor map replaced by flat columns.
pub(crate) fn store_with_flat_compressor(
    pressure_ratio: f64,
    efficiency: f64,
    corrected_mass_flow: f64,
) -> PerformanceMapStore {
    let compressor = CompressorMap::new(
        vec![10_000.0, 50_000.0],
        vec![pressure_ratio; 2],
        vec![efficiency; 2],
        vec![corrected_mass_flow; 2],
    )
    .unwrap();
    let reference = PerformanceMapStore::reference();
    PerformanceMapStore::new(
        compressor,
        reference.turbine().clone(),
        GasPathConstants::reference(),
    )
    .unwrap()
}

/// Reference store with the turbine map replaced by a flat expansion ratio.
pub(crate) fn store_with_flat_turbine(expansion_ratio: f64) -> PerformanceMapStore {
    let turbine = TurbineMap::new(vec![1_000.0, 60_000.0], vec![expansion_ratio; 2]).unwrap();
    let reference = PerformanceMapStore::reference();
    PerformanceMapStore::new(
        reference.compressor().clone(),
        turbine,
        GasPathConstants::reference(),
    )
    .unwrap()
}

/// Sea-level static face state.
pub(crate) fn sea_level_face() -> FaceState {
    FaceState {
        total_temperature: k(288.15),
        total_pressure: pa(97_272.0),
        velocity: mps(0.0),
    }
}

/// A compressor-exit-like station.
pub(crate) fn compressor_exit() -> Station {
    Station {
        total_temperature: k(386.5),
        total_pressure: pa(214_000.0),
        velocity: mps(60.0),
        mass_flow: kgps(0.72),
    }
}

/// A combustor-exit-like station.
pub(crate) fn combustor_exit() -> Station {
    Station {
        total_temperature: k(1100.0),
        total_pressure: pa(205_000.0),
        velocity: mps(140.0),
        mass_flow: kgps(0.735),
    }
}
