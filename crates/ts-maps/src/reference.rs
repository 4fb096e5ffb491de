//! Built-in reference dataset for a small free-turbine turboshaft.
//!
//! Used by tests, by the CLI when no config file is given and as the
//! template written by `reference-config`. No throttle-to-fuel schedule is
//! included: fuel flow is always supplied explicitly unless a config adds one.

use std::f64::consts::PI;

use crate::compressor::CompressorMap;
use crate::error::MapResult;
use crate::store::{GasPathConstants, PerformanceMapStore};
use crate::turbine::TurbineMap;
use ts_core::units::m2;

/// Compressor outer casing radius (m).
const COMPRESSOR_TIP_RADIUS_M: f64 = 0.327;
/// Compressor hub radius at the inlet face (m).
const COMPRESSOR_HUB_RADIUS_M: f64 = 0.285;

pub const COMPRESSOR_SPEED_RPM: [f64; 8] = [
    24_000.0, 27_000.0, 30_000.0, 33_000.0, 36_000.0, 39_000.0, 42_000.0, 45_000.0,
];
pub const COMPRESSOR_PRESSURE_RATIO: [f64; 8] = [2.2, 2.6, 3.1, 3.7, 4.3, 5.0, 5.6, 6.1];
pub const COMPRESSOR_EFFICIENCY: [f64; 8] = [0.74, 0.76, 0.78, 0.80, 0.81, 0.82, 0.82, 0.81];
pub const COMPRESSOR_MASS_FLOW_KGPS: [f64; 8] = [0.75, 0.95, 1.15, 1.35, 1.55, 1.75, 1.95, 2.15];

pub const TURBINE_SPEED_RPM: [f64; 10] = [
    10_000.0, 12_000.0, 14_000.0, 16_000.0, 18_000.0, 20_000.0, 22_000.0, 24_000.0, 26_000.0,
    28_000.0,
];
pub const TURBINE_EXPANSION_RATIO: [f64; 10] =
    [1.60, 1.72, 1.85, 1.98, 2.10, 2.22, 2.33, 2.43, 2.52, 2.60];

impl GasPathConstants {
    /// Constants of the reference engine.
    pub fn reference() -> Self {
        let inlet_annulus = PI
            * (COMPRESSOR_TIP_RADIUS_M * COMPRESSOR_TIP_RADIUS_M
                - COMPRESSOR_HUB_RADIUS_M * COMPRESSOR_HUB_RADIUS_M);
        Self {
            combustion_efficiency: 0.96,
            fuel_heating_value: 41_868_000.0,
            cp_gas: 1172.30,
            compressor_inlet_area: m2(inlet_annulus),
            compressor_outlet_area: m2(0.006),
            turbine_exit_area: m2(0.03),
        }
    }
}

impl PerformanceMapStore {
    /// The built-in reference engine.
    pub fn reference() -> Self {
        reference_checked().expect("reference tables satisfy the map invariants")
    }
}

/// Build the reference store through the validating constructors.
pub fn reference_checked() -> MapResult<PerformanceMapStore> {
    let compressor = CompressorMap::new(
        COMPRESSOR_SPEED_RPM.to_vec(),
        COMPRESSOR_PRESSURE_RATIO.to_vec(),
        COMPRESSOR_EFFICIENCY.to_vec(),
        COMPRESSOR_MASS_FLOW_KGPS.to_vec(),
    )?;
    let turbine = TurbineMap::new(TURBINE_SPEED_RPM.to_vec(), TURBINE_EXPANSION_RATIO.to_vec())?;
    PerformanceMapStore::new(compressor, turbine, GasPathConstants::reference())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_dataset_is_valid() {
        let store = reference_checked().unwrap();
        assert_eq!(store.compressor().len(), 8);
        assert_eq!(store.turbine().len(), 10);
        assert!(store.fuel_schedule().is_none());
    }

    #[test]
    fn reference_inlet_area_matches_annulus() {
        let area = GasPathConstants::reference().compressor_inlet_area.value;
        assert!((area - 0.080_752).abs() < 1e-5);
    }

    #[test]
    fn reference_first_point() {
        let store = PerformanceMapStore::reference();
        let p = store.compressor().lookup(COMPRESSOR_SPEED_RPM[0]);
        assert_eq!(p.pressure_ratio, COMPRESSOR_PRESSURE_RATIO[0]);
    }
}
