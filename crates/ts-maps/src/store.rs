//! Shared performance data for one engine.

use crate::compressor::CompressorMap;
use crate::error::{MapError, MapResult};
use crate::fuel::FuelSchedule;
use crate::turbine::TurbineMap;
use ts_core::units::Area;

/// Scalar constants of the hot gas path.
#[derive(Clone, Debug, PartialEq)]
pub struct GasPathConstants {
    /// Combustion efficiency (0 < eta <= 1)
    pub combustion_efficiency: f64,
    /// Lower heating value of the fuel (J/kg)
    pub fuel_heating_value: f64,
    /// Specific heat at constant pressure of the hot gas (J/kg/K)
    pub cp_gas: f64,
    /// Reference flow area at the compressor inlet
    pub compressor_inlet_area: Area,
    /// Reference flow area at the compressor outlet
    pub compressor_outlet_area: Area,
    /// Reference flow area at the gas-generator turbine exit
    pub turbine_exit_area: Area,
}

impl GasPathConstants {
    /// # Errors
    /// Returns [`MapError::InvalidConstant`] for non-finite or out-of-range values.
    pub fn validate(&self) -> MapResult<()> {
        let eta = self.combustion_efficiency;
        if !(eta.is_finite() && eta > 0.0 && eta <= 1.0) {
            return Err(MapError::InvalidConstant {
                what: "combustion efficiency must be in (0,1]",
            });
        }
        let positive: [(f64, &'static str); 5] = [
            (self.fuel_heating_value, "fuel heating value must be positive"),
            (self.cp_gas, "specific heat must be positive"),
            (
                self.compressor_inlet_area.value,
                "compressor inlet area must be positive",
            ),
            (
                self.compressor_outlet_area.value,
                "compressor outlet area must be positive",
            ),
            (
                self.turbine_exit_area.value,
                "turbine exit area must be positive",
            ),
        ];
        for (value, what) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(MapError::InvalidConstant { what });
            }
        }
        Ok(())
    }
}

/// All component tables plus the gas-path constants.
///
/// Owned by the engine assembly and lent to the stages by shared reference.
/// There is no mutating API: the store is read-only once built.
#[derive(Clone, Debug, PartialEq)]
pub struct PerformanceMapStore {
    compressor: CompressorMap,
    turbine: TurbineMap,
    fuel_schedule: Option<FuelSchedule>,
    constants: GasPathConstants,
}

impl PerformanceMapStore {
    /// # Errors
    /// Returns an error if the constants are invalid. The tables are already
    /// validated by their own constructors.
    pub fn new(
        compressor: CompressorMap,
        turbine: TurbineMap,
        constants: GasPathConstants,
    ) -> MapResult<Self> {
        constants.validate()?;
        Ok(Self {
            compressor,
            turbine,
            fuel_schedule: None,
            constants,
        })
    }

    /// Attach a throttle-to-fuel-flow schedule.
    pub fn with_fuel_schedule(mut self, schedule: FuelSchedule) -> Self {
        self.fuel_schedule = Some(schedule);
        self
    }

    pub fn compressor(&self) -> &CompressorMap {
        &self.compressor
    }

    pub fn turbine(&self) -> &TurbineMap {
        &self.turbine
    }

    pub fn fuel_schedule(&self) -> Option<&FuelSchedule> {
        self.fuel_schedule.as_ref()
    }

    pub fn constants(&self) -> &GasPathConstants {
        &self.constants
    }
}
