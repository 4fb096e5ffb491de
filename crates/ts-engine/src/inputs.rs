//! Per-tick driver inputs.

use crate::error::{EngineError, EngineResult};
use ts_core::units::{AngVel, Length, MassRate, kgps, m, rad_s};

/// Everything the driver supplies for one tick.
///
/// `fuel_flow` is what the combustor burns. `throttle` is carried for
/// telemetry and for drivers that map it to fuel flow through a
/// [`ts_maps::FuelSchedule`]; the gas path does not read it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickInputs {
    pub altitude: Length,
    pub mach: f64,
    pub gas_generator_speed: AngVel,
    pub power_turbine_speed: AngVel,
    /// Throttle position in [0, 1]
    pub throttle: f64,
    pub fuel_flow: MassRate,
}

impl Default for TickInputs {
    fn default() -> Self {
        Self {
            altitude: m(0.0),
            mach: 0.0,
            gas_generator_speed: rad_s(0.0),
            power_turbine_speed: rad_s(0.0),
            throttle: 0.0,
            fuel_flow: kgps(0.0),
        }
    }
}

impl TickInputs {
    /// Check the values only the driver can get wrong. Physical admissibility
    /// of speeds and flows is checked by the stages themselves.
    pub fn validate(&self) -> EngineResult<()> {
        if !self.altitude.value.is_finite() {
            return Err(EngineError::InvalidArg {
                what: "altitude must be finite",
            });
        }
        if !(0.0..=1.0).contains(&self.throttle) {
            return Err(EngineError::InvalidArg {
                what: "throttle must be in [0,1]",
            });
        }
        Ok(())
    }
}
