//! Combustion chamber with a lagged exit temperature.

use crate::common::{check_finite, check_fraction, check_positive};
use crate::error::{ComponentError, ComponentResult};
use crate::station::Station;
use tracing::trace;
use ts_core::units::constants::R_GAS;
use ts_core::units::{MassRate, Pressure, Temperature, Velocity, k, kgps, mps, pa};
use ts_maps::PerformanceMapStore;

/// Total-pressure retention across the liner.
pub const DEFAULT_PRESSURE_LOSS: f64 = 0.9578;

/// Per-tick gain of the exit-temperature lag.
pub const DEFAULT_LAG_GAIN: f64 = 0.1;

/// Combustion chamber.
///
/// ## Model
///
/// ```text
/// p_out    = sigma · p_in
/// T_target = T_in + q_fuel · eta_cc · LHV / (mdot_air · cp_gas)
/// c_out    = (1 - p_out/p_in) · R_gas · T_in / c_in + c_in
/// mdot_out = mdot_air + q_fuel
/// ```
///
/// The reported exit temperature is a first-order lag of `T_target`:
///
/// ```text
/// T_out[n] = T_out[n-1] + gain · (T_target - T_out[n-1])
/// ```
///
/// The filter state lives in the chamber and persists across ticks. It is
/// seeded with the first target, so the first tick after construction or
/// [`CombustionChamber::reset`] returns the energy-balance value directly.
#[derive(Clone, Debug)]
pub struct CombustionChamber {
    /// Total-pressure retention (0 < sigma <= 1)
    pressure_loss: f64,
    /// Lag gain per tick (0 < gain <= 1)
    lag_gain: f64,
    /// Last filtered exit temperature (K)
    filtered_temperature: Option<f64>,
    target_temperature: Temperature,
    fuel_flow: MassRate,
    fuel_air_ratio: f64,
    outlet: Station,
}

impl Default for CombustionChamber {
    fn default() -> Self {
        Self::new()
    }
}

impl CombustionChamber {
    pub fn new() -> Self {
        Self {
            pressure_loss: DEFAULT_PRESSURE_LOSS,
            lag_gain: DEFAULT_LAG_GAIN,
            filtered_temperature: None,
            target_temperature: k(0.0),
            fuel_flow: kgps(0.0),
            fuel_air_ratio: 0.0,
            outlet: Station::zero(),
        }
    }

    /// # Arguments
    /// * `pressure_loss` - Total-pressure retention factor, in (0, 1]
    /// * `lag_gain` - Exit-temperature lag gain per tick, in (0, 1]; 1 disables the lag
    ///
    /// # Errors
    /// Returns error if either parameter is out of range.
    pub fn with_params(pressure_loss: f64, lag_gain: f64) -> ComponentResult<Self> {
        check_fraction(pressure_loss, "combustor pressure loss factor")?;
        check_fraction(lag_gain, "combustor lag gain")?;
        Ok(Self {
            pressure_loss,
            lag_gain,
            ..Self::new()
        })
    }

    /// Compute the combustor exit for one tick and advance the temperature lag.
    ///
    /// # Arguments
    /// * `maps` - Shared performance data (combustion efficiency, heating value, cp)
    /// * `inlet` - Compressor exit station
    /// * `fuel_flow` - Fuel mass flow, the authoritative fuel input
    ///
    /// # Errors
    /// Returns error for non-positive inlet temperature, pressure, air mass
    /// flow or velocity, or a negative fuel flow. The lag state is not
    /// advanced on error.
    pub fn update(
        &mut self,
        maps: &PerformanceMapStore,
        inlet: &Station,
        fuel_flow: MassRate,
    ) -> ComponentResult<Station> {
        let t_in = check_positive(inlet.total_temperature.value, "combustor inlet temperature")?;
        let p_in = check_positive(inlet.total_pressure.value, "combustor inlet pressure")?;
        let m_air = check_positive(inlet.mass_flow.value, "combustor air mass flow")?;
        let c_in = check_positive(inlet.velocity.value, "combustor inlet velocity")?;
        let q = fuel_flow.value;
        check_finite(q, "fuel flow")?;
        if q < 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "fuel flow must be non-negative",
            });
        }

        let constants = maps.constants();
        let p_out = self.pressure_loss * p_in;
        let heat_release = q * constants.combustion_efficiency * constants.fuel_heating_value;
        let target = t_in + heat_release / (m_air * constants.cp_gas);
        let c_out = (1.0 - p_out / p_in) * R_GAS * t_in / c_in + c_in;

        check_finite(target, "combustor target temperature")?;
        check_finite(c_out, "combustor outlet velocity")?;

        let filtered = match self.filtered_temperature {
            None => target,
            Some(previous) => previous + (target - previous) * self.lag_gain,
        };
        trace!(target, filtered, "combustor exit temperature");

        let outlet = Station {
            total_temperature: k(filtered),
            total_pressure: pa(p_out),
            velocity: mps(c_out),
            mass_flow: kgps(m_air + q),
        };
        self.filtered_temperature = Some(filtered);
        self.target_temperature = k(target);
        self.fuel_flow = fuel_flow;
        self.fuel_air_ratio = q / m_air;
        self.outlet = outlet;
        Ok(outlet)
    }

    /// Clear the temperature lag and zero the station variables.
    pub fn reset(&mut self) {
        *self = Self {
            pressure_loss: self.pressure_loss,
            lag_gain: self.lag_gain,
            ..Self::new()
        };
    }

    pub fn pressure_loss(&self) -> f64 {
        self.pressure_loss
    }

    pub fn lag_gain(&self) -> f64 {
        self.lag_gain
    }

    /// True once the lag has been seeded by a successful update.
    pub fn is_seeded(&self) -> bool {
        self.filtered_temperature.is_some()
    }

    /// Instantaneous energy-balance exit temperature (before the lag).
    pub fn target_temperature(&self) -> Temperature {
        self.target_temperature
    }

    pub fn fuel_flow(&self) -> MassRate {
        self.fuel_flow
    }

    pub fn fuel_air_ratio(&self) -> f64 {
        self.fuel_air_ratio
    }

    pub fn outlet(&self) -> &Station {
        &self.outlet
    }

    pub fn total_temperature(&self) -> Temperature {
        self.outlet.total_temperature
    }

    pub fn total_pressure(&self) -> Pressure {
        self.outlet.total_pressure
    }

    pub fn velocity(&self) -> Velocity {
        self.outlet.velocity
    }

    pub fn mass_flow(&self) -> MassRate {
        self.outlet.mass_flow
    }
}
