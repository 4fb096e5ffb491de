//! Gas-generator turbine.

use crate::common::{
    check_finite, check_fraction, check_positive, check_speed, continuity_velocity,
    isentropic_exponent, speed_correction,
};
use crate::error::{ComponentError, ComponentResult};
use crate::station::Station;
use tracing::trace;
use ts_core::units::constants::{GAMMA_GAS, R_GAS, RAD_S_TO_RPM};
use ts_core::units::{
    AngVel, MassRate, Power, Pressure, Temperature, Velocity, k, mps, pa, rad_s, watt,
};
use ts_maps::PerformanceMapStore;

/// Isentropic efficiency used once the engine is initialised.
pub const DEFAULT_EFFICIENCY: f64 = 0.89;

/// How the turbine exit stagnation pressure is obtained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TurbinePressureMethod {
    /// `p_out = p_in · (T_out / T_in)^(γ/(γ-1))`, consistent with the
    /// efficiency-based exit temperature.
    #[default]
    TemperatureRatio,
    /// `p_out = p_in / eps` straight from the map.
    MapExpansion,
}

/// Map-driven gas-generator turbine.
///
/// ## Model
///
/// The expansion ratio `eps` is read from the turbine map at the corrected
/// speed `n · sqrt(T_ref / T_in)`. With `k = (γ_gas - 1)/γ_gas`:
///
/// ```text
/// T_out = T_in · (1 - eta · (1 - eps^(-k)))
/// P     = mdot · cp_gas · (T_in - T_out)
/// ```
///
/// The exit pressure follows [`TurbinePressureMethod`]. Exit velocity comes
/// from continuity at the turbine exit reference area with
/// `rho = p_out / (R_gas · T_out)`. The exit static state follows from it:
///
/// ```text
/// T_s = T_out - c² / (2 · cp_gas)
/// Ma  = c / sqrt(γ_gas · R_gas · T_s)
/// p_s = p_out / (1 + (γ_gas - 1)/2 · Ma²)^(γ_gas/(γ_gas-1))
/// ```
#[derive(Clone, Debug)]
pub struct Turbine {
    efficiency: f64,
    pressure_method: TurbinePressureMethod,
    corrected_speed: AngVel,
    corrected_rpm: f64,
    expansion_ratio: f64,
    map_exit_pressure: Pressure,
    exit_static_temperature: Temperature,
    exit_static_pressure: Pressure,
    exit_mach: f64,
    power: Power,
    outlet: Station,
}

impl Default for Turbine {
    fn default() -> Self {
        Self::new()
    }
}

impl Turbine {
    pub fn new() -> Self {
        Self {
            efficiency: DEFAULT_EFFICIENCY,
            pressure_method: TurbinePressureMethod::default(),
            corrected_speed: rad_s(0.0),
            corrected_rpm: 0.0,
            expansion_ratio: 0.0,
            map_exit_pressure: pa(0.0),
            exit_static_temperature: k(0.0),
            exit_static_pressure: pa(0.0),
            exit_mach: 0.0,
            power: watt(0.0),
            outlet: Station::zero(),
        }
    }

    /// # Errors
    /// Returns error unless `0 < efficiency <= 1`.
    pub fn with_efficiency(mut self, efficiency: f64) -> ComponentResult<Self> {
        self.efficiency = check_fraction(efficiency, "turbine efficiency")?;
        Ok(self)
    }

    pub fn with_pressure_method(mut self, method: TurbinePressureMethod) -> Self {
        self.pressure_method = method;
        self
    }

    /// Compute the turbine exit for one tick.
    ///
    /// # Arguments
    /// * `maps` - Shared performance data
    /// * `inlet` - Combustor exit station
    /// * `shaft_speed` - Mechanical gas-generator speed
    ///
    /// # Errors
    /// Returns error for non-positive inlet temperature, pressure or mass
    /// flow, a negative shaft speed, or a non-physical exit state (negative
    /// exit temperature or static temperature).
    pub fn update(
        &mut self,
        maps: &PerformanceMapStore,
        inlet: &Station,
        shaft_speed: AngVel,
    ) -> ComponentResult<Station> {
        let t_in = check_positive(inlet.total_temperature.value, "turbine inlet temperature")?;
        let p_in = check_positive(inlet.total_pressure.value, "turbine inlet pressure")?;
        let mass_flow = check_positive(inlet.mass_flow.value, "turbine mass flow")?;
        let omega = check_speed(shaft_speed, "gas-generator shaft speed")?;

        let corrected_omega = omega * speed_correction(t_in);
        let corrected_rpm = corrected_omega * RAD_S_TO_RPM;
        let eps = maps.turbine().expansion_ratio(corrected_rpm);
        trace!(corrected_rpm, expansion_ratio = eps, "turbine map lookup");

        let exponent = isentropic_exponent(GAMMA_GAS);
        let t_out = t_in * (1.0 - self.efficiency * (1.0 - eps.powf(-exponent)));
        if !(t_out > 0.0) {
            return Err(ComponentError::NonPhysical {
                what: "turbine exit temperature must be positive",
            });
        }

        let map_p_out = p_in / eps;
        let p_out = match self.pressure_method {
            TurbinePressureMethod::TemperatureRatio => p_in * (t_out / t_in).powf(1.0 / exponent),
            TurbinePressureMethod::MapExpansion => map_p_out,
        };

        let constants = maps.constants();
        let c_out = continuity_velocity(
            mass_flow,
            p_out,
            t_out,
            R_GAS,
            constants.turbine_exit_area.value,
        );
        let t_static = t_out - c_out * c_out / (2.0 * constants.cp_gas);
        if !(t_static > 0.0) {
            return Err(ComponentError::NonPhysical {
                what: "turbine exit static temperature must be positive",
            });
        }
        let mach = c_out / (GAMMA_GAS * R_GAS * t_static).sqrt();
        let p_static =
            p_out / (1.0 + 0.5 * (GAMMA_GAS - 1.0) * mach * mach).powf(1.0 / exponent);
        let power = mass_flow * constants.cp_gas * (t_in - t_out);

        check_finite(p_out, "turbine outlet pressure")?;
        check_finite(c_out, "turbine outlet velocity")?;
        check_finite(mach, "turbine exit Mach number")?;
        check_finite(p_static, "turbine exit static pressure")?;
        check_finite(power, "turbine power")?;

        let outlet = Station {
            total_temperature: k(t_out),
            total_pressure: pa(p_out),
            velocity: mps(c_out),
            mass_flow: inlet.mass_flow,
        };
        self.corrected_speed = rad_s(corrected_omega);
        self.corrected_rpm = corrected_rpm;
        self.expansion_ratio = eps;
        self.map_exit_pressure = pa(map_p_out);
        self.exit_static_temperature = k(t_static);
        self.exit_static_pressure = pa(p_static);
        self.exit_mach = mach;
        self.power = watt(power);
        self.outlet = outlet;
        Ok(outlet)
    }

    /// Zero the station variables, keeping efficiency and pressure method.
    pub fn reset(&mut self) {
        *self = Self {
            efficiency: self.efficiency,
            pressure_method: self.pressure_method,
            ..Self::new()
        };
    }

    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    pub fn pressure_method(&self) -> TurbinePressureMethod {
        self.pressure_method
    }

    pub fn corrected_speed(&self) -> AngVel {
        self.corrected_speed
    }

    pub fn corrected_rpm(&self) -> f64 {
        self.corrected_rpm
    }

    pub fn expansion_ratio(&self) -> f64 {
        self.expansion_ratio
    }

    /// Exit pressure the selected method reports.
    pub fn exit_pressure(&self) -> Pressure {
        self.outlet.total_pressure
    }

    /// Exit pressure from the map expansion ratio alone.
    pub fn map_exit_pressure(&self) -> Pressure {
        self.map_exit_pressure
    }

    pub fn exit_static_temperature(&self) -> Temperature {
        self.exit_static_temperature
    }

    pub fn exit_static_pressure(&self) -> Pressure {
        self.exit_static_pressure
    }

    pub fn exit_mach(&self) -> f64 {
        self.exit_mach
    }

    /// Shaft power delivered to the gas-generator spool.
    pub fn power(&self) -> Power {
        self.power
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
