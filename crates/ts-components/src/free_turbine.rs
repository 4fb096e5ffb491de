//! Free (power) turbine expanding to the exhaust.

use crate::common::{check_finite, check_positive, check_speed, isentropic_exponent};
use crate::error::{ComponentError, ComponentResult};
use crate::station::Station;
use tracing::warn;
use ts_core::units::constants::{GAMMA_GAS, P_REF_PA};
use ts_core::units::{
    AngVel, MassRate, Power, Pressure, Temperature, Torque, Velocity, k, kgps, nm, pa, rad_s,
    watt,
};
use ts_maps::PerformanceMapStore;

/// Below this speed torque is computed as if the shaft turned at this speed.
pub const MIN_TORQUE_SPEED_RAD_S: f64 = 0.1;

/// Free turbine driving the output shaft.
///
/// ## Model
///
/// Isentropic expansion of the gas-generator exhaust down to a fixed exhaust
/// pressure `p_ex`:
///
/// ```text
/// T_ex = T_in · (p_ex / p_in)^((γ_gas-1)/γ_gas)
/// P    = mdot · cp_gas · (T_in - T_ex)
/// tau  = P / max(omega, omega_min)
/// ```
///
/// An inlet pressure below `p_ex` gives negative power. That is reported, not
/// rejected. No exhaust area is modelled, so the exhaust velocity is
/// unresolved and [`FreeTurbine::velocity`] returns `None`.
#[derive(Clone, Debug)]
pub struct FreeTurbine {
    exhaust_pressure: Pressure,
    shaft_speed: AngVel,
    exhaust_temperature: Temperature,
    mass_flow: MassRate,
    power: Power,
    torque: Torque,
}

impl Default for FreeTurbine {
    fn default() -> Self {
        Self::new()
    }
}

impl FreeTurbine {
    /// Free turbine exhausting to the reference pressure.
    pub fn new() -> Self {
        Self {
            exhaust_pressure: pa(P_REF_PA),
            shaft_speed: rad_s(0.0),
            exhaust_temperature: k(0.0),
            mass_flow: kgps(0.0),
            power: watt(0.0),
            torque: nm(0.0),
        }
    }

    /// # Errors
    /// Returns error unless the exhaust pressure is finite and positive.
    pub fn with_exhaust_pressure(exhaust_pressure: Pressure) -> ComponentResult<Self> {
        check_positive(exhaust_pressure.value, "free-turbine exhaust pressure")?;
        Ok(Self {
            exhaust_pressure,
            ..Self::new()
        })
    }

    /// Compute exhaust temperature, delivered power and output torque.
    ///
    /// # Arguments
    /// * `maps` - Shared performance data (cp of the combustion gas)
    /// * `inlet` - Gas-generator turbine exit station
    /// * `shaft_speed` - Power-turbine shaft speed, used for torque only
    ///
    /// # Errors
    /// Returns error for non-positive inlet temperature or pressure, negative
    /// mass flow or shaft speed, or a non-finite result.
    pub fn update(
        &mut self,
        maps: &PerformanceMapStore,
        inlet: &Station,
        shaft_speed: AngVel,
    ) -> ComponentResult<Power> {
        let t_in = check_positive(inlet.total_temperature.value, "free-turbine inlet temperature")?;
        let p_in = check_positive(inlet.total_pressure.value, "free-turbine inlet pressure")?;
        let mass_flow = inlet.mass_flow.value;
        check_finite(mass_flow, "free-turbine mass flow")?;
        if mass_flow < 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "free-turbine mass flow must be non-negative",
            });
        }
        let omega = check_speed(shaft_speed, "power-turbine shaft speed")?;

        let p_ex = self.exhaust_pressure.value;
        let t_ex = t_in * (p_ex / p_in).powf(isentropic_exponent(GAMMA_GAS));
        let power = mass_flow * maps.constants().cp_gas * (t_in - t_ex);
        let torque = power / omega.max(MIN_TORQUE_SPEED_RAD_S);

        check_finite(t_ex, "free-turbine exhaust temperature")?;
        check_finite(power, "free-turbine power")?;

        if power < 0.0 {
            warn!(
                inlet_pressure = p_in,
                exhaust_pressure = p_ex,
                power,
                "free turbine absorbing power"
            );
        }

        self.shaft_speed = shaft_speed;
        self.exhaust_temperature = k(t_ex);
        self.mass_flow = inlet.mass_flow;
        self.power = watt(power);
        self.torque = nm(torque);
        Ok(self.power)
    }

    /// Zero the station variables, keeping the exhaust pressure.
    pub fn reset(&mut self) {
        *self = Self {
            exhaust_pressure: self.exhaust_pressure,
            ..Self::new()
        };
    }

    pub fn exhaust_pressure(&self) -> Pressure {
        self.exhaust_pressure
    }

    pub fn shaft_speed(&self) -> AngVel {
        self.shaft_speed
    }

    pub fn exhaust_temperature(&self) -> Temperature {
        self.exhaust_temperature
    }

    pub fn total_temperature(&self) -> Temperature {
        self.exhaust_temperature
    }

    pub fn total_pressure(&self) -> Pressure {
        self.exhaust_pressure
    }

    /// Exhaust velocity. Always `None`: the exhaust area is not modelled.
    pub fn velocity(&self) -> Option<Velocity> {
        None
    }

    pub fn mass_flow(&self) -> MassRate {
        self.mass_flow
    }

    /// Shaft power delivered to the output shaft.
    pub fn power(&self) -> Power {
        self.power
    }

    pub fn torque(&self) -> Torque {
        self.torque
    }
}
