//! Gas-generator compressor.

use crate::common::{
    check_finite, check_positive, check_speed, continuity_velocity, isentropic_exponent,
    speed_correction,
};
use crate::error::{ComponentError, ComponentResult};
use crate::station::{FaceState, Station};
use tracing::trace;
use ts_core::units::constants::{CP_AIR, GAMMA_AIR, P_REF_PA, R_AIR, RAD_S_TO_RPM};
use ts_core::units::{
    AngVel, MassRate, Power, Pressure, Temperature, Velocity, k, kgps, mps, pa, rad_s, watt,
};
use ts_maps::{CompressorPoint, PerformanceMapStore};

/// Map-driven compressor.
///
/// ## Model
///
/// The compressor map is read at the corrected speed
///
/// ```text
/// n_corr = n · sqrt(T_ref / T_in)
/// ```
///
/// giving pressure ratio `pi`, isentropic efficiency `eta` and corrected mass
/// flow `m_corr`. Then:
///
/// ```text
/// mdot  = m_corr · (p_in / p_ref) · sqrt(T_ref / T_in)
/// p_out = pi · p_in
/// T_out = T_in · (1 + (pi^((γ-1)/γ) - 1) / eta)
/// ```
///
/// Exit velocity follows from continuity at the compressor outlet reference
/// area; the absorbed power is `mdot · cp_air · (T_out - T_in)`.
#[derive(Clone, Debug)]
pub struct Compressor {
    corrected_speed: AngVel,
    corrected_rpm: f64,
    point: CompressorPoint,
    inlet_axial_velocity: Velocity,
    power: Power,
    outlet: Station,
}

impl Default for Compressor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compressor {
    pub fn new() -> Self {
        Self {
            corrected_speed: rad_s(0.0),
            corrected_rpm: 0.0,
            point: CompressorPoint {
                pressure_ratio: 0.0,
                efficiency: 0.0,
                corrected_mass_flow: 0.0,
            },
            inlet_axial_velocity: mps(0.0),
            power: watt(0.0),
            outlet: Station::zero(),
        }
    }

    /// Compute the compressor exit for one tick.
    ///
    /// # Arguments
    /// * `maps` - Shared performance data
    /// * `inlet` - Compressor-face state from the intake
    /// * `shaft_speed` - Mechanical gas-generator speed
    ///
    /// # Errors
    /// Returns error for non-positive inlet temperature or pressure, a negative
    /// shaft speed, a zero map efficiency, or a non-finite result.
    pub fn update(
        &mut self,
        maps: &PerformanceMapStore,
        inlet: &FaceState,
        shaft_speed: AngVel,
    ) -> ComponentResult<Station> {
        let t_in = check_positive(inlet.total_temperature.value, "compressor inlet temperature")?;
        let p_in = check_positive(inlet.total_pressure.value, "compressor inlet pressure")?;
        let omega = check_speed(shaft_speed, "gas-generator shaft speed")?;

        let correction = speed_correction(t_in);
        let corrected_omega = omega * correction;
        let corrected_rpm = corrected_omega * RAD_S_TO_RPM;

        let point = maps.compressor().lookup(corrected_rpm);
        if point.efficiency <= 0.0 {
            return Err(ComponentError::NonPhysical {
                what: "compressor efficiency must be positive",
            });
        }
        trace!(
            corrected_rpm,
            pressure_ratio = point.pressure_ratio,
            efficiency = point.efficiency,
            corrected_mass_flow = point.corrected_mass_flow,
            "compressor map lookup"
        );

        let mass_flow = point.corrected_mass_flow * (p_in / P_REF_PA) * correction;
        let p_out = point.pressure_ratio * p_in;
        let work_ratio = point.pressure_ratio.powf(isentropic_exponent(GAMMA_AIR));
        let t_out = t_in * (1.0 + (work_ratio - 1.0) / point.efficiency);

        let constants = maps.constants();
        let c_out = continuity_velocity(
            mass_flow,
            p_out,
            t_out,
            R_AIR,
            constants.compressor_outlet_area.value,
        );
        let c_axial = continuity_velocity(
            mass_flow,
            p_in,
            t_in,
            R_AIR,
            constants.compressor_inlet_area.value,
        );
        let power = mass_flow * CP_AIR * (t_out - t_in);

        check_finite(t_out, "compressor outlet temperature")?;
        check_finite(p_out, "compressor outlet pressure")?;
        check_finite(c_out, "compressor outlet velocity")?;
        check_finite(power, "compressor power")?;

        let outlet = Station {
            total_temperature: k(t_out),
            total_pressure: pa(p_out),
            velocity: mps(c_out),
            mass_flow: kgps(mass_flow),
        };
        self.corrected_speed = rad_s(corrected_omega);
        self.corrected_rpm = corrected_rpm;
        self.point = point;
        self.inlet_axial_velocity = mps(c_axial);
        self.power = watt(power);
        self.outlet = outlet;
        Ok(outlet)
    }

    /// Zero the station variables.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn corrected_speed(&self) -> AngVel {
        self.corrected_speed
    }

    pub fn corrected_rpm(&self) -> f64 {
        self.corrected_rpm
    }

    pub fn pressure_ratio(&self) -> f64 {
        self.point.pressure_ratio
    }

    pub fn efficiency(&self) -> f64 {
        self.point.efficiency
    }

    pub fn corrected_mass_flow(&self) -> f64 {
        self.point.corrected_mass_flow
    }

    pub fn mass_flow(&self) -> MassRate {
        self.outlet.mass_flow
    }

    /// Axial velocity at the inlet reference area.
    pub fn inlet_axial_velocity(&self) -> Velocity {
        self.inlet_axial_velocity
    }

    /// Shaft power absorbed by the compressor.
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
}
