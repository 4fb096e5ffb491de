//! Intake (freestream → compressor face).

use crate::common::{check_finite, check_fraction, check_positive};
use crate::error::{ComponentError, ComponentResult};
use crate::station::FaceState;
use ts_core::units::constants::{GAMMA_AIR, R_AIR};
use ts_core::units::{Pressure, Temperature, Velocity, k, mps, pa};

/// Total-pressure recovery of the intake duct.
pub const DEFAULT_PRESSURE_RECOVERY: f64 = 0.96;

/// Subsonic intake.
///
/// ## Model
///
/// Isentropic stagnation relations for air, followed by a fixed total-pressure
/// recovery factor `sigma`:
///
/// ```text
/// T_t / T = 1 + (γ-1)/2 · M²
/// p_t / p = (T_t / T)^(γ/(γ-1))
/// p_face  = sigma · p_t
/// c_face  = sqrt(2 · cp · (T_t - T)),  cp = γR/(γ-1)
/// ```
#[derive(Clone, Debug)]
pub struct Intake {
    /// Total-pressure recovery (0 < sigma <= 1)
    pressure_recovery: f64,
    mach: f64,
    freestream_total_pressure: Pressure,
    outlet: FaceState,
}

impl Default for Intake {
    fn default() -> Self {
        Self::new()
    }
}

impl Intake {
    /// Intake with the default recovery factor.
    pub fn new() -> Self {
        Self {
            pressure_recovery: DEFAULT_PRESSURE_RECOVERY,
            mach: 0.0,
            freestream_total_pressure: pa(0.0),
            outlet: FaceState::zero(),
        }
    }

    /// # Errors
    /// Returns error if the recovery factor is outside (0, 1].
    pub fn with_pressure_recovery(pressure_recovery: f64) -> ComponentResult<Self> {
        check_fraction(pressure_recovery, "intake pressure recovery")?;
        Ok(Self {
            pressure_recovery,
            ..Self::new()
        })
    }

    /// Compute the compressor-face state for one tick.
    ///
    /// # Errors
    /// Returns error for a non-positive ambient temperature or pressure, or a
    /// negative or non-finite Mach number.
    pub fn update(
        &mut self,
        ambient_temperature: Temperature,
        ambient_pressure: Pressure,
        mach: f64,
    ) -> ComponentResult<FaceState> {
        let t_h = check_positive(ambient_temperature.value, "ambient temperature")?;
        let p_h = check_positive(ambient_pressure.value, "ambient pressure")?;
        check_finite(mach, "flight Mach number")?;
        if mach < 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "flight Mach number must be non-negative",
            });
        }

        let g = GAMMA_AIR;
        let temperature_ratio = 1.0 + 0.5 * (g - 1.0) * mach * mach;
        let pressure_ratio = temperature_ratio.powf(g / (g - 1.0));

        let t_total = t_h * temperature_ratio;
        let p_total = p_h * pressure_ratio;
        let p_face = self.pressure_recovery * p_total;
        let c_face = ((t_total - t_h) * 2.0 * g / (g - 1.0) * R_AIR).sqrt();

        check_finite(p_face, "compressor-face total pressure")?;
        check_finite(c_face, "compressor-face velocity")?;

        let outlet = FaceState {
            total_temperature: k(t_total),
            total_pressure: pa(p_face),
            velocity: mps(c_face),
        };
        self.mach = mach;
        self.freestream_total_pressure = pa(p_total);
        self.outlet = outlet;
        Ok(outlet)
    }

    /// Zero the station variables.
    pub fn reset(&mut self) {
        self.mach = 0.0;
        self.freestream_total_pressure = pa(0.0);
        self.outlet = FaceState::zero();
    }

    pub fn pressure_recovery(&self) -> f64 {
        self.pressure_recovery
    }

    pub fn mach(&self) -> f64 {
        self.mach
    }

    /// Freestream total pressure, before the recovery loss.
    pub fn freestream_total_pressure(&self) -> Pressure {
        self.freestream_total_pressure
    }

    pub fn outlet(&self) -> &FaceState {
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

#[cfg(test)]
mod tests {
    use super::*;
    use ts_core::numeric::{Tolerances, nearly_equal};

    #[test]
    fn static_conditions_at_zero_mach() {
        let mut intake = Intake::new();
        let face = intake.update(k(288.15), pa(101_325.0), 0.0).unwrap();

        assert_eq!(face.total_temperature.value, 288.15);
        assert!((face.total_pressure.value - 0.96 * 101_325.0).abs() < 1e-9);
        assert_eq!(face.velocity.value, 0.0);
    }

    #[test]
    fn face_velocity_equals_flight_speed() {
        let mut intake = Intake::new();
        let t_h = 250.0;
        let face = intake.update(k(t_h), pa(60_000.0), 0.5).unwrap();

        let flight_speed = 0.5 * (GAMMA_AIR * R_AIR * t_h).sqrt();
        assert!(nearly_equal(
            face.velocity.value,
            flight_speed,
            Tolerances::default()
        ));
    }

    #[test]
    fn ram_rise_follows_isentropic_relations() {
        let mut intake = Intake::new();
        intake.update(k(250.0), pa(60_000.0), 0.8).unwrap();

        // T_t/T = 1.128, p_t/p = 1.128^3.5
        let tr: f64 = 1.128;
        assert!((intake.total_temperature().value - 250.0 * tr).abs() < 1e-9);
        assert!(
            (intake.freestream_total_pressure().value - 60_000.0 * tr.powf(3.5)).abs() < 1e-6
        );
        assert!(
            (intake.total_pressure().value - 0.96 * intake.freestream_total_pressure().value)
                .abs()
                < 1e-9
        );
    }

    #[test]
    fn custom_recovery() {
        let mut intake = Intake::with_pressure_recovery(1.0).unwrap();
        let face = intake.update(k(288.15), pa(101_325.0), 0.0).unwrap();
        assert_eq!(face.total_pressure.value, 101_325.0);
        assert!(Intake::with_pressure_recovery(0.0).is_err());
        assert!(Intake::with_pressure_recovery(1.1).is_err());
    }

    #[test]
    fn rejects_invalid_inputs_and_keeps_state() {
        let mut intake = Intake::new();
        intake.update(k(288.15), pa(101_325.0), 0.3).unwrap();
        let before = *intake.outlet();

        assert!(intake.update(k(0.0), pa(101_325.0), 0.3).is_err());
        assert!(intake.update(k(-10.0), pa(101_325.0), 0.3).is_err());
        assert!(intake.update(k(288.15), pa(0.0), 0.3).is_err());
        assert!(intake.update(k(288.15), pa(101_325.0), -0.1).is_err());
        assert!(intake.update(k(288.15), pa(101_325.0), f64::NAN).is_err());

        assert_eq!(*intake.outlet(), before);
    }

    #[test]
    fn reset_zeroes_station() {
        let mut intake = Intake::new();
        intake.update(k(288.15), pa(101_325.0), 0.3).unwrap();
        intake.reset();
        assert_eq!(*intake.outlet(), FaceState::zero());
        assert_eq!(intake.mach(), 0.0);
    }
}
