//! Ambient conditions as a function of altitude.

use crate::error::{EngineError, EngineResult};
use ts_core::units::constants::{GAMMA_AIR, P_REF_PA, R_AIR, T_REF_K};
use ts_core::units::{Density, Length, Pressure, Temperature, Velocity, k, kgpm3, mps, pa};

/// Standard gravity (m/s²)
const G0: f64 = 9.80665;
/// Tropospheric temperature lapse rate (K/m)
const LAPSE_RATE: f64 = 0.0065;
/// Tropopause altitude (m)
const TROPOPAUSE_M: f64 = 11_000.0;

/// Static ambient state at one altitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientConditions {
    pub temperature: Temperature,
    pub pressure: Pressure,
    pub density: Density,
    pub speed_of_sound: Velocity,
}

/// Source of ambient conditions. Implementations are pure functions of
/// altitude.
pub trait Atmosphere {
    fn temperature(&self, altitude: Length) -> Temperature;
    fn pressure(&self, altitude: Length) -> Pressure;
    fn density(&self, altitude: Length) -> Density;
    fn speed_of_sound(&self, altitude: Length) -> Velocity;

    fn ambient(&self, altitude: Length) -> AmbientConditions {
        AmbientConditions {
            temperature: self.temperature(altitude),
            pressure: self.pressure(altitude),
            density: self.density(altitude),
            speed_of_sound: self.speed_of_sound(altitude),
        }
    }
}

/// Two-layer standard atmosphere: linear lapse to 11 km, isothermal above.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardAtmosphere {
    sea_level_temperature: f64,
    sea_level_pressure: f64,
}

impl Default for StandardAtmosphere {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardAtmosphere {
    pub fn new() -> Self {
        Self {
            sea_level_temperature: T_REF_K,
            sea_level_pressure: P_REF_PA,
        }
    }

    /// Non-standard day with the given sea-level state.
    ///
    /// # Errors
    /// Returns error unless both values are finite and positive, and the
    /// tropopause temperature stays positive.
    pub fn with_sea_level(temperature: Temperature, pressure: Pressure) -> EngineResult<Self> {
        let t0 = temperature.value;
        let p0 = pressure.value;
        if !(t0.is_finite() && t0 - LAPSE_RATE * TROPOPAUSE_M > 0.0) {
            return Err(EngineError::InvalidArg {
                what: "sea-level temperature too low for the standard lapse rate",
            });
        }
        if !(p0.is_finite() && p0 > 0.0) {
            return Err(EngineError::InvalidArg {
                what: "sea-level pressure must be positive",
            });
        }
        Ok(Self {
            sea_level_temperature: t0,
            sea_level_pressure: p0,
        })
    }

    pub fn sea_level_temperature(&self) -> Temperature {
        k(self.sea_level_temperature)
    }

    pub fn sea_level_pressure(&self) -> Pressure {
        pa(self.sea_level_pressure)
    }

    fn temperature_k(&self, h: f64) -> f64 {
        self.sea_level_temperature - LAPSE_RATE * h.min(TROPOPAUSE_M)
    }

    fn pressure_pa(&self, h: f64) -> f64 {
        let exponent = G0 / (LAPSE_RATE * R_AIR);
        let t = self.temperature_k(h);
        let p = self.sea_level_pressure * (t / self.sea_level_temperature).powf(exponent);
        if h <= TROPOPAUSE_M {
            p
        } else {
            p * (-G0 * (h - TROPOPAUSE_M) / (R_AIR * t)).exp()
        }
    }
}

impl Atmosphere for StandardAtmosphere {
    fn temperature(&self, altitude: Length) -> Temperature {
        k(self.temperature_k(altitude.value))
    }

    fn pressure(&self, altitude: Length) -> Pressure {
        pa(self.pressure_pa(altitude.value))
    }

    fn density(&self, altitude: Length) -> Density {
        let h = altitude.value;
        kgpm3(self.pressure_pa(h) / (R_AIR * self.temperature_k(h)))
    }

    fn speed_of_sound(&self, altitude: Length) -> Velocity {
        mps((GAMMA_AIR * R_AIR * self.temperature_k(altitude.value)).sqrt())
    }
}
