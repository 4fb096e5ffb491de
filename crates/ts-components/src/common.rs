//! Common utilities for stage calculations.

use crate::error::{ComponentError, ComponentResult};
use ts_core::numeric::{ensure_finite, ensure_fraction, ensure_positive};
use ts_core::units::{AngVel, constants::T_REF_K};

/// Ensure a value is finite, returning ComponentError if not.
pub fn check_finite(value: f64, what: &'static str) -> ComponentResult<()> {
    ensure_finite(value, what).map_err(|_| ComponentError::NonPhysical { what })?;
    Ok(())
}

/// Ensure an input is finite and strictly positive (absolute temperature,
/// pressure, mass flow used as a divisor).
pub fn check_positive(value: f64, what: &'static str) -> ComponentResult<f64> {
    Ok(ensure_positive(value, what)?)
}

/// Ensure a loss or efficiency factor lies in (0, 1].
pub fn check_fraction(value: f64, what: &'static str) -> ComponentResult<f64> {
    Ok(ensure_fraction(value, what)?)
}

/// Ensure a shaft speed is finite and non-negative, returning rad/s.
pub fn check_speed(speed: AngVel, what: &'static str) -> ComponentResult<f64> {
    let omega = ensure_finite(speed.value, what)?;
    if omega < 0.0 {
        return Err(ComponentError::InvalidArg { what });
    }
    Ok(omega)
}

/// `(γ-1)/γ`, the exponent of the isentropic temperature–pressure relation.
pub fn isentropic_exponent(gamma: f64) -> f64 {
    (gamma - 1.0) / gamma
}

/// Scale factor `sqrt(T_ref / T)` that maps a shaft speed to corrected speed.
pub fn speed_correction(total_temperature: f64) -> f64 {
    (T_REF_K / total_temperature).sqrt()
}

/// Mean flow velocity through `area` from continuity, with ideal-gas density.
///
/// `c = mdot / (rho * A)`, `rho = p / (R * T)`
pub fn continuity_velocity(mass_flow: f64, pressure: f64, temperature: f64, r: f64, area: f64) -> f64 {
    let rho = pressure / (r * temperature);
    mass_flow / (rho * area)
}
