//! Station state passed from one stage to the next.

use ts_core::units::{MassRate, Pressure, Temperature, Velocity, k, kgps, mps, pa};

/// Stagnation state at the compressor face, as delivered by the intake.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceState {
    pub total_temperature: Temperature,
    pub total_pressure: Pressure,
    pub velocity: Velocity,
}

impl FaceState {
    pub fn zero() -> Self {
        Self {
            total_temperature: k(0.0),
            total_pressure: pa(0.0),
            velocity: mps(0.0),
        }
    }
}

/// Stagnation state, flow velocity and mass flow at a gas-path station.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Station {
    pub total_temperature: Temperature,
    pub total_pressure: Pressure,
    pub velocity: Velocity,
    pub mass_flow: MassRate,
}

impl Station {
    pub fn zero() -> Self {
        Self {
            total_temperature: k(0.0),
            total_pressure: pa(0.0),
            velocity: mps(0.0),
            mass_flow: kgps(0.0),
        }
    }
}
