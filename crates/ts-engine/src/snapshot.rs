//! Serialisable record of one engine tick.

use serde::Serialize;
use ts_components::{FaceState, Station};

/// One gas-path station in plain SI numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct StationSnapshot {
    pub total_temperature_k: f64,
    pub total_pressure_pa: f64,
    /// `None` where the model does not resolve a velocity
    pub velocity_m_s: Option<f64>,
    pub mass_flow_kg_s: f64,
}

impl StationSnapshot {
    pub fn from_station(station: &Station) -> Self {
        Self {
            total_temperature_k: station.total_temperature.value,
            total_pressure_pa: station.total_pressure.value,
            velocity_m_s: Some(station.velocity.value),
            mass_flow_kg_s: station.mass_flow.value,
        }
    }

    pub fn from_face(face: &FaceState, mass_flow_kg_s: f64) -> Self {
        Self {
            total_temperature_k: face.total_temperature.value,
            total_pressure_pa: face.total_pressure.value,
            velocity_m_s: Some(face.velocity.value),
            mass_flow_kg_s,
        }
    }
}

/// Engine state after a successful tick.
///
/// Station numbering:
/// 0 freestream, 1 compressor face, 2 compressor exit, 3 combustor exit,
/// 4 gas-generator turbine exit, 5 free-turbine exhaust.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EngineSnapshot {
    /// Number of successful ticks since initialisation
    pub tick: u64,

    pub altitude_m: f64,
    pub mach: f64,
    pub gas_generator_rpm: f64,
    pub power_turbine_rpm: f64,
    pub throttle: f64,
    pub fuel_flow_kg_s: f64,

    pub freestream: StationSnapshot,
    pub compressor_face: StationSnapshot,
    pub compressor_exit: StationSnapshot,
    pub combustor_exit: StationSnapshot,
    pub turbine_exit: StationSnapshot,
    pub exhaust: StationSnapshot,

    pub compressor_corrected_rpm: f64,
    pub pressure_ratio: f64,
    pub compressor_efficiency: f64,
    pub combustor_target_temperature_k: f64,
    pub fuel_air_ratio: f64,
    pub turbine_corrected_rpm: f64,
    pub expansion_ratio: f64,
    pub turbine_exit_mach: f64,
    pub turbine_exit_static_pressure_pa: f64,

    pub compressor_power_w: f64,
    pub turbine_power_w: f64,
    /// Turbine power minus compressor power
    pub power_surplus_w: f64,
    pub free_turbine_power_w: f64,
    pub free_turbine_torque_nm: f64,
}

impl EngineSnapshot {
    /// Stations 0 to 5 with short labels, in gas-path order.
    pub fn stations(&self) -> [(&'static str, &StationSnapshot); 6] {
        [
            ("0 freestream", &self.freestream),
            ("1 compressor face", &self.compressor_face),
            ("2 compressor exit", &self.compressor_exit),
            ("3 combustor exit", &self.combustor_exit),
            ("4 turbine exit", &self.turbine_exit),
            ("5 exhaust", &self.exhaust),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ts_core::units::{k, kgps, mps, pa};

    #[test]
    fn station_conversion() {
        let station = Station {
            total_temperature: k(1100.0),
            total_pressure: pa(205_000.0),
            velocity: mps(140.0),
            mass_flow: kgps(0.735),
        };
        let snap = StationSnapshot::from_station(&station);
        assert_eq!(snap.total_temperature_k, 1100.0);
        assert_eq!(snap.velocity_m_s, Some(140.0));
        assert_eq!(snap.mass_flow_kg_s, 0.735);
    }

    #[test]
    fn serialises_unresolved_velocity_as_null() {
        let snap = EngineSnapshot::default();
        let json = serde_json::to_value(&snap).unwrap();
        assert!(json["exhaust"]["velocity_m_s"].is_null());
        assert_eq!(json["tick"], 0);
        assert_eq!(snap.stations().len(), 6);
    }
}
