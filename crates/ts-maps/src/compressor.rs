//! Compressor performance map.

use crate::axis::MapAxis;
use crate::error::MapResult;

/// Map values at one corrected speed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompressorPoint {
    /// Total-to-total pressure ratio (≥ 1)
    pub pressure_ratio: f64,
    /// Isentropic efficiency (0 < eta <= 1)
    pub efficiency: f64,
    /// Corrected mass flow (kg/s at reference inlet conditions)
    pub corrected_mass_flow: f64,
}

/// Compressor characteristic along the operating line.
///
/// Three value columns share one corrected-speed axis (rpm).
#[derive(Clone, Debug, PartialEq)]
pub struct CompressorMap {
    speed_rpm: MapAxis,
    pressure_ratio: Box<[f64]>,
    efficiency: Box<[f64]>,
    corrected_mass_flow: Box<[f64]>,
}

impl CompressorMap {
    /// Build a compressor map from parallel columns.
    ///
    /// # Errors
    /// Returns an error if the speed axis is invalid, if a column length
    /// differs from the axis, or if an entry is outside its physical range
    /// (pressure ratio < 1, efficiency outside (0, 1], non-positive mass flow).
    pub fn new(
        speed_rpm: Vec<f64>,
        pressure_ratio: Vec<f64>,
        efficiency: Vec<f64>,
        corrected_mass_flow: Vec<f64>,
    ) -> MapResult<Self> {
        let speed_rpm = MapAxis::new("compressor speed", speed_rpm)?;
        let pressure_ratio =
            speed_rpm.column("compressor pressure ratio", pressure_ratio, |v| {
                if v >= 1.0 {
                    Ok(())
                } else {
                    Err("pressure ratio must be >= 1")
                }
            })?;
        let efficiency = speed_rpm.column("compressor efficiency", efficiency, |v| {
            if v > 0.0 && v <= 1.0 {
                Ok(())
            } else {
                Err("efficiency must be in (0,1]")
            }
        })?;
        let corrected_mass_flow =
            speed_rpm.column("compressor corrected mass flow", corrected_mass_flow, |v| {
                if v > 0.0 {
                    Ok(())
                } else {
                    Err("corrected mass flow must be positive")
                }
            })?;

        Ok(Self {
            speed_rpm,
            pressure_ratio,
            efficiency,
            corrected_mass_flow,
        })
    }

    /// Look up all three map values at a corrected speed (rpm), clamped to the map.
    pub fn lookup(&self, corrected_rpm: f64) -> CompressorPoint {
        CompressorPoint {
            pressure_ratio: self.speed_rpm.interpolate(corrected_rpm, &self.pressure_ratio),
            efficiency: self.speed_rpm.interpolate(corrected_rpm, &self.efficiency),
            corrected_mass_flow: self
                .speed_rpm
                .interpolate(corrected_rpm, &self.corrected_mass_flow),
        }
    }

    /// Number of points (`sk`).
    pub fn len(&self) -> usize {
        self.speed_rpm.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speed_rpm.is_empty()
    }

    pub fn speed_rpm(&self) -> &[f64] {
        self.speed_rpm.keys()
    }

    pub fn pressure_ratio(&self) -> &[f64] {
        &self.pressure_ratio
    }

    pub fn efficiency(&self) -> &[f64] {
        &self.efficiency
    }

    pub fn corrected_mass_flow(&self) -> &[f64] {
        &self.corrected_mass_flow
    }
}
