//! Gas-generator turbine map.

use crate::axis::MapAxis;
use crate::error::MapResult;

/// Turbine expansion ratio as a function of corrected speed (rpm).
#[derive(Clone, Debug, PartialEq)]
pub struct TurbineMap {
    speed_rpm: MapAxis,
    expansion_ratio: Box<[f64]>,
}

impl TurbineMap {
    /// # Errors
    /// Returns an error if the axis is invalid, the column length differs
    /// from the axis, or an expansion ratio is below 1.
    pub fn new(speed_rpm: Vec<f64>, expansion_ratio: Vec<f64>) -> MapResult<Self> {
        let speed_rpm = MapAxis::new("turbine speed", speed_rpm)?;
        let expansion_ratio =
            speed_rpm.column("turbine expansion ratio", expansion_ratio, |v| {
                if v >= 1.0 {
                    Ok(())
                } else {
                    Err("expansion ratio must be >= 1")
                }
            })?;
        Ok(Self {
            speed_rpm,
            expansion_ratio,
        })
    }

    /// Expansion ratio (inlet over outlet stagnation pressure), clamped to the map.
    pub fn expansion_ratio(&self, corrected_rpm: f64) -> f64 {
        self.speed_rpm
            .interpolate(corrected_rpm, &self.expansion_ratio)
    }

    /// Number of points (`tk`).
    pub fn len(&self) -> usize {
        self.speed_rpm.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speed_rpm.is_empty()
    }

    pub fn speed_rpm(&self) -> &[f64] {
        self.speed_rpm.keys()
    }

    pub fn expansion_ratios(&self) -> &[f64] {
        &self.expansion_ratio
    }
}
