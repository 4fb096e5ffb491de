//! Throttle-to-fuel-flow schedule.
//!
//! The combustion chamber takes fuel flow as a direct input. This table is an
//! optional mapping layer for drivers that only know a throttle position.

use crate::axis::MapAxis;
use crate::error::MapResult;

/// Fuel flow (kg/s) as a function of throttle position.
#[derive(Clone, Debug, PartialEq)]
pub struct FuelSchedule {
    throttle: MapAxis,
    fuel_flow: Box<[f64]>,
}

impl FuelSchedule {
    /// # Errors
    /// Returns an error if the throttle axis is invalid, the column length
    /// differs, or a fuel flow is negative.
    pub fn new(throttle: Vec<f64>, fuel_flow: Vec<f64>) -> MapResult<Self> {
        let throttle = MapAxis::new("fuel schedule throttle", throttle)?;
        let fuel_flow = throttle.column("fuel schedule flow", fuel_flow, |v| {
            if v >= 0.0 {
                Ok(())
            } else {
                Err("fuel flow must be non-negative")
            }
        })?;
        Ok(Self {
            throttle,
            fuel_flow,
        })
    }

    /// Scheduled fuel flow (kg/s), clamped to the table.
    pub fn fuel_flow(&self, throttle: f64) -> f64 {
        self.throttle.interpolate(throttle, &self.fuel_flow)
    }

    /// Number of points (`ck`).
    pub fn len(&self) -> usize {
        self.throttle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.throttle.is_empty()
    }

    pub fn throttle(&self) -> &[f64] {
        self.throttle.keys()
    }

    pub fn fuel_flows(&self) -> &[f64] {
        &self.fuel_flow
    }
}
