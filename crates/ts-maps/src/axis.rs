//! Validated key axis shared by the value columns of one map.

use crate::error::{MapError, MapResult};
use crate::interpolate::interpolate;

/// Strictly increasing, finite key table with at least two points.
///
/// The length is fixed at construction; there is no API to grow or shrink it.
#[derive(Clone, Debug, PartialEq)]
pub struct MapAxis {
    table: &'static str,
    keys: Box<[f64]>,
}

impl MapAxis {
    /// Validate `keys` and take ownership of them.
    ///
    /// # Errors
    /// Returns an error if there are fewer than two keys, if any key is not
    /// finite, or if the keys are not strictly increasing.
    pub fn new(table: &'static str, keys: Vec<f64>) -> MapResult<Self> {
        if keys.len() < 2 {
            return Err(MapError::TooShort {
                table,
                len: keys.len(),
            });
        }
        if let Some(index) = keys.iter().position(|v| !v.is_finite()) {
            return Err(MapError::NonFinite { table, index });
        }
        if let Some(index) = keys.windows(2).position(|w| w[0] >= w[1]) {
            return Err(MapError::NotIncreasing {
                table,
                index: index + 1,
            });
        }
        Ok(Self {
            table,
            keys: keys.into_boxed_slice(),
        })
    }

    pub fn name(&self) -> &'static str {
        self.table
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[f64] {
        &self.keys
    }

    pub fn first(&self) -> f64 {
        self.keys[0]
    }

    pub fn last(&self) -> f64 {
        self.keys[self.keys.len() - 1]
    }

    /// Interpolate a value column defined over this axis.
    ///
    /// The column must come from [`MapAxis::column`] so its length matches.
    pub fn interpolate(&self, x: f64, column: &[f64]) -> f64 {
        interpolate(x, column, &self.keys)
    }

    /// Validate a value column against this axis.
    ///
    /// `accept` is the physical range check for the column's entries.
    pub(crate) fn column(
        &self,
        table: &'static str,
        values: Vec<f64>,
        accept: impl Fn(f64) -> Result<(), &'static str>,
    ) -> MapResult<Box<[f64]>> {
        if values.len() != self.len() {
            return Err(MapError::LengthMismatch {
                table,
                expected: self.len(),
                actual: values.len(),
            });
        }
        for (index, &v) in values.iter().enumerate() {
            if !v.is_finite() {
                return Err(MapError::NonFinite { table, index });
            }
            accept(v).map_err(|what| MapError::OutOfRange { table, index, what })?;
        }
        Ok(values.into_boxed_slice())
    }
}
