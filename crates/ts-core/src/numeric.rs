use crate::TsError;

/// Floating point type used throughout the model
pub type Real = f64;

/// Absolute and relative tolerance for comparing model outputs.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    /// True if `a` and `b` differ by at most `abs`, or by at most `rel`
    /// of the larger magnitude.
    pub fn accepts(&self, a: Real, b: Real) -> bool {
        let diff = (a - b).abs();
        diff <= self.abs || diff <= self.rel * a.abs().max(b.abs())
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    tol.accepts(a, b)
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, TsError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TsError::NonFinite { what, value: v })
    }
}

/// Finite and strictly positive, e.g. an absolute temperature or pressure.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, TsError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(TsError::InvalidArg { what })
    }
}

/// A loss or efficiency factor in (0, 1].
pub fn ensure_fraction(v: Real, what: &'static str) -> Result<Real, TsError> {
    let v = ensure_positive(v, what)?;
    if v <= 1.0 {
        Ok(v)
    } else {
        Err(TsError::OutOfRange {
            what,
            value: v,
            min: 0.0,
            max: 1.0,
        })
    }
}
