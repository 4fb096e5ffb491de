//! Table interpolation primitive.

/// Piecewise-linear interpolation of `y` over the key table `x_data`.
///
/// - `x <= x_data[0]` returns `y[0]`
/// - `x >= x_data[n-1]` returns `y[n-1]`
/// - otherwise the bracketing interval is found by bisection and the result is
///   the convex combination of its two end values
///
/// `x_data` must hold at least two strictly increasing keys and `y` must have
/// the same length. This is only checked in debug builds; use [`crate::MapAxis`]
/// for a table that is validated once at construction.
pub fn interpolate(x: f64, y: &[f64], x_data: &[f64]) -> f64 {
    let n = x_data.len();
    debug_assert!(n >= 2, "interpolation table needs at least 2 points");
    debug_assert_eq!(y.len(), n, "key and value tables differ in length");
    debug_assert!(
        x_data.windows(2).all(|w| w[0] < w[1]),
        "interpolation keys must be strictly increasing"
    );

    if x <= x_data[0] {
        return y[0];
    }
    if x >= x_data[n - 1] {
        return y[n - 1];
    }

    let mut zs = 0;
    let mut zk = n - 1;
    while zk - zs > 1 {
        let z = (zs + zk) / 2;
        if x <= x_data[z] {
            zk = z;
        } else {
            zs = z;
        }
    }

    // Convex form keeps the knots exact (t = 0 or t = 1).
    let t = (x - x_data[zs]) / (x_data[zk] - x_data[zs]);
    y[zs] * (1.0 - t) + y[zk] * t
}
