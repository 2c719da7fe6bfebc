//! Two-point linear interpolation.

use crate::error::{MathError, MathResult};

/// Evaluates the straight line through `(x0, y0)` and `(x1, y1)` at `x`.
///
/// `x` may lie outside `[x0, x1]`, in which case the line is extended. The
/// weighted form `(1 - w) * y0 + w * y1` returns `y0` at `x0` and `y1` at
/// `x1` exactly.
///
/// # Errors
///
/// Returns `MathError::InvalidInput` if `x0 == x1` or any argument is not
/// finite.
///
/// # Example
///
/// ```rust
/// use parity_math::interpolation::linear;
///
/// let y = linear(1.0, 4.0, 3.0, 5.0, 2.0).unwrap();
/// assert!((y - 4.5).abs() < 1e-12);
/// ```
pub fn linear(x0: f64, y0: f64, x1: f64, y1: f64, x: f64) -> MathResult<f64> {
    if ![x0, y0, x1, y1, x].iter().all(|v| v.is_finite()) {
        return Err(MathError::invalid_input(
            "interpolation inputs must be finite",
        ));
    }

    let span = x1 - x0;
    if span == 0.0 {
        return Err(MathError::invalid_input(format!(
            "cannot interpolate between two points at x = {x0}"
        )));
    }

    let w = (x - x0) / span;
    Ok((1.0 - w) * y0 + w * y1)
}
