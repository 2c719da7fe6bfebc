//! Newton-Raphson root-finding with a numerical derivative.

use log::trace;

use crate::error::{MathError, MathResult};
use crate::solvers::{RootFinder, SolverConfig, SolverResult};

/// Relative bump used for the central-difference derivative.
const DERIVATIVE_STEP: f64 = 1e-6;

/// Derivatives smaller than this are treated as a flat function.
const MIN_DERIVATIVE: f64 = 1e-300;

/// How many times a Newton step may be halved before the iteration gives up.
const MAX_STEP_HALVINGS: u32 = 60;

/// Newton-Raphson root-finding using a numerical derivative.
///
/// Each iteration takes the step `f(x) / f'(x)`, where `f'` comes from a
/// central difference with bump `1e-6 * max(1, |x|)`. The step is halved until
/// the trial point is inside the function's domain and strictly reduces
/// `|f|`; this keeps objectives like `(price - pv(y))^2` from jumping into a
/// region where `pv` is undefined.
///
/// Converges when `|f(x)| <= tolerance` or when an accepted step is smaller
/// than `tolerance`.
///
/// # Errors
///
/// - [`MathError::InvalidInput`] if `config` is invalid
/// - [`MathError::Domain`] if `f` is undefined at `initial_guess`, or if every
///   halved trial step lands outside the domain
/// - [`MathError::DivisionByZero`] if the derivative vanishes
/// - [`MathError::ConvergenceFailed`] if no descent step exists or the
///   iteration limit is reached
///
/// # Example
///
/// ```rust
/// use parity_math::solvers::{newton_raphson_numerical, SolverConfig};
///
/// let f = |x: f64| Ok(x * x * x - x - 2.0);
/// let result = newton_raphson_numerical(f, 1.5, &SolverConfig::default()).unwrap();
/// assert!(result.residual.abs() < 1e-10);
/// ```
pub fn newton_raphson_numerical<F>(
    f: F,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> MathResult<f64>,
{
    config.validate()?;

    let mut x = initial_guess;
    let mut fx = evaluate(&f, x)?;

    if fx.abs() <= config.tolerance {
        return Ok(SolverResult {
            root: x,
            iterations: 0,
            residual: fx,
        });
    }

    for iteration in 1..=config.max_iterations {
        let dfx = derivative(&f, x, fx)?;
        if dfx.abs() < MIN_DERIVATIVE {
            return Err(MathError::DivisionByZero { value: dfx });
        }

        let full_step = fx / dfx;
        let mut scale = 1.0;
        let mut accepted = None;
        let mut last_domain_error = None;

        for _ in 0..MAX_STEP_HALVINGS {
            let step = scale * full_step;
            let trial = x - step;
            match evaluate(&f, trial) {
                Ok(f_trial) if f_trial.abs() < fx.abs() => {
                    accepted = Some((trial, f_trial, step));
                    break;
                }
                Ok(_) => {}
                Err(e) if e.is_domain() => last_domain_error = Some(e),
                Err(e) => return Err(e),
            }
            scale *= 0.5;
        }

        let Some((x_new, f_new, step)) = accepted else {
            return Err(last_domain_error
                .unwrap_or_else(|| MathError::convergence_failed(iteration, fx.abs())));
        };

        trace!("newton iteration {iteration}: x = {x_new}, f(x) = {f_new:e}, step = {step:e}");

        x = x_new;
        fx = f_new;

        if fx.abs() <= config.tolerance || step.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }
    }

    Err(MathError::convergence_failed(config.max_iterations, fx.abs()))
}

/// Evaluates `f`, treating non-finite output as outside the domain.
fn evaluate<F>(f: &F, x: f64) -> MathResult<f64>
where
    F: Fn(f64) -> MathResult<f64>,
{
    let value = f(x)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MathError::domain(x, format!("non-finite function value {value}")))
    }
}

/// Central difference, falling back to a one-sided difference when one
/// neighbour is outside the domain.
fn derivative<F>(f: &F, x: f64, fx: f64) -> MathResult<f64>
where
    F: Fn(f64) -> MathResult<f64>,
{
    let h = DERIVATIVE_STEP * x.abs().max(1.0);

    match (evaluate(f, x + h), evaluate(f, x - h)) {
        (Ok(up), Ok(down)) => Ok((up - down) / (2.0 * h)),
        (Ok(up), Err(e)) if e.is_domain() => Ok((up - fx) / h),
        (Err(e), Ok(down)) if e.is_domain() => Ok((fx - down) / h),
        (Err(e), _) | (_, Err(e)) => Err(e),
    }
}

/// Newton-Raphson solver implementing [`RootFinder`].
///
/// Thin wrapper over [`newton_raphson_numerical`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonSolver;

impl RootFinder for NewtonSolver {
    fn find_root<F>(
        &self,
        f: F,
        initial_guess: f64,
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> MathResult<f64>,
    {
        newton_raphson_numerical(f, initial_guess, config)
    }

    fn name(&self) -> &'static str {
        "Newton-Raphson"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| Ok(x * x - 2.0);

        let result = newton_raphson_numerical(f, 1.5, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-9);
        assert!(result.iterations < 10);
    }

    #[test]
    fn test_cubic() {
        // x^3 - x - 2 = 0 has a root near 1.52
        let f = |x: f64| Ok(x * x * x - x - 2.0);

        let result = newton_raphson_numerical(f, 1.5, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 1.521_379_706_804_567_6, epsilon = 1e-9);
    }

    #[test]
    fn test_already_at_root() {
        let f = |x: f64| Ok(x - 3.0);

        let result = newton_raphson_numerical(f, 3.0, &SolverConfig::default()).unwrap();

        assert_eq!(result.iterations, 0);
        assert_relative_eq!(result.root, 3.0);
    }

    #[test]
    fn test_zero_derivative() {
        let f = |_: f64| Ok(1.0);

        let result = newton_raphson_numerical(f, 0.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::DivisionByZero { .. })));
    }

    #[test]
    fn test_invalid_initial_point() {
        let f = |x: f64| {
            if x < 0.0 {
                Err(MathError::domain(x, "negative"))
            } else {
                Ok(x.sqrt() - 1.0)
            }
        };

        let result = newton_raphson_numerical(f, -1.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::Domain { .. })));
    }

    #[test]
    fn test_step_halving_stays_in_domain() {
        // From x = 2000 the full Newton step lands at x < 0 and has to be
        // halved back into the domain.
        let f = |x: f64| {
            if x <= 0.0 {
                Err(MathError::domain(x, "log of non-positive"))
            } else {
                Ok(x.ln() - 5.0)
            }
        };

        let result = newton_raphson_numerical(f, 2000.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 5.0_f64.exp(), epsilon = 1e-7);
    }

    #[test]
    fn test_non_finite_values_are_domain_errors() {
        let f = |x: f64| Ok(if x > 2.0 { f64::NAN } else { x - 1.0 });

        let result = newton_raphson_numerical(f, 3.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::Domain { .. })));
    }

    #[test]
    fn test_no_real_root() {
        // x^2 + 1 never reaches zero; the iteration stalls at the minimum.
        let f = |x: f64| Ok(x * x + 1.0);
        let config = SolverConfig::new(1e-12, 50);

        let result = newton_raphson_numerical(f, 3.0, &config);

        assert!(result.is_err());
    }

    #[test]
    fn test_iteration_limit() {
        let f = |x: f64| Ok(x * x - 2.0);
        let config = SolverConfig::new(1e-15, 1);

        let result = newton_raphson_numerical(f, 100.0, &config);

        assert!(matches!(
            result,
            Err(MathError::ConvergenceFailed { iterations: 1, .. })
        ));
    }

    #[test]
    fn test_other_errors_propagate() {
        let f = |_: f64| -> MathResult<f64> { Err(MathError::invalid_input("broken")) };

        let result = newton_raphson_numerical(f, 1.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::InvalidInput { .. })));
    }
}
