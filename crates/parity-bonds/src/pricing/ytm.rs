//! Yield-to-maturity from price.

use log::debug;
use parity_math::solvers::{NewtonSolver, RootFinder, SolverConfig};
use parity_math::MathError;
use serde::Serialize;

use crate::cashflows::vanilla_bond_cashflows;
use crate::error::{BondError, BondResult};
use crate::terms::BondTerms;

use super::yield_pv::{discount_at_yield, numerical_domain};

/// Default convergence threshold on the squared pricing error.
pub const YTM_TOLERANCE: f64 = 1e-16;

/// Default iteration cap.
pub const YTM_MAX_ITERATIONS: u32 = 200;

/// Default starting yield, in percent.
pub const YTM_INITIAL_GUESS: f64 = 1.0;

/// Result of a yield calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YieldResult {
    /// The calculated yield in percent (5.0 = 5%).
    pub yield_value: f64,
    /// Number of iterations to converge.
    pub iterations: u32,
    /// Final squared pricing error.
    pub residual: f64,
}

/// Yield-to-maturity solver.
///
/// Finds the root of `(price - pv_from_yield(y))^2` with a [`RootFinder`],
/// starting from [`YTM_INITIAL_GUESS`]. A trial yield at or below -100% has no
/// real present value; the objective reports it as a domain error and the
/// root finder is expected to back off from it.
///
/// # Example
///
/// ```rust
/// use parity_bonds::pricing::{pv_from_yield, YtmSolver};
/// use parity_bonds::terms::BondTerms;
/// use parity_core::Date;
///
/// let terms = BondTerms::builder()
///     .as_of(Date::from_ymd(2025, 4, 17).unwrap())
///     .maturity(Date::from_ymd(2048, 9, 25).unwrap())
///     .coupon_rate(4.0)
///     .build()
///     .unwrap();
///
/// let result = YtmSolver::new().solve(89.0, &terms).unwrap();
/// let pv = pv_from_yield(result.yield_value, &terms).unwrap();
/// assert!((pv - 89.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct YtmSolver<R: RootFinder = NewtonSolver> {
    root_finder: R,
    config: SolverConfig,
    initial_guess: f64,
}

impl Default for YtmSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YtmSolver {
    /// Creates a solver using Newton-Raphson with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_root_finder(NewtonSolver)
    }
}

impl<R: RootFinder> YtmSolver<R> {
    /// Creates a solver around a specific root finder.
    #[must_use]
    pub fn with_root_finder(root_finder: R) -> Self {
        Self {
            root_finder,
            config: SolverConfig::new(YTM_TOLERANCE, YTM_MAX_ITERATIONS),
            initial_guess: YTM_INITIAL_GUESS,
        }
    }

    /// Replaces the solver configuration.
    #[must_use]
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the solver tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Sets the starting yield in percent.
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves for the yield at which the bond is worth `price`.
    ///
    /// # Errors
    ///
    /// - `BondError::Domain` if `price` is not finite
    /// - `BondError::NumericalDomain` if the root finder could not get away
    ///   from yields with no real present value
    /// - `BondError::PriceUnreachable` if the present value stops responding
    ///   to yield, as when the only cashflow falls on the as-of date
    /// - `BondError::YieldConvergenceFailed` if the iteration did not converge
    pub fn solve(&self, price: f64, terms: &BondTerms) -> BondResult<YieldResult> {
        if !price.is_finite() {
            return Err(BondError::domain("price", format!("must be finite, got {price}")));
        }

        let cashflows = vanilla_bond_cashflows(terms)?;
        let objective = |y: f64| {
            discount_at_yield(&cashflows, y)
                .map(|pv| (price - pv).powi(2))
                .ok_or_else(|| MathError::domain(y, "no real present value at this yield"))
        };

        let result = self
            .root_finder
            .find_root(objective, self.initial_guess, &self.config)
            .map_err(|e| match e {
                MathError::Domain { x, .. } => numerical_domain(x, terms),
                MathError::DivisionByZero { .. } => BondError::PriceUnreachable {
                    price,
                    as_of: terms.as_of(),
                    maturity: terms.maturity(),
                    coupon_rate: terms.coupon_rate(),
                },
                MathError::ConvergenceFailed {
                    iterations,
                    residual,
                } => BondError::YieldConvergenceFailed {
                    iterations,
                    residual,
                },
                other => BondError::MathError(other),
            })?;

        debug!(
            "{} converged to yield {} in {} iterations (residual {:e})",
            self.root_finder.name(),
            result.root,
            result.iterations,
            result.residual
        );

        Ok(YieldResult {
            yield_value: result.root,
            iterations: result.iterations,
            residual: result.residual,
        })
    }
}

/// Yield to maturity, in percent, for a bond trading at `price`.
///
/// Uses [`YtmSolver::default`].
pub fn ytm_from_price(price: f64, terms: &BondTerms) -> BondResult<f64> {
    YtmSolver::new()
        .solve(price, terms)
        .map(|result| result.yield_value)
}
