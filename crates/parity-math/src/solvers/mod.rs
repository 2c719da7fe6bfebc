//! Root-finding algorithms.
//!
//! Bond code never talks to a concrete algorithm: it hands an objective and
//! an initial guess to something implementing [`RootFinder`]. The solver's
//! own limits (tolerance, iteration cap) travel in [`SolverConfig`].
//!
//! - [`NewtonSolver`] / [`newton_raphson_numerical`]: Newton-Raphson with a
//!   central-difference derivative and step halving
//!
//! # Example
//!
//! ```rust
//! use parity_math::solvers::{NewtonSolver, RootFinder, SolverConfig};
//!
//! let f = |x: f64| Ok(x * x - 2.0);
//! let result = NewtonSolver.find_root(f, 1.5, &SolverConfig::default()).unwrap();
//! assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-8);
//! ```

mod newton;

pub use newton::{newton_raphson_numerical, NewtonSolver};

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
///
/// Deserializes from partial input; missing fields take the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Convergence threshold on `|f(x)|` and on the step size.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks that the tolerance is positive and finite and that at least
    /// one iteration is allowed.
    pub fn validate(&self) -> MathResult<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(MathError::invalid_input(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(MathError::invalid_input("max_iterations must be at least 1"));
        }
        Ok(())
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}

/// Trait for root-finding algorithms.
///
/// The objective is fallible: returning [`MathError::Domain`] marks a point
/// where the function is undefined. How a solver reacts to that is its own
/// business, but it must never turn the failure into a number.
pub trait RootFinder: Send + Sync {
    /// Finds a root of `f` starting from `initial_guess`.
    fn find_root<F>(
        &self,
        f: F,
        initial_guess: f64,
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> MathResult<f64>;

    /// Returns the name of the solver.
    fn name(&self) -> &'static str;
}
