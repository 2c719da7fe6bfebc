//! Pricing configuration.
//!
//! [`PricingConfig`] collects the settings a caller usually wants to fix once
//! (coupon frequency, day-count basis, principal, solver limits) and can be
//! deserialized from a file. Every field has a default, so an empty document
//! is a valid configuration.
//!
//! ```toml
//! frequency = 2
//! days_per_year = 365
//! principal = 100.0
//!
//! [solver]
//! tolerance = 1e-16
//! max_iterations = 200
//! ```

use parity_core::daycounts::DEFAULT_DAYS_PER_YEAR;
use parity_math::solvers::SolverConfig;
use serde::{Deserialize, Serialize};

use crate::conventions::{CouponConvention, DEFAULT_FREQUENCY};
use crate::error::BondResult;
use crate::pricing::{YtmSolver, YTM_MAX_ITERATIONS, YTM_TOLERANCE};
use crate::terms::DEFAULT_PRINCIPAL;

/// Settings for the yield solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverSettings {
    /// Convergence threshold on the squared pricing error.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Maximum solver iterations.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

impl From<SolverSettings> for SolverConfig {
    fn from(settings: SolverSettings) -> Self {
        SolverConfig::new(settings.tolerance, settings.max_iterations)
    }
}

/// Pricing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Coupons per year.
    #[serde(default = "default_frequency")]
    pub frequency: u32,

    /// Day-count denominator.
    #[serde(default = "default_days_per_year")]
    pub days_per_year: u32,

    /// Redemption amount.
    #[serde(default = "default_principal")]
    pub principal: f64,

    /// Yield solver settings.
    #[serde(default)]
    pub solver: SolverSettings,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            frequency: default_frequency(),
            days_per_year: default_days_per_year(),
            principal: default_principal(),
            solver: SolverSettings::default(),
        }
    }
}

impl PricingConfig {
    /// Validates frequency and day count into a [`CouponConvention`].
    pub fn convention(&self) -> BondResult<CouponConvention> {
        CouponConvention::new(self.frequency, self.days_per_year)
    }

    /// Builds a yield solver from the solver settings.
    ///
    /// # Errors
    ///
    /// Returns `BondError::MathError` if the tolerance is not positive or the
    /// iteration cap is zero.
    pub fn ytm_solver(&self) -> BondResult<YtmSolver> {
        let config = SolverConfig::from(self.solver);
        config.validate()?;
        Ok(YtmSolver::new().with_config(config))
    }
}

fn default_frequency() -> u32 {
    DEFAULT_FREQUENCY
}

fn default_days_per_year() -> u32 {
    DEFAULT_DAYS_PER_YEAR
}

fn default_principal() -> f64 {
    DEFAULT_PRINCIPAL
}

fn default_tolerance() -> f64 {
    YTM_TOLERANCE
}

fn default_max_iterations() -> u32 {
    YTM_MAX_ITERATIONS
}
