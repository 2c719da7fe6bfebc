//! Pricing configuration loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use parity_bonds::config::PricingConfig;
use tracing::debug;

use crate::error::CliError;

/// Loads the pricing configuration from `path`, or the defaults when no file
/// is given.
///
/// The file's coupon convention and solver settings are validated here so a
/// bad file fails before any command runs.
pub fn load(path: Option<&Path>) -> Result<PricingConfig> {
    let Some(path) = path else {
        debug!("no configuration file given, using defaults");
        return Ok(PricingConfig::default());
    };

    let text = fs::read_to_string(path).map_err(|e| CliError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let config: PricingConfig = toml::from_str(&text).map_err(|e| CliError::Config {
        path: path.to_path_buf(),
        reason: e.message().to_string(),
    })?;

    config
        .convention()
        .with_context(|| format!("invalid coupon convention in {}", path.display()))?;
    config
        .ytm_solver()
        .with_context(|| format!("invalid solver settings in {}", path.display()))?;

    debug!(path = %path.display(), ?config, "loaded configuration");
    Ok(config)
}
