//! Row sampling configuration and builder.
//!
//! The configuration is read once when an ensemble is set up and handed to
//! [`RowSamplerFactory::create_from_config`](crate::sampling::RowSamplerFactory::create_from_config).

use crate::config_error;
use crate::core::constants::*;
use crate::core::error::{Result, SamplingError};
use crate::core::types::RowSamplingMode;

use serde::{Deserialize, Serialize};

/// Per-tree row sampling settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// How rows are distributed over the sample
    pub mode: RowSamplingMode,
    /// Fraction of rows drawn per tree, in (0.0, 1.0]
    pub data_fraction: f64,
    /// Draw rows with replacement (bootstrap)
    pub draw_with_replacement: bool,
    /// Base seed from which per-tree generators are derived
    pub seed: u64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        SamplingConfig {
            mode: DEFAULT_ROW_SAMPLING_MODE,
            data_fraction: DEFAULT_DATA_FRACTION,
            draw_with_replacement: DEFAULT_DRAW_WITH_REPLACEMENT,
            seed: DEFAULT_SAMPLING_SEED,
        }
    }
}

/// Reject a fraction outside (0.0, 1.0].
pub fn validate_fraction(fraction: f64) -> Result<()> {
    if !fraction.is_finite() || fraction <= 0.0 || fraction > 1.0 {
        return Err(config_error!(
            "data_fraction must be in range (0.0, 1.0], got {}",
            fraction
        ));
    }
    Ok(())
}

impl SamplingConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate all parameters
    pub fn validate(&self) -> Result<()> {
        validate_fraction(self.data_fraction)
    }
}

/// Builder for [`SamplingConfig`] that collects every validation problem.
#[derive(Debug, Default)]
pub struct SamplingConfigBuilder {
    config: SamplingConfig,
    validation_errors: Vec<String>,
}

impl SamplingConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set row sampling mode
    pub fn mode(mut self, mode: RowSamplingMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Set fraction of rows per tree
    pub fn data_fraction(mut self, fraction: f64) -> Self {
        if let Err(err) = validate_fraction(fraction) {
            self.validation_errors.push(err.to_string());
        }
        self.config.data_fraction = fraction;
        self
    }

    /// Draw with or without replacement
    pub fn draw_with_replacement(mut self, with_replacement: bool) -> Self {
        self.config.draw_with_replacement = with_replacement;
        self
    }

    /// Set base seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<SamplingConfig> {
        if !self.validation_errors.is_empty() {
            return Err(SamplingError::config(format!(
                "Configuration validation failed: {}",
                self.validation_errors.join(", ")
            )));
        }

        self.config.validate()?;
        Ok(self.config)
    }
}
