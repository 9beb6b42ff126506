//! Builds the row sampler matching a target column and sampling settings.

use log::{debug, info};

use crate::config::{validate_fraction, SamplingConfig};
use crate::core::constants::FRACTION_EPSILON;
use crate::core::error::{Result, SamplingError};
use crate::core::types::RowSamplingMode;
use crate::dataset::target::TargetColumn;
use crate::sampling::classification::{EqualSizeRowSampler, StratifiedRowSampler};
use crate::sampling::row_sampler::{
    check_nr_rows, DefaultRowSampler, RandomRowSampler, RowSampler,
};
use crate::sampling::selector::{NoReplacementSelector, SubsetSelector, WithReplacementSelector};

/// Construction logic for [`RowSampler`]s. Holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowSamplerFactory;

impl RowSamplerFactory {
    /// Create the sampler for `target`.
    ///
    /// Fails with an invalid argument error when `mode` needs a nominal
    /// target and `target` is numeric, and with a configuration error when
    /// `fraction` is outside (0, 1] or the table is empty.
    /// Drawing the whole table without replacement is "no subsampling" and
    /// yields a [`DefaultRowSampler`] for every mode except equal size.
    pub fn create(
        target: &TargetColumn,
        mode: RowSamplingMode,
        fraction: f64,
        draw_with_replacement: bool,
    ) -> Result<Box<dyn RowSampler>> {
        validate_fraction(fraction)?;

        if mode.requires_nominal_target() && !target.is_nominal() {
            return Err(SamplingError::invalid_argument(
                "mode",
                mode,
                "requires a nominal target column",
            ));
        }

        let nr_rows = target.nr_rows();
        check_nr_rows(nr_rows)?;
        if mode != RowSamplingMode::EqualSize
            && !draw_with_replacement
            && (fraction - 1.0).abs() < FRACTION_EPSILON
        {
            info!(
                "Sampling all {} rows without replacement; row sampling disabled",
                nr_rows
            );
            return Ok(Box::new(DefaultRowSampler::new(nr_rows)));
        }

        debug!(
            "Creating {} row sampler: fraction {}, with replacement: {}",
            mode, fraction, draw_with_replacement
        );

        if draw_with_replacement {
            Self::create_with_selector(target, mode, fraction, WithReplacementSelector)
        } else {
            Self::create_with_selector(target, mode, fraction, NoReplacementSelector)
        }
    }

    /// Create the sampler described by `config`.
    pub fn create_from_config(
        target: &TargetColumn,
        config: &SamplingConfig,
    ) -> Result<Box<dyn RowSampler>> {
        Self::create(
            target,
            config.mode,
            config.data_fraction,
            config.draw_with_replacement,
        )
    }

    fn create_with_selector<S>(
        target: &TargetColumn,
        mode: RowSamplingMode,
        fraction: f64,
        selector: S,
    ) -> Result<Box<dyn RowSampler>>
    where
        S: SubsetSelector + 'static,
    {
        match (mode, target.class_frequencies()) {
            (RowSamplingMode::Random, _) => Ok(Box::new(RandomRowSampler::new(
                fraction,
                selector,
                target.nr_rows(),
            )?)),
            (RowSamplingMode::Stratified, Some(frequencies)) => Ok(Box::new(
                StratifiedRowSampler::new(fraction, selector, frequencies)?,
            )),
            (RowSamplingMode::EqualSize, Some(frequencies)) => Ok(Box::new(
                EqualSizeRowSampler::new(fraction, selector, frequencies)?,
            )),
            (_, None) => Err(SamplingError::internal(format!(
                "{} sampler requested for a numeric target",
                mode
            ))),
        }
    }
}
