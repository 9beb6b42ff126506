//! Row sampling policies that ignore class labels.

use std::fmt;

use log::debug;
use rand::RngCore;

use crate::config::validate_fraction;
use crate::config_error;
use crate::core::error::Result;
use crate::sampling::row_sample::RowSample;
use crate::sampling::selector::SubsetSelector;

/// Immutable per-ensemble policy that draws a fresh sample for each tree.
///
/// Implementations hold only read-only configuration, so one sampler can be
/// shared by every worker thread as long as each call gets its own generator.
pub trait RowSampler: Send + Sync + fmt::Debug {
    /// Draw the row sample for one tree.
    fn create_row_sample(&self, rng: &mut dyn RngCore) -> Result<RowSample>;

    /// Configured fraction of rows per tree.
    fn fraction(&self) -> f64;

    /// Number of rows in the table.
    fn nr_rows(&self) -> usize;

    /// Short name used in log output.
    fn name(&self) -> &'static str;
}

/// Rows to draw from a population of `nr_total` at `fraction`, rounded half up.
pub(crate) fn rounded_draw_count(fraction: f64, nr_total: usize) -> usize {
    (fraction * nr_total as f64).round() as usize
}

pub(crate) fn check_nr_rows(nr_rows: usize) -> Result<()> {
    if nr_rows == 0 {
        return Err(config_error!("cannot sample from an empty table"));
    }
    Ok(())
}

/// Uses every row exactly once; no subsampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultRowSampler {
    nr_rows: usize,
}

impl DefaultRowSampler {
    /// Sampler over a table of `nr_rows` rows.
    pub fn new(nr_rows: usize) -> Self {
        DefaultRowSampler { nr_rows }
    }
}

impl RowSampler for DefaultRowSampler {
    fn create_row_sample(&self, _rng: &mut dyn RngCore) -> Result<RowSample> {
        Ok(RowSample::all(self.nr_rows))
    }

    fn fraction(&self) -> f64 {
        1.0
    }

    fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    fn name(&self) -> &'static str {
        "default"
    }
}

/// Draws `round(fraction * nr_rows)` rows from the whole table.
///
/// Valid for classification and regression targets alike.
#[derive(Debug, Clone)]
pub struct RandomRowSampler<S> {
    fraction: f64,
    selector: S,
    nr_rows: usize,
    nr_select: usize,
}

impl<S: SubsetSelector> RandomRowSampler<S> {
    /// Create the sampler; fails when the fraction selects no row at all.
    pub fn new(fraction: f64, selector: S, nr_rows: usize) -> Result<Self> {
        validate_fraction(fraction)?;
        check_nr_rows(nr_rows)?;

        let nr_select = rounded_draw_count(fraction, nr_rows);
        if nr_select == 0 {
            return Err(config_error!(
                "data_fraction {} selects no row out of {}",
                fraction,
                nr_rows
            ));
        }

        debug!(
            "Random row sampler: {} of {} rows per tree ({})",
            nr_select,
            nr_rows,
            selector.name()
        );

        Ok(RandomRowSampler {
            fraction,
            selector,
            nr_rows,
            nr_select,
        })
    }

    /// Rows drawn for every tree.
    pub fn nr_select(&self) -> usize {
        self.nr_select
    }
}

impl<S: SubsetSelector> RowSampler for RandomRowSampler<S> {
    fn create_row_sample(&self, rng: &mut dyn RngCore) -> Result<RowSample> {
        self.selector.select(self.nr_rows, self.nr_select, rng)
    }

    fn fraction(&self) -> f64 {
        self.fraction
    }

    fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::SamplingError;
    use crate::sampling::selector::{NoReplacementSelector, WithReplacementSelector};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rounded_draw_count() {
        assert_eq!(rounded_draw_count(0.5, 10), 5);
        assert_eq!(rounded_draw_count(0.25, 10), 3);
        assert_eq!(rounded_draw_count(0.04, 10), 0);
        assert_eq!(rounded_draw_count(1.0, 7), 7);
    }

    #[test]
    fn test_default_sampler_ignores_rng() {
        let sampler = DefaultRowSampler::new(8);
        for seed in 0..3 {
            let mut rng = StdRng::seed_from_u64(seed);
            let sample = sampler.create_row_sample(&mut rng).unwrap();
            assert_eq!(sample, RowSample::all(8));
        }
        assert_eq!(sampler.fraction(), 1.0);
    }

    #[test]
    fn test_random_sampler_no_replacement() {
        let sampler = RandomRowSampler::new(0.3, NoReplacementSelector, 20).unwrap();
        assert_eq!(sampler.nr_select(), 6);

        let mut rng = StdRng::seed_from_u64(42);
        let sample = sampler.create_row_sample(&mut rng).unwrap();
        assert_eq!(sample.nr_rows(), 20);
        assert_eq!(sample.nr_included(), 6);
        assert_eq!(sample.fraction(), 6.0 / 20.0);
    }

    #[test]
    fn test_random_sampler_with_replacement() {
        let sampler = RandomRowSampler::new(1.0, WithReplacementSelector, 20).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let sample = sampler.create_row_sample(&mut rng).unwrap();
        assert_eq!(sample.nr_draws(), 20);
        assert_eq!(sample.fraction(), 1.0);
    }

    #[test]
    fn test_random_sampler_rejects_empty_draw() {
        let err = RandomRowSampler::new(0.01, NoReplacementSelector, 10).unwrap_err();
        assert!(matches!(err, SamplingError::Config { .. }));
        assert!(RandomRowSampler::new(0.5, NoReplacementSelector, 0).is_err());
        assert!(RandomRowSampler::new(1.5, NoReplacementSelector, 10).is_err());
    }
}
