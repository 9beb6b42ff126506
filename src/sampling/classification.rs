//! Class-aware row sampling policies.
//!
//! Rows arrive grouped into one contiguous block per class. Each block is
//! sampled on its own with the configured selector, and the per-class draws
//! are merged into one sample over the whole table by
//! [`SubsetSelector::combine`].

use log::{debug, trace, warn};
use rand::RngCore;

use crate::config::validate_fraction;
use crate::config_error;
use crate::core::error::{Result, SamplingError};
use crate::core::types::{ClassIndex, RowIndex};
use crate::dataset::target::{bucket_size, class_offsets};
use crate::sampling::row_sample::RowSample;
use crate::sampling::row_sampler::{check_nr_rows, rounded_draw_count, RowSampler};
use crate::sampling::selector::SubsetSelector;

/// Start row of each class block plus the table size.
///
/// Invariant: `offsets[0] == 0`, offsets strictly increase and the last one
/// is below `nr_rows`, so every bucket holds at least one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassBuckets {
    offsets: Vec<RowIndex>,
    nr_rows: usize,
}

impl ClassBuckets {
    /// Derive the buckets from per-class frequencies in block order.
    pub fn from_frequencies(class_frequencies: &[usize]) -> Result<Self> {
        let offsets = class_offsets(class_frequencies)?;
        let nr_rows = class_frequencies.iter().sum();
        Ok(ClassBuckets { offsets, nr_rows })
    }

    /// Use precomputed offsets; checks the bucket invariant.
    pub fn from_offsets(offsets: Vec<RowIndex>, nr_rows: usize) -> Result<Self> {
        check_nr_rows(nr_rows)?;
        match offsets.first() {
            None => return Err(SamplingError::invalid_target("no classes given")),
            Some(&first) if first != 0 => {
                return Err(SamplingError::invalid_target(format!(
                    "first class must start at row 0, starts at {}",
                    first
                )))
            }
            Some(_) => {}
        }
        for (class, pair) in offsets.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(SamplingError::invalid_target(format!(
                    "class {} has no rows (offsets {} and {})",
                    class, pair[0], pair[1]
                )));
            }
        }
        if let Some(&last) = offsets.last() {
            if last >= nr_rows {
                return Err(SamplingError::invalid_target(format!(
                    "last class starts at {} but the table has {} rows",
                    last, nr_rows
                )));
            }
        }
        Ok(ClassBuckets { offsets, nr_rows })
    }

    /// Start row of every class.
    pub fn offsets(&self) -> &[RowIndex] {
        &self.offsets
    }

    /// Number of rows in the table.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of classes.
    pub fn nr_classes(&self) -> usize {
        self.offsets.len()
    }

    /// Number of rows in the block of `class`.
    pub fn size(&self, class: ClassIndex) -> usize {
        bucket_size(&self.offsets, class, self.nr_rows)
    }

    /// Sizes of all blocks in class order.
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.nr_classes()).map(move |class| self.size(class))
    }

    /// Size of the smallest class.
    pub fn min_size(&self) -> usize {
        self.sizes().min().unwrap_or(0)
    }

    /// Sample every bucket independently and merge the results.
    ///
    /// `draw_count` maps `(class, bucket size)` to the rows drawn from that
    /// bucket. A bucket with zero draws contributes nothing.
    fn draw<S, F>(&self, selector: &S, rng: &mut dyn RngCore, draw_count: F) -> Result<RowSample>
    where
        S: SubsetSelector + ?Sized,
        F: Fn(ClassIndex, usize) -> usize,
    {
        let mut locals = Vec::with_capacity(self.nr_classes());
        for class in 0..self.nr_classes() {
            let size = self.size(class);
            let nr_select = draw_count(class, size);
            trace!("class {}: drawing {} of {} rows", class, nr_select, size);
            let local = if nr_select == 0 {
                selector.empty(size)
            } else {
                selector.select(size, nr_select, rng)?
            };
            locals.push(local);
        }
        selector.combine(&locals, &self.offsets, self.nr_rows)
    }
}

/// Applies the same fraction to every class, keeping class proportions.
#[derive(Debug, Clone)]
pub struct StratifiedRowSampler<S> {
    fraction: f64,
    selector: S,
    buckets: ClassBuckets,
}

impl<S: SubsetSelector> StratifiedRowSampler<S> {
    /// Create the sampler from per-class frequencies.
    pub fn new(fraction: f64, selector: S, class_frequencies: &[usize]) -> Result<Self> {
        Self::with_buckets(fraction, selector, ClassBuckets::from_frequencies(class_frequencies)?)
    }

    /// Create the sampler from prepared class buckets.
    pub fn with_buckets(fraction: f64, selector: S, buckets: ClassBuckets) -> Result<Self> {
        validate_fraction(fraction)?;
        check_nr_rows(buckets.nr_rows())?;

        let mut nr_draws = 0;
        for (class, size) in buckets.sizes().enumerate() {
            let nr_select = rounded_draw_count(fraction, size);
            if nr_select == 0 {
                warn!(
                    "Stratified sampling at fraction {} draws no row from class {} ({} rows)",
                    fraction, class, size
                );
            }
            nr_draws += nr_select;
        }
        if nr_draws == 0 {
            return Err(config_error!(
                "data_fraction {} draws no row from any of the {} classes",
                fraction,
                buckets.nr_classes()
            ));
        }
        debug!(
            "Stratified row sampler: fraction {} over {} classes, {} rows ({})",
            fraction,
            buckets.nr_classes(),
            buckets.nr_rows(),
            selector.name()
        );

        Ok(StratifiedRowSampler {
            fraction,
            selector,
            buckets,
        })
    }

    /// Start row of every class.
    pub fn offsets(&self) -> &[RowIndex] {
        self.buckets.offsets()
    }
}

impl<S: SubsetSelector> RowSampler for StratifiedRowSampler<S> {
    fn create_row_sample(&self, rng: &mut dyn RngCore) -> Result<RowSample> {
        let fraction = self.fraction;
        self.buckets
            .draw(&self.selector, rng, |_, size| rounded_draw_count(fraction, size))
    }

    fn fraction(&self) -> f64 {
        self.fraction
    }

    fn nr_rows(&self) -> usize {
        self.buckets.nr_rows()
    }

    fn name(&self) -> &'static str {
        "stratified"
    }
}

/// Draws the same number of rows from every class.
///
/// The count is `round(fraction * smallest class size)`, so the sample is
/// class-balanced whatever the skew of the table.
#[derive(Debug, Clone)]
pub struct EqualSizeRowSampler<S> {
    fraction: f64,
    selector: S,
    buckets: ClassBuckets,
    minority_contribution: usize,
}

impl<S: SubsetSelector> EqualSizeRowSampler<S> {
    /// Create the sampler from per-class frequencies.
    pub fn new(fraction: f64, selector: S, class_frequencies: &[usize]) -> Result<Self> {
        Self::with_buckets(fraction, selector, ClassBuckets::from_frequencies(class_frequencies)?)
    }

    /// Create the sampler from prepared class buckets.
    pub fn with_buckets(fraction: f64, selector: S, buckets: ClassBuckets) -> Result<Self> {
        validate_fraction(fraction)?;
        check_nr_rows(buckets.nr_rows())?;

        let min_size = buckets.min_size();
        let minority_contribution = rounded_draw_count(fraction, min_size);
        if minority_contribution == 0 {
            return Err(config_error!(
                "data_fraction {} draws no row from the smallest class ({} rows)",
                fraction,
                min_size
            ));
        }

        debug!(
            "Equal size row sampler: {} rows from each of {} classes ({})",
            minority_contribution,
            buckets.nr_classes(),
            selector.name()
        );

        Ok(EqualSizeRowSampler {
            fraction,
            selector,
            buckets,
            minority_contribution,
        })
    }

    /// Rows drawn from every class.
    pub fn minority_contribution(&self) -> usize {
        self.minority_contribution
    }

    /// Start row of every class.
    pub fn offsets(&self) -> &[RowIndex] {
        self.buckets.offsets()
    }
}

impl<S: SubsetSelector> RowSampler for EqualSizeRowSampler<S> {
    fn create_row_sample(&self, rng: &mut dyn RngCore) -> Result<RowSample> {
        let per_class = self.minority_contribution;
        self.buckets.draw(&self.selector, rng, |_, _| per_class)
    }

    fn fraction(&self) -> f64 {
        self.fraction
    }

    fn nr_rows(&self) -> usize {
        self.buckets.nr_rows()
    }

    fn name(&self) -> &'static str {
        "equal_size"
    }
}
