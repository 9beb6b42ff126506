//! Subset selection strategies.
//!
//! A selector draws a local subset of `[0, nr_total)` and merges several
//! local subsets, each shifted by its bucket offset, into one sample over the
//! whole table. Both selectors are stateless unit structs: no configuration,
//! no fields, safe to share between threads.

use std::fmt;

use fixedbitset::FixedBitSet;
use rand::distributions::{Distribution, Uniform};
use rand::seq::index;
use rand::RngCore;

use crate::core::error::{Result, SamplingError};
use crate::core::types::{DrawCount, RowIndex};
use crate::ensure;
use crate::sampling::row_sample::RowSample;

/// Strategy for drawing and merging row subsets.
pub trait SubsetSelector: Send + Sync + fmt::Debug {
    /// Draw `nr_select` indices from `[0, nr_total)`.
    fn select(&self, nr_total: usize, nr_select: usize, rng: &mut dyn RngCore) -> Result<RowSample>;

    /// Local sample over `[0, nr_total)` with nothing drawn.
    fn empty(&self, nr_total: usize) -> RowSample;

    /// Re-base every local subset by its offset and merge them into one
    /// sample over `[0, total_rows)`. Performs no randomness.
    fn combine(
        &self,
        subsets: &[RowSample],
        offsets: &[RowIndex],
        total_rows: usize,
    ) -> Result<RowSample>;

    /// Short name used in log output.
    fn name(&self) -> &'static str;
}

/// Simple random sampling without replacement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoReplacementSelector;

/// Independent uniform draws with replacement (bootstrap).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WithReplacementSelector;

fn check_select_args(nr_total: usize, nr_select: usize) -> Result<()> {
    ensure!(
        nr_total > 0,
        SamplingError::invalid_argument("nr_total", nr_total, "must be positive")
    );
    ensure!(
        nr_select > 0,
        SamplingError::invalid_argument("nr_select", nr_select, "must be positive")
    );
    Ok(())
}

/// Check the shape of a combine call.
fn check_combine_args(
    subsets: &[RowSample],
    offsets: &[RowIndex],
    total_rows: usize,
) -> Result<()> {
    ensure!(
        subsets.len() == offsets.len(),
        SamplingError::dimension_mismatch(
            format!("{} subsets (one per offset)", offsets.len()),
            format!("{} subsets", subsets.len()),
        )
    );
    ensure!(
        !offsets.is_empty(),
        SamplingError::invalid_argument("offsets", "[]", "at least one bucket is required")
    );
    ensure!(
        total_rows >= offsets.len(),
        SamplingError::invalid_argument(
            "total_rows",
            total_rows,
            format!("must be at least the number of buckets ({})", offsets.len()),
        )
    );
    ensure!(
        offsets[0] == 0,
        SamplingError::invalid_argument("offsets[0]", offsets[0], "first bucket must start at row 0")
    );

    for (i, subset) in subsets.iter().enumerate() {
        let end = offsets.get(i + 1).copied().unwrap_or(total_rows);
        let start = offsets[i];
        ensure!(
            end >= start,
            SamplingError::invalid_argument(
                format!("offsets[{}]", i + 1),
                end,
                format!("offsets must be non-decreasing (previous is {})", start),
            )
        );
        ensure!(
            start + subset.nr_rows() <= end,
            SamplingError::invalid_argument(
                format!("subsets[{}]", i),
                subset.nr_rows(),
                format!("does not fit its bucket [{}, {})", start, end),
            )
        );
    }
    Ok(())
}

fn variant_mismatch(index: usize, expected: &str) -> SamplingError {
    SamplingError::invalid_argument(
        format!("subsets[{}]", index),
        "incompatible sample",
        format!("expected a {} sample", expected),
    )
}

impl SubsetSelector for NoReplacementSelector {
    fn select(&self, nr_total: usize, nr_select: usize, rng: &mut dyn RngCore) -> Result<RowSample> {
        check_select_args(nr_total, nr_select)?;
        if nr_select > nr_total {
            return Err(SamplingError::invalid_argument(
                "nr_select",
                nr_select,
                format!("cannot draw more than nr_total ({}) without replacement", nr_total),
            ));
        }

        let mut included = FixedBitSet::with_capacity(nr_total);
        for row in index::sample(rng, nr_total, nr_select) {
            included.insert(row);
        }
        Ok(RowSample::from_bitset(included))
    }

    fn empty(&self, nr_total: usize) -> RowSample {
        RowSample::from_bitset(FixedBitSet::with_capacity(nr_total))
    }

    fn combine(
        &self,
        subsets: &[RowSample],
        offsets: &[RowIndex],
        total_rows: usize,
    ) -> Result<RowSample> {
        check_combine_args(subsets, offsets, total_rows)?;

        let mut included = FixedBitSet::with_capacity(total_rows);
        for (i, (subset, &offset)) in subsets.iter().zip(offsets).enumerate() {
            match subset {
                RowSample::Subset { included: local, .. } => {
                    for row in local.ones() {
                        included.insert(offset + row);
                    }
                }
                RowSample::All { nr_rows } => included.insert_range(offset..offset + nr_rows),
                RowSample::Counts { .. } => return Err(variant_mismatch(i, "no-replacement")),
            }
        }
        Ok(RowSample::from_bitset(included))
    }

    fn name(&self) -> &'static str {
        "no-replacement"
    }
}

impl SubsetSelector for WithReplacementSelector {
    fn select(&self, nr_total: usize, nr_select: usize, rng: &mut dyn RngCore) -> Result<RowSample> {
        check_select_args(nr_total, nr_select)?;

        let mut counts: Vec<DrawCount> = vec![0; nr_total];
        let rows = Uniform::new(0, nr_total);
        for _ in 0..nr_select {
            counts[rows.sample(rng)] += 1;
        }
        Ok(RowSample::from_counts(counts))
    }

    fn empty(&self, nr_total: usize) -> RowSample {
        RowSample::from_counts(vec![0; nr_total])
    }

    fn combine(
        &self,
        subsets: &[RowSample],
        offsets: &[RowIndex],
        total_rows: usize,
    ) -> Result<RowSample> {
        check_combine_args(subsets, offsets, total_rows)?;

        let mut counts: Vec<DrawCount> = vec![0; total_rows];
        for (i, (subset, &offset)) in subsets.iter().zip(offsets).enumerate() {
            match subset {
                RowSample::Counts { counts: local, .. } => {
                    for (row, &count) in local.iter().enumerate() {
                        counts[offset + row] += count;
                    }
                }
                RowSample::All { nr_rows } => {
                    for count in &mut counts[offset..offset + nr_rows] {
                        *count += 1;
                    }
                }
                RowSample::Subset { .. } => return Err(variant_mismatch(i, "with-replacement")),
            }
        }
        Ok(RowSample::from_counts(counts))
    }

    fn name(&self) -> &'static str {
        "with-replacement"
    }
}
