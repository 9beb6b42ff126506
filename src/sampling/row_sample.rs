//! The per-tree row sample handed to the tree learner.

use fixedbitset::FixedBitSet;

use crate::core::error::{Result, SamplingError};
use crate::core::types::{DrawCount, RowIndex};

/// Inclusion state of every row of the table for one tree.
///
/// `fraction` is the realized ratio of included rows (or draws, with
/// replacement) to the table size, kept for downstream weighting.
#[derive(Debug, Clone, PartialEq)]
pub enum RowSample {
    /// Every row participates exactly once
    All {
        /// Number of rows in the table
        nr_rows: usize,
    },
    /// Drawn without replacement: each row is in or out
    Subset {
        /// Bit `i` is set when row `i` participates
        included: FixedBitSet,
        /// Included rows divided by table size
        fraction: f64,
    },
    /// Drawn with replacement: each row carries a multiplicity
    Counts {
        /// Number of times row `i` was drawn
        counts: Vec<DrawCount>,
        /// Total draws divided by table size
        fraction: f64,
    },
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

impl RowSample {
    /// Sample containing every one of `nr_rows` rows once.
    pub fn all(nr_rows: usize) -> Self {
        RowSample::All { nr_rows }
    }

    /// Sample from an inclusion bit-vector; its length is the table size.
    pub fn from_bitset(included: FixedBitSet) -> Self {
        let fraction = ratio(included.count_ones(..), included.len());
        RowSample::Subset { included, fraction }
    }

    /// Sample from per-row draw counts; its length is the table size.
    pub fn from_counts(counts: Vec<DrawCount>) -> Self {
        let draws: usize = counts.iter().map(|&c| c as usize).sum();
        let fraction = ratio(draws, counts.len());
        RowSample::Counts { counts, fraction }
    }

    /// Number of rows the sample is defined over.
    pub fn nr_rows(&self) -> usize {
        match self {
            RowSample::All { nr_rows } => *nr_rows,
            RowSample::Subset { included, .. } => included.len(),
            RowSample::Counts { counts, .. } => counts.len(),
        }
    }

    /// Realized inclusion fraction.
    pub fn fraction(&self) -> f64 {
        match self {
            RowSample::All { .. } => 1.0,
            RowSample::Subset { fraction, .. } | RowSample::Counts { fraction, .. } => *fraction,
        }
    }

    /// How many times `row` participates; the row weight for the learner.
    pub fn count_for(&self, row: RowIndex) -> Result<DrawCount> {
        let nr_rows = self.nr_rows();
        if row >= nr_rows {
            return Err(SamplingError::invalid_argument(
                "row",
                row,
                format!("must be below the sample size {}", nr_rows),
            ));
        }
        Ok(match self {
            RowSample::All { .. } => 1,
            RowSample::Subset { included, .. } => DrawCount::from(included.contains(row)),
            RowSample::Counts { counts, .. } => counts[row],
        })
    }

    /// Whether `row` participates at least once. Rows outside the table are not.
    pub fn is_included(&self, row: RowIndex) -> bool {
        self.count_for(row).map_or(false, |count| count > 0)
    }

    /// Number of distinct rows that participate.
    pub fn nr_included(&self) -> usize {
        match self {
            RowSample::All { nr_rows } => *nr_rows,
            RowSample::Subset { included, .. } => included.count_ones(..),
            RowSample::Counts { counts, .. } => counts.iter().filter(|&&c| c > 0).count(),
        }
    }

    /// Total draws; equals [`nr_included`](Self::nr_included) without replacement.
    pub fn nr_draws(&self) -> usize {
        match self {
            RowSample::Counts { counts, .. } => counts.iter().map(|&c| c as usize).sum(),
            _ => self.nr_included(),
        }
    }

    /// Participating rows in ascending order, each listed once.
    pub fn included_rows(&self) -> Box<dyn Iterator<Item = RowIndex> + '_> {
        match self {
            RowSample::All { nr_rows } => Box::new(0..*nr_rows),
            RowSample::Subset { included, .. } => Box::new(included.ones()),
            RowSample::Counts { counts, .. } => Box::new(
                counts
                    .iter()
                    .enumerate()
                    .filter(|(_, &c)| c > 0)
                    .map(|(row, _)| row),
            ),
        }
    }

    /// Rows left out of the sample, in ascending order.
    pub fn out_of_bag_rows(&self) -> Box<dyn Iterator<Item = RowIndex> + '_> {
        match self {
            RowSample::All { .. } => Box::new(std::iter::empty()),
            RowSample::Subset { included, .. } => {
                Box::new((0..included.len()).filter(move |&row| !included.contains(row)))
            }
            RowSample::Counts { counts, .. } => Box::new(
                counts
                    .iter()
                    .enumerate()
                    .filter(|(_, &c)| c == 0)
                    .map(|(row, _)| row),
            ),
        }
    }

    /// Per-row weights, i.e. the multiplicity of each row as `f64`.
    pub fn weights(&self) -> Vec<f64> {
        match self {
            RowSample::All { nr_rows } => vec![1.0; *nr_rows],
            RowSample::Subset { included, .. } => (0..included.len())
                .map(|row| if included.contains(row) { 1.0 } else { 0.0 })
                .collect(),
            RowSample::Counts { counts, .. } => counts.iter().map(|&c| f64::from(c)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bitset(len: usize, ones: &[usize]) -> FixedBitSet {
        let mut bits = FixedBitSet::with_capacity(len);
        for &i in ones {
            bits.insert(i);
        }
        bits
    }

    #[test]
    fn test_all_sample() {
        let sample = RowSample::all(4);
        assert_eq!(sample.nr_rows(), 4);
        assert_eq!(sample.fraction(), 1.0);
        assert_eq!(sample.nr_included(), 4);
        assert_eq!(sample.nr_draws(), 4);
        assert_eq!(sample.count_for(3).unwrap(), 1);
        assert_eq!(sample.out_of_bag_rows().count(), 0);
        assert_eq!(sample.weights(), vec![1.0; 4]);
    }

    #[test]
    fn test_subset_sample() {
        let sample = RowSample::from_bitset(bitset(5, &[1, 3]));
        assert_eq!(sample.nr_rows(), 5);
        assert_eq!(sample.fraction(), 2.0 / 5.0);
        assert_eq!(sample.included_rows().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(sample.out_of_bag_rows().collect::<Vec<_>>(), vec![0, 2, 4]);
        assert_eq!(sample.count_for(1).unwrap(), 1);
        assert_eq!(sample.count_for(2).unwrap(), 0);
        assert_eq!(sample.weights(), vec![0.0, 1.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_counts_sample() {
        let sample = RowSample::from_counts(vec![0, 3, 1, 0]);
        assert_eq!(sample.nr_included(), 2);
        assert_eq!(sample.nr_draws(), 4);
        assert_eq!(sample.fraction(), 1.0);
        assert!(sample.is_included(1));
        assert!(!sample.is_included(3));
        assert_eq!(sample.out_of_bag_rows().collect::<Vec<_>>(), vec![0, 3]);
        assert_eq!(sample.weights(), vec![0.0, 3.0, 1.0, 0.0]);
    }

    #[test]
    fn test_count_for_out_of_range() {
        let sample = RowSample::from_counts(vec![1, 1]);
        let err = sample.count_for(2).unwrap_err();
        assert!(matches!(err, SamplingError::InvalidArgument { .. }));
        assert!(!sample.is_included(2));
    }

    #[test]
    fn test_empty_table_fraction() {
        let sample = RowSample::from_bitset(FixedBitSet::with_capacity(0));
        assert_eq!(sample.fraction(), 0.0);
    }
}
