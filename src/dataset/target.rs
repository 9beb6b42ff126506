//! Target (label) column descriptor supplied by the data-access layer.
//!
//! Class-aware samplers address each class as a contiguous block of rows.
//! The caller is responsible for ordering rows that way; this module only
//! records the block sizes and checks the grouping when raw labels are given.

use crate::core::error::{Result, SamplingError};
use crate::core::types::{ClassIndex, RowIndex};

/// Kind of the target column together with what the samplers need from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetColumn {
    /// Regression target: only the row count is known
    Numeric {
        /// Number of rows in the table
        nr_rows: usize,
    },
    /// Classification target with rows grouped into per-class blocks
    Nominal {
        /// Row count of each class, in block order
        class_frequencies: Vec<usize>,
    },
}

impl TargetColumn {
    /// Describe a non-nominal target over `nr_rows` rows.
    pub fn numeric(nr_rows: usize) -> Self {
        TargetColumn::Numeric { nr_rows }
    }

    /// Describe a nominal target from its per-class frequencies.
    ///
    /// Frequencies must be listed in the order the class blocks appear in
    /// the table. An empty list or a class without rows is rejected.
    pub fn nominal(class_frequencies: Vec<usize>) -> Result<Self> {
        if class_frequencies.is_empty() {
            return Err(SamplingError::invalid_target("no classes given"));
        }
        if let Some(class) = class_frequencies.iter().position(|&f| f == 0) {
            return Err(SamplingError::invalid_target(format!(
                "class {} has no rows",
                class
            )));
        }
        Ok(TargetColumn::Nominal { class_frequencies })
    }

    /// Build a nominal target from per-row class labels.
    ///
    /// All rows of a class must form one contiguous run. The label values
    /// themselves are not required to be ascending.
    pub fn from_sorted_labels(labels: &[u32]) -> Result<Self> {
        let mut frequencies: Vec<usize> = Vec::new();
        let mut seen: Vec<u32> = Vec::new();

        for (row, &label) in labels.iter().enumerate() {
            match seen.last() {
                Some(&current) if current == label => {
                    if let Some(count) = frequencies.last_mut() {
                        *count += 1;
                    }
                }
                _ => {
                    if seen.contains(&label) {
                        return Err(SamplingError::invalid_target(format!(
                            "label {} reappears at row {} after its block ended; rows are not grouped by class",
                            label, row
                        )));
                    }
                    seen.push(label);
                    frequencies.push(1);
                }
            }
        }

        Self::nominal(frequencies)
    }

    /// Number of rows in the table.
    pub fn nr_rows(&self) -> usize {
        match self {
            TargetColumn::Numeric { nr_rows } => *nr_rows,
            TargetColumn::Nominal { class_frequencies } => class_frequencies.iter().sum(),
        }
    }

    /// Whether the target is a classification column.
    pub fn is_nominal(&self) -> bool {
        matches!(self, TargetColumn::Nominal { .. })
    }

    /// Per-class frequencies, `None` for numeric targets.
    pub fn class_frequencies(&self) -> Option<&[usize]> {
        match self {
            TargetColumn::Numeric { .. } => None,
            TargetColumn::Nominal { class_frequencies } => Some(class_frequencies),
        }
    }

    /// Number of classes, zero for numeric targets.
    pub fn nr_classes(&self) -> usize {
        self.class_frequencies().map_or(0, |f| f.len())
    }
}

/// Start row of every class block: `offsets[0] == 0` and
/// `offsets[i] == sum(frequencies[..i])`.
pub fn class_offsets(class_frequencies: &[usize]) -> Result<Vec<RowIndex>> {
    if class_frequencies.is_empty() {
        return Err(SamplingError::invalid_target("no classes given"));
    }

    let mut offsets = Vec::with_capacity(class_frequencies.len());
    let mut start = 0usize;
    for (class, &frequency) in class_frequencies.iter().enumerate() {
        if frequency == 0 {
            return Err(SamplingError::invalid_target(format!(
                "class {} has no rows",
                class
            )));
        }
        offsets.push(start);
        start += frequency;
    }
    Ok(offsets)
}

/// Size of the bucket for `class` given the offsets and the table size.
pub(crate) fn bucket_size(offsets: &[RowIndex], class: ClassIndex, nr_rows: usize) -> usize {
    let end = offsets.get(class + 1).copied().unwrap_or(nr_rows);
    end - offsets[class]
}
