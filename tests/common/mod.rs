//! Common test utilities for row sampling integration tests.

#![allow(dead_code)]

use ensemble_sampling::*;

/// Route `log` output through env_logger once per test binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Two classes of 6 and 4 rows.
pub fn two_class_target() -> TargetColumn {
    TargetColumn::nominal(vec![6, 4]).expect("valid frequencies")
}

/// Heavily skewed three-class target.
pub fn skewed_target() -> TargetColumn {
    TargetColumn::nominal(vec![120, 30, 7]).expect("valid frequencies")
}

/// Rows of `sample` (with multiplicity) that fall in `[start, end)`.
pub fn draws_in(sample: &RowSample, start: usize, end: usize) -> usize {
    (start..end)
        .map(|row| sample.count_for(row).expect("row in range") as usize)
        .sum()
}

/// Per-class draw totals of `sample` for the given class frequencies.
pub fn draws_per_class(sample: &RowSample, class_frequencies: &[usize]) -> Vec<usize> {
    let offsets = class_offsets(class_frequencies).expect("valid frequencies");
    offsets
        .iter()
        .zip(class_frequencies)
        .map(|(&start, &size)| draws_in(sample, start, start + size))
        .collect()
}
