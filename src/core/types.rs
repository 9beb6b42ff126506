//! Core data types for ensemble row sampling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::SamplingError;

/// Row indexing type. Row indices address `[0, nr_rows)` of the training table.
pub type RowIndex = usize;

/// Class indexing type. Classes are numbered in the order of their row blocks.
pub type ClassIndex = usize;

/// Per-row draw multiplicity in a with-replacement sample.
pub type DrawCount = u32;

/// How rows are distributed over the per-tree sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowSamplingMode {
    /// Draw from the whole table, ignoring class labels
    Random,
    /// Draw the same number of rows from every class
    EqualSize,
    /// Draw the same fraction from every class
    Stratified,
}

impl RowSamplingMode {
    /// Whether this mode needs a nominal (classification) target.
    pub fn requires_nominal_target(&self) -> bool {
        matches!(self, RowSamplingMode::EqualSize | RowSamplingMode::Stratified)
    }
}

impl Default for RowSamplingMode {
    fn default() -> Self {
        RowSamplingMode::Random
    }
}

impl fmt::Display for RowSamplingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowSamplingMode::Random => write!(f, "random"),
            RowSamplingMode::EqualSize => write!(f, "equal_size"),
            RowSamplingMode::Stratified => write!(f, "stratified"),
        }
    }
}

impl FromStr for RowSamplingMode {
    type Err = SamplingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(RowSamplingMode::Random),
            "equal_size" | "equalsize" => Ok(RowSamplingMode::EqualSize),
            "stratified" => Ok(RowSamplingMode::Stratified),
            other => Err(SamplingError::config(format!(
                "Unknown row sampling mode: {}",
                other
            ))),
        }
    }
}
