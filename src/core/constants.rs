//! Sampling constants and configuration defaults.

use crate::core::types::RowSamplingMode;

/// Default fraction of rows drawn per tree.
pub const DEFAULT_DATA_FRACTION: f64 = 1.0;

/// Default for drawing rows with replacement (bootstrap).
pub const DEFAULT_DRAW_WITH_REPLACEMENT: bool = false;

/// Default row sampling mode.
pub const DEFAULT_ROW_SAMPLING_MODE: RowSamplingMode = RowSamplingMode::Random;

/// Default base seed for per-tree random generators.
pub const DEFAULT_SAMPLING_SEED: u64 = 42;

/// Tolerance used when deciding that a fraction equals one.
pub const FRACTION_EPSILON: f64 = 1e-12;
