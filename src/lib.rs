//! # Ensemble Sampling
//!
//! Per-tree row sampling for bagged tree ensembles such as random forests.
//!
//! Given a table's row count and, for classification, the size of each class
//! block, a [`RowSampler`] draws the rows one ensemble member is trained on.
//! Samplers are built once per ensemble and called once per tree.
//!
//! ## Policies
//!
//! - **Random**: `round(fraction * rows)` rows from the whole table
//! - **Stratified**: the same fraction from every class, keeping proportions
//! - **Equal size**: `round(fraction * smallest class)` rows from every class
//! - **Default**: every row once, chosen automatically when no subsampling
//!   is requested
//!
//! Each policy draws with or without replacement through a
//! [`SubsetSelector`].
//!
//! ## Quick Start
//!
//! ```rust
//! use ensemble_sampling::{RowSamplerFactory, RowSamplingMode, TargetColumn};
//! use ensemble_sampling::core::utils::random::tree_rng;
//!
//! # fn main() -> ensemble_sampling::Result<()> {
//! // 10 rows: the first 6 of class 0, the last 4 of class 1
//! let target = TargetColumn::nominal(vec![6, 4])?;
//! let sampler = RowSamplerFactory::create(&target, RowSamplingMode::Stratified, 0.5, false)?;
//!
//! let mut rng = tree_rng(42, 0);
//! let sample = sampler.create_row_sample(&mut rng)?;
//! assert_eq!(sample.nr_included(), 5);
//! assert_eq!(sample.fraction(), 0.5);
//! # Ok(())
//! # }
//! ```
//!
//! ## Thread Safety
//!
//! Samplers and selectors hold no mutable state. A single `Box<dyn RowSampler>`
//! can serve every worker thread as long as each call gets its own generator.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub,
    non_snake_case,
    non_upper_case_globals
)]

pub mod config;
pub mod core;
pub mod dataset;
pub mod sampling;

pub use crate::config::{SamplingConfig, SamplingConfigBuilder};
pub use crate::core::{
    constants::*,
    error::{Result, SamplingError},
    types::*,
};
pub use crate::dataset::{class_offsets, TargetColumn};
pub use crate::sampling::{
    ClassBuckets, DefaultRowSampler, EqualSizeRowSampler, NoReplacementSelector,
    RandomRowSampler, RowSample, RowSampler, RowSamplerFactory, StratifiedRowSampler,
    SubsetSelector, WithReplacementSelector,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
