//! Core infrastructure for ensemble row sampling.
//!
//! # Organization
//!
//! - [`types`]: Index aliases and the row sampling mode enumeration
//! - [`constants`]: Configuration defaults and tolerances
//! - [`error`]: Error type and crate-wide `Result`
//! - [`utils`]: Per-tree random generator derivation
//!
//! ```rust
//! use ensemble_sampling::core::{
//!     constants::DEFAULT_DATA_FRACTION,
//!     error::{Result, SamplingError},
//!     types::RowSamplingMode,
//! };
//!
//! let mode: RowSamplingMode = "stratified".parse()?;
//! assert!(mode.requires_nominal_target());
//! assert_eq!(DEFAULT_DATA_FRACTION, 1.0);
//! # Ok::<(), SamplingError>(())
//! ```

pub mod constants;
pub mod error;
pub mod types;
pub mod utils;

pub use constants::*;
pub use error::{Result, SamplingError};
pub use types::*;
