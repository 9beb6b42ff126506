//! Per-tree row sampling for bagged tree ensembles.
//!
//! Control flow: [`RowSamplerFactory`] picks a policy and a
//! [`SubsetSelector`]; the policy decides how many rows to draw from the
//! table or from each class bucket, the selector draws them and
//! [`SubsetSelector::combine`] merges the per-bucket draws into one
//! [`RowSample`].

pub mod classification;
pub mod factory;
pub mod row_sample;
pub mod row_sampler;
pub mod selector;

pub use classification::{ClassBuckets, EqualSizeRowSampler, StratifiedRowSampler};
pub use factory::RowSamplerFactory;
pub use row_sample::RowSample;
pub use row_sampler::{DefaultRowSampler, RandomRowSampler, RowSampler};
pub use selector::{NoReplacementSelector, SubsetSelector, WithReplacementSelector};
