//! Boundary to the tabular data layer.
//!
//! The sampler never reads rows. It only needs the row count and, for
//! classification targets, the size of every class block.

pub mod target;

pub use target::{class_offsets, TargetColumn};
