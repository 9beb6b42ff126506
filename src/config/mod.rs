//! Configuration management for row sampling.
//!
//! Provides [`SamplingConfig`], its validating builder and the shared
//! fraction check used by every sampler.

pub mod core;

pub use self::core::{validate_fraction, SamplingConfig, SamplingConfigBuilder};
