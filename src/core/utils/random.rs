//! Reproducible per-tree random generators.
//!
//! A configured sampler never owns a generator. The ensemble trainer hands
//! each `create_row_sample` call its own generator; [`tree_rng`] derives one
//! per tree from a base seed so trees can be drawn on any thread, in any
//! order, with identical results.

use rand::rngs::StdRng;
use rand::SeedableRng;

const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Derive the generator for the tree at `tree_index`.
pub fn tree_rng(seed: u64, tree_index: usize) -> StdRng {
    let mixed = seed ^ (tree_index as u64).wrapping_add(1).wrapping_mul(SEED_STRIDE);
    StdRng::seed_from_u64(mixed)
}
