//! Helpers shared by the sampling modules.

/// Per-tree random generator derivation
pub mod random;
