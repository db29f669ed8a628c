//! Utility helpers shared by the tree builder.

pub mod parallel;

pub use parallel::{
    parallelism_enabled, set_parallelism, should_parallelize, ParallelismGuard, PARALLEL_THRESHOLD,
};
