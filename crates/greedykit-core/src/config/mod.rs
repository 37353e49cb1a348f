//! Runtime tunables for the kernels.

pub mod parallel_thresholds;

// Re-export key items
pub use parallel_thresholds::{
    get_parallel_config, set_parallel_config, ParallelThresholdsBuilder,
    ParallelThresholdsConfig, ShouldParallelize,
};
