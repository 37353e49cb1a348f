//! Greedy algorithm kernels.
//!
//! This crate provides two small, independent, pure algorithms that both
//! replace an obvious but slow approach with a greedy argument:
//!
//! - **Collision counting**: how many collisions happen on a one-lane road of
//!   cars moving left, right, or standing still. Solved in closed form by
//!   trimming the cars that escape and counting the moving cars that remain.
//! - **Maximum running time**: how long `n` computers can run simultaneously
//!   when battery charge can be reassigned between them at no cost. Solved by
//!   binary search on the answer with a greedy feasibility check.
//!
//! # Modules
//!
//! - [`collisions`]: Collision counting and its step-by-step breakdown
//! - [`config`]: Parallel thresholds for large inputs
//! - [`error`]: Error types for input validation
//! - [`run_time`]: Binary-searched running time of `n` computers
//! - [`types`]: Road and direction types

pub mod collisions;
pub mod config;
pub mod error;
pub mod run_time;
pub mod types;

// Re-export commonly used items at the crate root
pub use error::{GreedyError, Result};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use greedykit_core::prelude::*;
///
/// assert_eq!(count_collisions_str("RL").unwrap(), 2);
/// assert_eq!(max_run_time(2, &[1, 1, 1, 1]).unwrap(), 2);
/// ```
pub mod prelude {
    pub use crate::collisions::{
        count_collisions, count_collisions_str, simulate_collisions, CollisionBreakdown,
    };
    pub use crate::config::{
        get_parallel_config, set_parallel_config, ParallelThresholdsBuilder,
        ParallelThresholdsConfig, ShouldParallelize,
    };
    pub use crate::error::{GreedyError, Result};
    pub use crate::run_time::{
        is_feasible, max_run_time, usable_capacity, RuntimeReport, RuntimeSearch, SearchConfig,
    };
    pub use crate::types::{Direction, Road};
}
