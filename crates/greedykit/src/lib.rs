//! Greedy algorithm kernels.
//!
//! This crate re-exports [`greedykit_core`] and adds human-readable
//! walkthroughs of both algorithms and the command line logic behind the
//! `greedykit` binary.
//!
//! # Example
//! ```
//! use greedykit::prelude::*;
//!
//! let road: Road = "RLRSLL".parse().unwrap();
//! assert_eq!(count_collisions(road.as_slice()).unwrap(), 5);
//! assert_eq!(max_run_time(2, &[3, 3, 3]).unwrap(), 4);
//! ```

pub mod cli;
pub mod explain;

pub use greedykit_core::{collisions, config, error, run_time, types};
pub use greedykit_core::{GreedyError, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use greedykit_core::prelude::*;
}
