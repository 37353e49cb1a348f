//! Maximum simultaneous running time of `n` computers.
//!
//! Each battery can power one computer at a time for as many minutes as its
//! capacity, and batteries can be swapped between computers instantly and
//! for free. The question is how long all `n` computers can run together.
//!
//! The answer is found by binary search over durations. A duration `t` is
//! feasible iff
//!
//! ```text
//! sum(min(b, t) for b in batteries) >= n * t
//! ```
//!
//! A battery holding more than `t` minutes can still only feed one computer
//! at a time, so anything above `t` is wasted; a smaller battery can be used
//! in full by time-slicing it between computers. The predicate is monotone
//! (feasible at `t` implies feasible at every `t' < t`) and `sum / n` bounds
//! the answer from above, which makes the search valid.

use crate::config::{get_parallel_config, ParallelThresholdsConfig, ShouldParallelize};
use crate::error::{GreedyError, Result};
use log::{debug, trace};
use rayon::prelude::*;

/// Outcome of a run-time search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuntimeReport {
    /// Longest duration all computers can run simultaneously.
    pub run_time: u64,
    /// Number of computers.
    pub computers: usize,
    /// Sum of all battery capacities.
    pub total_capacity: u64,
    /// Upper end of the search space, `total_capacity / computers`.
    pub upper_bound: u64,
    /// Number of feasibility evaluations performed.
    pub probes: u32,
}

/// Configuration for [`RuntimeSearch`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Thresholds for the feasibility sum. `None` uses the global config.
    pub thresholds: Option<ParallelThresholdsConfig>,
}

impl SearchConfig {
    /// Create a configuration that uses the global thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use explicit parallel thresholds for this search.
    pub fn with_thresholds(mut self, thresholds: ParallelThresholdsConfig) -> Self {
        self.thresholds = Some(thresholds);
        self
    }

    /// Force the feasibility sum to run on the calling thread.
    pub fn sequential(self) -> Self {
        self.with_thresholds(ParallelThresholdsConfig::sequential())
    }

    fn thresholds(&self) -> &ParallelThresholdsConfig {
        match &self.thresholds {
            Some(thresholds) => thresholds,
            None => get_parallel_config(),
        }
    }
}

/// Binary-search solver for the running-time problem.
#[derive(Debug, Clone, Default)]
pub struct RuntimeSearch {
    config: SearchConfig,
}

impl RuntimeSearch {
    /// Create a solver with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The solver's configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find the longest duration `computers` machines can run on `batteries`.
    pub fn solve(&self, computers: usize, batteries: &[u64]) -> Result<RuntimeReport> {
        let total_capacity = validate(computers, batteries)?;
        let thresholds = self.config.thresholds();

        let upper_bound = total_capacity / computers as u64;
        let mut left = 0u64;
        let mut right = upper_bound;
        let mut probes = 0u32;

        while left < right {
            // Upper midpoint, so `left = mid` always makes progress.
            let mid = left + (right - left).div_ceil(2);
            probes += 1;

            let usable = usable_capacity_with(batteries, mid, thresholds);
            let feasible = covers(usable, computers, mid);
            trace!("probe {probes}: t = {mid}, usable = {usable}, feasible = {feasible}");

            if feasible {
                left = mid;
            } else {
                right = mid - 1;
            }
        }

        debug!(
            "{computers} computers on {} batteries: run time {left} (bound {upper_bound}, {probes} probes)",
            batteries.len()
        );

        Ok(RuntimeReport {
            run_time: left,
            computers,
            total_capacity,
            upper_bound,
            probes,
        })
    }

    /// Evaluate the feasibility predicate for a single duration.
    pub fn is_feasible(&self, computers: usize, batteries: &[u64], duration: u64) -> Result<bool> {
        validate(computers, batteries)?;
        let usable = usable_capacity_with(batteries, duration, self.config.thresholds());
        Ok(covers(usable, computers, duration))
    }
}

/// Longest time `computers` machines can run simultaneously on `batteries`.
///
/// # Example
/// ```
/// use greedykit_core::run_time::max_run_time;
///
/// assert_eq!(max_run_time(2, &[3, 3, 3]).unwrap(), 4);
/// assert_eq!(max_run_time(1, &[5, 10, 15]).unwrap(), 30);
/// ```
pub fn max_run_time(computers: usize, batteries: &[u64]) -> Result<u64> {
    RuntimeSearch::default()
        .solve(computers, batteries)
        .map(|report| report.run_time)
}

/// Whether `computers` machines can all run for `duration` on `batteries`.
pub fn is_feasible(computers: usize, batteries: &[u64], duration: u64) -> Result<bool> {
    RuntimeSearch::default().is_feasible(computers, batteries, duration)
}

/// Capacity that can be put to use within `duration`: `sum(min(b, duration))`.
///
/// Saturates at `u64::MAX` instead of wrapping.
pub fn usable_capacity(batteries: &[u64], duration: u64) -> u64 {
    usable_capacity_with(batteries, duration, get_parallel_config())
}

/// [`usable_capacity`] with explicit parallel thresholds.
pub fn usable_capacity_with(
    batteries: &[u64],
    duration: u64,
    thresholds: &ParallelThresholdsConfig,
) -> u64 {
    if thresholds.should_parallelize_reduction(batteries.len()) {
        batteries
            .par_iter()
            .with_min_len(thresholds.optimal_chunk_size(batteries.len()))
            .map(|&capacity| capacity.min(duration))
            .reduce(|| 0, u64::saturating_add)
    } else {
        batteries
            .iter()
            .fold(0u64, |acc, &capacity| acc.saturating_add(capacity.min(duration)))
    }
}

fn covers(usable: u64, computers: usize, duration: u64) -> bool {
    // An overflowing demand exceeds any representable supply.
    (computers as u64)
        .checked_mul(duration)
        .is_some_and(|demand| usable >= demand)
}

/// Check the input contract and return the total capacity.
fn validate(computers: usize, batteries: &[u64]) -> Result<u64> {
    if batteries.is_empty() {
        return Err(GreedyError::empty("batteries"));
    }
    if computers == 0 || computers > batteries.len() {
        return Err(GreedyError::invalid_computer_count(computers, batteries.len()));
    }

    batteries
        .iter()
        .enumerate()
        .try_fold(0u64, |total, (index, &capacity)| {
            if capacity == 0 {
                return Err(GreedyError::invalid_capacity(index, capacity));
            }
            total
                .checked_add(capacity)
                .ok_or(GreedyError::CapacityOverflow)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParallelThresholdsBuilder;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_known_inputs() {
        assert_eq!(max_run_time(2, &[3, 3, 3]).unwrap(), 4);
        assert_eq!(max_run_time(2, &[1, 1, 1, 1]).unwrap(), 2);
        assert_eq!(max_run_time(1, &[5, 10, 15]).unwrap(), 30);
        assert_eq!(max_run_time(3, &[10, 10, 3, 5]).unwrap(), 8);
    }

    #[test]
    fn test_edge_cases() {
        assert_eq!(max_run_time(1, &[42]).unwrap(), 42);
        assert_eq!(max_run_time(4, &[7, 7, 7, 7]).unwrap(), 7);
        // One huge battery cannot feed two machines at once.
        assert_eq!(max_run_time(2, &[1, 1_000_000_000]).unwrap(), 1);
    }

    #[test]
    fn test_report() {
        let report = RuntimeSearch::default().solve(2, &[3, 3, 3]).unwrap();
        assert_eq!(report.run_time, 4);
        assert_eq!(report.total_capacity, 9);
        assert_eq!(report.upper_bound, 4);
        assert_eq!(report.computers, 2);
        assert_eq!(report.probes, 3);
    }

    #[test]
    fn test_single_probe() {
        let report = RuntimeSearch::default().solve(2, &[1, 1]).unwrap();
        assert_eq!(report.run_time, 1);
        assert_eq!(report.probes, 1);
    }

    #[test]
    fn test_feasibility() {
        assert!(is_feasible(2, &[3, 3, 3], 4).unwrap());
        assert!(!is_feasible(2, &[3, 3, 3], 5).unwrap());
        assert!(is_feasible(2, &[3, 3, 3], 0).unwrap());
        assert!(!is_feasible(2, &[3, 3, 3], u64::MAX).unwrap());
    }

    #[test]
    fn test_usable_capacity() {
        assert_eq!(usable_capacity(&[3, 3, 3], 4), 9);
        assert_eq!(usable_capacity(&[10, 10, 3, 5], 8), 24);
        assert_eq!(usable_capacity(&[u64::MAX, u64::MAX], u64::MAX), u64::MAX);
    }

    #[test]
    #[cfg(feature = "parallel")]
    fn test_parallel_sum_matches_sequential() {
        let batteries: Vec<u64> = (1..=50_000).map(|i| (i * 7919) % 1000 + 1).collect();
        let parallel = ParallelThresholdsBuilder::new()
            .reduction_threshold(0)
            .num_threads(4)
            .min_chunk_size(1)
            .build();
        let sequential = ParallelThresholdsConfig::sequential();
        assert!(parallel.should_parallelize_reduction(batteries.len()));
        assert!(!sequential.should_parallelize_reduction(batteries.len()));

        for duration in [0, 1, 250, 999, 5000] {
            assert_eq!(
                usable_capacity_with(&batteries, duration, &parallel),
                usable_capacity_with(&batteries, duration, &sequential)
            );
        }
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(max_run_time(1, &[]), Err(GreedyError::empty("batteries")));
        assert_eq!(
            max_run_time(0, &[1, 2]),
            Err(GreedyError::invalid_computer_count(0, 2))
        );
        assert_eq!(
            max_run_time(3, &[1, 2]),
            Err(GreedyError::invalid_computer_count(3, 2))
        );
        assert_eq!(
            max_run_time(1, &[4, 0, 2]),
            Err(GreedyError::invalid_capacity(1, 0))
        );
        assert_eq!(
            max_run_time(1, &[u64::MAX, 1]),
            Err(GreedyError::CapacityOverflow)
        );
        assert!(is_feasible(0, &[1], 1).is_err());
    }
}
