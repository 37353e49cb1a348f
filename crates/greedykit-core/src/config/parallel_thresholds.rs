//! Thresholds for switching linear reductions onto the rayon pool.
//!
//! The feasibility check of the run-time search is a single `O(m)` pass over
//! the batteries. For small collections the sequential fold wins; past a
//! threshold that scales with the number of worker threads the sum is split
//! across the pool. The parallel and sequential paths produce identical sums.

use std::sync::OnceLock;

/// Global configuration for parallel thresholds
static GLOBAL_CONFIG: OnceLock<ParallelThresholdsConfig> = OnceLock::new();

/// Configuration for parallel execution thresholds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelThresholdsConfig {
    /// Minimum slice length for a parallel reduction
    pub reduction_threshold: usize,

    /// Number of available threads (cached)
    pub num_threads: usize,

    /// Minimum chunk size for parallel iteration
    pub min_chunk_size: usize,
}

impl Default for ParallelThresholdsConfig {
    fn default() -> Self {
        let num_threads = rayon::current_num_threads();

        // Single-threaded baseline; more threads means more fork/join overhead.
        let base_reduction = 32_768;
        let thread_scaling = (num_threads as f64).sqrt();

        Self {
            reduction_threshold: (f64::from(base_reduction) * thread_scaling) as usize,
            num_threads,
            min_chunk_size: 4096,
        }
    }
}

impl ParallelThresholdsConfig {
    /// A configuration that never goes parallel.
    pub fn sequential() -> Self {
        Self {
            reduction_threshold: usize::MAX,
            num_threads: 1,
            min_chunk_size: usize::MAX,
        }
    }
}

/// Builder for customizing parallel thresholds
pub struct ParallelThresholdsBuilder {
    config: ParallelThresholdsConfig,
}

impl ParallelThresholdsBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: ParallelThresholdsConfig::default(),
        }
    }

    /// Set the reduction threshold
    pub fn reduction_threshold(mut self, threshold: usize) -> Self {
        self.config.reduction_threshold = threshold;
        self
    }

    /// Set the number of threads the thresholds assume
    pub fn num_threads(mut self, threads: usize) -> Self {
        self.config.num_threads = threads.max(1);
        self
    }

    /// Set the minimum chunk size
    pub fn min_chunk_size(mut self, size: usize) -> Self {
        self.config.min_chunk_size = size.max(1);
        self
    }

    /// Build the configuration
    pub fn build(self) -> ParallelThresholdsConfig {
        self.config
    }
}

impl Default for ParallelThresholdsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the global parallel thresholds configuration
pub fn get_parallel_config() -> &'static ParallelThresholdsConfig {
    GLOBAL_CONFIG.get_or_init(ParallelThresholdsConfig::default)
}

/// Set custom parallel thresholds configuration
///
/// Only the first call succeeds; later calls hand the rejected config back.
pub fn set_parallel_config(
    config: ParallelThresholdsConfig,
) -> Result<(), ParallelThresholdsConfig> {
    GLOBAL_CONFIG.set(config)
}

/// Trait for determining if an operation should be parallelized
pub trait ShouldParallelize {
    /// Check if a reduction over `size` elements should be parallel
    fn should_parallelize_reduction(&self, size: usize) -> bool;

    /// Calculate optimal chunk size for parallel iteration
    fn optimal_chunk_size(&self, total_size: usize) -> usize;
}

impl ShouldParallelize for ParallelThresholdsConfig {
    fn should_parallelize_reduction(&self, size: usize) -> bool {
        cfg!(feature = "parallel") && size >= self.reduction_threshold && self.num_threads > 1
    }

    fn optimal_chunk_size(&self, total_size: usize) -> usize {
        // Some oversubscription for load balancing
        let ideal_chunks = self.num_threads.max(1) * 4;
        total_size.div_ceil(ideal_chunks).max(self.min_chunk_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = ParallelThresholdsConfig::default();

        assert!(!config.should_parallelize_reduction(100));
        if config.num_threads > 1 && cfg!(feature = "parallel") {
            assert!(config.should_parallelize_reduction(10_000_000));
        }
    }

    #[test]
    fn test_sequential_never_parallel() {
        let config = ParallelThresholdsConfig::sequential();
        assert!(!config.should_parallelize_reduction(usize::MAX));
    }

    #[test]
    fn test_builder() {
        let config = ParallelThresholdsBuilder::new()
            .reduction_threshold(10)
            .min_chunk_size(0)
            .build();

        assert_eq!(config.reduction_threshold, 10);
        assert_eq!(config.min_chunk_size, 1);
    }

    #[test]
    #[cfg(feature = "parallel")]
    fn test_thread_count_override() {
        let config = ParallelThresholdsBuilder::new()
            .reduction_threshold(0)
            .num_threads(4)
            .build();
        assert_eq!(config.num_threads, 4);
        assert!(config.should_parallelize_reduction(50_000));

        let single = ParallelThresholdsBuilder::new()
            .reduction_threshold(0)
            .num_threads(0)
            .build();
        assert_eq!(single.num_threads, 1);
        assert!(!single.should_parallelize_reduction(50_000));
    }

    #[test]
    fn test_chunk_size() {
        let config = ParallelThresholdsBuilder::new().min_chunk_size(1).build();
        let chunk = config.optimal_chunk_size(1_000_000);
        assert!(chunk >= 1);
        assert!(chunk * config.num_threads * 4 >= 1_000_000);
    }
}
