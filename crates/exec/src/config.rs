//! Execution configuration.

/// Configuration for the parallel drivers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecConfig {
    /// Number of workers to use (0 = auto-detect).
    pub workers: usize,
    /// Inputs at or below this length run on the sequential driver.
    pub sequential_threshold: usize,
}

impl Default for ExecConfig {
    fn default() -> Self {
        ExecConfig {
            workers: 0,
            sequential_threshold: 1024,
        }
    }
}

impl ExecConfig {
    /// Creates a config that always runs sequentially.
    pub fn single_threaded() -> Self {
        ExecConfig {
            workers: 1,
            sequential_threshold: usize::MAX,
        }
    }

    /// Creates a config with the given worker count.
    pub fn with_workers(workers: usize) -> Self {
        ExecConfig {
            workers,
            ..Default::default()
        }
    }

    /// Returns this config with the given sequential-fallback threshold.
    pub fn sequential_below(mut self, threshold: usize) -> Self {
        self.sequential_threshold = threshold;
        self
    }

    /// Returns the effective number of workers.
    pub fn effective_workers(&self) -> usize {
        if self.workers != 0 {
            return self.workers;
        }
        #[cfg(feature = "parallel")]
        {
            rayon::current_num_threads()
        }
        #[cfg(not(feature = "parallel"))]
        {
            1
        }
    }
}
