//! Configuration for a van der Waerden search run

use crate::error::ConfigError;
use tracing::warn;

/// Configuration for one exhaustive search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Length of the forbidden monochromatic progression.
    pub k: usize,
    /// Number of usable parallel workers, including the calling thread.
    pub workers: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { k: 3, workers: 1 }
    }
}

impl SearchConfig {
    /// Create a configuration for progressions of length `k` on one worker.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Default::default()
        }
    }

    /// Set the number of workers. Zero is clamped to one.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Number of fork permits: the calling thread occupies one worker slot.
    pub fn fork_budget(&self) -> usize {
        self.workers.saturating_sub(1)
    }

    /// Check the configuration before a run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.k == 0 {
            return Err(ConfigError::InvalidProgressionLength(self.k));
        }
        let cpus = num_cpus::get();
        if self.workers > cpus {
            warn!(
                workers = self.workers,
                cpus, "More workers requested than available CPUs"
            );
        }
        Ok(())
    }
}
