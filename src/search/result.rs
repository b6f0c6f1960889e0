//! Search result types and statistics

use crate::sequence::BitSequence;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Result of an exhaustive search
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Length of the forbidden progression
    pub k: usize,
    /// The van der Waerden number W(2,k)
    pub number: usize,
    /// A longest progression-free sequence found (for display only)
    pub witness: BitSequence,
    /// Statistics from the search
    pub statistics: SearchStatistics,
}

impl SearchResult {
    /// Length of the longest progression-free sequence
    pub fn longest_free_length(&self) -> usize {
        self.number - 1
    }
}

/// Statistics from a search run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Total time spent searching
    pub elapsed_time: Duration,
    /// Number of search nodes expanded
    pub nodes_expanded: u64,
    /// Nodes whose extensions were both forbidden
    pub leaves: u64,
    /// Children discarded because they completed a progression
    pub pruned_children: u64,
    /// Branch pairs explored on a separate thread
    pub forks_taken: u64,
    /// Branch pairs explored sequentially because no permit was free
    pub forks_declined: u64,
    /// Most fork permits held at once
    pub peak_concurrent_forks: usize,
}

impl SearchStatistics {
    /// Nodes expanded per second
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.nodes_expanded as f64 / secs
        }
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        s.push_str(&format!("Nodes expanded: {}\n", self.nodes_expanded));
        s.push_str(&format!("Throughput: {:.0} nodes/sec\n", self.throughput()));
        s.push_str(&format!("Leaves: {}\n", self.leaves));
        s.push_str(&format!("Pruned children: {}\n", self.pruned_children));
        s.push_str(&format!(
            "Forks: {} taken, {} sequential\n",
            self.forks_taken, self.forks_declined
        ));
        s.push_str(&format!(
            "Peak concurrent forks: {}\n",
            self.peak_concurrent_forks
        ));
        s
    }
}

/// Counters updated concurrently by every branch of the search.
#[derive(Debug, Default)]
pub struct SearchCounters {
    nodes_expanded: AtomicU64,
    leaves: AtomicU64,
    pruned_children: AtomicU64,
    forks_taken: AtomicU64,
    forks_declined: AtomicU64,
}

impl SearchCounters {
    pub fn node_expanded(&self, pruned: u64) {
        self.nodes_expanded.fetch_add(1, Ordering::Relaxed);
        self.pruned_children.fetch_add(pruned, Ordering::Relaxed);
    }

    pub fn leaf(&self) {
        self.leaves.fetch_add(1, Ordering::Relaxed);
    }

    pub fn fork_taken(&self) {
        self.forks_taken.fetch_add(1, Ordering::Relaxed);
    }

    pub fn fork_declined(&self) {
        self.forks_declined.fetch_add(1, Ordering::Relaxed);
    }

    /// Copy the counters into a statistics record
    pub fn snapshot(
        &self,
        elapsed_time: Duration,
        peak_concurrent_forks: usize,
    ) -> SearchStatistics {
        SearchStatistics {
            elapsed_time,
            nodes_expanded: self.nodes_expanded.load(Ordering::Relaxed),
            leaves: self.leaves.load(Ordering::Relaxed),
            pruned_children: self.pruned_children.load(Ordering::Relaxed),
            forks_taken: self.forks_taken.load(Ordering::Relaxed),
            forks_declined: self.forks_declined.load(Ordering::Relaxed),
            peak_concurrent_forks,
        }
    }
}

impl std::fmt::Display for SearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "W(2,{}) = {}", self.k, self.number)
    }
}
