//! Recursive backtracking search for W(2,k).
//!
//! Every call owns one progression-free sequence and builds both one-symbol
//! extensions. Extensions that complete a monochromatic progression are
//! dropped. When both die the node is a leaf; when one survives the search
//! continues on it in place; when both survive the node is a fork point
//! and the pair is explored on two threads if a fork permit is free, or
//! one after the other otherwise. Each call returns the largest leaf
//! length below it, so the root returns W(2,k).

use crate::error::ConfigError;
use crate::search::config::SearchConfig;
use crate::search::matcher::ProgressionMatcher;
use crate::search::parallel::{ForkLimiter, join_pair};
use crate::search::result::{SearchCounters, SearchResult};
use crate::search::tracker::{ProgressEvent, ResultTracker};
use crate::sequence::BitSequence;
use crossbeam_channel::Sender;
use std::time::Instant;
use tracing::{debug, info};

/// Borrowed view of the state shared by every branch of one search.
#[derive(Debug, Clone, Copy)]
pub struct SearchController<'a> {
    matcher: &'a ProgressionMatcher,
    limiter: &'a ForkLimiter,
    tracker: &'a ResultTracker,
    counters: &'a SearchCounters,
}

impl<'a> SearchController<'a> {
    pub fn new(
        matcher: &'a ProgressionMatcher,
        limiter: &'a ForkLimiter,
        tracker: &'a ResultTracker,
        counters: &'a SearchCounters,
    ) -> Self {
        Self {
            matcher,
            limiter,
            tracker,
            counters,
        }
    }

    /// Explore every progression-free extension of `seq` and return the
    /// length of the longest leaf below it plus one.
    pub fn explore(&self, seq: BitSequence) -> usize {
        let zero = seq.extended(false);
        let one = seq.extended(true);
        let zero_dead = self.matcher.contains_forbidden_progression(&zero);
        let one_dead = self.matcher.contains_forbidden_progression(&one);

        self.tracker.record(&seq);
        self.counters
            .node_expanded(u64::from(zero_dead) + u64::from(one_dead));

        match (zero_dead, one_dead) {
            (true, true) => {
                self.counters.leaf();
                seq.len() + 1
            }
            (false, true) => {
                drop(seq);
                self.explore(zero)
            }
            (true, false) => {
                drop(seq);
                self.explore(one)
            }
            (false, false) => {
                drop(seq);
                self.explore_pair(zero, one)
            }
        }
    }

    /// Explore both live children of a fork point and keep the larger result.
    fn explore_pair(&self, zero: BitSequence, one: BitSequence) -> usize {
        let depth = zero.len();
        match self.limiter.try_acquire() {
            Some(permit) => {
                self.counters.fork_taken();
                debug!(depth, in_use = self.limiter.in_use(), "Forking branch pair");
                let this = *self;
                let (a, b) = join_pair(
                    permit,
                    move || this.explore(zero),
                    || self.explore(one),
                );
                debug!(depth, zero = a, one = b, "Branch pair joined");
                a.max(b)
            }
            None => {
                self.counters.fork_declined();
                let a = self.explore(zero);
                let b = self.explore(one);
                a.max(b)
            }
        }
    }
}

/// Run the exhaustive search described by `config`.
///
/// Improvements to the longest sequence seen are sent on `events`, in
/// strictly increasing order of length, when a sender is supplied.
pub fn run_search(
    config: &SearchConfig,
    events: Option<Sender<ProgressEvent>>,
) -> Result<SearchResult, ConfigError> {
    config.validate()?;

    let matcher = ProgressionMatcher::new(config.k)?;
    let limiter = ForkLimiter::new(config.fork_budget());
    let tracker = match events {
        Some(tx) => ResultTracker::with_events(tx),
        None => ResultTracker::new(),
    };
    let counters = SearchCounters::default();

    info!(
        k = config.k,
        workers = config.workers,
        fork_budget = limiter.capacity(),
        "Starting search"
    );
    let start = Instant::now();

    let controller = SearchController::new(&matcher, &limiter, &tracker, &counters);
    let number = controller.explore(BitSequence::new());

    let statistics = counters.snapshot(start.elapsed(), limiter.peak());
    let (_, witness) = tracker.snapshot();
    info!(
        k = config.k,
        number,
        nodes = statistics.nodes_expanded,
        elapsed = ?statistics.elapsed_time,
        "Search complete"
    );

    Ok(SearchResult {
        k: config.k,
        number,
        witness,
        statistics,
    })
}
