//! Shared record of the longest progression-free sequence seen so far.
//!
//! The record only drives progress reporting. The final answer is threaded
//! back up the recursion by the controller and never read from here.

use crate::sequence::BitSequence;
use crossbeam_channel::Sender;
use std::sync::{Mutex, PoisonError};
use tracing::warn;

/// Emitted each time a strictly longer sequence is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEvent {
    pub length: usize,
    pub sequence: BitSequence,
}

#[derive(Debug, Default)]
struct Best {
    length: usize,
    sequence: BitSequence,
    /// Set once the event receiver has gone away
    events_closed: bool,
}

/// Lock-protected (length, sequence) pair whose length never decreases.
#[derive(Debug, Default)]
pub struct ResultTracker {
    best: Mutex<Best>,
    events: Option<Sender<ProgressEvent>>,
}

impl ResultTracker {
    /// Tracker that records silently.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker that also reports every improvement on `events`.
    pub fn with_events(events: Sender<ProgressEvent>) -> Self {
        Self {
            best: Mutex::default(),
            events: Some(events),
        }
    }

    /// Record `seq` if it is longer than the current best. Returns true on
    /// improvement.
    pub fn record(&self, seq: &BitSequence) -> bool {
        let mut best = self.best.lock().unwrap_or_else(PoisonError::into_inner);
        if seq.len() <= best.length {
            return false;
        }
        best.length = seq.len();
        best.sequence = seq.clone();

        // Sent under the lock so receivers observe improvements in order.
        if let Some(tx) = &self.events {
            if !best.events_closed {
                let event = ProgressEvent {
                    length: best.length,
                    sequence: best.sequence.clone(),
                };
                if tx.send(event).is_err() {
                    best.events_closed = true;
                    warn!(length = best.length, "Progress receiver closed, no further events");
                }
            }
        }
        true
    }

    /// Copy of the current best pair.
    pub fn snapshot(&self) -> (usize, BitSequence) {
        let best = self.best.lock().unwrap_or_else(PoisonError::into_inner);
        (best.length, best.sequence.clone())
    }
}
