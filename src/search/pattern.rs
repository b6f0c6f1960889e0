//! Monochromatic reference sequences

use crate::error::ConfigError;
use crate::sequence::BitSequence;

/// The two constant sequences of length `k`: all zeros and all ones.
///
/// Built once per run and shared read-only by every branch of the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    zeros: BitSequence,
    ones: BitSequence,
}

impl Pattern {
    /// Build the patterns for progressions of length `k`
    pub fn new(k: usize) -> Result<Self, ConfigError> {
        if k == 0 {
            return Err(ConfigError::InvalidProgressionLength(k));
        }
        Ok(Self {
            zeros: BitSequence::repeat(false, k),
            ones: BitSequence::repeat(true, k),
        })
    }

    /// Length of the forbidden progression
    pub fn len(&self) -> usize {
        self.zeros.len()
    }

    /// True if `seq` opens with `k` equal symbols
    pub fn matches(&self, seq: &BitSequence) -> bool {
        self.zeros.is_prefix_of(seq) || self.ones.is_prefix_of(seq)
    }
}
