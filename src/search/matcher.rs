//! Detection of monochromatic arithmetic progressions
//!
//! The search grows sequences one symbol at a time, so a progression that
//! becomes complete on an append must contain the symbol just appended.
//! Only progressions ending at the last index are therefore examined, one
//! per common difference, instead of rescanning every window.

use crate::error::ConfigError;
use crate::search::pattern::Pattern;
use crate::sequence::BitSequence;

/// Tests sequences for a monochromatic progression of length `k`
#[derive(Debug, Clone)]
pub struct ProgressionMatcher {
    pattern: Pattern,
}

impl ProgressionMatcher {
    pub fn new(k: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            pattern: Pattern::new(k)?,
        })
    }

    /// Length of the forbidden progression
    pub fn k(&self) -> usize {
        self.pattern.len()
    }

    /// True if `seq` starts with `k` equal symbols
    pub fn matches_pattern(&self, seq: &BitSequence) -> bool {
        self.pattern.matches(seq)
    }

    /// True if some progression of length `k` ending at the last symbol of
    /// `seq` is monochromatic.
    pub fn contains_forbidden_progression(&self, seq: &BitSequence) -> bool {
        let k = self.k();
        let len = seq.len();
        if len < k {
            return false;
        }

        let last = len - 1;
        // Steps with (k - 1) * step < len. With k == 1 the first step already matches.
        let max_step = if k == 1 { 1 } else { last / (k - 1) };

        (1..=max_step).any(|step| {
            let progression = seq.extract_progression(last, step);
            self.matches_pattern(&progression)
        })
    }
}
