//! Non-blocking counting limiter for concurrent forks.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts outstanding fork permits against a fixed capacity.
#[derive(Debug)]
pub struct ForkLimiter {
    capacity: usize,
    in_use: AtomicUsize,
    /// Highest value `in_use` has reached.
    peak: AtomicUsize,
}

/// One unit of fork capacity. Returned to the limiter on drop.
#[derive(Debug)]
#[must_use = "dropping a permit releases it immediately"]
pub struct ForkPermit<'a> {
    limiter: &'a ForkLimiter,
}

impl ForkLimiter {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            in_use: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    /// Take one permit if any is free. Never waits.
    pub fn try_acquire(&self) -> Option<ForkPermit<'_>> {
        let mut current = self.in_use.load(Ordering::Acquire);
        loop {
            if current >= self.capacity {
                return None;
            }
            match self.in_use.compare_exchange_weak(
                current,
                current + 1,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => {
                    self.peak.fetch_max(current + 1, Ordering::Relaxed);
                    return Some(ForkPermit { limiter: self });
                }
                Err(c) => current = c,
            }
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Permits currently held.
    pub fn in_use(&self) -> usize {
        self.in_use.load(Ordering::Acquire)
    }

    /// Most permits ever held at the same time.
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::Relaxed)
    }
}

impl Drop for ForkPermit<'_> {
    fn drop(&mut self) {
        self.limiter.in_use.fetch_sub(1, Ordering::AcqRel);
    }
}
