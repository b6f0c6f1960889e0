//! Bounded parallel exploration of branch pairs.
//!
//! The search forks at nodes where both extensions are still alive. Each
//! fork needs a permit from a [`ForkLimiter`] whose capacity is one less
//! than the configured worker count, since the calling thread already
//! occupies a slot. Acquisition never blocks: when no permit is free the
//! branch pair is explored sequentially on the current thread.
//!
//! A fork is a structured join. Both branches run inside a thread scope,
//! always to completion, and the permit is returned only after both
//! results are in.
//!
//! # Example
//!
//! ```ignore
//! let limiter = ForkLimiter::new(3);
//! let (a, b) = match limiter.try_acquire() {
//!     Some(permit) => join_pair(permit, || left(), || right()),
//!     None => (left(), right()),
//! };
//! ```

pub mod limiter;

pub use limiter::{ForkLimiter, ForkPermit};

use std::panic;
use std::thread;

/// Run `left` on a scoped thread and `right` on the current one, returning
/// both results once each has finished. The permit is held for the whole
/// join and released on return.
pub fn join_pair<A, B, RA, RB>(permit: ForkPermit<'_>, left: A, right: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB,
    RA: Send,
{
    let results = thread::scope(|s| {
        let handle = s.spawn(left);
        let right_result = right();
        match handle.join() {
            Ok(left_result) => (left_result, right_result),
            // A panic in a branch is a broken invariant; keep unwinding.
            Err(payload) => panic::resume_unwind(payload),
        }
    });
    drop(permit);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_pair_returns_both_results() {
        let limiter = ForkLimiter::new(1);
        let permit = limiter.try_acquire().unwrap();
        let (a, b) = join_pair(permit, || 2 + 2, || "right");
        assert_eq!(a, 4);
        assert_eq!(b, "right");
        assert_eq!(limiter.in_use(), 0);
    }

    #[test]
    fn test_join_pair_holds_permit_until_join() {
        let limiter = ForkLimiter::new(1);
        let permit = limiter.try_acquire().unwrap();
        let (held_left, held_right) = join_pair(
            permit,
            || limiter.in_use(),
            || limiter.try_acquire().is_none(),
        );
        assert_eq!(held_left, 1);
        assert!(held_right);
        assert_eq!(limiter.in_use(), 0);
    }

    #[test]
    #[should_panic(expected = "branch failed")]
    fn test_join_pair_propagates_panic() {
        let limiter = ForkLimiter::new(1);
        let permit = limiter.try_acquire().unwrap();
        let _ = join_pair(permit, || -> u32 { panic!("branch failed") }, || 0u32);
    }
}
