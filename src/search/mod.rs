//! Exhaustive search for two-colour van der Waerden numbers
//!
//! The search is split into:
//! - Pattern: the all-zero and all-one reference sequences of length k
//! - Matcher: suffix-only detection of monochromatic progressions
//! - Controller: recursive backtracking that prunes dead extensions
//! - Parallel: fork permits and structured joins for live branch pairs
//! - Tracker: lock-protected record of the longest sequence seen, for progress output

pub mod config;
pub mod controller;
pub mod matcher;
pub mod parallel;
pub mod pattern;
pub mod result;
pub mod tracker;

pub use config::SearchConfig;
pub use controller::run_search;
pub use tracker::ProgressEvent;
