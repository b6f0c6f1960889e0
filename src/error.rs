//! Error types for vdw-search
//!
//! Only bad input is reported through these types. Broken internal
//! invariants (such as reading past the end of a sequence) panic instead.

use thiserror::Error;

/// Errors raised while building a search configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The forbidden progression length must be at least one
    #[error("Invalid progression length {0}: k must be at least 1")]
    InvalidProgressionLength(usize),
}
