//! Binary sequence representation used by the search

pub mod bits;

pub use bits::BitSequence;
