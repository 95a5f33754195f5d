//! Structured error types for the strand toolkit.

use thiserror::Error;

/// Validation failures for sequences and patterns.
#[derive(Debug, Error)]
pub enum StrandError {
    /// A sequence or pattern with no bases
    #[error("{alphabet} sequence must not be empty")]
    EmptySequence {
        /// Alphabet the empty input was validated against.
        alphabet: &'static str,
    },

    /// A byte outside the alphabet
    #[error("invalid {alphabet} base {base:?} at position {position}")]
    InvalidBase {
        /// Alphabet the input was validated against.
        alphabet: &'static str,
        /// The offending character.
        base: char,
        /// Zero-based offset of the offending byte.
        position: usize,
    },
}

/// Convenience alias used throughout the strand crates.
pub type Result<T> = std::result::Result<T, StrandError>;
