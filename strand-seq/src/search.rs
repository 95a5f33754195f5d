//! Substring search and replace over validated DNA.
//!
//! Patterns are themselves [`DnaSequence`]s, so the non-empty `ACGT`
//! invariant holds for them before any search runs. A missing pattern is a
//! normal outcome, never an error.

use crate::pattern::{kmp, kmp_non_overlapping};
use crate::types::DnaSequence;

/// Result of searching for one pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FindOutcome {
    /// The pattern that was searched for.
    pub pattern: DnaSequence,
    /// Whether the pattern occurs at least once.
    pub found: bool,
    /// Zero-based start of every occurrence, overlapping ones included.
    pub positions: Vec<usize>,
}

impl FindOutcome {
    /// Human-readable status naming the pattern and the outcome.
    pub fn message(&self) -> String {
        if self.found {
            format!("Pattern {} found in provided DNA sequence", self.pattern)
        } else {
            format!("Pattern {} not found in provided DNA sequence", self.pattern)
        }
    }
}

/// Result of a replace, with the number of substitutions made.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReplaceOutcome {
    /// The rewritten sequence (the input, unchanged, when nothing matched).
    pub sequence: DnaSequence,
    /// Number of non-overlapping occurrences that were replaced.
    pub replacements: usize,
}

/// Every start position of `pattern` in `seq`, overlapping ones included.
pub fn find_all(seq: &DnaSequence, pattern: &DnaSequence) -> Vec<usize> {
    kmp(seq, pattern)
}

/// Whether `pattern` occurs as a contiguous substring of `seq`.
pub fn contains(seq: &DnaSequence, pattern: &DnaSequence) -> bool {
    !find_all(seq, pattern).is_empty()
}

/// Search `seq` for `pattern`.
///
/// ```
/// use strand_seq::{find, DnaSequence};
///
/// let seq = DnaSequence::new("GGATCCA").unwrap();
/// let outcome = find(&seq, &DnaSequence::new("ATC").unwrap());
/// assert!(outcome.found);
/// assert_eq!(outcome.message(), "Pattern ATC found in provided DNA sequence");
/// ```
pub fn find(seq: &DnaSequence, pattern: &DnaSequence) -> FindOutcome {
    let positions = find_all(seq, pattern);
    FindOutcome {
        pattern: pattern.clone(),
        found: !positions.is_empty(),
        positions,
    }
}

/// Number of leftmost non-overlapping occurrences of `pattern`.
pub fn count_occurrences(seq: &DnaSequence, pattern: &DnaSequence) -> usize {
    kmp_non_overlapping(seq, pattern).len()
}

/// Replace every non-overlapping occurrence of `old` with `new`, left to right.
///
/// Inserted text is never searched again.
pub fn replace_all(seq: &DnaSequence, old: &DnaSequence, new: &DnaSequence) -> ReplaceOutcome {
    let hits = kmp_non_overlapping(seq, old);
    if hits.is_empty() {
        return ReplaceOutcome {
            sequence: seq.clone(),
            replacements: 0,
        };
    }

    let capacity = seq.len() - hits.len() * old.len() + hits.len() * new.len();
    let mut out = Vec::with_capacity(capacity);
    let mut prev = 0usize;
    for &pos in &hits {
        out.extend_from_slice(&seq[prev..pos]);
        out.extend_from_slice(new);
        prev = pos + old.len();
    }
    out.extend_from_slice(&seq[prev..]);

    ReplaceOutcome {
        // Non-empty: at least one copy of the non-empty `new` was written.
        sequence: DnaSequence::from_validated(out),
        replacements: hits.len(),
    }
}

/// Replace every non-overlapping occurrence of `old` with `new`.
///
/// ```
/// use strand_seq::{replace, DnaSequence};
///
/// let seq = DnaSequence::new("AATTAA").unwrap();
/// let out = replace(&seq, &DnaSequence::new("AA").unwrap(), &DnaSequence::new("G").unwrap());
/// assert_eq!(out.as_str(), "GTTG");
/// ```
pub fn replace(seq: &DnaSequence, old: &DnaSequence, new: &DnaSequence) -> DnaSequence {
    replace_all(seq, old, new).sequence
}
