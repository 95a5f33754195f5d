//! The validation predicate that gates every core operation.
//!
//! A candidate is legal iff it is non-empty and every byte belongs to the
//! alphabet. Validation is case-sensitive; [`normalize`] is what external
//! input boundaries apply first.

use strand_core::{Result, StrandError};

use crate::alphabet::{Alphabet, DnaAlphabet};

/// Whether `s` is a non-empty DNA sequence over `ACGT`.
///
/// ```
/// use strand_seq::is_valid;
///
/// assert!(is_valid("GATTACA"));
/// assert!(!is_valid(""));
/// assert!(!is_valid("gattaca"));
/// assert!(!is_valid("ACGN"));
/// ```
pub fn is_valid(s: impl AsRef<[u8]>) -> bool {
    is_valid_in::<DnaAlphabet>(s.as_ref())
}

/// Whether `s` is a non-empty sequence over alphabet `A`.
pub fn is_valid_in<A: Alphabet>(s: &[u8]) -> bool {
    check::<A>(s).is_ok()
}

/// The validation rule itself, reporting the first violation.
pub fn check<A: Alphabet>(s: &[u8]) -> Result<()> {
    if s.is_empty() {
        return Err(StrandError::EmptySequence { alphabet: A::NAME });
    }
    match s.iter().position(|&b| !A::is_valid(b)) {
        Some(position) => Err(StrandError::InvalidBase {
            alphabet: A::NAME,
            base: char_at(s, position),
            position,
        }),
        None => Ok(()),
    }
}

/// Decode the character starting at byte `position`.
///
/// Every byte before `position` is an ASCII base, so it is a char boundary
/// whenever `s` is UTF-8.
fn char_at(s: &[u8], position: usize) -> char {
    let end = (position + 4).min(s.len());
    String::from_utf8_lossy(&s[position..end])
        .chars()
        .next()
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Trim surrounding whitespace and uppercase raw user input.
pub fn normalize(input: &str) -> String {
    input.trim().to_ascii_uppercase()
}
