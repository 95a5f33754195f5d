//! Alphabet definitions for nucleotide sequence validation.
//!
//! Each alphabet is a zero-sized marker type that implements [`Alphabet`],
//! defining the set of valid uppercase bytes for a sequence type. Only the
//! four unambiguous bases are accepted; IUPAC ambiguity codes are rejected.

use std::fmt;

/// Trait for nucleotide sequence alphabets.
///
/// Implementors define a fixed set of valid uppercase bytes. Validation is
/// case-sensitive: callers uppercase external input before constructing a
/// sequence.
pub trait Alphabet: Clone + 'static {
    /// Human-readable name (e.g. "DNA").
    const NAME: &'static str;

    /// The set of valid uppercase bytes.
    const VALID_BYTES: &'static [u8];

    /// Check whether a byte is a member of the alphabet.
    fn is_valid(b: u8) -> bool {
        Self::VALID_BYTES.contains(&b)
    }
}

/// DNA alphabet: `ACGT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DnaAlphabet;

impl Alphabet for DnaAlphabet {
    const NAME: &'static str = "DNA";
    const VALID_BYTES: &'static [u8] = b"ACGT";
}

/// RNA alphabet: `ACGU`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RnaAlphabet;

impl Alphabet for RnaAlphabet {
    const NAME: &'static str = "RNA";
    const VALID_BYTES: &'static [u8] = b"ACGU";
}

/// One of the four DNA bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Nucleotide {
    /// Adenine
    A,
    /// Cytosine
    C,
    /// Guanine
    G,
    /// Thymine
    T,
}

impl Nucleotide {
    /// All bases in canonical order.
    pub const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

    /// Decode an uppercase byte. Returns `None` for anything outside `ACGT`.
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'A' => Some(Nucleotide::A),
            b'C' => Some(Nucleotide::C),
            b'G' => Some(Nucleotide::G),
            b'T' => Some(Nucleotide::T),
            _ => None,
        }
    }

    /// The uppercase ASCII byte for this base.
    pub fn to_byte(self) -> u8 {
        match self {
            Nucleotide::A => b'A',
            Nucleotide::C => b'C',
            Nucleotide::G => b'G',
            Nucleotide::T => b'T',
        }
    }

    /// Watson-Crick partner: A↔T, C↔G.
    pub fn complement(self) -> Self {
        match self {
            Nucleotide::A => Nucleotide::T,
            Nucleotide::T => Nucleotide::A,
            Nucleotide::C => Nucleotide::G,
            Nucleotide::G => Nucleotide::C,
        }
    }

    /// Position in [`Nucleotide::ALL`], for table indexing.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_byte() as char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dna_accepts_acgt() {
        for &b in b"ACGT" {
            assert!(DnaAlphabet::is_valid(b), "DNA should accept {}", b as char);
        }
    }

    #[test]
    fn dna_rejects_u_and_ambiguity_codes() {
        for &b in b"UNRYacgt" {
            assert!(!DnaAlphabet::is_valid(b), "DNA should reject {}", b as char);
        }
    }

    #[test]
    fn rna_rejects_t() {
        assert!(RnaAlphabet::is_valid(b'U'));
        assert!(!RnaAlphabet::is_valid(b'T'));
    }

    #[test]
    fn nucleotide_byte_roundtrip() {
        for n in Nucleotide::ALL {
            assert_eq!(Nucleotide::from_byte(n.to_byte()), Some(n));
        }
        assert_eq!(Nucleotide::from_byte(b'a'), None);
        assert_eq!(Nucleotide::from_byte(b'N'), None);
    }

    #[test]
    fn complement_is_involution() {
        for n in Nucleotide::ALL {
            assert_eq!(n.complement().complement(), n);
        }
        assert_eq!(Nucleotide::A.complement(), Nucleotide::T);
        assert_eq!(Nucleotide::C.complement(), Nucleotide::G);
    }

    #[test]
    fn index_matches_canonical_order() {
        for (i, n) in Nucleotide::ALL.iter().enumerate() {
            assert_eq!(n.index(), i);
        }
    }
}
