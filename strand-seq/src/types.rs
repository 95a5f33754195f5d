//! Concrete sequence type aliases and the per-base transforms.
//!
//! - [`DnaSequence`] — complement, reverse complement, transcription
//! - [`RnaSequence`] — reverse transcription

use crate::alphabet::{DnaAlphabet, Nucleotide, RnaAlphabet};
use crate::seq::ValidatedSeq;

/// A validated DNA sequence over `ACGT`.
pub type DnaSequence = ValidatedSeq<DnaAlphabet>;

/// A validated RNA sequence over `ACGU`.
pub type RnaSequence = ValidatedSeq<RnaAlphabet>;

fn dna_complement(b: u8) -> u8 {
    match Nucleotide::from_byte(b) {
        Some(n) => n.complement().to_byte(),
        None => unreachable!("unvalidated byte {:?} in DNA sequence", b as char),
    }
}

// ---------------------------------------------------------------------------
// DNA methods
// ---------------------------------------------------------------------------

impl DnaSequence {
    /// Per-base Watson-Crick complement, in the original order.
    pub fn complement(&self) -> DnaSequence {
        let c: Vec<u8> = self.iter().map(|&b| dna_complement(b)).collect();
        DnaSequence::from_validated(c)
    }

    /// Return the reverse complement.
    ///
    /// ```
    /// use strand_seq::DnaSequence;
    ///
    /// let seq = DnaSequence::new("ATCG").unwrap();
    /// assert_eq!(seq.reverse_complement().as_str(), "CGAT");
    /// ```
    pub fn reverse_complement(&self) -> DnaSequence {
        let rc: Vec<u8> = self.iter().rev().map(|&b| dna_complement(b)).collect();
        DnaSequence::from_validated(rc)
    }

    /// Transcribe DNA to RNA (T → U).
    pub fn transcribe(&self) -> RnaSequence {
        let rna: Vec<u8> = self
            .iter()
            .map(|&b| if b == b'T' { b'U' } else { b })
            .collect();
        RnaSequence::from_validated(rna)
    }
}

// ---------------------------------------------------------------------------
// RNA methods
// ---------------------------------------------------------------------------

impl RnaSequence {
    /// Reverse-transcribe RNA to DNA (U → T).
    pub fn reverse_transcribe(&self) -> DnaSequence {
        let dna: Vec<u8> = self
            .iter()
            .map(|&b| if b == b'U' { b'T' } else { b })
            .collect();
        DnaSequence::from_validated(dna)
    }
}

/// Reverse complement of a validated sequence.
pub fn reverse_complement(seq: &DnaSequence) -> DnaSequence {
    seq.reverse_complement()
}

/// Transcription of a validated sequence.
pub fn transcribe(seq: &DnaSequence) -> RnaSequence {
    seq.transcribe()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dna(s: &str) -> DnaSequence {
        DnaSequence::new(s).unwrap()
    }

    // --- Reverse complement ---

    #[test]
    fn revcomp_reference_case() {
        assert_eq!(reverse_complement(&dna("ATCG")).as_str(), "CGAT");
    }

    #[test]
    fn revcomp_palindromic() {
        assert_eq!(dna("ACGT").reverse_complement().as_str(), "ACGT");
        assert_eq!(dna("GAATTC").reverse_complement().as_str(), "GAATTC");
    }

    #[test]
    fn revcomp_asymmetric() {
        assert_eq!(dna("AACG").reverse_complement().as_str(), "CGTT");
    }

    #[test]
    fn revcomp_single_base() {
        assert_eq!(dna("A").reverse_complement().as_str(), "T");
        assert_eq!(dna("G").reverse_complement().as_str(), "C");
    }

    #[test]
    fn complement_then_reverse_matches() {
        let seq = dna("ATGCCGTAAT");
        let mut reversed = seq.complement().into_bytes();
        reversed.reverse();
        assert_eq!(reversed, seq.reverse_complement().into_bytes());
    }

    // --- Transcription ---

    #[test]
    fn dna_to_rna() {
        assert_eq!(transcribe(&dna("ATCG")).as_str(), "AUCG");
    }

    #[test]
    fn transcribe_without_thymine_is_unchanged() {
        assert_eq!(dna("GCGCA").transcribe().as_str(), "GCGCA");
    }

    #[test]
    fn transcription_roundtrip() {
        let seq = dna("ATCGATCGTTTT");
        assert_eq!(seq.transcribe().reverse_transcribe(), seq);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dna_strategy() -> impl Strategy<Value = DnaSequence> {
        proptest::collection::vec(
            prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')],
            1..200,
        )
        .prop_map(|v| DnaSequence::new(v).unwrap())
    }

    proptest! {
        #[test]
        fn revcomp_is_involution(seq in dna_strategy()) {
            prop_assert_eq!(seq.reverse_complement().reverse_complement(), seq);
        }

        #[test]
        fn transcription_replaces_only_thymine(seq in dna_strategy()) {
            let rna = seq.transcribe();
            prop_assert!(!rna.contains(&b'T'));
            prop_assert_eq!(rna.len(), seq.len());
            for (&d, &r) in seq.iter().zip(rna.iter()) {
                prop_assert_eq!(r, if d == b'T' { b'U' } else { d });
            }
        }
    }
}
