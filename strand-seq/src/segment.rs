//! Splitting a sequence at every occurrence of a marker.

use crate::pattern::kmp_non_overlapping;
use crate::types::DnaSequence;

/// A fragment of a sequence between two marker occurrences.
///
/// Borrows from the source sequence. May be empty when the marker sits at a
/// boundary or repeats back to back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Start position in the source sequence (inclusive).
    pub start: usize,
    /// Bases of the fragment.
    pub bases: &'a [u8],
}

impl<'a> Segment<'a> {
    /// End position in the source sequence (exclusive).
    pub fn end(&self) -> usize {
        self.start + self.bases.len()
    }

    /// Fragment length.
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    /// Whether the fragment has no bases.
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// The fragment as a string slice.
    pub fn as_str(&self) -> &'a str {
        // Sub-slices of validated sequences are ASCII.
        std::str::from_utf8(self.bases).unwrap_or_default()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Segment<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Split `seq` at every non-overlapping occurrence of `marker`, left to right.
///
/// Yields one more segment than there are marker occurrences.
///
/// ```
/// use strand_seq::{segment, DnaSequence};
///
/// let seq = DnaSequence::new("AATCGAA").unwrap();
/// let parts: Vec<_> = segment(&seq, &DnaSequence::new("TCG").unwrap())
///     .iter()
///     .map(|s| s.as_str())
///     .collect();
/// assert_eq!(parts, ["AA", "AA"]);
/// ```
pub fn segment<'a>(seq: &'a DnaSequence, marker: &DnaSequence) -> Vec<Segment<'a>> {
    let bytes: &'a [u8] = seq;
    let mut segments = Vec::new();
    let mut prev = 0usize;
    for pos in kmp_non_overlapping(bytes, marker) {
        segments.push(Segment {
            start: prev,
            bases: &bytes[prev..pos],
        });
        prev = pos + marker.len();
    }
    segments.push(Segment {
        start: prev,
        bases: &bytes[prev..],
    });
    segments
}

/// Concatenate segments with `marker` between them; inverse of [`segment`].
pub fn join_segments(segments: &[Segment<'_>], marker: &DnaSequence) -> Vec<u8> {
    let mut out = Vec::new();
    for (i, s) in segments.iter().enumerate() {
        if i > 0 {
            out.extend_from_slice(marker);
        }
        out.extend_from_slice(s.bases);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dna(s: &str) -> DnaSequence {
        DnaSequence::new(s).unwrap()
    }

    fn parts(seq: &str, marker: &str) -> Vec<String> {
        let seq = dna(seq);
        segment(&seq, &dna(marker))
            .iter()
            .map(|s| s.as_str().to_string())
            .collect()
    }

    #[test]
    fn splits_reference_case() {
        assert_eq!(parts("AATCGAA", "TCG"), ["AA", "AA"]);
    }

    #[test]
    fn marker_absent_yields_whole_sequence() {
        assert_eq!(parts("ACGT", "GGG"), ["ACGT"]);
    }

    #[test]
    fn boundary_markers_yield_empty_segments() {
        assert_eq!(parts("GATTG", "G"), ["", "ATT", ""]);
    }

    #[test]
    fn consecutive_markers_yield_empty_segments() {
        assert_eq!(parts("ACCT", "C"), ["A", "", "T"]);
    }

    #[test]
    fn marker_equal_to_sequence() {
        assert_eq!(parts("ACGT", "ACGT"), ["", ""]);
    }

    #[test]
    fn overlapping_candidates_split_leftmost() {
        assert_eq!(parts("AAAAA", "AA"), ["", "", "A"]);
    }

    #[test]
    fn segment_offsets() {
        let seq = dna("AATCGAA");
        let segs = segment(&seq, &dna("TCG"));
        assert_eq!(segs[0].start, 0);
        assert_eq!(segs[0].end(), 2);
        assert_eq!(segs[1].start, 5);
        assert_eq!(segs[1].len(), 2);
    }

    #[test]
    fn join_reconstructs_source() {
        let seq = dna("GATCCAGATCGATC");
        let marker = dna("GATC");
        let segs = segment(&seq, &marker);
        assert_eq!(join_segments(&segs, &marker), seq.to_vec());
    }
}
