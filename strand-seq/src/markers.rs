//! Marker-based trait prediction.
//!
//! A [`MarkerTable`] maps short marker sequences to trait labels. A trait is
//! predicted whenever its marker occurs anywhere in the sequence; markers are
//! evaluated independently, so overlapping hits all count and there is no
//! precedence between traits.
//!
//! [`REFERENCE_MARKERS`] is a small illustrative table, not a curated
//! biological database.

use crate::pattern::kmp;
use crate::types::DnaSequence;

/// A marker sequence and the trait it indicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Marker {
    /// Marker bases (uppercase `ACGT`).
    pub sequence: &'static str,
    /// Human-readable trait label.
    pub trait_label: &'static str,
}

/// A marker found in a sequence, with every position it occurs at.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MarkerHit {
    /// The table entry that matched.
    pub marker: Marker,
    /// Zero-based start of every occurrence, overlapping ones included.
    pub positions: Vec<usize>,
}

/// Read-only, ordered marker → trait mapping.
#[derive(Debug, Clone, Copy)]
pub struct MarkerTable {
    markers: &'static [Marker],
}

/// The built-in reference table.
pub static REFERENCE_MARKERS: MarkerTable = MarkerTable::new(REFERENCE_ENTRIES);

const REFERENCE_ENTRIES: &[Marker] = &[
    marker("ATCG", "Blue eye color"),
    marker("CGAT", "Blonde hair color"),
    marker("GATC", "Susceptibility to hair loss"),
    marker("GCTA", "AB blood type"),
    marker("TCGA", "Tall height"),
    marker("GGTA", "Freckles"),
    marker("CATG", "Susceptibility to Type 2 Diabetes"),
];

const fn marker(sequence: &'static str, trait_label: &'static str) -> Marker {
    Marker {
        sequence,
        trait_label,
    }
}

impl MarkerTable {
    /// Wrap a static slice of markers. Marker sequences must be unique.
    pub const fn new(markers: &'static [Marker]) -> Self {
        Self { markers }
    }

    /// Markers in table order.
    pub fn markers(&self) -> &'static [Marker] {
        self.markers
    }

    /// Number of markers.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Whether the table has no markers.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Trait label for an exact marker sequence.
    pub fn lookup(&self, sequence: &str) -> Option<&'static str> {
        self.markers
            .iter()
            .find(|m| m.sequence == sequence)
            .map(|m| m.trait_label)
    }

    /// Every marker occurring in `seq`, in table order.
    pub fn scan(&self, seq: &DnaSequence) -> Vec<MarkerHit> {
        self.markers
            .iter()
            .filter_map(|m| {
                let positions = kmp(seq, m.sequence.as_bytes());
                (!positions.is_empty()).then(|| MarkerHit {
                    marker: *m,
                    positions,
                })
            })
            .collect()
    }

    /// Labels of every trait whose marker occurs in `seq`, in table order.
    pub fn predict(&self, seq: &DnaSequence) -> Vec<&'static str> {
        self.markers
            .iter()
            .filter(|m| !kmp(seq, m.sequence.as_bytes()).is_empty())
            .map(|m| m.trait_label)
            .collect()
    }
}

/// Predict traits from the reference table.
///
/// ```
/// use strand_seq::{predict, DnaSequence};
///
/// let traits = predict(&DnaSequence::new("ATCGAT").unwrap());
/// assert_eq!(traits, ["Blue eye color", "Blonde hair color"]);
/// ```
pub fn predict(seq: &DnaSequence) -> Vec<&'static str> {
    REFERENCE_MARKERS.predict(seq)
}

/// Scan the reference table, reporting marker positions.
pub fn scan(seq: &DnaSequence) -> Vec<MarkerHit> {
    REFERENCE_MARKERS.scan(seq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::is_valid;

    fn dna(s: &str) -> DnaSequence {
        DnaSequence::new(s).unwrap()
    }

    #[test]
    fn reference_table_is_well_formed() {
        assert_eq!(REFERENCE_MARKERS.len(), 7);
        for (i, m) in REFERENCE_MARKERS.markers().iter().enumerate() {
            assert!(is_valid(m.sequence), "marker {} is not valid DNA", m.sequence);
            assert_eq!(m.sequence.len(), 4);
            assert_eq!(m.trait_label, m.trait_label.trim());
            assert!(
                REFERENCE_MARKERS.markers()[i + 1..]
                    .iter()
                    .all(|o| o.sequence != m.sequence),
                "duplicate marker {}",
                m.sequence
            );
        }
    }

    #[test]
    fn predicts_blue_eyes() {
        let traits = predict(&dna("ATCGTACGATCGATCGATCGTAGC"));
        assert!(traits.contains(&"Blue eye color"));
    }

    #[test]
    fn overlapping_markers_all_count() {
        // ATCGA contains ATCG (0) and TCGA (1).
        assert_eq!(predict(&dna("ATCGA")), ["Blue eye color", "Tall height"]);
    }

    #[test]
    fn results_follow_table_order() {
        // CATG appears before ATCG in the sequence but after it in the table.
        assert_eq!(
            predict(&dna("CATGTTATCG")),
            ["Blue eye color", "Susceptibility to Type 2 Diabetes"]
        );
    }

    #[test]
    fn no_markers_is_empty_not_error() {
        assert!(predict(&dna("AAAAAAAA")).is_empty());
        assert!(predict(&dna("ATC")).is_empty());
    }

    #[test]
    fn scan_reports_positions() {
        let hits = scan(&dna("GATCGATC"));
        let gatc = hits
            .iter()
            .find(|h| h.marker.sequence == "GATC")
            .expect("GATC hit");
        assert_eq!(gatc.positions, vec![0, 4]);
        assert_eq!(hits.len(), predict(&dna("GATCGATC")).len());
    }

    #[test]
    fn lookup_by_sequence() {
        assert_eq!(REFERENCE_MARKERS.lookup("GGTA"), Some("Freckles"));
        assert_eq!(REFERENCE_MARKERS.lookup("AAAA"), None);
    }

    #[test]
    fn custom_table() {
        static SMALL: MarkerTable = MarkerTable::new(&[Marker {
            sequence: "AAA",
            trait_label: "Poly-A",
        }]);
        assert_eq!(SMALL.predict(&dna("CAAAC")), ["Poly-A"]);
        assert!(!SMALL.is_empty());
    }
}
