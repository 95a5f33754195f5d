//! Composition statistics: length, per-base frequencies, GC content.

use std::fmt;
use std::ops::Index;

use strand_core::Sequence;

use crate::alphabet::Nucleotide;
use crate::types::DnaSequence;

/// Count of each of the four bases. Every base has an entry, zero or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FrequencyTable {
    counts: [usize; 4],
}

impl FrequencyTable {
    /// Count for one base.
    pub fn get(&self, base: Nucleotide) -> usize {
        self.counts[base.index()]
    }

    /// `(base, count)` pairs in canonical order A, C, G, T.
    pub fn iter(&self) -> impl Iterator<Item = (Nucleotide, usize)> + '_ {
        Nucleotide::ALL.iter().map(move |&n| (n, self.get(n)))
    }

    /// Sum of all counts; equals the sequence length.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// The largest count, or `None` when every count is zero.
    ///
    /// Ties resolve to the first base in canonical order.
    pub fn most_common(&self) -> Option<(Nucleotide, usize)> {
        self.iter()
            .fold(None, |best, (n, c)| match best {
                Some((_, bc)) if bc >= c => best,
                _ => Some((n, c)),
            })
            .filter(|&(_, c)| c > 0)
    }

    fn increment(&mut self, base: Nucleotide) {
        self.counts[base.index()] += 1;
    }
}

impl Index<Nucleotide> for FrequencyTable {
    type Output = usize;

    fn index(&self, base: Nucleotide) -> &usize {
        &self.counts[base.index()]
    }
}

impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (n, c)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{n}: {c}")?;
        }
        f.write_str("}")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FrequencyTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(4))?;
        for (n, c) in self.iter() {
            map.serialize_entry(&n, &c)?;
        }
        map.end()
    }
}

/// Number of bases in the sequence.
pub fn length(seq: &DnaSequence) -> usize {
    seq.len()
}

/// Count every base of the sequence.
///
/// ```
/// use strand_seq::{frequency, DnaSequence, Nucleotide};
///
/// let table = frequency(&DnaSequence::new("AATT").unwrap());
/// assert_eq!(table[Nucleotide::A], 2);
/// assert_eq!(table[Nucleotide::C], 0);
/// ```
pub fn frequency(seq: &DnaSequence) -> FrequencyTable {
    let mut table = FrequencyTable::default();
    for &b in seq.as_bytes() {
        match Nucleotide::from_byte(b) {
            Some(n) => table.increment(n),
            None => unreachable!("unvalidated byte {:?} in DNA sequence", b as char),
        }
    }
    table
}

/// GC content as a fraction in [0.0, 1.0].
pub fn gc_content(seq: &DnaSequence) -> f64 {
    let table = frequency(seq);
    (table[Nucleotide::G] + table[Nucleotide::C]) as f64 / table.total() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dna(s: &str) -> DnaSequence {
        DnaSequence::new(s).unwrap()
    }

    #[test]
    fn length_reference_case() {
        assert_eq!(length(&dna("ATCG")), 4);
        assert_eq!(length(&dna("A")), 1);
    }

    #[test]
    fn frequency_reference_case() {
        let table = frequency(&dna("AATT"));
        assert_eq!(table.get(Nucleotide::A), 2);
        assert_eq!(table.get(Nucleotide::C), 0);
        assert_eq!(table.get(Nucleotide::G), 0);
        assert_eq!(table.get(Nucleotide::T), 2);
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn frequency_covers_all_bases() {
        let table = frequency(&dna("GGG"));
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(
            entries,
            vec![
                (Nucleotide::A, 0),
                (Nucleotide::C, 0),
                (Nucleotide::G, 3),
                (Nucleotide::T, 0)
            ]
        );
    }

    #[test]
    fn frequency_display() {
        assert_eq!(frequency(&dna("AATT")).to_string(), "{A: 2, C: 0, G: 0, T: 2}");
    }

    #[test]
    fn most_common_prefers_canonical_order_on_ties() {
        assert_eq!(frequency(&dna("AATT")).most_common(), Some((Nucleotide::A, 2)));
        assert_eq!(frequency(&dna("CGG")).most_common(), Some((Nucleotide::G, 2)));
        assert_eq!(FrequencyTable::default().most_common(), None);
    }

    #[test]
    fn gc_content_basic() {
        assert!((gc_content(&dna("ATGC")) - 0.5).abs() < 1e-10);
        assert_eq!(gc_content(&dna("AAAA")), 0.0);
        assert_eq!(gc_content(&dna("GCGC")), 1.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn frequency_serializes_as_map() {
        let json = serde_json::to_string(&frequency(&dna("AATT"))).unwrap();
        assert_eq!(json, r#"{"A":2,"C":0,"G":0,"T":2}"#);
    }
}
