//! Nucleotide sequence analysis for the strand toolkit.
//!
//! Provides a strongly-typed, validated DNA sequence plus the pure operations
//! that run over it:
//!
//! - **Validation** — [`is_valid`], [`normalize`], [`ValidatedSeq::from_input`]
//! - **Metrics** — [`length`], [`frequency`] ([`FrequencyTable`]), [`gc_content`]
//! - **Transforms** — [`segment`], [`DnaSequence::reverse_complement`], [`DnaSequence::transcribe`]
//! - **Pattern search** — [`find`] ([`FindOutcome`]), [`replace`], [`replace_all`]
//! - **Trait prediction** — [`predict`] against the [`REFERENCE_MARKERS`] table
//!
//! # Example
//!
//! ```
//! use strand_seq::{frequency, predict, DnaSequence, Nucleotide};
//!
//! // External input is trimmed and uppercased before validation
//! let dna = DnaSequence::from_input("atcgttt").unwrap();
//! assert_eq!(dna.as_str(), "ATCGTTT");
//!
//! assert_eq!(dna.reverse_complement().as_str(), "AAACGAT");
//! assert_eq!(dna.transcribe().as_str(), "AUCGUUU");
//! assert_eq!(frequency(&dna)[Nucleotide::T], 4);
//! assert_eq!(predict(&dna), ["Blue eye color"]);
//! ```

pub mod alphabet;
pub mod markers;
pub mod metrics;
pub mod pattern;
pub mod search;
pub mod segment;
pub mod seq;
pub mod types;
pub mod validate;

pub use alphabet::{Alphabet, DnaAlphabet, Nucleotide, RnaAlphabet};
pub use markers::{predict, scan, Marker, MarkerHit, MarkerTable, REFERENCE_MARKERS};
pub use metrics::{frequency, gc_content, length, FrequencyTable};
pub use search::{contains, count_occurrences, find, find_all, replace, replace_all, FindOutcome, ReplaceOutcome};
pub use segment::{join_segments, segment, Segment};
pub use seq::ValidatedSeq;
pub use types::{reverse_complement, transcribe, DnaSequence, RnaSequence};
pub use validate::{is_valid, normalize};
