//! The eight analysis operations and the reports they produce.
//!
//! Both the interactive menu and the one-shot subcommands build an
//! [`Operation`] from already-validated input, run it against the session
//! sequence, and render the resulting [`Report`] as text or JSON.

use serde::Serialize;
use strand_seq::{
    find, frequency, length, predict, replace_all, segment, DnaSequence, FindOutcome,
    FrequencyTable, ReplaceOutcome, RnaSequence,
};

use crate::config::SessionConfig;
use crate::render::{bracketed, colored_sequence, frequency_chart};

/// An analysis request with its validated arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Length,
    Frequency,
    Segment { marker: DnaSequence },
    ReverseComplement,
    Transcribe,
    Find { pattern: DnaSequence },
    Replace { old: DnaSequence, new: DnaSequence },
    Predict,
}

/// The plain-data result of an [`Operation`].
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Report {
    Length {
        length: usize,
    },
    Frequency {
        counts: FrequencyTable,
    },
    Segment {
        marker: DnaSequence,
        segments: Vec<String>,
    },
    ReverseComplement {
        original: DnaSequence,
        reverse_complement: DnaSequence,
    },
    Transcribe {
        original: DnaSequence,
        rna: RnaSequence,
    },
    Find(FindOutcome),
    Replace {
        original: DnaSequence,
        #[serde(flatten)]
        outcome: ReplaceOutcome,
    },
    Predict {
        traits: Vec<&'static str>,
    },
}

impl Operation {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Length => "length",
            Operation::Frequency => "frequency",
            Operation::Segment { .. } => "segment",
            Operation::ReverseComplement => "reverse_complement",
            Operation::Transcribe => "transcribe",
            Operation::Find { .. } => "find",
            Operation::Replace { .. } => "replace",
            Operation::Predict => "predict",
        }
    }

    /// Run against the session sequence.
    pub fn run(&self, seq: &DnaSequence) -> Report {
        match self {
            Operation::Length => Report::Length {
                length: length(seq),
            },
            Operation::Frequency => Report::Frequency {
                counts: frequency(seq),
            },
            Operation::Segment { marker } => Report::Segment {
                marker: marker.clone(),
                segments: segment(seq, marker)
                    .iter()
                    .map(|s| s.as_str().to_string())
                    .collect(),
            },
            Operation::ReverseComplement => Report::ReverseComplement {
                original: seq.clone(),
                reverse_complement: seq.reverse_complement(),
            },
            Operation::Transcribe => Report::Transcribe {
                original: seq.clone(),
                rna: seq.transcribe(),
            },
            Operation::Find { pattern } => Report::Find(find(seq, pattern)),
            Operation::Replace { old, new } => Report::Replace {
                original: seq.clone(),
                outcome: replace_all(seq, old, new),
            },
            Operation::Predict => Report::Predict {
                traits: predict(seq),
            },
        }
    }
}

impl Report {
    /// Human-readable rendering for the terminal.
    pub fn render(&self, config: &SessionConfig) -> String {
        match self {
            Report::Length { length } => format!("Length of DNA sequence: {length}"),
            Report::Frequency { counts } => format!(
                "The frequency of nucleotides in the DNA sequence: {counts}\n\n{}",
                frequency_chart(counts, config.chart_width, config.color).trim_end(),
            ),
            Report::Segment { marker, segments } => format!(
                "Segments of the DNA sequence segmented by '{marker}' are: {}",
                bracketed(segments)
            ),
            Report::ReverseComplement {
                original,
                reverse_complement,
            } => format!(
                "Original sequence: {original}\nReverse complement: {}",
                colored_sequence(reverse_complement, config.color)
            ),
            Report::Transcribe { original, rna } => format!(
                "Original DNA sequence: {original}\nTranscribed RNA sequence: {rna}"
            ),
            Report::Find(outcome) => outcome.message(),
            Report::Replace { original, outcome } => format!(
                "Original sequence: {original}\nUpdated sequence: {}",
                colored_sequence(&outcome.sequence, config.color)
            ),
            Report::Predict { traits } if traits.is_empty() => {
                "No traits predicted based on the provided sequence.".to_string()
            }
            Report::Predict { traits } => format!(
                "Predicted traits based on sequence: {}",
                bracketed(traits)
            ),
        }
    }

    /// Machine-readable rendering.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
