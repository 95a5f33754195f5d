//! The interactive read-eval loop.
//!
//! Generic over its reader and writer so the whole session can be driven
//! from in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use strand_core::hash::short_sha256;
use strand_core::Summarizable;
use strand_seq::DnaSequence;
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::ops::Operation;
use crate::render::colored_sequence;

const WELCOME: &str = "\
        Welcome to the DNA Sequence Analyser.
    Analyse a DNA sequence: count bases, segment it, transform it,
    search and replace patterns, and match it against known markers.
";

const SEQUENCE_PROMPT: &str = "\nPlease enter DNA sequence you would like to analyse: ";
const SELECTION_PROMPT: &str =
    "Select an option by typing the corresponding number (1-8) or type 'q' to exit: ";

/// Entries of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    /// 1. Sequence length
    Length,
    /// 2. Base counts and chart
    Frequency,
    /// 3. Split at a marker
    Segment,
    /// 4. Reverse complement
    ReverseComplement,
    /// 5. DNA → RNA
    Transcribe,
    /// 6. Pattern search
    Find,
    /// 7. Pattern replace
    Replace,
    /// 8. Marker-based trait prediction
    Predict,
}

impl MenuOption {
    /// Menu entries in the order they are numbered.
    pub const ALL: [MenuOption; 8] = [
        MenuOption::Length,
        MenuOption::Frequency,
        MenuOption::Segment,
        MenuOption::ReverseComplement,
        MenuOption::Transcribe,
        MenuOption::Find,
        MenuOption::Replace,
        MenuOption::Predict,
    ];

    /// Text shown next to the entry's number.
    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Length => "Sequence length",
            MenuOption::Frequency => "Nucleotide frequencies",
            MenuOption::Segment => "Segmenting the DNA",
            MenuOption::ReverseComplement => "Reverse complementation",
            MenuOption::Transcribe => "DNA Transcription",
            MenuOption::Find => "Find specific pattern",
            MenuOption::Replace => "Replace pattern in the sequence",
            MenuOption::Predict => "Identify genetic markers and predict traits",
        }
    }
}

/// What the user typed at the selection prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A number naming a menu entry.
    Option(MenuOption),
    /// `q` in either case.
    Quit,
    /// An integer outside 1..=8, of any sign or magnitude.
    OutOfRange,
    /// Anything that is not an integer.
    NotANumber,
}

impl Selection {
    /// Classify one line typed at the selection prompt.
    ///
    /// Integers are an optional sign followed by digits, with single
    /// underscores allowed between digits.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.eq_ignore_ascii_case("q") {
            return Selection::Quit;
        }
        let (negative, digits) = match input.as_bytes().first() {
            Some(b'-') => (true, &input[1..]),
            Some(b'+') => (false, &input[1..]),
            _ => (false, input),
        };
        if !is_integer_literal(digits) {
            return Selection::NotANumber;
        }
        let digits: String = digits.chars().filter(|&c| c != '_').collect();
        // Too large for u64 is still an integer, just out of range.
        match digits.parse::<u64>() {
            Ok(n) if !negative && (1..=MenuOption::ALL.len() as u64).contains(&n) => {
                Selection::Option(MenuOption::ALL[n as usize - 1])
            }
            _ => Selection::OutOfRange,
        }
    }
}

fn is_integer_literal(digits: &str) -> bool {
    !digits.is_empty()
        && !digits.starts_with('_')
        && !digits.ends_with('_')
        && !digits.contains("__")
        && digits.bytes().all(|b| b.is_ascii_digit() || b == b'_')
}

/// Render the numbered menu.
pub fn menu_text() -> String {
    let mut out = String::from("\nHere are available options:\n");
    for (i, option) in MenuOption::ALL.iter().enumerate() {
        out.push_str(&format!("        {}. {}\n", i + 1, option.label()));
    }
    out
}

/// One interactive session over a reader and a writer.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{WELCOME}")?;

        let Some(seq) = self.read_sequence()? else {
            info!("input closed before a sequence was entered");
            return Ok(());
        };
        info!(
            summary = %seq.summary(),
            sha256 = %short_sha256(&seq, 12),
            "session sequence accepted"
        );

        writeln!(self.output, "\nThe entered DNA sequence is:")?;
        writeln!(self.output, "{}", colored_sequence(&seq, self.config.color))?;
        writeln!(self.output, "{}", menu_text())?;

        loop {
            let Some(line) = self.prompt(SELECTION_PROMPT)? else {
                break;
            };
            let option = match Selection::parse(&line) {
                Selection::Quit => {
                    writeln!(self.output, "\nThank you for using DNA Analyser. Goodbye!")?;
                    break;
                }
                Selection::OutOfRange => {
                    writeln!(
                        self.output,
                        "\nInvalid selection. Please enter a number between 1 and 8 or 'q' to exit."
                    )?;
                    continue;
                }
                Selection::NotANumber => {
                    writeln!(
                        self.output,
                        "\nInvalid input. Please enter a valid number or type 'q' to exit."
                    )?;
                    continue;
                }
                Selection::Option(option) => option,
            };

            let Some(op) = self.build_operation(option)? else {
                break;
            };
            debug!(operation = op.name(), "running");
            let report = op.run(&seq);
            writeln!(self.output, "\n{}\n", report.render(&self.config))?;
        }

        info!("session finished");
        Ok(())
    }

    fn read_sequence(&mut self) -> Result<Option<DnaSequence>> {
        loop {
            let Some(line) = self.prompt(SEQUENCE_PROMPT)? else {
                return Ok(None);
            };
            match DnaSequence::from_input(&line) {
                Ok(seq) => return Ok(Some(seq)),
                Err(e) => {
                    warn!(error = %e, "rejected sequence");
                    writeln!(
                        self.output,
                        "\nInvalid DNA sequence. Please enter only letters A, T, G, and C."
                    )?;
                }
            }
        }
    }

    /// Collect any patterns the option needs. `None` means input ended.
    fn build_operation(&mut self, option: MenuOption) -> Result<Option<Operation>> {
        let op = match option {
            MenuOption::Length => Operation::Length,
            MenuOption::Frequency => Operation::Frequency,
            MenuOption::ReverseComplement => Operation::ReverseComplement,
            MenuOption::Transcribe => Operation::Transcribe,
            MenuOption::Predict => Operation::Predict,
            MenuOption::Segment => {
                let Some(marker) = self.read_pattern(
                    "\nPlease specify the nucleotide by which you want to segment the DNA sequence: ",
                    "\nInvalid nucleotide. Please enter only letters A, C, G, and T.",
                )?
                else {
                    return Ok(None);
                };
                Operation::Segment { marker }
            }
            MenuOption::Find => {
                let Some(pattern) = self.read_pattern(
                    "\nPlease enter the nucleotide pattern you want to search for: ",
                    "\nInvalid nucleotide pattern. Please enter only letters A, C, G, and T.",
                )?
                else {
                    return Ok(None);
                };
                Operation::Find { pattern }
            }
            MenuOption::Replace => {
                let Some((old, new)) = self.read_replace_patterns()? else {
                    return Ok(None);
                };
                Operation::Replace { old, new }
            }
        };
        Ok(Some(op))
    }

    fn read_pattern(&mut self, prompt: &str, error: &str) -> Result<Option<DnaSequence>> {
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match DnaSequence::from_input(&line) {
                Ok(pattern) => return Ok(Some(pattern)),
                Err(e) => {
                    warn!(error = %e, "rejected pattern");
                    writeln!(self.output, "{error}")?;
                }
            }
        }
    }

    fn read_replace_patterns(&mut self) -> Result<Option<(DnaSequence, DnaSequence)>> {
        loop {
            let Some(old) =
                self.prompt("\nPlease enter the old nucleotide pattern you want to replace: ")?
            else {
                return Ok(None);
            };
            let Some(new) = self.prompt("Please enter the new nucleotide pattern: ")? else {
                return Ok(None);
            };
            match (DnaSequence::from_input(&old), DnaSequence::from_input(&new)) {
                (Ok(old), Ok(new)) => return Ok(Some((old, new))),
                (old, new) => {
                    for e in [old.err(), new.err()].into_iter().flatten() {
                        warn!(error = %e, "rejected replace pattern");
                    }
                    writeln!(
                        self.output,
                        "\nInvalid nucleotide pattern. Please enter only letters A, C, G, and T."
                    )?;
                }
            }
        }
    }

    /// Print a prompt and read one line. `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush().context("failed to flush prompt")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Consume the session, returning the writer.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
