mod config;
mod ops;
mod render;
mod session;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use strand_seq::DnaSequence;
use tracing::debug;

use config::{SessionConfig, DEFAULT_CHART_WIDTH};
use ops::Operation;
use session::Session;

/// Strand: a small DNA sequence analyser.
///
/// Without a subcommand, starts an interactive session that asks for a
/// sequence and then offers a numbered menu of analyses.
#[derive(Parser, Debug)]
#[command(name = "strand")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Analyse short DNA sequences", long_about = None)]
struct Cli {
    /// Disable colored output (also honored: NO_COLOR)
    #[arg(long, global = true)]
    no_color: bool,

    /// Width of the longest bar in the frequency chart
    #[arg(long, global = true, default_value_t = DEFAULT_CHART_WIDTH as u16,
          value_parser = clap::value_parser!(u16).range(1..=200))]
    chart_width: u16,

    /// Enable debug logging; RUST_LOG overrides
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the interactive menu (the default)
    Interactive,
    /// Number of bases in the sequence
    Length(SeqArgs),
    /// Count of each base, with a bar chart
    Frequency(SeqArgs),
    /// Split the sequence at every occurrence of a marker
    Segment {
        #[command(flatten)]
        seq: SeqArgs,
        /// Marker to split on
        marker: String,
    },
    /// Reverse complement of the sequence
    Revcomp(SeqArgs),
    /// Transcribe DNA to RNA (T → U)
    Transcribe(SeqArgs),
    /// Report whether a pattern occurs in the sequence
    Find {
        #[command(flatten)]
        seq: SeqArgs,
        /// Pattern to search for
        pattern: String,
    },
    /// Replace every occurrence of one pattern with another
    Replace {
        #[command(flatten)]
        seq: SeqArgs,
        /// Pattern to replace
        old: String,
        /// Replacement pattern
        new: String,
    },
    /// Predict traits from known markers
    Predict(SeqArgs),
}

#[derive(Args, Debug)]
struct SeqArgs {
    /// DNA sequence (A, C, G, T; case-insensitive)
    sequence: String,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn parse_dna(input: &str, what: &str) -> Result<DnaSequence> {
    DnaSequence::from_input(input).with_context(|| format!("invalid {what} '{input}'"))
}

impl Commands {
    /// Split into the sequence arguments and the operation to run.
    fn into_operation(self) -> Result<Option<(SeqArgs, Operation)>> {
        let pair = match self {
            Commands::Interactive => return Ok(None),
            Commands::Length(seq) => (seq, Operation::Length),
            Commands::Frequency(seq) => (seq, Operation::Frequency),
            Commands::Segment { seq, marker } => {
                let marker = parse_dna(&marker, "marker")?;
                (seq, Operation::Segment { marker })
            }
            Commands::Revcomp(seq) => (seq, Operation::ReverseComplement),
            Commands::Transcribe(seq) => (seq, Operation::Transcribe),
            Commands::Find { seq, pattern } => {
                let pattern = parse_dna(&pattern, "pattern")?;
                (seq, Operation::Find { pattern })
            }
            Commands::Replace { seq, old, new } => {
                let old = parse_dna(&old, "old pattern")?;
                let new = parse_dna(&new, "new pattern")?;
                (seq, Operation::Replace { old, new })
            }
            Commands::Predict(seq) => (seq, Operation::Predict),
        };
        Ok(Some(pair))
    }
}

fn default_log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

fn init_tracing(verbose: bool) {
    let default_level = default_log_level(verbose);
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

fn run_once(args: SeqArgs, op: Operation, config: &SessionConfig) -> Result<()> {
    let seq = parse_dna(&args.sequence, "sequence")?;
    debug!(operation = op.name(), length = seq.len(), "running");
    let report = op.run(&seq);

    let mut stdout = io::stdout().lock();
    if args.json {
        let json = report.to_json().context("failed to serialize report")?;
        writeln!(stdout, "{json}")?;
    } else {
        writeln!(stdout, "{}", report.render(config))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = SessionConfig::from_flags(cli.no_color, cli.chart_width as usize);
    let command = cli.command.unwrap_or(Commands::Interactive);

    match command.into_operation()? {
        Some((args, op)) => {
            // Escapes would corrupt JSON consumers.
            let config = if args.json { config.plain() } else { config };
            run_once(args, op, &config)
        }
        None => {
            let stdin = io::stdin().lock();
            let stdout = io::stdout().lock();
            Session::new(stdin, stdout, config).run()
        }
    }
}
