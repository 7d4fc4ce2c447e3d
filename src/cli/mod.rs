//! Command-line interface for barcode-solver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **lookup**: Correct one or more barcodes against a whitelist
//! - **substrings**: Find the barcode inside reads whose barcode boundaries are unknown
//! - **stats**: Build the index for a whitelist and report its size
//!
//! ## Usage
//!
//! ```text
//! # Correct barcodes with up to one edit
//! barcode-solver lookup --whitelist 3M-february-2018.txt.gz AGTGTGGCTTGCGGAG
//!
//! # Queries from a file, two edits, JSON output
//! barcode-solver lookup -w whitelist.txt -d 2 --queries reads.txt --format json
//!
//! # Search whole reads
//! barcode-solver substrings -w whitelist.txt GTGAGAGTGTGGCTTGCGGAGCATAGA
//!
//! # Index size
//! barcode-solver stats -w whitelist.txt -d 2 --segments 2
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::alphabet::Alphabet;
use crate::core::types::BarcodeMatch;
use crate::matching::engine::{BarcodeSet, BarcodeSetConfig, DEFAULT_MAX_DIST};
use crate::parsing::queries::read_queries;

pub mod lookup;
pub mod stats;
pub mod substrings;

#[derive(Parser)]
#[command(name = "barcode-solver")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Error-tolerant barcode lookup against a whitelist")]
#[command(
    long_about = "barcode-solver corrects sequencing barcodes against a known whitelist.\n\nIt indexes the whitelist once and reports, for each query:\n- Every whitelist barcode at the smallest edit distance (ties are kept)\n- The distance, up to the configured maximum\n- For whole reads, the substring that matched"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Correct barcodes against the whitelist
    Lookup(lookup::LookupArgs),

    /// Search reads for a barcode at an unknown position
    Substrings(substrings::SubstringsArgs),

    /// Build the index and report its size
    Stats(stats::StatsArgs),
}

/// Options shared by every command that builds a barcode set
#[derive(clap::Args)]
pub struct WhitelistArgs {
    /// Whitelist file, one barcode per line (plain or .gz)
    #[arg(short, long, required = true)]
    pub whitelist: PathBuf,

    /// Maximum edit distance to correct
    #[arg(short = 'd', long, default_value_t = DEFAULT_MAX_DIST)]
    pub max_dist: usize,

    /// Number of pigeonhole segments (default: max-dist + 1)
    #[arg(long)]
    pub segments: Option<usize>,

    /// Symbols allowed in barcodes
    #[arg(long, default_value = "ACGTN")]
    pub alphabet: Alphabet,
}

impl WhitelistArgs {
    pub fn config(&self) -> BarcodeSetConfig {
        let mut config = BarcodeSetConfig::new(self.max_dist).with_alphabet(self.alphabet.clone());
        if let Some(segments) = self.segments {
            config = config.with_segments(segments);
        }
        config
    }

    pub fn load(&self) -> anyhow::Result<BarcodeSet> {
        Ok(BarcodeSet::load_from(&self.whitelist, self.config())?)
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Collect queries from positional arguments and, optionally, a file with one
/// query per line. Every line of the file is kept, repeats included.
pub fn collect_queries(
    positional: Vec<String>,
    file: Option<&PathBuf>,
) -> anyhow::Result<Vec<String>> {
    let mut queries = positional;
    if let Some(path) = file {
        let from_file = read_queries(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
        queries.extend(from_file);
    }

    if queries.is_empty() {
        anyhow::bail!("No queries given");
    }
    Ok(queries)
}

/// Print matches grouped by the query they were produced for
pub fn print_matches(
    results: &[(String, Vec<BarcodeMatch>)],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for (input, matches) in results {
                if matches.is_empty() {
                    println!("{input}: no match");
                    continue;
                }
                println!("{input}:");
                for m in matches {
                    println!(
                        "  {} (matched {}, distance {})",
                        m.reference, m.query, m.distance
                    );
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<_> = results
                .iter()
                .map(|(input, matches)| {
                    serde_json::json!({
                        "input": input,
                        "matches": matches,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("input\treference\tquery\tdistance");
            for (input, matches) in results {
                for m in matches {
                    println!("{input}\t{m}");
                }
            }
        }
    }
    Ok(())
}
