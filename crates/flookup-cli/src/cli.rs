//! CLI argument definitions for the lookup harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "flookup",
    version,
    about = "Fuzzy name lookup over tabular data",
    long_about = "Approximate lookup of a query name against the key column of a table.\n\n\
                  Tolerates typos, reordered words, courtesy titles, and business\n\
                  suffixes, and reports a confidence percentage for the best match."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Look up a query against the key column of a CSV table.
    Lookup(LookupArgs),

    /// Scan a sheet export for FUZZYLOOKUP formulas and display them.
    Scan(ScanArgs),

    /// Run the built-in sample table through representative queries.
    Demo,
}

#[derive(Parser)]
pub struct LookupArgs {
    /// The name to search for.
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Path to the CSV table; the first column is the match key.
    #[arg(value_name = "TABLE")]
    pub table: PathBuf,

    /// 1-based column whose value is returned for the best match.
    #[arg(long = "column", default_value_t = 1)]
    pub column: usize,

    /// Also print the confidence percentage.
    #[arg(long = "with-confidence")]
    pub with_confidence: bool,

    /// Treat the first CSV record as data rather than a header.
    #[arg(long = "no-header")]
    pub no_header: bool,

    /// Print the per-scorer breakdown for the winning candidate.
    #[arg(long = "explain")]
    pub explain: bool,
}

#[derive(Parser)]
pub struct ScanArgs {
    /// File to scan (CSV or plain-text sheet export).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
