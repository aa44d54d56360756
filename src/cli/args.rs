//! Command-line argument definitions for the report processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the fuel-station report processor
///
/// Converts free-form fuel-station sales reports (mixed Khmer/English)
/// into validated, canonical JSON records.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "report-processor",
    version,
    about = "Parse semi-structured fuel-station sales reports into canonical JSON records",
    long_about = "Parses free-form fuel-station sales reports (mixed Khmer/English, tab- or \
                  space-delimited pseudo-tables, inconsistent date notations) into validated \
                  canonical records with a 0-100 confidence score. Never crashes on malformed \
                  input; always emits a best-effort structured result."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the report processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a report into its canonical JSON wire record (default command)
    Parse(ParseArgs),
    /// Parse a report and print a human-readable validation breakdown
    Validate(ValidateArgs),
}

/// Arguments for the parse command
#[derive(Debug, Clone, Default, Parser)]
pub struct ParseArgs {
    /// Input report file; reads stdin when omitted
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input_path: Option<PathBuf>,

    /// Parser configuration file (JSON); built-in defaults when omitted
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config_path: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(short = 'p', long = "pretty")]
    pub pretty: bool,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Input report file; reads stdin when omitted
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input_path: Option<PathBuf>,

    /// Parser configuration file (JSON); built-in defaults when omitted
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config_path: Option<PathBuf>,
}
