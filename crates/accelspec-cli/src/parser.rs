//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use accelspec_core::OutputFormat;
use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the accelerator topology catalog.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "accelspec")]
#[command(about = "Look up hardware topology for accelerator slices")]
#[command(version)]
pub struct Cli {
    /// Output format: "text" or "json" (overrides ACCELSPEC_OUTPUT_FORMAT)
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

fn parse_output_format(value: &str) -> Result<OutputFormat, String> {
    value.parse().map_err(|e: accelspec_core::SettingsError| e.to_string())
}
