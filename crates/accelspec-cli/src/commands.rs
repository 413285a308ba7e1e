//! Main commands enum.
//!
//! This module defines the available commands for the CLI tool.

use clap::Subcommand;

/// Available commands for the accelerator catalog tool.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Show the topology characteristics of an accelerator slice
    Lookup {
        /// Accelerator name, matched exactly (e.g., "v4-8", "v5p-128")
        name: String,
    },

    /// List known accelerator slices
    List {
        /// Only show one generation (e.g., "v4", "v5p", "v5e")
        #[arg(short, long)]
        generation: Option<String>,
    },

    /// Check the catalog for inconsistent entries
    Validate,
}
