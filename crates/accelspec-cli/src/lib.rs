//! # accelspec-cli
//!
//! Command-line adapter for the accelerator topology catalog.
//!
//! The `accelspec` binary looks up, lists and validates accelerator slices.
//! All catalog logic lives in `accelspec_core`; this crate only parses
//! arguments, loads settings and formats output.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap, init_logging};
pub use commands::Commands;
pub use error::{CliError, exit_code_for};
pub use parser::Cli;
