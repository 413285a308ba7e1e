//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from core errors to exit codes and user-facing messages.

use accelspec_core::{CatalogError, SettingsError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Accelerator name is not in the catalog.
    #[error("Unknown accelerator: {0}")]
    NotFound(String),

    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The catalog failed its consistency checks.
    #[error("Catalog failed consistency checks ({0} violation(s))")]
    InconsistentCatalog(usize),

    /// Rendering or writing output failed.
    #[error("Output error: {0}")]
    Output(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound(_) => 1,
            Self::Arguments(_) => 2,            // EX_USAGE
            Self::InconsistentCatalog(_) => 65, // EX_DATAERR
            Self::Output(_) => 74,              // EX_IOERR
            Self::Config(_) => 78,              // EX_CONFIG
        }
    }
}

/// Exit code for an error returned from command dispatch.
///
/// Errors carrying a [`CliError`] (directly or under added context) use its
/// code; anything else is a general failure.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}

impl From<CatalogError> for CliError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { name } => Self::NotFound(name),
        }
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::NotFound("v9-8".into()).exit_code(), 1);
        assert_eq!(CliError::Arguments("bad".into()).exit_code(), 2);
        assert_eq!(CliError::InconsistentCatalog(1).exit_code(), 65);
        assert_eq!(CliError::Config("bad".into()).exit_code(), 78);
    }

    #[test]
    fn test_from_catalog_error() {
        let err: CliError = CatalogError::NotFound {
            name: "v9-8".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Unknown accelerator: v9-8");
    }

    #[test]
    fn test_exit_code_for_dispatch_errors() {
        let err = anyhow::Error::from(CliError::InconsistentCatalog(1));
        assert_eq!(exit_code_for(&err), 65);

        let err = anyhow::Error::from(CliError::Config("bad".into()));
        let err = err.context("loading settings");
        assert_eq!(exit_code_for(&err), 78);

        let err = anyhow::anyhow!("stdout closed");
        assert_eq!(exit_code_for(&err), 1);
    }

    #[test]
    fn test_inconsistent_catalog_message() {
        assert_eq!(
            CliError::InconsistentCatalog(3).to_string(),
            "Catalog failed consistency checks (3 violation(s))"
        );
    }
}
