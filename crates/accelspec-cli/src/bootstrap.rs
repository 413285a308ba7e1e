//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where the CLI adapter is wired together:
//! - Settings are loaded from the environment or a `.env` file
//! - Command-line overrides are layered on top
//! - Logging is installed
//! - The catalog handle is attached to the context
//!
//! Command handlers receive the composed `CliContext` and read from it.

use std::collections::HashMap;
use std::path::Path;

use accelspec_core::{OutputFormat, Settings, TopologyCatalog};
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Layered settings (environment first, then flag overrides).
    pub settings: Settings,
}

impl CliConfig {
    /// Load settings from the process environment.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a `.env` file in the
    /// working directory.
    pub fn from_env() -> Result<Self, CliError> {
        let settings = Settings::from_source(|key| std::env::var(key).ok())?;
        Ok(Self { settings })
    }

    /// Load settings from an explicit `.env` file.
    ///
    /// The file is parsed without touching the process environment.
    pub fn from_env_file(path: &Path) -> Result<Self, CliError> {
        let entries = dotenvy::from_path_iter(path)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?
            .collect::<Result<HashMap<String, String>, _>>()
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;

        let settings = Settings::from_source(|key| entries.get(key).cloned())?;
        Ok(Self { settings })
    }

    /// Apply command-line overrides on top of the loaded settings.
    #[must_use]
    pub fn with_overrides(mut self, format: Option<OutputFormat>, verbose: bool) -> Self {
        let overrides = Settings {
            output_format: format,
            fail_on_unknown: None,
            log_level: verbose.then(|| "debug".to_string()),
        };
        self.settings.merge(&overrides);
        self
    }
}

/// Fully composed context for CLI commands.
#[derive(Debug, Clone)]
pub struct CliContext {
    /// Handle to the accelerator catalog.
    pub catalog: TopologyCatalog,
    /// Effective settings for this invocation.
    pub settings: Settings,
}

impl CliContext {
    /// Access the catalog.
    pub const fn catalog(&self) -> TopologyCatalog {
        self.catalog
    }

    /// Output format for command results.
    pub fn output_format(&self) -> OutputFormat {
        self.settings.effective_output_format()
    }

    /// Whether an unknown accelerator name is an error.
    pub fn fail_on_unknown(&self) -> bool {
        self.settings.effective_fail_on_unknown()
    }
}

/// Bootstrap the CLI application.
pub fn bootstrap(config: CliConfig) -> CliContext {
    CliContext {
        catalog: TopologyCatalog::new(),
        settings: config.settings,
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the configured level is used.
/// Logs go to stderr so stdout stays machine-readable.
pub fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.effective_log_level()));

    // A subscriber may already be installed (e.g., by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_env_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_from_env_file_reads_settings() {
        let file = write_env_file(
            "ACCELSPEC_OUTPUT_FORMAT=json\nACCELSPEC_FAIL_ON_UNKNOWN=false\nACCELSPEC_LOG=info\n",
        );
        let config = CliConfig::from_env_file(file.path()).unwrap();
        assert_eq!(config.settings.output_format, Some(OutputFormat::Json));
        assert_eq!(config.settings.fail_on_unknown, Some(false));
        assert_eq!(config.settings.log_level.as_deref(), Some("info"));
    }

    #[test]
    fn test_from_env_file_rejects_bad_format() {
        let file = write_env_file("ACCELSPEC_OUTPUT_FORMAT=xml\n");
        let err = CliConfig::from_env_file(file.path()).unwrap_err();
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_from_env_file_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::from_env_file(&dir.path().join("missing.env")).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let file = write_env_file("ACCELSPEC_OUTPUT_FORMAT=json\nACCELSPEC_LOG=error\n");
        let config = CliConfig::from_env_file(file.path())
            .unwrap()
            .with_overrides(Some(OutputFormat::Text), true);
        assert_eq!(config.settings.output_format, Some(OutputFormat::Text));
        assert_eq!(config.settings.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_overrides_keep_settings_when_absent() {
        let file = write_env_file("ACCELSPEC_OUTPUT_FORMAT=json\n");
        let config = CliConfig::from_env_file(file.path())
            .unwrap()
            .with_overrides(None, false);
        let ctx = bootstrap(config);
        assert_eq!(ctx.output_format(), OutputFormat::Json);
        assert!(ctx.fail_on_unknown());
    }
}
