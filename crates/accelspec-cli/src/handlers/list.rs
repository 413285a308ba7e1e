//! List command handler.
//!
//! Displays catalog entries in a formatted table.

use accelspec_core::OutputFormat;
use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{SliceView, format_slice_table};

/// Execute the list command.
pub fn execute(ctx: &CliContext, generation: Option<&str>) -> Result<()> {
    println!("{}", render(ctx, generation)?);
    Ok(())
}

/// Render the listing without printing it.
pub fn render(ctx: &CliContext, generation: Option<&str>) -> Result<String, CliError> {
    let catalog = ctx.catalog();
    let entries: Vec<_> = match generation {
        Some(g) if g.trim().is_empty() => {
            return Err(CliError::Arguments("generation must not be empty".to_string()));
        }
        Some(g) => catalog.by_generation(g).collect(),
        None => catalog.entries().collect(),
    };

    tracing::debug!(count = entries.len(), generation, "listing accelerators");

    match ctx.output_format() {
        OutputFormat::Json => {
            let views: Vec<SliceView<'_>> = entries
                .iter()
                .map(|(name, characteristics)| SliceView::new(name, characteristics))
                .collect();
            Ok(serde_json::to_string_pretty(&views)?)
        }
        OutputFormat::Text if entries.is_empty() => Ok(match generation {
            Some(g) => format!(
                "No accelerators found for generation '{g}'.\nKnown generations: {}",
                catalog.generations().join(", ")
            ),
            None => "No accelerators found.".to_string(),
        }),
        OutputFormat::Text => {
            let count = entries.len();
            Ok(format!(
                "Found {count} accelerator(s):\n\n{}",
                format_slice_table(entries)
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::{CliConfig, bootstrap};
    use accelspec_core::Settings;

    fn context(format: OutputFormat) -> CliContext {
        bootstrap(CliConfig {
            settings: Settings {
                output_format: Some(format),
                ..Settings::default()
            },
        })
    }

    #[test]
    fn test_list_all_text() {
        let out = render(&context(OutputFormat::Text), None).unwrap();
        assert!(out.starts_with("Found 113 accelerator(s):"));
        assert!(out.contains("v5e-16"));
        assert!(out.contains("v5p-17920"));
    }

    #[test]
    fn test_list_generation_json() {
        let out = render(&context(OutputFormat::Json), Some("v4")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        let items = json.as_array().unwrap();
        assert_eq!(items.len(), 12);
        assert_eq!(items[0]["name"], "v4-8");
        assert_eq!(items[11]["name"], "v4-4096");
    }

    #[test]
    fn test_list_unknown_generation() {
        let out = render(&context(OutputFormat::Text), Some("v9")).unwrap();
        assert!(out.contains("No accelerators found for generation 'v9'"));
        assert!(out.contains("v5e, v4, v5p"));
    }

    #[test]
    fn test_list_empty_generation_is_argument_error() {
        let err = render(&context(OutputFormat::Text), Some(" ")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
