//! Validate command handler.
//!
//! Runs the catalog consistency checks and reports every finding.

use accelspec_core::{CatalogViolation, OutputFormat};
use anyhow::Result;
use serde::Serialize;

use crate::bootstrap::CliContext;
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct ViolationView {
    name: String,
    message: String,
}

/// Execute the validate command.
///
/// Findings are printed first; the command then fails with
/// [`CliError::InconsistentCatalog`] if there were any.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let violations = ctx.catalog().validate();
    println!("{}", render(ctx, &violations)?);

    if violations.is_empty() {
        Ok(())
    } else {
        Err(CliError::InconsistentCatalog(violations.len()).into())
    }
}

/// Render validation findings without printing them.
pub fn render(ctx: &CliContext, violations: &[CatalogViolation]) -> Result<String, CliError> {
    match ctx.output_format() {
        OutputFormat::Json => {
            let views: Vec<ViolationView> = violations
                .iter()
                .map(|v| ViolationView {
                    name: v.name().to_string(),
                    message: v.to_string(),
                })
                .collect();
            Ok(serde_json::to_string_pretty(&views)?)
        }
        OutputFormat::Text if violations.is_empty() => Ok(format!(
            "✓ All {} catalog entries are consistent.",
            ctx.catalog().len()
        )),
        OutputFormat::Text => {
            let mut lines = vec![format!(
                "Found {} problem(s) in {} catalog entries:",
                violations.len(),
                ctx.catalog().len()
            )];
            lines.extend(violations.iter().map(|v| format!("  ✗ {v}")));
            Ok(lines.join("\n"))
        }
    }
}
