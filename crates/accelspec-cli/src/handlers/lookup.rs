//! Lookup command handler.
//!
//! Displays the characteristics of a single accelerator slice.

use accelspec_core::OutputFormat;
use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{SliceView, format_slice_details};

/// Execute the lookup command.
///
/// Unknown names are an error only when `fail_on_unknown` is set;
/// otherwise a not-found message (or JSON `null`) is printed.
pub fn execute(ctx: &CliContext, name: &str) -> Result<()> {
    println!("{}", render(ctx, name)?);
    Ok(())
}

/// Render the lookup result without printing it.
pub fn render(ctx: &CliContext, name: &str) -> Result<String, CliError> {
    let Some(characteristics) = ctx.catalog().lookup(name) else {
        if ctx.fail_on_unknown() {
            return Err(CliError::NotFound(name.to_string()));
        }
        return Ok(match ctx.output_format() {
            OutputFormat::Text => format!("Unknown accelerator: {name}"),
            OutputFormat::Json => "null".to_string(),
        });
    };

    tracing::debug!(name, topology = characteristics.topology_name, "resolved accelerator");

    Ok(match ctx.output_format() {
        OutputFormat::Text => format_slice_details(name, characteristics),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&SliceView::new(name, characteristics))?
        }
    })
}
