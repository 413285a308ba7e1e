//! Command handlers that read from the catalog.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - A `render` companion that returns the output instead of printing it
//! - Thin wrappers that:
//!   1. Validate CLI-specific input
//!   2. Query the catalog
//!   3. Format output for the terminal
//!
//! Handlers should NOT contain catalog logic.

pub mod list;
pub mod lookup;
pub mod validate;
