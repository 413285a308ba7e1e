//! CLI entry point - the composition root.
//!
//! Settings are loaded and the context is built via bootstrap; command
//! dispatch routes to handlers. Errors carrying a `CliError` map to their
//! exit code, anything else exits with 1.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use accelspec_cli::{Cli, CliConfig, Commands, bootstrap, exit_code_for, handlers, init_logging};

fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_env()?.with_overrides(cli.format, cli.verbose);

    // Initialize logging
    init_logging(&config.settings);

    let ctx = bootstrap(config);

    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Lookup { name } => handlers::lookup::execute(&ctx, &name),
        Commands::List { generation } => handlers::list::execute(&ctx, generation.as_deref()),
        Commands::Validate => handlers::validate::execute(&ctx),
    }
}
