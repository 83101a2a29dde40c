//! Logsidian CLI entry point.

use clap::Parser;
use logsidian::cli::args::{Cli, Commands};
use logsidian::cli::{convert, migrate, outline};
use logsidian::config::TranslationConfig;
use logsidian::error::Result;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {}", e);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = TranslationConfig::load(cli.config.as_deref())?;

    match &cli.command {
        Commands::Convert(args) => convert(args, &config),
        Commands::Outline(args) => outline(args),
        Commands::Migrate(args) => migrate(args, &config, cli.quiet),
    }
}
