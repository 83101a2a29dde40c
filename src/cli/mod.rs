//! Command implementations for the `logsidian` binary.

pub mod args;

use crate::config::TranslationConfig;
use crate::convert::convert_document;
use crate::error::Result;
use crate::migrate::{execute_plan, plan_vault, DailyNotesConfig, MigrationConfig};
use crate::outline::{outline_markdown, OutlineOptions};
use args::{ConvertArgs, MigrateArgs, OutlineArgs};
use std::path::Path;

fn write_output(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, text)?,
        None => println!("{}", text),
    }
    Ok(())
}

pub fn convert(cli_args: &ConvertArgs, config: &TranslationConfig) -> Result<()> {
    let text = std::fs::read_to_string(&cli_args.input)?;
    let converted = convert_document(&text, config)?;
    write_output(cli_args.output.as_deref(), &converted)
}

pub fn outline(cli_args: &OutlineArgs) -> Result<()> {
    let text = std::fs::read_to_string(&cli_args.input)?;
    let outlined = outline_markdown(
        &text,
        &OutlineOptions {
            list_nesting: cli_args.list_nesting,
        },
    );
    write_output(cli_args.output.as_deref(), &outlined)
}

pub fn migrate(
    cli_args: &MigrateArgs,
    config: &TranslationConfig,
    quiet: bool,
) -> Result<()> {
    let migration = MigrationConfig {
        use_namespaces: !cli_args.no_namespaces,
        journal_date_format: cli_args.date_format.clone(),
        extra_daily_formats: cli_args.daily_formats.clone(),
        ignored_paths: cli_args.ignored.clone(),
    };
    let daily_notes = DailyNotesConfig::load(&cli_args.vault);
    let plan = plan_vault(&cli_args.vault, &migration, &daily_notes)?;

    if cli_args.dry_run {
        for action in &plan.actions {
            println!(
                "{} -> {}",
                action.source().display(),
                action.dest().display()
            );
        }
        return Ok(());
    }

    let report = execute_plan(
        &cli_args.vault,
        &cli_args.output,
        &plan,
        config,
        &migration,
    )?;
    if !quiet {
        println!(
            "Migrated {} journals, {} pages, {} assets to {}",
            report.journals,
            report.pages,
            report.assets,
            cli_args.output.display()
        );
    }
    Ok(())
}
