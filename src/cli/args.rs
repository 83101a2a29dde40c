//! CLI argument definitions using clap.

use crate::outline::ListNesting;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "logsidian")]
#[command(author, version, about = "Convert Obsidian vaults to Logseq graphs", long_about = None)]
pub struct Cli {
    /// Path to a TOML config file (overrides the default location)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a single markdown file
    Convert(ConvertArgs),

    /// Outline already-converted markdown without applying rewrite rules
    Outline(OutlineArgs),

    /// Migrate a whole vault into a Logseq graph directory
    Migrate(MigrateArgs),
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Input markdown file
    pub input: PathBuf,

    /// Output file (stdout if omitted)
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct OutlineArgs {
    /// Input markdown file
    pub input: PathBuf,

    /// Output file (stdout if omitted)
    pub output: Option<PathBuf>,

    /// How lists nest under a preceding paragraph
    #[arg(long, value_enum, default_value_t = ListNesting::Paragraph)]
    pub list_nesting: ListNesting,
}

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Obsidian vault directory
    pub vault: PathBuf,

    /// Output directory for the Logseq graph
    pub output: PathBuf,

    /// Flatten nested pages instead of mapping folders to namespaces
    #[arg(long)]
    pub no_namespaces: bool,

    /// Moment-style date format journals are renamed to
    #[arg(long, default_value = "YYYY-MM-DD")]
    pub date_format: String,

    /// Additional moment-style daily-note formats to recognize
    #[arg(long = "daily-format")]
    pub daily_formats: Vec<String>,

    /// Vault-relative glob patterns to skip (repeatable)
    #[arg(long = "ignore")]
    pub ignored: Vec<String>,

    /// Print the migration plan without writing anything
    #[arg(long)]
    pub dry_run: bool,
}
