//! Error types for Logsidian.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for conversion and migration operations.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Invalid frontmatter: {0}")]
    InvalidFrontmatter(String),

    #[error("Invalid date '{0}': {1}")]
    InvalidDate(String, String),

    #[error("Vault not found at: {0}")]
    VaultNotFound(PathBuf),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),
}

/// Result type alias for Logsidian operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
