//! Translation configuration.
//!
//! The core receives a complete, fully-specified configuration value; all
//! defaults live in the `Default` impls here, and there is no partial-merge
//! logic inside the conversion pipeline.

use crate::error::{ConvertError, Result};
use crate::outline::ListNesting;
use crate::types::{Priority, TaskDateKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One (emoji, priority letter) pair. Pairs are evaluated in list order and
/// the first emoji found in a task body wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityMapping {
    pub emoji: String,
    pub priority: Priority,
}

/// Maps a task date kind to the Logseq property it is emitted as.
///
/// Deadline and scheduled dates are not configurable: they always render as
/// `DEADLINE:` / `SCHEDULED:` lines. Kinds without an entry are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateProperty {
    pub kind: TaskDateKind,
    pub property: String,
}

/// Task conversion options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TasksConfig {
    /// A tag stripped from task bodies (Obsidian Tasks "global filter").
    pub global_filter_tag: Option<String>,
    /// Ordered emoji -> priority letter pairs.
    pub priority_mapping: Vec<PriorityMapping>,
    /// Whether to extract emoji-tagged dates into metadata lines.
    pub convert_dates: bool,
    /// Property names for date kinds other than deadline/scheduled.
    pub date_properties: Vec<DateProperty>,
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            global_filter_tag: Some("#task".to_string()),
            priority_mapping: default_priority_mapping(),
            convert_dates: true,
            date_properties: default_date_properties(),
        }
    }
}

fn default_priority_mapping() -> Vec<PriorityMapping> {
    [
        ("🔺", Priority::A),
        ("⏫", Priority::A),
        ("🔼", Priority::B),
        ("🔽", Priority::C),
        ("⏬", Priority::C),
    ]
    .into_iter()
    .map(|(emoji, priority)| PriorityMapping {
        emoji: emoji.to_string(),
        priority,
    })
    .collect()
}

fn default_date_properties() -> Vec<DateProperty> {
    [
        (TaskDateKind::Created, ".created"),
        (TaskDateKind::Done, ".completed"),
        (TaskDateKind::Cancelled, ".cancelled"),
    ]
    .into_iter()
    .map(|(kind, property)| DateProperty {
        kind,
        property: property.to_string(),
    })
    .collect()
}

impl TasksConfig {
    /// Look up the configured property name for a date kind, if any.
    pub fn date_property(&self, kind: TaskDateKind) -> Option<&str> {
        self.date_properties
            .iter()
            .find(|d| d.kind == kind)
            .map(|d| d.property.as_str())
    }
}

/// Full configuration for one document conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TranslationConfig {
    pub tasks: TasksConfig,
    /// How list chunks nest under a preceding paragraph in the outline.
    pub list_nesting: ListNesting,
}

impl TranslationConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConvertError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration: an explicit path, the default config file under
    /// the user config directory, or built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        if let Some(config_dir) = dirs::config_dir() {
            let default_path = config_dir.join("logsidian").join("config.toml");
            if default_path.is_file() {
                return Self::from_file(&default_path);
            }
        }
        Ok(Self::default())
    }
}
