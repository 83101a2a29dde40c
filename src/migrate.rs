//! Vault-level migration: walk an Obsidian vault, classify every file as a
//! journal, page or asset, and write the converted Logseq graph.

use crate::config::TranslationConfig;
use crate::convert::{convert_document, convert_parts};
use crate::error::{ConvertError, Result};
use crate::rules::frontmatter::{extract_properties, Property};
use chrono::NaiveDate;
use glob::{glob, Pattern};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Daily-notes plugin settings, read from `.obsidian/daily-notes.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DailyNotesConfig {
    /// Moment-style date format for daily note file names.
    pub format: String,
    /// Vault-relative folder holding the daily notes.
    pub folder: String,
}

impl Default for DailyNotesConfig {
    fn default() -> Self {
        Self {
            format: "YYYY-MM-DD".to_string(),
            folder: String::new(),
        }
    }
}

impl DailyNotesConfig {
    /// Load the plugin settings, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load(vault_root: &Path) -> Self {
        let path = vault_root.join(".obsidian").join("daily-notes.json");
        let parsed = std::fs::read_to_string(&path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok());
        match parsed {
            Some(config) => config,
            None => {
                eprintln!(
                    "Warning: no readable daily-notes config at {}; assuming YYYY-MM-DD",
                    path.display()
                );
                Self::default()
            }
        }
    }
}

/// Options for one vault migration.
#[derive(Debug, Clone)]
pub struct MigrationConfig {
    /// Map directory hierarchy to Logseq namespaces (`a/b.md` ->
    /// `a___b.md`); otherwise pages are flattened to their file name.
    pub use_namespaces: bool,
    /// Moment-style format journals are renamed to.
    pub journal_date_format: String,
    /// Additional moment-style formats to try when recognizing journals.
    pub extra_daily_formats: Vec<String>,
    /// Vault-relative glob patterns to skip entirely.
    pub ignored_paths: Vec<String>,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            use_namespaces: true,
            journal_date_format: "YYYY-MM-DD".to_string(),
            extra_daily_formats: Vec::new(),
            ignored_paths: Vec::new(),
        }
    }
}

/// One planned file migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileAction {
    /// A daily note, possibly renamed to the journal date format.
    Journal {
        source: PathBuf,
        dest: PathBuf,
        date: NaiveDate,
        old_stem: String,
    },
    /// A regular markdown page.
    Page { source: PathBuf, dest: PathBuf },
    /// A non-markdown file, copied as-is.
    Asset { source: PathBuf, dest: PathBuf },
}

impl FileAction {
    pub fn source(&self) -> &Path {
        match self {
            FileAction::Journal { source, .. }
            | FileAction::Page { source, .. }
            | FileAction::Asset { source, .. } => source,
        }
    }

    pub fn dest(&self) -> &Path {
        match self {
            FileAction::Journal { dest, .. }
            | FileAction::Page { dest, .. }
            | FileAction::Asset { dest, .. } => dest,
        }
    }
}

/// The full set of planned migrations for a vault.
#[derive(Debug, Default)]
pub struct MigrationPlan {
    pub actions: Vec<FileAction>,
}

/// Counts of files written by [`execute_plan`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub journals: usize,
    pub pages: usize,
    pub assets: usize,
}

/// Translate a moment.js date format into a chrono format string.
///
/// Only the tokens daily notes actually use are mapped (`YYYY`, `MM`,
/// `DD`); `[...]` spans pass through literally. Unknown alphabetic tokens
/// survive as literal characters, which simply makes the parse fail for
/// non-matching stems.
fn moment_to_chrono(format: &str) -> String {
    let mut out = String::new();
    let mut chars = format.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '[' => {
                for inner in chars.by_ref() {
                    if inner == ']' {
                        break;
                    }
                    if inner == '%' {
                        out.push_str("%%");
                    } else {
                        out.push(inner);
                    }
                }
            }
            'Y' | 'M' | 'D' => {
                let mut run = 1;
                while chars.peek() == Some(&c) {
                    chars.next();
                    run += 1;
                }
                match (c, run) {
                    ('Y', 4) => out.push_str("%Y"),
                    ('M', 2) => out.push_str("%m"),
                    ('D', 2) => out.push_str("%d"),
                    _ => out.extend(std::iter::repeat(c).take(run)),
                }
            }
            '%' => out.push_str("%%"),
            _ => out.push(c),
        }
    }
    out
}

/// Scan the vault and decide a destination for every file.
pub fn plan_vault(
    vault_root: &Path,
    config: &MigrationConfig,
    daily_notes: &DailyNotesConfig,
) -> Result<MigrationPlan> {
    if !vault_root.is_dir() {
        return Err(ConvertError::VaultNotFound(vault_root.to_path_buf()));
    }

    let ignored: Vec<Pattern> = config
        .ignored_paths
        .iter()
        .map(|p| Pattern::new(p))
        .collect::<std::result::Result<_, _>>()?;

    let extra_formats: Vec<String> = config
        .extra_daily_formats
        .iter()
        .map(|f| moment_to_chrono(f))
        .collect();
    let daily = DailyFormats {
        plugin_format: moment_to_chrono(&daily_notes.format),
        plugin_folder: daily_notes.folder.clone(),
        extra_formats,
    };
    let journal_format = moment_to_chrono(&config.journal_date_format);

    let pattern = vault_root.join("**/*");
    let mut plan = MigrationPlan::default();
    for entry in glob(&pattern.to_string_lossy())? {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                eprintln!("Warning: glob error: {}", e);
                continue;
            }
        };
        if !path.is_file() {
            continue;
        }
        let Ok(relative) = path.strip_prefix(vault_root) else {
            continue;
        };
        // Skip hidden files and directories (.obsidian included).
        if relative
            .components()
            .any(|c| c.as_os_str().to_string_lossy().starts_with('.'))
        {
            continue;
        }
        if ignored.iter().any(|p| p.matches_path(relative)) {
            continue;
        }
        plan.actions
            .push(classify(relative, config, &daily, &journal_format));
    }
    Ok(plan)
}

/// The chrono formats a file stem is tried against when looking for daily
/// notes. The plugin's own format only applies inside its configured
/// folder; extra formats apply anywhere.
struct DailyFormats {
    plugin_format: String,
    plugin_folder: String,
    extra_formats: Vec<String>,
}

impl DailyFormats {
    fn candidates(&self, relative: &Path) -> Vec<&str> {
        let mut formats = Vec::new();
        let in_plugin_folder = if self.plugin_folder.is_empty() {
            relative.parent() == Some(Path::new(""))
        } else {
            relative.parent() == Some(Path::new(&self.plugin_folder))
        };
        if in_plugin_folder {
            formats.push(self.plugin_format.as_str());
        }
        formats.extend(self.extra_formats.iter().map(|f| f.as_str()));
        formats
    }
}

fn classify(
    relative: &Path,
    config: &MigrationConfig,
    daily: &DailyFormats,
    journal_format: &str,
) -> FileAction {
    let source = relative.to_path_buf();
    let file_name = relative
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if relative.extension().map(|e| e.to_string_lossy().to_lowercase()) != Some("md".into()) {
        return FileAction::Asset {
            source,
            dest: Path::new("assets").join(&file_name),
        };
    }

    let stem = relative
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    for format in daily.candidates(relative) {
        if let Ok(date) = NaiveDate::parse_from_str(&stem, format) {
            let new_stem = date.format(journal_format).to_string();
            return FileAction::Journal {
                source,
                dest: Path::new("journals").join(format!("{new_stem}.md")),
                date,
                old_stem: stem,
            };
        }
    }

    let page_name = if config.use_namespaces {
        let mut parts: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        if let Some(last) = parts.last_mut() {
            *last = stem.clone();
        }
        parts.join("___")
    } else {
        stem
    };
    FileAction::Page {
        source,
        dest: Path::new("pages").join(format!("{page_name}.md")),
    }
}

/// Carry out a plan, converting markdown through the core pipeline and
/// copying assets verbatim.
pub fn execute_plan(
    vault_root: &Path,
    output_root: &Path,
    plan: &MigrationPlan,
    translation: &TranslationConfig,
    migration: &MigrationConfig,
) -> Result<MigrationReport> {
    for dir in ["journals", "pages", "assets"] {
        std::fs::create_dir_all(output_root.join(dir))?;
    }

    let mut report = MigrationReport::default();
    for action in &plan.actions {
        let source = vault_root.join(action.source());
        let dest = output_root.join(action.dest());
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }
        match action {
            FileAction::Asset { .. } => {
                std::fs::copy(&source, &dest)?;
                report.assets += 1;
            }
            FileAction::Page { .. } => {
                let text = std::fs::read_to_string(&source)?;
                std::fs::write(&dest, convert_document(&text, translation)?)?;
                report.pages += 1;
            }
            FileAction::Journal { old_stem, date, .. } => {
                let text = std::fs::read_to_string(&source)?;
                let converted =
                    convert_journal(&text, date, old_stem, translation, migration)?;
                std::fs::write(&dest, converted)?;
                report.journals += 1;
            }
        }
    }
    Ok(report)
}

fn convert_journal(
    text: &str,
    date: &NaiveDate,
    old_stem: &str,
    translation: &TranslationConfig,
    migration: &MigrationConfig,
) -> Result<String> {
    let (properties, body) = extract_properties(text)?;
    // The journal's date is its identity in Logseq: the creation property
    // is redundant, and the old file name survives as an alias so existing
    // links keep resolving.
    let mut properties: Vec<Property> = properties
        .into_iter()
        .filter(|p| p.name != "created")
        .collect();
    let new_stem = date
        .format(&moment_to_chrono(&migration.journal_date_format))
        .to_string();
    if old_stem != new_stem {
        // Old stem first, existing aliases after, minus duplicates and the
        // name the file now carries anyway.
        let existing = properties
            .iter()
            .position(|p| p.name == "alias")
            .map(|i| properties.remove(i).values)
            .unwrap_or_default();
        let mut aliases = vec![old_stem.to_string()];
        for value in existing {
            if value != old_stem && value != new_stem {
                aliases.push(value);
            }
        }
        properties.push(Property::new("alias", aliases));
    }
    convert_parts(&properties, body, translation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_moment_to_chrono() {
        assert_eq!(moment_to_chrono("YYYY-MM-DD"), "%Y-%m-%d");
        assert_eq!(moment_to_chrono("DD.MM.YYYY"), "%d.%m.%Y");
        assert_eq!(moment_to_chrono("[week of] YYYY-MM-DD"), "week of %Y-%m-%d");
    }

    #[test]
    fn test_plan_classifies_files() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        write(root, "2024-01-05.md", "journal entry");
        write(root, "topics/Deep Note.md", "a page");
        write(root, "attachments/pic.png", "binary");
        write(root, ".obsidian/app.json", "{}");

        let plan = plan_vault(
            root,
            &MigrationConfig::default(),
            &DailyNotesConfig::default(),
        )
        .unwrap();

        let mut dests: Vec<String> = plan
            .actions
            .iter()
            .map(|a| a.dest().to_string_lossy().into_owned())
            .collect();
        dests.sort();
        assert_eq!(
            dests,
            vec![
                "assets/pic.png",
                "journals/2024-01-05.md",
                "pages/topics___Deep Note.md",
            ]
        );
    }

    #[test]
    fn test_plan_without_namespaces_flattens_pages() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "topics/Deep Note.md", "a page");

        let config = MigrationConfig {
            use_namespaces: false,
            ..Default::default()
        };
        let plan =
            plan_vault(tmp.path(), &config, &DailyNotesConfig::default()).unwrap();
        assert_eq!(
            plan.actions[0].dest(),
            Path::new("pages/Deep Note.md")
        );
    }

    #[test]
    fn test_plan_respects_ignored_paths() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "templates/Daily.md", "template");
        write(tmp.path(), "note.md", "note");

        let config = MigrationConfig {
            ignored_paths: vec!["templates/**".to_string()],
            ..Default::default()
        };
        let plan =
            plan_vault(tmp.path(), &config, &DailyNotesConfig::default()).unwrap();
        assert_eq!(plan.actions.len(), 1);
        assert_eq!(plan.actions[0].source(), Path::new("note.md"));
    }

    #[test]
    fn test_journal_rename_from_custom_daily_format() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "05.01.2024.md", "entry");

        let daily = DailyNotesConfig {
            format: "DD.MM.YYYY".to_string(),
            folder: String::new(),
        };
        let plan =
            plan_vault(tmp.path(), &MigrationConfig::default(), &daily).unwrap();
        match &plan.actions[0] {
            FileAction::Journal {
                dest, old_stem, ..
            } => {
                assert_eq!(dest, Path::new("journals/2024-01-05.md"));
                assert_eq!(old_stem, "05.01.2024");
            }
            other => panic!("expected journal, got {other:?}"),
        }
    }

    #[test]
    fn test_daily_format_only_applies_inside_plugin_folder() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "daily/2024-01-05.md", "entry");
        write(tmp.path(), "notes/2024-01-05.md", "a page that looks dated");

        let daily = DailyNotesConfig {
            format: "YYYY-MM-DD".to_string(),
            folder: "daily".to_string(),
        };
        let plan =
            plan_vault(tmp.path(), &MigrationConfig::default(), &daily).unwrap();
        let mut dests: Vec<String> = plan
            .actions
            .iter()
            .map(|a| a.dest().to_string_lossy().into_owned())
            .collect();
        dests.sort();
        assert_eq!(
            dests,
            vec!["journals/2024-01-05.md", "pages/notes___2024-01-05.md"]
        );
    }

    #[test]
    fn test_missing_vault_errors() {
        let err = plan_vault(
            Path::new("/definitely/not/here"),
            &MigrationConfig::default(),
            &DailyNotesConfig::default(),
        );
        assert!(matches!(err, Err(ConvertError::VaultNotFound(_))));
    }

    #[test]
    fn test_execute_plan_writes_graph() {
        let vault = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        write(vault.path(), "2024-01-05.md", "did things");
        write(vault.path(), "Note.md", "- [ ] open item");
        write(vault.path(), "img.png", "png bytes");

        let plan = plan_vault(
            vault.path(),
            &MigrationConfig::default(),
            &DailyNotesConfig::default(),
        )
        .unwrap();
        let report = execute_plan(
            vault.path(),
            out.path(),
            &plan,
            &TranslationConfig::default(),
            &MigrationConfig::default(),
        )
        .unwrap();

        assert_eq!(
            report,
            MigrationReport {
                journals: 1,
                pages: 1,
                assets: 1
            }
        );
        let journal =
            std::fs::read_to_string(out.path().join("journals/2024-01-05.md")).unwrap();
        assert_eq!(journal, "- did things");
        let page = std::fs::read_to_string(out.path().join("pages/Note.md")).unwrap();
        assert_eq!(page, "- TODO open item");
        assert!(out.path().join("assets/img.png").is_file());
    }

    #[test]
    fn test_renamed_journal_gets_alias_and_drops_created() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "05.01.2024.md",
            "---\ncreated: 2024-01-05\n---\nentry",
        );
        let out = TempDir::new().unwrap();

        let daily = DailyNotesConfig {
            format: "DD.MM.YYYY".to_string(),
            folder: String::new(),
        };
        let plan = plan_vault(tmp.path(), &MigrationConfig::default(), &daily).unwrap();
        execute_plan(
            tmp.path(),
            out.path(),
            &plan,
            &TranslationConfig::default(),
            &MigrationConfig::default(),
        )
        .unwrap();

        let journal =
            std::fs::read_to_string(out.path().join("journals/2024-01-05.md")).unwrap();
        assert_eq!(journal, "alias:: 05.01.2024\n\n- entry");
    }
}
