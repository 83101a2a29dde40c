//! Shared types for Logsidian.

use serde::{Deserialize, Serialize};

/// Logseq task status keywords, mapped from Obsidian checkbox markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Todo,
    Doing,
    Done,
    Cancelled,
}

impl TaskStatus {
    /// Map a checkbox marker character to a status.
    ///
    /// Only ` `, `/`, `x` and `-` are recognized; anything else means the
    /// line is not a convertible task and should pass through unchanged.
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            ' ' => Some(TaskStatus::Todo),
            '/' => Some(TaskStatus::Doing),
            'x' => Some(TaskStatus::Done),
            '-' => Some(TaskStatus::Cancelled),
            _ => None,
        }
    }

    /// The Logseq keyword for this status.
    pub fn keyword(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "TODO",
            TaskStatus::Doing => "DOING",
            TaskStatus::Done => "DONE",
            TaskStatus::Cancelled => "CANCELLED",
        }
    }
}

/// Logseq task priority letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    A,
    B,
    C,
}

impl Priority {
    pub fn letter(&self) -> char {
        match self {
            Priority::A => 'A',
            Priority::B => 'B',
            Priority::C => 'C',
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The kinds of dates an Obsidian task can carry (Tasks plugin emoji).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskDateKind {
    Deadline,
    Scheduled,
    Start,
    Created,
    Done,
    Cancelled,
}

/// Emoji triggers for task dates, in extraction priority order.
pub const TASK_DATE_EMOJI: [(&str, TaskDateKind); 6] = [
    ("📅", TaskDateKind::Deadline),
    ("⏳", TaskDateKind::Scheduled),
    ("🛫", TaskDateKind::Start),
    ("➕", TaskDateKind::Created),
    ("✅", TaskDateKind::Done),
    ("❌", TaskDateKind::Cancelled),
];

/// Logseq block types produced from quotes and callouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Note,
    Tip,
    Important,
    Caution,
    Warning,
    Example,
    Quote,
}

/// Obsidian callout aliases for each Logseq block type.
///
/// Evaluated in order; the first alias match wins. Unknown callout types
/// fall back to `Quote`.
const CALLOUT_ALIASES: [(BlockKind, &[&str]); 7] = [
    (BlockKind::Note, &["note", "info", "summary", "tldr", "abstract"]),
    (BlockKind::Tip, &["tip", "hint", "help", "question", "faq"]),
    (BlockKind::Important, &["important", "attention"]),
    (BlockKind::Caution, &["caution", "todo"]),
    (
        BlockKind::Warning,
        &["warning", "error", "danger", "bug", "fail", "failure", "missing"],
    ),
    (BlockKind::Example, &["example"]),
    (BlockKind::Quote, &["quote", "cite"]),
];

impl BlockKind {
    /// Resolve an Obsidian callout type (case-insensitive) to a block kind.
    pub fn from_callout(callout: &str) -> Self {
        let lower = callout.to_lowercase();
        for (kind, aliases) in CALLOUT_ALIASES {
            if aliases.contains(&lower.as_str()) {
                return kind;
            }
        }
        BlockKind::Quote
    }

    /// The uppercase name used in `#+BEGIN_` / `#+END_` delimiters.
    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::Note => "NOTE",
            BlockKind::Tip => "TIP",
            BlockKind::Important => "IMPORTANT",
            BlockKind::Caution => "CAUTION",
            BlockKind::Warning => "WARNING",
            BlockKind::Example => "EXAMPLE",
            BlockKind::Quote => "QUOTE",
        }
    }
}

/// File extensions treated as binary assets (routed to `assets/`).
const ASSET_EXTENSIONS: [&str; 13] = [
    "png", "jpg", "jpeg", "gif", "webp", "svg", "bmp", "mp3", "wav", "ogg",
    "mp4", "webm", "pdf",
];

/// Check whether a page/file name refers to a binary asset.
pub fn is_asset_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    ASSET_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{}", ext)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping_total() {
        assert_eq!(TaskStatus::from_marker(' '), Some(TaskStatus::Todo));
        assert_eq!(TaskStatus::from_marker('/'), Some(TaskStatus::Doing));
        assert_eq!(TaskStatus::from_marker('x'), Some(TaskStatus::Done));
        assert_eq!(TaskStatus::from_marker('-'), Some(TaskStatus::Cancelled));
        assert_eq!(TaskStatus::from_marker('?'), None);
        assert_eq!(TaskStatus::from_marker('X'), None);
    }

    #[test]
    fn test_callout_aliases() {
        assert_eq!(BlockKind::from_callout("note"), BlockKind::Note);
        assert_eq!(BlockKind::from_callout("INFO"), BlockKind::Note);
        assert_eq!(BlockKind::from_callout("attention"), BlockKind::Important);
        assert_eq!(BlockKind::from_callout("cite"), BlockKind::Quote);
        assert_eq!(BlockKind::from_callout("wat"), BlockKind::Quote);
    }

    #[test]
    fn test_is_asset_name() {
        assert!(is_asset_name("image.png"));
        assert!(is_asset_name("photo.JPG"));
        assert!(is_asset_name("doc.pdf"));
        assert!(!is_asset_name("A Note"));
        assert!(!is_asset_name("note.md"));
    }
}
