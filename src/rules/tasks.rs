//! Obsidian Tasks checkboxes to Logseq task blocks.

use crate::config::TranslationConfig;
use crate::error::{ConvertError, Result};
use crate::types::{TaskDateKind, TaskStatus, TASK_DATE_EMOJI};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

// A checkbox list item: indent, marker, body.
static TASK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)- \[(.)\](.*)$").unwrap());

// Emoji-tagged ISO dates from the Tasks plugin.
static TASK_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(📅|⏳|🛫|➕|✅|❌)\s*(\d{4}-\d{2}-\d{2})").unwrap());

pub fn convert(text: &str, config: &TranslationConfig) -> Result<String> {
    // The filter tag is configurable, so its regex cannot be a static;
    // compile it once per document rather than per line.
    let tag_re = match &config.tasks.global_filter_tag {
        Some(tag) => Some(Regex::new(&format!(r"\s?{}\b", regex::escape(tag)))?),
        None => None,
    };
    let mut out = Vec::new();
    for line in text.lines() {
        match convert_line(line, config, tag_re.as_ref())? {
            Some(converted) => out.push(converted),
            None => out.push(line.to_string()),
        }
    }
    Ok(out.join("\n"))
}

fn convert_line(
    line: &str,
    config: &TranslationConfig,
    tag_re: Option<&Regex>,
) -> Result<Option<String>> {
    let Some(caps) = TASK.captures(line) else {
        return Ok(None);
    };
    let marker = caps[2].chars().next().unwrap_or(' ');
    let Some(status) = TaskStatus::from_marker(marker) else {
        return Ok(None);
    };
    let indent = &caps[1];
    let mut body = caps[3].to_string();

    // Extract emoji-tagged dates, in the order they appear.
    let mut dates: Vec<(TaskDateKind, String)> = Vec::new();
    if config.tasks.convert_dates {
        for date_caps in TASK_DATE.captures_iter(&body) {
            let emoji = &date_caps[1];
            if let Some((_, kind)) = TASK_DATE_EMOJI.iter().find(|(e, _)| *e == emoji) {
                dates.push((*kind, date_caps[2].to_string()));
            }
        }
        if !dates.is_empty() {
            body = TASK_DATE.replace_all(&body, "").into_owned();
        }
    }

    // First mapping entry whose emoji appears wins; strip that one
    // occurrence plus at most one preceding whitespace character.
    let mut priority = None;
    for mapping in &config.tasks.priority_mapping {
        if let Some(pos) = body.find(mapping.emoji.as_str()) {
            priority = Some(mapping.priority);
            let mut start = pos;
            if let Some(prev) = body[..pos].chars().next_back() {
                if prev.is_whitespace() {
                    start -= prev.len_utf8();
                }
            }
            body.replace_range(start..pos + mapping.emoji.len(), "");
            break;
        }
    }

    if let Some(tag_re) = tag_re {
        body = tag_re.replace(&body, "").into_owned();
    }

    let mut status_line = format!("{indent}- {}", status.keyword());
    if let Some(priority) = priority {
        status_line.push_str(&format!(" [#{priority}]"));
    }
    let body = body.trim();
    if !body.is_empty() {
        status_line.push(' ');
        status_line.push_str(body);
    }

    let mut lines = vec![status_line];
    for (kind, date) in dates {
        if let Some(line) = date_line(indent, kind, &date, config)? {
            lines.push(line);
        }
    }
    Ok(Some(lines.join("\n")))
}

fn date_line(
    indent: &str,
    kind: TaskDateKind,
    date: &str,
    config: &TranslationConfig,
) -> Result<Option<String>> {
    match kind {
        TaskDateKind::Deadline | TaskDateKind::Scheduled => {
            let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|e| ConvertError::InvalidDate(date.to_string(), e.to_string()))?;
            let keyword = if kind == TaskDateKind::Deadline {
                "DEADLINE"
            } else {
                "SCHEDULED"
            };
            // %a gives the short weekday name Logseq expects.
            Ok(Some(format!(
                "{indent}  {keyword}: <{}>",
                parsed.format("%Y-%m-%d %a")
            )))
        }
        // Kinds with no configured property (e.g. start) are dropped.
        _ => Ok(config
            .tasks
            .date_property(kind)
            .map(|property| format!("{indent}  {property}:: [[{date}]]"))),
    }
}
