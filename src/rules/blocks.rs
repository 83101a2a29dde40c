//! Obsidian callouts and quotes to Logseq `#+BEGIN_`/`#+END_` blocks.
//!
//! Quote runs are parsed into an explicit node tree (nested callouts become
//! nested block nodes), then flattened back to text. This keeps nesting
//! structural instead of re-running the rule over captured strings.

use crate::config::TranslationConfig;
use crate::error::Result;
use crate::types::BlockKind;
use regex::Regex;
use std::sync::LazyLock;

// A quote line: optional indent, ">", optional single space, payload.
static QUOTE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)>\s?(.*)$").unwrap());

// A callout marker on the first quoted line: [!name], optional fold
// marker, optional title text.
static CALLOUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[!(\w+)\][+-]?\s?(.*)$").unwrap());

/// One node of a parsed quote run.
#[derive(Debug, Clone, PartialEq, Eq)]
enum QuoteNode {
    Text(String),
    Block {
        kind: BlockKind,
        title: Option<String>,
        children: Vec<QuoteNode>,
    },
}

pub fn convert(text: &str, _config: &TranslationConfig) -> Result<String> {
    let mut out = Vec::new();
    let lines: Vec<&str> = text.lines().collect();
    let mut i = 0;
    while i < lines.len() {
        let Some(caps) = QUOTE_LINE.captures(lines[i]) else {
            out.push(lines[i].to_string());
            i += 1;
            continue;
        };
        // Collect the whole quote run; any non-quote line (blank included)
        // ends it and stays in place so chunk boundaries survive.
        let indent = caps[1].to_string();
        let mut stripped = vec![caps[2].trim_end().to_string()];
        i += 1;
        while i < lines.len() {
            let Some(caps) = QUOTE_LINE.captures(lines[i]) else {
                break;
            };
            stripped.push(caps[2].trim_end().to_string());
            i += 1;
        }
        render(&parse_run(&stripped), &indent, &mut out);
    }
    Ok(out.join("\n"))
}

/// Parse one stripped quote run into a block node.
fn parse_run(stripped: &[String]) -> QuoteNode {
    let (kind, title, body) = match stripped.first().and_then(|l| CALLOUT.captures(l)) {
        Some(caps) => {
            let kind = BlockKind::from_callout(&caps[1]);
            let title = Some(caps[2].to_string()).filter(|t| !t.is_empty());
            (kind, title, &stripped[1..])
        }
        None => (BlockKind::Quote, None, stripped),
    };

    let mut children = Vec::new();
    let mut i = 0;
    while i < body.len() {
        let Some(caps) = QUOTE_LINE.captures(&body[i]) else {
            children.push(QuoteNode::Text(body[i].clone()));
            i += 1;
            continue;
        };
        // A nested run: strip one quote level and recurse.
        let mut inner = vec![caps[2].trim_end().to_string()];
        i += 1;
        while i < body.len() {
            let Some(caps) = QUOTE_LINE.captures(&body[i]) else {
                break;
            };
            inner.push(caps[2].trim_end().to_string());
            i += 1;
        }
        children.push(parse_run(&inner));
    }
    QuoteNode::Block {
        kind,
        title,
        children,
    }
}

/// Flatten a node back to output lines, prefixed with the run's indent.
fn render(node: &QuoteNode, indent: &str, out: &mut Vec<String>) {
    match node {
        QuoteNode::Text(text) => {
            if text.is_empty() {
                out.push(String::new());
            } else {
                out.push(format!("{indent}{text}"));
            }
        }
        QuoteNode::Block {
            kind,
            title,
            children,
        } => {
            out.push(format!("{indent}#+BEGIN_{}", kind.name()));
            if let Some(title) = title {
                out.push(format!("{indent}**{title}**"));
            }
            for child in children {
                render(child, indent, out);
            }
            out.push(format!("{indent}#+END_{}", kind.name()));
        }
    }
}
