//! Inline rewrite rules.
//!
//! Each rule is a pure text transformation from Obsidian-flavored markdown
//! toward Logseq-flavored markdown. Rules run in a fixed order; later rules
//! see earlier rules' output, and several orderings matter (callout blocks
//! must be materialized before tasks, wikilinks before embeds).

pub mod blocks;
pub mod embeds;
pub mod frontmatter;
pub mod highlights;
pub mod numbered_lists;
pub mod tasks;
pub mod wikilinks;

use crate::config::TranslationConfig;
use crate::error::Result;

/// A named text-rewrite pass.
pub struct Rule {
    pub name: &'static str,
    pub convert: fn(&str, &TranslationConfig) -> Result<String>,
}

/// The rules applied to a document body, in pipeline order. Frontmatter is
/// handled separately by the conversion driver so properties can re-enter
/// the outline unbulleted.
pub const BODY_RULES: &[Rule] = &[
    Rule {
        name: "blocks",
        convert: blocks::convert,
    },
    Rule {
        name: "tasks",
        convert: tasks::convert,
    },
    Rule {
        name: "highlights",
        convert: highlights::convert,
    },
    Rule {
        name: "wikilinks",
        convert: wikilinks::convert,
    },
    Rule {
        name: "numbered-lists",
        convert: numbered_lists::convert,
    },
    Rule {
        name: "embeds",
        convert: embeds::convert,
    },
];

/// Run every body rule over `text` in pipeline order.
pub fn rewrite_body(text: &str, config: &TranslationConfig) -> Result<String> {
    let mut out = text.to_string();
    for rule in BODY_RULES {
        out = (rule.convert)(&out, config)?;
    }
    Ok(out)
}
