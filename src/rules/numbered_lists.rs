//! Numbered lists to Logseq ordered-list bullets.

use crate::config::TranslationConfig;
use crate::error::Result;
use regex::Regex;
use std::sync::LazyLock;

static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)(\d+)\.\s+(.*)$").unwrap());

pub fn convert(text: &str, _config: &TranslationConfig) -> Result<String> {
    let mut out = Vec::new();
    for line in text.lines() {
        match NUMBERED_ITEM.captures(line) {
            Some(caps) => {
                let indent = &caps[1];
                let item = &caps[3];
                out.push(format!("{indent}- {item}"));
                // The property line indents two further spaces so Logseq
                // attaches it to the bullet above.
                out.push(format!("{indent}  logseq.order-list-type:: number"));
            }
            None => out.push(line.to_string()),
        }
    }
    Ok(out.join("\n"))
}
