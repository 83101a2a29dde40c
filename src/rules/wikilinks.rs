//! Obsidian `[[page|alias]]` links to Logseq link syntax.

use crate::config::TranslationConfig;
use crate::error::Result;
use crate::types::is_asset_name;
use regex::Regex;
use std::sync::LazyLock;

static WIKILINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]|]+)?(?:\|([^\]]+))?\]\]").unwrap());

pub fn convert(text: &str, _config: &TranslationConfig) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in WIKILINK.captures_iter(text) {
        let whole = caps.get(0).map(|m| (m.start(), m.end(), m.as_str()));
        let Some((start, end, matched)) = whole else {
            continue;
        };
        out.push_str(&text[last..start]);
        last = end;

        let page = caps.get(1).map(|m| m.as_str());
        let alias = caps.get(2).map(|m| m.as_str());
        let escaped = trailing_backslashes(&text[..start]) % 2 == 1;
        // Embeds (`![[...]]`) belong to the embed rule, which runs later.
        let embed = text[..start].ends_with('!');

        match (page, alias) {
            (Some(page), Some(alias)) if !escaped && !embed => {
                if is_asset_name(page) {
                    out.push_str(&format!("[{alias}](assets/{page})"));
                } else if page == alias {
                    out.push_str(&format!("[[{page}]]"));
                } else {
                    out.push_str(&format!("[{alias}]([[{page}]])"));
                }
            }
            // Missing page or alias, escapes and embeds pass through.
            _ => out.push_str(matched),
        }
    }
    out.push_str(&text[last..]);
    Ok(out)
}

fn trailing_backslashes(text: &str) -> usize {
    text.chars().rev().take_while(|&c| c == '\\').count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(input: &str) -> String {
        convert(input, &TranslationConfig::default()).unwrap()
    }

    #[test]
    fn test_aliased_link() {
        assert_eq!(run("see [[Some Page|the page]]"), "see [the page]([[Some Page]])");
    }

    #[test]
    fn test_alias_equal_to_page_collapses() {
        assert_eq!(run("[[Note|Note]]"), "[[Note]]");
    }

    #[test]
    fn test_plain_link_unchanged() {
        assert_eq!(run("[[Just A Page]]"), "[[Just A Page]]");
    }

    #[test]
    fn test_empty_link_unchanged() {
        assert_eq!(run("[[|]]"), "[[|]]");
    }

    #[test]
    fn test_asset_link() {
        assert_eq!(
            run("[[diagram.png|the diagram]]"),
            "[the diagram](assets/diagram.png)"
        );
    }

    #[test]
    fn test_asset_wins_over_collapse() {
        assert_eq!(run("[[a.png|a.png]]"), "[a.png](assets/a.png)");
    }

    #[test]
    fn test_escaped_link_unchanged() {
        assert_eq!(run(r"\[[Page|alias]]"), r"\[[Page|alias]]");
    }

    #[test]
    fn test_embed_left_for_embed_rule() {
        assert_eq!(run("![[img.png|pic]]"), "![[img.png|pic]]");
    }

    #[test]
    fn test_multiple_links_one_line() {
        assert_eq!(
            run("[[A|a]] and [[B|b]]"),
            "[a]([[A]]) and [b]([[B]])"
        );
    }
}
