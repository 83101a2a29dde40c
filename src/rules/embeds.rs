//! Obsidian embeds to Logseq embeds, plus media URL macros.

use crate::config::TranslationConfig;
use crate::error::Result;
use crate::types::is_asset_name;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static WIKI_EMBED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[\[(.*?)\]\]").unwrap());

static VIDEO_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"!\[([^\]]*)\]\((https://(?:www\.)?(?:youtube\.com/watch\?v=|youtu\.be/|vimeo\.com/)[^\s)]+)\)",
    )
    .unwrap()
});

static TWEET_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[([^\]]*)\]\((https://(?:www\.)?(?:twitter\.com|x\.com)/[^\s)]+/status/[^\s)]+)\)")
        .unwrap()
});

pub fn convert(text: &str, _config: &TranslationConfig) -> Result<String> {
    let text = WIKI_EMBED.replace_all(text, |caps: &Captures| {
        let inner = &caps[1];
        if inner.is_empty() {
            return caps[0].to_string();
        }
        let (name, alias) = match inner.split_once('|') {
            Some((name, alias)) => (name, Some(alias)),
            None => (inner, None),
        };
        if is_asset_name(name) {
            format!("![{}](assets/{})", alias.unwrap_or(name), name)
        } else {
            // Page embeds have no alias syntax in Logseq.
            format!("{{{{embed [[{name}]]}}}}")
        }
    });
    let text = VIDEO_URL.replace_all(&text, "{{video $2}}");
    let text = TWEET_URL.replace_all(&text, "{{tweet $2}}");
    Ok(text.into_owned())
}
