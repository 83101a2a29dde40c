//! The document conversion pipeline.
//!
//! Raw text flows one way: frontmatter extraction, inline rewriting, chunk
//! splitting, outlining. Each stage consumes the previous stage's complete
//! output; nothing is streamed or shared.

use crate::config::TranslationConfig;
use crate::error::Result;
use crate::outline::{outline_chunks, split_into_chunks, Chunk, ChunkKind, OutlineOptions};
use crate::rules::{self, frontmatter::Property};

/// Convert one full Obsidian document to a Logseq page.
pub fn convert_document(text: &str, config: &TranslationConfig) -> Result<String> {
    let (properties, body) = rules::frontmatter::extract_properties(text)?;
    convert_parts(&properties, body, config)
}

/// Convert already-separated frontmatter properties and body text.
///
/// The migrator uses this to adjust journal properties (dropping `created`,
/// adding an alias for the renamed file) before outlining.
pub fn convert_parts(
    properties: &[Property],
    body: &str,
    config: &TranslationConfig,
) -> Result<String> {
    let rewritten = rules::rewrite_body(body, config)?;
    let mut chunks = split_into_chunks(&rewritten);
    if !properties.is_empty() {
        // Properties re-enter the outline as a synthetic frontmatter chunk
        // so they render unbulleted at the top of the page.
        chunks.insert(
            0,
            Chunk::new(
                ChunkKind::Frontmatter,
                rules::frontmatter::format_properties(properties),
            ),
        );
    }
    Ok(outline_chunks(
        &chunks,
        &OutlineOptions {
            list_nesting: config.list_nesting,
        },
    ))
}
