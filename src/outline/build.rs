//! Building a Logseq outline from chunks.

use super::split::{Chunk, ChunkKind};
use super::ListNesting;

/// Options controlling outline construction.
#[derive(Debug, Clone, Default)]
pub struct OutlineOptions {
    pub list_nesting: ListNesting,
}

/// Render chunks as an indented Logseq outline.
///
/// Headings form the nesting skeleton: a strictly increasing stack of
/// heading levels determines each chunk's indentation. Content under a
/// heading indents one step past it; a heading at or below a prior level
/// pops back out.
pub fn outline_chunks(chunks: &[Chunk], options: &OutlineOptions) -> String {
    let mut out: Vec<String> = Vec::new();
    // Stack of heading levels seen on the path to the current position.
    // The sentinel 0 keeps top-level content at indent zero.
    let mut stack: Vec<usize> = vec![0];
    let mut prev_kind: Option<ChunkKind> = None;

    for chunk in chunks {
        if chunk.kind == ChunkKind::Frontmatter {
            // Page properties stay unbulleted at the top of the page.
            out.push(chunk.content.clone());
            out.push(String::new());
            prev_kind = Some(ChunkKind::Frontmatter);
            continue;
        }

        if chunk.kind == ChunkKind::Heading {
            while *stack.last().unwrap_or(&0) >= chunk.level && stack.len() > 1 {
                stack.pop();
            }
        }
        let mut indent_level = stack.len() - 1;
        if chunk.kind == ChunkKind::Heading {
            stack.push(chunk.level);
        }

        let mut placeholder = None;
        if chunk.kind == ChunkKind::List && prev_kind == Some(ChunkKind::Paragraph) {
            match options.list_nesting {
                ListNesting::None => {}
                ListNesting::Paragraph => indent_level += 1,
                ListNesting::Separate => {
                    placeholder = Some(format!("{}-", "  ".repeat(indent_level)));
                    indent_level += 1;
                }
            }
        }
        if let Some(p) = placeholder {
            out.push(p);
        }

        let indent = "  ".repeat(indent_level);
        for (i, line) in chunk.content.lines().enumerate() {
            if line.is_empty() {
                // Blank lines inside unbreakable spans stay blank.
                out.push(String::new());
                continue;
            }
            let prefix = if chunk.kind == ChunkKind::List {
                // List lines carry their own markers and indentation.
                ""
            } else if i == 0 {
                "- "
            } else {
                "  "
            };
            out.push(format!("{indent}{prefix}{line}"));
        }

        prev_kind = Some(chunk.kind);
    }

    out.join("\n")
}
