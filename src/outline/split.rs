//! Splitting markdown into typed chunks.

use regex::Regex;
use std::sync::LazyLock;

// ATX-style heading: one or more # followed by whitespace.
static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#+\s").unwrap());

// List item at column zero: "- " or "1. " style markers.
static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(-|\d+\.)\s").unwrap());

/// The semantic classification of a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    Frontmatter,
    Heading,
    Paragraph,
    List,
}

/// A maximal contiguous run of lines classified as one semantic unit.
///
/// Chunks are transient: built by [`split_into_chunks`], consumed by the
/// outline builder, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub kind: ChunkKind,
    /// The chunk's lines, joined with `\n`.
    pub content: String,
    /// Number of leading `#` markers; zero for non-heading chunks.
    pub level: usize,
}

impl Chunk {
    pub fn new(kind: ChunkKind, content: impl Into<String>) -> Self {
        let content = content.into();
        let level = if kind == ChunkKind::Heading {
            content.chars().take_while(|&c| c == '#').count()
        } else {
            0
        };
        Self { kind, content, level }
    }
}

/// Per-line classification, before chunk-continuation rules are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineClass {
    Heading,
    List,
    Paragraph,
    /// Indented, non-marker line: continues whatever chunk is open.
    Continuation,
}

fn classify(line: &str) -> LineClass {
    if HEADING.is_match(line) {
        LineClass::Heading
    } else if LIST_ITEM.is_match(line) {
        LineClass::List
    } else if line.starts_with(|c: char| !c.is_whitespace()) {
        LineClass::Paragraph
    } else {
        LineClass::Continuation
    }
}

impl LineClass {
    fn chunk_kind(self) -> ChunkKind {
        match self {
            LineClass::Heading => ChunkKind::Heading,
            LineClass::List => ChunkKind::List,
            LineClass::Paragraph => ChunkKind::Paragraph,
            // An orphan continuation line (e.g. list content after a blank
            // line) opens a fresh list chunk; adjacent list chunks render
            // identically to a single one.
            LineClass::Continuation => ChunkKind::List,
        }
    }
}

/// Split a document into typed chunks.
///
/// Single forward scan. Fenced code blocks and `#+BEGIN_`/`#+END_` regions
/// are unbreakable spans: their blank lines and structural markers never
/// trigger chunk boundaries. A leading `---` frontmatter block is consumed
/// verbatim into a single Frontmatter chunk.
pub fn split_into_chunks(markdown: &str) -> Vec<Chunk> {
    let mut chunks: Vec<Chunk> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut kind: Option<ChunkKind> = None;
    let mut fence_open = false;
    let mut block_depth: usize = 0;

    fn commit(kind: &mut Option<ChunkKind>, current: &mut Vec<String>, chunks: &mut Vec<Chunk>) {
        if let Some(k) = kind.take() {
            if !current.is_empty() {
                chunks.push(Chunk::new(k, current.join("\n")));
            }
            current.clear();
        }
    }

    for line in markdown.trim().lines() {
        // Leading frontmatter block: consume raw lines up to the closing
        // delimiter, blank lines included.
        if chunks.is_empty() && kind.is_none() && current.is_empty() && line == "---" {
            kind = Some(ChunkKind::Frontmatter);
            continue;
        }
        if kind == Some(ChunkKind::Frontmatter) {
            if line == "---" {
                commit(&mut kind, &mut current, &mut chunks);
            } else {
                current.push(line.to_string());
            }
            continue;
        }

        let trimmed = line.trim();
        let was_in_span = fence_open || block_depth > 0;
        if trimmed.starts_with("```") {
            fence_open = !fence_open;
        } else if trimmed.starts_with("#+BEGIN_") {
            block_depth += 1;
        } else if trimmed.starts_with("#+END_") {
            block_depth = block_depth.saturating_sub(1);
        }
        // A line that opens or closes a span still belongs to the span.
        let in_span = was_in_span || fence_open || block_depth > 0;

        if in_span {
            if kind.is_none() {
                kind = Some(classify(line).chunk_kind());
            }
            current.push(if trimmed.is_empty() {
                String::new()
            } else {
                line.to_string()
            });
            continue;
        }

        if trimmed.is_empty() {
            commit(&mut kind, &mut current, &mut chunks);
            continue;
        }

        let class = classify(line);
        match kind {
            None => {
                kind = Some(class.chunk_kind());
                current.push(line.to_string());
            }
            Some(cur) => {
                if class == LineClass::Heading {
                    // Headings are always singleton chunks.
                    commit(&mut kind, &mut current, &mut chunks);
                    kind = Some(ChunkKind::Heading);
                    current.push(line.to_string());
                } else if cur == ChunkKind::Heading {
                    // Nothing is ever appended to a heading chunk.
                    commit(&mut kind, &mut current, &mut chunks);
                    kind = Some(class.chunk_kind());
                    current.push(line.to_string());
                } else if cur == ChunkKind::List || class == LineClass::Continuation {
                    // Lists lazily absorb any non-heading line; indented
                    // lines continue whatever chunk is open.
                    current.push(line.to_string());
                } else if class.chunk_kind() != cur {
                    commit(&mut kind, &mut current, &mut chunks);
                    kind = Some(class.chunk_kind());
                    current.push(line.to_string());
                } else {
                    current.push(line.to_string());
                }
            }
        }
    }

    commit(&mut kind, &mut current, &mut chunks);
    chunks
}
