//! Obsidian `==highlight==` to Logseq `^^highlight^^`.

use crate::config::TranslationConfig;
use crate::error::Result;

pub fn convert(text: &str, _config: &TranslationConfig) -> Result<String> {
    // Degenerate runs of `=` look like malformed highlight pairs; map them
    // literally before scanning for real spans.
    let text = text.replace("====", "^^^^").replace("===", "^^^");

    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < text.len() {
        let Some(rel) = text[i..].find("==") else {
            out.push_str(&text[i..]);
            break;
        };
        let open = i + rel;
        out.push_str(&text[i..open]);

        let escaped = trailing_backslashes(&text[..open]) % 2 == 1;
        match (escaped, find_closing(&text, open + 2)) {
            (false, Some(close)) => {
                out.push_str("^^");
                out.push_str(&text[open + 2..close]);
                out.push_str("^^");
                i = close + 2;
            }
            // Escaped span, closing delimiter and all, stays verbatim so
            // the closer is not mistaken for a new opener.
            (true, Some(close)) => {
                out.push_str(&text[open..close + 2]);
                i = close + 2;
            }
            (_, None) => {
                out.push_str("==");
                i = open + 2;
            }
        }
    }
    Ok(out)
}

/// Number of consecutive backslashes at the end of `text`.
fn trailing_backslashes(text: &str) -> usize {
    text.chars().rev().take_while(|&c| c == '\\').count()
}

/// Find a closing `==` with no embedded `=` before it, starting at `from`.
fn find_closing(text: &str, from: usize) -> Option<usize> {
    let pos = from + text[from..].find('=')?;
    if text[pos..].starts_with("==") {
        Some(pos)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(input: &str) -> String {
        convert(input, &TranslationConfig::default()).unwrap()
    }

    #[test]
    fn test_basic_highlight() {
        assert_eq!(run("a ==bold claim== here"), "a ^^bold claim^^ here");
    }

    #[test]
    fn test_multiple_highlights() {
        assert_eq!(run("==a== and ==b=="), "^^a^^ and ^^b^^");
    }

    #[test]
    fn test_unterminated_left_verbatim() {
        assert_eq!(run("==dangling"), "==dangling");
    }

    #[test]
    fn test_escaped_left_verbatim() {
        assert_eq!(run(r"\==not a highlight=="), r"\==not a highlight==");
    }

    #[test]
    fn test_double_backslash_is_not_an_escape() {
        assert_eq!(run(r"\\==still one=="), r"\\^^still one^^");
    }

    #[test]
    fn test_degenerate_runs() {
        assert_eq!(run("===="), "^^^^");
        assert_eq!(run("==="), "^^^");
    }

    #[test]
    fn test_embedded_equals_invalidates_span() {
        assert_eq!(run("==a = b=="), "==a = b==");
    }
}
