//! Markdown stripping and parenthetical flattening.
//!
//! Assistant-generated text arrives with markdown emphasis, heading
//! markers, and typographic quotes that mean nothing to a speech engine.
//! These passes reduce the text to speakable prose:
//!
//! - `**bold**`, `*italic*`, and `_underscore_` emphasis unwrap to their
//!   inner text (non-greedy, innermost match)
//! - leading `#` heading markers disappear, the heading text stays
//! - straight and curly double quotes are deleted outright
//! - `(parenthetical)` becomes `, parenthetical` so the aside reads as a
//!   comma-introduced clause
//!
//! Single quotes and apostrophes are never touched: they carry
//! contraction meaning (`it's`, `s'il`).

use std::sync::LazyLock;

use regex::Regex;

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static UNDERSCORE_EMPHASIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(.+?)_").unwrap());
static HEADING_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#{1,6}\s+").unwrap());
static DOUBLE_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[\"\u{201C}\u{201D}]").unwrap());
static PARENTHETICAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(([^)]*)\)").unwrap());

/// Remove markdown emphasis, heading markers, and double quotes.
///
/// Malformed markdown (an unterminated `**`, say) simply fails to match
/// and passes through unchanged.
pub(crate) fn strip_markdown(text: &str) -> String {
    let text = BOLD.replace_all(text, "${1}");
    let text = ITALIC.replace_all(&text, "${1}");
    let text = UNDERSCORE_EMPHASIS.replace_all(&text, "${1}");
    let text = HEADING_MARKER.replace_all(&text, "");
    DOUBLE_QUOTE.replace_all(&text, "").into_owned()
}

/// Rewrite `(aside)` as `, aside`, trimming the inner whitespace.
pub(crate) fn flatten_parentheticals(text: &str) -> String {
    PARENTHETICAL
        .replace_all(text, |caps: &regex::Captures| {
            format!(", {}", caps[1].trim())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Emphasis
    // ========================================================================

    #[test]
    fn test_strips_bold() {
        assert_eq!(strip_markdown("a **bold** claim"), "a bold claim");
    }

    #[test]
    fn test_strips_italic_and_underscore() {
        assert_eq!(strip_markdown("*quiet* and _subtle_"), "quiet and subtle");
    }

    #[test]
    fn test_unterminated_emphasis_passes_through() {
        assert_eq!(strip_markdown("a **dangling claim"), "a **dangling claim");
    }

    #[test]
    fn test_nested_emphasis_unwraps() {
        assert_eq!(strip_markdown("**very *big* wine**"), "very big wine");
    }

    // ========================================================================
    // Headings and quotes
    // ========================================================================

    #[test]
    fn test_strips_heading_markers() {
        assert_eq!(strip_markdown("# Title\nBody"), "Title\nBody");
        assert_eq!(strip_markdown("### Deep heading"), "Deep heading");
    }

    #[test]
    fn test_hash_without_space_is_not_a_heading() {
        assert_eq!(strip_markdown("#hashtag"), "#hashtag");
    }

    #[test]
    fn test_deletes_double_quotes() {
        assert_eq!(strip_markdown("a \"great\" wine"), "a great wine");
        assert_eq!(strip_markdown("a \u{201C}great\u{201D} wine"), "a great wine");
    }

    #[test]
    fn test_preserves_apostrophes() {
        assert_eq!(strip_markdown("it's s'il vous plait"), "it's s'il vous plait");
    }

    // ========================================================================
    // Parentheticals
    // ========================================================================

    #[test]
    fn test_flattens_parenthetical() {
        assert_eq!(flatten_parentheticals("Penfolds (2021)"), "Penfolds , 2021");
    }

    #[test]
    fn test_trims_inner_whitespace() {
        assert_eq!(flatten_parentheticals("wine ( superb )"), "wine , superb");
    }

    #[test]
    fn test_empty_parenthetical() {
        assert_eq!(flatten_parentheticals("odd ()"), "odd , ");
    }
}
