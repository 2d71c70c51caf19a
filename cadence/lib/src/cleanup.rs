//! Final whitespace and punctuation cleanup.
//!
//! The earlier passes splice commas and breaks into text that already
//! carries its own punctuation, so the last pass runs a cascade of
//! collapses: doubled spaces, doubled commas/periods/semicolons, a
//! comma swallowed by a following period, whitespace hugging a mark,
//! and any two adjacent marks. Runs unconditionally, trim last.

use std::sync::LazyLock;

use regex::Regex;

static MULTI_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").unwrap());
static DOUBLED_COMMA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",\s*,").unwrap());
static COMMA_BEFORE_PERIOD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",\s*\.").unwrap());
static DOUBLED_PERIOD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.\s*\.").unwrap());
static DOUBLED_SEMICOLON: LazyLock<Regex> = LazyLock::new(|| Regex::new(r";\s*;").unwrap());
static SPACE_BEFORE_MARK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([.,;:?!])").unwrap());
static ADJACENT_MARKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.,;:?!])[.,;:?!]").unwrap());

/// Run the cleanup cascade and trim the result.
pub(crate) fn final_cleanup(text: &str) -> String {
    let text = MULTI_SPACE.replace_all(text, " ");
    let text = DOUBLED_COMMA.replace_all(&text, ",");
    let text = COMMA_BEFORE_PERIOD.replace_all(&text, ".");
    let text = DOUBLED_PERIOD.replace_all(&text, ".");
    let text = DOUBLED_SEMICOLON.replace_all(&text, ";");
    let text = SPACE_BEFORE_MARK.replace_all(&text, "${1}");
    let text = ADJACENT_MARKS.replace_all(&text, "${1}");
    text.trim().to_string()
}
