//! Punctuation, dash, colon, and newline normalization.
//!
//! These passes run between markdown stripping and full-stop softening:
//!
//! - runs of `.`, `!`, or `?` collapse to a single mark
//! - whitespace after `!` or `?` collapses to exactly one space
//! - em-dashes and `--` normalize to a spaced em-dash (a strong break
//!   that must never collapse into a comma)
//! - colons soften context-sensitively
//! - newlines flatten to breaks whose strength depends on the softening
//!   level

use std::sync::LazyLock;

use regex::Regex;

use crate::types::SofteningLevel;

static DOT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.{2,}").unwrap());
static BANG_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!{2,}").unwrap());
static QUESTION_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\?{2,}").unwrap());
static INFLECTION_SPACING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([!?])\s+").unwrap());
static DASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*(?:\u{2014}|--)\s*").unwrap());
static COLON_BEFORE_NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":[ \t]*\n").unwrap());
static COLON_BEFORE_LOWERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":\s+([a-z])").unwrap());
static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Collapse 2+ consecutive `.`, `!`, or `?` to a single mark.
pub(crate) fn collapse_punctuation_runs(text: &str) -> String {
    let text = DOT_RUN.replace_all(text, ".");
    let text = BANG_RUN.replace_all(&text, "!");
    QUESTION_RUN.replace_all(&text, "?").into_owned()
}

/// Collapse any whitespace run after `!` or `?` to exactly one space.
pub(crate) fn normalize_inflection_spacing(text: &str) -> String {
    INFLECTION_SPACING.replace_all(text, "${1} ").into_owned()
}

/// Re-space em-dashes and convert `--` to a spaced em-dash.
pub(crate) fn normalize_dashes(text: &str) -> String {
    DASH.replace_all(text, " \u{2014} ").into_owned()
}

/// Soften colons based on what follows them.
///
/// A colon introducing a line break becomes a comma (the newline itself
/// is left for [`flatten_newlines`]). A colon before a lowercase
/// continuation becomes a comma. A colon before an uppercase letter is
/// left alone: the speech engine pauses acceptably on a title or list
/// item.
pub(crate) fn soften_colons(text: &str) -> String {
    let text = COLON_BEFORE_NEWLINE.replace_all(text, ",\n");
    COLON_BEFORE_LOWERCASE
        .replace_all(&text, ", ${1}")
        .into_owned()
}

/// Flatten newlines into breaks.
///
/// A run of two-or-more newlines is a paragraph break: a hard stop at
/// `Off`/`Low`, a soft break at `Med`/`High`. Any remaining single
/// newline becomes `, ` at every level.
pub(crate) fn flatten_newlines(text: &str, level: SofteningLevel) -> String {
    let paragraph_break = match level {
        SofteningLevel::Off | SofteningLevel::Low => ". ",
        SofteningLevel::Med | SofteningLevel::High => ", ",
    };
    PARAGRAPH_BREAK
        .replace_all(text, paragraph_break)
        .replace('\n', ", ")
}
