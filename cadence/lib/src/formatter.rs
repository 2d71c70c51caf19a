//! The formatting pipeline and its public entry points.

use tracing::trace;

use crate::types::SofteningLevel;
use crate::{cleanup, contractions, markdown, punctuation, softening};

/// Format `text` for speech output using the default softening level
/// ([`SofteningLevel::Med`]).
///
/// ## Examples
///
/// ```
/// use cadence_lib::format_for_speech;
///
/// assert_eq!(format_for_speech("It is a great wine"), "It's a great wine");
/// assert_eq!(format_for_speech("Penfolds (2021)"), "Penfolds, 2021");
/// ```
pub fn format_for_speech(text: &str) -> String {
    format_with_level(text, SofteningLevel::default())
}

/// Format `text` for speech output at an explicit softening level.
///
/// Runs the phases in order: markdown stripping, parenthetical
/// flattening, punctuation-run collapsing, inflection-mark spacing,
/// dash normalization, colon handling, newline flattening, full-stop
/// softening, contraction substitution, and the final cleanup cascade.
///
/// Pure and deterministic: the same `(text, level)` pair always yields
/// the same output, and the empty string maps to the empty string.
///
/// ## Examples
///
/// ```
/// use cadence_lib::{format_with_level, SofteningLevel};
///
/// assert_eq!(
///     format_with_level("Wait... really", SofteningLevel::Off),
///     "Wait. really"
/// );
/// assert_eq!(
///     format_with_level("Wait... really", SofteningLevel::Med),
///     "Wait, really"
/// );
/// ```
pub fn format_with_level(text: &str, level: SofteningLevel) -> String {
    if text.is_empty() {
        return String::new();
    }

    trace!(%level, chars = text.chars().count(), "formatting text for speech");

    let text = markdown::strip_markdown(text);
    let text = markdown::flatten_parentheticals(&text);
    let text = punctuation::collapse_punctuation_runs(&text);
    let text = punctuation::normalize_inflection_spacing(&text);
    let text = punctuation::normalize_dashes(&text);
    let text = punctuation::soften_colons(&text);
    let text = punctuation::flatten_newlines(&text, level);
    let text = softening::soften_full_stops(&text, level);
    let text = contractions::apply_contractions(&text);
    cleanup::final_cleanup(&text)
}

/// A formatter carrying a configured default softening level.
///
/// Hosts that want a process-wide default other than
/// [`SofteningLevel::Med`] construct one of these and share it; per-call
/// overrides go through [`format_with`](SpeechFormatter::format_with).
/// The formatter holds no other state and is freely shareable across
/// threads.
///
/// ## Examples
///
/// ```
/// use cadence_lib::{SofteningLevel, SpeechFormatter};
///
/// let formatter = SpeechFormatter::new().with_default_level(SofteningLevel::Off);
/// assert_eq!(formatter.format("Wait... really"), "Wait. really");
/// assert_eq!(
///     formatter.format_with("Wait... really", SofteningLevel::Med),
///     "Wait, really"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpeechFormatter {
    default_level: SofteningLevel,
}

impl SpeechFormatter {
    /// Create a formatter with the default softening level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default softening level.
    #[must_use]
    pub fn with_default_level(mut self, level: SofteningLevel) -> Self {
        self.default_level = level;
        self
    }

    /// The configured default softening level.
    pub fn default_level(&self) -> SofteningLevel {
        self.default_level
    }

    /// Format `text` at the configured default level.
    pub fn format(&self, text: &str) -> String {
        format_with_level(text, self.default_level)
    }

    /// Format `text` at an explicit level, ignoring the configured
    /// default.
    pub fn format_with(&self, text: &str, level: SofteningLevel) -> String {
        format_with_level(text, level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_returns_empty() {
        assert_eq!(format_for_speech(""), "");
    }

    #[test]
    fn test_default_level_is_med() {
        assert_eq!(SpeechFormatter::new().default_level(), SofteningLevel::Med);
        assert_eq!(
            format_for_speech("Wait... really"),
            format_with_level("Wait... really", SofteningLevel::Med)
        );
    }

    #[test]
    fn test_formatter_override_beats_default() {
        let formatter = SpeechFormatter::new().with_default_level(SofteningLevel::Off);
        assert_eq!(
            formatter.format_with("Wait... really", SofteningLevel::Med),
            "Wait, really"
        );
    }

    #[test]
    fn test_deterministic() {
        let text = "# Notes\nThe 2019 vintage (a warm year) is ready. And it shows.";
        assert_eq!(
            format_with_level(text, SofteningLevel::High),
            format_with_level(text, SofteningLevel::High)
        );
    }
}
