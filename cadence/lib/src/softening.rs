//! Full-stop softening, the core of the pipeline.
//!
//! Speech engines pause far too long on a period. This pass splits the
//! text at sentence boundaries and re-joins the fragments with the
//! weakest break that still reads naturally, under the rules of the
//! active [`SofteningLevel`].
//!
//! Splitting must not fire inside an abbreviation (`Dr. Smith`) or a
//! decimal number (`94.5`), so those spans are swapped for positional
//! sentinel tokens first and restored verbatim once the fragments are
//! re-joined.
//!
//! Skipped entirely at [`SofteningLevel::Off`]: periods pass through
//! unchanged.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::types::SofteningLevel;

/// Sentinel for protected spans: repeated `n` times for the `n`-th match.
///
/// NUL never appears in assistant-generated text, and restoring the
/// tokens longest-first keeps the shorter ones from matching inside the
/// longer ones.
const PROTECT_SENTINEL: char = '\u{0}';

/// Abbreviations that end in a period without ending a sentence.
///
/// A closed, hand-curated set; extending it is a product decision.
static ABBREVIATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:Mr|Mrs|Ms|Dr|St|Jr|Sr|vs|etc|e\.g|i\.e|approx|vol|no)\.").unwrap()
});

/// Decimal or version numbers: `94.5`, `2.0`.
static DECIMAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+\.\d+").unwrap());

/// A period followed by whitespace: the sentence boundary we split on.
static SENTENCE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.\s+").unwrap());

/// Sentence-initial connector words that always soften their boundary.
static CONNECTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:and|but|so|then|also|now|however|still|plus|next|or|yet)\b").unwrap()
});

const HARD_STOP: &str = ". ";
const SOFT_COMMA: &str = ", ";
const SOFT_SEMICOLON: &str = "; ";

/// Soften sentence-final periods according to `level`.
pub(crate) fn soften_full_stops(text: &str, level: SofteningLevel) -> String {
    if level == SofteningLevel::Off {
        return text.to_string();
    }

    let mut protected_spans = Vec::new();
    let protected = protect(text, &mut protected_spans);

    let fragments: Vec<&str> = SENTENCE_BOUNDARY.split(&protected).collect();
    if fragments.len() <= 1 {
        // No sentence boundary; nothing to soften.
        return restore(protected, &protected_spans);
    }

    trace!(
        boundaries = fragments.len() - 1,
        %level,
        "softening sentence boundaries"
    );

    let mut result = String::with_capacity(protected.len());
    let mut consecutive_soft = 0u32;
    for (i, fragment) in fragments.iter().enumerate() {
        result.push_str(fragment);
        if let Some(next) = fragments.get(i + 1) {
            result.push_str(choose_separator(next, level, &mut consecutive_soft));
        }
    }

    restore(result, &protected_spans)
}

/// Pick the break for the boundary preceding `next`.
///
/// The rules apply in precedence order, first match wins:
///
/// 1. at `High`, three consecutive soft breaks force a hard stop (the
///    cadence rule)
/// 2. a connector-led sentence always gets a comma
/// 3. `Low` takes a hard stop
/// 4. `Med` grades by length: comma to 40 chars, semicolon to 80, hard
///    stop beyond
/// 5. `High` grades by length: comma to 80 chars, semicolon beyond
fn choose_separator(
    next: &str,
    level: SofteningLevel,
    consecutive_soft: &mut u32,
) -> &'static str {
    if level == SofteningLevel::High && *consecutive_soft >= 3 {
        *consecutive_soft = 0;
        return HARD_STOP;
    }

    if CONNECTOR.is_match(next.trim()) {
        *consecutive_soft += 1;
        return SOFT_COMMA;
    }

    let next_len = next.chars().count();
    match level {
        // Softening never runs at Off.
        SofteningLevel::Off | SofteningLevel::Low => HARD_STOP,
        SofteningLevel::Med => {
            if next_len <= 40 {
                *consecutive_soft += 1;
                SOFT_COMMA
            } else if next_len <= 80 {
                *consecutive_soft += 1;
                SOFT_SEMICOLON
            } else {
                *consecutive_soft = 0;
                HARD_STOP
            }
        }
        SofteningLevel::High => {
            *consecutive_soft += 1;
            if next_len <= 80 {
                SOFT_COMMA
            } else {
                SOFT_SEMICOLON
            }
        }
    }
}

/// Swap each abbreviation and decimal for a positional sentinel token.
///
/// Abbreviations are scanned first, then decimals, sharing one 1-based
/// insertion counter. The matched literal lands in `spans` at
/// `counter - 1`.
fn protect(text: &str, spans: &mut Vec<String>) -> String {
    let protected = ABBREVIATION.replace_all(text, |caps: &regex::Captures| {
        spans.push(caps[0].to_string());
        PROTECT_SENTINEL.to_string().repeat(spans.len())
    });
    DECIMAL
        .replace_all(&protected, |caps: &regex::Captures| {
            spans.push(caps[0].to_string());
            PROTECT_SENTINEL.to_string().repeat(spans.len())
        })
        .into_owned()
}

/// Put the protected literals back, highest insertion index first so a
/// short token never matches inside a longer one.
fn restore(text: String, spans: &[String]) -> String {
    let mut restored = text;
    for (index, original) in spans.iter().enumerate().rev() {
        let token = PROTECT_SENTINEL.to_string().repeat(index + 1);
        restored = restored.replace(&token, original);
    }
    restored
}
