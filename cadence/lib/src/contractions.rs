//! Contraction substitution.
//!
//! Spoken language contracts where written prose does not: `it is a
//! great wine` reads stiffly aloud. This pass applies a fixed, ordered
//! table of whole-word replacements, with a lowercase-leading and a
//! capitalized-leading variant for each entry so sentence-initial
//! matches keep their case.
//!
//! The table is closed and hand-curated; extending it is a product
//! decision, not something inferred from usage.

use std::sync::LazyLock;

use regex::Regex;

/// The base table, lowercase form. Order matters: `you would` must run
/// before `would not` so `you would not` contracts the leading pair.
const CONTRACTION_TABLE: &[(&str, &str)] = &[
    ("it is", "it's"),
    ("i have", "i've"),
    ("do not", "don't"),
    ("cannot", "can't"),
    ("will not", "won't"),
    ("that is", "that's"),
    ("what is", "what's"),
    ("you are", "you're"),
    ("they are", "they're"),
    ("we are", "we're"),
    ("there is", "there's"),
    ("here is", "here's"),
    ("you would", "you'd"),
    ("would not", "wouldn't"),
    ("should not", "shouldn't"),
    ("could not", "couldn't"),
];

/// Compiled whole-word patterns: a lowercase and a capitalized variant
/// per table entry, in table order.
static CONTRACTIONS: LazyLock<Vec<(Regex, String)>> = LazyLock::new(|| {
    CONTRACTION_TABLE
        .iter()
        .flat_map(|&(find, replace)| {
            [
                (whole_word(find), replace.to_string()),
                (whole_word(&capitalize(find)), capitalize(replace)),
            ]
        })
        .collect()
});

fn whole_word(phrase: &str) -> Regex {
    Regex::new(&format!(r"\b{phrase}\b")).unwrap()
}

fn capitalize(phrase: &str) -> String {
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Apply the contraction table, case-preservingly, in order.
pub(crate) fn apply_contractions(text: &str) -> String {
    let mut result = text.to_string();
    for (pattern, replacement) in CONTRACTIONS.iter() {
        result = pattern.replace_all(&result, replacement.as_str()).into_owned();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_contraction() {
        assert_eq!(apply_contractions("yes, it is ready"), "yes, it's ready");
    }

    #[test]
    fn test_capitalized_contraction() {
        assert_eq!(apply_contractions("It is a great wine"), "It's a great wine");
    }

    #[test]
    fn test_whole_word_only() {
        // "cannot" inside another word must not contract.
        assert_eq!(apply_contractions("the cannotation"), "the cannotation");
        assert_eq!(apply_contractions("a bandit is near"), "a bandit is near");
    }

    #[test]
    fn test_table_order_wins_for_overlaps() {
        // "you would" runs before "would not".
        assert_eq!(apply_contractions("you would not say"), "you'd not say");
    }

    #[test]
    fn test_multiple_contractions_in_one_text() {
        assert_eq!(
            apply_contractions("here is the list: do not worry, we are fine"),
            "here's the list: don't worry, we're fine"
        );
    }

    #[test]
    fn test_capital_i_have() {
        assert_eq!(apply_contractions("I have tried it"), "I've tried it");
    }
}
