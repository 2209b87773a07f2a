//! Indefinite-article selection ("a" vs "an").
//!
//! Choice is phonetic, not orthographic: "an hour" but "a unicorn",
//! "an FBI agent" but "a NATO summit". The cascade runs from user
//! overrides through explicit exception lists to the general
//! vowel/consonant rule.

use crate::config::Config;
use crate::lexicon::articles::{
    consonant_sound_vowel_prefix, AN_ABBREV_LEAD, AN_SINGLE_LETTERS, AN_Y_CLUSTERS,
    EXPLICIT_AN_EXCEPTIONS, EXPLICIT_AN_PREFIXES,
};

/// Select the indefinite article for `word` ("a" or "an").
pub fn select(word: &str, cfg: &Config) -> &'static str {
    if let Some(article) = cfg.article_override(word) {
        return article;
    }

    let lower = word.to_lowercase();
    let mut chars = word.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return "a",
    };
    let second = chars.next();

    if first.is_ascii_digit() {
        return if digits_want_an(word) { "an" } else { "a" };
    }

    // "an hour", "an honest mistake", but "a houri".
    if EXPLICIT_AN_PREFIXES.iter().any(|p| lower.starts_with(p))
        && !EXPLICIT_AN_EXCEPTIONS.iter().any(|e| lower.starts_with(e))
    {
        return "an";
    }

    // Single letters and initialisms: "an X", "an F.B.I. file".
    let first_lower = first.to_ascii_lowercase();
    if word.len() == first.len_utf8() || matches!(second, Some('.') | Some('-')) {
        return if AN_SINGLE_LETTERS.contains(&first_lower) {
            "an"
        } else {
            "a"
        };
    }

    // All-caps abbreviations pronounced letter by letter.
    if let Some(second) = second {
        if AN_ABBREV_LEAD.contains(&first) && second.is_ascii_uppercase() {
            return if abbrev_wants_an(word) { "an" } else { "a" };
        }
        // "a UN resolution", "a UFO" (you-).
        if first == 'U' && second.is_ascii_uppercase() {
            return "a";
        }
    }

    if consonant_sound_vowel_prefix(&lower) {
        return "a";
    }
    if "aeiou".contains(first_lower) {
        return "an";
    }
    // "an yttrium sample": y before certain consonant clusters.
    if AN_Y_CLUSTERS.iter().any(|c| lower.starts_with(c)) {
        return "an";
    }
    "a"
}

/// Prepend the selected article: `"apple"` → `"an apple"`.
pub fn prepend(word: &str, cfg: &Config) -> String {
    if word.trim().is_empty() {
        return word.to_string();
    }
    format!("{} {}", select(word, cfg), word)
}

/// Numbers pronounced with a leading vowel: eight-, eleven- and
/// eighteen-anything ("an 8", "an 11,000-strong crowd", "an 18th").
fn digits_want_an(word: &str) -> bool {
    let digits: String = word.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.starts_with('8') {
        return true;
    }
    if (digits.starts_with("11") || digits.starts_with("18"))
        && (digits.len() - 2) % 3 == 0
    {
        return true;
    }
    false
}

/// Does an all-caps abbreviation take "an"? True when it is spelled out
/// letter by letter and the first letter's name starts with a vowel
/// sound; false when the leading cluster is pronounceable as a word
/// ("a NASA probe", "an NSA memo").
fn abbrev_wants_an(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() < 2 {
        return false;
    }
    let (c0, c1) = (chars[0], chars[1]);

    if word.starts_with("FJO") || word.starts_with("SQU") {
        return false;
    }
    if "HLMNS".contains(c0) && c1 == 'Y' && chars.len() >= 3 {
        return false;
    }
    if c0 == 'R' && c1 == 'Y' && matches!(chars.get(2), Some('E') | Some('O')) {
        return false;
    }

    // Pronounceable onset followed by a vowel reads as a word.
    let onset = match c0 {
        'F' if matches!(c1, 'L' | 'R') => 2,
        'F' => 1,
        'H' | 'L' | 'N' => 1,
        'M' if c1 == 'N' => 2,
        'M' => 1,
        'R' if c1 == 'H' => 2,
        'R' => 1,
        'S' if "CHKLMNPTVW".contains(c1) => 2,
        'S' => 1,
        'X' if word.starts_with("XYL") => 3,
        'X' => 1,
        _ => return false,
    };
    if let Some(&after) = chars.get(onset) {
        if "AEIOU".contains(after) {
            return false;
        }
    }
    true
}
