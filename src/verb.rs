//! Plural-verb agreement and the present participle.
//!
//! Only the first token of a verb phrase inflects ("runs away" →
//! "run away"). Irregular past and future tenses pass through unchanged:
//! English past tense does not inflect for number.

use crate::config::Config;
use crate::lexicon::verbs::{
    PLVERB_AMBIGUOUS_PRES, PLVERB_IRREGULAR_NEGATED, PLVERB_IRREGULAR_NON_PRES,
    PLVERB_IRREGULAR_PRES,
};

/// Split a phrase into its first token and the remainder (which keeps
/// its leading whitespace).
fn split_first(phrase: &str) -> (&str, &str) {
    match phrase.find(char::is_whitespace) {
        Some(idx) => (&phrase[..idx], &phrase[idx..]),
        None => (phrase, ""),
    }
}

/// Inflect only the tokens covered by the irregular and ambiguous verb
/// tables. Returns `None` when the phrase is not recognizably a verb, so
/// the generic `plural()` transform can fall through to the noun cascade.
pub fn pluralize_special(phrase: &str, _cfg: &Config) -> Option<String> {
    let (first, rest) = split_first(phrase);
    let lower = first.to_lowercase();

    if let Some(plural) = PLVERB_IRREGULAR_PRES.get(lower.as_str()) {
        return Some(format!("{plural}{rest}"));
    }
    if let Some(plural) = PLVERB_IRREGULAR_NEGATED.get(lower.as_str()) {
        return Some(format!("{plural}{rest}"));
    }
    if PLVERB_IRREGULAR_NON_PRES.contains(&lower) {
        return Some(phrase.to_string());
    }
    if let Some(plural) = PLVERB_AMBIGUOUS_PRES.get(lower.as_str()) {
        return Some(format!("{plural}{rest}"));
    }
    None
}

/// Pluralize a verb phrase: the special tables first, then the sibilant
/// suffix families, then the generic strip-trailing-s fallback.
pub fn pluralize(phrase: &str, cfg: &Config) -> String {
    if phrase.is_empty() {
        return String::new();
    }
    if let Some(replacement) = cfg.verb_overrides.lookup(phrase) {
        return replacement;
    }
    if let Some(result) = pluralize_special(phrase, cfg) {
        return result;
    }

    let (first, rest) = split_first(phrase);
    let lower = first.to_lowercase();

    // Generic negated contraction: pluralize the stem, keep the "n't".
    if let Some(stem) = lower.strip_suffix("n't") {
        let plural_stem = pluralize(stem, cfg);
        return format!("{plural_stem}n't{rest}");
    }

    if !lower.ends_with('s') || lower.ends_with("ss") {
        // Already plural, or not a third-person-singular form.
        return phrase.to_string();
    }

    let strip = |n: usize| &first[..first.len() - n];

    // Sibilant families: strip the -es.
    if lower.ends_with("ches")
        || lower.ends_with("shes")
        || lower.ends_with("zzes")
        || lower.ends_with("sses")
    {
        return format!("{}{rest}", strip(2));
    }
    if lower.ends_with("oes") {
        return format!("{}{rest}", strip(2));
    }
    if lower.ends_with("ies") {
        if lower.len() > 4 {
            return format!("{}y{rest}", strip(3));
        }
        // "dies" → "die", "ties" → "tie".
        return format!("{}{rest}", strip(1));
    }

    format!("{}{rest}", strip(1))
}

// ============================================================================
// Present participle
// ============================================================================

/// Form the present participle of a verb phrase.
///
/// The verb is first normalized to its plural (base) form, then the
/// participle spelling rules apply: `-ie` → `-y`, silent-`e` dropping,
/// and final-consonant doubling after a short vowel.
pub fn present_participle(phrase: &str, cfg: &Config) -> String {
    if phrase.is_empty() {
        return String::new();
    }
    let plural = pluralize(phrase, cfg);
    let (first, rest) = split_first(&plural);
    let lower = first.to_lowercase();

    let stem = participle_stem(first, &lower);
    format!("{stem}ing{rest}")
}

fn participle_stem(first: &str, lower: &str) -> String {
    match lower {
        "are" | "were" | "is" | "am" | "be" => return "be".to_string(),
        "have" | "had" | "has" => return "hav".to_string(),
        "hoe" | "toe" | "shoe" | "canoe" | "tiptoe" => return first.to_string(),
        _ => {}
    }
    if let Some(stem) = strip_suffix_ci(first, lower, "ie") {
        // die → dying, tie → tying
        return format!("{stem}y");
    }
    if let Some(stem) = strip_suffix_ci(first, lower, "ue") {
        // argue → arguing, pursue → pursuing
        return format!("{stem}u");
    }
    if lower.ends_with("ee") || lower.ends_with("ye") || lower.ends_with("oe") {
        // see → seeing, dye → dyeing
        return first.to_string();
    }
    if lower.ends_with('e') && lower.len() > 1 {
        let before = lower.chars().rev().nth(1);
        if !matches!(before, Some('e')) {
            // make → making, have handled above
            return first[..first.len() - 1].to_string();
        }
        return first.to_string();
    }
    // Final-consonant doubling: consonant + vowel + one of bdgmnprst,
    // but not after an -er/-en ending.
    let chars: Vec<char> = lower.chars().collect();
    if chars.len() >= 3 && !lower.ends_with("er") && !lower.ends_with("en") {
        let last = chars[chars.len() - 1];
        let mid = chars[chars.len() - 2];
        let prev = chars[chars.len() - 3];
        if "bdgmnprst".contains(last) && "aeiouy".contains(mid) && !"aeiou".contains(prev) {
            return format!("{first}{last}");
        }
    }
    first.to_string()
}

fn strip_suffix_ci<'a>(original: &'a str, lower: &str, suffix: &str) -> Option<&'a str> {
    if lower.ends_with(suffix) {
        Some(&original[..original.len() - suffix.len()])
    } else {
        None
    }
}
