//! Plural-noun and singular-noun transforms.
//!
//! Both directions are ordered rule cascades: user overrides, uninflected
//! sets, compound splitting, pronoun substitution, irregular lookup, the
//! suffix families, then a default. Earlier steps always win; within the
//! suffix families the longest matching suffix wins (see
//! [`crate::rules::SuffixRules`]).
//!
//! These functions operate on a whitespace-trimmed core; whitespace and
//! capitalization restoration happen in [`crate::engine`].

use smallvec::SmallVec;

use crate::config::{Config, Gender};
use crate::lexicon::nouns::*;
use crate::lexicon::pronouns::{SingularPronoun, PL_PRON_ACC, PL_PRON_NOM, SI_PRON};

// ============================================================================
// Compound splitting
// ============================================================================

/// A word split into tokens and the separators between them. Tokens keep
/// their original case; separators are preserved verbatim so "man-of-war"
/// and "man of war" both round-trip.
struct Compound<'a> {
    tokens: SmallVec<[&'a str; 4]>,
    seps: SmallVec<[&'a str; 4]>,
}

impl<'a> Compound<'a> {
    fn split(word: &'a str) -> Self {
        let mut tokens = SmallVec::new();
        let mut seps = SmallVec::new();
        let mut token_start = 0;
        let mut sep_start = None;
        for (i, c) in word.char_indices() {
            if c.is_whitespace() || c == '-' {
                if sep_start.is_none() {
                    tokens.push(&word[token_start..i]);
                    sep_start = Some(i);
                }
            } else if let Some(s) = sep_start.take() {
                seps.push(&word[s..i]);
                token_start = i;
            }
        }
        if let Some(s) = sep_start {
            // Trailing separator: keep it so rejoin reproduces the input.
            seps.push(&word[s..]);
            tokens.push("");
        } else {
            tokens.push(&word[token_start..]);
        }
        Compound { tokens, seps }
    }

    fn rejoin(&self, replaced: usize, replacement: &str) -> String {
        let mut out = String::new();
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                out.push_str(self.seps[i - 1]);
            }
            if i == replaced {
                out.push_str(replacement);
            } else {
                out.push_str(token);
            }
        }
        out
    }

    /// Index of the first preposition at position 1 or later, with at
    /// least one token following it.
    fn preposition_index(&self) -> Option<usize> {
        (1..self.tokens.len().saturating_sub(1))
            .find(|&i| PREPOSITIONS.contains(self.tokens[i]))
    }
}

// ============================================================================
// Plural direction
// ============================================================================

/// Pluralize a noun (or noun phrase) under the given configuration.
pub fn pluralize(word: &str, cfg: &Config) -> String {
    if word.is_empty() {
        return String::new();
    }
    if let Some(replacement) = cfg.noun_overrides.lookup(word) {
        return replacement;
    }
    let lower = word.to_lowercase();

    // Uninflected words and endings.
    if is_uninflected(&lower, cfg) {
        return word.to_string();
    }

    let compound = Compound::split(word);
    if compound.tokens.len() >= 2 {
        // Postfix adjectives: "attorney general" → "attorneys general",
        // but "major general" is an ordinary noun phrase.
        let last = compound.tokens[compound.tokens.len() - 1];
        let head = compound.tokens[compound.tokens.len() - 2];
        if SB_POSTFIX_ADJ.contains(last)
            && !(last.eq_ignore_ascii_case("general") && SB_MILITARY_GENERAL.contains(head))
        {
            let idx = compound.tokens.len() - 2;
            let plural_head = pluralize(head, cfg);
            return compound.rejoin(idx, &plural_head);
        }

        // Prepositional compounds: pluralize the token before the
        // preposition ("man-of-war" → "men-of-war").
        if compound.tokens.len() >= 3 {
            if let Some(prep) = compound.preposition_index() {
                let plural_head = pluralize(compound.tokens[prep - 1], cfg);
                return compound.rejoin(prep - 1, &plural_head);
            }
        }

        // Accusative pronoun after a leading preposition: "to it" →
        // "to them".
        if compound.tokens.len() == 2 && PREPOSITIONS.contains(compound.tokens[0]) {
            if let Some(plural) = PL_PRON_ACC.get(compound.tokens[1].to_lowercase().as_str()) {
                return compound.rejoin(1, plural);
            }
        }
    }

    // Pronouns.
    if let Some(plural) = PL_PRON_NOM.get(lower.as_str()) {
        return (*plural).to_string();
    }
    if let Some(plural) = PL_PRON_ACC.get(lower.as_str()) {
        return (*plural).to_string();
    }

    // Irregular lookup: whole phrase first, then the final token of a
    // compound ("field mouse" → "field mice").
    if let Some(plural) = irregular_plural(&lower, cfg) {
        return plural;
    }
    if compound.tokens.len() >= 2 {
        let last = compound.tokens[compound.tokens.len() - 1];
        if let Some(plural) = irregular_plural(&last.to_lowercase(), cfg) {
            return compound.rejoin(compound.tokens.len() - 1, &plural);
        }
    }

    suffix_plural(word, &lower, cfg)
}

fn is_uninflected(lower: &str, cfg: &Config) -> bool {
    if SB_UNINFLECTED.contains(lower) {
        return true;
    }
    if SB_UNINFLECTED_ENDINGS.iter().any(|e| lower.ends_with(e)) {
        return true;
    }
    cfg.classical.herd && SB_UNINFLECTED_HERD.contains(lower)
}

fn irregular_plural(lower: &str, cfg: &Config) -> Option<String> {
    // "person" is gated by its own classical flag rather than `ancient`.
    if lower == "person" {
        return Some(if cfg.classical.persons { "persons" } else { "people" }.to_string());
    }
    SB_IRREGULAR
        .get(lower)
        .map(|entry| cfg.classical.pick(entry).to_string())
}

/// The ordered suffix-rule families (step 7 of the cascade) plus the
/// default `+s` fallback.
fn suffix_plural(word: &str, lower: &str, cfg: &Config) -> String {
    let stem = |n: usize| &word[..word.len() - n];

    // -man → -men, except the "-mans" list.
    if lower.ends_with("man") && !SB_MAN_MANS.matches_suffix(lower) {
        return format!("{}men", stem(3));
    }

    // Unassimilated imports: -sis/-xis/-cis, -zoon, invariant -ceps.
    if let Some(result) = SB_MUTATION.apply(word) {
        return result;
    }

    // Latin/Greek families that apply regardless of mode.
    if SB_U_EX_ICES.contains(lower) {
        return format!("{}ices", stem(2));
    }
    if SB_U_UM_A.contains(lower) {
        return format!("{}a", stem(2));
    }
    if SB_U_US_I.contains(lower) {
        return format!("{}i", stem(2));
    }
    if SB_U_ON_A.contains(lower) {
        return format!("{}a", stem(2));
    }
    if SB_U_A_AE.contains(lower) {
        return format!("{}e", word);
    }

    // Classical-only families, gated by the `ancient` flag.
    if cfg.classical.ancient {
        if let Some(result) = SB_CLASSICAL_SUFFIX.apply(word) {
            return result;
        }
        if SB_C_EX_ICES.contains(lower) {
            return format!("{}ices", stem(2));
        }
        if SB_C_UM_A.contains(lower) {
            return format!("{}a", stem(2));
        }
        if SB_C_US_I.contains(lower) {
            return format!("{}i", stem(2));
        }
        if SB_C_A_AE.contains(lower) {
            return format!("{}e", word);
        }
        if SB_C_A_ATA.contains(lower) {
            return format!("{}ta", word);
        }
        if SB_C_O_I.contains(lower) {
            return format!("{}i", stem(1));
        }
    }

    // Sibilants: any word already ending in an s-like sound takes -es.
    if lower.ends_with("ch") || lower.ends_with("sh") {
        if SB_HARD_CH.matches_suffix(lower) {
            return format!("{}s", word);
        }
        return format!("{}es", word);
    }
    if lower.ends_with('s') || lower.ends_with('x') || lower.ends_with("zz") {
        return format!("{}es", word);
    }
    if lower.ends_with('z') && ends_with_vowel_then(lower, 'z') {
        // z-doubling: "quiz" → "quizzes".
        return format!("{}zes", word);
    }
    if lower.ends_with('z') {
        return format!("{}es", word);
    }

    // -f / -fe → -ves.
    if let Some(result) = SB_F_VES.apply(word) {
        return cfg.classical.pick(&result).to_string();
    }

    // -y → -ies, unless a vowel precedes or the `names` flag protects a
    // capitalized proper name.
    if lower.ends_with('y') {
        if ends_with_vowel_then(lower, 'y') {
            return format!("{}s", word);
        }
        if cfg.classical.names && word.chars().next().is_some_and(|c| c.is_uppercase()) {
            return format!("{}s", word);
        }
        return format!("{}ies", stem(1));
    }

    // -o → -os / -oes.
    if lower.ends_with('o') {
        if SB_U_O_OS.contains(lower) || ends_with_vowel_then(lower, 'o') {
            return format!("{}s", word);
        }
        return format!("{}es", word);
    }

    format!("{}s", word)
}

/// True if the character before the final `last` is a vowel.
fn ends_with_vowel_then(lower: &str, last: char) -> bool {
    let mut chars = lower.chars().rev();
    if chars.next() != Some(last) {
        return false;
    }
    matches!(chars.next(), Some('a' | 'e' | 'i' | 'o' | 'u'))
}

// ============================================================================
// Singular direction
// ============================================================================

/// Singularize a plural noun (or noun phrase).
///
/// Returns `None` when no singular form exists: the input is already
/// singular, or nothing in the tables or rules recognizes it as a
/// plural. Uninflected nouns come back as `Some(word)` unchanged.
pub fn singularize(word: &str, cfg: &Config, gender: Gender) -> Option<String> {
    if word.is_empty() {
        return None;
    }
    if let Some(replacement) = cfg.noun_si_overrides.lookup(word) {
        return Some(replacement);
    }
    let lower = word.to_lowercase();

    if is_uninflected(&lower, cfg) {
        return Some(word.to_string());
    }

    let compound = Compound::split(word);
    if compound.tokens.len() >= 2 {
        let last = compound.tokens[compound.tokens.len() - 1];
        let head = compound.tokens[compound.tokens.len() - 2];
        if SB_POSTFIX_ADJ.contains(last)
            && !(last.eq_ignore_ascii_case("general") && SB_MILITARY_GENERAL.contains(head))
        {
            let idx = compound.tokens.len() - 2;
            let singular_head = singularize(head, cfg, gender)?;
            return Some(compound.rejoin(idx, &singular_head));
        }
        if compound.tokens.len() >= 3 {
            if let Some(prep) = compound.preposition_index() {
                let singular_head = singularize(compound.tokens[prep - 1], cfg, gender)?;
                return Some(compound.rejoin(prep - 1, &singular_head));
            }
        }
        if compound.tokens.len() == 2 && PREPOSITIONS.contains(compound.tokens[0]) {
            if let Some(pron) = SI_PRON.get(compound.tokens[1].to_lowercase().as_str()) {
                return Some(compound.rejoin(1, &resolve_pronoun(*pron, gender)));
            }
        }
    }

    if let Some(pron) = SI_PRON.get(lower.as_str()) {
        return Some(resolve_pronoun(*pron, gender));
    }

    if let Some(&singular) = SI_IRREGULAR.get(lower.as_str()) {
        return Some(singular.to_string());
    }
    if compound.tokens.len() >= 2 {
        let last = compound.tokens[compound.tokens.len() - 1];
        if let Some(&singular) = SI_IRREGULAR.get(last.to_lowercase().as_str()) {
            return Some(compound.rejoin(compound.tokens.len() - 1, singular));
        }
    }

    suffix_singular(word, &lower)
}

fn resolve_pronoun(pron: SingularPronoun, gender: Gender) -> String {
    let (nom, acc, reflexive) = gender.pronouns();
    match pron {
        SingularPronoun::Fixed(form) => form.to_string(),
        SingularPronoun::GenderNom => nom.to_string(),
        SingularPronoun::GenderAcc => acc.to_string(),
        SingularPronoun::GenderReflexive => reflexive.to_string(),
    }
}

/// The inverted suffix families. Order mirrors the plural direction so a
/// word produced by rule N is always recovered by rule N's inverse.
fn suffix_singular(word: &str, lower: &str) -> Option<String> {
    let stem = |n: usize| &word[..word.len() - n];

    if lower.ends_with("men") && !SI_MEN_SINGULAR.contains(lower) && lower.len() > 3 {
        return Some(format!("{}man", stem(3)));
    }
    if lower.ends_with("zoa") {
        return Some(format!("{}oon", stem(2)));
    }
    if SI_SES_SIS.contains(lower) {
        return Some(format!("{}is", stem(2)));
    }
    if SI_OES_OE.contains(lower) {
        return Some(stem(1).to_string());
    }
    if SI_SES_S.contains(lower) {
        return Some(stem(2).to_string());
    }
    if lower.ends_with("ches") || lower.ends_with("shes") {
        return Some(stem(2).to_string());
    }
    if lower.ends_with("sses") || lower.ends_with("zzes") {
        return Some(stem(2).to_string());
    }
    if lower.ends_with("xes") {
        return Some(stem(2).to_string());
    }
    if lower.ends_with("oes") {
        return Some(stem(2).to_string());
    }
    if lower.ends_with("ves") && lower.len() > 3 {
        if ["nives", "lives", "wives"].iter().any(|e| lower.ends_with(e)) {
            return Some(format!("{}fe", stem(3)));
        }
        return Some(format!("{}f", stem(3)));
    }
    if lower.ends_with("ies") && lower.len() > 3 {
        if lower.len() <= 4 {
            // "pies", "ties", "lies" keep the -ie stem.
            return Some(stem(1).to_string());
        }
        return Some(format!("{}y", stem(3)));
    }
    if lower.ends_with("ses") && lower.len() > 3 {
        // "cases" → "case", "houses" → "house"; the bare-s stems
        // ("buses") were handled by SI_SES_S above.
        return Some(stem(1).to_string());
    }
    if lower.ends_with("ss") || lower.ends_with("is") {
        return None;
    }
    if lower.ends_with('s') && lower.len() > 1 {
        if SB_SINGULAR_S.contains(lower) {
            return None;
        }
        return Some(stem(1).to_string());
    }
    None
}
