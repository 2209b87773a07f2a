//! Verb agreement tables.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::rules::WordSet;

/// Irregular present-tense forms: third-person singular (or first-person
/// for "am") → plural.
pub static PLVERB_IRREGULAR_PRES: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("am", "are"),
        ("is", "are"),
        ("are", "are"),
        ("was", "were"),
        ("were", "were"),
        ("has", "have"),
        ("have", "have"),
        ("does", "do"),
        ("do", "do"),
    ]
    .into_iter()
    .collect()
});

/// Ambiguous-tense tokens: words that read as either a noun or a verb.
/// Both the bare and the `-s` form map to the plural verb, so the caller
/// does not have to guess which one it holds.
pub static PLVERB_AMBIGUOUS_PRES: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("act", "act"),
        ("acts", "act"),
        ("blame", "blame"),
        ("blames", "blame"),
        ("catch", "catch"),
        ("catches", "catch"),
        ("drive", "drive"),
        ("drives", "drive"),
        ("fish", "fish"),
        ("fishes", "fish"),
        ("saw", "saw"),
        ("saws", "saw"),
        ("smell", "smell"),
        ("smells", "smell"),
        ("thrust", "thrust"),
        ("thrusts", "thrust"),
    ]
    .into_iter()
    .collect()
});

/// Irregular past- and future-tense tokens: English past tense does not
/// inflect for number, so these pass through unchanged.
pub static PLVERB_IRREGULAR_NON_PRES: Lazy<WordSet> = Lazy::new(|| {
    WordSet::build(&[
        "did", "had", "ate", "made", "put", "spent", "fought", "sank", "gave",
        "sought", "shall", "could", "ought", "should", "will", "would", "may",
        "might", "must", "can", "cannot",
    ])
});

/// Negated irregular contractions.
pub static PLVERB_IRREGULAR_NEGATED: Lazy<FxHashMap<&'static str, &'static str>> =
    Lazy::new(|| {
        [
            ("isn't", "aren't"),
            ("aren't", "aren't"),
            ("wasn't", "weren't"),
            ("weren't", "weren't"),
            ("doesn't", "don't"),
            ("don't", "don't"),
            ("hasn't", "haven't"),
            ("haven't", "haven't"),
        ]
        .into_iter()
        .collect()
    });
