//! Pronoun and possessive agreement tables.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// Singular → plural, nominative case.
pub static PL_PRON_NOM: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("i", "we"),
        ("you", "you"),
        ("she", "they"),
        ("he", "they"),
        ("it", "they"),
        ("they", "they"),
        ("myself", "ourselves"),
        ("yourself", "yourselves"),
        ("herself", "themselves"),
        ("himself", "themselves"),
        ("itself", "themselves"),
        ("themself", "themselves"),
    ]
    .into_iter()
    .collect()
});

/// Singular → plural, accusative case. Used on its own and after a
/// leading preposition ("to it" → "to them").
pub static PL_PRON_ACC: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("me", "us"),
        ("you", "you"),
        ("her", "them"),
        ("him", "them"),
        ("it", "them"),
        ("them", "them"),
        ("myself", "ourselves"),
        ("yourself", "yourselves"),
        ("herself", "themselves"),
        ("himself", "themselves"),
        ("itself", "themselves"),
        ("themself", "themselves"),
    ]
    .into_iter()
    .collect()
});

/// Which singular slot a plural pronoun collapses to. The gendered
/// third-person forms come from [`crate::config::Gender::pronouns`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingularPronoun {
    /// A fixed singular form.
    Fixed(&'static str),
    /// The configured gender's nominative form.
    GenderNom,
    /// The configured gender's accusative form.
    GenderAcc,
    /// The configured gender's reflexive form.
    GenderReflexive,
}

/// Plural → singular pronoun table (both cases).
pub static SI_PRON: Lazy<FxHashMap<&'static str, SingularPronoun>> = Lazy::new(|| {
    [
        ("we", SingularPronoun::Fixed("I")),
        ("us", SingularPronoun::Fixed("me")),
        ("you", SingularPronoun::Fixed("you")),
        ("ourselves", SingularPronoun::Fixed("myself")),
        ("yourselves", SingularPronoun::Fixed("yourself")),
        ("they", SingularPronoun::GenderNom),
        ("them", SingularPronoun::GenderAcc),
        ("themselves", SingularPronoun::GenderReflexive),
    ]
    .into_iter()
    .collect()
});

/// Possessive-pronoun agreement ("my book" → "our books").
pub static PL_POSSESSIVE: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("my", "our"),
        ("your", "your"),
        ("her", "their"),
        ("his", "their"),
        ("its", "their"),
        ("their", "their"),
        ("mine", "ours"),
        ("yours", "yours"),
        ("hers", "theirs"),
        ("theirs", "theirs"),
    ]
    .into_iter()
    .collect()
});

/// Demonstrative and article agreement for the adjective transform.
pub static PL_DEMONSTRATIVE: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    [("a", "some"), ("an", "some"), ("this", "these"), ("that", "those")]
        .into_iter()
        .collect()
});
