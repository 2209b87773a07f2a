//! Immutable lexical tables.
//!
//! Everything in this module is process-wide static data, built once on
//! first use and never mutated afterwards, so it is safe to share by
//! reference across all engine instances and threads.
//!
//! # Organization
//!
//! - [`nouns`] - irregular singular↔plural maps, uninflected sets, and
//!   the suffix-bucketed noun rule families
//! - [`pronouns`] - pronoun and possessive agreement tables
//! - [`verbs`] - irregular and ambiguous present-tense verb tables
//! - [`articles`] - a/an exception lists
//! - [`numbers`] - number-word vocabularies and the ordinal suffix map
//!
//! Dual-form entries ("octopuses|octopodes") carry the modern form first;
//! the classical `ancient` flag selects the second. The tables reproduce
//! the traditional rule set faithfully, disputed or dialectal forms
//! included; they are not re-derived for linguistic correctness.

pub mod articles;
pub mod nouns;
pub mod numbers;
pub mod pronouns;
pub mod verbs;
