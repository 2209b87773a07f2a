//! Suffix-bucketed rule sets.
//!
//! A [`SuffixRules`] set groups its entries by the exact character length
//! of the matched suffix, so lookup is length-indexed rather than a linear
//! scan: a word is probed against the longest bucket first and falls
//! through to shorter ones, which makes the tie-break order explicit (a
//! word matching both a 4-letter and a 2-letter suffix always takes the
//! 4-letter rule).

use rustc_hash::{FxHashMap, FxHashSet};

/// What to do with a word whose suffix matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixAction {
    /// Replace the matched suffix with the given text.
    Replace(&'static str),
    /// Return the word unchanged (uninflected family).
    Keep,
}

/// An ordered set of suffix rules, bucketed by suffix length.
///
/// Within a bucket membership is a set test; across buckets the longest
/// suffix wins. Matching is ASCII case-insensitive; the replacement is
/// spliced onto the original (case-preserved) stem.
#[derive(Debug, Clone)]
pub struct SuffixRules {
    // buckets[len] maps a lowercase suffix of that length to its action.
    buckets: Vec<FxHashMap<&'static str, SuffixAction>>,
}

impl SuffixRules {
    /// Build a rule set from `(suffix, action)` entries.
    pub fn build(entries: &[(&'static str, SuffixAction)]) -> Self {
        let max_len = entries.iter().map(|(s, _)| s.len()).max().unwrap_or(0);
        let mut buckets = vec![FxHashMap::default(); max_len + 1];
        for &(suffix, action) in entries {
            debug_assert!(!suffix.is_empty(), "empty suffix rule");
            buckets[suffix.len()].insert(suffix, action);
        }
        SuffixRules { buckets }
    }

    /// Apply the first matching rule, longest suffix first.
    ///
    /// Returns `None` when no bucket matches. The stem keeps the original
    /// word's casing; only the matched tail is replaced.
    pub fn apply(&self, word: &str) -> Option<String> {
        let lower = word.to_lowercase();
        for len in (1..self.buckets.len()).rev() {
            if lower.len() < len {
                continue;
            }
            let Some(split) = lower.len().checked_sub(len) else {
                continue;
            };
            if !lower.is_char_boundary(split) {
                continue;
            }
            let suffix = &lower[split..];
            let Some(action) = self.buckets[len].get(suffix) else {
                continue;
            };
            // The lowercase split index is only reusable on the original
            // string when lowercasing did not change byte lengths.
            let stem = if word.len() == lower.len() && word.is_char_boundary(split) {
                &word[..split]
            } else {
                &lower[..split]
            };
            return Some(match action {
                SuffixAction::Replace(repl) => format!("{stem}{repl}"),
                SuffixAction::Keep => word.to_string(),
            });
        }
        None
    }

    /// True if any bucket matches the word's suffix.
    pub fn matches(&self, word: &str) -> bool {
        self.apply(word).is_some()
    }
}

/// A case-insensitive membership set over static entries.
///
/// Used for exception lists and uninflected-word sets where the test is
/// exact-word membership rather than a suffix probe.
#[derive(Debug, Clone)]
pub struct WordSet {
    words: FxHashSet<&'static str>,
}

impl WordSet {
    /// Build a set from lowercase entries.
    pub fn build(entries: &[&'static str]) -> Self {
        WordSet {
            words: entries.iter().copied().collect(),
        }
    }

    /// Membership test, case-insensitive.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase().as_str())
    }

    /// True if the word *ends with* any entry (used for families like
    /// "-fish" or "-man exceptions" that must also catch compounds such
    /// as "swordfish" or "superhuman").
    pub fn matches_suffix(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.words
            .iter()
            .any(|entry| lower.ends_with(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_suffix_wins() {
        let rules = SuffixRules::build(&[
            ("s", SuffixAction::Replace("ses")),
            ("us", SuffixAction::Replace("i")),
            ("mouse", SuffixAction::Replace("mice")),
        ]);
        assert_eq!(rules.apply("dormouse").unwrap(), "dormice");
        assert_eq!(rules.apply("cactus").unwrap(), "cacti");
        assert_eq!(rules.apply("gas").unwrap(), "gases");
    }

    #[test]
    fn test_case_preserving_stem() {
        let rules = SuffixRules::build(&[("mouse", SuffixAction::Replace("mice"))]);
        assert_eq!(rules.apply("Fieldmouse").unwrap(), "Fieldmice");
    }

    #[test]
    fn test_keep_action() {
        let rules = SuffixRules::build(&[("ceps", SuffixAction::Keep)]);
        assert_eq!(rules.apply("biceps").unwrap(), "biceps");
        assert!(rules.apply("cat").is_none());
    }

    #[test]
    fn test_word_set() {
        let set = WordSet::build(&["human", "talisman"]);
        assert!(set.contains("Human"));
        assert!(set.matches_suffix("superhuman"));
        assert!(!set.matches_suffix("woman"));
    }
}
