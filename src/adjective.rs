//! Plural agreement for adjectives: demonstratives, possessive
//! pronouns, and possessive nouns ("cat's" → "cats'").

use crate::config::Config;
use crate::lexicon::pronouns::{PL_DEMONSTRATIVE, PL_POSSESSIVE};
use crate::noun;

/// Inflect only the adjective forms the tables cover. Returns `None`
/// when the word is not a recognizable adjective, so the generic
/// `plural()` transform can fall through to the noun cascade.
pub fn pluralize_special(word: &str, cfg: &Config) -> Option<String> {
    let lower = word.to_lowercase();

    if let Some(plural) = PL_DEMONSTRATIVE.get(lower.as_str()) {
        return Some((*plural).to_string());
    }
    if let Some(plural) = PL_POSSESSIVE.get(lower.as_str()) {
        return Some((*plural).to_string());
    }
    possessive_noun(word, cfg)
}

/// Strip a possessive marker: `"cats'"` → `"cats"`, `"kine's"` →
/// `"kine"`. `None` when the word carries no marker.
pub fn possessive_base(word: &str) -> Option<&str> {
    let base = if word.ends_with("'s") || word.ends_with("'S") {
        &word[..word.len() - 2]
    } else if word.ends_with('\'') {
        &word[..word.len() - 1]
    } else {
        return None;
    };
    (!base.is_empty()).then_some(base)
}

/// Pluralize an adjective. Unrecognized adjectives are uninflected in
/// English, so the fallback is the word unchanged.
pub fn pluralize(word: &str, cfg: &Config) -> String {
    if word.is_empty() {
        return String::new();
    }
    if let Some(replacement) = cfg.adj_overrides.lookup(word) {
        return replacement;
    }
    pluralize_special(word, cfg).unwrap_or_else(|| word.to_string())
}

/// "cat's" → "cats'", "child's" → "children's", "Mary's" → "Marys'".
/// The base noun is pluralized and the apostrophe re-attached: a bare
/// apostrophe when the plural ends in `s`, `'s` otherwise.
fn possessive_noun(word: &str, cfg: &Config) -> Option<String> {
    let base = possessive_base(word)?;
    let plural = noun::pluralize(base, cfg);
    if plural.ends_with('s') {
        Some(format!("{plural}'"))
    } else {
        Some(format!("{plural}'s"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn cfg() -> Config {
        Config::default()
    }

    #[test]
    fn test_demonstratives() {
        let cfg = cfg();
        assert_eq!(pluralize("this", &cfg), "these");
        assert_eq!(pluralize("that", &cfg), "those");
        assert_eq!(pluralize("a", &cfg), "some");
        assert_eq!(pluralize("an", &cfg), "some");
    }

    #[test]
    fn test_possessive_pronouns() {
        let cfg = cfg();
        assert_eq!(pluralize("my", &cfg), "our");
        assert_eq!(pluralize("your", &cfg), "your");
        assert_eq!(pluralize("her", &cfg), "their");
        assert_eq!(pluralize("its", &cfg), "their");
    }

    #[test]
    fn test_possessive_nouns() {
        let cfg = cfg();
        assert_eq!(pluralize("cat's", &cfg), "cats'");
        assert_eq!(pluralize("child's", &cfg), "children's");
        assert_eq!(pluralize("woman's", &cfg), "women's");
    }

    #[test]
    fn test_plain_adjective_unchanged() {
        let cfg = cfg();
        assert_eq!(pluralize("green", &cfg), "green");
        assert_eq!(pluralize("happy", &cfg), "happy");
    }
}
