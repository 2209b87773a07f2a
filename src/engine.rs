//! The public engine: one handle owning one mutable [`Config`], with
//! every transform exposed as a method.
//!
//! Transforms that take a count resolve it against the remembered count
//! (set by [`Engine::num`]) when the caller passes none. Case and
//! surrounding whitespace of the input are preserved on output.

use std::fmt;

use crate::config::{ClassicalFlag, Config, Count, Gender, NumOptions, UserPattern};
use crate::error::{InflectError, Result};
use crate::{adjective, article, noun, numwords, template, verb, word};

// ============================================================================
// Comparison
// ============================================================================

/// Grammatical-number relation between two words, as reported by the
/// `compare*` methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// The words are identical.
    Equal,
    /// The first is the singular of the second.
    SingularPlural,
    /// The first is the plural of the second.
    PluralSingular,
    /// Both are plurals of the same singular (modern vs classical).
    BothPlural,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Comparison::Equal => "eq",
            Comparison::SingularPlural => "s:p",
            Comparison::PluralSingular => "p:s",
            Comparison::BothPlural => "p:p",
        };
        f.write_str(s)
    }
}

// ============================================================================
// Engine
// ============================================================================

/// An inflection engine. Cheap to construct; owns all mutable state, so
/// two engines never interfere.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: Config,
}

impl Engine {
    /// Create an engine with default configuration: modern rules, the
    /// `names` classical flag on, no remembered count, neuter gender.
    pub fn new() -> Self {
        Engine::default()
    }

    /// Read access to the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn effective_count(&self, count: Option<Count>) -> Option<Count> {
        count.or_else(|| self.config.persistent_count.clone())
    }

    fn count_is_singular(&self, count: Option<Count>) -> bool {
        match self.effective_count(count) {
            Some(c) => c.is_singular(&self.config.classical),
            None => false,
        }
    }

    // ------------------------------------------------------------------------
    // Plural transforms
    // ------------------------------------------------------------------------

    /// Pluralize anything: adjectives and verbs get their closed-form
    /// handling, everything else goes through the noun cascade. A
    /// leading indefinite article is dropped: `plural("a cat")` is
    /// `"cats"`.
    pub fn plural(&self, text: &str) -> String {
        self.plural_impl(text, None)
    }

    /// [`Engine::plural`] with an explicit count; a singular count
    /// returns the text unchanged.
    pub fn plural_with(&self, text: &str, count: impl Into<Count>) -> String {
        self.plural_impl(text, Some(count.into()))
    }

    fn plural_impl(&self, text: &str, count: Option<Count>) -> String {
        if self.count_is_singular(count) {
            return text.to_string();
        }
        word::preserve(text, |core| {
            let lower = core.to_lowercase();
            if let Some(rest) = strip_article(core, &lower) {
                return noun::pluralize(rest, &self.config);
            }
            adjective::pluralize_special(core, &self.config)
                .or_else(|| verb::pluralize_special(core, &self.config))
                .unwrap_or_else(|| noun::pluralize(core, &self.config))
        })
    }

    /// Pluralize a noun (or noun phrase).
    pub fn plural_noun(&self, text: &str) -> String {
        self.plural_noun_impl(text, None)
    }

    /// [`Engine::plural_noun`] with an explicit count.
    pub fn plural_noun_with(&self, text: &str, count: impl Into<Count>) -> String {
        self.plural_noun_impl(text, Some(count.into()))
    }

    fn plural_noun_impl(&self, text: &str, count: Option<Count>) -> String {
        if self.count_is_singular(count) {
            return text.to_string();
        }
        word::preserve(text, |core| noun::pluralize(core, &self.config))
    }

    /// Give a verb plural agreement: `"is"` → `"are"`, `"runs"` → `"run"`.
    pub fn plural_verb(&self, text: &str) -> String {
        self.plural_verb_impl(text, None)
    }

    /// [`Engine::plural_verb`] with an explicit count.
    pub fn plural_verb_with(&self, text: &str, count: impl Into<Count>) -> String {
        self.plural_verb_impl(text, Some(count.into()))
    }

    fn plural_verb_impl(&self, text: &str, count: Option<Count>) -> String {
        if self.count_is_singular(count) {
            return text.to_string();
        }
        word::preserve(text, |core| verb::pluralize(core, &self.config))
    }

    /// Give an adjective plural agreement: `"this"` → `"these"`,
    /// `"cat's"` → `"cats'"`.
    pub fn plural_adj(&self, text: &str) -> String {
        self.plural_adj_impl(text, None)
    }

    /// [`Engine::plural_adj`] with an explicit count.
    pub fn plural_adj_with(&self, text: &str, count: impl Into<Count>) -> String {
        self.plural_adj_impl(text, Some(count.into()))
    }

    fn plural_adj_impl(&self, text: &str, count: Option<Count>) -> String {
        if self.count_is_singular(count) {
            return text.to_string();
        }
        word::preserve(text, |core| adjective::pluralize(core, &self.config))
    }

    // ------------------------------------------------------------------------
    // Singular
    // ------------------------------------------------------------------------

    /// Singularize a noun. `None` means the word was not recognized as a
    /// plural.
    pub fn singular_noun(&self, text: &str) -> Option<String> {
        self.singular_noun_impl(text, None, None)
    }

    /// [`Engine::singular_noun`] with an explicit count; a non-singular
    /// count returns the text unchanged.
    pub fn singular_noun_with(
        &self,
        text: &str,
        count: impl Into<Count>,
    ) -> Option<String> {
        self.singular_noun_impl(text, Some(count.into()), None)
    }

    /// [`Engine::singular_noun`] with an explicit pronoun gender,
    /// overriding the configured one for this call.
    pub fn singular_noun_gender(&self, text: &str, gender: Gender) -> Option<String> {
        self.singular_noun_impl(text, None, Some(gender))
    }

    fn singular_noun_impl(
        &self,
        text: &str,
        count: Option<Count>,
        gender: Option<Gender>,
    ) -> Option<String> {
        if let Some(c) = self.effective_count(count) {
            if !c.is_singular(&self.config.classical) {
                return Some(text.to_string());
            }
        }
        let gender = gender.unwrap_or(self.config.gender);
        let parts = word::partition(text);
        if parts.core.is_empty() {
            return None;
        }
        let class = word::case_of(parts.core);
        let singular = noun::singularize(parts.core, &self.config, gender)?;
        let cased = match class {
            word::CaseClass::Plain => singular,
            _ => word::apply_case(class, &singular),
        };
        Some(format!("{}{}{}", parts.leading, cased, parts.trailing))
    }

    // ------------------------------------------------------------------------
    // Articles and counted phrases
    // ------------------------------------------------------------------------

    /// Prepend the correct indefinite article: `"apple"` → `"an apple"`.
    pub fn a(&self, text: &str) -> String {
        self.a_impl(text, None)
    }

    /// Alias for [`Engine::a`].
    pub fn an(&self, text: &str) -> String {
        self.a_impl(text, None)
    }

    /// [`Engine::a`] with an explicit count; a non-singular count yields
    /// `"<count> <text>"` with the text unchanged.
    pub fn a_with(&self, text: &str, count: impl Into<Count>) -> String {
        self.a_impl(text, Some(count.into()))
    }

    fn a_impl(&self, text: &str, count: Option<Count>) -> String {
        let parts = word::partition(text);
        if parts.core.is_empty() {
            return text.to_string();
        }
        if let Some(c) = self.effective_count(count) {
            if !c.is_singular(&self.config.classical) {
                return format!(
                    "{}{} {}{}",
                    parts.leading,
                    c.as_text(),
                    parts.core,
                    parts.trailing
                );
            }
        }
        format!(
            "{}{}{}",
            parts.leading,
            article::prepend(parts.core, &self.config),
            parts.trailing
        )
    }

    /// Render a counted phrase, using "no" for zero: `no("cat")` is
    /// `"no cats"` (or `"no cat"` under the `zero` classical flag).
    pub fn no(&self, text: &str) -> String {
        self.no_impl(text, None)
    }

    /// [`Engine::no`] with an explicit count.
    pub fn no_with(&self, text: &str, count: impl Into<Count>) -> String {
        self.no_impl(text, Some(count.into()))
    }

    fn no_impl(&self, text: &str, count: Option<Count>) -> String {
        let count = self
            .effective_count(count)
            .unwrap_or(Count::Value(0));
        let parts = word::partition(text);
        if count.is_zero() {
            let phrase = if self.config.classical.zero {
                parts.core.to_string()
            } else {
                noun::pluralize(parts.core, &self.config)
            };
            return format!("{}no {}{}", parts.leading, phrase, parts.trailing);
        }
        if count.is_singular(&self.config.classical) {
            return format!(
                "{}{} {}{}",
                parts.leading,
                count.as_text(),
                parts.core,
                parts.trailing
            );
        }
        format!(
            "{}{} {}{}",
            parts.leading,
            count.as_text(),
            noun::pluralize(parts.core, &self.config),
            parts.trailing
        )
    }

    // ------------------------------------------------------------------------
    // Numbers and participles
    // ------------------------------------------------------------------------

    /// Ordinal form: `"1"` → `"1st"`, `"one"` → `"first"`.
    pub fn ordinal(&self, value: &str) -> String {
        numwords::ordinal(value)
    }

    /// Number-to-words with default options.
    pub fn number_to_words(&self, value: &str) -> Result<String> {
        numwords::number_to_words(value, &NumOptions::default())
    }

    /// Number-to-words with explicit options.
    pub fn number_to_words_with(&self, value: &str, opts: &NumOptions) -> Result<String> {
        numwords::number_to_words(value, opts)
    }

    /// Present participle: `"run"` → `"running"`, `"is"` → `"being"`.
    pub fn present_participle(&self, text: &str) -> String {
        word::preserve(text, |core| verb::present_participle(core, &self.config))
    }

    // ------------------------------------------------------------------------
    // Comparison
    // ------------------------------------------------------------------------

    /// Compare two words for grammatical number, trying adjective, verb
    /// and noun pluralization. `None` means no relation was found.
    pub fn compare(&self, a: &str, b: &str) -> Option<Comparison> {
        self.compare_by(a, b, |cfg, w| {
            adjective::pluralize_special(w, cfg)
                .or_else(|| verb::pluralize_special(w, cfg))
                .unwrap_or_else(|| noun::pluralize(w, cfg))
        })
        .or_else(|| self.compare_both_plural(a, b))
    }

    /// Noun-only comparison.
    pub fn compare_nouns(&self, a: &str, b: &str) -> Option<Comparison> {
        self.compare_by(a, b, |cfg, w| noun::pluralize(w, cfg))
            .or_else(|| self.compare_both_plural(a, b))
    }

    /// Verb-only comparison.
    pub fn compare_verbs(&self, a: &str, b: &str) -> Option<Comparison> {
        self.compare_by(a, b, |cfg, w| verb::pluralize(w, cfg))
    }

    /// Adjective-only comparison.
    pub fn compare_adjs(&self, a: &str, b: &str) -> Option<Comparison> {
        self.compare_by(a, b, |cfg, w| adjective::pluralize(w, cfg))
            .or_else(|| self.compare_possessive_plural(a, b))
    }

    /// Run the comparison under both the modern and classical `ancient`
    /// settings, so "index"/"indices" relates no matter the active mode.
    fn compare_by<F>(&self, a: &str, b: &str, pluralize: F) -> Option<Comparison>
    where
        F: Fn(&Config, &str) -> String,
    {
        let a = a.trim().to_lowercase();
        let b = b.trim().to_lowercase();
        if a == b {
            return Some(Comparison::Equal);
        }
        for ancient in [false, true] {
            let mut cfg = self.config.clone();
            cfg.classical.ancient = ancient;
            if pluralize(&cfg, &a) == b {
                return Some(Comparison::SingularPlural);
            }
            if pluralize(&cfg, &b) == a {
                return Some(Comparison::PluralSingular);
            }
        }
        None
    }

    /// "cows'" vs "kine's": possessives whose base nouns are rival
    /// plurals of the same singular.
    fn compare_possessive_plural(&self, a: &str, b: &str) -> Option<Comparison> {
        let a = adjective::possessive_base(a.trim())?;
        let b = adjective::possessive_base(b.trim())?;
        self.compare_both_plural(a, b)
    }

    /// "indexes" vs "indices": both singularize to the same noun.
    fn compare_both_plural(&self, a: &str, b: &str) -> Option<Comparison> {
        let a = a.trim().to_lowercase();
        let b = b.trim().to_lowercase();
        let sa = noun::singularize(&a, &self.config, self.config.gender)?;
        let sb = noun::singularize(&b, &self.config, self.config.gender)?;
        if sa == sb {
            Some(Comparison::BothPlural)
        } else {
            None
        }
    }

    // ------------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------------

    /// Set one classical flag.
    pub fn classical_set(&mut self, flag: ClassicalFlag, on: bool) {
        self.config.classical.set(flag, on);
    }

    /// Set a classical flag by its name ("zero", "herd", "names",
    /// "persons", "ancient", "all").
    pub fn classical_by_name(&mut self, name: &str, on: bool) -> Result<()> {
        let flag: ClassicalFlag = name.parse()?;
        self.config.classical.set(flag, on);
        Ok(())
    }

    /// Turn every classical flag on or off.
    pub fn classical_all(&mut self, on: bool) {
        self.config.classical.set(ClassicalFlag::All, on);
    }

    /// Restore the default classical flags (`names` on, the rest off).
    pub fn classical_default(&mut self) {
        self.config.classical = Default::default();
    }

    /// Set or clear the remembered count. With `Some`, the text must be
    /// an integer; the return value echoes it when `show` is true.
    pub fn num(&mut self, count: Option<&str>, show: bool) -> Result<String> {
        match count {
            None => {
                self.config.persistent_count = None;
                Ok(String::new())
            }
            Some(text) => {
                let trimmed = text.trim();
                let value: i64 = trimmed
                    .parse()
                    .map_err(|_| InflectError::BadNumValue(text.to_string()))?;
                self.config.persistent_count = Some(Count::Value(value));
                Ok(if show {
                    trimmed.to_string()
                } else {
                    String::new()
                })
            }
        }
    }

    /// Set the pronoun gender used when singularizing "they"/"them".
    pub fn set_gender(&mut self, gender: Gender) {
        self.config.gender = gender;
    }

    /// [`Engine::set_gender`] by name; unknown names error.
    pub fn gender_by_name(&mut self, name: &str) -> Result<()> {
        self.config.gender = name.parse()?;
        Ok(())
    }

    // ------------------------------------------------------------------------
    // User-defined overrides
    // ------------------------------------------------------------------------

    /// Register a user-defined noun plural. The pattern is a regex
    /// matched against the whole word; `None` as the replacement means
    /// "never inflect words matching this". The reverse mapping is
    /// registered for [`Engine::singular_noun`] as well.
    pub fn defnoun(&mut self, pattern: &str, replacement: Option<&str>) -> Result<()> {
        let forward = UserPattern::compile(pattern, replacement)?;
        self.config.noun_overrides.push(forward);
        if let Some(plural) = replacement {
            let reverse = UserPattern::compile(plural, Some(pattern))?;
            self.config.noun_si_overrides.push(reverse);
        }
        Ok(())
    }

    /// Register a user-defined verb plural.
    pub fn defverb(&mut self, pattern: &str, replacement: Option<&str>) -> Result<()> {
        let entry = UserPattern::compile(pattern, replacement)?;
        self.config.verb_overrides.push(entry);
        Ok(())
    }

    /// Register a user-defined adjective plural.
    pub fn defadj(&mut self, pattern: &str, replacement: Option<&str>) -> Result<()> {
        let entry = UserPattern::compile(pattern, replacement)?;
        self.config.adj_overrides.push(entry);
        Ok(())
    }

    /// Force "a" for words matching the pattern.
    pub fn defa(&mut self, pattern: &str) -> Result<()> {
        let entry = UserPattern::compile(pattern, None)?;
        self.config.article_overrides.push((entry, "a"));
        Ok(())
    }

    /// Force "an" for words matching the pattern.
    pub fn defan(&mut self, pattern: &str) -> Result<()> {
        let entry = UserPattern::compile(pattern, None)?;
        self.config.article_overrides.push((entry, "an"));
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Template preprocessing
    // ------------------------------------------------------------------------

    /// Process embedded inflection directives in free text:
    /// `inflect("num(2) plural(cat)")` is `"2 cats"`. Mutable because a
    /// `num()` directive updates the remembered count.
    pub fn inflect(&mut self, text: &str) -> Result<String> {
        template::process(self, text)
    }
}

fn strip_article<'a>(core: &'a str, lower: &str) -> Option<&'a str> {
    for article in ["a ", "an "] {
        if lower.starts_with(article) {
            let rest = core[article.len()..].trim_start();
            if !rest.is_empty() {
                return Some(rest);
            }
        }
    }
    None
}
