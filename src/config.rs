//! Caller-owned configuration state.
//!
//! One [`Config`] belongs to one engine handle and is passed by reference
//! into every transform, never read from ambient global state. Two
//! independently configured engines therefore never interfere. The
//! lexical tables themselves live in [`crate::lexicon`] and are immutable.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::error::{InflectError, Result};

// ============================================================================
// Classical-mode flags
// ============================================================================

/// One of the independently toggleable classical-rule categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassicalFlag {
    /// Shortcut for every category at once.
    All,
    /// Zero counts select the singular form ("no error" vs "no errors").
    Zero,
    /// Herd animals pluralize invariantly ("two buffalo").
    Herd,
    /// Proper names in `-y` pluralize with plain `s` ("the two Marys").
    Names,
    /// "persons" instead of "people".
    Persons,
    /// Latin- and Greek-derived plurals ("indices", "formulae").
    Ancient,
}

impl FromStr for ClassicalFlag {
    type Err = InflectError;

    fn from_str(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "all" | "classical" => Ok(ClassicalFlag::All),
            "zero" => Ok(ClassicalFlag::Zero),
            "herd" => Ok(ClassicalFlag::Herd),
            "names" => Ok(ClassicalFlag::Names),
            "persons" => Ok(ClassicalFlag::Persons),
            "ancient" => Ok(ClassicalFlag::Ancient),
            _ => Err(InflectError::UnknownClassicalFlag(name.to_string())),
        }
    }
}

/// The full set of classical-mode toggles.
///
/// Defaults match the engine's traditional behavior: `names` on, every
/// other category off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassicalFlags {
    /// Zero counts select the singular form.
    pub zero: bool,
    /// Herd animals pluralize invariantly.
    pub herd: bool,
    /// Proper names in `-y` take plain `s`.
    pub names: bool,
    /// "persons" instead of "people".
    pub persons: bool,
    /// Latin/Greek-derived plural families.
    pub ancient: bool,
}

impl Default for ClassicalFlags {
    fn default() -> Self {
        ClassicalFlags {
            zero: false,
            herd: false,
            names: true,
            persons: false,
            ancient: false,
        }
    }
}

impl ClassicalFlags {
    /// Set one flag; `All` toggles every category together.
    pub fn set(&mut self, flag: ClassicalFlag, on: bool) {
        match flag {
            ClassicalFlag::All => {
                self.zero = on;
                self.herd = on;
                self.names = on;
                self.persons = on;
                self.ancient = on;
            }
            ClassicalFlag::Zero => self.zero = on,
            ClassicalFlag::Herd => self.herd = on,
            ClassicalFlag::Names => self.names = on,
            ClassicalFlag::Persons => self.persons = on,
            ClassicalFlag::Ancient => self.ancient = on,
        }
    }

    /// Select between a dual-form table entry's variants.
    ///
    /// Table entries may encode two plural variants separated by `|`, the
    /// modern form first. The `ancient` flag selects the second.
    pub fn pick<'a>(&self, entry: &'a str) -> &'a str {
        match entry.split_once('|') {
            Some((modern, classical)) => {
                if self.ancient {
                    classical
                } else {
                    modern
                }
            }
            None => entry,
        }
    }
}

// ============================================================================
// Gender
// ============================================================================

/// Singular third-person pronoun preference, used only when singularizing
/// plural pronouns ("they" → "it" / "she" / "he" / ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Gender {
    /// "it"
    #[default]
    Neuter,
    /// "she"
    Feminine,
    /// "he"
    Masculine,
    /// singular "they"
    GenderNeutral,
    /// "she or he"
    FeminineOrMasculine,
    /// "he or she"
    MasculineOrFeminine,
}

impl Gender {
    /// Nominative, accusative, and reflexive singular forms.
    pub fn pronouns(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Gender::Neuter => ("it", "it", "itself"),
            Gender::Feminine => ("she", "her", "herself"),
            Gender::Masculine => ("he", "him", "himself"),
            Gender::GenderNeutral => ("they", "them", "themself"),
            Gender::FeminineOrMasculine => ("she or he", "her or him", "herself or himself"),
            Gender::MasculineOrFeminine => ("he or she", "him or her", "himself or herself"),
        }
    }
}

impl FromStr for Gender {
    type Err = InflectError;

    fn from_str(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "neuter" => Ok(Gender::Neuter),
            "feminine" => Ok(Gender::Feminine),
            "masculine" => Ok(Gender::Masculine),
            "gender-neutral" | "gender neutral" => Ok(Gender::GenderNeutral),
            "feminine or masculine" => Ok(Gender::FeminineOrMasculine),
            "masculine or feminine" => Ok(Gender::MasculineOrFeminine),
            _ => Err(InflectError::BadGender(name.to_string())),
        }
    }
}

// ============================================================================
// Counts
// ============================================================================

/// An optional count accompanying a transform call.
///
/// Counts may be numeric or one of the singular-indicating tokens ("a",
/// "one", "each", ...). String forms are kept verbatim so `no()` and
/// `a()` can echo them back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Count {
    /// A numeric count.
    Value(i64),
    /// A textual count token.
    Token(String),
}

impl Count {
    /// The tokens whose presence forces the singular form.
    const SINGULAR_TOKENS: &'static [&'static str] =
        &["1", "a", "an", "one", "each", "every", "this", "that"];

    /// The tokens treated as zero when the `zero` classical flag is on.
    const ZERO_TOKENS: &'static [&'static str] = &["0", "no", "zero", "nothing"];

    /// Resolve this count to singular or plural under the given flags.
    ///
    /// Singular tokens win outright; zero tokens select the singular only
    /// when the `zero` classical flag is active; everything else is
    /// plural.
    pub fn is_singular(&self, flags: &ClassicalFlags) -> bool {
        let text = self.as_text();
        let token = text.trim().to_lowercase();
        if Self::SINGULAR_TOKENS.contains(&token.as_str()) {
            return true;
        }
        flags.zero && Self::ZERO_TOKENS.contains(&token.as_str())
    }

    /// True if the count is literally zero (regardless of flags).
    pub fn is_zero(&self) -> bool {
        let text = self.as_text();
        let token = text.trim().to_lowercase();
        Self::ZERO_TOKENS.contains(&token.as_str())
    }

    /// The count's string form.
    pub fn as_text(&self) -> String {
        match self {
            Count::Value(n) => n.to_string(),
            Count::Token(t) => t.clone(),
        }
    }
}

impl From<i64> for Count {
    fn from(n: i64) -> Self {
        Count::Value(n)
    }
}

impl From<i32> for Count {
    fn from(n: i32) -> Self {
        Count::Value(n.into())
    }
}

impl From<&str> for Count {
    fn from(t: &str) -> Self {
        Count::Token(t.to_string())
    }
}

impl From<String> for Count {
    fn from(t: String) -> Self {
        Count::Token(t)
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::Value(n) => write!(f, "{n}"),
            Count::Token(t) => write!(f, "{t}"),
        }
    }
}

// ============================================================================
// User-defined overrides
// ============================================================================

/// A caller-registered override: a compiled match pattern plus an optional
/// replacement. A `None` replacement signals "no override, fall through".
#[derive(Debug, Clone)]
pub struct UserPattern {
    pattern: Regex,
    replacement: Option<String>,
}

impl UserPattern {
    /// Compile a pattern, anchoring it to match the whole word.
    ///
    /// Invalid patterns error immediately; nothing is registered.
    pub fn compile(pattern: &str, replacement: Option<&str>) -> Result<Self> {
        let anchored = format!("^(?:{pattern})$");
        let compiled =
            Regex::new(&anchored).map_err(|e| InflectError::BadUserDefinedPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;
        Ok(UserPattern {
            pattern: compiled,
            replacement: replacement.map(str::to_string),
        })
    }

    /// If the word matches, return the override outcome: `Some(Some(r))`
    /// replaces, `Some(None)` means "explicitly no override".
    pub fn check(&self, word: &str) -> Option<Option<&str>> {
        if self.pattern.is_match(word) {
            Some(self.replacement.as_deref())
        } else {
            None
        }
    }
}

/// An ordered override list for one grammatical category.
///
/// Later registrations win: lookup walks from the most recently added
/// entry backwards.
#[derive(Debug, Clone, Default)]
pub struct OverrideList {
    entries: Vec<UserPattern>,
}

impl OverrideList {
    /// Register a pattern/replacement pair.
    pub fn push(&mut self, pattern: UserPattern) {
        self.entries.push(pattern);
    }

    /// Look the word up, newest entry first. `Some(r)` is a replacement;
    /// `None` means fall through to the built-in rules (either no entry
    /// matched, or the matching entry had a null replacement).
    pub fn lookup(&self, word: &str) -> Option<String> {
        for entry in self.entries.iter().rev() {
            match entry.check(word) {
                Some(Some(replacement)) => return Some(replacement.to_string()),
                Some(None) => return None,
                None => continue,
            }
        }
        None
    }
}

// ============================================================================
// Number-to-words options
// ============================================================================

/// Vocabulary and formatting options for number-to-words rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct NumOptions {
    /// Digit-grouping size: 0 disables grouping, 1..=3 reads the number
    /// in digit chunks of that size.
    pub group: usize,
    /// Separator between rendered groups.
    pub comma: String,
    /// The word joining hundreds to the rest of a group; empty omits it.
    pub andword: String,
    /// The word for the digit 0.
    pub zero: String,
    /// The word for the digit 1.
    pub one: String,
    /// The word for the decimal point.
    pub decimal: String,
    /// Above this magnitude, render digits with comma grouping instead of
    /// words.
    pub threshold: Option<i64>,
}

impl Default for NumOptions {
    fn default() -> Self {
        NumOptions {
            group: 0,
            comma: ",".to_string(),
            andword: "and".to_string(),
            zero: "zero".to_string(),
            one: "one".to_string(),
            decimal: "point".to_string(),
            threshold: None,
        }
    }
}

impl NumOptions {
    /// Set the grouping size (validated by the transform, not here).
    pub fn group(mut self, group: usize) -> Self {
        self.group = group;
        self
    }

    /// Set the hundreds-joining word; an empty string omits it.
    pub fn andword(mut self, word: &str) -> Self {
        self.andword = word.to_string();
        self
    }

    /// Set the word for zero.
    pub fn zero(mut self, word: &str) -> Self {
        self.zero = word.to_string();
        self
    }

    /// Set the word for one.
    pub fn one(mut self, word: &str) -> Self {
        self.one = word.to_string();
        self
    }

    /// Set the decimal-point word.
    pub fn decimal(mut self, word: &str) -> Self {
        self.decimal = word.to_string();
        self
    }

    /// Set the digit-rendering threshold.
    pub fn threshold(mut self, threshold: i64) -> Self {
        self.threshold = Some(threshold);
        self
    }
}

// ============================================================================
// The combined engine configuration
// ============================================================================

/// Mutable state owned by one engine handle.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Classical-mode toggles.
    pub classical: ClassicalFlags,
    /// The remembered count, persisted across calls until changed.
    pub persistent_count: Option<Count>,
    /// Pronoun gender preference for singularization.
    pub gender: Gender,
    /// Noun overrides, singular-pattern to plural.
    pub noun_overrides: OverrideList,
    /// Noun overrides in the singular direction, plural-pattern to
    /// singular (registered automatically by `defnoun`).
    pub noun_si_overrides: OverrideList,
    /// Verb overrides.
    pub verb_overrides: OverrideList,
    /// Adjective overrides.
    pub adj_overrides: OverrideList,
    /// Article overrides: pattern plus the forced article ("a" or "an").
    pub article_overrides: Vec<(UserPattern, &'static str)>,
}

impl Config {
    /// The article forced by the newest matching `defa`/`defan` pattern.
    pub fn article_override(&self, word: &str) -> Option<&'static str> {
        for (pattern, article) in self.article_overrides.iter().rev() {
            if pattern.check(word).is_some() {
                return Some(article);
            }
        }
        None
    }
}
