//! Error types for inflection operations.

use thiserror::Error;

/// Errors that can occur during inflection operations.
///
/// Every error is raised synchronously at the point of the invalid call;
/// there is no partial-result or best-effort mode. "No singular form
/// found" is deliberately *not* an error: [`crate::engine::Engine::singular_noun`]
/// reports it as a normal `None` return.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InflectError {
    /// The count value cannot be parsed as an integer.
    ///
    /// Raised by [`crate::engine::Engine::num`] and by the `num()`
    /// template directive.
    #[error("invalid count value: {0:?}")]
    BadNumValue(String),

    /// The value passed to number-to-words cannot be parsed as a number.
    #[error("not a number: {0:?}")]
    NotANumber(String),

    /// The digit-grouping option is outside the supported `0..=3` range.
    #[error("chunking option must be 0, 1, 2 or 3, got {0}")]
    BadChunkingOption(usize),

    /// The number's magnitude exceeds the largest supported scale word.
    #[error("number too large: no scale word for a group of magnitude 1000^{0}")]
    NumberOutOfRange(usize),

    /// A user-defined override pattern failed to compile.
    ///
    /// Raised immediately by `defnoun`/`defverb`/`defadj`/`defa`/`defan`;
    /// the override list is left unchanged.
    #[error("invalid user-defined pattern {pattern:?}: {reason}")]
    BadUserDefinedPattern {
        /// The pattern text as supplied by the caller.
        pattern: String,
        /// The underlying compile error.
        reason: String,
    },

    /// The gender name is not one of the six supported values.
    #[error("invalid gender: {0:?}")]
    BadGender(String),

    /// The classical-mode flag name is not recognized.
    #[error("unknown classical mode flag: {0:?}")]
    UnknownClassicalFlag(String),
}

/// A specialized `Result` type for inflection operations.
pub type Result<T> = std::result::Result<T, InflectError>;
