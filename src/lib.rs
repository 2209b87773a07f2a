//! # libinflect
//!
//! English morphological inflection: plurals, singulars, indefinite
//! articles, ordinals, present participles, and number-to-words rendering
//! under either modern or classical English rules.
//!
//! The engine is a pure, synchronous rule cascade over immutable lexical
//! tables. Each transform is a deterministic function of the input word,
//! an optional count, and the engine's configuration (classical-mode
//! flags, a remembered count, a pronoun gender preference, and
//! caller-registered override patterns).
//!
//! ## Example
//!
//! ```rust
//! use libinflect::prelude::*;
//!
//! let mut engine = Engine::new();
//! assert_eq!(engine.plural_noun("mouse"), "mice");
//! assert_eq!(engine.a("apple"), "an apple");
//! assert_eq!(engine.ordinal("21"), "21st");
//!
//! engine.classical_set(ClassicalFlag::Ancient, true);
//! assert_eq!(engine.plural_noun("index"), "indices");
//! ```
//!
//! ## Thread model
//!
//! Lexical tables are process-wide, read-only after construction, and
//! freely shareable. An [`Engine`] owns its mutable configuration; share
//! one engine across threads only with external synchronization, or give
//! each worker its own engine.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adjective;
pub mod article;
pub mod config;
pub mod engine;
pub mod error;
pub mod lexicon;
pub mod noun;
pub mod numwords;
pub mod rules;
pub mod template;
pub mod verb;
pub mod word;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::config::{ClassicalFlag, Count, Gender, NumOptions};
    pub use crate::engine::{Comparison, Engine};
    pub use crate::error::{InflectError, Result};
}

pub use config::{ClassicalFlag, Count, Gender, NumOptions};
pub use engine::{Comparison, Engine};
pub use error::{InflectError, Result};
