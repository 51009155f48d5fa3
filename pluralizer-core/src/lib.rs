//! Rule-based English pluralization for generated game text
//!
//! This crate turns singular nouns and verbs into the forms that agree with a
//! count or a plural subject, spells small integers, and resolves the inline
//! `alt0:alt1` alternatives used by text templates. It is a best-effort
//! heuristic engine: irregular forms come from dictionaries, everything else
//! from short ordered suffix-rule cascades.
//!
//! # Architecture
//!
//! - **Lexicon**: immutable noun and verb irregular-form tables
//! - **Transformers**: pure functions over a `&Lexicon` (nouns, noun phrases,
//!   verbs, numbers, pronouns)
//! - **Option parsing**: a small state machine over alternatives expressions
//! - **Pluralizer**: an explicit context owning a lexicon and output limits
//!
//! # Example
//!
//! ```rust
//! use pluralizer_core::{Gender, Pluralizer};
//!
//! let engine = Pluralizer::new();
//!
//! assert_eq!(engine.noun("knife", 2), "knives");
//! assert_eq!(engine.noun_phrase("a bag of holding", 2), "two bags of holding");
//! assert_eq!(engine.verb("catches"), "catch");
//!
//! let selection = engine.verb_option_for("(eats) with gusto", Gender::Plural);
//! assert_eq!(selection.text, "eat");
//! assert_eq!(selection.consumed, 6);
//! ```

pub mod buffer;
pub mod config;
pub mod error;
pub mod inflection;
pub mod lexicon;
pub mod noun;
pub mod number;
pub mod option;
pub mod pluralizer;
pub mod pronoun;
pub mod rule;
mod suffix;
pub mod verb;

pub use buffer::BoundedBuffer;
pub use config::{Config, ConfigBuilder, LexiconConfig, Limits};
pub use error::{Error, Result};
pub use inflection::{Inflection, Source};
pub use lexicon::{IrregularTable, Lexicon};
pub use noun::{
    inflect_noun, pluralize_noun, pluralize_noun_phrase, pluralize_noun_phrase_bounded,
    NOUN_RULES,
};
pub use number::spell;
pub use option::{parse_option, resolve_verb_option, split_options, OptionScanner, Selection, Step};
pub use pluralizer::Pluralizer;
pub use pronoun::{pluralize_pronoun, Gender};
pub use rule::SuffixRule;
pub use suffix::is_vowel;
pub use verb::{inflect_verb, pluralize_verb, VERB_RULES};
