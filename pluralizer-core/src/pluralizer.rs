//! Explicit engine context
//!
//! [`Pluralizer`] owns the irregular-form tables and the output limits and
//! exposes every transformer as a method. Build it once at startup, share it
//! (it is `Send + Sync`), and drop it or call [`Pluralizer::release`] at
//! shutdown.

use crate::config::{Config, Limits};
use crate::error::Result;
use crate::inflection::Inflection;
use crate::lexicon::Lexicon;
use crate::noun::{inflect_noun, pluralize_noun, pluralize_noun_phrase_bounded};
use crate::number;
use crate::option::{parse_option, resolve_verb_option, Selection};
use crate::pronoun::{pluralize_pronoun, Gender};
use crate::verb::{inflect_verb, pluralize_verb};
use std::path::Path;

/// Pluralization engine bound to one lexicon
#[derive(Debug, Clone)]
pub struct Pluralizer {
    lexicon: Lexicon,
    limits: Limits,
}

impl Pluralizer {
    /// Engine with the embedded dictionaries and default limits
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::builtin())
    }

    /// Engine with a caller-supplied lexicon and default limits
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            limits: Limits::default(),
        }
    }

    /// Engine described by `config`
    pub fn with_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            lexicon: Lexicon::from_config(config),
            limits: config.limits,
        })
    }

    /// Engine described by a TOML configuration file
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_config(&Config::from_file(path)?)
    }

    /// The tables in use
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// The limits in use
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Plural of a single noun for `count`
    pub fn noun(&self, word: &str, count: i64) -> String {
        pluralize_noun(&self.lexicon, word, count)
    }

    /// Plural of a single noun, with the rule that produced it
    pub fn inflect_noun(&self, word: &str, count: i64) -> Inflection {
        inflect_noun(&self.lexicon, word, count)
    }

    /// Counted plural phrase, bounded by `max_phrase_len`
    pub fn noun_phrase(&self, phrase: &str, count: i64) -> String {
        pluralize_noun_phrase_bounded(&self.lexicon, phrase, count, self.limits.max_phrase_len)
    }

    /// Agreement form of a third-person singular verb
    pub fn verb(&self, word: &str) -> String {
        pluralize_verb(&self.lexicon, word)
    }

    /// Agreement form of a verb, with the rule that produced it
    pub fn inflect_verb(&self, word: &str) -> Inflection {
        inflect_verb(&self.lexicon, word)
    }

    /// Spell a small integer
    pub fn spell(&self, n: i64) -> String {
        number::spell(n)
    }

    /// Plural of a pronoun for `count`
    pub fn pronoun(&self, word: &str, count: i64) -> String {
        pluralize_pronoun(word, count)
    }

    /// Choice `index` of an alternatives expression, using `option_capacity`
    pub fn parse_option(&self, src: &str, index: usize) -> Selection {
        parse_option(src, index, self.limits.option_capacity)
    }

    /// Verb form for `plurality`, derived from choice 0 when absent
    pub fn verb_option(&self, src: &str, plurality: usize) -> Selection {
        resolve_verb_option(&self.lexicon, src, plurality, self.limits.option_capacity)
    }

    /// Verb form agreeing with a referent of `gender`
    pub fn verb_option_for(&self, src: &str, gender: Gender) -> Selection {
        self.verb_option(src, gender.plurality_index())
    }

    /// Release the tables
    pub fn release(self) {
        log::debug!(
            "releasing lexicon: {} nouns, {} verbs",
            self.lexicon.nouns().len(),
            self.lexicon.verbs().len()
        );
    }
}

impl Default for Pluralizer {
    fn default() -> Self {
        Self::new()
    }
}
