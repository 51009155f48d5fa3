//! Traced transformer results

use serde::Serialize;

/// What produced a transformed word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "rule", rename_all = "snake_case")]
pub enum Source {
    /// The count was exactly one, so the word was left alone
    Singular,
    /// The word was empty
    Empty,
    /// The irregular-form table had an entry
    Dictionary,
    /// A suffix rule matched; holds the rule name
    Rule(&'static str),
    /// Nothing matched and the word was returned unchanged
    Unmatched,
}

/// A transformed word and the reason for its form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inflection {
    /// The resulting form
    pub text: String,
    /// What produced it
    pub source: Source,
}

impl Inflection {
    pub(crate) fn new(text: impl Into<String>, source: Source) -> Self {
        Self {
            text: text.into(),
            source,
        }
    }

    /// Whether the word fell through every rule
    pub fn is_unmatched(&self) -> bool {
        self.source == Source::Unmatched
    }

    /// Name of the rule that fired, if any
    pub fn rule(&self) -> Option<&'static str> {
        match self.source {
            Source::Rule(name) => Some(name),
            _ => None,
        }
    }
}

impl From<Inflection> for String {
    fn from(inflection: Inflection) -> Self {
        inflection.text
    }
}
