//! Irregular-form dictionaries
//!
//! A [`Lexicon`] bundles the noun and verb [`IrregularTable`]s consulted by
//! the transformers. It is built once (from the embedded dictionaries, from
//! files, or both), is immutable afterwards and can be shared freely between
//! threads.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing file | Path in config does not exist | Logged, table left as built so far |
//! | Malformed line | Line is not a `singular plural` pair | Logged, line skipped |
//! | Empty lexicon | No sources | Every lookup misses, rules still apply |

mod table;

pub use table::IrregularTable;

use crate::config::Config;

const BUILTIN_NOUNS: &str = include_str!("../../data/plural_nouns.txt");
const BUILTIN_VERBS: &str = include_str!("../../data/plural_verbs.txt");

/// Noun and verb irregular-form tables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    nouns: IrregularTable,
    verbs: IrregularTable,
}

impl Lexicon {
    /// Create a lexicon from explicit tables
    pub fn new(nouns: IrregularTable, verbs: IrregularTable) -> Self {
        Self { nouns, verbs }
    }

    /// A lexicon with no irregular forms; only the rule cascades apply
    pub fn empty() -> Self {
        Self::default()
    }

    /// The dictionaries embedded in the library
    pub fn builtin() -> Self {
        let lexicon = Self::new(
            IrregularTable::parse(BUILTIN_NOUNS),
            IrregularTable::parse(BUILTIN_VERBS),
        );
        log::debug!(
            "built-in lexicon: {} nouns, {} verbs",
            lexicon.nouns.len(),
            lexicon.verbs.len()
        );
        lexicon
    }

    /// Build the lexicon described by `config`
    ///
    /// Dictionary files that cannot be read are logged and skipped so that a
    /// bad path never prevents startup.
    pub fn from_config(config: &Config) -> Self {
        let mut lexicon = if config.lexicon.builtin {
            Self::builtin()
        } else {
            Self::empty()
        };

        if let Some(path) = &config.lexicon.nouns {
            lexicon.nouns_mut().extend(IrregularTable::load_or_empty(path));
        }
        if let Some(path) = &config.lexicon.verbs {
            lexicon.verbs_mut().extend(IrregularTable::load_or_empty(path));
        }

        lexicon
    }

    /// Noun singular → plural table
    pub fn nouns(&self) -> &IrregularTable {
        &self.nouns
    }

    /// Verb third-person singular → other-subject table
    pub fn verbs(&self) -> &IrregularTable {
        &self.verbs
    }

    /// Mutable access to the noun table, for setup before sharing
    pub fn nouns_mut(&mut self) -> &mut IrregularTable {
        &mut self.nouns
    }

    /// Mutable access to the verb table, for setup before sharing
    pub fn verbs_mut(&mut self) -> &mut IrregularTable {
        &mut self.verbs
    }

    /// Irregular plural of a noun, if listed
    pub fn noun_plural(&self, singular: &str) -> Option<&str> {
        self.nouns.lookup(singular)
    }

    /// Irregular agreement form of a verb, if listed
    pub fn verb_plural(&self, singular: &str) -> Option<&str> {
        self.verbs.lookup(singular)
    }
}
