//! Noun pluralization for single words and counted phrases

mod phrase;
mod rules;

pub use phrase::{pluralize_noun_phrase, pluralize_noun_phrase_bounded};
pub use rules::{inflect_noun, pluralize_noun, NOUN_RULES};
