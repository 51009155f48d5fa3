//! Subject-verb agreement
//!
//! Turns a third-person singular form ("eats", "catches", "glorifies") into
//! the form used with other subjects ("eat", "catch", "glorify"). The rules
//! are the converse of the usual -s/-es/-ies spelling rules; anything they
//! cannot undo belongs in the verb dictionary.

use crate::inflection::{Inflection, Source};
use crate::lexicon::Lexicon;
use crate::rule::{first_match, SuffixRule};
use crate::suffix::{ends_with, ends_with_any, stem, vowel_at_end};

/// The verb cascade in priority order; a word matching none is left as is
pub static VERB_RULES: &[SuffixRule] = &[
    SuffixRule::new(
        "sibilant-es",
        "-xes, -sses, -shes, -ches, -tches, -zzes: drop -es",
        |w| ends_with_any(w, &["xes", "sses", "shes", "ches", "tches", "zzes"]),
        |w| stem(w, 2).to_string(),
    ),
    SuffixRule::new(
        "consonant-ies",
        "consonant + -ies: replace with -y",
        |w| w.len() >= 4 && ends_with(w, "ies") && !vowel_at_end(w, 4),
        |w| format!("{}y", stem(w, 3)),
    ),
    SuffixRule::new(
        "vowel-ys",
        "vowel + -ys: drop -s",
        |w| w.len() >= 3 && ends_with(w, "ys") && vowel_at_end(w, 3),
        |w| stem(w, 1).to_string(),
    ),
    SuffixRule::new(
        "s",
        "-s: drop -s",
        |w| ends_with(w, "s"),
        |w| stem(w, 1).to_string(),
    ),
];

/// Agreement form of `word`, reporting how it was chosen
///
/// An [`Unmatched`](Source::Unmatched) result carries the input unchanged
/// and is logged, since it usually means the verb dictionary lacks an entry.
pub fn inflect_verb(lexicon: &Lexicon, word: &str) -> Inflection {
    if word.is_empty() {
        return Inflection::new("", Source::Empty);
    }

    if let Some(plural) = lexicon.verb_plural(word) {
        return Inflection::new(plural, Source::Dictionary);
    }

    match first_match(VERB_RULES, word) {
        Some(rule) => {
            log::trace!("verb {word:?}: rule {}", rule.name);
            Inflection::new(rule.apply(word), Source::Rule(rule.name))
        }
        None => {
            log::debug!(
                "{word:?} is not in the verb dictionary and matched no rule; consider adding it"
            );
            Inflection::new(word, Source::Unmatched)
        }
    }
}

/// Agreement form of `word` for a non-singular subject
pub fn pluralize_verb(lexicon: &Lexicon, word: &str) -> String {
    inflect_verb(lexicon, word).text
}
