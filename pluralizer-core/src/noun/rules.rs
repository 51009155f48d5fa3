//! Noun pluralization cascade
//!
//! Rules are tried top to bottom and the first match decides the plural.
//! Later rules are only reachable when every earlier one declined, so the
//! order of [`NOUN_RULES`] is part of the behavior: `-us` must be seen before
//! the generic `-s`, and the `-f` rule must not see `-ff` words.

use crate::inflection::{Inflection, Source};
use crate::lexicon::Lexicon;
use crate::rule::{first_match, SuffixRule};
use crate::suffix::{ends_with, ends_with_any, stem, vowel_at_end};

/// The noun cascade in priority order
pub static NOUN_RULES: &[SuffixRule] = &[
    SuffixRule::new(
        "sibilant",
        "-ss, -sh, -ch, -x, -o, -z: add -es",
        |w| ends_with_any(w, &["ss", "sh", "ch", "x", "o", "z"]),
        |w| format!("{w}es"),
    ),
    SuffixRule::new(
        "fe",
        "-fe: replace with -ves",
        |w| ends_with(w, "fe"),
        |w| format!("{}ves", stem(w, 2)),
    ),
    SuffixRule::new(
        "f",
        "-f but not -ff: replace with -ves",
        |w| ends_with(w, "f") && !ends_with(w, "ff"),
        |w| format!("{}ves", stem(w, 1)),
    ),
    SuffixRule::new(
        "vowel-y",
        "vowel + -y: add -s",
        |w| ends_with(w, "y") && vowel_at_end(w, 2),
        |w| format!("{w}s"),
    ),
    SuffixRule::new(
        "consonant-y",
        "consonant + -y: replace with -ies",
        |w| ends_with(w, "y"),
        |w| format!("{}ies", stem(w, 1)),
    ),
    SuffixRule::new(
        "us",
        "-us: replace with -i",
        |w| ends_with(w, "us"),
        |w| format!("{}i", stem(w, 2)),
    ),
    SuffixRule::new(
        "is",
        "-is: replace with -es",
        |w| ends_with(w, "is"),
        |w| format!("{}es", stem(w, 2)),
    ),
    SuffixRule::new(
        "s",
        "-s: add -es",
        |w| ends_with(w, "s"),
        |w| format!("{w}es"),
    ),
    SuffixRule::new("regular", "add -s", |_| true, |w| format!("{w}s")),
];

/// Pluralize a single word for `count`, reporting how the form was chosen
///
/// A count of exactly one returns the word untouched. Otherwise the noun
/// table is consulted first and its stored form is returned verbatim; only
/// on a miss does the cascade run.
///
/// An empty word yields an empty plural ([`Source::Empty`]) rather than the
/// `"s"` the `regular` rule would produce on its own.
pub fn inflect_noun(lexicon: &Lexicon, word: &str, count: i64) -> Inflection {
    if count == 1 {
        return Inflection::new(word, Source::Singular);
    }
    if word.is_empty() {
        return Inflection::new("", Source::Empty);
    }

    if let Some(plural) = lexicon.noun_plural(word) {
        return Inflection::new(plural, Source::Dictionary);
    }

    // "regular" matches everything, so the fallback is never taken.
    let rule = first_match(NOUN_RULES, word).unwrap_or(&NOUN_RULES[NOUN_RULES.len() - 1]);
    log::trace!("noun {word:?}: rule {}", rule.name);
    Inflection::new(rule.apply(word), Source::Rule(rule.name))
}

/// Plural of a single word for `count`
pub fn pluralize_noun(lexicon: &Lexicon, word: &str, count: i64) -> String {
    inflect_noun(lexicon, word, count).text
}
