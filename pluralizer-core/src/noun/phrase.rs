//! Quantity phrases such as "six short swords"
//!
//! The phrase is split into an optional leading article, the words up to the
//! first `" of "` (whose last word is the head noun), and the trailing clause.
//! Only the head noun is pluralized, so "a bag of holding" becomes
//! "two bags of holding" rather than "two bag of holdings".

use super::rules::pluralize_noun;
use crate::buffer::BoundedBuffer;
use crate::config::defaults;
use crate::lexicon::Lexicon;
use crate::number::spell;

/// Leading words dropped before the count is written; at most one is removed
const ARTICLES: [&str; 4] = ["a ", "an ", "the ", "one "];

const PREPOSITION: &str = " of ";

/// Turn a singular noun phrase into a counted plural phrase
///
/// A non-negative `count` is spelled out in front of the phrase, including
/// zero ("zero short swords"); a negative count omits it. Output is capped at
/// the default phrase length.
pub fn pluralize_noun_phrase(lexicon: &Lexicon, phrase: &str, count: i64) -> String {
    pluralize_noun_phrase_bounded(lexicon, phrase, count, defaults::MAX_PHRASE_LEN)
}

/// [`pluralize_noun_phrase`] with an explicit output capacity
///
/// Text that does not fit in `capacity` is dropped silently.
pub fn pluralize_noun_phrase_bounded(
    lexicon: &Lexicon,
    phrase: &str,
    count: i64,
    capacity: usize,
) -> String {
    let mut out = BoundedBuffer::new(capacity);

    let body_start = phrase.find(|c| !is_blank(c)).unwrap_or(phrase.len());
    out.push_str(&phrase[..body_start]);

    let mut rest = &phrase[body_start..];
    if let Some(article) = ARTICLES.iter().find(|a| starts_with_ignore_case(rest, a)) {
        rest = &rest[article.len()..];
    }

    if count >= 0 {
        out.push_str(&spell(count));
        out.push(' ');
    }

    let head_end = find_ignore_case(rest, PREPOSITION).unwrap_or(rest.len());
    let (noun_part, tail) = rest.split_at(head_end);
    let head_start = noun_part.rfind(is_blank).map_or(0, |idx| idx + 1);

    out.push_str(&noun_part[..head_start]);
    out.push_str(&pluralize_noun(lexicon, &noun_part[head_start..], count));
    out.push_str(tail);

    if out.is_truncated() {
        log::debug!("noun phrase truncated to {} characters", out.len());
    }
    out.into_string()
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Byte offset of the first ASCII case-insensitive occurrence of `needle`
fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    let needle = needle.as_bytes();
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}
