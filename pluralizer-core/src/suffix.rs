//! ASCII suffix tests shared by the rule cascades
//!
//! Suffixes in the cascades are all ASCII, so a match guarantees the matched
//! bytes are whole characters and the stem can be sliced off by byte length.

/// Whether `c` counts as a vowel for the `-y` rules (`y` included)
pub fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Case-insensitive `ends_with` for an ASCII suffix
pub(crate) fn ends_with(word: &str, suffix: &str) -> bool {
    let (w, s) = (word.as_bytes(), suffix.as_bytes());
    w.len() >= s.len() && w[w.len() - s.len()..].eq_ignore_ascii_case(s)
}

/// `ends_with` for any of `suffixes`
pub(crate) fn ends_with_any(word: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|s| ends_with(word, s))
}

/// The byte `n` positions from the end (1 = last), as a char
///
/// Non-ASCII bytes map to chars that are never vowels, and a word too short
/// to have that position yields `None`.
pub(crate) fn from_end(word: &str, n: usize) -> Option<char> {
    let bytes = word.as_bytes();
    if n == 0 || n > bytes.len() {
        return None;
    }
    Some(bytes[bytes.len() - n] as char)
}

/// Whether the byte `n` from the end exists and is a vowel
pub(crate) fn vowel_at_end(word: &str, n: usize) -> bool {
    from_end(word, n).is_some_and(is_vowel)
}

/// `word` without its last `n` bytes; only call after a suffix match
pub(crate) fn stem(word: &str, n: usize) -> &str {
    &word[..word.len() - n]
}
