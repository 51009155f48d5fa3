//! Inline alternatives such as `is:are` or `("choice zero":one)`
//!
//! An alternatives expression lists choices separated by `:` or `,`. It may
//! be wrapped in one pair of parentheses, and double quotes protect
//! delimiters and spaces inside a choice. The expression ends at the closing
//! parenthesis (which is consumed) or at the first space outside quotes and
//! parentheses (which is not).
//!
//! ```text
//! is:are remainder                  -> "is" | "are", consumes 6
//! (is:are)remainder                 -> "is" | "are", consumes 8
//! ("choice zero":one:"option two")  -> "choice zero" | "one" | "option two"
//! ```
//!
//! # Failure Modes
//!
//! Unbalanced parentheses or quotes are not errors: the scan runs to the end
//! of the input or to the first unprotected space and returns what it
//! collected.

use crate::buffer::{bounded, BoundedBuffer};
use crate::lexicon::Lexicon;
use crate::verb::pluralize_verb;

/// What the scanner did with one character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `(` outside quotes
    Open,
    /// `)` outside quotes that did not close the outermost group
    Close,
    /// `)` that closed the outermost group; consumed, scan over
    End,
    /// `"`, toggling the quote state; never part of a choice
    Quote,
    /// `:` or `,` outside quotes; moves to the next choice
    Delimiter,
    /// Space outside quotes and parentheses; not consumed, scan over
    Stop,
    /// Content of the current choice
    Text(char),
}

/// Character-at-a-time state of an alternatives scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionScanner {
    depth: i32,
    quoted: bool,
    alternative: usize,
}

impl OptionScanner {
    /// Scanner positioned before the first character
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance over `ch`
    pub fn step(&mut self, ch: char) -> Step {
        match ch {
            '(' if !self.quoted => {
                self.depth += 1;
                Step::Open
            }
            ')' if !self.quoted => {
                self.depth -= 1;
                if self.depth == 0 {
                    Step::End
                } else {
                    Step::Close
                }
            }
            '"' => {
                self.quoted = !self.quoted;
                Step::Quote
            }
            ':' | ',' if !self.quoted => {
                self.alternative += 1;
                Step::Delimiter
            }
            ' ' if !self.quoted && self.depth == 0 => Step::Stop,
            other => Step::Text(other),
        }
    }

    /// Current parenthesis depth; a stray `)` can drive it negative
    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// Whether the scanner is inside double quotes
    pub fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// Index of the choice being read
    pub fn alternative(&self) -> usize {
        self.alternative
    }
}

/// One choice pulled out of an alternatives expression
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// The chosen text, empty if the expression has no such choice
    pub text: String,
    /// Bytes of the source taken up by the whole expression
    pub consumed: usize,
}

impl Selection {
    /// The part of `src` after the expression
    pub fn remainder<'a>(&self, src: &'a str) -> &'a str {
        &src[self.consumed.min(src.len())..]
    }
}

/// Pick choice `index` from the expression at the start of `src`
///
/// At most `capacity - 1` characters of the choice are kept. `consumed`
/// covers the whole expression regardless of which choice was picked,
/// including a closing parenthesis but not a terminating space.
pub fn parse_option(src: &str, index: usize, capacity: usize) -> Selection {
    let mut scanner = OptionScanner::new();
    let mut out = BoundedBuffer::new(capacity);
    let mut consumed = src.len();

    for (pos, ch) in src.char_indices() {
        match scanner.step(ch) {
            Step::End => {
                consumed = pos + ch.len_utf8();
                break;
            }
            Step::Stop => {
                consumed = pos;
                break;
            }
            Step::Text(c) if scanner.alternative() == index => {
                out.push(c);
            }
            _ => {}
        }
    }

    Selection {
        text: out.into_string(),
        consumed,
    }
}

/// Every choice in the expression at the start of `src`, unbounded
///
/// Returns the choices and the number of bytes consumed.
pub fn split_options(src: &str) -> (Vec<String>, usize) {
    let mut scanner = OptionScanner::new();
    let mut choices = vec![String::new()];
    let mut consumed = src.len();

    for (pos, ch) in src.char_indices() {
        match scanner.step(ch) {
            Step::End => {
                consumed = pos + ch.len_utf8();
                break;
            }
            Step::Stop => {
                consumed = pos;
                break;
            }
            Step::Delimiter => choices.push(String::new()),
            Step::Text(c) => {
                if let Some(current) = choices.last_mut() {
                    current.push(c);
                }
            }
            _ => {}
        }
    }

    (choices, consumed)
}

/// Pick the verb form for `plurality`, deriving it when the expression omits it
///
/// If choice `plurality` is present and non-empty it is returned verbatim.
/// Otherwise choice 0 is taken as the third-person singular form and passed
/// through the verb agreement rules, so `$v(eats)` can yield "eat" while
/// `$v(is:are)` spells both forms out. `consumed` always comes from the scan
/// for the requested choice.
pub fn resolve_verb_option(
    lexicon: &Lexicon,
    src: &str,
    plurality: usize,
    capacity: usize,
) -> Selection {
    let requested = parse_option(src, plurality, capacity);
    if !requested.text.is_empty() {
        return requested;
    }

    let base = parse_option(src, 0, capacity);
    let derived = pluralize_verb(lexicon, &base.text);
    Selection {
        text: bounded(&derived, capacity),
        consumed: requested.consumed,
    }
}
