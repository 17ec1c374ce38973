//! Whitespace decisions between two adjacent tokens.
//!
//! A run of whitespace (or a comment) between two tokens is a [`Gap`].
//! Each gap collapses to nothing, one space, or one newline.

use super::token::Token;

/// Characters that continue the previous expression when they start a line,
/// so ASI never inserts a semicolon before them.
const CONTINUATION_CHARS: &[char] = &[
    ')', ']', '}', ',', ';', '.', '?', ':', '=', '*', '%', '&', '|', '^', '<', '>',
];

/// Character pairs that lex as a different token when written together.
const MERGING_PAIRS: &[(char, char)] = &[
    ('+', '+'),
    ('-', '-'),
    ('/', '/'),
    ('/', '*'),
    ('<', '!'),
];

/// Whitespace seen since the last emitted token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Gap {
    None,
    Space,
    Newline,
}

impl Gap {
    /// Combine with another gap; a line break wins over a space.
    pub fn widen(self, other: Gap) -> Gap {
        self.max(other)
    }
}

/// Separator to emit for `gap`, given what was emitted before it, the
/// first character of the next token and the character after that.
pub fn separator(
    gap: Gap,
    last: &Token,
    prev: char,
    next: char,
    after: Option<char>,
) -> Option<char> {
    match gap {
        Gap::None => None,
        Gap::Space => needs_space(last, prev, next).then_some(' '),
        Gap::Newline if newline_required(last, next, after) => Some('\n'),
        Gap::Newline => needs_space(last, prev, next).then_some(' '),
    }
}

/// Whether dropping the gap would merge two tokens into one.
pub fn needs_space(last: &Token, prev: char, next: char) -> bool {
    if super::token::is_word_char(prev) && super::token::is_word_char(next) {
        return true;
    }
    // `/a/ in y` would read `in` as flags
    if *last == Token::Regex && super::token::is_word_char(next) {
        return true;
    }
    if last.is_number() && next == '.' {
        return true;
    }
    MERGING_PAIRS.contains(&(prev, next))
}

/// Whether a line break between `last` and `next` may affect ASI.
///
/// `after` is the character following `next`, needed to tell member access
/// (`a\n.b`) from a numeric literal (`a\n.5`).
pub fn newline_required(last: &Token, next: char, after: Option<char>) -> bool {
    if last.is_restricted() {
        return true;
    }
    if last.expects_operand() {
        return false;
    }
    if next == '.' && after.is_some_and(|c| c.is_ascii_digit()) {
        return true;
    }
    if let Token::Update(_) = last {
        return !matches!(next, ')' | ']' | '}' | ',' | ';');
    }
    !CONTINUATION_CHARS.contains(&next)
}
