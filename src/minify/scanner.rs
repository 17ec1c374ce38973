//! Character scanner that removes comments and redundant whitespace.
//!
//! Literals (strings, templates, regexes) are copied verbatim. Everything
//! inside a template interpolation `${...}` is copied verbatim too, but it is
//! still scanned so that braces, quotes and backticks nested inside it are
//! matched correctly.

use super::error::{LiteralKind, MalformedSourceError};
use super::spacing::{self, Gap};
use super::token::{is_line_terminator, is_whitespace, is_word_char, Token};

/// Prefix of an already-built bookmarklet.
const BOOKMARKLET_PREFIX: &str = "javascript:";

/// An open `${` inside a template literal.
struct Interpolation {
    /// Unclosed `{` inside the interpolation.
    depth: usize,
    /// Index of the backtick that opened the enclosing template.
    template_start: usize,
}

pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
    out: String,
    last: Token,
    gap: Gap,
    interpolations: Vec<Interpolation>,
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        let mut scanner = Self {
            chars: source.chars().collect(),
            pos: 0,
            out: String::with_capacity(source.len()),
            last: Token::Start,
            gap: Gap::None,
            interpolations: Vec::new(),
        };
        scanner.skip_bookmarklet_prefix();
        scanner
    }

    /// Scan the whole input and return the minified code.
    pub fn run(mut self) -> Result<String, MalformedSourceError> {
        while let Some(c) = self.peek(0) {
            match c {
                c if is_whitespace(c) => self.whitespace(c),
                '/' if self.peek(1) == Some('/') => self.line_comment(),
                '/' if self.peek(1) == Some('*') => self.block_comment()?,
                '/' if self.last.allows_regex() => self.regex()?,
                '"' | '\'' => self.string(c)?,
                '`' => self.template()?,
                '{' => {
                    if let Some(open) = self.interpolations.last_mut() {
                        open.depth += 1;
                    }
                    self.punct(c);
                }
                '}' => self.close_brace()?,
                c if is_word_char(c) => self.word(),
                c => self.punct(c),
            }
        }

        if let Some(open) = self.interpolations.last() {
            return Err(self.malformed(LiteralKind::Template, open.template_start));
        }
        Ok(self.out)
    }

    // ========================================================================
    // Skipped input
    // ========================================================================

    fn skip_bookmarklet_prefix(&mut self) {
        let start = self
            .chars
            .iter()
            .position(|c| !is_whitespace(*c))
            .unwrap_or(self.chars.len());
        let prefix: Vec<char> = BOOKMARKLET_PREFIX.chars().collect();
        if self.chars[start..].starts_with(&prefix) {
            self.pos = start + prefix.len();
        }
    }

    fn whitespace(&mut self, c: char) {
        self.pos += 1;
        if self.in_interpolation() {
            self.out.push(c);
            return;
        }
        let gap = if is_line_terminator(c) {
            Gap::Newline
        } else {
            Gap::Space
        };
        self.gap = self.gap.widen(gap);
    }

    /// `// ...` up to, but not including, the line terminator.
    fn line_comment(&mut self) {
        let start = self.pos;
        while let Some(c) = self.peek(0) {
            if is_line_terminator(c) {
                break;
            }
            self.pos += 1;
        }

        if self.in_interpolation() {
            self.out.extend(self.chars[start..self.pos].iter());
        } else {
            self.gap = self.gap.widen(Gap::Space);
        }
    }

    /// `/* ... */`, which counts as a line break if it spans lines.
    fn block_comment(&mut self) -> Result<(), MalformedSourceError> {
        let start = self.pos;
        self.pos += 2;
        let mut gap = Gap::Space;

        loop {
            match self.peek(0) {
                None => return Err(self.malformed(LiteralKind::BlockComment, start)),
                Some('*') if self.peek(1) == Some('/') => {
                    self.pos += 2;
                    break;
                }
                Some(c) => {
                    if is_line_terminator(c) {
                        gap = Gap::Newline;
                    }
                    self.pos += 1;
                }
            }
        }

        if self.in_interpolation() {
            self.out.extend(self.chars[start..self.pos].iter());
        } else {
            self.gap = self.gap.widen(gap);
        }
        Ok(())
    }

    // ========================================================================
    // Tokens
    // ========================================================================

    fn word(&mut self) {
        let start = self.pos;
        self.begin_token(self.chars[start]);
        while let Some(c) = self.peek(0) {
            if !is_word_char(c) {
                break;
            }
            self.pos += 1;
        }

        let text: String = self.chars[start..self.pos].iter().collect();
        self.out.push_str(&text);
        let member = self.last == Token::Punct('.');
        self.last = Token::Word { text, member };
    }

    fn punct(&mut self, c: char) {
        let adjacent = self.gap == Gap::None;
        self.begin_token(c);
        self.push_next();

        let update = adjacent && matches!(c, '+' | '-') && self.last == Token::Punct(c);
        self.last = if update {
            Token::Update(c)
        } else {
            Token::Punct(c)
        };
    }

    /// `}` either closes a block or ends a template interpolation.
    fn close_brace(&mut self) -> Result<(), MalformedSourceError> {
        match self.interpolations.last_mut() {
            Some(open) if open.depth == 0 => {
                let template_start = open.template_start;
                self.interpolations.pop();
                self.push_next();
                self.template_body(template_start)
            }
            Some(open) => {
                open.depth -= 1;
                self.punct('}');
                Ok(())
            }
            None => {
                self.punct('}');
                Ok(())
            }
        }
    }

    // ========================================================================
    // Literals
    // ========================================================================

    fn string(&mut self, quote: char) -> Result<(), MalformedSourceError> {
        let start = self.pos;
        self.begin_token(quote);
        self.push_next();

        loop {
            match self.peek(0) {
                Some(c) if c == quote => {
                    self.push_next();
                    break;
                }
                Some('\\') => {
                    self.push_next();
                    self.escaped(LiteralKind::String, start)?;
                }
                Some('\n') | Some('\r') | None => {
                    return Err(self.malformed(LiteralKind::String, start));
                }
                Some(_) => self.push_next(),
            }
        }

        self.last = Token::Literal;
        Ok(())
    }

    fn regex(&mut self) -> Result<(), MalformedSourceError> {
        let start = self.pos;
        self.begin_token('/');
        self.push_next();
        let mut in_class = false;

        loop {
            match self.peek(0) {
                Some('\\') => {
                    self.push_next();
                    match self.peek(0) {
                        Some(c) if !is_line_terminator(c) => self.push_next(),
                        _ => return Err(self.malformed(LiteralKind::Regex, start)),
                    }
                }
                Some('[') => {
                    in_class = true;
                    self.push_next();
                }
                Some(']') => {
                    in_class = false;
                    self.push_next();
                }
                Some('/') if !in_class => {
                    self.push_next();
                    break;
                }
                Some(c) if !is_line_terminator(c) => self.push_next(),
                _ => return Err(self.malformed(LiteralKind::Regex, start)),
            }
        }

        // flags
        while let Some(c) = self.peek(0) {
            if !is_word_char(c) {
                break;
            }
            self.push_next();
        }

        self.last = Token::Regex;
        Ok(())
    }

    fn template(&mut self) -> Result<(), MalformedSourceError> {
        let start = self.pos;
        self.begin_token('`');
        self.push_next();
        self.template_body(start)
    }

    /// Copy template text until the closing backtick or the next `${`.
    fn template_body(&mut self, start: usize) -> Result<(), MalformedSourceError> {
        loop {
            match self.peek(0) {
                None => return Err(self.malformed(LiteralKind::Template, start)),
                Some('`') => {
                    self.push_next();
                    self.last = Token::Literal;
                    return Ok(());
                }
                Some('\\') => {
                    self.push_next();
                    self.escaped(LiteralKind::Template, start)?;
                }
                Some('$') if self.peek(1) == Some('{') => {
                    self.push_next();
                    self.push_next();
                    self.interpolations.push(Interpolation {
                        depth: 0,
                        template_start: start,
                    });
                    self.last = Token::Punct('{');
                    return Ok(());
                }
                Some(_) => self.push_next(),
            }
        }
    }

    /// Copy the character after a backslash, keeping `\r\n` together.
    fn escaped(&mut self, kind: LiteralKind, start: usize) -> Result<(), MalformedSourceError> {
        match self.peek(0) {
            None => Err(self.malformed(kind, start)),
            Some('\r') if self.peek(1) == Some('\n') => {
                self.push_next();
                self.push_next();
                Ok(())
            }
            Some(_) => {
                self.push_next();
                Ok(())
            }
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Emit the separator owed to the pending gap before a token starting with `next`.
    ///
    /// Must be called while `pos` still points at `next`.
    fn begin_token(&mut self, next: char) {
        let gap = std::mem::replace(&mut self.gap, Gap::None);
        let Some(prev) = self.out.chars().next_back() else {
            return;
        };
        let after = self.peek(1);
        if let Some(sep) = spacing::separator(gap, &self.last, prev, next, after) {
            self.out.push(sep);
        }
    }

    fn in_interpolation(&self) -> bool {
        !self.interpolations.is_empty()
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn push_next(&mut self) {
        if let Some(c) = self.peek(0) {
            self.out.push(c);
            self.pos += 1;
        }
    }

    fn malformed(&self, kind: LiteralKind, index: usize) -> MalformedSourceError {
        let before = &self.chars[..index];
        let line = before.iter().filter(|c| **c == '\n').count() + 1;
        let line_start = before
            .iter()
            .rposition(|c| *c == '\n')
            .map_or(0, |p| p + 1);
        MalformedSourceError {
            kind,
            line,
            column: index - line_start + 1,
        }
    }
}
