//! Classification of the last significant token emitted by the scanner.
//!
//! The scanner never builds a token stream. It only remembers enough about
//! the previous token to answer two questions:
//! - can a `/` here start a regular expression literal?
//! - can a line break after this token be dropped without changing
//!   automatic semicolon insertion?

/// Keywords after which a `/` starts a regex rather than a division.
const REGEX_PRECEDING_KEYWORDS: &[&str] = &[
    "return",
    "typeof",
    "instanceof",
    "in",
    "of",
    "new",
    "delete",
    "void",
    "throw",
    "case",
    "do",
    "else",
    "yield",
    "await",
];

/// Keywords that forbid a line terminator before their operand.
const RESTRICTED_KEYWORDS: &[&str] = &["return", "break", "continue", "throw", "yield", "async"];

/// Reserved words that can never end a statement.
const OPERAND_KEYWORDS: &[&str] = &[
    "else",
    "do",
    "typeof",
    "instanceof",
    "in",
    "new",
    "delete",
    "void",
    "case",
    "var",
    "const",
    "function",
    "class",
    "extends",
];

/// Last significant token seen in normal code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Nothing emitted yet.
    Start,
    /// Identifier, keyword or numeric literal.
    Word {
        text: String,
        /// Preceded by `.`, so `obj.return` is a property, not a keyword.
        member: bool,
    },
    /// Single punctuation character.
    Punct(char),
    /// `++` or `--`.
    Update(char),
    /// String or template literal.
    Literal,
    /// Regex literal; a word right after it would be read as flags.
    Regex,
}

impl Token {
    /// Whether a `/` following this token begins a regex literal.
    pub fn allows_regex(&self) -> bool {
        match self {
            Token::Start => true,
            Token::Punct(c) => !matches!(c, ')' | ']'),
            Token::Word { text, member } => {
                !member && REGEX_PRECEDING_KEYWORDS.contains(&text.as_str())
            }
            Token::Update(_) | Token::Literal | Token::Regex => false,
        }
    }

    /// Keyword whose operand must stay on the same line (`return`, `throw`, ...).
    pub fn is_restricted(&self) -> bool {
        self.is_keyword_in(RESTRICTED_KEYWORDS)
    }

    /// Whether this token always expects more input, so no statement can
    /// end right after it.
    pub fn expects_operand(&self) -> bool {
        match self {
            Token::Punct(c) => !matches!(c, ')' | ']' | '}'),
            Token::Word { .. } => self.is_keyword_in(OPERAND_KEYWORDS),
            Token::Start | Token::Update(_) | Token::Literal | Token::Regex => false,
        }
    }

    /// Numeric literal, where a following `.` would be read as a decimal point.
    pub fn is_number(&self) -> bool {
        matches!(self, Token::Word { text, .. } if text.starts_with(|c: char| c.is_ascii_digit()))
    }

    fn is_keyword_in(&self, keywords: &[&str]) -> bool {
        match self {
            Token::Word { text, member } => !member && keywords.contains(&text.as_str()),
            _ => false,
        }
    }
}

/// Identifier or number character, including `\` for unicode escapes.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$' || c == '\\' || (!c.is_ascii() && !is_whitespace(c))
}

/// JavaScript whitespace, line terminators included.
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
