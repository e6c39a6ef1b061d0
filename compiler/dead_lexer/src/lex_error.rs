//! Lexer error types.

use std::fmt;

/// A lexer error, located by the 1-based line it came from.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHERE: 1-based physical line number.
    pub line: usize,
}

/// What kind of lexer error occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A `'` or `"` quote was opened but never closed.
    UnclosedQuote { quote: char },
    /// A `\` at the very end of the line with nothing to escape.
    DanglingEscape,
}

impl LexError {
    pub fn unclosed_quote(line: usize, quote: char) -> Self {
        LexError {
            kind: LexErrorKind::UnclosedQuote { quote },
            line,
        }
    }

    pub fn dangling_escape(line: usize) -> Self {
        LexError {
            kind: LexErrorKind::DanglingEscape,
            line,
        }
    }

    /// The message without the location, e.g. `parse error: No closing quotation`.
    pub fn message(&self) -> String {
        format!("parse error: {}", self.kind)
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnclosedQuote { .. } => write!(f, "No closing quotation"),
            Self::DanglingEscape => write!(f, "No escaped character"),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] {}", self.line, self.message())
    }
}

impl std::error::Error for LexError {}
