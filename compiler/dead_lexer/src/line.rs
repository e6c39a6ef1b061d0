//! Whole-line lexing: indent classification, comments, and word tokens.

use crate::{split_words, LexError};

/// Trimmed content starting with any of these is a comment.
pub const COMMENT_MARKERS: [&str; 2] = ["#", "``"];

/// Binary indentation level of a physical line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Indent {
    /// No leading whitespace.
    #[default]
    Top,
    /// Any nonzero run of leading whitespace: a block body line.
    Body,
}

/// One lexed source line.
///
/// A line with no words (blank or comment) is a no-op for every caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenLine {
    pub indent: Indent,
    pub words: Vec<String>,
}

impl TokenLine {
    /// Whether this line carries no statement.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.words.is_empty()
    }

    /// The first word (command, type keyword, or control keyword).
    #[inline]
    pub fn head(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    /// Every word after the head.
    #[inline]
    pub fn args(&self) -> &[String] {
        self.words.get(1..).unwrap_or_default()
    }
}

/// Split off leading whitespace and classify it.
///
/// Line terminators never count as indentation.
pub fn detect_indent(line: &str) -> (Indent, &str) {
    let content = line.trim_start_matches(|c: char| c.is_whitespace() && c != '\r' && c != '\n');
    if content.len() == line.len() {
        (Indent::Top, line)
    } else {
        (Indent::Body, content)
    }
}

/// Whether trimmed content is a comment.
#[inline]
pub fn is_comment(content: &str) -> bool {
    COMMENT_MARKERS.iter().any(|marker| content.starts_with(marker))
}

/// Lex one physical line. `line` is the 1-based line number for errors.
pub fn lex_line(text: &str, line: usize) -> Result<TokenLine, LexError> {
    let (indent, content) = detect_indent(text);
    let content = content.trim();
    if content.is_empty() || is_comment(content) {
        return Ok(TokenLine {
            indent,
            words: Vec::new(),
        });
    }
    Ok(TokenLine {
        indent,
        words: split_words(content, line)?,
    })
}
