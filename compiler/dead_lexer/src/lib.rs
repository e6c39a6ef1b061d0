//! DeadBasic Lexer - splits one physical source line into an indent flag
//! plus shell-style word tokens.
//!
//! # Architecture
//!
//! ```text
//! raw line ──► detect_indent ──► Indent::{Top, Body}
//!                   │
//!                   ▼
//!          trimmed content ──► comment? ──► no tokens
//!                   │
//!                   ▼
//!             split_words ──► Vec<String>
//! ```
//!
//! Indentation is binary. Any run of leading whitespace (tabs, spaces, or
//! other Unicode whitespace) marks a body line; there is no second level.

mod lex_error;
mod line;
mod words;

pub use lex_error::{LexError, LexErrorKind};
pub use line::{detect_indent, is_comment, lex_line, Indent, TokenLine, COMMENT_MARKERS};
pub use words::split_words;
