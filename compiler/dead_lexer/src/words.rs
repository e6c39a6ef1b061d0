//! POSIX shell-style word splitting.
//!
//! Words are separated by unquoted blanks (space, tab, CR, LF). Quoting rules:
//!
//! - `'...'` is literal up to the next `'`
//! - `"..."` allows `\"` and `\\`; any other backslash is kept verbatim
//! - outside quotes, `\x` yields `x`
//!
//! Adjacent quoted and unquoted runs concatenate into one word
//! (`a"b c"d` is the single word `ab cd`), and `""` is an empty word.

use std::str::Chars;

use crate::LexError;

#[inline]
fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Split `text` into words. `line` is only used to locate errors.
pub fn split_words(text: &str, line: usize) -> Result<Vec<String>, LexError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        match c {
            c if is_blank(c) => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            '\'' => {
                in_word = true;
                single_quoted(&mut chars, &mut current, line)?;
            }
            '"' => {
                in_word = true;
                double_quoted(&mut chars, &mut current, line)?;
            }
            '\\' => {
                in_word = true;
                let escaped = chars.next().ok_or(LexError::dangling_escape(line))?;
                current.push(escaped);
            }
            c => {
                in_word = true;
                current.push(c);
            }
        }
    }

    if in_word {
        words.push(current);
    }
    Ok(words)
}

fn single_quoted(
    chars: &mut Chars<'_>,
    out: &mut String,
    line: usize,
) -> Result<(), LexError> {
    loop {
        match chars.next() {
            Some('\'') => return Ok(()),
            Some(c) => out.push(c),
            None => return Err(LexError::unclosed_quote(line, '\'')),
        }
    }
}

fn double_quoted(
    chars: &mut Chars<'_>,
    out: &mut String,
    line: usize,
) -> Result<(), LexError> {
    loop {
        match chars.next() {
            Some('"') => return Ok(()),
            Some('\\') => match chars.next() {
                Some(c @ ('"' | '\\')) => out.push(c),
                Some(c) => {
                    out.push('\\');
                    out.push(c);
                }
                None => return Err(LexError::dangling_escape(line)),
            },
            Some(c) => out.push(c),
            None => return Err(LexError::unclosed_quote(line, '"')),
        }
    }
}
