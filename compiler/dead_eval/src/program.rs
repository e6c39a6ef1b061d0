//! Loaded programs: a pre-tokenized line arena with resolved loop ends.
//!
//! Every physical line is lexed once at load time. For each top-level
//! `while`, the index of the first following top-level `endwhile` is
//! resolved up front, so a false loop header jumps without rescanning.

use dead_lexer::{lex_line, Indent, TokenLine};
use rustc_hash::FxHashMap;

use crate::errors::ScriptResult;

/// Control keywords that may only appear at top level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    If,
    Else,
    EndIf,
    While,
    EndWhile,
    Try,
    Catch,
    EndTry,
}

impl Keyword {
    /// Match an already lower-cased head word.
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "if" => Some(Self::If),
            "else" => Some(Self::Else),
            "endif" => Some(Self::EndIf),
            "while" => Some(Self::While),
            "endwhile" => Some(Self::EndWhile),
            "try" => Some(Self::Try),
            "catch" => Some(Self::Catch),
            "endtry" => Some(Self::EndTry),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Else => "else",
            Self::EndIf => "endif",
            Self::While => "while",
            Self::EndWhile => "endwhile",
            Self::Try => "try",
            Self::Catch => "catch",
            Self::EndTry => "endtry",
        }
    }

    #[inline]
    pub fn is_loop(self) -> bool {
        matches!(self, Self::While | Self::EndWhile)
    }
}

/// Lower-cased top-level keyword of a line, if it has one.
fn top_level_keyword(line: &TokenLine) -> Option<Keyword> {
    if line.indent != Indent::Top {
        return None;
    }
    line.head()
        .and_then(|head| Keyword::from_word(&head.to_lowercase()))
}

/// A fully lexed source file.
#[derive(Clone, Debug, Default)]
pub struct Program {
    name: String,
    lines: Vec<TokenLine>,
    loop_ends: FxHashMap<usize, usize>,
}

impl Program {
    /// Lex `text` line by line. Malformed quoting on any line fails the load.
    pub fn load(name: impl Into<String>, text: &str) -> ScriptResult<Self> {
        let name = name.into();
        let lines = text
            .lines()
            .enumerate()
            .map(|(index, raw)| lex_line(raw, index + 1))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| crate::errors::ScriptError::from(err).or_source(&name))?;
        let loop_ends = resolve_loop_ends(&lines);
        Ok(Program {
            name,
            lines,
            loop_ends,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of physical lines.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[inline]
    pub fn line(&self, index: usize) -> Option<&TokenLine> {
        self.lines.get(index)
    }

    /// Index of the `endwhile` closing the `while` at `index`.
    #[inline]
    pub fn loop_end(&self, index: usize) -> Option<usize> {
        self.loop_ends.get(&index).copied()
    }
}

/// One backward pass: each `while` pairs with the nearest later `endwhile`.
fn resolve_loop_ends(lines: &[TokenLine]) -> FxHashMap<usize, usize> {
    let mut ends = FxHashMap::default();
    let mut next_end = None;
    for (index, line) in lines.iter().enumerate().rev() {
        match top_level_keyword(line) {
            Some(Keyword::While) => {
                if let Some(end) = next_end {
                    ends.insert(index, end);
                }
            }
            Some(Keyword::EndWhile) => next_end = Some(index),
            _ => {}
        }
    }
    ends
}
