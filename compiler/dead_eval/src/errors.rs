//! Script errors and their centralized constructors.
//!
//! Every failure the engine can report is built by one of the factory
//! functions below, so the full vocabulary of error texts lives in one place.
//!
//! # Kinds
//!
//! - `Syntax`: malformed headers, illegal block placement, unknown commands
//!   or operators, bad quoting, missing closers.
//! - `Runtime`: value-domain failures (type mismatch, non-numeric operand,
//!   division by zero, missing file).
//! - `Internal`: anything else (I/O faults); reported with a distinct prefix.
//!
//! An open TRY section absorbs errors of every kind, recording their
//! displayed text; outside one they propagate to the caller.

use std::fmt;
use std::path::Path;

use dead_lexer::LexError;

use crate::context::BlockKind;
use crate::value::VarType;

/// Result of executing a statement or program.
pub type ScriptResult<T> = Result<T, ScriptError>;

/// Error category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Syntax,
    Runtime,
    Internal,
}

/// A script error with an optional origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptError {
    pub kind: ErrorKind,
    /// Message without location prefix.
    pub message: String,
    /// 1-based line of the statement that failed, when known.
    pub line: Option<usize>,
    /// Name of the source the failing line came from, when known.
    pub source_name: Option<String>,
}

impl ScriptError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        ScriptError {
            kind,
            message: message.into(),
            line: None,
            source_name: None,
        }
    }

    #[must_use]
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Attach a line number unless one is already present.
    #[must_use]
    pub fn or_line(mut self, line: usize) -> Self {
        if self.line.is_none() {
            self.line = Some(line);
        }
        self
    }

    /// Attach a source name unless one is already present.
    ///
    /// The innermost runner attaches first, so included files keep their
    /// own name when the error travels out through `openfile`.
    #[must_use]
    pub fn or_source(mut self, name: &str) -> Self {
        if self.source_name.is_none() {
            self.source_name = Some(name.to_owned());
        }
        self
    }

    #[inline]
    pub fn is_syntax(&self) -> bool {
        self.kind == ErrorKind::Syntax
    }

    #[inline]
    pub fn is_runtime(&self) -> bool {
        self.kind == ErrorKind::Runtime
    }

    #[inline]
    pub fn is_internal(&self) -> bool {
        self.kind == ErrorKind::Internal
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source_name, self.line) {
            (Some(source), Some(line)) => write!(f, "[{source}:line {line}] ")?,
            (None, Some(line)) => write!(f, "[line {line}] ")?,
            (Some(source), None) => write!(f, "[{source}] ")?,
            (None, None) => {}
        }
        if self.is_internal() {
            write!(f, "Internal error: ")?;
        }
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ScriptError {}

impl From<LexError> for ScriptError {
    fn from(err: LexError) -> Self {
        syntax_error(err.line, err.message())
    }
}

// Generic constructors

pub fn syntax_error(line: usize, message: impl Into<String>) -> ScriptError {
    ScriptError::new(ErrorKind::Syntax, message).at_line(line)
}

pub fn runtime_error(line: usize, message: impl Into<String>) -> ScriptError {
    ScriptError::new(ErrorKind::Runtime, message).at_line(line)
}

pub fn internal_error(message: impl Into<String>) -> ScriptError {
    ScriptError::new(ErrorKind::Internal, message)
}

// Statement Errors

pub fn unknown_command(line: usize, head: &str) -> ScriptError {
    syntax_error(line, format!("unknown command: {head}"))
}

pub fn wrong_arity(line: usize, usage: &str) -> ScriptError {
    syntax_error(line, usage)
}

pub fn unknown_type(line: usize, name: &str) -> ScriptError {
    syntax_error(line, format!("unknown type: {name}"))
}

// Condition Errors

pub fn condition_required(line: usize) -> ScriptError {
    syntax_error(line, "condition required")
}

pub fn not_expects_one_value(line: usize) -> ScriptError {
    syntax_error(line, "'not' expects exactly one value")
}

pub fn malformed_condition(line: usize) -> ScriptError {
    syntax_error(line, "condition must be: <lhs> <op> <rhs> or 'not <value>'")
}

pub fn unknown_operator(line: usize, op: &str) -> ScriptError {
    syntax_error(line, format!("unknown operator '{op}'"))
}

// Block Structure Errors

pub fn nested_block(line: usize, kind: BlockKind) -> ScriptError {
    let label = kind.label();
    match kind {
        BlockKind::If => syntax_error(
            line,
            format!("Nested {label} not supported (previous {label} missing 'endif'?)"),
        ),
        BlockKind::While | BlockKind::Try => {
            syntax_error(line, format!("Nested {label} not supported"))
        }
    }
}

pub fn block_inside_block(line: usize, opening: BlockKind, open: BlockKind) -> ScriptError {
    syntax_error(
        line,
        format!(
            "{} cannot start inside an open {}; close {} first",
            opening.label(),
            open.label(),
            open.label()
        ),
    )
}

pub fn without_matching(line: usize, keyword: &str, kind: BlockKind) -> ScriptError {
    syntax_error(
        line,
        format!("'{keyword}' without matching '{}'", kind.opener()),
    )
}

pub fn repeated_section(line: usize, keyword: &str) -> ScriptError {
    syntax_error(line, format!("multiple '{keyword}' not allowed"))
}

pub fn catch_arity(line: usize) -> ScriptError {
    syntax_error(line, "catch takes zero or one var name")
}

pub fn must_be_top_level(line: usize, keyword: &str) -> ScriptError {
    syntax_error(line, format!("'{keyword}' must be at top level (no indent)"))
}

pub fn expected_body_line(line: usize, kind: BlockKind) -> ScriptError {
    let label = kind.label();
    let headers = match kind {
        BlockKind::If => "'else', or 'endif'",
        BlockKind::While => "or 'endwhile'",
        BlockKind::Try => "'catch', or 'endtry'",
    };
    syntax_error(
        line,
        format!("Inside {label}: expected an indented body line (TAB/4 spaces), {headers}"),
    )
}

pub fn orphan_body_line(line: usize) -> ScriptError {
    syntax_error(
        line,
        "You are missing the required 'while/if/try' before this indented line",
    )
}

pub fn missing_endwhile(line: usize) -> ScriptError {
    syntax_error(line, "missing 'endwhile' for this 'while'")
}

pub fn unclosed_at_end(line: usize, kind: BlockKind) -> ScriptError {
    syntax_error(
        line,
        format!("file ended but '{}' is missing", kind.closer()),
    )
}

pub fn loops_need_file(line: usize) -> ScriptError {
    syntax_error(
        line,
        "while/endwhile are only supported in .ba files, not in REPL",
    )
}

// Value Errors

pub fn type_mismatch(line: usize, name: &str, existing: VarType, requested: VarType) -> ScriptError {
    runtime_error(
        line,
        format!("type mismatch: {name} is {existing}, not {requested}"),
    )
}

pub fn not_numeric(line: usize, label: &str) -> ScriptError {
    runtime_error(line, format!("{label} is not numeric"))
}

pub fn not_parsable(line: usize, raw: &str, ty: VarType) -> ScriptError {
    let expected = match ty {
        VarType::Int => "an integer",
        VarType::Long => "a long integer",
        VarType::Double => "a double",
        VarType::Str => "a string",
    };
    runtime_error(line, format!("'{raw}' is not {expected}"))
}

pub fn not_whole(line: usize, name: &str, ty: VarType, value: f64) -> ScriptError {
    runtime_error(
        line,
        format!("type mismatch: {name} is {ty}, cannot hold {value}"),
    )
}

pub fn division_by_zero(line: usize) -> ScriptError {
    runtime_error(line, "You cannot divide by 0.")
}

pub fn negative_square_root(line: usize) -> ScriptError {
    runtime_error(line, "cannot take the square root of a negative number")
}

// Input and File Errors

pub fn input_closed(line: usize) -> ScriptError {
    runtime_error(line, "input stream closed")
}

pub fn input_failed(line: usize, err: &std::io::Error) -> ScriptError {
    internal_error(format!("failed to read input: {err}")).at_line(line)
}

pub fn file_not_found(path: &Path) -> ScriptError {
    ScriptError::new(
        ErrorKind::Runtime,
        format!("file not found: {}", path.display()),
    )
}

pub fn file_unreadable(path: &Path, err: &std::io::Error) -> ScriptError {
    internal_error(format!("error reading '{}': {err}", path.display()))
}

pub fn include_too_deep(line: usize, limit: usize) -> ScriptError {
    runtime_error(line, format!("include depth limit ({limit}) exceeded"))
}
