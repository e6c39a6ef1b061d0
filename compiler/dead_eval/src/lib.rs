//! DeadBasic Eval - the execution engine for DeadBasic programs.
//!
//! # Architecture
//!
//! - `Store`: variables, each with a fixed declared type
//! - `condition`: the comparison grammar shared by `if` and `while`
//! - `ControlContext`: the single open IF, WHILE, or TRY block
//! - `Command`: enum-dispatched built-in commands
//! - `Program`: a pre-lexed file with resolved loop ends
//! - `Interpreter`: the line executor (interactive) and the
//!   program-counter file runner
//!
//! Output and input go through `SharedPrintHandler` and `SharedInputSource`,
//! so embedders and tests can capture output and script input.

pub mod commands;
pub mod condition;
pub mod context;
pub mod errors;
mod input;
pub mod interpreter;
mod print_handler;
pub mod program;
mod stack;
pub mod store;
pub mod value;

pub use commands::{ArithOp, Command};
pub use context::{BlockKind, ControlContext};
pub use dead_lexer::COMMENT_MARKERS;
pub use errors::{ErrorKind, ScriptError, ScriptResult};
pub use input::{scripted_source, stdin_source, InputSource, SharedInputSource};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use program::Program;
pub use store::{Store, Variable};
pub use value::{Value, VarType};

/// Language version reported by `help` and the interactive banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
