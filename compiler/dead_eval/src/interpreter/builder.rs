//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::Interpreter;
use crate::context::ControlContext;
use crate::input::{stdin_source, SharedInputSource};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::store::Store;

/// Source name used for interactive input.
pub const REPL_SOURCE: &str = "<repl>";

/// Default bound on nested `openfile` includes.
pub const DEFAULT_MAX_INCLUDE_DEPTH: usize = 64;

/// Builder for creating Interpreter instances.
///
/// Defaults: stdout output, stdin input, source name `<repl>`, include
/// depth bounded at [`DEFAULT_MAX_INCLUDE_DEPTH`].
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    input: Option<SharedInputSource>,
    source_name: String,
    max_include_depth: usize,
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            print_handler: None,
            input: None,
            source_name: REPL_SOURCE.to_owned(),
            max_include_depth: DEFAULT_MAX_INCLUDE_DEPTH,
        }
    }

    /// Set the handler every command writes through.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Set the source the `input` command reads from.
    #[must_use]
    pub fn input(mut self, input: SharedInputSource) -> Self {
        self.input = Some(input);
        self
    }

    /// Set the name that locates errors from interactive lines.
    #[must_use]
    pub fn source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = name.into();
        self
    }

    #[must_use]
    pub fn max_include_depth(mut self, depth: usize) -> Self {
        self.max_include_depth = depth;
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            store: Store::new(),
            context: ControlContext::Closed,
            source_name: self.source_name,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            input: self.input.unwrap_or_else(stdin_source),
            include_depth: 0,
            max_include_depth: self.max_include_depth,
        }
    }
}
