//! Line executor and file runner.
//!
//! # Architecture
//!
//! Both entry points funnel every non-blank line through one `step`:
//!
//! ```text
//! execute_line(text) ──► lex ──┐
//!                              ├──► step ──► control transition (top-level header)
//! run_program(pc loop) ────────┘        ├──► top-level statement ──► dispatch
//!                                       └──► body line ──► BodyAction ──► dispatch
//! ```
//!
//! `step` returns where the program counter goes next. Only `while` and
//! `endwhile` ever jump, which is why they are rejected in single-line mode.
//!
//! Errors leave `step` with a line number; the runner that owns the line
//! attaches its source name, so errors from an included file keep naming
//! that file.

mod builder;

pub use builder::{InterpreterBuilder, DEFAULT_MAX_INCLUDE_DEPTH, REPL_SOURCE};

use std::fs;
use std::io;
use std::path::Path;

use dead_lexer::{lex_line, Indent, TokenLine};
use tracing::{debug, trace};

use crate::commands::Command;
use crate::condition;
use crate::context::{BodyAction, CatchBinding, ControlContext};
use crate::errors::{
    file_not_found, file_unreadable, loops_need_file, missing_endwhile, must_be_top_level,
    syntax_error, unknown_command, ScriptResult,
};
use crate::input::SharedInputSource;
use crate::print_handler::SharedPrintHandler;
use crate::program::{Keyword, Program};
use crate::store::{Store, Variable};
use crate::value::{Value, VarType};

/// Where the program counter goes after a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Next,
    Jump(usize),
}

/// A DeadBasic interpreter: one variable store, one control context.
pub struct Interpreter {
    pub(crate) store: Store,
    pub(crate) context: ControlContext,
    /// Name used to locate errors raised by the lines currently running.
    pub(crate) source_name: String,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) input: SharedInputSource,
    pub(crate) include_depth: usize,
    pub(crate) max_include_depth: usize,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// An interpreter writing to stdout and reading stdin.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn context(&self) -> &ControlContext {
        &self.context
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Output captured so far (buffer handler only).
    pub fn print_output(&self) -> String {
        self.print_handler.get_output()
    }

    // Line executor

    /// Execute one line of interactive input.
    ///
    /// Block state persists between calls, so `if`/`try` blocks can be typed
    /// line by line. Loops need a whole file and are rejected.
    pub fn execute_line(&mut self, text: &str, line: usize) -> ScriptResult<()> {
        self.execute_line_inner(text, line)
            .map_err(|err| err.or_source(&self.source_name))
    }

    fn execute_line_inner(&mut self, text: &str, line: usize) -> ScriptResult<()> {
        let tokens = lex_line(text, line)?;
        let is_loop = tokens
            .head()
            .and_then(|head| Keyword::from_word(&head.to_lowercase()))
            .is_some_and(Keyword::is_loop);
        if is_loop {
            return Err(loops_need_file(line));
        }
        self.step(&tokens, line, None).map(|_| ())
    }

    // File runner

    /// Read and run a file. A missing file is a Runtime error.
    pub fn run_file(&mut self, path: &Path) -> ScriptResult<()> {
        let text = fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => file_not_found(path),
            _ => file_unreadable(path, &err),
        })?;
        self.run_source(&path.display().to_string(), &text)
    }

    /// Load and run program text under `name`.
    pub fn run_source(&mut self, name: &str, text: &str) -> ScriptResult<()> {
        let program = Program::load(name, text)?;
        self.run_program(&program)
    }

    /// Run a loaded program from its first line.
    ///
    /// The program starts with no block open. The caller's source name is
    /// restored afterwards; a failed run leaves no block open.
    #[tracing::instrument(level = "debug", skip_all, fields(source = program.name(), lines = program.len()))]
    pub fn run_program(&mut self, program: &Program) -> ScriptResult<()> {
        let caller = std::mem::replace(&mut self.source_name, program.name().to_owned());
        self.context = ControlContext::Closed;

        let result = self.drive(program);
        if result.is_err() {
            self.context = ControlContext::Closed;
        }
        self.source_name = caller;
        result.map_err(|err| err.or_source(program.name()))
    }

    fn drive(&mut self, program: &Program) -> ScriptResult<()> {
        let mut pc = 0;
        while let Some(tokens) = program.line(pc) {
            pc = match self.step(tokens, pc + 1, Some((program, pc)))? {
                Step::Next => pc + 1,
                Step::Jump(target) => target,
            };
        }
        self.context.finish(program.len())
    }

    // Shared statement machinery

    fn step(
        &mut self,
        tokens: &TokenLine,
        line: usize,
        program: Option<(&Program, usize)>,
    ) -> ScriptResult<Step> {
        let Some(head) = tokens.head() else {
            return Ok(Step::Next);
        };
        let lowered = head.to_lowercase();
        let keyword = Keyword::from_word(&lowered);
        match (tokens.indent, keyword) {
            (Indent::Body, Some(keyword)) => Err(must_be_top_level(line, keyword.as_str())),
            (Indent::Body, None) => {
                self.body_line(head, &lowered, tokens.args(), line)?;
                Ok(Step::Next)
            }
            (Indent::Top, Some(keyword)) => self.control(keyword, tokens.args(), line, program),
            (Indent::Top, None) => {
                self.context.ensure_top_level_statement(line)?;
                self.dispatch(head, &lowered, tokens.args(), line)?;
                Ok(Step::Next)
            }
        }
    }

    fn control(
        &mut self,
        keyword: Keyword,
        args: &[String],
        line: usize,
        program: Option<(&Program, usize)>,
    ) -> ScriptResult<Step> {
        let store = &self.store;
        match keyword {
            Keyword::If => self
                .context
                .open_if(line, || condition::evaluate(args, store, line))?,
            Keyword::Else => self.context.enter_else(line)?,
            Keyword::EndIf => self.context.close_if(line)?,
            Keyword::Try => self.context.open_try(line)?,
            Keyword::Catch => {
                if let Some(binding) = self.context.enter_catch(args, line)? {
                    self.bind_error(binding);
                }
            }
            Keyword::EndTry => self.context.close_try(line)?,
            Keyword::While | Keyword::EndWhile => {
                let Some((program, at)) = program else {
                    return Err(loops_need_file(line));
                };
                return self.loop_control(keyword, args, line, program, at);
            }
        }
        Ok(Step::Next)
    }

    fn loop_control(
        &mut self,
        keyword: Keyword,
        args: &[String],
        line: usize,
        program: &Program,
        at: usize,
    ) -> ScriptResult<Step> {
        let store = &self.store;
        if keyword == Keyword::While {
            let entered = self
                .context
                .open_while(at, args, line, || condition::evaluate(args, store, line))?;
            if entered {
                return Ok(Step::Next);
            }
            let end = program.loop_end(at).ok_or_else(|| missing_endwhile(line))?;
            trace!(line, "loop condition false on entry");
            return Ok(Step::Jump(end + 1));
        }

        let active = self.context.active_loop(line)?;
        if condition::evaluate(&active.condition, store, line)? {
            trace!(line, "loop continues");
            return Ok(Step::Jump(active.start + 1));
        }
        trace!(line, "loop exits");
        self.context.close_while(line)?;
        Ok(Step::Next)
    }

    fn body_line(&mut self, head: &str, lowered: &str, args: &[String], line: usize) -> ScriptResult<()> {
        match self.context.body_action(line)? {
            BodyAction::Skip => Ok(()),
            BodyAction::Run => self.dispatch(head, lowered, args, line),
            BodyAction::Protected => match self.dispatch(head, lowered, args, line) {
                Ok(()) => Ok(()),
                Err(err) => {
                    let err = err.or_source(&self.source_name);
                    if self.context.record_failure(err.to_string()) {
                        debug!(line, error = %err, "try section absorbed failure");
                        Ok(())
                    } else {
                        Err(err)
                    }
                }
            },
            BodyAction::Catch(binding) => {
                if let Some(binding) = binding {
                    self.bind_error(binding);
                }
                self.dispatch(head, lowered, args, line)
            }
        }
    }

    fn bind_error(&mut self, binding: CatchBinding) {
        self.store.bind(
            &binding.name,
            Variable {
                ty: VarType::Str,
                value: Value::Str(binding.message),
            },
        );
    }

    /// Run a declaration or command. `lowered` is the lower-cased `head`.
    fn dispatch(&mut self, head: &str, lowered: &str, args: &[String], line: usize) -> ScriptResult<()> {
        if let Some(ty) = VarType::from_keyword(lowered) {
            return self.declare(ty, args, line);
        }
        match Command::lookup(lowered) {
            Some(command) => command.execute(self, args, line),
            None => Err(unknown_command(line, head)),
        }
    }

    /// `<type> <name> <value...>`: the value words are re-joined by spaces.
    fn declare(&mut self, ty: VarType, args: &[String], line: usize) -> ScriptResult<()> {
        if args.len() < 2 {
            return Err(syntax_error(line, format!("{ty} needs: <name> <value>")));
        }
        let name = &args[0];
        let joined = args[1..].join(" ");
        let raw = match ty {
            VarType::Str => joined.trim_matches('"'),
            _ => joined.trim(),
        };
        let value = ty.parse(raw, line)?;
        self.store.declare(name, ty, value, line)
    }
}
