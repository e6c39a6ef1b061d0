//! Control-context machine for IF, WHILE, and TRY blocks.
//!
//! At most one block is open at any time. `ControlContext` is a tagged union,
//! so two open blocks cannot be represented at all; every transition is an
//! exhaustive match on the current state.
//!
//! ```text
//!            if <cond>                 else
//!   Closed ────────────► If(cond, main) ────► If(cond, else)
//!     ▲                        │ endif             │ endif
//!     └────────────────────────┴───────────────────┘
//!
//!            try                        catch [name]
//!   Closed ────────────► Try(section)  ────────────► Try(catch)
//!     ▲                        │ endtry                │ endtry
//!     └────────────────────────┴───────────────────────┘
//!
//!            while <true>               endwhile <false>
//!   Closed ────────────► While(start) ──────────────────► Closed
//! ```

use std::fmt;

use crate::errors::{
    block_inside_block, catch_arity, expected_body_line, nested_block, orphan_body_line,
    repeated_section, unclosed_at_end, without_matching, ScriptResult,
};

/// Which kind of block a context belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockKind {
    If,
    While,
    Try,
}

impl BlockKind {
    /// Upper-case name used in messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::If => "IF",
            Self::While => "WHILE",
            Self::Try => "TRY",
        }
    }

    pub fn opener(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::While => "while",
            Self::Try => "try",
        }
    }

    pub fn closer(self) -> &'static str {
        match self {
            Self::If => "endif",
            Self::While => "endwhile",
            Self::Try => "endtry",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// State of an open `if`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IfContext {
    pub condition_true: bool,
    pub in_else: bool,
}

impl IfContext {
    /// The main branch runs when the condition held; the else branch otherwise.
    #[inline]
    pub fn body_visible(self) -> bool {
        self.condition_true != self.in_else
    }
}

/// State of an active `while` loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WhileContext {
    /// Line index of the `while` header.
    pub start: usize,
    /// Condition tokens, re-evaluated at every `endwhile`.
    pub condition: Vec<String>,
}

/// State of an open `try`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TryContext {
    pub has_error: bool,
    pub in_catch: bool,
    pub error_var: Option<String>,
    pub error_message: Option<String>,
    /// The error variable is bound again before the first catch body line.
    rebind_pending: bool,
}

impl TryContext {
    fn binding(&self) -> Option<CatchBinding> {
        self.error_var.as_ref().map(|name| CatchBinding {
            name: name.clone(),
            message: self.error_message.clone().unwrap_or_default(),
        })
    }
}

/// A string variable the caller must bind when a catch section starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatchBinding {
    pub name: String,
    pub message: String,
}

/// What to do with an indented body line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BodyAction {
    /// Execute; errors propagate.
    Run,
    /// Do nothing.
    Skip,
    /// Execute inside a try section; errors are recorded, not propagated.
    Protected,
    /// Execute inside a catch section, binding the error variable first if given.
    Catch(Option<CatchBinding>),
}

/// The single open control context, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ControlContext {
    #[default]
    Closed,
    If(IfContext),
    While(WhileContext),
    Try(TryContext),
}

impl ControlContext {
    pub fn kind(&self) -> Option<BlockKind> {
        match self {
            Self::Closed => None,
            Self::If(_) => Some(BlockKind::If),
            Self::While(_) => Some(BlockKind::While),
            Self::Try(_) => Some(BlockKind::Try),
        }
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Fail unless no block is open.
    pub fn ensure_can_open(&self, opening: BlockKind, line: usize) -> ScriptResult<()> {
        match self.kind() {
            None => Ok(()),
            Some(open) if open == opening => Err(nested_block(line, opening)),
            Some(open) => Err(block_inside_block(line, opening, open)),
        }
    }

    // IF

    /// `if <cond>`: the condition is evaluated only once opening is legal.
    pub fn open_if(
        &mut self,
        line: usize,
        condition: impl FnOnce() -> ScriptResult<bool>,
    ) -> ScriptResult<()> {
        self.ensure_can_open(BlockKind::If, line)?;
        let condition_true = condition()?;
        *self = Self::If(IfContext {
            condition_true,
            in_else: false,
        });
        Ok(())
    }

    pub fn enter_else(&mut self, line: usize) -> ScriptResult<()> {
        match self {
            Self::If(ctx) if ctx.in_else => Err(repeated_section(line, "else")),
            Self::If(ctx) => {
                ctx.in_else = true;
                Ok(())
            }
            _ => Err(without_matching(line, "else", BlockKind::If)),
        }
    }

    pub fn close_if(&mut self, line: usize) -> ScriptResult<()> {
        match self {
            Self::If(_) => {
                *self = Self::Closed;
                Ok(())
            }
            _ => Err(without_matching(line, "endif", BlockKind::If)),
        }
    }

    // WHILE

    /// `while <cond>`: opens the loop only when the condition holds.
    ///
    /// Returns whether the loop was entered.
    pub fn open_while(
        &mut self,
        start: usize,
        tokens: &[String],
        line: usize,
        condition: impl FnOnce() -> ScriptResult<bool>,
    ) -> ScriptResult<bool> {
        self.ensure_can_open(BlockKind::While, line)?;
        if !condition()? {
            return Ok(false);
        }
        *self = Self::While(WhileContext {
            start,
            condition: tokens.to_vec(),
        });
        Ok(true)
    }

    /// The active loop, for `endwhile`.
    pub fn active_loop(&self, line: usize) -> ScriptResult<&WhileContext> {
        match self {
            Self::While(ctx) => Ok(ctx),
            _ => Err(without_matching(line, "endwhile", BlockKind::While)),
        }
    }

    pub fn close_while(&mut self, line: usize) -> ScriptResult<()> {
        self.active_loop(line)?;
        *self = Self::Closed;
        Ok(())
    }

    // TRY

    pub fn open_try(&mut self, line: usize) -> ScriptResult<()> {
        self.ensure_can_open(BlockKind::Try, line)?;
        *self = Self::Try(TryContext::default());
        Ok(())
    }

    /// `catch [name]`: switch to the catch section.
    ///
    /// Returns the error variable to bind immediately (the captured message,
    /// or an empty string when nothing failed).
    pub fn enter_catch(
        &mut self,
        args: &[String],
        line: usize,
    ) -> ScriptResult<Option<CatchBinding>> {
        let Self::Try(ctx) = self else {
            return Err(without_matching(line, "catch", BlockKind::Try));
        };
        if ctx.in_catch {
            return Err(repeated_section(line, "catch"));
        }
        if args.len() > 1 {
            return Err(catch_arity(line));
        }
        ctx.in_catch = true;
        ctx.error_var = args.first().cloned();
        ctx.rebind_pending = true;
        Ok(ctx.binding())
    }

    pub fn close_try(&mut self, line: usize) -> ScriptResult<()> {
        match self {
            Self::Try(_) => {
                *self = Self::Closed;
                Ok(())
            }
            _ => Err(without_matching(line, "endtry", BlockKind::Try)),
        }
    }

    /// Record a failure raised by a protected try-section line.
    ///
    /// Returns `false` when no try section is active any more, in which case
    /// the caller must propagate the error itself.
    pub fn record_failure(&mut self, message: String) -> bool {
        match self {
            Self::Try(ctx) if !ctx.in_catch && !ctx.has_error => {
                ctx.has_error = true;
                ctx.error_message = Some(message);
                true
            }
            _ => false,
        }
    }

    // Line placement

    /// A non-header statement at top level is legal only with no block open.
    pub fn ensure_top_level_statement(&self, line: usize) -> ScriptResult<()> {
        match self.kind() {
            None => Ok(()),
            Some(kind) => Err(expected_body_line(line, kind)),
        }
    }

    /// Decide what happens to an indented body line.
    pub fn body_action(&mut self, line: usize) -> ScriptResult<BodyAction> {
        match self {
            Self::Closed => Err(orphan_body_line(line)),
            Self::If(ctx) if ctx.body_visible() => Ok(BodyAction::Run),
            Self::If(_) => Ok(BodyAction::Skip),
            Self::While(_) => Ok(BodyAction::Run),
            Self::Try(ctx) if !ctx.in_catch && !ctx.has_error => Ok(BodyAction::Protected),
            Self::Try(ctx) if ctx.in_catch && ctx.has_error => {
                let binding = if ctx.rebind_pending {
                    ctx.rebind_pending = false;
                    ctx.binding()
                } else {
                    None
                };
                Ok(BodyAction::Catch(binding))
            }
            Self::Try(_) => Ok(BodyAction::Skip),
        }
    }

    /// End of input: any block still open is missing its closer.
    pub fn finish(&self, last_line: usize) -> ScriptResult<()> {
        match self.kind() {
            None => Ok(()),
            Some(kind) => Err(unclosed_at_end(last_line, kind)),
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
