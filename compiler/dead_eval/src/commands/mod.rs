//! The command table.
//!
//! The command set is fixed, so dispatch is a match over [`Command`] rather
//! than a map of boxed callbacks. Each command receives the raw argument
//! words and the current line number, validates its own arity (Syntax
//! errors), and resolves its own values (Runtime errors).

mod arithmetic;
mod include;
mod io;

use crate::errors::ScriptResult;
use crate::interpreter::Interpreter;

pub use arithmetic::ArithOp;

/// A built-in command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    PrintText,
    ShowVars,
    OpenFile,
    Arith(ArithOp),
    Sqrt,
    Input,
    Help,
}

impl Command {
    /// Every command, in the order `help` lists them.
    pub const ALL: [Command; 10] = [
        Command::PrintText,
        Command::ShowVars,
        Command::OpenFile,
        Command::Arith(ArithOp::Add),
        Command::Arith(ArithOp::Subt),
        Command::Arith(ArithOp::Div),
        Command::Arith(ArithOp::Times),
        Command::Sqrt,
        Command::Input,
        Command::Help,
    ];

    /// Look up a lower-cased command name.
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::PrintText => "printtext",
            Self::ShowVars => "showvars",
            Self::OpenFile => "openfile",
            Self::Arith(op) => op.name(),
            Self::Sqrt => "sqrt",
            Self::Input => "input",
            Self::Help => "help",
        }
    }

    /// One-line summary shown by `help`.
    pub fn summary(self) -> &'static str {
        match self {
            Self::PrintText => "Prints the words that follow, replacing variable names by their values",
            Self::ShowVars => "Shows all variables and what they are set to",
            Self::OpenFile => "Runs another .ba file with the current variables",
            Self::Arith(ArithOp::Add) => "Adds 2 numbers together",
            Self::Arith(ArithOp::Subt) => "Subtracts 2 numbers",
            Self::Arith(ArithOp::Div) => "Divides 2 numbers",
            Self::Arith(ArithOp::Times) => "Multiplies 2 numbers together",
            Self::Sqrt => "Square root of the number provided",
            Self::Input => "Reads a typed value into a variable",
            Self::Help => "Shows this help",
        }
    }

    pub fn execute(self, interp: &mut Interpreter, args: &[String], line: usize) -> ScriptResult<()> {
        match self {
            Self::PrintText => io::printtext(interp, args, line),
            Self::ShowVars => {
                io::showvars(interp);
                Ok(())
            }
            Self::OpenFile => include::openfile(interp, args, line),
            Self::Arith(op) => arithmetic::binary(interp, op, args, line),
            Self::Sqrt => arithmetic::sqrt(interp, args, line),
            Self::Input => io::input(interp, args, line),
            Self::Help => {
                io::help(interp);
                Ok(())
            }
        }
    }
}
