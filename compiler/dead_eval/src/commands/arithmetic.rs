//! `add`, `subt`, `times`, `div` and `sqrt`.
//!
//! Operands resolve through the store and coerce to `f64`. Without a target
//! the result is printed; with one it is stored and nothing is printed.

use crate::errors::{
    division_by_zero, negative_square_root, not_whole, type_mismatch, wrong_arity, ScriptResult,
};
use crate::interpreter::Interpreter;
use crate::value::{format_number, VarType};

/// Binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Subt,
    Times,
    Div,
}

impl ArithOp {
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subt => "subt",
            Self::Times => "times",
            Self::Div => "div",
        }
    }

    fn apply(self, a: f64, b: f64, line: usize) -> ScriptResult<f64> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subt => Ok(a - b),
            Self::Times => Ok(a * b),
            Self::Div if b == 0.0 => Err(division_by_zero(line)),
            Self::Div => Ok(a / b),
        }
    }
}

/// `<op> <a> <b> [<target>]`
pub(super) fn binary(
    interp: &mut Interpreter,
    op: ArithOp,
    args: &[String],
    line: usize,
) -> ScriptResult<()> {
    let (a, b, target) = match args {
        [a, b] => (a, b, None),
        [a, b, target] => (a, b, Some(target.as_str())),
        _ => {
            return Err(wrong_arity(
                line,
                &format!("{} needs: <a> <b> [<target>]", op.name()),
            ))
        }
    };
    let a = operand(interp, a, "first argument", line)?;
    let b = operand(interp, b, "second argument", line)?;
    let result = op.apply(a, b, line)?;
    deliver(interp, result, target, line)
}

/// `sqrt <a> [<target>]`
pub(super) fn sqrt(interp: &mut Interpreter, args: &[String], line: usize) -> ScriptResult<()> {
    let (a, target) = match args {
        [a] => (a, None),
        [a, target] => (a, Some(target.as_str())),
        _ => return Err(wrong_arity(line, "sqrt needs: <a> [<target>]")),
    };
    let a = operand(interp, a, "first argument", line)?;
    if a < 0.0 {
        return Err(negative_square_root(line));
    }
    deliver(interp, a.sqrt(), target, line)
}

fn operand(interp: &Interpreter, token: &str, label: &str, line: usize) -> ScriptResult<f64> {
    interp.store.resolve(token).to_number(label, line)
}

fn deliver(
    interp: &mut Interpreter,
    result: f64,
    target: Option<&str>,
    line: usize,
) -> ScriptResult<()> {
    let Some(target) = target else {
        interp.print_handler.println(&format_number(result));
        return Ok(());
    };
    // New targets become doubles; existing ones keep their declared type.
    let ty = interp.store.get(target).map_or(VarType::Double, |var| var.ty);
    let value = ty.hold_number(result).ok_or_else(|| match ty {
        VarType::Str => type_mismatch(line, target, ty, VarType::Double),
        _ => not_whole(line, target, ty, result),
    })?;
    interp.store.declare(target, ty, value, line)
}
