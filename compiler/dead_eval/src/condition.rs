//! Condition evaluation shared by `if` and `while`.
//!
//! Grammar:
//!
//! ```text
//! condition := "not" value
//!            | value op value
//! op        := "=" | "!=" | "<" | ">" | "<=" | ">="
//! ```
//!
//! `=` and `!=` compare resolved values directly; the ordering operators
//! coerce both sides to numbers first.

use crate::errors::{
    condition_required, malformed_condition, not_expects_one_value, unknown_operator,
    ScriptResult,
};
use crate::store::Store;

/// Comparison operator of a binary condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

impl CompareOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "=" => Some(Self::Eq),
            "!=" => Some(Self::Ne),
            "<" => Some(Self::Lt),
            ">" => Some(Self::Gt),
            "<=" => Some(Self::Le),
            ">=" => Some(Self::Ge),
            _ => None,
        }
    }

    /// Apply this operator to two numbers.
    #[allow(clippy::float_cmp, reason = "exact comparison is the language semantics")]
    fn holds(self, l: f64, r: f64) -> bool {
        match self {
            Self::Eq => l == r,
            Self::Ne => l != r,
            Self::Lt => l < r,
            Self::Gt => l > r,
            Self::Le => l <= r,
            Self::Ge => l >= r,
        }
    }
}

/// A parsed condition borrowing its operand tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition<'a> {
    Not(&'a str),
    Compare {
        lhs: &'a str,
        op: CompareOp,
        rhs: &'a str,
    },
}

impl<'a> Condition<'a> {
    /// Parse condition tokens (everything after `if` / `while`).
    pub fn parse(tokens: &'a [String], line: usize) -> ScriptResult<Self> {
        match tokens {
            [] => Err(condition_required(line)),
            [head, rest @ ..] if head.eq_ignore_ascii_case("not") => match rest {
                [value] => Ok(Self::Not(value)),
                _ => Err(not_expects_one_value(line)),
            },
            [lhs, op, rhs] => {
                let op = CompareOp::from_symbol(op).ok_or_else(|| unknown_operator(line, op))?;
                Ok(Self::Compare { lhs, op, rhs })
            }
            _ => Err(malformed_condition(line)),
        }
    }

    /// Evaluate against the current store.
    pub fn evaluate(self, store: &Store, line: usize) -> ScriptResult<bool> {
        match self {
            Self::Not(token) => Ok(!store.resolve(token).is_truthy()),
            Self::Compare { lhs, op, rhs } => {
                let lhs = store.resolve(lhs);
                let rhs = store.resolve(rhs);
                match op {
                    CompareOp::Eq => Ok(lhs == rhs),
                    CompareOp::Ne => Ok(lhs != rhs),
                    _ => {
                        let l = lhs.to_number("left side", line)?;
                        let r = rhs.to_number("right side", line)?;
                        Ok(op.holds(l, r))
                    }
                }
            }
        }
    }
}

/// Parse and evaluate condition tokens in one step.
pub fn evaluate(tokens: &[String], store: &Store, line: usize) -> ScriptResult<bool> {
    Condition::parse(tokens, line)?.evaluate(store, line)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
