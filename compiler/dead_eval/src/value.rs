//! Value model: declared variable types and runtime values.

use std::fmt;

use crate::errors::{not_numeric, not_parsable, ScriptResult};

/// Declared type of a variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VarType {
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Long,
    /// 64-bit float.
    Double,
    Str,
}

impl VarType {
    /// Map a lower-cased declaration keyword to its type.
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "int" => Some(Self::Int),
            "long" => Some(Self::Long),
            "double" => Some(Self::Double),
            "str" => Some(Self::Str),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Long => "long",
            Self::Double => "double",
            Self::Str => "str",
        }
    }

    /// Parse the text of a declaration or `input` line into a value of this type.
    pub fn parse(self, raw: &str, line: usize) -> ScriptResult<Value> {
        let parsed = match self {
            Self::Int => raw.parse::<i32>().ok().map(|n| Value::Int(i64::from(n))),
            Self::Long => raw.parse::<i64>().ok().map(Value::Int),
            Self::Double => raw.parse::<f64>().ok().map(Value::Double),
            Self::Str => Some(Value::Str(raw.to_owned())),
        };
        parsed.ok_or_else(|| not_parsable(line, raw, self))
    }

    /// Convert a numeric result into a value this type can hold.
    ///
    /// Returns `None` when the number does not fit (fractional or out of range
    /// for the integer types, or any number for `str`).
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        reason = "values are range-checked whole numbers before the cast"
    )]
    pub fn hold_number(self, n: f64) -> Option<Value> {
        match self {
            Self::Int => whole(n)
                .filter(|w| (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(w))
                .map(|w| Value::Int(w as i64)),
            // i64::MAX rounds up as f64, so the upper bound is exclusive.
            Self::Long => whole(n)
                .filter(|w| *w >= i64::MIN as f64 && *w < i64::MAX as f64)
                .map(|w| Value::Int(w as i64)),
            Self::Double => Some(Value::Double(n)),
            Self::Str => None,
        }
    }
}

#[inline]
fn whole(n: f64) -> Option<f64> {
    (n.is_finite() && n.fract() == 0.0).then_some(n)
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A runtime value.
///
/// `int` and `long` variables both store `Int`; the declared type carries
/// the width. Literals resolve to `Int` or `Double` by their spelling.
#[derive(Clone, Debug)]
pub enum Value {
    Int(i64),
    Double(f64),
    Str(String),
}

impl Value {
    /// Numeric view of this value, if it has one without string parsing.
    #[allow(clippy::cast_precision_loss, reason = "numeric coercion is f64-based")]
    fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Double(n) => Some(*n),
            Self::Str(_) => None,
        }
    }

    /// Coerce to a number for arithmetic or ordering.
    ///
    /// Strings qualify only when they parse cleanly: as a float if they
    /// contain `.`, as an integer otherwise. `label` names the operand in the
    /// error (`left side`, `first argument`, ...).
    #[allow(clippy::cast_precision_loss, reason = "numeric coercion is f64-based")]
    pub fn to_number(&self, label: &str, line: usize) -> ScriptResult<f64> {
        if let Some(n) = self.as_f64() {
            return Ok(n);
        }
        let Self::Str(s) = self else {
            return Err(not_numeric(line, label));
        };
        let parsed = if s.contains('.') {
            s.parse::<f64>().ok()
        } else {
            s.parse::<i64>().ok().map(|n| n as f64)
        };
        parsed.ok_or_else(|| not_numeric(line, label))
    }

    /// Truthiness: zero and the empty string are false, everything else true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Int(n) => *n != 0,
            Self::Double(n) => *n != 0.0,
            Self::Str(s) => !s.is_empty(),
        }
    }
}

/// Equality follows the host's mixed-number rules: `1` equals `1.0`, but a
/// string never equals a number, even `"1"`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Str(_), _) | (_, Self::Str(_)) => false,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Double(n) => f.write_str(&format_number(*n)),
            Self::Str(s) => f.write_str(s),
        }
    }
}

/// Format a number so whole values print without a fractional part.
///
/// `4.0` prints as `4`, `4.5` as `4.5`. Zero of either sign prints as `0`,
/// and fractions below `1e-4` switch to exponent form (`1e-05`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "nan".to_owned();
    }
    if n == 0.0 {
        return "0".to_owned();
    }
    if n.is_finite() && n.fract() != 0.0 && n.abs() < 1e-4 {
        return exponent_form(n);
    }
    n.to_string()
}

/// Shortest exponent form with a signed, two-digit exponent.
fn exponent_form(n: f64) -> String {
    let raw = format!("{n:e}");
    let Some((mantissa, exp)) = raw.split_once('e') else {
        return raw;
    };
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exp),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}
