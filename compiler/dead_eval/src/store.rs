//! Variable store: name to (declared type, current value).
//!
//! Variables are created by declaration, `input`, arithmetic targets, or a
//! `catch` binding, and are never removed. Iteration follows creation order
//! so `showvars` lists variables the way they were introduced.

use rustc_hash::FxHashMap;

use crate::errors::{type_mismatch, ScriptResult};
use crate::value::{Value, VarType};

/// A declared variable.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub ty: VarType,
    pub value: Value,
}

/// The interpreter's variable store.
#[derive(Clone, Debug, Default)]
pub struct Store {
    slots: FxHashMap<String, usize>,
    vars: Vec<(String, Variable)>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.slots.get(name).map(|&slot| &self.vars[slot].1)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Variables in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Variable)> {
        self.vars.iter().map(|(name, var)| (name.as_str(), var))
    }

    /// Declare or overwrite `name`.
    ///
    /// Once a name exists every later declaration must use the same type.
    pub fn declare(&mut self, name: &str, ty: VarType, value: Value, line: usize) -> ScriptResult<()> {
        if let Some(existing) = self.get(name) {
            if existing.ty != ty {
                return Err(type_mismatch(line, name, existing.ty, ty));
            }
        }
        self.bind(name, Variable { ty, value });
        Ok(())
    }

    /// Bind `name` unconditionally, replacing any previous type.
    pub fn bind(&mut self, name: &str, var: Variable) {
        match self.slots.get(name) {
            Some(&slot) => self.vars[slot].1 = var,
            None => {
                self.slots.insert(name.to_owned(), self.vars.len());
                self.vars.push((name.to_owned(), var));
            }
        }
    }

    /// Resolve a raw token to its effective value.
    ///
    /// Order: existing variable, integer literal (no `.`), float literal
    /// (has `.`), fully quoted string with the quotes stripped, raw token.
    /// A variable named like a literal shadows it.
    pub fn resolve(&self, token: &str) -> Value {
        if let Some(var) = self.get(token) {
            return var.value.clone();
        }
        let number = if token.contains('.') {
            token.parse::<f64>().ok().map(Value::Double)
        } else {
            token.parse::<i64>().ok().map(Value::Int)
        };
        if let Some(number) = number {
            return number;
        }
        Value::Str(unquote(token).unwrap_or(token).to_owned())
    }
}

/// Strip one pair of matching `"` or `'` quotes wrapping the whole token.
fn unquote(token: &str) -> Option<&str> {
    ['"', '\''].into_iter().find_map(|quote| {
        token
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
    })
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
