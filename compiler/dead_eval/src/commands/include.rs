//! `openfile <path>`: run another file on the same store.
//!
//! The caller's open control context is discarded before the include runs
//! and is not restored afterwards, so an include inside an open block leaves
//! the caller with no block open. The caller's source name is restored.

use std::path::Path;

use tracing::debug;

use crate::context::ControlContext;
use crate::errors::{include_too_deep, wrong_arity, ScriptResult};
use crate::interpreter::Interpreter;
use crate::stack::ensure_sufficient_stack;

pub(super) fn openfile(interp: &mut Interpreter, args: &[String], line: usize) -> ScriptResult<()> {
    let Some(path) = args.first() else {
        return Err(wrong_arity(line, "openfile needs a filename"));
    };
    if interp.include_depth >= interp.max_include_depth {
        return Err(include_too_deep(line, interp.max_include_depth));
    }

    interp.context = ControlContext::Closed;
    interp.include_depth += 1;
    debug!(path = %path, depth = interp.include_depth, "including file");
    let result = ensure_sufficient_stack(|| interp.run_file(Path::new(path)));
    interp.include_depth -= 1;

    // Errors raised inside the included file already carry their own line.
    result.map_err(|err| err.or_line(line))
}
