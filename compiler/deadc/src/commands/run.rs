//! The file-run command.

use std::path::Path;

use dead_eval::Interpreter;

/// Run a DeadBasic file on a fresh interpreter.
///
/// Returns 0 on success. On failure the error goes to stderr and the
/// status is 1.
pub fn run_file(path: &str) -> i32 {
    let mut interp = Interpreter::new();
    match interp.run_file(Path::new(path)) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}
