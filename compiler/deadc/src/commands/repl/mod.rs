//! The interactive console.
//!
//! `ReplSession` owns the interpreter and the entered-line counter; the
//! terminal loop around it only reads lines and keeps history.

use dead_eval::{Interpreter, VERSION};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

/// What the console does after a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One interactive session.
pub struct ReplSession {
    interp: Interpreter,
    line_no: usize,
}

impl ReplSession {
    pub fn new(interp: Interpreter) -> Self {
        ReplSession { interp, line_no: 0 }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interp
    }

    /// Lines entered so far, including `exit`.
    pub fn lines_entered(&self) -> usize {
        self.line_no
    }

    /// Execute one entered line. Errors are printed and the session goes on.
    pub fn feed(&mut self, line: &str) -> Flow {
        self.line_no += 1;
        let command = line.trim().to_lowercase();
        if command == "exit" || command == "quit" {
            return Flow::Exit;
        }
        if let Err(err) = self.interp.execute_line(line, self.line_no) {
            self.interp.print_handler().println(&err.to_string());
        }
        Flow::Continue
    }
}

pub fn banner() -> String {
    format!("DeadBasic.BA Console v{VERSION} - Type exit to exit.")
}

/// Name shown in the prompt.
pub fn prompt_user() -> String {
    ["USER", "USERNAME", "LOGNAME"]
        .into_iter()
        .find_map(|key| std::env::var(key).ok().filter(|name| !name.is_empty()))
        .unwrap_or_else(|| "user".to_owned())
}

/// Run the console on the terminal until `exit`, end of input, or Ctrl-C.
pub fn repl() -> i32 {
    println!("{}", banner());
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("deadbasic: cannot start console: {err}");
            return 1;
        }
    };
    let prompt = format!("DB {}> ", prompt_user());
    let mut session = ReplSession::new(Interpreter::new());

    loop {
        match editor.readline(&prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(err) = editor.add_history_entry(line.as_str()) {
                        debug!(%err, "history entry not recorded");
                    }
                }
                if session.feed(&line) == Flow::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("bye");
                break;
            }
            Err(err) => {
                eprintln!("deadbasic: {err}");
                return 1;
            }
        }
    }
    debug!(lines = session.lines_entered(), "console session ended");
    0
}

#[cfg(test)]
mod tests;
