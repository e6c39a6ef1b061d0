//! Command handlers for the DeadBasic CLI.
//!
//! Each handler returns the process exit status; `main` does the exiting.

mod repl;
mod run;

pub use repl::{banner, prompt_user, repl, Flow, ReplSession};
pub use run::run_file;

/// Print the usage summary shown for unexpected arguments.
pub fn print_usage() {
    println!("DeadBasic.BA v{}", dead_eval::VERSION);
    println!("Usage:");
    println!("  deadbasic <program.ba>");
    println!("  deadbasic              # console (no while loops)");
    println!();
    println!("Notes:");
    println!("  - Decls: int x 5 | long big 999999 | double pi 3.5 | str name \"Ryan\"");
    println!("  - Cmds : printtext ... | showvars | openfile \"file.ba\" | add a b [target]");
    println!("  - IF   : if <lhs> <op> <rhs> | if not <val> ; ops: = != < > <= >=");
    println!("  - WHILE: while <cond> ... endwhile   (no nesting; body uses ONE TAB or FOUR SPACES)");
    println!("  - TRY  : try ... catch [errVar] ... endtry   (no nesting; body uses ONE TAB or FOUR SPACES)");
    println!(
        "  - Comments start with {}",
        dead_eval::COMMENT_MARKERS.join(" or ")
    );
}
