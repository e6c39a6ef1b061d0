//! DeadBasic CLI
//!
//! `deadbasic` starts the console; `deadbasic <program.ba>` runs a file.

use deadc::commands::{print_usage, repl, run_file};

fn main() {
    deadc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let code = match args.as_slice() {
        [] => repl(),
        [path] => run_file(path),
        _ => {
            print_usage();
            2
        }
    };
    std::process::exit(code);
}
