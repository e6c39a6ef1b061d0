use super::*;
use dead_eval::{buffer_handler, scripted_source, InterpreterBuilder};
use pretty_assertions::assert_eq;

fn session() -> ReplSession {
    ReplSession::new(
        InterpreterBuilder::new()
            .print_handler(buffer_handler())
            .input(scripted_source(["7"]))
            .build(),
    )
}

fn output(session: &ReplSession) -> String {
    session.interpreter().print_output()
}

#[test]
fn exit_and_quit_end_the_session() {
    let mut session = session();
    assert_eq!(session.feed("printtext hi"), Flow::Continue);
    assert_eq!(session.feed("  EXIT "), Flow::Exit);
    assert_eq!(session.feed("quit"), Flow::Exit);
    assert_eq!(output(&session), "hi\n");
}

#[test]
fn errors_are_printed_and_session_continues() {
    let mut session = session();
    session.feed("div 1 0");
    session.feed("printtext after");
    assert_eq!(
        output(&session),
        "[<repl>:line 1] You cannot divide by 0.\nafter\n"
    );
}

#[test]
fn line_numbers_count_entered_lines() {
    let mut session = session();
    session.feed("");
    session.feed("# comment");
    session.feed("bogus");
    assert_eq!(session.lines_entered(), 3);
    assert_eq!(output(&session), "[<repl>:line 3] unknown command: bogus\n");
}

#[test]
fn blocks_span_entered_lines() {
    let mut session = session();
    for line in ["try", "\tdiv 1 0", "catch e", "\tprinttext e", "endtry"] {
        assert_eq!(session.feed(line), Flow::Continue);
    }
    assert_eq!(output(&session), "[<repl>:line 2] You cannot divide by 0.\n");
}

#[test]
fn loops_are_rejected_in_console() {
    let mut session = session();
    session.feed("while 1 = 1");
    assert_eq!(
        output(&session),
        "[<repl>:line 1] while/endwhile are only supported in .ba files, not in REPL\n"
    );
}

#[test]
fn input_reads_from_configured_source() {
    let mut session = session();
    session.feed("input int n");
    session.feed("printtext n");
    assert_eq!(output(&session), "Enter int n: 7\n");
}

#[test]
fn banner_names_version() {
    assert_eq!(
        banner(),
        format!("DeadBasic.BA Console v{VERSION} - Type exit to exit.")
    );
    assert!(!prompt_user().is_empty());
}
