use super::*;
use pretty_assertions::assert_eq;

fn opened_if(condition_true: bool) -> ControlContext {
    let mut ctx = ControlContext::default();
    ctx.open_if(1, || Ok(condition_true)).unwrap();
    ctx
}

fn opened_try() -> ControlContext {
    let mut ctx = ControlContext::default();
    ctx.open_try(1).unwrap();
    ctx
}

// === IF ===

#[test]
fn if_true_runs_main_branch_only() {
    let mut ctx = opened_if(true);
    assert_eq!(ctx.body_action(2).unwrap(), BodyAction::Run);
    ctx.enter_else(3).unwrap();
    assert_eq!(ctx.body_action(4).unwrap(), BodyAction::Skip);
    ctx.close_if(5).unwrap();
    assert!(ctx.is_closed());
}

#[test]
fn if_false_runs_else_branch_only() {
    let mut ctx = opened_if(false);
    assert_eq!(ctx.body_action(2).unwrap(), BodyAction::Skip);
    ctx.enter_else(3).unwrap();
    assert_eq!(ctx.body_action(4).unwrap(), BodyAction::Run);
}

#[test]
fn second_else_fails() {
    let mut ctx = opened_if(true);
    ctx.enter_else(2).unwrap();
    let err = ctx.enter_else(3).unwrap_err();
    assert!(err.is_syntax());
    assert_eq!(err.message, "multiple 'else' not allowed");
}

#[test]
fn condition_not_evaluated_when_opening_is_illegal() {
    let mut ctx = opened_try();
    let err = ctx
        .open_if(2, || panic!("condition must not run"))
        .unwrap_err();
    assert_eq!(err.message, "IF cannot start inside an open TRY; close TRY first");
}

#[test]
fn failed_condition_leaves_context_closed() {
    let mut ctx = ControlContext::default();
    let err = ctx
        .open_if(1, || Err(crate::errors::condition_required(1)))
        .unwrap_err();
    assert!(err.is_syntax());
    assert!(ctx.is_closed());
}

#[test]
fn closers_without_openers_fail() {
    let mut ctx = ControlContext::default();
    assert_eq!(ctx.close_if(1).unwrap_err().message, "'endif' without matching 'if'");
    assert_eq!(ctx.enter_else(1).unwrap_err().message, "'else' without matching 'if'");
    assert_eq!(ctx.close_try(1).unwrap_err().message, "'endtry' without matching 'try'");
    assert_eq!(
        ctx.enter_catch(&[], 1).unwrap_err().message,
        "'catch' without matching 'try'"
    );
    assert_eq!(
        ctx.close_while(1).unwrap_err().message,
        "'endwhile' without matching 'while'"
    );
}

// === Exclusivity ===

#[test]
fn every_pair_of_blocks_is_exclusive() {
    let kinds = [BlockKind::If, BlockKind::While, BlockKind::Try];
    for open in kinds {
        let mut ctx = ControlContext::default();
        match open {
            BlockKind::If => ctx.open_if(1, || Ok(true)).unwrap(),
            BlockKind::While => {
                assert!(ctx.open_while(0, &[], 1, || Ok(true)).unwrap());
            }
            BlockKind::Try => ctx.open_try(1).unwrap(),
        }
        for opening in kinds {
            let err = ctx.ensure_can_open(opening, 2).unwrap_err();
            assert!(err.is_syntax(), "{opening} inside {open}");
            assert!(err.message.contains(opening.label()));
        }
    }
}

#[test]
fn top_level_statement_rejected_while_block_open() {
    let ctx = opened_if(true);
    let err = ctx.ensure_top_level_statement(2).unwrap_err();
    assert!(err.message.starts_with("Inside IF:"));
    assert!(ControlContext::Closed.ensure_top_level_statement(2).is_ok());
}

#[test]
fn body_line_without_block_fails() {
    let err = ControlContext::Closed.body_action(7).unwrap_err();
    assert!(err.is_syntax());
    assert_eq!(err.line, Some(7));
}

// === WHILE ===

#[test]
fn false_while_does_not_open() {
    let mut ctx = ControlContext::default();
    assert!(!ctx.open_while(0, &[], 1, || Ok(false)).unwrap());
    assert!(ctx.is_closed());
}

#[test]
fn true_while_records_header_and_condition() {
    let mut ctx = ControlContext::default();
    let tokens = vec!["i".to_string(), "<".to_string(), "3".to_string()];
    assert!(ctx.open_while(4, &tokens, 5, || Ok(true)).unwrap());
    let active = ctx.active_loop(9).unwrap();
    assert_eq!(active.start, 4);
    assert_eq!(active.condition, tokens);
    assert_eq!(ctx.body_action(6).unwrap(), BodyAction::Run);
    ctx.close_while(9).unwrap();
    assert!(ctx.is_closed());
}

// === TRY ===

#[test]
fn try_section_is_protected_until_failure() {
    let mut ctx = opened_try();
    assert_eq!(ctx.body_action(2).unwrap(), BodyAction::Protected);
    assert!(ctx.record_failure("boom".into()));
    assert_eq!(ctx.body_action(3).unwrap(), BodyAction::Skip);
}

#[test]
fn catch_binds_message_then_rebinds_once() {
    let mut ctx = opened_try();
    assert!(ctx.record_failure("boom".into()));
    let binding = ctx.enter_catch(&["e".to_string()], 4).unwrap();
    let expected = CatchBinding {
        name: "e".into(),
        message: "boom".into(),
    };
    assert_eq!(binding, Some(expected.clone()));
    assert_eq!(ctx.body_action(5).unwrap(), BodyAction::Catch(Some(expected)));
    assert_eq!(ctx.body_action(6).unwrap(), BodyAction::Catch(None));
}

#[test]
fn catch_without_failure_binds_empty_and_skips_body() {
    let mut ctx = opened_try();
    let binding = ctx.enter_catch(&["e".to_string()], 2).unwrap();
    assert_eq!(binding.map(|b| b.message), Some(String::new()));
    assert_eq!(ctx.body_action(3).unwrap(), BodyAction::Skip);
}

#[test]
fn catch_without_name_binds_nothing() {
    let mut ctx = opened_try();
    ctx.record_failure("boom".into());
    assert_eq!(ctx.enter_catch(&[], 2).unwrap(), None);
    assert_eq!(ctx.body_action(3).unwrap(), BodyAction::Catch(None));
}

#[test]
fn catch_rejects_repeats_and_extra_args() {
    let mut ctx = opened_try();
    let err = ctx
        .enter_catch(&["a".to_string(), "b".to_string()], 2)
        .unwrap_err();
    assert_eq!(err.message, "catch takes zero or one var name");
    ctx.enter_catch(&[], 3).unwrap();
    assert_eq!(
        ctx.enter_catch(&[], 4).unwrap_err().message,
        "multiple 'catch' not allowed"
    );
}

#[test]
fn failures_outside_try_section_are_not_recorded() {
    let mut ctx = opened_try();
    ctx.enter_catch(&[], 2).unwrap();
    assert!(!ctx.record_failure("late".into()));
    assert!(!ControlContext::Closed.record_failure("none".into()));
}

// === End of Input ===

#[test]
fn finish_names_missing_closer() {
    assert!(ControlContext::Closed.finish(3).is_ok());
    let err = opened_if(true).finish(12).unwrap_err();
    assert_eq!(err.message, "file ended but 'endif' is missing");
    assert_eq!(err.line, Some(12));
    assert_eq!(
        opened_try().finish(1).unwrap_err().message,
        "file ended but 'endtry' is missing"
    );
}
