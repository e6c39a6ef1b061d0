use super::*;

#[test]
fn scripted_source_replays_lines_in_order() {
    let source = scripted_source(["42", "Ryan"]);
    assert_eq!(source.read_line().unwrap().as_deref(), Some("42"));
    assert_eq!(source.read_line().unwrap().as_deref(), Some("Ryan"));
    assert_eq!(source.read_line().unwrap(), None);
}

#[test]
fn pushed_lines_are_read_after_queued_ones() {
    let source = scripted_source(Vec::<String>::new());
    assert_eq!(source.read_line().unwrap(), None);
    source.push_line("late");
    assert_eq!(source.read_line().unwrap().as_deref(), Some("late"));
}
