use super::*;
use crate::value::{Value, VarType};

fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

fn eval(text: &str, store: &Store) -> ScriptResult<bool> {
    evaluate(&words(text), store, 1)
}

// === Parsing ===

#[test]
fn parses_binary_and_unary_forms() {
    let tokens = words("x <= 3");
    assert_eq!(
        Condition::parse(&tokens, 1).unwrap(),
        Condition::Compare {
            lhs: "x",
            op: CompareOp::Le,
            rhs: "3"
        }
    );
    let tokens = words("NOT flag");
    assert_eq!(Condition::parse(&tokens, 1).unwrap(), Condition::Not("flag"));
}

#[test]
fn empty_condition_is_syntax_error() {
    let err = evaluate(&[], &Store::new(), 4).unwrap_err();
    assert!(err.is_syntax());
    assert_eq!(err.message, "condition required");
}

#[test]
fn wrong_token_counts_are_syntax_errors() {
    let store = Store::new();
    assert!(eval("1 =", &store).unwrap_err().is_syntax());
    assert!(eval("1 = 2 3", &store).unwrap_err().is_syntax());
    assert_eq!(
        eval("not a b", &store).unwrap_err().message,
        "'not' expects exactly one value"
    );
}

#[test]
fn unknown_operator_is_syntax_error() {
    let err = eval("1 == 1", &Store::new()).unwrap_err();
    assert!(err.is_syntax());
    assert_eq!(err.message, "unknown operator '=='");
}

// === Equality ===

#[test]
fn equality_compares_resolved_values() {
    let store = Store::new();
    assert!(eval("1 = 1", &store).unwrap());
    assert!(!eval("1 = 2", &store).unwrap());
    assert!(eval("1 = 1.0", &store).unwrap());
    assert!(eval("abc != abd", &store).unwrap());
}

#[test]
fn equality_never_coerces_strings() {
    let mut store = Store::new();
    store
        .declare("s", VarType::Str, Value::Str("1".into()), 1)
        .unwrap();
    assert!(!eval("s = 1", &store).unwrap());
    assert!(eval("s != 1", &store).unwrap());
}

// === Ordering ===

#[test]
fn ordering_coerces_numeric_strings() {
    let mut store = Store::new();
    store
        .declare("s", VarType::Str, Value::Str("10".into()), 1)
        .unwrap();
    assert!(eval("s > 9", &store).unwrap());
    assert!(eval("2 <= 2.0", &store).unwrap());
    assert!(eval("1.5 >= 1", &store).unwrap());
    assert!(!eval("3 < 3", &store).unwrap());
}

#[test]
fn ordering_on_non_numeric_is_runtime_error() {
    let store = Store::new();
    let err = eval("abc < 1", &store).unwrap_err();
    assert!(err.is_runtime());
    assert_eq!(err.message, "left side is not numeric");
    let err = eval("1 < abc", &store).unwrap_err();
    assert_eq!(err.message, "right side is not numeric");
}

// === Negation ===

#[test]
fn not_negates_truthiness() {
    let mut store = Store::new();
    store.declare("zero", VarType::Int, Value::Int(0), 1).unwrap();
    store
        .declare("empty", VarType::Str, Value::Str(String::new()), 1)
        .unwrap();
    assert!(eval("not zero", &store).unwrap());
    assert!(eval("not empty", &store).unwrap());
    assert!(!eval("not 1", &store).unwrap());
    assert!(!eval("not word", &store).unwrap());
}
