use super::*;
use pretty_assertions::assert_eq;

fn store_with(name: &str, ty: VarType, value: Value) -> Store {
    let mut store = Store::new();
    store.declare(name, ty, value, 1).unwrap();
    store
}

// === Declaration ===

#[test]
fn same_type_redeclaration_overwrites() {
    let mut store = store_with("x", VarType::Int, Value::Int(1));
    store.declare("x", VarType::Int, Value::Int(2), 2).unwrap();
    assert_eq!(store.get("x").unwrap().value, Value::Int(2));
    assert_eq!(store.len(), 1);
}

#[test]
fn different_type_redeclaration_fails() {
    let mut store = store_with("x", VarType::Int, Value::Int(1));
    let err = store
        .declare("x", VarType::Str, Value::Str("a".into()), 5)
        .unwrap_err();
    assert!(err.is_runtime());
    assert_eq!(err.line, Some(5));
    assert_eq!(store.get("x").unwrap().value, Value::Int(1));
}

#[test]
fn bind_replaces_type() {
    let mut store = store_with("e", VarType::Int, Value::Int(1));
    store.bind(
        "e",
        Variable {
            ty: VarType::Str,
            value: Value::Str("boom".into()),
        },
    );
    assert_eq!(store.get("e").unwrap().ty, VarType::Str);
}

#[test]
fn iteration_follows_creation_order() {
    let mut store = Store::new();
    for name in ["zeta", "alpha", "mid"] {
        store.declare(name, VarType::Long, Value::Int(0), 1).unwrap();
    }
    store.declare("zeta", VarType::Long, Value::Int(9), 2).unwrap();
    let names: Vec<_> = store.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
}

// === Resolution ===

#[test]
fn resolves_literals_by_spelling() {
    let store = Store::new();
    assert_eq!(store.resolve("42"), Value::Int(42));
    assert_eq!(store.resolve("-3"), Value::Int(-3));
    assert!(matches!(store.resolve("2.5"), Value::Double(n) if n == 2.5));
    assert!(matches!(store.resolve("hello"), Value::Str(s) if s == "hello"));
}

#[test]
fn strips_matching_quotes_only() {
    let store = Store::new();
    assert!(matches!(store.resolve("\"hi there\""), Value::Str(s) if s == "hi there"));
    assert!(matches!(store.resolve("'x'"), Value::Str(s) if s == "x"));
    assert!(matches!(store.resolve("\"x'"), Value::Str(s) if s == "\"x'"));
    assert!(matches!(store.resolve("\""), Value::Str(s) if s == "\""));
}

#[test]
fn quoted_number_stays_a_string() {
    let store = Store::new();
    assert!(matches!(store.resolve("\"5\""), Value::Str(s) if s == "5"));
}

#[test]
fn variable_shadows_literal() {
    let store = store_with("5", VarType::Str, Value::Str("five".into()));
    assert!(matches!(store.resolve("5"), Value::Str(s) if s == "five"));
}

#[test]
fn dotted_non_number_is_raw_string() {
    let store = Store::new();
    assert!(matches!(store.resolve("file.ba"), Value::Str(s) if s == "file.ba"));
}
