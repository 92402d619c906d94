use bough::path::join_path;
use bough::{Key, Mapping, TreeError, Value, try_walk, walk, walk_keys, walk_values};

fn mapping(pairs: Vec<(Key, Value)>) -> Mapping {
    pairs.into_iter().collect()
}

fn named(pairs: Vec<(&str, Value)>) -> Mapping {
    mapping(pairs.into_iter().map(|(k, v)| (Key::from(k), v)).collect())
}

fn source() -> Mapping {
    mapping(vec![
        (Key::from("a"), Value::from("root-a-value")),
        (Key::from("b"), Value::from("root-b-value")),
        (
            Key::from("some"),
            Value::Mapping(named(vec![
                ("a", Value::from("sub-a-value")),
                ("b", Value::from("sub-b-value")),
            ])),
        ),
        (Key::from("more"), Value::Integer(5)),
        (Key::Index(0), Value::from("again")),
    ])
}

// ============================================================================
// Remapping
// ============================================================================

#[test]
fn test_walk_with_simple_remapping() {
    let result = walk(&source(), |key, value, path| {
        let mut key = key.clone();
        let mut value = value;
        if key == Key::from("more") {
            key = Key::from("extra-more");
            if let Value::Integer(n) = value {
                value = Value::Integer(n * 2);
            }
        }
        if key == Key::from("a") {
            value = Value::from("new-a-value");
        }
        if join_path(path, &key, ".") == "some.b" {
            value = Value::from("overwrite-only-sub-b");
        }
        (key, value)
    });

    let expected = mapping(vec![
        (Key::from("a"), Value::from("new-a-value")),
        (Key::from("b"), Value::from("root-b-value")),
        (
            Key::from("some"),
            Value::Mapping(named(vec![
                ("a", Value::from("new-a-value")),
                ("b", Value::from("overwrite-only-sub-b")),
            ])),
        ),
        (Key::from("extra-more"), Value::Integer(10)),
        (Key::Index(0), Value::from("again")),
    ]);
    assert_eq!(result, expected);
}

#[test]
fn test_walk_identity() {
    let input = source();
    let result = walk(&input, |key, value, _| (key.clone(), value));
    assert_eq!(result, input);
}

#[test]
fn test_walk_does_not_touch_input() {
    let input = source();
    let before = input.clone();
    let _ = walk(&input, |_, _, _| (Key::from("x"), Value::Null));
    assert_eq!(input, before);
}

// ============================================================================
// Traversal order and paths
// ============================================================================

#[test]
fn test_walk_is_post_order_with_parent_paths() {
    let input = named(vec![
        (
            "outer",
            Value::Mapping(named(vec![(
                "inner",
                Value::Mapping(named(vec![("leaf", Value::Integer(1))])),
            )])),
        ),
        ("sibling", Value::Integer(2)),
    ]);

    let mut visits: Vec<(String, Vec<Key>)> = Vec::new();
    walk(&input, |key, value, path| {
        visits.push((key.to_string(), path.to_vec()));
        (key.clone(), value)
    });

    assert_eq!(
        visits,
        vec![
            ("leaf".to_string(), vec![Key::from("outer"), Key::from("inner")]),
            ("inner".to_string(), vec![Key::from("outer")]),
            ("outer".to_string(), vec![]),
            ("sibling".to_string(), vec![]),
        ]
    );
}

#[test]
fn test_walk_callback_sees_rewritten_children() {
    let input = named(vec![("parent", Value::Mapping(named(vec![("child", Value::Integer(1))])))]);

    let mut seen = None;
    walk(&input, |key, value, _| {
        if *key == Key::from("parent") {
            seen = Some(value.clone());
        }
        if *key == Key::from("child") {
            return (Key::from("renamed"), value);
        }
        (key.clone(), value)
    });

    assert_eq!(seen, Some(Value::Mapping(named(vec![("renamed", Value::Integer(1))]))));
}

#[test]
fn test_walk_paths_keep_delimiters_unambiguous() {
    let input = named(vec![
        ("a.b", Value::Mapping(named(vec![("c", Value::Integer(1))]))),
        ("a", Value::Mapping(named(vec![("b", Value::Mapping(named(vec![("c", Value::Integer(2))])))]))),
    ]);

    let mut paths = Vec::new();
    walk(&input, |key, value, path| {
        if *key == Key::from("c") {
            paths.push(path.to_vec());
        }
        (key.clone(), value)
    });

    assert_eq!(
        paths,
        vec![
            vec![Key::from("a.b")],
            vec![Key::from("a"), Key::from("b")],
        ]
    );
}

// ============================================================================
// Collisions
// ============================================================================

#[test]
fn test_walk_key_collision_last_write_wins() {
    let input = named(vec![
        ("first", Value::Integer(1)),
        ("second", Value::Integer(2)),
        ("third", Value::Integer(3)),
    ]);

    let result = walk_keys(&input, |_, _| Key::from("same"));

    assert_eq!(result, named(vec![("same", Value::Integer(3))]));
}

#[test]
fn test_walk_collision_keeps_first_position() {
    let input = named(vec![
        ("x", Value::Integer(1)),
        ("y", Value::Integer(2)),
        ("z", Value::Integer(3)),
    ]);

    let result = walk_keys(&input, |key, _| {
        if *key == Key::from("z") { Key::from("x") } else { key.clone() }
    });

    assert_eq!(result, named(vec![("x", Value::Integer(3)), ("y", Value::Integer(2))]));
}

#[test]
fn test_walk_numeric_rename_collides_with_index() {
    let input = mapping(vec![
        (Key::Index(0), Value::from("position")),
        (Key::from("x"), Value::from("renamed")),
    ]);

    let result = walk_keys(&input, |key, _| {
        if *key == Key::from("x") { Key::from("0") } else { key.clone() }
    });

    assert_eq!(result.len(), 1);
    assert_eq!(result[&Key::Index(0)], Value::from("renamed"));
}

// ============================================================================
// Conveniences and errors
// ============================================================================

#[test]
fn test_walk_values_doubles_integers() {
    let input = named(vec![
        ("n", Value::Integer(2)),
        ("nested", Value::Mapping(named(vec![("m", Value::Integer(4))]))),
        ("s", Value::from("text")),
    ]);

    let result = walk_values(&input, |value, _, _| match value {
        Value::Integer(n) => Value::Integer(n * 2),
        other => other,
    });

    assert_eq!(
        result,
        named(vec![
            ("n", Value::Integer(4)),
            ("nested", Value::Mapping(named(vec![("m", Value::Integer(8))]))),
            ("s", Value::from("text")),
        ])
    );
}

#[test]
fn test_try_walk_fails_fast() {
    let input = named(vec![
        ("ok", Value::Integer(1)),
        ("bad", Value::Mapping(named(vec![("x", Value::Integer(1))]))),
        ("never", Value::Integer(3)),
    ]);

    let mut calls = 0;
    let result = try_walk(&input, |key, value, _| {
        calls += 1;
        match value {
            Value::Integer(n) => Ok((key.clone(), Value::Integer(n + 1))),
            other if *key == Key::from("bad") => Err(TreeError::InvalidArgument(format!(
                "expected integer, got {}",
                other.type_name()
            ))),
            other => Ok((key.clone(), other)),
        }
    });

    assert_eq!(
        result,
        Err(TreeError::InvalidArgument("expected integer, got mapping".to_string()))
    );
    assert_eq!(calls, 3);
}

#[test]
fn test_try_walk_success_matches_walk() {
    let input = source();
    let result = try_walk(&input, |key, value, _| Ok((key.clone(), value))).unwrap();
    assert_eq!(result, input);
}
