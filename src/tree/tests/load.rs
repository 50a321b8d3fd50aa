//! Loading tests: structure assembly and plain scalar
//! typing

use pretty_assertions::assert_eq;

use super::*;
use crate::{load, load_all, value::Value};

#[test]
fn mapping_of_typed_scalars()
{
    super::init();

    assert_eq!(
        load("a: 1\nb: true\nc: ~").expect("valid"),
        map(vec![
            ("a", Value::Int(1)),
            ("b", Value::Bool(true)),
            ("c", Value::Null),
        ])
    );
}

#[test]
fn sequence_of_ints()
{
    assert_eq!(
        load("- 1\n- 2\n- 3").expect("valid"),
        seq(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
    );
}

#[test]
fn flow_sequence_value()
{
    assert_eq!(
        load("key: [1, 'two', \"three\\n\"]").expect("valid"),
        map(vec![(
            "key",
            seq(vec![Value::Int(1), s("two"), s("three\n")])
        )])
    );
}

#[test]
fn flow_mapping_value()
{
    assert_eq!(
        load("key: {a: 1, b: 2}").expect("valid"),
        map(vec![(
            "key",
            map(vec![("a", Value::Int(1)), ("b", Value::Int(2))])
        )])
    );
}

#[test]
fn single_scalar_document()
{
    assert_eq!(load("hello").expect("valid"), s("hello"));
}

#[test]
fn empty_input_is_no_documents()
{
    assert_eq!(load("").expect("valid"), seq(vec![]));
    assert_eq!(load_all("").expect("valid"), vec![]);
}

#[test]
fn plain_scalar_coercions()
{
    for (source, expected) in vec![
        ("1", Value::Int(1)),
        ("+5", Value::Int(5)),
        ("-5", Value::Int(-5)),
        (".5", Value::Float(0.5)),
        ("1.5e3", Value::Float(1500.0)),
        ("1E3", Value::Float(1000.0)),
        ("TRUE", Value::Bool(true)),
        ("False", Value::Bool(false)),
        ("Null", Value::Null),
        ("~", Value::Null),
        ("5.", s("5.")),
        ("1 2", s("1 2")),
        ("y", s("y")),
        ("hello", s("hello")),
    ]
    {
        assert_eq!(load(source).expect(source), expected, "{:?}", source);
    }
}

#[test]
fn quoted_scalars_stay_strings()
{
    assert_eq!(
        load("a: '1'\nb: \"true\"\nc: ''").expect("valid"),
        map(vec![("a", s("1")), ("b", s("true")), ("c", s(""))])
    );
}

#[test]
fn multi_line_plain_scalar_joins()
{
    assert_eq!(
        load("a: some\n  continued value").expect("valid"),
        map(vec![("a", s("some continued value"))])
    );
}

#[test]
fn value_at_key_indent_belongs_to_key()
{
    assert_eq!(
        load("a:\nb").expect("valid"),
        map(vec![("a", s("b"))])
    );
}

#[test]
fn nested_block_mapping()
{
    assert_eq!(
        load("a:\n  b: 1\n  c: 2\nd: 3").expect("valid"),
        map(vec![
            ("a", map(vec![("b", Value::Int(1)), ("c", Value::Int(2))])),
            ("d", Value::Int(3)),
        ])
    );
}

#[test]
fn sequence_as_mapping_value()
{
    assert_eq!(
        load("a:\n- 1\n- 2").expect("valid"),
        map(vec![("a", seq(vec![Value::Int(1), Value::Int(2)]))])
    );
}

#[test]
fn sequence_of_mappings()
{
    assert_eq!(
        load("- a: 1\n  b: 2\n- a: 3").expect("valid"),
        seq(vec![
            map(vec![("a", Value::Int(1)), ("b", Value::Int(2))]),
            map(vec![("a", Value::Int(3))]),
        ])
    );
}

#[test]
fn flow_collections_nested_in_block()
{
    assert_eq!(
        load("- [1, 2]\n- {x: 1}").expect("valid"),
        seq(vec![
            seq(vec![Value::Int(1), Value::Int(2)]),
            map(vec![("x", Value::Int(1))]),
        ])
    );
}

#[test]
fn duplicate_keys_last_write_wins()
{
    let value = load("a: 1\nb: 2\na: 3").expect("valid");

    assert_eq!(
        value,
        map(vec![("a", Value::Int(3)), ("b", Value::Int(2))])
    );

    // The key appears exactly once
    let mapping = value.as_map().expect("a mapping");
    assert_eq!(mapping.len(), 2);
}

#[test]
fn key_without_value_is_null()
{
    assert_eq!(
        load("a:\nb: 1").expect("valid"),
        map(vec![("a", Value::Null), ("b", Value::Int(1))])
    );
}

#[test]
fn trailing_open_collections_are_closed()
{
    // End of stream with open nodes is not an error
    assert_eq!(
        load("a: [1, 2").expect("valid"),
        map(vec![("a", seq(vec![Value::Int(1), Value::Int(2)]))])
    );
}

#[test]
fn self_representing_scalars_round_trip()
{
    assert_eq!(
        load("- 1\n- true\n- x").expect("valid"),
        seq(vec![Value::Int(1), Value::Bool(true), s("x")])
    );
}

#[test]
fn load_path_reads_files()
{
    let path = std::env::temp_dir().join("yamlet-load-path-test.yaml");

    std::fs::write(&path, "a: 1\n").expect("temp file is writable");

    let value = crate::load_path(&path).expect("valid");
    let _ = std::fs::remove_file(&path);

    assert_eq!(value, map(vec![("a", Value::Int(1))]));
}

#[test]
fn load_path_surfaces_io_errors()
{
    let error = crate::load_path("/definitely/not/a/real/path.yaml")
        .expect_err("a missing file must error");

    assert_eq!(error.line(), None);
}

#[test]
fn scan_error_carries_position()
{
    let error = load("a: 'x").expect_err("a runaway string must fail the load");

    assert_eq!(
        error.to_string(),
        "Unexpected end, runaway string at line 1?, line 1 column 4"
    );
}

#[test]
fn flow_ender_error_carries_position()
{
    let error = load("a: ]").expect_err("an unmatched ender must fail the load");

    assert_eq!(
        error.to_string(),
        "']' without corresponding opener, line 1 column 5"
    );
}
