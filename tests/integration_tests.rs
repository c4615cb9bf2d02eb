use raon::{parse, parse_str, scan, Array, Block, Entry, Error, TokenKind, Value, ValueType};

const SAMPLE: &str = r#"name = "hydra"
port = 8080
debug = true
limits = {
  max_conn = 100
  retry = [1, 2, 5]
}
# a line comment
tags = ["a", "b", "c"]
"#;

#[test]
fn test_sample_document() {
    let doc = parse_str(SAMPLE).unwrap();

    let names: Vec<_> = doc.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["name", "port", "debug", "limits", "tags"]);

    assert_eq!(doc.get("name"), Some(&Value::from("hydra")));
    assert_eq!(doc.get("port"), Some(&Value::Int(8080)));
    assert_eq!(doc.get("debug"), Some(&Value::Bool(true)));

    let limits = doc.get("limits").and_then(Value::as_block).unwrap();
    assert_eq!(limits.len(), 2);
    let retry = limits.get("retry").and_then(Value::as_array).unwrap();
    assert_eq!(retry.element_type(), Some(ValueType::Int));
    let retry: Vec<_> = retry.iter().filter_map(Value::as_i64).collect();
    assert_eq!(retry, vec![1, 2, 5]);

    let tags = doc.get("tags").and_then(Value::as_array).unwrap();
    assert_eq!(tags.element_type(), Some(ValueType::String));
    assert_eq!(tags.len(), 3);
}

#[test]
fn test_single_scalar_entries() {
    let cases = [
        ("x = \"text\"", Value::from("text")),
        ("x = \"\"", Value::from("")),
        ("x = 123", Value::Int(123)),
        ("x = -1", Value::Int(-1)),
        ("x = 0", Value::Int(0)),
        ("x = true", Value::Bool(true)),
        ("x = false", Value::Bool(false)),
    ];

    for (source, expected) in cases {
        let doc = parse_str(source).unwrap();
        assert_eq!(doc.len(), 1, "{}", source);
        let entry = &doc.entries()[0];
        assert_eq!(entry.name, "x");
        assert_eq!(entry.value, expected, "{}", source);
    }
}

#[test]
fn test_homogeneous_array() {
    let doc = parse_str("a = [1, 2, 3]").unwrap();
    let a = doc.get("a").and_then(Value::as_array).unwrap();
    assert_eq!(a.len(), 3);
    assert_eq!(a.element_type(), Some(ValueType::Int));
}

#[test]
fn test_heterogeneous_array_fails() {
    let err = parse_str("a = [1, \"x\"]").unwrap_err();
    assert!(matches!(
        err,
        Error::TypeMismatch {
            expected: ValueType::Int,
            found: ValueType::String,
            ..
        }
    ));

    assert!(parse_str("a = [{ x = 1 }, [1]]").is_err());
    assert!(parse_str("a = [true, 1]").is_err());
}

#[test]
fn test_array_elements_across_lines() {
    let doc = parse_str("a = [\n  \"x\"\n  \"y\",\n  \"z\",\n]").unwrap();
    let a = doc.get("a").and_then(Value::as_array).unwrap();
    let items: Vec<_> = a.iter().filter_map(Value::as_str).collect();
    assert_eq!(items, vec!["x", "y", "z"]);
}

#[test]
fn test_nested_structure() {
    let doc = parse_str("outer = {\n  inner = {\n    list = [[1, 2], [3]]\n  }\n}").unwrap();

    let list = Array::from_values(vec![
        Value::Array(Array::from_values(vec![Value::Int(1), Value::Int(2)]).unwrap()),
        Value::Array(Array::from_values(vec![Value::Int(3)]).unwrap()),
    ])
    .unwrap();
    let inner = Block::from_entries(vec![Entry::new("list", Value::Array(list))]);
    let outer = Block::from_entries(vec![Entry::new("inner", Value::Block(inner))]);
    let expected = Block::from_entries(vec![Entry::new("outer", Value::Block(outer))]);

    assert_eq!(doc, expected);
}

#[test]
fn test_separators_are_interchangeable() {
    let with_comma = parse_str("a = 1, b = 2").unwrap();
    let with_newline = parse_str("a = 1\nb = 2").unwrap();
    assert_eq!(with_comma.len(), 2);
    assert_eq!(with_comma, with_newline);

    let in_block = parse_str("c = { a = 1, b = 2 }").unwrap();
    let in_block_lines = parse_str("c = {\na = 1\nb = 2\n}").unwrap();
    assert_eq!(in_block, in_block_lines);
}

#[test]
fn test_comments_are_transparent() {
    let plain = parse_str("a = 1\nb = 2").unwrap();
    let commented = parse_str("a = 1\n# comment\nb = 2").unwrap();
    assert_eq!(plain.len(), 2);
    assert_eq!(commented, plain);

    let trailing = parse_str("a = 1 # one\nb = 2 # two").unwrap();
    assert_eq!(trailing, plain);

    let tokens = scan("# comment").unwrap();
    assert!(tokens.is_empty());
}

#[test]
fn test_hash_inside_string_is_not_a_comment() {
    let doc = parse_str("color = \"#ff0000\"").unwrap();
    assert_eq!(doc.get("color").and_then(Value::as_str), Some("#ff0000"));
}

#[test]
fn test_duplicate_fields_are_kept_in_order() {
    let doc = parse_str("a = 1\nb = 2\na = 3").unwrap();
    let names: Vec<_> = doc.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "a"]);
    let values: Vec<_> = doc.get_all("a").filter_map(Value::as_i64).collect();
    assert_eq!(values, vec![1, 3]);
}

#[test]
fn test_malformed_input_fails_closed() {
    assert!(matches!(parse_str("x = \"abc"), Err(Error::Lex { .. })));
    assert!(matches!(parse_str("x = {"), Err(Error::UnexpectedEof { .. })));
    assert!(matches!(parse_str("x = 1; y = 2"), Err(Error::Lex { .. })));
    assert!(matches!(parse_str("x = ["), Err(Error::UnexpectedEof { .. })));
    assert!(matches!(parse_str("x = { y = 1 ]"), Err(Error::Syntax { .. })));
    assert!(matches!(parse_str("x"), Err(Error::UnexpectedEof { .. })));
    assert!(matches!(parse_str("= 1"), Err(Error::Syntax { .. })));
}

#[test]
fn test_error_after_valid_entries_returns_nothing() {
    let result = parse_str("a = 1\nb = 2\nc = [1, false]");
    assert!(result.is_err());
}

#[test]
fn test_document_outlives_tokens() {
    let tokens = scan("name = \"hydra\"").unwrap();
    let doc = parse(&tokens).unwrap();
    drop(tokens);
    assert_eq!(doc.get("name").and_then(Value::as_str), Some("hydra"));
}

#[test]
fn test_crlf_line_endings() {
    let doc = parse_str("a = 1\r\nb = 2\r\n").unwrap();
    assert_eq!(doc, parse_str("a = 1\nb = 2").unwrap());
}

#[test]
fn test_token_stream_shape() {
    let tokens = scan("a = [1]\n").unwrap();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Field("a".into()),
            TokenKind::Equals,
            TokenKind::ArrayOpen,
            TokenKind::Int(1),
            TokenKind::ArrayClose,
            TokenKind::Newline,
        ]
    );
}

#[test]
fn test_error_messages_include_position() {
    let err = parse_str("a = 1\nb = [1, \"x\"]").unwrap_err();
    assert_eq!(err.position(), Some((2, 9)));
    assert!(err.to_string().contains("line 2, column 9"));
}
