use gridline_engine::export::rows_to_csv;
use gridline_model::Row;
use pretty_assertions::assert_eq;
use serde_json::json;

fn rows(values: &[serde_json::Value]) -> Vec<Row> {
    values
        .iter()
        .map(|v| serde_json::from_value(v.clone()).unwrap())
        .collect()
}

fn csv(values: &[serde_json::Value]) -> Vec<u8> {
    let rows = rows(values);
    let refs: Vec<&Row> = rows.iter().collect();
    rows_to_csv(&refs)
}

// ── Format ───────────────────────────────────────────────────────

#[test]
fn empty_input_yields_empty_output() {
    assert_eq!(rows_to_csv(&[]), Vec::<u8>::new());
}

#[test]
fn exact_bytes_for_quoted_values() {
    let out = csv(&[
        json!({"id": 1, "name": "A,B"}),
        json!({"id": 2, "name": "He said \"hi\""}),
    ]);
    let expected: Vec<u8> = [
        b"\xef\xbb\xbf".as_slice(),
        b"\"id\",\"name\"\n\"1\",\"A,B\"\n\"2\",\"He said \"\"hi\"\"\"",
    ]
    .concat();
    assert_eq!(out, expected);
}

#[test]
fn output_starts_with_utf8_bom() {
    let out = csv(&[json!({"id": 1})]);
    assert_eq!(&out[..3], b"\xef\xbb\xbf");
}

#[test]
fn no_trailing_newline() {
    let out = csv(&[json!({"id": 1}), json!({"id": 2})]);
    assert_ne!(out.last(), Some(&b'\n'));
}

#[test]
fn every_value_is_quoted() {
    let out = csv(&[json!({"id": 7, "active": true})]);
    let text = String::from_utf8(out[3..].to_vec()).unwrap();
    assert_eq!(text, "\"id\",\"active\"\n\"7\",\"true\"");
}

// ── Value stringification ────────────────────────────────────────

#[test]
fn null_exports_as_literal_null() {
    let out = csv(&[json!({"id": 1, "note": null})]);
    let text = String::from_utf8(out[3..].to_vec()).unwrap();
    assert_eq!(text, "\"id\",\"note\"\n\"1\",\"null\"");
}

#[test]
fn header_comes_from_first_row_key_order() {
    let out = csv(&[json!({"b": 1, "a": 2})]);
    let text = String::from_utf8(out[3..].to_vec()).unwrap();
    assert!(text.starts_with("\"b\",\"a\"\n"));
}

#[test]
fn newlines_inside_values_stay_quoted() {
    let out = csv(&[json!({"note": "line one\nline two"})]);
    let text = String::from_utf8(out[3..].to_vec()).unwrap();
    assert_eq!(text, "\"note\"\n\"line one\nline two\"");
}
