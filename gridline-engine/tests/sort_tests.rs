use gridline_engine::SortDirection;
use gridline_engine::sort::sort_rows;
use gridline_model::Row;
use pretty_assertions::assert_eq;
use serde_json::json;

fn rows(values: &[serde_json::Value]) -> Vec<Row> {
    values
        .iter()
        .map(|v| serde_json::from_value(v.clone()).unwrap())
        .collect()
}

fn ids(sorted: &[&Row]) -> Vec<i64> {
    sorted.iter().map(|r| r.id().unwrap().as_i64().unwrap()).collect()
}

// ── Basic ordering ───────────────────────────────────────────────

#[test]
fn no_column_keeps_identity_order() {
    let rows = rows(&[json!({"id": 2}), json!({"id": 1})]);
    let mut refs: Vec<&Row> = rows.iter().collect();
    sort_rows(&mut refs, None, SortDirection::Ascending);
    assert_eq!(ids(&refs), vec![2, 1]);
}

#[test]
fn numbers_sort_numerically() {
    let rows = rows(&[
        json!({"id": 1, "age": 10}),
        json!({"id": 2, "age": 2}),
        json!({"id": 3, "age": 30}),
    ]);
    let mut refs: Vec<&Row> = rows.iter().collect();
    sort_rows(&mut refs, Some("age"), SortDirection::Ascending);
    assert_eq!(ids(&refs), vec![2, 1, 3]);
}

#[test]
fn strings_sort_lexicographically() {
    let rows = rows(&[
        json!({"id": 1, "name": "carol"}),
        json!({"id": 2, "name": "alice"}),
        json!({"id": 3, "name": "bob"}),
    ]);
    let mut refs: Vec<&Row> = rows.iter().collect();
    sort_rows(&mut refs, Some("name"), SortDirection::Ascending);
    assert_eq!(ids(&refs), vec![2, 3, 1]);
}

#[test]
fn booleans_sort_false_first() {
    let rows = rows(&[
        json!({"id": 1, "active": true}),
        json!({"id": 2, "active": false}),
    ]);
    let mut refs: Vec<&Row> = rows.iter().collect();
    sort_rows(&mut refs, Some("active"), SortDirection::Ascending);
    assert_eq!(ids(&refs), vec![2, 1]);
}

#[test]
fn descending_reverses_comparisons() {
    let rows = rows(&[
        json!({"id": 1, "age": 10}),
        json!({"id": 2, "age": 30}),
        json!({"id": 3, "age": 20}),
    ]);
    let mut refs: Vec<&Row> = rows.iter().collect();
    sort_rows(&mut refs, Some("age"), SortDirection::Descending);
    assert_eq!(ids(&refs), vec![2, 3, 1]);
}

// ── Nulls last ───────────────────────────────────────────────────

#[test]
fn nulls_sort_last_ascending() {
    let rows = rows(&[
        json!({"id": 1, "age": null}),
        json!({"id": 2, "age": 5}),
        json!({"id": 3}),
        json!({"id": 4, "age": 1}),
    ]);
    let mut refs: Vec<&Row> = rows.iter().collect();
    sort_rows(&mut refs, Some("age"), SortDirection::Ascending);
    assert_eq!(ids(&refs), vec![4, 2, 1, 3]);
}

#[test]
fn nulls_sort_last_descending_too() {
    let rows = rows(&[
        json!({"id": 1, "age": null}),
        json!({"id": 2, "age": 5}),
        json!({"id": 3, "age": 9}),
    ]);
    let mut refs: Vec<&Row> = rows.iter().collect();
    sort_rows(&mut refs, Some("age"), SortDirection::Descending);
    assert_eq!(ids(&refs), vec![3, 2, 1]);
}

// ── Stability ────────────────────────────────────────────────────

#[test]
fn ties_preserve_prior_order() {
    let rows = rows(&[
        json!({"id": 1, "group": "b"}),
        json!({"id": 2, "group": "a"}),
        json!({"id": 3, "group": "b"}),
        json!({"id": 4, "group": "a"}),
    ]);
    let mut refs: Vec<&Row> = rows.iter().collect();
    sort_rows(&mut refs, Some("group"), SortDirection::Ascending);
    assert_eq!(ids(&refs), vec![2, 4, 1, 3]);
}

#[test]
fn direction_flip_helper() {
    assert_eq!(SortDirection::Ascending.flipped(), SortDirection::Descending);
    assert_eq!(SortDirection::Descending.flipped(), SortDirection::Ascending);
}
