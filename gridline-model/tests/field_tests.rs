use gridline_model::{Field, FieldType, SelectOption};
use pretty_assertions::assert_eq;
use serde_json::json;

// ── Shorthand constructors ───────────────────────────────────────

#[test]
fn string_shorthand_sets_type_and_defaults() {
    let f = Field::string("name", "Name");
    assert_eq!(f.key, "name");
    assert_eq!(f.label, "Name");
    assert_eq!(f.field_type, FieldType::String);
    assert!(!f.required);
    assert!(f.editable);
    assert!(!f.hidden);
}

#[test]
fn select_shorthand_carries_options() {
    let f = Field::select(
        "status",
        "Status",
        vec![
            SelectOption::new("open", "Open"),
            SelectOption::new("closed", "Closed"),
        ],
    );
    assert_eq!(f.field_type, FieldType::Select);
    assert_eq!(f.options.len(), 2);
    assert_eq!(f.options[0].value, "open");
}

#[test]
fn builder_modifiers_compose() {
    let f = Field::number("age", "Age").required().read_only();
    assert!(f.required);
    assert!(!f.editable);
}

#[test]
fn with_default_stores_starting_value() {
    let f = Field::boolean("active", "Active").with_default(json!(true));
    assert_eq!(f.default_value, Some(json!(true)));
}

// ── Labels ───────────────────────────────────────────────────────

#[test]
fn display_label_prefers_label() {
    let f = Field::string("email", "E-mail address");
    assert_eq!(f.display_label(), "E-mail address");
}

#[test]
fn display_label_falls_back_to_key() {
    let f = Field::string("email", "");
    assert_eq!(f.display_label(), "email");
}

#[test]
fn option_label_resolves_by_value() {
    let f = Field::select("status", "Status", vec![SelectOption::new("open", "Open")]);
    assert_eq!(f.option_label("open"), Some("Open"));
    assert_eq!(f.option_label("missing"), None);
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn deserializes_remote_descriptor_shape() {
    let f: Field = serde_json::from_value(json!({
        "key": "score",
        "label": "Score",
        "type": "number",
        "required": true,
        "min": 0,
        "max": 100
    }))
    .unwrap();
    assert_eq!(f.field_type, FieldType::Number);
    assert!(f.required);
    assert!(f.editable, "editable defaults to true when omitted");
    assert_eq!(f.min, Some(0.0));
    assert_eq!(f.max, Some(100.0));
}

#[test]
fn deserializes_camel_case_constraint_keys() {
    let f: Field = serde_json::from_value(json!({
        "key": "bio",
        "type": "text",
        "maxLength": 500,
        "defaultValue": "n/a"
    }))
    .unwrap();
    assert_eq!(f.max_length, Some(500));
    assert_eq!(f.default_value, Some(json!("n/a")));
    assert_eq!(f.label, "", "label defaults to empty when omitted");
}

#[test]
fn field_type_uses_snake_case_tags() {
    assert_eq!(serde_json::to_value(FieldType::Select).unwrap(), json!("select"));
    let t: FieldType = serde_json::from_value(json!("boolean")).unwrap();
    assert_eq!(t, FieldType::Boolean);
}

#[test]
fn serialization_omits_empty_constraints() {
    let v = serde_json::to_value(Field::string("name", "Name")).unwrap();
    let obj = v.as_object().unwrap();
    assert!(!obj.contains_key("options"));
    assert!(!obj.contains_key("min"));
    assert!(!obj.contains_key("maxLength"));
    assert!(!obj.contains_key("defaultValue"));
}
