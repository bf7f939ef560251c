//! The inline-edit session state machine.
//!
//! At most one session exists per engine instance. A session buffers
//! field mutations in a draft row; the underlying collection is only
//! touched on a successful save (or, for new rows, by the optimistic
//! insert the engine performs on `begin_new`). Validation runs over the
//! draft data directly; renderers never act as a source of truth.

use gridline_model::{FieldType, Row, Schema};
use serde_json::Value;

/// Raw user input for one field, before type coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    /// Text from an input, textarea, date or select control.
    Text(String),
    /// The state of a checkbox-style control.
    Toggle(bool),
}

/// The edit session: either idle, or holding one in-progress draft.
#[derive(Debug, Clone, Default)]
pub enum EditSession {
    #[default]
    Idle,
    Editing {
        /// The in-progress buffer of edits.
        draft: Row,
        /// The unedited row, kept so locked fields can be restored at
        /// save time. `None` for new rows.
        original: Option<Row>,
        /// Whether this session created an optimistic pending row.
        is_new: bool,
    },
}

impl EditSession {
    /// Whether a session is in progress.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Whether the active session is editing a new (pending) row.
    pub fn is_new(&self) -> bool {
        matches!(self, Self::Editing { is_new: true, .. })
    }

    /// The current draft, if a session is active.
    pub fn draft(&self) -> Option<&Row> {
        match self {
            Self::Editing { draft, .. } => Some(draft),
            Self::Idle => None,
        }
    }

    /// Starts editing an existing row, buffering a copy as the draft.
    pub fn begin_existing(&mut self, row: &Row) {
        *self = Self::Editing {
            draft: row.clone(),
            original: Some(row.clone()),
            is_new: false,
        };
    }

    /// Starts editing a freshly created pending row.
    pub fn begin_new(&mut self, draft: Row) {
        *self = Self::Editing {
            draft,
            original: None,
            is_new: true,
        };
    }

    /// Clears the session back to idle.
    pub fn clear(&mut self) {
        *self = Self::Idle;
    }

    /// Applies a field input to the draft, coercing by the field's type.
    /// Ignored when no session is active, the field is unknown, or the
    /// field is not editable.
    pub fn set_field(&mut self, schema: &Schema, key: &str, input: FieldInput) {
        let Self::Editing { draft, .. } = self else {
            return;
        };
        let Some(field) = schema.field_by_key(key) else {
            return;
        };
        if !field.editable {
            return;
        }
        draft.set(key, coerce_input(field.field_type, input));
    }
}

/// Coerces raw input into the JSON value stored on the draft.
///
/// Numbers parse to an integer or float, with blank (and unparseable)
/// input becoming null; booleans take the toggle state; everything else
/// stores the raw string.
pub fn coerce_input(field_type: FieldType, input: FieldInput) -> Value {
    match (field_type, input) {
        (FieldType::Number, FieldInput::Text(s)) => {
            let text = s.trim();
            if text.is_empty() {
                return Value::Null;
            }
            if let Ok(n) = text.parse::<i64>() {
                return Value::Number(n.into());
            }
            text.parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number)
                .unwrap_or(Value::Null)
        }
        (FieldType::Boolean, FieldInput::Toggle(checked)) => Value::Bool(checked),
        (FieldType::Boolean, FieldInput::Text(s)) => Value::Bool(s == "true"),
        (_, FieldInput::Toggle(checked)) => Value::Bool(checked),
        (_, FieldInput::Text(s)) => Value::String(s),
    }
}

/// Labels of all required, editable fields whose draft value is null or
/// an empty string. A non-empty result aborts a save before any network
/// call is made.
pub fn missing_required_fields(schema: &Schema, draft: &Row) -> Vec<String> {
    schema
        .fields()
        .iter()
        .filter(|field| field.required && field.editable)
        .filter(|field| is_blank(draft.get(&field.key)))
        .map(|field| field.display_label().to_string())
        .collect()
}

/// Normalizes empty-string select values to null, pre-validation and
/// pre-submission.
pub fn normalize_selects(schema: &Schema, draft: &mut Row) {
    for field in schema.fields() {
        if field.field_type != FieldType::Select {
            continue;
        }
        if draft.get(&field.key) == Some(&Value::String(String::new())) {
            draft.set(&field.key, Value::Null);
        }
    }
}

/// Overwrites locked (`editable: false`) draft values with the original
/// row's values, so a locked field can never be altered even if the
/// renderer was bypassed.
pub fn restore_locked_fields(schema: &Schema, draft: &mut Row, original: &Row) {
    for field in schema.fields() {
        if field.editable {
            continue;
        }
        if let Some(value) = original.get(&field.key) {
            draft.set(&field.key, value.clone());
        }
    }
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}
