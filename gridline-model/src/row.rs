use crate::schema::Schema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use uuid::Uuid;

/// Whether a row has been confirmed by the remote store.
///
/// Locally created rows are inserted into the collection optimistically,
/// before the server has assigned them a real id. The status tags them
/// explicitly so reconciliation and rollback match on the tag rather
/// than on an id-prefix convention.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RowStatus {
    /// The row exists on the remote store.
    #[default]
    Confirmed,
    /// The row only exists locally, under the given temporary id.
    Pending(String),
}

/// One record of the managed collection.
///
/// An open, ordered mapping from column key to JSON value, with the
/// reserved key `id` identifying the row. Rows round-trip through the
/// remote endpoints as plain JSON objects; the status tag is local-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    #[serde(flatten)]
    values: Map<String, Value>,
    #[serde(skip)]
    status: RowStatus,
}

impl Row {
    /// Creates a confirmed row from a value map.
    pub fn new(values: Map<String, Value>) -> Self {
        Self {
            values,
            status: RowStatus::Confirmed,
        }
    }

    /// Builds a pending row from schema defaults: each field starts at
    /// its `default_value` (else null), and the reserved `id` key holds
    /// a generated temporary id.
    pub fn from_defaults(schema: &Schema) -> Self {
        let mut values = Map::new();
        for field in schema.fields() {
            let value = field.default_value.clone().unwrap_or(Value::Null);
            values.insert(field.key.clone(), value);
        }
        let temp_id = format!("temp-{}", Uuid::new_v4());
        values.insert("id".to_string(), Value::String(temp_id.clone()));
        Self {
            values,
            status: RowStatus::Pending(temp_id),
        }
    }

    /// The row's identifier value, if present.
    pub fn id(&self) -> Option<&Value> {
        self.values.get("id")
    }

    /// The local status tag.
    pub fn status(&self) -> &RowStatus {
        &self.status
    }

    /// Whether this row is awaiting remote confirmation.
    pub fn is_pending(&self) -> bool {
        matches!(self.status, RowStatus::Pending(_))
    }

    /// The temporary id, when pending.
    pub fn temp_id(&self) -> Option<&str> {
        match &self.status {
            RowStatus::Pending(id) => Some(id),
            RowStatus::Confirmed => None,
        }
    }

    /// Gets a column value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Sets a column value.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    /// All column keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// The underlying value map.
    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    /// A copy of this row with the reserved `id` key removed, for
    /// submission to the create endpoint.
    pub fn without_id(&self) -> Self {
        let mut values = self.values.clone();
        values.remove("id");
        Self {
            values,
            status: RowStatus::Confirmed,
        }
    }

    /// Stringifies a column value for display and substring matching.
    /// Null yields `None`; a null value never matches a filter.
    pub fn display(&self, key: &str) -> Option<Cow<'_, str>> {
        self.values.get(key).and_then(display_value)
    }
}

/// Stringifies a JSON value the way renderers show it: strings as-is,
/// numbers and booleans via their canonical text form, null as absent.
fn display_value(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(Cow::Borrowed(s)),
        Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        other => Some(Cow::Owned(other.to_string())),
    }
}
