use crate::field::{Field, FieldType};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Error type for schema validation and lookup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// Two fields share the same key.
    #[error("duplicate field key: {0}")]
    DuplicateKey(String),

    /// A select field has no options to choose from.
    #[error("select field '{0}' has no options")]
    MissingOptions(String),

    /// No field with the given key exists.
    #[error("unknown field: {0}")]
    UnknownField(String),
}

/// An ordered collection of column descriptors.
///
/// Immutable per load cycle: the engine replaces the whole schema when a
/// fresh one is fetched, it never mutates fields in place. Serializes to
/// and from a bare JSON array of field descriptors, which is the shape
/// the remote schema endpoint returns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    /// Creates a schema from a list of fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// All fields in schema order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Fields with `hidden` false, schema order preserved.
    pub fn visible_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.hidden)
    }

    /// Looks up a field by key. Remote schema payloads may lag row data,
    /// so callers treat absence as "skip" rather than an error.
    pub fn field_by_key(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Looks up a field by key, erroring when absent.
    pub fn require_field(&self, key: &str) -> Result<&Field, SchemaError> {
        self.field_by_key(key)
            .ok_or_else(|| SchemaError::UnknownField(key.to_string()))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Checks schema invariants: keys are unique, and every select field
    /// carries at least one option.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.key.as_str()) {
                return Err(SchemaError::DuplicateKey(field.key.clone()));
            }
            if field.field_type == FieldType::Select && field.options.is_empty() {
                return Err(SchemaError::MissingOptions(field.key.clone()));
            }
        }
        Ok(())
    }
}

impl FromIterator<Field> for Schema {
    fn from_iter<T: IntoIterator<Item = Field>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
