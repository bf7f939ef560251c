use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One option of a `select` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A typed column descriptor.
///
/// `key` is the stable identifier into row objects; `label` is what
/// renderers display. Constraint fields are only meaningful for the
/// matching [`FieldType`] (`options` for select, `min`/`max` for number,
/// `max_length` for string/text) and are ignored otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub key: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    /// Whether the field can be changed in an edit session. Defaults to true.
    #[serde(default = "default_editable")]
    pub editable: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "maxLength")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "defaultValue")]
    pub default_value: Option<Value>,
    /// Optional help text, rendered as a header tooltip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_editable() -> bool {
    true
}

impl Field {
    fn simple(key: &str, label: &str, field_type: FieldType) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            field_type,
            required: false,
            editable: true,
            hidden: false,
            options: Vec::new(),
            min: None,
            max: None,
            max_length: None,
            default_value: None,
            description: None,
        }
    }

    /// Shorthand for a single-line string field.
    pub fn string(key: &str, label: &str) -> Self {
        Self::simple(key, label, FieldType::String)
    }

    /// Shorthand for a numeric field.
    pub fn number(key: &str, label: &str) -> Self {
        Self::simple(key, label, FieldType::Number)
    }

    /// Shorthand for a boolean field.
    pub fn boolean(key: &str, label: &str) -> Self {
        Self::simple(key, label, FieldType::Boolean)
    }

    /// Shorthand for a date field (ISO-8601 string values).
    pub fn date(key: &str, label: &str) -> Self {
        Self::simple(key, label, FieldType::Date)
    }

    /// Shorthand for a select field with fixed options.
    pub fn select(key: &str, label: &str, options: Vec<SelectOption>) -> Self {
        Self {
            options,
            ..Self::simple(key, label, FieldType::Select)
        }
    }

    /// Shorthand for a multi-line text field.
    pub fn text(key: &str, label: &str) -> Self {
        Self::simple(key, label, FieldType::Text)
    }

    /// Marks the field as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the field as read-only in edit sessions.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.editable = false;
        self
    }

    /// Hides the field from renderers (it still exists on rows).
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Sets the value new rows start with.
    #[must_use]
    pub fn with_default(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    /// The display label, falling back to the key when the remote
    /// descriptor carries none.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.key
        } else {
            &self.label
        }
    }

    /// Returns the label of a select option by its value, if any.
    pub fn option_label(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }
}

/// The data type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Date,
    Select,
    Text,
}
