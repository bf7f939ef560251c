use serde::{Deserialize, Serialize};

/// Configuration for a table engine instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Base URL of the remote collection API.
    pub base_url: String,
    /// Path suffix for listing rows.
    pub list_endpoint: String,
    /// Path suffix for creating a row.
    pub create_endpoint: String,
    /// Path suffix for updating a row (`/{id}` is appended).
    pub update_endpoint: String,
    /// Path suffix for deleting a row (`/{id}` is appended).
    pub delete_endpoint: String,
    /// Path suffix for fetching the schema.
    pub schema_endpoint: String,
    /// Rows per page. Must be positive.
    pub page_size: usize,
    /// Whether mutating actions require secret verification.
    pub protection_enabled: bool,
    /// The secret compared against on unlock.
    pub secret: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            list_endpoint: "/items".to_string(),
            create_endpoint: "/items".to_string(),
            update_endpoint: "/items".to_string(),
            delete_endpoint: "/items".to_string(),
            schema_endpoint: "/schema".to_string(),
            page_size: 10,
            protection_enabled: false,
            secret: String::new(),
        }
    }
}
