//! The table engine orchestrator.

use crate::config::TableConfig;
use crate::error::{EngineError, EngineResult};
use crate::export;
use crate::filter;
use crate::guard::AccessGuard;
use crate::page;
use crate::remote::RemoteStore;
use crate::session::{self, EditSession, FieldInput};
use crate::sort::{self, SortDirection};
use gridline_model::{Row, Schema};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Owns the collection state and the derived view over it.
///
/// Rows flow through filter, then sort, then pagination; the derived
/// accessors recompute the pipeline from the same inputs every call, so
/// there is no cached view to invalidate. While a load or a remote write
/// is in flight, user-facing actions degrade to silent no-ops rather
/// than queueing up behind it.
pub struct TableEngine {
    config: TableConfig,
    remote: Arc<dyn RemoteStore>,
    schema: Schema,
    rows: Vec<Row>,
    query: String,
    filter_column: Option<String>,
    sort_column: Option<String>,
    sort_direction: SortDirection,
    page_index: usize,
    session: EditSession,
    guard: AccessGuard,
    loading: bool,
}

impl TableEngine {
    /// Creates an engine over the given remote, with no data loaded yet.
    pub fn new(config: TableConfig, remote: Arc<dyn RemoteStore>) -> Self {
        let guard = AccessGuard::new(config.protection_enabled, config.secret.clone());
        Self {
            config,
            remote,
            schema: Schema::default(),
            rows: Vec::new(),
            query: String::new(),
            filter_column: None,
            sort_column: None,
            sort_direction: SortDirection::default(),
            page_index: 1,
            session: EditSession::default(),
            guard,
            loading: false,
        }
    }

    // ── loading ──

    /// Fetches the schema and all rows from the remote store.
    ///
    /// Both are fetched before either is applied: a failed or invalid
    /// fetch leaves the previously loaded schema and rows untouched.
    pub async fn refresh(&mut self) -> EngineResult<()> {
        if self.loading {
            return Ok(());
        }
        self.loading = true;
        let result = self.refresh_inner().await;
        self.loading = false;
        if let Err(e) = &result {
            warn!("Refresh failed: {e}");
        }
        result
    }

    async fn refresh_inner(&mut self) -> EngineResult<()> {
        let schema = self.remote.fetch_schema().await?;
        if let Err(e) = schema.validate() {
            return Err(EngineError::RemoteRead(format!("remote schema is invalid: {e}")));
        }
        let rows = self.remote.fetch_rows().await?;
        info!(fields = schema.len(), rows = rows.len(), "Loaded remote collection");
        self.schema = schema;
        self.rows = rows;
        Ok(())
    }

    // ── view state ──

    /// Sets the filter query and returns to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        if self.loading {
            return;
        }
        self.query = query.into();
        self.page_index = 1;
    }

    /// Restricts filtering to one column (`None` searches every column)
    /// and returns to the first page.
    pub fn set_filter_column(&mut self, column: Option<String>) {
        if self.loading {
            return;
        }
        self.filter_column = column;
        self.page_index = 1;
    }

    /// Sorts by the given column, flipping direction when it is already
    /// the active sort column.
    pub fn toggle_sort(&mut self, column: impl Into<String>) {
        if self.loading {
            return;
        }
        let column = column.into();
        if self.sort_column.as_deref() == Some(column.as_str()) {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_column = Some(column);
            self.sort_direction = SortDirection::Ascending;
        }
    }

    /// Moves to a 1-based page. Out-of-range targets are ignored.
    pub fn set_page(&mut self, page_index: usize) {
        if self.loading {
            return;
        }
        if page_index >= 1 && page_index <= self.total_pages() {
            self.page_index = page_index;
        }
    }

    /// Advances one page, if there is one.
    pub fn next_page(&mut self) {
        self.set_page(self.page_index + 1);
    }

    /// Goes back one page, if there is one.
    pub fn prev_page(&mut self) {
        self.set_page(self.page_index.saturating_sub(1));
    }

    // ── derived views ──

    /// The filtered and sorted row sequence, before pagination.
    pub fn filtered_rows(&self) -> Vec<&Row> {
        let mut rows = filter::filter_rows(
            &self.rows,
            &self.query,
            self.filter_column.as_deref(),
            &self.schema,
        );
        sort::sort_rows(&mut rows, self.sort_column.as_deref(), self.sort_direction);
        rows
    }

    /// The rows of the current page.
    pub fn page_rows(&self) -> Vec<&Row> {
        let filtered = self.filtered_rows();
        page::page_slice(&filtered, self.page_index, self.config.page_size).to_vec()
    }

    /// Total pages for the current filtered sequence.
    pub fn total_pages(&self) -> usize {
        page::total_pages(self.filtered_rows().len(), self.config.page_size)
    }

    // ── editing ──

    /// Starts editing the row at the given offset into the current page.
    /// A no-op while loading, while another session is active, or when
    /// the offset is out of range.
    pub fn begin_edit(&mut self, page_offset: usize) -> EngineResult<()> {
        if self.loading || self.session.is_active() {
            return Ok(());
        }
        self.guard.ensure_verified()?;
        let Some(row) = self.page_rows().get(page_offset).map(|r| (*r).clone()) else {
            return Ok(());
        };
        debug!(id = ?row.id(), "Editing row");
        self.session.begin_existing(&row);
        Ok(())
    }

    /// Inserts a pending row built from schema defaults at the head of
    /// the collection and opens a session on it. Idempotent while a
    /// session is already active.
    pub fn begin_new(&mut self) -> EngineResult<()> {
        if self.loading || self.session.is_active() {
            return Ok(());
        }
        self.guard.ensure_verified()?;
        let row = Row::from_defaults(&self.schema);
        self.rows.insert(0, row.clone());
        self.page_index = 1;
        self.session.begin_new(row);
        Ok(())
    }

    /// Applies a field input to the active draft.
    pub fn set_field(&mut self, key: &str, input: FieldInput) {
        if self.loading {
            return;
        }
        self.session.set_field(&self.schema, key, input);
    }

    /// Abandons the active session. A new row's optimistic insert is
    /// rolled back; an existing row is left as it was.
    pub fn cancel_edit(&mut self) {
        if self.loading {
            return;
        }
        if let Some(temp_id) = self.session.draft().and_then(Row::temp_id) {
            let temp_id = temp_id.to_string();
            self.rows.retain(|r| r.temp_id() != Some(temp_id.as_str()));
        }
        self.session.clear();
    }

    /// Validates and commits the active draft to the remote store.
    ///
    /// Required-field validation runs before any network call; a
    /// validation or remote failure keeps the session active so the
    /// draft is not lost. On success the confirmed row replaces its
    /// local counterpart and the session closes.
    pub async fn save(&mut self) -> EngineResult<()> {
        if self.loading || !self.session.is_active() {
            return Ok(());
        }
        self.guard.ensure_verified()?;

        let EditSession::Editing { draft, original, is_new } = self.session.clone() else {
            return Ok(());
        };
        let mut draft = draft;

        let missing = session::missing_required_fields(&self.schema, &draft);
        if !missing.is_empty() {
            return Err(EngineError::Validation(missing));
        }
        session::normalize_selects(&self.schema, &mut draft);
        if let Some(original) = &original {
            session::restore_locked_fields(&self.schema, &mut draft, original);
        }

        self.loading = true;
        let result = if is_new {
            self.commit_create(&draft).await
        } else {
            self.commit_update(&draft, original.as_ref()).await
        };
        self.loading = false;

        match result {
            Ok(()) => {
                self.session.clear();
                Ok(())
            }
            Err(e) => {
                warn!("Save failed: {e}");
                Err(e)
            }
        }
    }

    async fn commit_create(&mut self, draft: &Row) -> EngineResult<()> {
        let created = self.remote.create(&draft.without_id()).await?;
        info!(id = ?created.id(), "Created row");
        if let Some(temp_id) = draft.temp_id() {
            self.rows.retain(|r| r.temp_id() != Some(temp_id));
        }
        self.rows.insert(0, created);
        Ok(())
    }

    async fn commit_update(&mut self, draft: &Row, original: Option<&Row>) -> EngineResult<()> {
        let Some(id) = original.and_then(Row::id).cloned() else {
            return Err(EngineError::RemoteWrite("row has no id to update".to_string()));
        };
        let updated = self.remote.update(&id, draft).await?;
        info!(id = ?updated.id(), "Updated row");
        if let Some(stored) = self.rows.iter_mut().find(|r| r.id() == Some(&id)) {
            *stored = updated;
        }
        Ok(())
    }

    /// Deletes the row at the given offset into the current page. A
    /// no-op while loading or while an edit session is active.
    ///
    /// When the deletion empties the current page, the page index steps
    /// back by one (never below the first page).
    pub async fn delete_row(&mut self, page_offset: usize) -> EngineResult<()> {
        if self.loading || self.session.is_active() {
            return Ok(());
        }
        self.guard.ensure_verified()?;
        let Some(id) = self
            .page_rows()
            .get(page_offset)
            .and_then(|r| r.id())
            .cloned()
        else {
            return Ok(());
        };

        self.loading = true;
        let result = self.remote.delete(&id).await;
        self.loading = false;

        match result {
            Ok(()) => {
                info!(id = ?id, "Deleted row");
                self.rows.retain(|r| r.id() != Some(&id));
                if self.page_index > 1 && self.page_index > self.total_pages() {
                    self.page_index -= 1;
                }
                Ok(())
            }
            Err(e) => {
                warn!("Delete failed: {e}");
                Err(e)
            }
        }
    }

    // ── access guard ──

    /// Attempts to verify the configured secret.
    pub fn unlock(&mut self, input: &str) -> EngineResult<()> {
        self.guard.unlock(input)
    }

    /// Re-locks mutating actions.
    pub fn lock(&mut self) {
        self.guard.lock();
    }

    /// Whether mutating actions are currently allowed.
    pub fn is_unlocked(&self) -> bool {
        self.guard.is_verified()
    }

    // ── export ──

    /// Serializes the current filtered and sorted sequence to CSV bytes,
    /// falling back to the full collection when the filter matches no
    /// row. Empty while a load is in flight.
    pub fn export_csv(&self) -> Vec<u8> {
        if self.loading {
            return Vec::new();
        }
        let filtered = self.filtered_rows();
        if filtered.is_empty() {
            return export::rows_to_csv(&self.rows.iter().collect::<Vec<_>>());
        }
        export::rows_to_csv(&filtered)
    }

    // ── accessors ──

    /// The active schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The full unfiltered collection.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Whether a load or remote write is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether an edit session is active.
    pub fn is_editing(&self) -> bool {
        self.session.is_active()
    }

    /// Whether the active session is creating a new row.
    pub fn is_editing_new(&self) -> bool {
        self.session.is_new()
    }

    /// The active draft, if any.
    pub fn draft(&self) -> Option<&Row> {
        self.session.draft()
    }

    /// The value of one field on the active draft.
    pub fn draft_value(&self, key: &str) -> Option<&Value> {
        self.session.draft().and_then(|d| d.get(key))
    }

    /// The current filter query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The column filtering is restricted to, if any.
    pub fn filter_column(&self) -> Option<&str> {
        self.filter_column.as_deref()
    }

    /// The active sort column, if any.
    pub fn sort_column(&self) -> Option<&str> {
        self.sort_column.as_deref()
    }

    /// The active sort direction.
    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// The current 1-based page index.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// The configuration the engine was created with.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }
}
