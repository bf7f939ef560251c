//! The remote collection endpoint.
//!
//! [`RemoteStore`] abstracts the five-endpoint HTTP contract so the
//! engine can be driven against any backend; [`HttpRemote`] is the
//! reqwest-backed implementation. All failures are converted to
//! [`EngineError`] at this boundary; nothing propagates uncaught.

use crate::config::TableConfig;
use crate::error::{EngineError, EngineResult};
use async_trait::async_trait;
use gridline_model::{Row, Schema};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// An abstract remote row collection.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetches the column schema.
    async fn fetch_schema(&self) -> EngineResult<Schema>;

    /// Fetches all rows.
    async fn fetch_rows(&self) -> EngineResult<Vec<Row>>;

    /// Creates a row (submitted without an id) and returns the created
    /// row carrying its server-assigned id.
    async fn create(&self, row: &Row) -> EngineResult<Row>;

    /// Replaces the row with the given id and returns the updated row.
    async fn update(&self, id: &Value, row: &Row) -> EngineResult<Row>;

    /// Deletes the row with the given id.
    async fn delete(&self, id: &Value) -> EngineResult<()>;
}

/// HTTP implementation of [`RemoteStore`] against
/// `{base_url}{endpoint}` URLs, with `/{id}` appended for update and
/// delete.
pub struct HttpRemote {
    client: reqwest::Client,
    base_url: String,
    list_endpoint: String,
    create_endpoint: String,
    update_endpoint: String,
    delete_endpoint: String,
    schema_endpoint: String,
}

impl HttpRemote {
    /// Creates a remote from the engine configuration.
    pub fn new(config: &TableConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to create HTTP client");
        Self {
            client,
            base_url: config.base_url.clone(),
            list_endpoint: config.list_endpoint.clone(),
            create_endpoint: config.create_endpoint.clone(),
            update_endpoint: config.update_endpoint.clone(),
            delete_endpoint: config.delete_endpoint.clone(),
            schema_endpoint: config.schema_endpoint.clone(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn url_with_id(&self, endpoint: &str, id: &Value) -> String {
        format!("{}{}/{}", self.base_url, endpoint, id_segment(id))
    }
}

// A string id goes into the path verbatim; any other value uses its JSON
// text form.
fn id_segment(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl RemoteStore for HttpRemote {
    async fn fetch_schema(&self) -> EngineResult<Schema> {
        let url = self.url(&self.schema_endpoint);
        debug!("Fetching schema from {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| EngineError::RemoteRead(format!("schema fetch failed: {e}")))?;
        if !response.status().is_success() {
            return Err(EngineError::RemoteRead(format!(
                "schema fetch failed: HTTP {}",
                response.status()
            )));
        }
        response
            .json()
            .await
            .map_err(|e| EngineError::RemoteRead(format!("failed to parse schema: {e}")))
    }

    async fn fetch_rows(&self) -> EngineResult<Vec<Row>> {
        let url = self.url(&self.list_endpoint);
        debug!("Fetching rows from {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| EngineError::RemoteRead(format!("row fetch failed: {e}")))?;
        if !response.status().is_success() {
            return Err(EngineError::RemoteRead(format!(
                "row fetch failed: HTTP {}",
                response.status()
            )));
        }
        response
            .json()
            .await
            .map_err(|e| EngineError::RemoteRead(format!("failed to parse rows: {e}")))
    }

    async fn create(&self, row: &Row) -> EngineResult<Row> {
        let response = self
            .client
            .post(self.url(&self.create_endpoint))
            .json(row)
            .send()
            .await
            .map_err(|e| EngineError::RemoteWrite(format!("create failed: {e}")))?;
        if !response.status().is_success() {
            return Err(EngineError::RemoteWrite(format!(
                "create failed: HTTP {}",
                response.status()
            )));
        }
        response
            .json()
            .await
            .map_err(|e| EngineError::RemoteWrite(format!("failed to parse created row: {e}")))
    }

    async fn update(&self, id: &Value, row: &Row) -> EngineResult<Row> {
        let response = self
            .client
            .put(self.url_with_id(&self.update_endpoint, id))
            .json(row)
            .send()
            .await
            .map_err(|e| EngineError::RemoteWrite(format!("update failed: {e}")))?;
        if !response.status().is_success() {
            return Err(EngineError::RemoteWrite(format!(
                "update failed: HTTP {}",
                response.status()
            )));
        }
        response
            .json()
            .await
            .map_err(|e| EngineError::RemoteWrite(format!("failed to parse updated row: {e}")))
    }

    async fn delete(&self, id: &Value) -> EngineResult<()> {
        let response = self
            .client
            .delete(self.url_with_id(&self.delete_endpoint, id))
            .send()
            .await
            .map_err(|e| EngineError::RemoteWrite(format!("delete failed: {e}")))?;
        if !response.status().is_success() {
            return Err(EngineError::RemoteWrite(format!(
                "delete failed: HTTP {}",
                response.status()
            )));
        }
        Ok(())
    }
}

/// A mock remote for testing.
pub mod mock {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

    /// An in-memory [`RemoteStore`] with switchable failure modes and
    /// call counters.
    #[derive(Debug, Default)]
    pub struct MockRemote {
        schema: Mutex<Schema>,
        rows: Mutex<Vec<Row>>,
        next_id: AtomicI64,
        fail_reads: AtomicBool,
        fail_writes: AtomicBool,
        create_calls: AtomicUsize,
        update_calls: AtomicUsize,
        delete_calls: AtomicUsize,
    }

    impl MockRemote {
        /// Creates a mock serving the given schema and rows.
        pub fn new(schema: Schema, rows: Vec<Row>) -> Self {
            Self {
                schema: Mutex::new(schema),
                rows: Mutex::new(rows),
                next_id: AtomicI64::new(1000),
                ..Default::default()
            }
        }

        /// Makes every read operation fail.
        pub fn fail_reads(&self, fail: bool) {
            self.fail_reads.store(fail, Ordering::SeqCst);
        }

        /// Makes every write operation fail.
        pub fn fail_writes(&self, fail: bool) {
            self.fail_writes.store(fail, Ordering::SeqCst);
        }

        /// Number of create calls observed.
        pub fn create_calls(&self) -> usize {
            self.create_calls.load(Ordering::SeqCst)
        }

        /// Number of update calls observed.
        pub fn update_calls(&self) -> usize {
            self.update_calls.load(Ordering::SeqCst)
        }

        /// Number of delete calls observed.
        pub fn delete_calls(&self) -> usize {
            self.delete_calls.load(Ordering::SeqCst)
        }

        /// The rows currently held by the mock.
        pub fn rows(&self) -> Vec<Row> {
            self.rows.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RemoteStore for MockRemote {
        async fn fetch_schema(&self) -> EngineResult<Schema> {
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(EngineError::RemoteRead("schema fetch failed".into()));
            }
            Ok(self.schema.lock().unwrap().clone())
        }

        async fn fetch_rows(&self) -> EngineResult<Vec<Row>> {
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(EngineError::RemoteRead("row fetch failed".into()));
            }
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn create(&self, row: &Row) -> EngineResult<Row> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(EngineError::RemoteWrite("create failed".into()));
            }
            let mut created = row.clone();
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            created.set("id", Value::from(id));
            self.rows.lock().unwrap().push(created.clone());
            Ok(created)
        }

        async fn update(&self, id: &Value, row: &Row) -> EngineResult<Row> {
            self.update_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(EngineError::RemoteWrite("update failed".into()));
            }
            let mut rows = self.rows.lock().unwrap();
            match rows.iter_mut().find(|r| r.id() == Some(id)) {
                Some(stored) => {
                    *stored = row.clone();
                    Ok(row.clone())
                }
                None => Err(EngineError::RemoteWrite(format!("no row with id {id}"))),
            }
        }

        async fn delete(&self, id: &Value) -> EngineResult<()> {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(EngineError::RemoteWrite("delete failed".into()));
            }
            self.rows.lock().unwrap().retain(|r| r.id() != Some(id));
            Ok(())
        }
    }
}
