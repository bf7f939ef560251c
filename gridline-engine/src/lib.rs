//! Tabular data management engine for Gridline.
//!
//! Maintains a client-side view of rows fetched from a remote collection
//! endpoint, supporting typed filtering, single-column sorting, fixed-size
//! pagination, inline editing with field-level validation, optimistic
//! temporary-row creation, and CRUD synchronization, with mutating actions
//! gated behind an optional access guard.
//!
//! # Components
//!
//! - **Filter**: free-text query evaluation, column-type aware
//! - **Sort**: stable single-column comparator, nulls last
//! - **Page**: 1-based fixed-size slicing
//! - **Session**: the inline-edit state machine and draft coercion
//! - **Remote**: the abstract [`RemoteStore`] seam plus the reqwest-backed
//!   [`HttpRemote`] implementation
//! - **Guard**: secret-gated verification for mutating actions
//! - **Export**: deterministic CSV serialization of the filtered view
//! - **Engine**: [`TableEngine`], the orchestrator owning all state
//!
//! # Data flow
//!
//! Schema + remote rows → filter → sort → paginate → rendered page. Edit
//! actions flow into the session state machine; a committed save or delete
//! goes through the remote store and reconciles the local collection,
//! re-entering the pipeline from the top.
//!
//! # Example
//!
//! ```no_run
//! use gridline_engine::{HttpRemote, TableConfig, TableEngine};
//! use std::sync::Arc;
//!
//! # async fn run() -> gridline_engine::EngineResult<()> {
//! let config = TableConfig {
//!     base_url: "https://api.example.com".to_string(),
//!     ..Default::default()
//! };
//! let remote = Arc::new(HttpRemote::new(&config));
//! let mut engine = TableEngine::new(config, remote);
//! engine.refresh().await?;
//! for row in engine.page_rows() {
//!     println!("{:?}", row.id());
//! }
//! # Ok(())
//! # }
//! ```

pub mod engine;
mod error;
pub mod export;
pub mod filter;
pub mod guard;
pub mod page;
pub mod remote;
pub mod session;
pub mod sort;

mod config;

pub use config::TableConfig;
pub use engine::TableEngine;
pub use error::{EngineError, EngineResult};
pub use filter::NumericQuery;
pub use guard::AccessGuard;
pub use remote::{HttpRemote, RemoteStore};
pub use session::{EditSession, FieldInput};
pub use sort::SortDirection;
