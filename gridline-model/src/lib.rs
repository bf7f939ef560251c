//! Schema and row data model for Gridline.
//!
//! Defines the types every other Gridline component depends on:
//! - [`Field`]: a typed column descriptor (type, constraints, edit flags)
//! - [`Schema`]: an ordered, validated collection of fields
//! - [`Row`]: one record of the managed collection, an open JSON object
//!   keyed by a unique `id`, tagged with a [`RowStatus`]
//!
//! These types carry no I/O; the engine crate owns all state transitions
//! and remote synchronization.

mod field;
mod row;
mod schema;

pub use field::{Field, FieldType, SelectOption};
pub use row::{Row, RowStatus};
pub use schema::{Schema, SchemaError};
