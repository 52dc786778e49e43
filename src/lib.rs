//! NetworthDB — embedded storage for personal net worth records.
//!
//! A thin persistence layer over a single table of asset and liability
//! records. The [`RecordStore`] trait defines the operations; the SQLite
//! backend provides durable storage in a single auto-created file, and the
//! in-memory backend is a volatile stand-in with identical semantics.
//!
//! Presentation layers (UI, API, CLI) live outside this crate and drive it
//! through the trait.

pub mod config;
pub mod logging;

// Re-export key types at crate root for convenience
pub use networthdb_core::models::{
    NetworthRecord, RecordPage, RecordType, SortColumn, DEFAULT_STATUS,
};
pub use networthdb_core::store::{RecordStore, StoreError};
pub use networthdb_memory::InMemoryStore;
pub use networthdb_sqlite::SqliteStore;
pub use rust_decimal::Decimal;

use config::Config;

/// Opens the configured database and runs idempotent schema setup.
///
/// This is the startup initialization step: call it once when the process
/// boots and share the returned store from there. Per-call operations never
/// touch the schema.
pub fn open(config: &Config) -> Result<SqliteStore, StoreError> {
    let store = SqliteStore::open(&config.database.path)?;
    store.init_schema()?;
    tracing::info!(path = %config.database.path, "record store ready");
    Ok(store)
}
