use crate::models::{NetworthRecord, RecordPage};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found: {0}")]
    RecordNotFound(i64),
    #[error("invalid sort column: {0}")]
    InvalidSortColumn(String),
    #[error("storage failure: {0}")]
    Storage(String),
}

/// Durable storage and retrieval of net worth records.
///
/// Every mutating operation commits immediately; there is no batching or
/// transaction grouping across calls. Implementations are safe for
/// concurrent callers, with conflict handling left to the underlying
/// engine (concurrent updates to the same id are last-write-wins).
pub trait RecordStore: Send + Sync {
    /// Returns every record, in storage iteration order.
    fn list_all(&self) -> Result<Vec<NetworthRecord>, StoreError>;

    /// Returns one page of records along with the total record count.
    ///
    /// Pages are 1-based: page `p` skips `(p - 1) * page_size` records and
    /// takes `page_size`. When `sort_column` is non-empty the full result
    /// set is ordered by that column before pagination; when empty, storage
    /// default order applies. The returned total always counts the whole
    /// table, regardless of page bounds.
    fn list_page(
        &self,
        page: u64,
        page_size: u64,
        sort_column: &str,
        ascending: bool,
    ) -> Result<RecordPage, StoreError>;

    /// Persists a new record, ignoring any caller-supplied id, and returns
    /// the stored record with its assigned id.
    fn add(&self, record: NetworthRecord) -> Result<NetworthRecord, StoreError>;

    /// Replaces every field of the stored record with `record.id` with the
    /// incoming values. This is a full overwrite, not a partial patch.
    ///
    /// Fails with [`StoreError::RecordNotFound`] when no record with that
    /// id exists at time of update.
    fn update(&self, record: &NetworthRecord) -> Result<(), StoreError>;

    /// Removes the record with the given id. Deleting an absent id is a
    /// no-op, not an error.
    fn delete(&self, id: i64) -> Result<(), StoreError>;
}
