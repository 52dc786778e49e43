//! In-memory storage backend for NetworthDB.
//!
//! Trait-complete but volatile; useful for tests and embedders that need
//! no durability.

use std::{
    cmp::Ordering,
    collections::BTreeMap,
    sync::{
        atomic::{AtomicI64, Ordering as AtomicOrdering},
        RwLock,
    },
};

use networthdb_core::{
    models::{NetworthRecord, RecordPage, SortColumn},
    store::{RecordStore, StoreError},
};

pub struct InMemoryStore {
    records: RwLock<BTreeMap<i64, NetworthRecord>>,
    id_counter: AtomicI64,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            id_counter: AtomicI64::new(1),
        }
    }

    fn next_id(&self) -> i64 {
        self.id_counter.fetch_add(1, AtomicOrdering::SeqCst)
    }
}

// Comparison order matches the SQLite backend: record types sort Asset
// before Liability, absent notes sort before present ones.
fn compare_by(column: SortColumn, a: &NetworthRecord, b: &NetworthRecord) -> Ordering {
    match column {
        SortColumn::Id => a.id.cmp(&b.id),
        SortColumn::Type => a.record_type.as_str().cmp(b.record_type.as_str()),
        SortColumn::Name => a.name.cmp(&b.name),
        SortColumn::Status => a.status.cmp(&b.status),
        SortColumn::Amount => a.amount.cmp(&b.amount),
        SortColumn::Notes => a.notes.cmp(&b.notes),
    }
}

impl RecordStore for InMemoryStore {
    fn list_all(&self) -> Result<Vec<NetworthRecord>, StoreError> {
        Ok(self.records.read().unwrap().values().cloned().collect())
    }

    fn list_page(
        &self,
        page: u64,
        page_size: u64,
        sort_column: &str,
        ascending: bool,
    ) -> Result<RecordPage, StoreError> {
        let sort = SortColumn::resolve(sort_column)?;

        let records = self.records.read().unwrap();
        let total = records.len() as u64;
        let mut all: Vec<NetworthRecord> = records.values().cloned().collect();
        drop(records);

        if let Some(column) = sort {
            all.sort_by(|a, b| {
                let ord = compare_by(column, a, b);
                if ascending {
                    ord
                } else {
                    ord.reverse()
                }
            });
        }

        let offset = page.saturating_sub(1).saturating_mul(page_size);
        let records = all
            .into_iter()
            .skip(offset as usize)
            .take(page_size as usize)
            .collect();

        Ok(RecordPage { records, total })
    }

    fn add(&self, record: NetworthRecord) -> Result<NetworthRecord, StoreError> {
        let id = self.next_id();
        let stored = NetworthRecord { id, ..record };
        self.records.write().unwrap().insert(id, stored.clone());
        tracing::debug!(id, "record added");
        Ok(stored)
    }

    fn update(&self, record: &NetworthRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().unwrap();
        match records.get_mut(&record.id) {
            Some(existing) => {
                *existing = record.clone();
                tracing::debug!(id = record.id, "record updated");
                Ok(())
            }
            None => Err(StoreError::RecordNotFound(record.id)),
        }
    }

    fn delete(&self, id: i64) -> Result<(), StoreError> {
        if self.records.write().unwrap().remove(&id).is_some() {
            tracing::debug!(id, "record deleted");
        }
        Ok(())
    }
}
