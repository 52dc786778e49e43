//! SQLite storage backend for NetworthDB.

use std::{str::FromStr, sync::Mutex};

use rusqlite::{params, Connection};
use rust_decimal::Decimal;

use networthdb_core::{
    models::{NetworthRecord, RecordPage, RecordType, SortColumn},
    store::{RecordStore, StoreError},
};

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Opens the database at `path`, creating the file if absent. The
    /// literal path `":memory:"` opens a transient in-memory database.
    pub fn open(path: &str) -> Result<Self, StoreError> {
        let conn = if path == ":memory:" {
            Connection::open_in_memory()
        } else {
            Connection::open(path)
        }
        .map_err(|e| StoreError::Storage(e.to_string()))?;

        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Creates the records table if it does not exist.
    ///
    /// Idempotent; call once at process startup before serving requests.
    pub fn init_schema(&self) -> Result<(), StoreError> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS networth_records (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                record_type TEXT NOT NULL,
                name TEXT NOT NULL,
                status TEXT NOT NULL,
                amount TEXT NOT NULL,
                notes TEXT
            );
            ",
        )
        .map_err(|e| StoreError::Storage(e.to_string()))?;
        Ok(())
    }
}

fn record_type_to_str(rt: &RecordType) -> &'static str {
    match rt {
        RecordType::Asset => "ASSET",
        RecordType::Liability => "LIABILITY",
    }
}

fn str_to_record_type(s: &str) -> RecordType {
    match s {
        "ASSET" => RecordType::Asset,
        "LIABILITY" => RecordType::Liability,
        _ => RecordType::Asset,
    }
}

// Amounts are stored as exact decimal text; casting keeps comparison
// numeric instead of lexicographic.
fn sort_expr(column: SortColumn) -> &'static str {
    match column {
        SortColumn::Id => "id",
        SortColumn::Type => "record_type",
        SortColumn::Name => "name",
        SortColumn::Status => "status",
        SortColumn::Amount => "CAST(amount AS NUMERIC)",
        SortColumn::Notes => "notes",
    }
}

fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<NetworthRecord> {
    let type_str: String = row.get(1)?;
    let amount_str: String = row.get(4)?;
    Ok(NetworthRecord {
        id: row.get(0)?,
        record_type: str_to_record_type(&type_str),
        name: row.get(2)?,
        status: row.get(3)?,
        amount: Decimal::from_str(&amount_str).unwrap_or(Decimal::ZERO),
        notes: row.get(5)?,
    })
}

const SELECT_RECORDS: &str = "SELECT id, record_type, name, status, amount, notes FROM networth_records";

impl RecordStore for SqliteStore {
    fn list_all(&self) -> Result<Vec<NetworthRecord>, StoreError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare(SELECT_RECORDS)
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        let rows = stmt
            .query_map([], row_to_record)
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::Storage(e.to_string()))
    }

    fn list_page(
        &self,
        page: u64,
        page_size: u64,
        sort_column: &str,
        ascending: bool,
    ) -> Result<RecordPage, StoreError> {
        let sort = SortColumn::resolve(sort_column)?;
        let conn = self.conn.lock().unwrap();

        // Whole-table count, independent of pagination
        let total: u64 = conn
            .query_row("SELECT COUNT(*) FROM networth_records", [], |row| row.get(0))
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        let query = match sort {
            Some(column) => format!(
                "{} ORDER BY {} {} LIMIT ?1 OFFSET ?2",
                SELECT_RECORDS,
                sort_expr(column),
                if ascending { "ASC" } else { "DESC" },
            ),
            None => format!("{} LIMIT ?1 OFFSET ?2", SELECT_RECORDS),
        };

        let offset = page.saturating_sub(1).saturating_mul(page_size);
        let mut stmt = conn
            .prepare(&query)
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        let rows = stmt
            .query_map(params![page_size, offset], row_to_record)
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        let records = rows
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        Ok(RecordPage { records, total })
    }

    fn add(&self, record: NetworthRecord) -> Result<NetworthRecord, StoreError> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO networth_records (record_type, name, status, amount, notes)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                record_type_to_str(&record.record_type),
                record.name,
                record.status,
                record.amount.to_string(),
                record.notes
            ],
        )
        .map_err(|e| StoreError::Storage(e.to_string()))?;

        let id = conn.last_insert_rowid();
        tracing::debug!(id, "record added");
        Ok(NetworthRecord { id, ..record })
    }

    fn update(&self, record: &NetworthRecord) -> Result<(), StoreError> {
        let conn = self.conn.lock().unwrap();
        let changed = conn
            .execute(
                "UPDATE networth_records
                 SET record_type = ?2, name = ?3, status = ?4, amount = ?5, notes = ?6
                 WHERE id = ?1",
                params![
                    record.id,
                    record_type_to_str(&record.record_type),
                    record.name,
                    record.status,
                    record.amount.to_string(),
                    record.notes
                ],
            )
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        if changed == 0 {
            return Err(StoreError::RecordNotFound(record.id));
        }
        tracing::debug!(id = record.id, "record updated");
        Ok(())
    }

    fn delete(&self, id: i64) -> Result<(), StoreError> {
        let conn = self.conn.lock().unwrap();
        let removed = conn
            .execute("DELETE FROM networth_records WHERE id = ?1", params![id])
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        if removed > 0 {
            tracing::debug!(id, "record deleted");
        }
        Ok(())
    }
}
