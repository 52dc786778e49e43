use std::fmt::Display;

use prettytable::{row, Table};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// Status assigned to a record when the caller does not set one.
pub const DEFAULT_STATUS: &str = "Active";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RecordType {
    #[default]
    Asset,
    Liability,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Asset => "Asset",
            RecordType::Liability => "Liability",
        }
    }
}

impl Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single asset or liability entry with an amount and metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworthRecord {
    /// Assigned by the store on insert; 0 for records not yet persisted.
    pub id: i64,
    pub record_type: RecordType,
    pub name: String,
    pub status: String,
    pub amount: Decimal,
    pub notes: Option<String>,
}

impl NetworthRecord {
    pub fn new(record_type: RecordType, name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id: 0,
            record_type,
            name: name.into(),
            status: DEFAULT_STATUS.to_string(),
            amount,
            notes: None,
        }
    }
}

impl Default for NetworthRecord {
    fn default() -> Self {
        Self::new(RecordType::default(), String::new(), Decimal::ZERO)
    }
}

/// Columns of the records table that callers may sort by.
///
/// Sort columns arrive as strings from the presentation layer; `resolve`
/// validates them against this whitelist before any query is built, so no
/// caller-supplied name ever reaches the storage engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Id,
    Type,
    Name,
    Status,
    Amount,
    Notes,
}

impl SortColumn {
    /// Maps a caller-supplied column name to a whitelisted column.
    ///
    /// The empty string means "no explicit sort". Names match
    /// case-insensitively; anything else is rejected.
    pub fn resolve(name: &str) -> Result<Option<SortColumn>, StoreError> {
        if name.is_empty() {
            return Ok(None);
        }
        match name.to_ascii_lowercase().as_str() {
            "id" => Ok(Some(SortColumn::Id)),
            "type" | "record_type" => Ok(Some(SortColumn::Type)),
            "name" => Ok(Some(SortColumn::Name)),
            "status" => Ok(Some(SortColumn::Status)),
            "amount" => Ok(Some(SortColumn::Amount)),
            "notes" => Ok(Some(SortColumn::Notes)),
            _ => Err(StoreError::InvalidSortColumn(name.to_string())),
        }
    }
}

/// One page of records plus the count of every record in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordPage {
    pub records: Vec<NetworthRecord>,
    /// Total rows in the table, independent of pagination.
    pub total: u64,
}

impl Display for RecordPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut table = Table::new();
        table.add_row(row!["Id", "Type", "Name", "Status", "Amount", "Notes"]);
        table.add_empty_row();

        for record in &self.records {
            table.add_row(row![
                record.id,
                record.record_type,
                record.name,
                record.status,
                record.amount,
                record.notes.as_deref().unwrap_or("")
            ]);
        }

        write!(f, "\n{}({} of {} records)\n", table, self.records.len(), self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_columns() {
        assert_eq!(SortColumn::resolve("amount").unwrap(), Some(SortColumn::Amount));
        assert_eq!(SortColumn::resolve("Name").unwrap(), Some(SortColumn::Name));
        assert_eq!(SortColumn::resolve("STATUS").unwrap(), Some(SortColumn::Status));
        assert_eq!(SortColumn::resolve("record_type").unwrap(), Some(SortColumn::Type));
    }

    #[test]
    fn test_resolve_empty_means_no_sort() {
        assert_eq!(SortColumn::resolve("").unwrap(), None);
    }

    #[test]
    fn test_resolve_unknown_column_rejected() {
        let err = SortColumn::resolve("amount; DROP TABLE networth_records").unwrap_err();
        assert!(matches!(err, StoreError::InvalidSortColumn(_)));
    }

    #[test]
    fn test_new_record_defaults() {
        let record = NetworthRecord::new(RecordType::Liability, "Mortgage", Decimal::ZERO);
        assert_eq!(record.id, 0);
        assert_eq!(record.status, DEFAULT_STATUS);
        assert_eq!(record.notes, None);
    }
}
