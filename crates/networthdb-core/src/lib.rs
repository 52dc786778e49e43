//! Core types and traits for NetworthDB storage backends.
//!
//! This crate provides the `RecordStore` trait and all associated types,
//! enabling pluggable storage implementations in separate crates.

pub mod models;
pub mod store;

// Re-export key types at crate root for convenience
pub use models::{NetworthRecord, RecordPage, RecordType, SortColumn, DEFAULT_STATUS};
pub use store::{RecordStore, StoreError};
