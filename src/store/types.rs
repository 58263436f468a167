use crate::error::LayoutError;
use thiserror::Error;

/// Configuration for [`RecordStore::open`](super::RecordStore::open).
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Name of the redb table holding packed records.
    ///
    /// Readers must open the same table and declare the same field types;
    /// nothing in the stored bytes identifies either.
    pub table_name: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            table_name: "records".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("redb error: {0}")]
    Redb(#[from] redb::Error),
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

impl From<redb::DatabaseError> for StoreError {
    fn from(e: redb::DatabaseError) -> Self {
        StoreError::Redb(e.into())
    }
}

impl From<redb::TransactionError> for StoreError {
    fn from(e: redb::TransactionError) -> Self {
        StoreError::Redb(e.into())
    }
}

impl From<redb::TableError> for StoreError {
    fn from(e: redb::TableError) -> Self {
        StoreError::Redb(e.into())
    }
}

impl From<redb::CommitError> for StoreError {
    fn from(e: redb::CommitError) -> Self {
        StoreError::Redb(e.into())
    }
}

impl From<redb::StorageError> for StoreError {
    fn from(e: redb::StorageError) -> Self {
        StoreError::Redb(e.into())
    }
}
