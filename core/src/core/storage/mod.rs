//! Durable key-value storage behind the store.
//!
//! The store persists each collection as one JSON document under a fixed
//! string key. Backends only need to read single entries and to write a batch
//! of entries atomically.

use error::StorageError;

pub(crate) mod db;
pub(crate) mod memory;

pub use db::RedbStorage;
pub use memory::MemoryStorage;

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum StorageError {
        #[error("Database error: {0}")]
        Redb(#[from] redb::DatabaseError),

        #[error("Table error: {0}")]
        TableError(#[from] redb::TableError),

        #[error("Storage error: {0}")]
        StorageError(#[from] redb::StorageError),

        #[error("Transaction error: {0}")]
        TransactionError(#[from] redb::TransactionError),

        #[error("Commit error: {0}")]
        CommitError(#[from] redb::CommitError),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Serialization error: {0}")]
        Json(#[from] serde_json::Error),

        #[error("Write rejected: {0}")]
        WriteRejected(String),
    }
}

/// A string-keyed store of string values.
pub trait Storage {
    /// Returns the value stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes every entry or none of them.
    fn write(&mut self, entries: &[(&str, &str)]) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&mut self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        (**self).write(entries)
    }
}

#[cfg(test)]
mod tests;
