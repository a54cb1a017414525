//! Storage layer backed by sled.

/// Record storage and the atomic view increment.
pub mod record;

use crate::error::AppError;
use sled::Db;
use std::sync::Arc;

/// Database handle with access to the underlying sled trees.
pub struct Database {
    pub db: Arc<Db>,
    pub records: record::RecordStore,
}

impl Database {
    /// Open (or create) the database at `path`.
    pub fn new(path: &str) -> Result<Self, AppError> {
        let db = Arc::new(sled::open(path)?);
        let records = record::RecordStore::new(db.clone())?;
        Ok(Self { db, records })
    }

    /// Cheap connectivity probe used by the health endpoint.
    pub fn check(&self) -> Result<(), AppError> {
        self.db.size_on_disk()?;
        Ok(())
    }

    /// Flush dirty buffers to disk. Called on shutdown.
    pub fn flush(&self) -> Result<(), AppError> {
        self.db.flush()?;
        Ok(())
    }
}
