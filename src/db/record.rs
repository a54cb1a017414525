use crate::error::AppError;
use crate::expiry::{self, Availability};
use crate::models::record::Record;
use chrono::{DateTime, Utc};
use sled::Db;
use std::sync::Arc;

/// Outcome of an atomic view attempt.
#[derive(Debug)]
pub enum ViewOutcome {
    /// The record was viewable; carries the post-increment state.
    Viewed(Record),
    /// The record is missing or no longer viewable.
    Unavailable(Availability),
}

pub struct RecordStore {
    tree: sled::Tree,
}

impl RecordStore {
    pub fn new(db: Arc<Db>) -> Result<Self, AppError> {
        let tree = db.open_tree("records")?;
        Ok(Self { tree })
    }

    /// Insert a new record. A single atomic insert: readers either see
    /// the whole record or nothing.
    pub fn create(&self, record: &Record) -> Result<(), AppError> {
        let value = bincode::serialize(record)?;
        self.tree.insert(record.id.as_bytes(), value)?;
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<Option<Record>, AppError> {
        Ok(self
            .tree
            .get(id.as_bytes())?
            .map(|v| bincode::deserialize(&v))
            .transpose()?)
    }

    /// Atomic increment-and-fetch for a view.
    ///
    /// Availability is re-evaluated inside a compare-and-swap loop, so
    /// concurrent viewers each observe a distinct, strictly increasing
    /// post-increment count. The view that reaches `max_views` is itself
    /// counted and returned; the next one fails. A plain read-modify-write
    /// would race here.
    pub fn view(&self, id: &str, now: DateTime<Utc>) -> Result<ViewOutcome, AppError> {
        let key = id.as_bytes();
        loop {
            let Some(current) = self.tree.get(key)? else {
                return Ok(ViewOutcome::Unavailable(Availability::NotFound));
            };

            let mut record: Record = bincode::deserialize(&current)?;
            let availability = expiry::evaluate(Some(&record), now);
            if !availability.is_available() {
                return Ok(ViewOutcome::Unavailable(availability));
            }

            record.view_count += 1;
            let updated = bincode::serialize(&record)?;
            match self
                .tree
                .compare_and_swap(key, Some(current), Some(updated))?
            {
                Ok(()) => return Ok(ViewOutcome::Viewed(record)),
                // Lost the race against another viewer; retry on the new value.
                Err(_) => continue,
            }
        }
    }
}
