//! Availability state machine for stored records.

use crate::models::record::Record;
use chrono::{DateTime, Utc};

/// Outcome of evaluating a record's viewability at a given time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    NotFound,
    TimeExpired,
    ViewsExhausted,
    Available,
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }
}

/// Decide whether a record is still viewable at `now`.
///
/// Check order is a fixed contract: existence, then time expiry, then
/// view expiry. An unknown id never reports as expired, and a record
/// that is both time- and view-expired reports `TimeExpired`.
pub fn evaluate(record: Option<&Record>, now: DateTime<Utc>) -> Availability {
    let Some(record) = record else {
        return Availability::NotFound;
    };

    if let Some(expires_at) = record.expires_at {
        if now > expires_at {
            return Availability::TimeExpired;
        }
    }

    if let Some(max_views) = record.max_views {
        if record.view_count >= max_views {
            return Availability::ViewsExhausted;
        }
    }

    Availability::Available
}
