use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored paste/snippet. Immutable after creation except for
/// `view_count`, which only the atomic view increment touches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Absent means no time-based expiry.
    pub expires_at: Option<DateTime<Utc>>,
    /// Absent means unlimited views.
    pub max_views: Option<u64>,
    pub view_count: u64,
}

/// Normalized creation input produced by the validators: trimmed content
/// plus the derived absolute expiry and view limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecordInput {
    pub content: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub max_views: Option<u64>,
}

/// Body of a successful create: the new id and a shareable link.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
    pub url: String,
}

impl Record {
    pub fn new(id: String, input: NewRecordInput, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            content: input.content,
            created_at,
            expires_at: input.expires_at,
            max_views: input.max_views,
            view_count: 0,
        }
    }

    /// Views left before exhaustion, floored at 0. `None` when unlimited.
    pub fn remaining_views(&self) -> Option<u64> {
        self.max_views.map(|max| max.saturating_sub(self.view_count))
    }
}
