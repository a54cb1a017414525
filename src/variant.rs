//! Per-variant policy for the two API families.
//!
//! The paste and snippet APIs share one generic create/view handler
//! pair; everything that legitimately differs between them (field
//! names, the required-expiry rule, status-code mapping, and response
//! shape) lives behind this trait.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Value};

use crate::error::AppError;
use crate::expiry::Availability;
use crate::models::record::{NewRecordInput, Record};
use crate::validate::{self, ValidationError};

/// Policy hooks for one API family. Implementors are zero-sized; the
/// handlers are instantiated per variant at the router.
pub trait VariantPolicy: Send + Sync + 'static {
    /// Path prefix for share links (`/p` or `/s`).
    const LINK_PREFIX: &'static str;

    /// Validate and normalize creation input for this variant.
    fn validate(body: &Value, now: DateTime<Utc>) -> Result<NewRecordInput, ValidationError>;

    /// Map a non-viewable evaluation to this variant's wire error.
    fn unavailable(availability: Availability) -> AppError;

    /// Shape the 200 body for a successful (post-increment) view.
    fn view_body(record: &Record) -> Value;
}

/// Scheme A: `/api/pastes`. Expiry inputs are jointly optional and
/// every unavailable reason collapses to a plain 404.
pub struct PasteApi;

/// Scheme B: `/api/snippets`. At least one expiry method is required
/// and expired records answer 410, distinct from 404.
pub struct SnippetApi;

fn iso(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl VariantPolicy for PasteApi {
    const LINK_PREFIX: &'static str = "/p";

    fn validate(body: &Value, now: DateTime<Utc>) -> Result<NewRecordInput, ValidationError> {
        validate::validate_paste_input(body, now)
    }

    // Pastes never admit that an id exists.
    fn unavailable(_availability: Availability) -> AppError {
        AppError::NotFound("Paste not found")
    }

    fn view_body(record: &Record) -> Value {
        json!({
            "content": record.content,
            "remaining_views": record.remaining_views(),
            "expires_at": record.expires_at.map(iso),
        })
    }
}

impl VariantPolicy for SnippetApi {
    const LINK_PREFIX: &'static str = "/s";

    fn validate(body: &Value, now: DateTime<Utc>) -> Result<NewRecordInput, ValidationError> {
        validate::validate_snippet_input(body, now)
    }

    fn unavailable(availability: Availability) -> AppError {
        match availability {
            Availability::NotFound => AppError::NotFound("Snippet not found"),
            _ => AppError::Gone("Snippet has expired"),
        }
    }

    fn view_body(record: &Record) -> Value {
        json!({
            "content": record.content,
            "viewCount": record.view_count,
            "createdAt": iso(record.created_at),
            "expiresAt": record.expires_at.map(iso),
            "maxViews": record.max_views,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    fn record(max_views: Option<u64>, view_count: u64) -> Record {
        let mut record = Record::new(
            "abc".to_string(),
            NewRecordInput {
                content: "hi".to_string(),
                expires_at: None,
                max_views,
            },
            Utc::now(),
        );
        record.view_count = view_count;
        record
    }

    #[test]
    fn paste_collapses_every_unavailable_reason_to_404() {
        for availability in [
            Availability::NotFound,
            Availability::TimeExpired,
            Availability::ViewsExhausted,
        ] {
            let response = PasteApi::unavailable(availability).into_response();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn snippet_distinguishes_missing_from_expired() {
        let missing = SnippetApi::unavailable(Availability::NotFound).into_response();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        for availability in [Availability::TimeExpired, Availability::ViewsExhausted] {
            let gone = SnippetApi::unavailable(availability).into_response();
            assert_eq!(gone.status(), StatusCode::GONE);
        }
    }

    #[test]
    fn paste_body_reports_remaining_views() {
        let body = PasteApi::view_body(&record(Some(3), 1));
        assert_eq!(body["remaining_views"], 2);
        assert_eq!(body["content"], "hi");
        assert!(body["expires_at"].is_null());

        let unlimited = PasteApi::view_body(&record(None, 7));
        assert!(unlimited["remaining_views"].is_null());
    }

    #[test]
    fn snippet_body_reports_raw_counters() {
        let body = SnippetApi::view_body(&record(Some(5), 2));
        assert_eq!(body["viewCount"], 2);
        assert_eq!(body["maxViews"], 5);
        assert!(body["createdAt"].is_string());
        assert!(body["expiresAt"].is_null());
    }
}
