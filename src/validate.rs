//! Pure validators for creation input.
//!
//! Input arrives as loosely-typed JSON so that type mismatches surface
//! as 400 validation errors rather than body-deserialization rejects.
//! Rules run in a fixed order and fail fast on the first violation.

use crate::models::record::NewRecordInput;
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use thiserror::Error;

/// First failing rule for rejected creation input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("content is required and must be a non-empty string")]
    InvalidContent,

    #[error("At least one expiry method (expiresAt or maxViews) is required")]
    MissingExpiry,

    #[error("ttl_seconds must be an integer ≥ 1")]
    InvalidTtl,

    #[error("expiresAt must be a valid ISO-8601 timestamp")]
    InvalidExpiry,

    #[error("expiresAt must be in the future")]
    ExpiryNotFuture,

    #[error("{0} must be an integer ≥ 1")]
    InvalidMaxViews(&'static str),
}

/// Treat JSON `null` the same as an absent field.
fn field<'a>(body: &'a Value, name: &str) -> Option<&'a Value> {
    match body.get(name) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value),
    }
}

fn trimmed_content(body: &Value) -> Result<String, ValidationError> {
    let content = field(body, "content")
        .and_then(Value::as_str)
        .ok_or(ValidationError::InvalidContent)?;
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidContent);
    }
    Ok(trimmed.to_string())
}

fn positive_int(value: &Value) -> Option<u64> {
    value.as_u64().filter(|n| *n >= 1)
}

/// Validate paste creation input: `content`, optional `ttl_seconds`,
/// optional `max_views`. Both expiry inputs may be absent.
pub fn validate_paste_input(
    body: &Value,
    now: DateTime<Utc>,
) -> Result<NewRecordInput, ValidationError> {
    let content = trimmed_content(body)?;

    let expires_at = match field(body, "ttl_seconds") {
        Some(value) => {
            let ttl = value
                .as_i64()
                .filter(|n| *n >= 1)
                .ok_or(ValidationError::InvalidTtl)?;
            // try_seconds + checked add so absurd TTLs fail validation
            // instead of overflowing.
            let at = Duration::try_seconds(ttl)
                .and_then(|d| now.checked_add_signed(d))
                .ok_or(ValidationError::InvalidTtl)?;
            Some(at)
        }
        None => None,
    };

    let max_views = match field(body, "max_views") {
        Some(value) => {
            Some(positive_int(value).ok_or(ValidationError::InvalidMaxViews("max_views"))?)
        }
        None => None,
    };

    Ok(NewRecordInput {
        content,
        expires_at,
        max_views,
    })
}

/// Validate snippet creation input: `content`, `expiresAt` (ISO-8601),
/// `maxViews`. At least one expiry method is required.
pub fn validate_snippet_input(
    body: &Value,
    now: DateTime<Utc>,
) -> Result<NewRecordInput, ValidationError> {
    let content = trimmed_content(body)?;

    let expires_field = field(body, "expiresAt");
    let max_views_field = field(body, "maxViews");
    if expires_field.is_none() && max_views_field.is_none() {
        return Err(ValidationError::MissingExpiry);
    }

    let expires_at = match expires_field {
        Some(value) => {
            let raw = value.as_str().ok_or(ValidationError::InvalidExpiry)?;
            let parsed = DateTime::parse_from_rfc3339(raw)
                .map_err(|_| ValidationError::InvalidExpiry)?
                .with_timezone(&Utc);
            if parsed <= now {
                return Err(ValidationError::ExpiryNotFuture);
            }
            Some(parsed)
        }
        None => None,
    };

    let max_views = match max_views_field {
        Some(value) => {
            Some(positive_int(value).ok_or(ValidationError::InvalidMaxViews("maxViews"))?)
        }
        None => None,
    };

    Ok(NewRecordInput {
        content,
        expires_at,
        max_views,
    })
}
