//! Generic create/view handlers shared by the paste and snippet APIs.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};
use hyper::HeaderMap;
use serde_json::Value;

use crate::clock;
use crate::db::record::ViewOutcome;
use crate::error::AppError;
use crate::id;
use crate::models::record::{CreatedResponse, Record};
use crate::variant::VariantPolicy;
use crate::AppState;

fn request_host(headers: &HeaderMap) -> &str {
    headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("localhost:3000")
}

/// `POST /api/{pastes,snippets}` - validate, persist, return `{id, url}`.
pub async fn create<V: VariantPolicy>(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let now = state.clock.now();
    let input = V::validate(&body, now).map_err(|err| AppError::Validation(err.to_string()))?;

    let record = Record::new(id::generate_id(), input, now);
    state.db.records.create(&record)?;
    tracing::debug!(id = %record.id, "record created");

    let url = format!(
        "{}://{}{}/{}",
        state.config.link_scheme(),
        request_host(&headers),
        V::LINK_PREFIX,
        record.id
    );
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse { id: record.id, url }),
    ))
}

/// `GET /api/{pastes,snippets}/:id` - evaluate expiry, count the view
/// atomically, return the variant's response shape.
pub async fn view<V: VariantPolicy>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    let now = clock::request_time(&state.clock, state.config.test_mode, &headers);
    match state.db.records.view(&id, now)? {
        ViewOutcome::Viewed(record) => Ok(Json(V::view_body(&record))),
        ViewOutcome::Unavailable(availability) => Err(V::unavailable(availability)),
    }
}
