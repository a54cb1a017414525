//! Health check handler.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// `GET /api/healthz` - always 200; the `ok` flag reflects store
/// connectivity.
pub async fn healthz(State(state): State<AppState>) -> Json<Value> {
    match state.db.check() {
        Ok(()) => Json(json!({ "ok": true })),
        Err(err) => {
            tracing::error!("Health check failed: {}", err);
            Json(json!({ "ok": false, "error": "Database connection failed" }))
        }
    }
}
