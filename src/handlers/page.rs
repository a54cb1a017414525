//! Server-rendered paste page.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};
use hyper::HeaderMap;

use crate::clock;
use crate::db::record::ViewOutcome;
use crate::error::AppError;
use crate::escape::escape_html;
use crate::AppState;

/// `GET /p/:id` - mirrors the paste view endpoint (same clock
/// resolution, same atomic increment) but renders HTML. Content is
/// output-encoded so pasted markup stays inert.
pub async fn paste_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<(StatusCode, Html<String>), AppError> {
    let now = clock::request_time(&state.clock, state.config.test_mode, &headers);
    match state.db.records.view(&id, now)? {
        ViewOutcome::Viewed(record) => Ok((
            StatusCode::OK,
            Html(render_paste(&record.id, &record.content)),
        )),
        ViewOutcome::Unavailable(_) => Ok((StatusCode::NOT_FOUND, Html(render_not_found()))),
    }
}

fn render_paste(id: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Paste - {id}</title>
<style>
body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; max-width: 800px; margin: 40px auto; padding: 20px; background: #f5f5f5; }}
.paste-container {{ background: white; border-radius: 8px; padding: 24px; box-shadow: 0 2px 8px rgba(0,0,0,0.1); }}
.paste-content {{ font-family: 'Courier New', monospace; white-space: pre-wrap; word-wrap: break-word; background: #f9f9f9; padding: 16px; border-radius: 4px; border: 1px solid #e0e0e0; }}
</style>
</head>
<body>
<div class="paste-container">
<h1>Paste</h1>
<div class="paste-content">{content}</div>
</div>
</body>
</html>
"#,
        id = escape_html(id),
        content = escape_html(content),
    )
}

fn render_not_found() -> String {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Paste not found</title>
</head>
<body>
<h1>404</h1>
<p>This paste does not exist or is no longer available.</p>
</body>
</html>
"#
    .to_string()
}
