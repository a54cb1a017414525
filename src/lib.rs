//! HTTP wiring for snipbin (router, shared state, server loop).

/// Injected clock and test-mode time override.
pub mod clock;
/// Environment configuration.
pub mod config;
/// sled-backed record storage.
pub mod db;
/// Error taxonomy and response mapping.
pub mod error;
/// HTML output encoding.
pub mod escape;
/// Availability state machine.
pub mod expiry;
/// HTTP handlers.
pub mod handlers;
/// Random id generation.
pub mod id;
/// Data models.
pub mod models;
/// Creation input validators.
pub mod validate;
/// Paste/snippet variant policies.
pub mod variant;

pub use clock::Clock;
pub use config::Config;
pub use db::Database;
pub use error::AppError;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::future::Future;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use variant::{PasteApi, SnippetApi};

/// Shared state passed to HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub config: Arc<Config>,
    pub clock: Clock,
}

impl AppState {
    /// State with the system clock (production path).
    pub fn new(config: Config, db: Database) -> Self {
        Self::with_clock(config, db, Clock::system())
    }

    /// State with an explicit clock; tests use this to pin "now".
    pub fn with_clock(config: Config, db: Database, clock: Clock) -> Self {
        Self {
            db: Arc::new(db),
            config: Arc::new(config),
            clock,
        }
    }
}

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(tower_http::cors::Any);

    Router::new()
        // Paste API (scheme A)
        .route("/api/pastes", post(handlers::records::create::<PasteApi>))
        .route(
            "/api/pastes/:id",
            get(handlers::records::view::<PasteApi>),
        )
        // Snippet API (scheme B)
        .route(
            "/api/snippets",
            post(handlers::records::create::<SnippetApi>),
        )
        .route(
            "/api/snippets/:id",
            get(handlers::records::view::<SnippetApi>),
        )
        .route("/api/healthz", get(handlers::health::healthz))
        // Rendered paste page
        .route("/p/:id", get(handlers::page::paste_page))
        .with_state(state.clone())
        .layer(
            tower::ServiceBuilder::new()
                .layer(DefaultBodyLimit::max(state.config.max_content_size))
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                )),
        )
}

/// Run the server with graceful shutdown support.
///
/// # Errors
/// Returns any I/O error produced by `axum::serve`.
pub async fn serve_router(
    listener: tokio::net::TcpListener,
    state: AppState,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    let app = create_app(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
}
