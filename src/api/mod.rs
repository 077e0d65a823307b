//! HTTP surface of the content API.
//!
//! # Endpoints
//!
//! - `GET /`: liveness message
//! - `GET /test`: database diagnostics, never fails
//! - `POST /seed`: insert starter content into empty collections
//! - `GET /chords?q=`: chords, optionally filtered by name/symbol substring
//! - `GET /progressions`, `GET /lessons`: all records
//! - `POST /favorites`, `GET /favorites/{client_id}`: per-client favorites

mod error;
mod handlers;

pub use error::ApiError;

use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::db::DocumentStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// `None` when the database could not be opened at startup.
    pub store: Option<DocumentStore>,
    /// Whether the connection URL came from `DATABASE_URL`.
    pub database_url_set: bool,
}

impl AppState {
    pub fn new(store: Option<DocumentStore>, database_url_set: bool) -> Self {
        Self {
            store,
            database_url_set,
        }
    }

    pub(crate) fn store(&self) -> Result<&DocumentStore, ApiError> {
        self.store.as_ref().ok_or(ApiError::Unavailable)
    }
}

/// Builds the router with permissive CORS and request tracing.
pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/test", get(handlers::test_database))
        .route("/seed", post(handlers::seed))
        .route("/chords", get(handlers::list_chords))
        .route("/progressions", get(handlers::list_progressions))
        .route("/lessons", get(handlers::list_lessons))
        .route("/favorites", post(handlers::add_favorite))
        .route("/favorites/{client_id}", get(handlers::get_favorites))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}
