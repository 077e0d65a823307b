use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::error::truncate;
use super::{ApiError, AppState};
use crate::db::Filter;
use crate::models::{Chord, Document, Favorite, Lesson, Progression};
use crate::seed as seeding;

/// Fields searched by `GET /chords?q=`.
const CHORD_SEARCH_FIELDS: [&str; 2] = ["name", "symbol"];

/// Most collection names listed by `GET /test`.
const MAX_DIAGNOSTIC_COLLECTIONS: usize = 10;

#[derive(Serialize)]
pub struct MessageResponse {
    message: &'static str,
}

#[derive(Serialize)]
pub struct StatusResponse {
    status: &'static str,
}

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Master Jazz Pianist API is running",
    })
}

/// Diagnostic report for `GET /test`.
#[derive(Debug, Serialize)]
pub struct DiagnosticResponse {
    backend: &'static str,
    database: String,
    database_url: Option<&'static str>,
    database_name: Option<String>,
    connection_status: &'static str,
    collections: Vec<String>,
}

/// Reports database health. Every failure becomes a status string.
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticResponse> {
    let mut response = DiagnosticResponse {
        backend: "✅ Running",
        database: "❌ Not Available".to_string(),
        database_url: None,
        database_name: None,
        connection_status: "Not Connected",
        collections: Vec::new(),
    };

    let Some(store) = state.store.as_ref() else {
        return Json(response);
    };

    response.database = "✅ Available".to_string();
    response.database_url = Some(if state.database_url_set {
        "✅ Set"
    } else {
        "❌ Not Set"
    });
    response.database_name = Some(store.name().to_string());
    response.connection_status = "Connected";

    match store.list_collections(MAX_DIAGNOSTIC_COLLECTIONS).await {
        Ok(collections) => {
            response.collections = collections;
            response.database = "✅ Connected & Working".to_string();
        }
        Err(e) => {
            tracing::warn!("Diagnostic query failed: {}", e);
            response.database = format!("⚠️  Connected but Error: {}", truncate(&e.to_string(), 50));
        }
    }

    Json(response)
}

pub async fn seed(State(state): State<AppState>) -> Result<Json<StatusResponse>, ApiError> {
    seeding::seed(state.store()?).await?;
    Ok(Json(StatusResponse { status: "ok" }))
}

#[derive(Debug, Deserialize)]
pub struct ChordQuery {
    q: Option<String>,
}

pub async fn list_chords(
    State(state): State<AppState>,
    Query(query): Query<ChordQuery>,
) -> Result<Json<Vec<Document<Chord>>>, ApiError> {
    let filter = match query.q {
        Some(q) if !q.is_empty() => Filter::contains_any(&CHORD_SEARCH_FIELDS, q),
        _ => Filter::All,
    };
    let docs = state.store()?.get_documents(&filter, 0).await?;
    Ok(Json(docs))
}

pub async fn list_progressions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Document<Progression>>>, ApiError> {
    let docs = state.store()?.get_documents(&Filter::All, 0).await?;
    Ok(Json(docs))
}

pub async fn list_lessons(
    State(state): State<AppState>,
) -> Result<Json<Vec<Document<Lesson>>>, ApiError> {
    let docs = state.store()?.get_documents(&Filter::All, 0).await?;
    Ok(Json(docs))
}

pub async fn add_favorite(
    State(state): State<AppState>,
    Json(favorite): Json<Favorite>,
) -> Result<Json<StatusResponse>, ApiError> {
    if favorite.client_id.trim().is_empty() {
        return Err(ApiError::InvalidInput("client_id must not be blank".into()));
    }
    if favorite.reference.trim().is_empty() {
        return Err(ApiError::InvalidInput("ref must not be blank".into()));
    }

    let id = state.store()?.create_document(&favorite).await?;
    tracing::info!(
        client_id = %favorite.client_id,
        kind = %favorite.kind,
        %id,
        "Saved favorite"
    );
    Ok(Json(StatusResponse { status: "saved" }))
}

pub async fn get_favorites(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Result<Json<Vec<Document<Favorite>>>, ApiError> {
    let filter = Filter::eq("client_id", client_id);
    let docs = state.store()?.get_documents(&filter, 0).await?;
    Ok(Json(docs))
}
