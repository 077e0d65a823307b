//! Shared helpers for HTTP integration tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use jazzkeys::api::{build_app, AppState};
use jazzkeys::db::{init_db, DocumentStore};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::time::Duration;
use tempfile::TempDir;
use tower::ServiceExt;

/// A router over a fresh database, plus the temp dir keeping it alive.
pub struct TestApp {
    pub router: Router,
    pub store: Option<DocumentStore>,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.send(Request::post(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, json: &str) -> (StatusCode, serde_json::Value) {
        self.send(
            Request::post(uri)
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Sends a request and parses the body as JSON (`Null` if it is not JSON).
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
        (status, json)
    }
}

/// App backed by an empty, working database.
pub async fn test_app() -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let url = format!("sqlite:{}", temp_dir.path().join("api.db").display());
    let store = init_db(&url).await.unwrap();

    TestApp {
        router: build_app(AppState::new(Some(store.clone()), true)),
        store: Some(store),
        _temp_dir: temp_dir,
    }
}

/// App whose store points at a database that cannot be opened.
pub async fn unreachable_app() -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let options = SqliteConnectOptions::new()
        .filename(temp_dir.path().join("missing").join("api.db"))
        .create_if_missing(false);
    let pool = SqlitePoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .connect_lazy_with(options);
    let store = DocumentStore::new(pool, "api");

    TestApp {
        router: build_app(AppState::new(Some(store.clone()), false)),
        store: Some(store),
        _temp_dir: temp_dir,
    }
}

/// App started without any store.
pub async fn uninitialized_app() -> TestApp {
    TestApp {
        router: build_app(AppState::new(None, false)),
        store: None,
        _temp_dir: TempDir::new().unwrap(),
    }
}
