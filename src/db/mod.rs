mod filter;
mod store;

pub use filter::Filter;
pub use store::DocumentStore;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// Errors that can occur during document store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Connection or query failure.
    Database(sqlx::Error),
    /// Migration failure at startup.
    Migration(sqlx::migrate::MigrateError),
    /// A record could not be encoded.
    Serialization(serde_json::Error),
    /// I/O error preparing the database location.
    Io(std::io::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Database(e) => write!(f, "Database error: {}", e),
            StoreError::Migration(e) => write!(f, "Migration error: {}", e),
            StoreError::Serialization(e) => write!(f, "Serialization error: {}", e),
            StoreError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Database(e) => Some(e),
            StoreError::Migration(e) => Some(e),
            StoreError::Serialization(e) => Some(e),
            StoreError::Io(e) => Some(e),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Database(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e)
    }
}

/// Open the document store at `database_url` and run migrations.
///
/// For file databases the parent directory is created when missing.
pub async fn init_db(database_url: &str) -> Result<DocumentStore, StoreError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let filename = options.get_filename().to_path_buf();
    if let Some(parent) = filename.parent() {
        if !parent.as_os_str().is_empty() && filename.as_os_str() != ":memory:" {
            std::fs::create_dir_all(parent).map_err(StoreError::Io)?;
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(StoreError::Migration)?;

    let name = filename
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "memory".to_string());

    tracing::info!("Opened document store '{}'", name);

    Ok(DocumentStore::new(pool, name))
}
