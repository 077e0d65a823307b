//! Document store on top of a single SQLite table.
//!
//! Every collection shares the `documents` table:
//! ```text
//! documents(id TEXT PRIMARY KEY, collection TEXT, body TEXT)
//! ```
//! `body` holds the record as JSON. Results come back in insertion order.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

use super::{Filter, StoreError};
use crate::models::{Collection, Document, Record};

#[derive(sqlx::FromRow)]
struct DocumentRow {
    id: String,
    body: String,
}

/// Handle to the document store. Cheap to clone; clones share the pool.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    pool: SqlitePool,
    name: String,
}

impl DocumentStore {
    pub fn new(pool: SqlitePool, name: impl Into<String>) -> Self {
        Self {
            pool,
            name: name.into(),
        }
    }

    /// Database name reported by diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Inserts one record into its collection and returns the generated id.
    pub async fn create_document<T: Record>(&self, record: &T) -> Result<String, StoreError> {
        let id = Uuid::new_v4().simple().to_string();
        let body = serde_json::to_string(record)?;

        sqlx::query("INSERT INTO documents (id, collection, body) VALUES (?, ?, ?)")
            .bind(&id)
            .bind(T::COLLECTION.name())
            .bind(&body)
            .execute(&self.pool)
            .await?;

        tracing::debug!(collection = T::COLLECTION.name(), %id, "Inserted document");
        Ok(id)
    }

    /// Returns the records of `T`'s collection matching `filter`.
    ///
    /// A `limit` of 0 means no limit. Stored bodies that no longer decode
    /// as `T` are logged and skipped.
    pub async fn get_documents<T: Record>(
        &self,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<Document<T>>, StoreError> {
        let row_check = filter.needs_row_check();

        let mut qb = QueryBuilder::<Sqlite>::new("SELECT id, body FROM documents WHERE collection = ");
        qb.push_bind(T::COLLECTION.name());
        qb.push(" AND ");
        filter.push_sql(&mut qb);
        qb.push(" ORDER BY rowid");
        if limit > 0 && !row_check {
            qb.push(" LIMIT ");
            qb.push_bind(limit as i64);
        }

        let rows: Vec<DocumentRow> = qb.build_query_as().fetch_all(&self.pool).await?;

        tracing::debug!(
            collection = T::COLLECTION.name(),
            count = rows.len(),
            "Fetched documents"
        );

        let mut docs = Vec::with_capacity(rows.len());
        for row in rows {
            if limit > 0 && docs.len() == limit {
                break;
            }

            let body: serde_json::Value = match serde_json::from_str(&row.body) {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(
                        collection = T::COLLECTION.name(),
                        id = %row.id,
                        "Skipping unreadable document: {}",
                        e
                    );
                    continue;
                }
            };
            if row_check && !filter.matches(&body) {
                continue;
            }

            match serde_json::from_value::<T>(body) {
                Ok(record) => docs.push(Document { id: row.id, record }),
                Err(e) => {
                    tracing::warn!(
                        collection = T::COLLECTION.name(),
                        id = %row.id,
                        "Skipping malformed document: {}",
                        e
                    );
                }
            }
        }

        Ok(docs)
    }

    /// Names of collections that hold at least one document, sorted.
    ///
    /// A `limit` of 0 means no limit.
    pub async fn list_collections(&self, limit: usize) -> Result<Vec<String>, StoreError> {
        let mut qb = QueryBuilder::<Sqlite>::new(
            "SELECT DISTINCT collection FROM documents ORDER BY collection",
        );
        if limit > 0 {
            qb.push(" LIMIT ");
            qb.push_bind(limit as i64);
        }

        let rows: Vec<(String,)> = qb.build_query_as().fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }

    /// Returns true if the collection holds no documents.
    pub async fn is_empty(&self, collection: Collection) -> Result<bool, StoreError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT id FROM documents WHERE collection = ? LIMIT 1")
                .bind(collection.name())
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.is_none())
    }

    /// Closes the pool. Pending queries finish first.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Closed document store '{}'", self.name);
    }
}
