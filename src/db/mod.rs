use sqlx::sqlite::SqlitePool;

use crate::error::AppError;
use crate::models::Competitor;

/// Open the connection pool and make sure the schema exists.
///
/// The SQLite database file starts out empty, so startup creates the
/// competitors table if it is missing.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePool::connect(database_url).await?;
    ensure_schema(&pool).await?;
    Ok(pool)
}

pub(crate) async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS competitors (
               id INTEGER PRIMARY KEY AUTOINCREMENT,
               name TEXT NOT NULL,
               location TEXT NOT NULL
           )"#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Data access for the competitors table, over the shared pool.
///
/// The pool is thread-safe and serializes access to individual
/// connections, so the store needs no locking of its own.
#[derive(Clone)]
pub struct CompetitorStore {
    pool: SqlitePool,
}

impl CompetitorStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // Insert a new competitor and return the generated id.
    // Parameters are always bound, never interpolated into the statement.
    pub async fn insert(&self, name: &str, location: &str) -> Result<i64, AppError> {
        let result = sqlx::query(
            r#"INSERT INTO competitors (name, location) VALUES (?, ?)"#,
        )
        .bind(name)
        .bind(location)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    // Look up a single competitor by id.
    pub async fn get(&self, id: i64) -> Result<Competitor, AppError> {
        sqlx::query_as::<_, Competitor>(
            r#"SELECT id, name, location FROM competitors WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        // Zero rows is a distinct kind so callers can branch on absence.
        .ok_or(AppError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;

    // A single-connection pool, so the schema and every query share the
    // same in-memory database.
    async fn memory_store() -> CompetitorStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("open in-memory database");
        ensure_schema(&pool).await.expect("create schema");
        CompetitorStore::new(pool)
    }

    #[tokio::test]
    async fn insert_then_get_round_trips() {
        let store = memory_store().await;

        let id = store.insert("Ashley", "Las Vegas").await.unwrap();
        let competitor = store.get(id).await.unwrap();

        assert_eq!(competitor.id, id);
        assert_eq!(competitor.name, "Ashley");
        assert_eq!(competitor.location, "Las Vegas");
    }

    #[tokio::test]
    async fn inserts_assign_distinct_ids() {
        let store = memory_store().await;

        let first = store.insert("Ashley", "Las Vegas").await.unwrap();
        let second = store.insert("Jordan", "Phoenix").await.unwrap();

        assert_ne!(first, second);
        assert_eq!(store.get(second).await.unwrap().name, "Jordan");
    }

    #[tokio::test]
    async fn get_missing_id_is_not_found() {
        let store = memory_store().await;

        let err = store.get(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }
}
