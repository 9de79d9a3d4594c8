//! SQLite database layer (embedded, no external dependencies)

use crate::error::StorageError;
use cache_demo_types::Item;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;

/// `DB_PATH` value selecting a process-lifetime in-memory database
pub const IN_MEMORY: &str = ":memory:";

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the store at `database_path` and make sure the items table exists.
    pub async fn new(database_path: &str) -> Result<Self, StorageError> {
        if database_path.trim().is_empty() {
            return Err(StorageError::InvalidPath("empty path".to_string()));
        }

        let pool = if database_path == IN_MEMORY {
            tracing::info!("Opening in-memory SQLite database (data is lost on exit)");

            // Each SQLite connection to :memory: is its own database, so the
            // pool holds exactly one connection that never expires.
            let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            tracing::info!("Opening SQLite database at: {}", database_path);

            if let Some(parent) = Path::new(database_path).parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }

            let options = SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal);

            SqlitePoolOptions::new()
                .max_connections(5)
                .connect_with(options)
                .await?
        };

        Self::run_migrations(&pool).await?;
        tracing::info!("Database initialization complete");

        Ok(Self { pool })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS items (
                id INTEGER PRIMARY KEY,
                name TEXT
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Insert the item, replacing any row with the same id.
    pub async fn upsert_item(&self, item: &Item) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT OR REPLACE INTO items (id, name)
            VALUES (?1, ?2)
            "#,
        )
        .bind(item.id)
        .bind(&item.name)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn get_item(&self, id: i64) -> Result<Option<Item>, StorageError> {
        let row: Option<(i64, Option<String>)> = sqlx::query_as(
            r#"
            SELECT id, name FROM items WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(id, name)| Item::new(id, name.unwrap_or_default())))
    }

    /// Close every pooled connection. Later calls fail with `StorageError`.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
