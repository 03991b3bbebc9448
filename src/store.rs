//! SQLite persistence for items
//!
//! This module provides async database operations with:
//! - Connection pooling
//! - Schema creation on first connect
//! - WAL mode for concurrent reads/writes

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::error::StoreError;
use crate::models::Item;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT NOT NULL
)";

/// Item store handle
///
/// Wraps the SQLite connection pool; cloning is cheap and all clones
/// share the same pool. Every operation is a single autocommitted
/// statement, so concurrent edits of the same id are last-writer-wins.
#[derive(Clone)]
pub struct ItemStore {
    pool: SqlitePool,
}

impl ItemStore {
    /// Open the database, creating the file and schema when missing
    ///
    /// # Arguments
    ///
    /// * `database_url` - SQLite database URL (e.g., "sqlite:./data/items.db")
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(30));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await?;

        sqlx::query(SCHEMA).execute(&pool).await?;

        tracing::debug!(database_url, "Item store ready");
        Ok(Self { pool })
    }

    /// All items, ordered by id ascending
    pub async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        let items = sqlx::query_as::<_, Item>(
            "SELECT id, name, description FROM items ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Fetch a single item by id
    pub async fn get(&self, id: i64) -> Result<Item, StoreError> {
        sqlx::query_as::<_, Item>("SELECT id, name, description FROM items WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    /// Insert a new item and return it with its assigned id
    pub async fn create(&self, name: &str, description: &str) -> Result<Item, StoreError> {
        let result = sqlx::query("INSERT INTO items (name, description) VALUES (?, ?)")
            .bind(name)
            .bind(description)
            .execute(&self.pool)
            .await?;

        Ok(Item {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            description: description.to_string(),
        })
    }

    /// Overwrite both fields of an existing item
    pub async fn update(&self, id: i64, name: &str, description: &str) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE items SET name = ?, description = ? WHERE id = ?")
            .bind(name)
            .bind(description)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }

    /// Remove an item permanently
    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }
}
