//! # forum-db-sqlite
//!
//! SQLite implementation of the `forum-core` repository contracts.
//!
//! The pool is owned by an explicit [`Database`] handle: open it once at
//! startup, hand `pool()` clones to the repositories, close it on shutdown.

mod comments;
mod threads;

#[cfg(test)]
mod test_support;

use std::str::FromStr;

use anyhow::Context;
use forum_core::traits::IdGenerator;
use serde::Deserialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;
use uuid::Uuid;

pub use comments::SqliteCommentRepository;
pub use threads::SqliteThreadRepository;

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        fullname TEXT NOT NULL DEFAULT ''
    )",
    "CREATE TABLE IF NOT EXISTS threads (
        id TEXT PRIMARY KEY,
        title TEXT NOT NULL,
        body TEXT NOT NULL,
        owner TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        date TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS comments (
        id TEXT PRIMARY KEY,
        content TEXT NOT NULL,
        owner TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        thread_id TEXT NOT NULL REFERENCES threads(id) ON DELETE CASCADE,
        date TEXT NOT NULL,
        is_delete BOOLEAN NOT NULL DEFAULT 0
    )",
    "CREATE INDEX IF NOT EXISTS comments_thread_id_date ON comments (thread_id, date)",
];

/// Connection settings, usually read from the `database` config section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://forum.db".to_string(),
            max_connections: 5,
        }
    }
}

impl DatabaseConfig {
    fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:")
    }
}

/// Owned handle over the SQLite pool.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens the pool and applies the schema. Safe to run against an
    /// existing database file.
    pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .with_context(|| format!("invalid database url `{}`", config.url))?
            .create_if_missing(true)
            .foreign_keys(true);

        // Every connection to `:memory:` is a separate database, so pin one.
        let pool_options = if config.is_in_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .context("failed to open sqlite pool")?;

        let database = Self { pool };
        database.apply_schema().await?;
        info!(url = %config.url, "database ready");
        Ok(database)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("database closed");
    }

    async fn apply_schema(&self) -> anyhow::Result<()> {
        for statement in SCHEMA {
            sqlx::query(*statement)
                .execute(&self.pool)
                .await
                .context("failed to apply schema")?;
        }
        Ok(())
    }
}

/// Time-ordered identifiers (UUID v7).
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::now_v7().to_string()
    }
}
