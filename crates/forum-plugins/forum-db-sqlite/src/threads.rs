use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use forum_core::error::{AppError, Result};
use forum_core::models::{AddedThread, NewThread, ThreadDetail};
use forum_core::traits::{IdGenerator, ThreadRepository};
use serde_json::json;
use sqlx::sqlite::SqlitePool;
use tracing::debug;

pub struct SqliteThreadRepository {
    pool: SqlitePool,
    id_generator: Arc<dyn IdGenerator>,
}

impl SqliteThreadRepository {
    pub fn new(pool: SqlitePool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[derive(sqlx::FromRow)]
struct ThreadRow {
    id: String,
    title: String,
    body: String,
    date: DateTime<Utc>,
    username: String,
}

impl From<ThreadRow> for ThreadDetail {
    fn from(row: ThreadRow) -> Self {
        ThreadDetail {
            id: row.id,
            title: row.title,
            body: row.body,
            date: row.date,
            username: row.username,
        }
    }
}

#[async_trait]
impl ThreadRepository for SqliteThreadRepository {
    async fn add_thread(&self, new_thread: &NewThread) -> Result<AddedThread> {
        let id = format!("thread-{}", self.id_generator.generate());

        let (id, title, owner): (String, String, String) = sqlx::query_as(
            "INSERT INTO threads (id, title, body, owner, date) VALUES (?, ?, ?, ?, ?)
             RETURNING id, title, owner",
        )
        .bind(&id)
        .bind(&new_thread.title)
        .bind(&new_thread.body)
        .bind(&new_thread.owner)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("failed to insert thread")?;

        debug!(%id, "thread stored");
        AddedThread::new(&json!({ "id": id, "title": title, "owner": owner }))
    }

    async fn verify_thread_exists(&self, thread_id: &str) -> Result<()> {
        sqlx::query("SELECT 1 FROM threads WHERE id = ?")
            .bind(thread_id)
            .fetch_optional(&self.pool)
            .await
            .context("failed to look up thread")?
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("thread not found"))
    }

    async fn get_thread_by_id(&self, thread_id: &str) -> Result<ThreadDetail> {
        let row: Option<ThreadRow> = sqlx::query_as(
            "SELECT t.id, t.title, t.body, t.date, u.username
             FROM threads t
             JOIN users u ON u.id = t.owner
             WHERE t.id = ?",
        )
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await
        .context("failed to load thread")?;

        row.map(ThreadDetail::from)
            .ok_or_else(|| AppError::not_found("thread not found"))
    }
}
