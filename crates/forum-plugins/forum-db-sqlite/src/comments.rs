use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use forum_core::error::{AppError, Result};
use forum_core::models::{AddedComment, NewComment, StoredComment};
use forum_core::traits::{CommentRepository, IdGenerator};
use serde_json::json;
use sqlx::sqlite::SqlitePool;
use tracing::{debug, warn};

pub struct SqliteCommentRepository {
    pool: SqlitePool,
    id_generator: Arc<dyn IdGenerator>,
}

impl SqliteCommentRepository {
    pub fn new(pool: SqlitePool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }

    async fn thread_exists(&self, thread_id: &str) -> Result<bool> {
        let found: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM threads WHERE id = ?")
            .bind(thread_id)
            .fetch_optional(&self.pool)
            .await
            .context("failed to look up thread")?;
        Ok(found.is_some())
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: String,
    username: String,
    date: DateTime<Utc>,
    content: String,
    is_delete: bool,
}

impl From<CommentRow> for StoredComment {
    fn from(row: CommentRow) -> Self {
        StoredComment {
            id: row.id,
            username: row.username,
            date: row.date,
            content: row.content,
            is_deleted: row.is_delete,
        }
    }
}

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    async fn add_comment(&self, new_comment: &NewComment) -> Result<AddedComment> {
        let id = format!("comment-{}", self.id_generator.generate());

        let inserted: std::result::Result<(String, String, String), sqlx::Error> = sqlx::query_as(
            "INSERT INTO comments (id, content, owner, thread_id, date, is_delete)
             VALUES (?, ?, ?, ?, ?, 0)
             RETURNING id, content, owner",
        )
        .bind(&id)
        .bind(&new_comment.content)
        .bind(&new_comment.owner)
        .bind(&new_comment.thread_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await;

        let (id, content, owner) = match inserted {
            Ok(row) => row,
            // Either the thread vanished after the existence check or the
            // owner has no user row; only the former is a lookup failure.
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                if !self.thread_exists(&new_comment.thread_id).await? {
                    warn!(thread_id = %new_comment.thread_id, "comment insert hit a missing thread");
                    return Err(AppError::not_found("thread not found"));
                }
                return Err(anyhow::Error::new(sqlx::Error::Database(db_err))
                    .context("failed to insert comment")
                    .into());
            }
            Err(err) => return Err(anyhow::Error::new(err).context("failed to insert comment").into()),
        };

        debug!(%id, thread_id = %new_comment.thread_id, "comment stored");
        AddedComment::new(&json!({ "id": id, "content": content, "owner": owner }))
    }

    async fn delete_comment(&self, comment_id: &str) -> Result<()> {
        sqlx::query("UPDATE comments SET is_delete = 1 WHERE id = ?")
            .bind(comment_id)
            .execute(&self.pool)
            .await
            .context("failed to soft-delete comment")?;
        Ok(())
    }

    async fn verify_comment_owner(&self, comment_id: &str, owner: &str) -> Result<()> {
        let stored: Option<(String,)> = sqlx::query_as("SELECT owner FROM comments WHERE id = ?")
            .bind(comment_id)
            .fetch_optional(&self.pool)
            .await
            .context("failed to look up comment owner")?;

        let Some((stored_owner,)) = stored else {
            return Err(AppError::not_found("comment not found"));
        };

        if stored_owner != owner {
            warn!(comment_id, owner, "comment owner mismatch");
            return Err(AppError::unauthorized(
                "you are not allowed to access this resource",
            ));
        }
        Ok(())
    }

    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<StoredComment>> {
        let rows: Vec<CommentRow> = sqlx::query_as(
            "SELECT c.id, u.username, c.date, c.content, c.is_delete
             FROM comments c
             JOIN users u ON u.id = c.owner
             WHERE c.thread_id = ?
             ORDER BY c.date ASC, c.rowid ASC",
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .context("failed to load comments")?;

        Ok(rows.into_iter().map(StoredComment::from).collect())
    }
}
