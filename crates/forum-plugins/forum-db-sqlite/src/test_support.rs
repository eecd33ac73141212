//! Table helpers for adapter tests.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::{Database, DatabaseConfig};

pub(crate) async fn memory_database() -> Database {
    Database::connect(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    })
    .await
    .expect("in-memory database opens")
}

pub(crate) fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

pub(crate) async fn add_user(pool: &SqlitePool, id: &str, username: &str) {
    sqlx::query("INSERT INTO users (id, username) VALUES (?, ?)")
        .bind(id)
        .bind(username)
        .execute(pool)
        .await
        .expect("insert user");
}

pub(crate) async fn add_thread(pool: &SqlitePool, id: &str, owner: &str, date: DateTime<Utc>) {
    sqlx::query("INSERT INTO threads (id, title, body, owner, date) VALUES (?, ?, ?, ?, ?)")
        .bind(id)
        .bind("sebuah thread")
        .bind("sebuah body thread")
        .bind(owner)
        .bind(date)
        .execute(pool)
        .await
        .expect("insert thread");
}

pub(crate) struct CommentRow<'a> {
    pub id: &'a str,
    pub thread_id: &'a str,
    pub owner: &'a str,
    pub content: &'a str,
    pub date: DateTime<Utc>,
    pub is_delete: bool,
}

pub(crate) async fn add_comment(pool: &SqlitePool, row: CommentRow<'_>) {
    sqlx::query(
        "INSERT INTO comments (id, content, owner, thread_id, date, is_delete) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(row.id)
    .bind(row.content)
    .bind(row.owner)
    .bind(row.thread_id)
    .bind(row.date)
    .bind(row.is_delete)
    .execute(pool)
    .await
    .expect("insert comment");
}

/// `(content, owner, thread_id, is_delete)` of a stored comment.
pub(crate) async fn find_comment(
    pool: &SqlitePool,
    id: &str,
) -> Option<(String, String, String, bool)> {
    sqlx::query_as("SELECT content, owner, thread_id, is_delete FROM comments WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
        .expect("select comment")
}

pub(crate) async fn count_comments(pool: &SqlitePool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM comments")
        .fetch_one(pool)
        .await
        .expect("count comments");
    count
}
