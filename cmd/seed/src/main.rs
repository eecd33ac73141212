//! # forum-seed
//!
//! Composition root for the forum core. Opens the configured database, wires
//! the SQLite repositories into the use cases, seeds a demo thread with two
//! comments (one soft-deleted) and prints the resulting thread detail as JSON.

mod config;

use std::sync::Arc;

use anyhow::Context;
use forum_core::{
    AddCommentUseCase, AddThreadUseCase, AppError, CommentRepository, DeleteCommentUseCase,
    GetThreadDetailUseCase, IdGenerator, ThreadDetailView, ThreadRepository,
};
use forum_db_sqlite::{Database, SqliteCommentRepository, SqliteThreadRepository, UuidIdGenerator};
use serde_json::json;
use sqlx::SqlitePool;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{LogConfig, LogFormat, Settings};

const AUTHOR: (&str, &str) = ("user-dicoding", "dicoding");
const READER: (&str, &str) = ("user-johndoe", "johndoe");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    init_tracing(&settings.log);

    let database = Database::connect(&settings.database).await?;
    let outcome = seed(&database).await;
    database.close().await;

    let detail = outcome.inspect_err(report_failure)?;
    println!("{}", serde_json::to_string_pretty(&detail)?);
    Ok(())
}

fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    match log.format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.init(),
    }
}

/// Rejected input is a warning; wiring and store faults are errors.
fn report_failure(err: &anyhow::Error) {
    match err.downcast_ref::<AppError>() {
        Some(app) if is_rejection(app) => warn!(kind = ?app.kind(), error = %app, "seed rejected"),
        _ => error!(error = %err, "seed failed"),
    }
}

fn is_rejection(err: &AppError) -> bool {
    err.kind().is_client_error()
}

/// Users are not managed by the core, so the seed inserts its own.
async fn ensure_user(pool: &SqlitePool, (id, username): (&str, &str)) -> anyhow::Result<()> {
    sqlx::query("INSERT OR IGNORE INTO users (id, username) VALUES (?, ?)")
        .bind(id)
        .bind(username)
        .execute(pool)
        .await
        .with_context(|| format!("failed to seed user {username}"))?;
    Ok(())
}

async fn seed(database: &Database) -> anyhow::Result<ThreadDetailView> {
    let ids: Arc<dyn IdGenerator> = Arc::new(UuidIdGenerator);
    let threads: Arc<dyn ThreadRepository> = Arc::new(SqliteThreadRepository::new(
        database.pool().clone(),
        ids.clone(),
    ));
    let comments: Arc<dyn CommentRepository> =
        Arc::new(SqliteCommentRepository::new(database.pool().clone(), ids));

    ensure_user(database.pool(), AUTHOR).await?;
    ensure_user(database.pool(), READER).await?;

    let thread = AddThreadUseCase::new(threads.clone())
        .execute(
            &json!({ "title": "sebuah thread", "body": "sebuah body thread" }),
            AUTHOR.0,
        )
        .await?;
    info!(thread_id = %thread.id, "thread created");

    let add_comment = AddCommentUseCase::new(threads.clone(), comments.clone());
    add_comment
        .execute(&json!({ "threadId": thread.id, "owner": READER.0, "content": "sebuah comment" }))
        .await?;
    let regretted = add_comment
        .execute(&json!({ "threadId": thread.id, "owner": AUTHOR.0, "content": "komentar terhapus" }))
        .await?;

    DeleteCommentUseCase::new(threads.clone(), comments.clone())
        .execute(&json!({ "threadId": thread.id, "commentId": regretted.id, "owner": AUTHOR.0 }))
        .await?;
    info!(comment_id = %regretted.id, "comment soft-deleted");

    let detail = GetThreadDetailUseCase::new(threads, comments)
        .execute(&thread.id)
        .await?;
    Ok(detail)
}
