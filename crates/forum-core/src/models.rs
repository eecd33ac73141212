//! # Domain Models
//!
//! Entities are immutable, self-validating values built from raw JSON payloads.
//! Read projections are assembled by repositories and use cases and are never
//! persisted in this shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, Result};

/// Text shown in place of a soft-deleted comment's content.
pub const DELETED_COMMENT_CONTENT: &str = "**komentar telah dihapus**";

fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Reads `fields` from `payload` as strings.
///
/// Presence of every field is checked before any type, so a payload that is
/// both incomplete and mistyped reports `PayloadIncomplete`.
pub(crate) fn read_string_fields<const N: usize>(
    payload: &Value,
    entity: &'static str,
    fields: [&'static str; N],
) -> Result<[String; N]> {
    if let Some(&field) = fields.iter().find(|f| is_missing(payload.get(**f))) {
        return Err(AppError::PayloadIncomplete { entity, field });
    }

    let mut values: [String; N] = std::array::from_fn(|_| String::new());
    for (slot, field) in values.iter_mut().zip(fields) {
        match payload.get(field) {
            Some(Value::String(s)) => slot.clone_from(s),
            _ => return Err(AppError::PayloadTypeMismatch { entity, field }),
        }
    }
    Ok(values)
}

/// A thread as submitted by its creator, before persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewThread {
    pub title: String,
    pub body: String,
    pub owner: String,
}

impl NewThread {
    pub fn new(payload: &Value) -> Result<Self> {
        let [title, body, owner] =
            read_string_fields(payload, "NEW_THREAD", ["title", "body", "owner"])?;
        Ok(Self { title, body, owner })
    }
}

/// The projection handed back once a thread has been stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

impl AddedThread {
    pub fn new(payload: &Value) -> Result<Self> {
        let [id, title, owner] =
            read_string_fields(payload, "ADDED_THREAD", ["id", "title", "owner"])?;
        Ok(Self { id, title, owner })
    }
}

/// A comment as submitted against a thread, before persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub content: String,
    pub owner: String,
    pub thread_id: String,
}

impl NewComment {
    pub fn new(payload: &Value) -> Result<Self> {
        let [content, owner, thread_id] =
            read_string_fields(payload, "NEW_COMMENT", ["content", "owner", "threadId"])?;
        Ok(Self {
            content,
            owner,
            thread_id,
        })
    }
}

/// The projection handed back once a comment has been stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl AddedComment {
    pub fn new(payload: &Value) -> Result<Self> {
        let [id, content, owner] =
            read_string_fields(payload, "ADDED_COMMENT", ["id", "content", "owner"])?;
        Ok(Self { id, content, owner })
    }
}

/// Thread fields plus the creator's username, without comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadDetail {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
}

/// A stored comment joined with its author's username.
///
/// Deleted comments keep their original content here; masking happens in
/// [`StoredComment::into_view`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredComment {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub is_deleted: bool,
}

impl StoredComment {
    /// Drops the deleted flag, replacing the content of a deleted comment
    /// with [`DELETED_COMMENT_CONTENT`].
    pub fn into_view(self) -> CommentView {
        let content = if self.is_deleted {
            DELETED_COMMENT_CONTENT.to_string()
        } else {
            self.content
        };
        CommentView {
            id: self.id,
            username: self.username,
            date: self.date,
            content,
        }
    }
}

/// A comment as shown to readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentView {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
}

/// A thread with its comments in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadDetailView {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
    pub comments: Vec<CommentView>,
}

impl ThreadDetailView {
    pub fn new(thread: ThreadDetail, comments: Vec<CommentView>) -> Self {
        Self {
            id: thread.id,
            title: thread.title,
            body: thread.body,
            date: thread.date,
            username: thread.username,
            comments,
        }
    }
}
