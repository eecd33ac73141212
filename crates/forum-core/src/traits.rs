//! # Core Traits (Ports)
//!
//! Any persistence plugin must implement these traits to back the use cases.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{AddedComment, AddedThread, NewComment, NewThread, StoredComment, ThreadDetail};

/// Persistence contract for threads.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Stores a thread, assigning its identifier and creation date.
    async fn add_thread(&self, new_thread: &NewThread) -> Result<AddedThread>;

    /// Fails with `NotFound` when no thread has this identifier.
    async fn verify_thread_exists(&self, thread_id: &str) -> Result<()>;

    /// Thread fields and the creator's username, excluding comments.
    async fn get_thread_by_id(&self, thread_id: &str) -> Result<ThreadDetail>;
}

/// Persistence contract for comments.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Stores a comment under its thread with the deleted flag cleared.
    async fn add_comment(&self, new_comment: &NewComment) -> Result<AddedComment>;

    /// Soft delete. Rows are never removed and repeating the call is a no-op.
    async fn delete_comment(&self, comment_id: &str) -> Result<()>;

    /// `NotFound` when the comment is absent, `Unauthorized` when `owner`
    /// differs. Existence is checked first.
    async fn verify_comment_owner(&self, comment_id: &str, owner: &str) -> Result<()>;

    /// Every comment of the thread, deleted ones included, oldest first.
    /// Ties keep insertion order. A thread without comments yields an empty vec.
    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<StoredComment>>;
}

/// Produces the unique suffix repositories use for new identifiers.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}
