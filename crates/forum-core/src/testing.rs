//! Test doubles for the repository contracts.
//!
//! The `Unimplemented*` repositories fail every call with `NotImplemented`;
//! they stand in for an adapter that has not been wired yet. Mocks generated
//! by mockall are re-exported alongside them.

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::{AddedComment, AddedThread, NewComment, NewThread, StoredComment, ThreadDetail};
use crate::traits::{CommentRepository, IdGenerator, ThreadRepository};

pub use crate::traits::{MockCommentRepository, MockThreadRepository};

const THREAD_REPOSITORY: &str = "THREAD_REPOSITORY";
const COMMENT_REPOSITORY: &str = "COMMENT_REPOSITORY";

#[derive(Debug, Default, Clone, Copy)]
pub struct UnimplementedThreadRepository;

#[async_trait]
impl ThreadRepository for UnimplementedThreadRepository {
    async fn add_thread(&self, _new_thread: &NewThread) -> Result<AddedThread> {
        Err(not_implemented(THREAD_REPOSITORY, "add_thread"))
    }

    async fn verify_thread_exists(&self, _thread_id: &str) -> Result<()> {
        Err(not_implemented(THREAD_REPOSITORY, "verify_thread_exists"))
    }

    async fn get_thread_by_id(&self, _thread_id: &str) -> Result<ThreadDetail> {
        Err(not_implemented(THREAD_REPOSITORY, "get_thread_by_id"))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UnimplementedCommentRepository;

#[async_trait]
impl CommentRepository for UnimplementedCommentRepository {
    async fn add_comment(&self, _new_comment: &NewComment) -> Result<AddedComment> {
        Err(not_implemented(COMMENT_REPOSITORY, "add_comment"))
    }

    async fn delete_comment(&self, _comment_id: &str) -> Result<()> {
        Err(not_implemented(COMMENT_REPOSITORY, "delete_comment"))
    }

    async fn verify_comment_owner(&self, _comment_id: &str, _owner: &str) -> Result<()> {
        Err(not_implemented(COMMENT_REPOSITORY, "verify_comment_owner"))
    }

    async fn get_comments_by_thread_id(&self, _thread_id: &str) -> Result<Vec<StoredComment>> {
        Err(not_implemented(COMMENT_REPOSITORY, "get_comments_by_thread_id"))
    }
}

/// Always returns the same suffix, so tests can predict identifiers.
#[derive(Debug, Clone)]
pub struct FixedIdGenerator(pub String);

impl IdGenerator for FixedIdGenerator {
    fn generate(&self) -> String {
        self.0.clone()
    }
}

fn not_implemented(repository: &'static str, method: &'static str) -> AppError {
    AppError::NotImplemented { repository, method }
}
