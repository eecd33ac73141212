use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::models::read_string_fields;
use crate::traits::{CommentRepository, ThreadRepository};

pub struct DeleteCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl DeleteCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    /// Soft-deletes the comment named by `{threadId, commentId, owner}`.
    ///
    /// Gates, in order: thread exists, comment exists and belongs to `owner`.
    pub async fn execute(&self, payload: &Value) -> Result<()> {
        let [thread_id, comment_id, owner] = read_string_fields(
            payload,
            "DELETE_COMMENT_USE_CASE",
            ["threadId", "commentId", "owner"],
        )?;

        self.thread_repository.verify_thread_exists(&thread_id).await?;
        self.comment_repository
            .verify_comment_owner(&comment_id, &owner)
            .await?;

        debug!(%thread_id, %comment_id, "soft-deleting comment");
        self.comment_repository.delete_comment(&comment_id).await
    }
}
