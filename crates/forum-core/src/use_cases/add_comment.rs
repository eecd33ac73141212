use std::sync::Arc;

use serde_json::{json, Value};
use tracing::debug;

use crate::error::Result;
use crate::models::{read_string_fields, AddedComment, NewComment};
use crate::traits::{CommentRepository, ThreadRepository};

pub struct AddCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl AddCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    /// Adds `{threadId, owner, content}` as a comment.
    ///
    /// The thread must exist before the comment is built or stored, so only
    /// `threadId` is read up front; `owner` and `content` are validated by
    /// [`NewComment`].
    pub async fn execute(&self, payload: &Value) -> Result<AddedComment> {
        let [thread_id] = read_string_fields(payload, "ADD_COMMENT_USE_CASE", ["threadId"])?;

        debug!(%thread_id, "verifying thread before adding comment");
        self.thread_repository.verify_thread_exists(&thread_id).await?;

        let new_comment = NewComment::new(&json!({
            "content": payload.get("content"),
            "owner": payload.get("owner"),
            "threadId": thread_id,
        }))?;

        self.comment_repository.add_comment(&new_comment).await
    }
}
