use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::models::{StoredComment, ThreadDetailView};
use crate::traits::{CommentRepository, ThreadRepository};

/// Public read of a thread and its comments. No ownership check is made.
pub struct GetThreadDetailUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl GetThreadDetailUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    pub async fn execute(&self, thread_id: &str) -> Result<ThreadDetailView> {
        let thread = self.thread_repository.get_thread_by_id(thread_id).await?;
        let comments = self
            .comment_repository
            .get_comments_by_thread_id(thread_id)
            .await?;

        debug!(thread_id, comments = comments.len(), "assembling thread detail");
        Ok(ThreadDetailView::new(
            thread,
            comments.into_iter().map(StoredComment::into_view).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, ErrorKind};
    use crate::models::{CommentView, ThreadDetail, DELETED_COMMENT_CONTENT};
    use crate::traits::{MockCommentRepository, MockThreadRepository};
    use chrono::{DateTime, Utc};

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
    }

    fn thread() -> ThreadDetail {
        ThreadDetail {
            id: "thread-123".into(),
            title: "sebuah thread".into(),
            body: "sebuah body thread".into(),
            date: at("2021-08-08T07:19:09.775Z"),
            username: "dicoding".into(),
        }
    }

    fn stored(id: &str, username: &str, date: &str, content: &str, is_deleted: bool) -> StoredComment {
        StoredComment {
            id: id.into(),
            username: username.into(),
            date: at(date),
            content: content.into(),
            is_deleted,
        }
    }

    #[tokio::test]
    async fn masks_deleted_comments_and_keeps_order() {
        let mut threads = MockThreadRepository::new();
        let mut comments = MockCommentRepository::new();

        threads
            .expect_get_thread_by_id()
            .withf(|thread_id: &str| thread_id == "thread-123")
            .times(1)
            .returning(|_| Ok(thread()));
        comments
            .expect_get_comments_by_thread_id()
            .withf(|thread_id: &str| thread_id == "thread-123")
            .times(1)
            .returning(|_| {
                Ok(vec![
                    stored("comment-123", "johndoe", "2021-08-08T07:22:33.555Z", "a", false),
                    stored("comment-456", "dicoding", "2021-08-08T07:26:21.338Z", "b", true),
                ])
            });

        let use_case = GetThreadDetailUseCase::new(Arc::new(threads), Arc::new(comments));
        let detail = use_case.execute("thread-123").await.unwrap();

        assert_eq!(
            detail,
            ThreadDetailView::new(
                thread(),
                vec![
                    CommentView {
                        id: "comment-123".into(),
                        username: "johndoe".into(),
                        date: at("2021-08-08T07:22:33.555Z"),
                        content: "a".into(),
                    },
                    CommentView {
                        id: "comment-456".into(),
                        username: "dicoding".into(),
                        date: at("2021-08-08T07:26:21.338Z"),
                        content: DELETED_COMMENT_CONTENT.into(),
                    },
                ],
            )
        );
        assert_eq!(detail.comments[1].content, "**komentar telah dihapus**");
    }

    #[tokio::test]
    async fn thread_without_comments_has_empty_list() {
        let mut threads = MockThreadRepository::new();
        let mut comments = MockCommentRepository::new();

        threads.expect_get_thread_by_id().times(1).returning(|_| Ok(thread()));
        comments
            .expect_get_comments_by_thread_id()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let use_case = GetThreadDetailUseCase::new(Arc::new(threads), Arc::new(comments));
        let detail = use_case.execute("thread-123").await.unwrap();

        assert_eq!(detail.id, "thread-123");
        assert_eq!(detail.username, "dicoding");
        assert!(detail.comments.is_empty());
    }

    #[tokio::test]
    async fn missing_thread_skips_comment_lookup() {
        let mut threads = MockThreadRepository::new();
        let mut comments = MockCommentRepository::new();

        threads
            .expect_get_thread_by_id()
            .times(1)
            .returning(|_| Err(AppError::not_found("thread not found")));
        comments.expect_get_comments_by_thread_id().times(0);

        let use_case = GetThreadDetailUseCase::new(Arc::new(threads), Arc::new(comments));
        let err = use_case.execute("thread-xxx").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
