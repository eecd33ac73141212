//! forum/crates/forum-core/src/lib.rs
//!
//! The central domain logic and interface definitions for the forum:
//! entities, repository contracts and the use cases that sequence them.

pub mod error;
pub mod models;
pub mod traits;
pub mod use_cases;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use traits::*;
pub use use_cases::*;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::testing::{UnimplementedCommentRepository, UnimplementedThreadRepository};
    use super::*;

    #[tokio::test]
    async fn unwired_repositories_surface_as_not_implemented() {
        let threads: Arc<dyn ThreadRepository> = Arc::new(UnimplementedThreadRepository);
        let comments: Arc<dyn CommentRepository> = Arc::new(UnimplementedCommentRepository);

        let err = AddCommentUseCase::new(threads.clone(), comments.clone())
            .execute(&json!({ "threadId": "thread-1", "owner": "u1", "content": "hi" }))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotImplemented);

        let err = GetThreadDetailUseCase::new(threads, comments)
            .execute("thread-1")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotImplemented);
    }
}
