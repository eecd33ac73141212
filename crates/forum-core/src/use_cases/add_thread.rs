use std::sync::Arc;

use serde_json::{json, Value};
use tracing::debug;

use crate::error::Result;
use crate::models::{AddedThread, NewThread};
use crate::traits::ThreadRepository;

pub struct AddThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddThreadUseCase {
    pub fn new(thread_repository: Arc<dyn ThreadRepository>) -> Self {
        Self { thread_repository }
    }

    /// Validates `{title, body}` for `owner` and stores the thread.
    pub async fn execute(&self, payload: &Value, owner: &str) -> Result<AddedThread> {
        let new_thread = NewThread::new(&json!({
            "title": payload.get("title"),
            "body": payload.get("body"),
            "owner": owner,
        }))?;

        debug!(owner, "adding thread");
        self.thread_repository.add_thread(&new_thread).await
    }
}
