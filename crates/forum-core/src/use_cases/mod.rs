//! # Use Cases
//!
//! One struct per business transaction. Each holds the repositories it needs
//! and runs its steps strictly in order, stopping at the first failure and
//! returning it unchanged.

mod add_comment;
mod add_thread;
mod delete_comment;
mod get_thread_detail;

pub use add_comment::AddCommentUseCase;
pub use add_thread::AddThreadUseCase;
pub use delete_comment::DeleteCommentUseCase;
pub use get_thread_detail::GetThreadDetailUseCase;
