//! # AppError
//!
//! Centralized error handling for the forum core.
//! Validation, lookup and ownership failures are classified here; anything the
//! backing store raises beyond that travels as an opaque `Infrastructure` error.

use thiserror::Error;

/// The primary error type for all forum-core operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// A required field is missing from a construction payload.
    #[error("{entity}.NOT_CONTAIN_NEEDED_PROPERTY")]
    PayloadIncomplete {
        entity: &'static str,
        field: &'static str,
    },

    /// A field is present but does not have the expected type.
    #[error("{entity}.NOT_MEET_DATA_TYPE_SPECIFICATION")]
    PayloadTypeMismatch {
        entity: &'static str,
        field: &'static str,
    },

    /// Referenced thread or comment does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The caller does not own the resource it tried to mutate.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// A repository contract was invoked without a concrete adapter behind it.
    #[error("{repository}.METHOD_NOT_IMPLEMENTED")]
    NotImplemented {
        repository: &'static str,
        method: &'static str,
    },

    /// Store failure outside the taxonomy above (e.g., DB down, constraint bug)
    #[error(transparent)]
    Infrastructure(#[from] anyhow::Error),
}

/// Copyable classification of an [`AppError`], for boundary layers that map
/// failures to their own outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    PayloadIncomplete,
    PayloadTypeMismatch,
    NotFound,
    Unauthorized,
    NotImplemented,
    Infrastructure,
}

impl ErrorKind {
    /// True when the failure is caused by the caller's input or identity
    /// rather than by wiring or infrastructure.
    pub fn is_client_error(self) -> bool {
        matches!(
            self,
            ErrorKind::PayloadIncomplete
                | ErrorKind::PayloadTypeMismatch
                | ErrorKind::NotFound
                | ErrorKind::Unauthorized
        )
    }
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        AppError::Unauthorized(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::PayloadIncomplete { .. } => ErrorKind::PayloadIncomplete,
            AppError::PayloadTypeMismatch { .. } => ErrorKind::PayloadTypeMismatch,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Unauthorized(_) => ErrorKind::Unauthorized,
            AppError::NotImplemented { .. } => ErrorKind::NotImplemented,
            AppError::Infrastructure(_) => ErrorKind::Infrastructure,
        }
    }
}

/// A specialized Result type for forum-core logic.
pub type Result<T> = std::result::Result<T, AppError>;
