//! Unified error handling for the application layer.
//!
//! Domain rule violations arrive as `DomainError`; repository and
//! transaction collaborators add their own failures on top.

use kernel::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Domain rules
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // External collaborators
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Transaction error: {0}")]
    Transaction(String),

    // Internal
    #[error("Internal error")]
    Internal(String),
}

impl AppError {
    /// Get error code for callers
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Domain(err) => match err {
                DomainError::Format { .. } => "FORMAT_ERROR",
                DomainError::Range { .. } => "RANGE_ERROR",
                DomainError::Type { .. } => "TYPE_ERROR",
                DomainError::TypeMismatch { .. } => "TYPE_MISMATCH",
                DomainError::Authorization => "FORBIDDEN",
                DomainError::AlreadyDeleted(_) => "ALREADY_DELETED",
            },
            AppError::NotFound => "NOT_FOUND",
            AppError::Persistence(_) => "PERSISTENCE_ERROR",
            AppError::Transaction(_) => "TRANSACTION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get caller-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Persistence(msg) => {
                tracing::error!("Persistence error: {}", msg);
                "A persistence error occurred".to_string()
            }
            AppError::Transaction(msg) => {
                tracing::error!("Transaction error: {}", msg);
                "A transaction error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// True for failures caused by invalid input rather than by state
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::Domain(
                DomainError::Format { .. } | DomainError::Range { .. } | DomainError::Type { .. }
            )
        )
    }

    /// The wrapped domain error, if any
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            AppError::Domain(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn persistence(msg: impl Into<String>) -> Self {
        AppError::Persistence(msg.into())
    }

    pub fn transaction(msg: impl Into<String>) -> Self {
        AppError::Transaction(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
