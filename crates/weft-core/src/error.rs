//! Unified error handling for Weft Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Weft Core operations.
///
/// This enum wraps all possible errors that can occur when using weft-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum WeftError {
    /// Errors from the domain layer (contract violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl WeftError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Weft".into(),
                "Please report this issue at: https://github.com/weft-dev/weft/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::error::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::error::ErrorCategory::Generation => ErrorCategory::Generation,
                crate::domain::error::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => match e.category() {
                crate::domain::error::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::error::ErrorCategory::Generation => ErrorCategory::Generation,
                crate::domain::error::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Check if this error is retryable.
    ///
    /// Both generation-stage failures are recoverable by re-triggering the
    /// operation; there are no built-in retries.
    pub fn is_retryable(&self) -> bool {
        matches!(self.category(), ErrorCategory::Generation)
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Generation,
    Internal,
}

/// Convenient result type alias.
pub type WeftResult<T> = Result<T, WeftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaffold_parse_is_retryable() {
        let err = WeftError::Domain(DomainError::ScaffoldParse {
            reason: "not json".into(),
        });
        assert!(err.is_retryable());
    }

    #[test]
    fn internal_is_not_retryable() {
        let err = WeftError::Internal {
            message: "oops".into(),
        };
        assert!(!err.is_retryable());
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
