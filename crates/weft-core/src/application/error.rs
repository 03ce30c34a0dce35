//! Application layer errors.
//!
//! These errors represent failures in orchestration, not generation content.
//! Scaffold-shape violations are `DomainError` from `crate::domain`; a
//! section task failing is *not* an error type at all - it is the `Failed`
//! variant of `SectionOutcome`, collected after the fan-out settles.

use thiserror::Error;

use crate::application::ports::GeneratorError;
use crate::domain::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The scaffold model call itself failed (before any parsing).
    #[error("scaffold generation failed: {0}")]
    ScaffoldCall(#[from] GeneratorError),

    /// An operation that needs an active project was invoked without one.
    #[error("no active project; generate a site first")]
    NoActiveProject,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ScaffoldCall(source) => {
                let mut out = vec![format!("The scaffold call failed: {}", source)];
                match source {
                    GeneratorError::MissingApiKey { .. } => {
                        out.push("Set WEFT_API_KEY (or OPENAI_API_KEY) and retry".into());
                    }
                    GeneratorError::Api { status: 429, .. } => {
                        out.push("You are being rate limited; wait and retry".into());
                    }
                    _ => {
                        out.push("Check network connectivity and the configured base URL".into());
                        out.push("Retry; no partial project was created".into());
                    }
                }
                out
            }
            Self::NoActiveProject => vec![
                "Nothing has been generated yet in this session".into(),
                "Run: weft new \"<project description>\"".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ScaffoldCall(_) => ErrorCategory::Generation,
            Self::NoActiveProject => ErrorCategory::Validation,
        }
    }
}
