// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The scaffold response did not match the required JSON structure.
    ///
    /// Covers malformed JSON and missing/mistyped required fields alike -
    /// there is no partial extraction from a bad scaffold.
    #[error("scaffold response is not a valid project structure: {reason}")]
    ScaffoldParse { reason: String },

    /// A section index referred to a slot that does not exist.
    #[error("no section at index {index} (project has {len})")]
    SectionIndexOutOfBounds { index: usize, len: usize },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ScaffoldParse { reason } => vec![
                "The model returned something other than the expected project JSON".into(),
                format!("Details: {}", reason),
                "Re-run the generation; model output varies between attempts".into(),
                "A more capable scaffold model often helps (--scaffold-model)".into(),
            ],
            Self::SectionIndexOutOfBounds { index, len } => vec![
                format!("Section {} does not exist; valid indices are 0..{}", index, len),
                "Use 'show' to list sections and their indices".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ScaffoldParse { .. } => ErrorCategory::Generation,
            Self::SectionIndexOutOfBounds { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Generation,
    Internal,
}
