//! Application layer for Weft.
//!
//! This layer contains:
//! - **Studio**: the orchestration state machine and the owner of the
//!   project snapshot
//! - **Services**: the two generation stages (ScaffoldService, SectionService)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! generation content logic itself. Prompts, parsing shapes, and assembly
//! live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;
pub mod studio;

// Re-export the orchestration surface
pub use studio::{
    GenerationModels, GenerationReport, Phase, ProjectField, SectionFailure, SectionField, Studio,
};

// Re-export the generation services
pub use services::{ScaffoldService, SectionOutcome, SectionService};

// Re-export port traits (for adapter implementation)
pub use ports::{GeneratorError, TextGenerator};

pub use error::ApplicationError;
