//! Weft Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Weft
//! site generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            weft-cli (CLI)               │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Layer               │
//! │   (Studio, ScaffoldService,             │
//! │    SectionService)                      │
//! │      Orchestrates Generation            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │        (Driven: TextGenerator)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     weft-adapters (Infrastructure)      │
//! │   (OpenAiGenerator, ScriptedGenerator)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │   (Project, Section, prompts, fence,    │
//! │    assembler)                           │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use weft_core::application::{GenerationModels, Studio};
//!
//! # async fn run(generator: Arc<dyn weft_core::application::ports::TextGenerator>) {
//! // 1. Build the studio over an injected generator adapter
//! let mut studio = Studio::new(generator, GenerationModels::default());
//!
//! // 2. Scaffold + generate every section
//! let report = studio.generate_site("A bakery landing page").await.unwrap();
//! println!("{} sections generated", report.generated);
//!
//! // 3. Materialize the artifact
//! let html = studio.assemble().unwrap();
//! # let _ = html;
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationModels, GenerationReport, Phase, ProjectField, ScaffoldService, SectionField,
        SectionOutcome, SectionService, Studio,
        ports::{GeneratorError, TextGenerator},
    };
    pub use crate::domain::{Project, ProjectContext, Section, assembler};
    pub use crate::error::{WeftError, WeftResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
