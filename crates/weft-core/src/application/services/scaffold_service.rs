//! Scaffold Service - first generation stage.
//!
//! One model call turns a free-text project description into the typed
//! project structure (metadata + section list). Parsing is a single explicit
//! parse-and-validate step: the response either matches the required JSON
//! shape or the whole flow aborts with no partial project.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    application::{error::ApplicationError, ports::TextGenerator},
    domain::{
        DomainError, Project,
        fence::strip_code_fence,
        project::ScaffoldShape,
        prompts,
    },
    error::WeftResult,
};

/// Produces the initial project structure from a description.
pub struct ScaffoldService {
    generator: Arc<dyn TextGenerator>,
    model: String,
}

impl ScaffoldService {
    /// Create a scaffold service over an injected generator adapter.
    pub fn new(generator: Arc<dyn TextGenerator>, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
        }
    }

    /// Scaffold a new project.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::ScaffoldCall` if the model call fails
    /// - `DomainError::ScaffoldParse` if the response is not the required
    ///   JSON shape (malformed JSON, missing fields, wrong types)
    ///
    /// On any error the caller holds no project and stays in the
    /// input-collection state.
    #[instrument(skip_all, fields(model = %self.model))]
    pub async fn scaffold(&self, description: &str) -> WeftResult<Project> {
        info!("Scaffolding project structure");

        let prompt = prompts::scaffold_prompt(description);
        let raw = self
            .generator
            .generate(&self.model, &prompt)
            .await
            .map_err(ApplicationError::ScaffoldCall)?;

        // Models routinely fence JSON bodies; the strip is a no-op otherwise.
        let body = strip_code_fence(&raw);

        let shape: ScaffoldShape = serde_json::from_str(body).map_err(|e| {
            DomainError::ScaffoldParse {
                reason: e.to_string(),
            }
        })?;

        let project = Project::from(shape);
        info!(
            name = %project.name,
            sections = project.sections.len(),
            "Scaffold parsed"
        );

        Ok(project)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
