//! Section Service - second generation stage.
//!
//! One model call produces (or refreshes) the markup of a single section.
//! Failures never escape this boundary as errors: every invocation settles
//! into an explicit [`SectionOutcome`], so a concurrent fan-out of section
//! tasks can always be joined settle-all, with failures collected rather
//! than aborting siblings.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::{
    application::ports::TextGenerator,
    domain::{
        fence::strip_code_fence,
        project::{ProjectContext, Section},
        prompts,
    },
};

/// Result of one section generation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionOutcome {
    /// The model answered; `code` is the fence-stripped, trimmed markup.
    Generated { code: String },
    /// The call or post-processing failed; the section keeps its prior state.
    Failed { reason: String },
}

/// Generates the markup for one section of a project.
pub struct SectionService {
    generator: Arc<dyn TextGenerator>,
    model: String,
}

impl SectionService {
    /// Create a section service over an injected generator adapter.
    pub fn new(generator: Arc<dyn TextGenerator>, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
        }
    }

    /// Generate markup for `section` in the context of `ctx`.
    ///
    /// When the section carries `original_code`/`old_prompt`, the prompt
    /// includes them so the model performs a targeted edit; when absent, the
    /// slots render empty and the model generates from scratch.
    ///
    /// Never returns an error - see [`SectionOutcome`].
    #[instrument(skip_all, fields(section = %section.name, model = %self.model))]
    pub async fn generate(&self, ctx: &ProjectContext, section: &Section) -> SectionOutcome {
        let prompt = prompts::section_prompt(ctx, section);

        match self.generator.generate(&self.model, &prompt).await {
            Ok(raw) => {
                let code = strip_code_fence(&raw).to_string();
                debug!(bytes = code.len(), "Section generated");
                SectionOutcome::Generated { code }
            }
            Err(e) => {
                warn!(error = %e, "Section generation failed");
                SectionOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::GeneratorError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records the prompt it was called with, then answers from the script.
    struct RecordingGenerator {
        response: Result<String, GeneratorError>,
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TextGenerator for RecordingGenerator {
        async fn generate(&self, _model: &str, prompt: &str) -> Result<String, GeneratorError> {
            self.seen.lock().unwrap().push(prompt.to_string());
            self.response.clone()
        }
    }

    fn ctx() -> ProjectContext {
        ProjectContext {
            name: "Sweet Crumbs".into(),
            description: "A bakery landing page".into(),
            color_scheme: "warm pastel".into(),
        }
    }

    #[tokio::test]
    async fn success_yields_stripped_code() {
        let generator = Arc::new(RecordingGenerator {
            response: Ok("```html\n<section>menu</section>\n```".into()),
            seen: Mutex::new(vec![]),
        });
        let service = SectionService::new(generator, "section-model");

        let outcome = service
            .generate(&ctx(), &Section::new("Menu", "list 3 pastries"))
            .await;
        assert_eq!(
            outcome,
            SectionOutcome::Generated {
                code: "<section>menu</section>".into()
            }
        );
    }

    #[tokio::test]
    async fn failure_is_captured_not_raised() {
        let generator = Arc::new(RecordingGenerator {
            response: Err(GeneratorError::Transport {
                message: "connection reset".into(),
            }),
            seen: Mutex::new(vec![]),
        });
        let service = SectionService::new(generator, "section-model");

        let outcome = service
            .generate(&ctx(), &Section::new("Menu", "list 3 pastries"))
            .await;
        match outcome {
            SectionOutcome::Failed { reason } => assert!(reason.contains("connection reset")),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn edited_section_sends_prior_code_and_old_instruction() {
        let generator = Arc::new(RecordingGenerator {
            response: Ok("<section>five pastries</section>".into()),
            seen: Mutex::new(vec![]),
        });
        let service = SectionService::new(generator.clone(), "section-model");

        let mut section = Section::new("Menu", "list 3 pastries");
        section.record_generation("<section>three pastries</section>".into(), "list 3 pastries");
        section.old_prompt = Some("list 3 pastries".into());
        section.prompt = "list 5 pastries".into();

        service.generate(&ctx(), &section).await;

        let seen = generator.seen.lock().unwrap();
        assert!(seen[0].contains("<section>three pastries</section>"));
        assert!(seen[0].contains("Old Instruction:\nlist 3 pastries"));
        assert!(seen[0].contains("list 5 pastries"));
    }
}
