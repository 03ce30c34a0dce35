//! The studio - generation orchestration engine.
//!
//! Owns the single project snapshot and drives the generation state machine:
//!
//! ```text
//! Input ──▶ Scaffolding ──▶ GeneratingSections ──▶ Ready
//!                │ (parse failure)                   │  ▲
//!                ▼                                   ▼  │
//!              Input                  RegeneratingAll / RegeneratingOne(i)
//! ```
//!
//! The scaffold call is the only strictly sequential suspension point; after
//! it succeeds, one section task per section runs concurrently. The join is
//! settle-all: the studio reaches `Ready` once every task has settled,
//! regardless of how many failed. Per-section failures are collected into
//! the returned [`GenerationReport`] instead of aborting siblings.
//!
//! All mutation goes through `&mut self` entry points, so overlapping
//! regeneration runs cannot interleave: a second run cannot begin until the
//! previous one has settled. Collaborators read state through the accessor
//! surface only - there is no ambient shared project.

use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use tracing::{info, instrument, warn};

use crate::{
    application::{
        error::ApplicationError,
        ports::TextGenerator,
        services::{ScaffoldService, SectionOutcome, SectionService},
    },
    domain::{DomainError, Project, Section, assembler},
    error::WeftResult,
};

/// Model identifiers for the two generation stages. The section model is
/// typically the higher-fidelity one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationModels {
    pub scaffold: String,
    pub section: String,
}

impl Default for GenerationModels {
    fn default() -> Self {
        Self {
            scaffold: "gpt-4".into(),
            section: "gpt-4o".into(),
        }
    }
}

/// Where the engine currently is. `Input` is initial; `Ready` is the only
/// stable state once a project exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Input,
    Scaffolding,
    GeneratingSections,
    Ready,
    RegeneratingAll,
    RegeneratingOne(usize),
}

/// Editable top-level project fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Name,
    Description,
    ColorScheme,
}

/// Editable per-section fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionField {
    Name,
    Prompt,
}

/// One section task that settled as a failure: the notification payload the
/// presentation layer shows, naming the section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionFailure {
    pub index: usize,
    pub name: String,
    pub reason: String,
}

/// What a generation run settled into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Number of sections that received fresh code.
    pub generated: usize,
    /// Tasks that failed; their sections kept their prior state.
    pub failures: Vec<SectionFailure>,
}

impl GenerationReport {
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// The orchestration controller.
pub struct Studio {
    scaffolder: ScaffoldService,
    sections: SectionService,
    phase: Phase,
    project: Option<Project>,
    project_edited: bool,
}

impl Studio {
    /// Build a studio over an injected generator adapter.
    pub fn new(generator: Arc<dyn TextGenerator>, models: GenerationModels) -> Self {
        Self {
            scaffolder: ScaffoldService::new(generator.clone(), models.scaffold),
            sections: SectionService::new(generator, models.section),
            phase: Phase::Input,
            project: None,
            project_edited: false,
        }
    }

    // ── Read surface ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    /// True once any top-level project field changed since the last full
    /// generation. Gates the "regenerate everything" affordance.
    pub fn project_edited(&self) -> bool {
        self.project_edited
    }

    /// Materialize the artifact from the current snapshot.
    pub fn assemble(&self) -> WeftResult<String> {
        let project = self
            .project
            .as_ref()
            .ok_or(ApplicationError::NoActiveProject)?;
        Ok(assembler::assemble(project))
    }

    // ── Generation ────────────────────────────────────────────────────────

    /// Scaffold a project from `description`, then generate every section.
    ///
    /// Scaffold failure aborts the whole flow: no project is retained and
    /// the studio returns to `Input`. Section failures do not abort - the
    /// studio always reaches `Ready` after a successful scaffold, with the
    /// failures listed in the report.
    #[instrument(skip_all)]
    pub async fn generate_site(&mut self, description: &str) -> WeftResult<GenerationReport> {
        self.phase = Phase::Scaffolding;

        let project = match self.scaffolder.scaffold(description).await {
            Ok(p) => p,
            Err(e) => {
                self.project = None;
                self.phase = Phase::Input;
                return Err(e);
            }
        };

        let count = project.sections.len();
        self.project = Some(project);
        self.phase = Phase::GeneratingSections;

        let report = self.run_fan_out((0..count).collect()).await;

        self.project_edited = false;
        self.phase = Phase::Ready;
        info!(
            generated = report.generated,
            failed = report.failures.len(),
            "Site generation settled"
        );
        Ok(report)
    }

    /// Re-generate every section with the current (possibly edited) project
    /// context. Clears the project-level edit flag on completion.
    #[instrument(skip_all)]
    pub async fn regenerate_all(&mut self) -> WeftResult<GenerationReport> {
        let count = self
            .project
            .as_ref()
            .ok_or(ApplicationError::NoActiveProject)?
            .sections
            .len();

        self.phase = Phase::RegeneratingAll;
        let report = self.run_fan_out((0..count).collect()).await;
        self.project_edited = false;
        self.phase = Phase::Ready;
        Ok(report)
    }

    /// Re-generate a single section. Its edit flag clears only on success.
    #[instrument(skip(self))]
    pub async fn regenerate_section(&mut self, index: usize) -> WeftResult<GenerationReport> {
        let len = self
            .project
            .as_ref()
            .ok_or(ApplicationError::NoActiveProject)?
            .sections
            .len();
        if index >= len {
            return Err(DomainError::SectionIndexOutOfBounds { index, len }.into());
        }

        self.phase = Phase::RegeneratingOne(index);
        let report = self.run_fan_out(vec![index]).await;
        self.phase = Phase::Ready;
        Ok(report)
    }

    /// Fan out one generation task per index and settle them all.
    ///
    /// Completions arrive in arbitrary order; each one rewrites only its own
    /// slot, so sibling results - including ones still in flight - are never
    /// clobbered, and applying result *i* then *j* equals the reverse.
    async fn run_fan_out(&mut self, indices: Vec<usize>) -> GenerationReport {
        let project = self
            .project
            .as_mut()
            .expect("fan-out requires an active project");
        let ctx = project.context();

        // Snapshot each section at fan-out time; the task works against the
        // snapshot while the slot stays live for result application.
        let jobs: Vec<(usize, Section)> = indices
            .into_iter()
            .filter_map(|i| project.sections.get(i).map(|s| (i, s.clone())))
            .collect();

        info!(tasks = jobs.len(), "Fanning out section generation");

        let service = &self.sections;
        let mut tasks: FuturesUnordered<_> = jobs
            .into_iter()
            .map(|(index, section)| {
                let ctx = ctx.clone();
                async move {
                    let outcome = service.generate(&ctx, &section).await;
                    (index, section, outcome)
                }
            })
            .collect();

        let mut report = GenerationReport::default();
        while let Some((index, section, outcome)) = tasks.next().await {
            match outcome {
                SectionOutcome::Generated { code } => {
                    if let Some(slot) = project.sections.get_mut(index) {
                        slot.record_generation(code, &section.prompt);
                        report.generated += 1;
                    }
                }
                SectionOutcome::Failed { reason } => {
                    warn!(section = %section.name, error = %reason, "Section left unchanged");
                    report.failures.push(SectionFailure {
                        index,
                        name: section.name,
                        reason,
                    });
                }
            }
        }

        report
    }

    // ── Edit surface (dirty tracking) ─────────────────────────────────────

    /// Edit a top-level project field. Marks the project dirty.
    pub fn edit_project(&mut self, field: ProjectField, value: impl Into<String>) -> WeftResult<()> {
        let project = self
            .project
            .as_mut()
            .ok_or(ApplicationError::NoActiveProject)?;

        let value = value.into();
        match field {
            ProjectField::Name => project.name = value,
            ProjectField::Description => project.description = value,
            ProjectField::ColorScheme => project.color_scheme = value,
        }
        self.project_edited = true;
        Ok(())
    }

    /// Edit a section field. Marks the section dirty; a prompt edit first
    /// snapshots the pre-edit instruction into `old_prompt` - that
    /// before/after pair is what diff-aware regeneration feeds back to the
    /// model. A name edit leaves `old_prompt` as-is.
    pub fn edit_section(
        &mut self,
        index: usize,
        field: SectionField,
        value: impl Into<String>,
    ) -> WeftResult<()> {
        let project = self
            .project
            .as_mut()
            .ok_or(ApplicationError::NoActiveProject)?;
        let len = project.sections.len();
        let section = project
            .sections
            .get_mut(index)
            .ok_or(DomainError::SectionIndexOutOfBounds { index, len })?;

        match field {
            SectionField::Name => section.name = value.into(),
            SectionField::Prompt => {
                section.old_prompt = Some(section.prompt.clone());
                section.prompt = value.into();
            }
        }
        section.is_edited = true;
        Ok(())
    }

    /// Remove a section. Irreversible; sibling sections keep their content
    /// and dirty state, only their positions renumber.
    pub fn delete_section(&mut self, index: usize) -> WeftResult<()> {
        let project = self
            .project
            .as_mut()
            .ok_or(ApplicationError::NoActiveProject)?;
        let len = project.sections.len();
        if index >= len {
            return Err(DomainError::SectionIndexOutOfBounds { index, len }.into());
        }
        project.sections.remove(index);
        Ok(())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
//
// Workflow coverage (fan-out settle-all, dirty tracking through generation,
// scenario walkthroughs) lives in tests/workflow_tests.rs; these only pin
// the state surface of a fresh studio.
