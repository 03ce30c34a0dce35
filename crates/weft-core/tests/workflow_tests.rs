//! End-to-end workflow tests for the generation engine.
//!
//! Drives the studio against a rule-driven stub generator: no network, fully
//! deterministic outcomes, arbitrary completion order preserved by the
//! fan-out machinery.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use weft_core::application::{
    GenerationModels, Phase, ProjectField, SectionField, Studio,
    ports::{GeneratorError, TextGenerator},
};

// ── Stub generator ────────────────────────────────────────────────────────────

type Response = Result<String, GeneratorError>;

/// Answers with the first rule whose needle appears in the prompt, records
/// every call.
struct StubGenerator {
    rules: Vec<(&'static str, Response)>,
    fallback: Response,
    calls: Mutex<Vec<(String, String)>>,
}

impl StubGenerator {
    fn new(rules: Vec<(&'static str, Response)>) -> Arc<Self> {
        Arc::new(Self {
            rules,
            fallback: Err(GeneratorError::InvalidResponse {
                message: "no stub rule matched".into(),
            }),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GeneratorError> {
        self.calls
            .lock()
            .unwrap()
            .push((model.to_string(), prompt.to_string()));
        for (needle, response) in &self.rules {
            if prompt.contains(needle) {
                return response.clone();
            }
        }
        self.fallback.clone()
    }
}

fn transport_error() -> Response {
    Err(GeneratorError::Transport {
        message: "connection reset".into(),
    })
}

const BAKERY_SCAFFOLD: &str = r#"{
    "name": "Sweet Crumbs",
    "description": "A cozy neighborhood bakery",
    "colorScheme": "warm pastel",
    "sections": [
        {"name": "Hero", "prompt": "welcoming headline with tagline"},
        {"name": "Menu", "prompt": "list 3 pastries"}
    ]
}"#;

fn bakery_rules() -> Vec<(&'static str, Response)> {
    vec![
        ("Return a JSON object", Ok(BAKERY_SCAFFOLD.into())),
        ("welcoming headline", Ok("<section>hero</section>".into())),
        ("pastries", Ok("```html\n<section>menu</section>\n```".into())),
    ]
}

async fn generated_bakery(generator: Arc<StubGenerator>) -> Studio {
    let mut studio = Studio::new(generator, GenerationModels::default());
    studio.generate_site("A bakery landing page").await.unwrap();
    studio
}

// ── Full generation flow ──────────────────────────────────────────────────────

#[tokio::test]
async fn bakery_scenario_generates_both_sections_in_order() {
    let generator = StubGenerator::new(bakery_rules());
    let mut studio = Studio::new(generator.clone(), GenerationModels::default());

    let report = studio.generate_site("A bakery landing page").await.unwrap();

    assert_eq!(report.generated, 2);
    assert!(report.all_succeeded());
    assert_eq!(studio.phase(), Phase::Ready);

    let html = studio.assemble().unwrap();
    assert_eq!(
        html,
        "<div>\n\n<section>hero</section>\n\n<section>menu</section>\n\n</div>"
    );
}

#[tokio::test]
async fn scaffold_and_sections_use_their_own_models() {
    let generator = StubGenerator::new(bakery_rules());
    generated_bakery(generator.clone()).await;

    let calls = generator.calls();
    assert_eq!(calls.len(), 3);
    let scaffold_calls: Vec<_> = calls.iter().filter(|(m, _)| m == "gpt-4").collect();
    let section_calls: Vec<_> = calls.iter().filter(|(m, _)| m == "gpt-4o").collect();
    assert_eq!(scaffold_calls.len(), 1);
    assert_eq!(section_calls.len(), 2);
}

#[tokio::test]
async fn fresh_sections_start_clean_then_record_generation() {
    let generator = StubGenerator::new(bakery_rules());
    let studio = generated_bakery(generator).await;

    let project = studio.project().unwrap();
    assert_eq!(project.original_description, "A cozy neighborhood bakery");
    for section in &project.sections {
        assert!(!section.is_edited);
        assert!(section.code.is_some());
        // First success freezes the anchor to the same value.
        assert_eq!(section.original_code, section.code);
        assert_eq!(section.old_prompt.as_deref(), Some(section.prompt.as_str()));
    }
}

#[tokio::test]
async fn prose_scaffold_aborts_to_input_with_no_project() {
    let generator = StubGenerator::new(vec![(
        "Return a JSON object",
        Ok("I'd be happy to help plan your bakery site!".into()),
    )]);
    let mut studio = Studio::new(generator.clone(), GenerationModels::default());

    let result = studio.generate_site("A bakery landing page").await;

    assert!(result.is_err());
    assert_eq!(studio.phase(), Phase::Input);
    assert!(studio.project().is_none());
    // Only the scaffold call went out; no section task was ever issued.
    assert_eq!(generator.calls().len(), 1);
}

#[tokio::test]
async fn scaffold_transport_failure_also_aborts_to_input() {
    let generator = StubGenerator::new(vec![("Return a JSON object", transport_error())]);
    let mut studio = Studio::new(generator, GenerationModels::default());

    assert!(studio.generate_site("whatever").await.is_err());
    assert_eq!(studio.phase(), Phase::Input);
    assert!(studio.project().is_none());
}

// ── Settle-all fan-out ────────────────────────────────────────────────────────

#[tokio::test]
async fn one_failed_section_never_drags_down_its_siblings() {
    let scaffold = r#"{
        "name": "n", "description": "d", "colorScheme": "c",
        "sections": [
            {"name": "Hero", "prompt": "hero prompt"},
            {"name": "Menu", "prompt": "menu prompt"},
            {"name": "Footer", "prompt": "footer prompt"}
        ]
    }"#;
    let generator = StubGenerator::new(vec![
        ("Return a JSON object", Ok(scaffold.to_string())),
        ("hero prompt", Ok("<hero/>".into())),
        ("menu prompt", transport_error()),
        ("footer prompt", Ok("<footer/>".into())),
    ]);
    let mut studio = Studio::new(generator, GenerationModels::default());

    let report = studio.generate_site("three sections").await.unwrap();

    // Exactly N-K fresh, K unchanged - and the studio still reached Ready.
    assert_eq!(report.generated, 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].name, "Menu");
    assert_eq!(report.failures[0].index, 1);
    assert_eq!(studio.phase(), Phase::Ready);

    let project = studio.project().unwrap();
    assert_eq!(project.sections[0].code.as_deref(), Some("<hero/>"));
    assert!(project.sections[1].code.is_none());
    assert!(project.sections[1].original_code.is_none());
    assert_eq!(project.sections[2].code.as_deref(), Some("<footer/>"));
}

// ── Dirty tracking ────────────────────────────────────────────────────────────

#[tokio::test]
async fn prompt_edit_snapshots_the_pre_edit_instruction() {
    let generator = StubGenerator::new(bakery_rules());
    let mut studio = generated_bakery(generator).await;

    studio
        .edit_section(1, SectionField::Prompt, "list 5 pastries")
        .unwrap();

    let menu = &studio.project().unwrap().sections[1];
    assert!(menu.is_edited);
    assert_eq!(menu.prompt, "list 5 pastries");
    assert_eq!(menu.old_prompt.as_deref(), Some("list 3 pastries"));
}

#[tokio::test]
async fn name_edit_marks_dirty_but_keeps_old_prompt() {
    let generator = StubGenerator::new(bakery_rules());
    let mut studio = generated_bakery(generator).await;

    let before = studio.project().unwrap().sections[1].old_prompt.clone();
    studio
        .edit_section(1, SectionField::Name, "Our Pastries")
        .unwrap();

    let menu = &studio.project().unwrap().sections[1];
    assert!(menu.is_edited);
    assert_eq!(menu.name, "Our Pastries");
    assert_eq!(menu.old_prompt, before);
}

#[tokio::test]
async fn project_edit_sets_the_project_flag() {
    let generator = StubGenerator::new(bakery_rules());
    let mut studio = generated_bakery(generator).await;

    assert!(!studio.project_edited());
    studio
        .edit_project(ProjectField::ColorScheme, "midnight blue")
        .unwrap();
    assert!(studio.project_edited());
    assert_eq!(studio.project().unwrap().color_scheme, "midnight blue");
}

#[tokio::test]
async fn deleting_a_section_leaves_sibling_dirty_state_alone() {
    let generator = StubGenerator::new(bakery_rules());
    let mut studio = generated_bakery(generator).await;

    studio
        .edit_section(1, SectionField::Prompt, "list 5 pastries")
        .unwrap();
    studio.delete_section(0).unwrap();

    let project = studio.project().unwrap();
    assert_eq!(project.sections.len(), 1);
    assert_eq!(project.sections[0].name, "Menu");
    assert!(project.sections[0].is_edited);
    assert_eq!(
        project.sections[0].old_prompt.as_deref(),
        Some("list 3 pastries")
    );
}

// ── Diff-aware regeneration ───────────────────────────────────────────────────

#[tokio::test]
async fn regeneration_feeds_prior_code_and_old_instruction_back() {
    let generator = StubGenerator::new(bakery_rules());
    let mut studio = generated_bakery(generator.clone()).await;

    studio
        .edit_section(1, SectionField::Prompt, "list 5 pastries")
        .unwrap();
    let report = studio.regenerate_section(1).await.unwrap();
    assert_eq!(report.generated, 1);

    // The regeneration prompt carried the frozen first code and the pre-edit
    // instruction alongside the new one.
    let (_, last_prompt) = generator.calls().last().unwrap().clone();
    assert!(last_prompt.contains("<section>menu</section>"));
    assert!(last_prompt.contains("Old Instruction:\nlist 3 pastries"));
    assert!(last_prompt.contains("list 5 pastries"));

    let menu = &studio.project().unwrap().sections[1];
    assert!(!menu.is_edited);
    assert_eq!(menu.old_prompt.as_deref(), Some("list 5 pastries"));
    // The anchor never moves, however many regenerations happen.
    assert_eq!(menu.original_code.as_deref(), Some("<section>menu</section>"));
}

#[tokio::test]
async fn failed_regeneration_keeps_the_section_dirty_and_untouched() {
    let scaffold = r#"{
        "name": "n", "description": "d", "colorScheme": "c",
        "sections": [{"name": "Menu", "prompt": "menu prompt"}]
    }"#;
    let generator = StubGenerator::new(vec![
        ("Return a JSON object", Ok(scaffold.to_string())),
        ("bigger menu", transport_error()),
        ("menu prompt", Ok("<menu-v1/>".into())),
    ]);
    let mut studio = Studio::new(generator, GenerationModels::default());
    studio.generate_site("one section").await.unwrap();

    studio
        .edit_section(0, SectionField::Prompt, "bigger menu")
        .unwrap();
    let report = studio.regenerate_section(0).await.unwrap();

    assert_eq!(report.generated, 0);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(studio.phase(), Phase::Ready);

    let menu = &studio.project().unwrap().sections[0];
    assert!(menu.is_edited, "failure must not clear the edit flag");
    assert_eq!(menu.code.as_deref(), Some("<menu-v1/>"));
    assert_eq!(menu.original_code.as_deref(), Some("<menu-v1/>"));
    assert_eq!(menu.old_prompt.as_deref(), Some("menu prompt"));
}

#[tokio::test]
async fn regenerate_all_uses_edited_context_and_clears_the_flag() {
    let generator = StubGenerator::new(bakery_rules());
    let mut studio = generated_bakery(generator.clone()).await;

    studio
        .edit_project(ProjectField::ColorScheme, "midnight blue")
        .unwrap();
    let report = studio.regenerate_all().await.unwrap();

    assert_eq!(report.generated, 2);
    assert!(!studio.project_edited());
    assert_eq!(studio.phase(), Phase::Ready);

    // Every regeneration prompt saw the edited palette.
    let section_prompts: Vec<_> = generator
        .calls()
        .into_iter()
        .filter(|(m, _)| m == "gpt-4o")
        .map(|(_, p)| p)
        .collect();
    assert!(
        section_prompts
            .iter()
            .rev()
            .take(2)
            .all(|p| p.contains("midnight blue"))
    );
}

#[tokio::test]
async fn regenerating_a_missing_index_is_an_error() {
    let generator = StubGenerator::new(bakery_rules());
    let mut studio = generated_bakery(generator).await;

    assert!(studio.regenerate_section(7).await.is_err());
    assert_eq!(studio.phase(), Phase::Ready);
}

// ── Starting over ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn a_new_description_replaces_the_previous_project() {
    let generator = StubGenerator::new(bakery_rules());
    let mut studio = generated_bakery(generator).await;

    studio
        .edit_project(ProjectField::Name, "Renamed Crumbs")
        .unwrap();
    studio.generate_site("A bakery landing page").await.unwrap();

    assert_eq!(studio.project().unwrap().name, "Sweet Crumbs");
    assert!(!studio.project_edited());
}
