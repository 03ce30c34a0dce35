// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Weft.
//!
//! This module contains pure generation logic with ZERO external dependencies.
//! All I/O and model-call concerns are handled via ports (traits) defined in
//! the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derive
//! - **Rich domain model**: Behavior lives in entities, not services
//!
// Public API - what the world sees
pub mod assembler;
pub mod error;
pub mod fence;
pub mod project;
pub mod prompts;

// Re-exports for convenience
pub use error::DomainError;
pub use project::{Project, ProjectContext, Section};

#[cfg(test)]
mod tests {
    use super::*;

    fn section(name: &str, prompt: &str) -> Section {
        Section::new(name, prompt)
    }

    // ========================================================================
    // Section Tests
    // ========================================================================

    #[test]
    fn new_section_is_clean() {
        let s = section("Hero", "big headline");
        assert!(!s.is_edited);
        assert!(s.code.is_none());
        assert!(s.original_code.is_none());
        assert!(s.old_prompt.is_none());
    }

    #[test]
    fn first_generation_freezes_original_code() {
        let mut s = section("Hero", "big headline");
        s.record_generation("<section>v1</section>".into(), "big headline");

        assert_eq!(s.code.as_deref(), Some("<section>v1</section>"));
        assert_eq!(s.original_code.as_deref(), Some("<section>v1</section>"));
        assert_eq!(s.old_prompt.as_deref(), Some("big headline"));
        assert!(!s.is_edited);
    }

    #[test]
    fn regeneration_never_touches_original_code() {
        let mut s = section("Hero", "big headline");
        s.record_generation("<section>v1</section>".into(), "big headline");
        s.record_generation("<section>v2</section>".into(), "bigger headline");
        s.record_generation("<section>v3</section>".into(), "biggest headline");

        assert_eq!(s.code.as_deref(), Some("<section>v3</section>"));
        assert_eq!(s.original_code.as_deref(), Some("<section>v1</section>"));
        assert_eq!(s.old_prompt.as_deref(), Some("biggest headline"));
    }

    #[test]
    fn record_generation_clears_edit_flag() {
        let mut s = section("Hero", "big headline");
        s.is_edited = true;
        s.record_generation("<section/>".into(), "big headline");
        assert!(!s.is_edited);
    }

    // ========================================================================
    // Project Tests
    // ========================================================================

    #[test]
    fn context_carries_top_level_fields() {
        let p = Project::new(
            "Sweet Crumbs",
            "A bakery landing page",
            "warm pastel",
            vec![section("Hero", "headline"), section("Menu", "pastries")],
        );

        let ctx = p.context();
        assert_eq!(ctx.name, "Sweet Crumbs");
        assert_eq!(ctx.description, "A bakery landing page");
        assert_eq!(ctx.color_scheme, "warm pastel");
    }

    #[test]
    fn new_project_snapshots_original_description() {
        let p = Project::new("n", "generated description", "c", vec![]);
        assert_eq!(p.original_description, "generated description");
    }

    #[test]
    fn removing_a_section_keeps_sibling_content() {
        let mut p = Project::new(
            "n",
            "d",
            "c",
            vec![
                section("Hero", "a"),
                section("Menu", "b"),
                section("Footer", "c"),
            ],
        );
        p.sections[2].record_generation("<footer/>".into(), "c");

        p.sections.remove(1);

        assert_eq!(p.sections.len(), 2);
        assert_eq!(p.sections[0].name, "Hero");
        assert_eq!(p.sections[1].name, "Footer");
        assert_eq!(p.sections[1].code.as_deref(), Some("<footer/>"));
    }
}
