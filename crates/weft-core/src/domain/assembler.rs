//! Artifact assembly.
//!
//! Deterministic concatenation of section codes into one artifact. A pure
//! function of current section order and codes - recomputed on demand, never
//! cached across edits.

use super::project::Project;

/// Join every section's generated code, in section order, into one root
/// container. Sections without code contribute an empty placeholder so the
/// artifact shape is stable while generations are still missing.
pub fn assemble(project: &Project) -> String {
    let body = project
        .sections
        .iter()
        .map(|s| s.code.as_deref().unwrap_or(""))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("<div>\n\n{body}\n\n</div>")
}

// ── tests ─────────────────────────────────────────────────────────────────────
