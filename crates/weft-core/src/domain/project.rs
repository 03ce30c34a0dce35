//! Project and section entities.
//!
//! A [`Project`] is created once per scaffold and mutated in place by user
//! edits and generation results. Sections are identified by their position in
//! `sections`; deleting one renumbers positions but never moves generated
//! content between surviving sections.

use serde::Deserialize;

/// One independently generated, independently editable slice of the final
/// artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Display name ("Hero", "Menu", ...).
    pub name: String,
    /// The user-authored instruction driving generation.
    pub prompt: String,
    /// Last successfully generated markup. `None` until the first success.
    pub code: Option<String>,
    /// The *first* successfully generated markup. Frozen after first write;
    /// anchors diff-aware regeneration so later edits stay targeted.
    pub original_code: Option<String>,
    /// The `prompt` value in effect when `code` was last generated.
    pub old_prompt: Option<String>,
    /// True once `prompt` or `name` changed since the last generation.
    pub is_edited: bool,
}

impl Section {
    pub fn new(name: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prompt: prompt.into(),
            code: None,
            original_code: None,
            old_prompt: None,
            is_edited: false,
        }
    }

    /// Apply a successful generation result.
    ///
    /// `original_code` is written exactly once: the first success freezes it.
    /// `prompt_used` is the instruction the generation actually ran with.
    pub fn record_generation(&mut self, code: String, prompt_used: &str) {
        if self.original_code.is_none() {
            self.original_code = Some(code.clone());
        }
        self.code = Some(code);
        self.old_prompt = Some(prompt_used.to_string());
        self.is_edited = false;
    }
}

/// A generated website project: top-level metadata plus ordered sections.
///
/// Section order is semantically meaningful - it is the concatenation order
/// of the final artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub description: String,
    /// Free-text palette description ("warm pastel", "dark slate + amber").
    pub color_scheme: String,
    pub sections: Vec<Section>,
    /// Snapshot of `description` at scaffold time. Edit baseline only.
    pub original_description: String,
}

impl Project {
    /// Build a fresh project; `original_description` is snapshotted from the
    /// given description.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        color_scheme: impl Into<String>,
        sections: Vec<Section>,
    ) -> Self {
        let description = description.into();
        Self {
            name: name.into(),
            original_description: description.clone(),
            description,
            color_scheme: color_scheme.into(),
            sections,
        }
    }

    /// The slice of project state every section generation shares.
    pub fn context(&self) -> ProjectContext {
        ProjectContext {
            name: self.name.clone(),
            description: self.description.clone(),
            color_scheme: self.color_scheme.clone(),
        }
    }
}

/// Top-level project fields threaded into every section prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    pub name: String,
    pub description: String,
    pub color_scheme: String,
}

// ── Scaffold wire contract ────────────────────────────────────────────────────

/// The JSON shape the scaffold model call must return.
///
/// Every field is required; a response missing any of them (or mistyping one)
/// fails deserialization outright. There is deliberately no fallback or
/// partial extraction - a malformed scaffold produces no project at all.
#[derive(Debug, Clone, Deserialize)]
pub struct ScaffoldShape {
    pub name: String,
    pub description: String,
    #[serde(rename = "colorScheme")]
    pub color_scheme: String,
    pub sections: Vec<SectionShape>,
}

/// One section entry in the scaffold response.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionShape {
    pub name: String,
    pub prompt: String,
}

impl From<ScaffoldShape> for Project {
    fn from(shape: ScaffoldShape) -> Self {
        let sections = shape
            .sections
            .into_iter()
            .map(|s| Section::new(s.name, s.prompt))
            .collect();
        Project::new(shape.name, shape.description, shape.color_scheme, sections)
    }
}
