//! Prompt templates for the two generation stages.
//!
//! Pure `{{PLACEHOLDER}}` substitution, nothing else. The scaffold template
//! asks for a strict JSON structure; the section template asks for bare
//! markup. When a section has no prior generation, the "original section
//! code" and "old instruction" slots render as empty strings - that absence
//! is the signal for a from-scratch generation instead of a guided edit.

use super::project::{ProjectContext, Section};

const SCAFFOLD_TEMPLATE: &str = "\
You are an expert web designer and developer specializing in modern HTML and Tailwind CSS. \
Your task is to create a scaffold for a modern, responsive website based on the following project details:

{{PROJECT_DETAILS}}

Return a JSON object with the following structure:
{
  \"name\": \"Project Name\",
  \"description\": \"Brief project description\",
  \"colorScheme\": \"Textual representation of the color scheme\",
  \"sections\": [
    {
      \"name\": \"Section Name\",
      \"prompt\": \"Detailed prompt for this section, describing what it should contain and how it should look. Do not suggest using any images.\"
    }
  ]
}

Ensure that the sections cover all necessary parts of a complete website based on the project details. \
Return only the JSON object, without any explanation.";

const SECTION_TEMPLATE: &str = "\
You are an expert web designer and developer specializing in modern HTML and Tailwind CSS. \
Your task is to create a modern, responsive website section based on the following details:

Project Name: {{PROJECT_NAME}}
Project Description: {{PROJECT_DESCRIPTION}}
Color Scheme: {{COLOR_SCHEME}}

Section Details:
{{SECTION_PROMPT}}

Your primary task is as a website designer, you must generate beautiful and modern HTML with Tailwind CSS classes that implements this section. \
Include gradient fonts, backgrounds, and transitions where appropriate. You can use Font Awesome icons as well where needed.

Return only the markup for this section, without any description or comments.
The code should be clean, well-structured, and follow best practices.
Do NOT use any images in the project, unless specified by the user.
DO NOT include any explanations, comments, or a full HTML document in your response, just the markup for the section content.

Original Section Code:
{{ORIGINAL_SECTION_CODE}}

Old Instruction:
{{OLD_INSTRUCTION}}

Make only the necessary changes based on the differences between the old and new instructions. \
Avoid drastic changes unless explicitly required.";

/// Build the scaffold prompt from a free-text project description.
pub fn scaffold_prompt(description: &str) -> String {
    render(SCAFFOLD_TEMPLATE, &[("{{PROJECT_DETAILS}}", description)])
}

/// Build a section prompt from the shared project context and one section.
pub fn section_prompt(ctx: &ProjectContext, section: &Section) -> String {
    render(
        SECTION_TEMPLATE,
        &[
            ("{{PROJECT_NAME}}", &ctx.name),
            ("{{PROJECT_DESCRIPTION}}", &ctx.description),
            ("{{COLOR_SCHEME}}", &ctx.color_scheme),
            ("{{SECTION_PROMPT}}", &section.prompt),
            (
                "{{ORIGINAL_SECTION_CODE}}",
                section.original_code.as_deref().unwrap_or(""),
            ),
            (
                "{{OLD_INSTRUCTION}}",
                section.old_prompt.as_deref().unwrap_or(""),
            ),
        ],
    )
}

/// Substitute each `(placeholder, value)` pair into the template.
fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (placeholder, value) in vars {
        out = out.replace(placeholder, value);
    }
    out
}

// ── tests ─────────────────────────────────────────────────────────────────────
