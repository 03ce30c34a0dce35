//! Interactive edit/regenerate session.
//!
//! A line-oriented loop over exactly the operations the engine supports:
//! edit project fields, edit section name/prompt, delete a section,
//! regenerate one section or the whole site, save the artifact. The
//! regenerate commands are gated the same way the engine tracks dirt:
//! `regen <i>` needs that section edited, `regen all` needs a project-level
//! edit.

use std::io::{self, BufRead, Write};
use std::path::Path;

use weft_core::application::{ProjectField, SectionField, Studio};
use weft_core::error::WeftError;

use crate::{
    commands::new::{show_report, write_artifact},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// One parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Show,
    EditProject(ProjectField, String),
    EditSection(usize, SectionField, String),
    Delete(usize),
    Regen(usize),
    RegenAll,
    Save,
    Help,
    Quit,
}

/// Parse one input line into a command.
///
/// Grammar (first word selects the command):
///
/// ```text
/// show
/// name <text> | desc <text> | colors <text>
/// section <i> name <text> | section <i> prompt <text>
/// delete <i>
/// regen all | regen <i>
/// save | help | quit | exit
/// ```
pub fn parse_command(line: &str) -> Result<SessionCommand, String> {
    let line = line.trim();
    let (head, rest) = split_word(line);

    match head {
        "show" => Ok(SessionCommand::Show),
        "help" | "?" => Ok(SessionCommand::Help),
        "quit" | "exit" => Ok(SessionCommand::Quit),
        "save" => Ok(SessionCommand::Save),
        "name" => project_edit(ProjectField::Name, rest, "name <new project name>"),
        "desc" => project_edit(ProjectField::Description, rest, "desc <new description>"),
        "colors" => project_edit(ProjectField::ColorScheme, rest, "colors <new color scheme>"),
        "delete" => Ok(SessionCommand::Delete(parse_index(rest)?)),
        "regen" => {
            if rest == "all" {
                Ok(SessionCommand::RegenAll)
            } else {
                Ok(SessionCommand::Regen(parse_index(rest)?))
            }
        }
        "section" => {
            let (index, rest) = split_word(rest);
            let index = parse_index(index)?;
            let (field, value) = split_word(rest);
            let field = match field {
                "name" => SectionField::Name,
                "prompt" => SectionField::Prompt,
                other => {
                    return Err(format!(
                        "unknown section field '{other}' (expected 'name' or 'prompt')"
                    ));
                }
            };
            if value.is_empty() {
                return Err("usage: section <i> name|prompt <text>".into());
            }
            Ok(SessionCommand::EditSection(index, field, value.to_string()))
        }
        "" => Err("type 'help' for commands".into()),
        other => Err(format!("unknown command '{other}' (type 'help')")),
    }
}

fn project_edit(
    field: ProjectField,
    value: &str,
    usage: &str,
) -> Result<SessionCommand, String> {
    if value.is_empty() {
        return Err(format!("usage: {usage}"));
    }
    Ok(SessionCommand::EditProject(field, value.to_string()))
}

fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim_start()),
        None => (s, ""),
    }
}

fn parse_index(s: &str) -> Result<usize, String> {
    s.trim()
        .parse::<usize>()
        .map_err(|_| format!("expected a section index, got '{s}'"))
}

// ── Session loop ──────────────────────────────────────────────────────────────

/// Run the interactive session until `quit` or EOF.
pub async fn run_session(
    studio: &mut Studio,
    artifact_path: &Path,
    out: &OutputManager,
) -> CliResult<()> {
    out.print("")?;
    out.header("Interactive session — type 'help' for commands, 'quit' to finish")?;

    let stdin = io::stdin();
    loop {
        prompt()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF: finish the session like 'quit'.
            break;
        }

        let command = match parse_command(&line) {
            Ok(c) => c,
            Err(msg) => {
                out.warning(&msg)?;
                continue;
            }
        };

        match command {
            SessionCommand::Quit => break,
            SessionCommand::Help => print_help(out)?,
            SessionCommand::Show => show_project(studio, out)?,
            SessionCommand::Save => {
                write_artifact(studio, artifact_path)?;
                out.success(&format!("Saved {}", artifact_path.display()))?;
            }
            SessionCommand::EditProject(field, value) => {
                apply(studio.edit_project(field, value), out)?;
            }
            SessionCommand::EditSection(index, field, value) => {
                apply(studio.edit_section(index, field, value), out)?;
            }
            SessionCommand::Delete(index) => {
                apply(studio.delete_section(index), out)?;
            }
            SessionCommand::Regen(index) => {
                let edited = studio
                    .project()
                    .and_then(|p| p.sections.get(index))
                    .is_some_and(|s| s.is_edited);
                if !edited {
                    out.warning(&format!(
                        "section {index} has no pending edits; change its prompt or name first"
                    ))?;
                    continue;
                }
                out.header(&format!("Regenerating section {index}..."))?;
                match studio.regenerate_section(index).await {
                    Ok(report) => show_report(&report, studio, out)?,
                    Err(e) => out.error(&CliError::Core(e).to_string())?,
                }
            }
            SessionCommand::RegenAll => {
                if !studio.project_edited() {
                    out.warning(
                        "no project-level edits pending; change name/desc/colors first",
                    )?;
                    continue;
                }
                out.header("Regenerating all sections...")?;
                match studio.regenerate_all().await {
                    Ok(report) => show_report(&report, studio, out)?,
                    Err(e) => out.error(&CliError::Core(e).to_string())?,
                }
            }
        }
    }

    Ok(())
}

/// Report the result of a mutating edit. An error is shown but does not end
/// the session — matching how `regen` reports failures and continues the loop.
fn apply(result: Result<(), WeftError>, out: &OutputManager) -> CliResult<()> {
    if let Err(e) = result {
        out.error(&CliError::Core(e).to_string())?;
    }
    Ok(())
}

fn prompt() -> CliResult<()> {
    print!("weft> ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush prompt".into(),
        source: e,
    })
}

fn print_help(out: &OutputManager) -> CliResult<()> {
    out.print("Commands:")?;
    out.print("  show                        project and section status")?;
    out.print("  name <text>                 edit project name")?;
    out.print("  desc <text>                 edit project description")?;
    out.print("  colors <text>               edit color scheme")?;
    out.print("  section <i> name <text>     rename a section")?;
    out.print("  section <i> prompt <text>   change a section's instruction")?;
    out.print("  delete <i>                  remove a section (irreversible)")?;
    out.print("  regen <i>                   regenerate an edited section")?;
    out.print("  regen all                   regenerate after project edits")?;
    out.print("  save                        write the artifact")?;
    out.print("  quit                        finish and write the artifact")?;
    Ok(())
}

fn show_project(studio: &Studio, out: &OutputManager) -> CliResult<()> {
    let Some(project) = studio.project() else {
        out.warning("no active project")?;
        return Ok(());
    };

    out.header(&project.name)?;
    out.print(&format!("  Description:  {}", project.description))?;
    out.print(&format!("  Color scheme: {}", project.color_scheme))?;
    if studio.project_edited() {
        out.info("  project edited — 'regen all' available")?;
    }
    out.print("")?;
    for (i, section) in project.sections.iter().enumerate() {
        let generated = if section.code.is_some() { "✓" } else { "✗" };
        let dirty = if section.is_edited { " (edited)" } else { "" };
        out.print(&format!("  [{i}] {generated} {}{dirty}", section.name))?;
        out.print(&format!("        prompt: {}", section.prompt))?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
