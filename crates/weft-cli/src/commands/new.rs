//! Implementation of the `weft new` command.
//!
//! Responsibility: translate CLI arguments into a generation run, drive the
//! core studio, and display results. No generation logic lives here.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use weft_adapters::OpenAiGenerator;
use weft_core::application::{GenerationModels, GenerationReport, Studio};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    interactive,
    output::OutputManager,
};

/// Execute the `weft new` command.
///
/// Dispatch sequence:
/// 1. Validate the description
/// 2. Resolve models (flags override config)
/// 3. Confirm with user unless `--yes` or `--quiet`
/// 4. Early-exit if `--dry-run`
/// 5. Scaffold + generate via the studio
/// 6. Optional interactive edit session
/// 7. Write the assembled artifact
#[instrument(skip_all)]
pub async fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Validate description
    validate_description(&args.description)?;

    // 2. Resolve models
    let models = GenerationModels {
        scaffold: args
            .scaffold_model
            .clone()
            .unwrap_or_else(|| config.api.scaffold_model.clone()),
        section: args
            .section_model
            .clone()
            .unwrap_or_else(|| config.api.section_model.clone()),
    };

    debug!(
        scaffold_model = %models.scaffold,
        section_model = %models.section,
        output = %args.output.display(),
        "Run resolved"
    );

    // 3. Show configuration and confirm
    if !global.quiet && !args.yes && !args.dry_run {
        show_configuration(&args, &models, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 4. Dry run: describe but do not generate.
    if args.dry_run {
        output.info("Dry run: no model calls will be made")?;
        output.info(&format!("  Description:    {}", args.description))?;
        output.info(&format!("  Scaffold model: {}", models.scaffold))?;
        output.info(&format!("  Section model:  {}", models.section))?;
        output.info(&format!("  Artifact:       {}", args.output.display()))?;
        return Ok(());
    }

    // 5. Build the generator adapter and the studio
    let api_key = AppConfig::resolve_api_key().ok_or(CliError::MissingApiKey)?;
    let generator = Arc::new(OpenAiGenerator::with_base_url(
        api_key,
        config.api.base_url.clone(),
    ));
    let mut studio = Studio::new(generator, models);

    output.header("Generating website...")?;
    info!("Generation started");

    let report = studio
        .generate_site(&args.description)
        .await
        .map_err(CliError::Core)?;

    show_report(&report, &studio, &output)?;

    // 6. Interactive edit session
    if args.interactive {
        interactive::run_session(&mut studio, &args.output, &output).await?;
    }

    // 7. Write artifact
    write_artifact(&studio, &args.output)?;
    output.success(&format!("Artifact written to {}", args.output.display()))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  open {}", args.output.display()))?;
        if !args.interactive {
            output.print("  # Re-run with --interactive to edit sections")?;
        }
    }

    Ok(())
}

// ── Validation ────────────────────────────────────────────────────────────────

fn validate_description(description: &str) -> CliResult<()> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(CliError::InvalidDescription {
            reason: "description cannot be empty".into(),
        });
    }
    if trimmed.len() < 3 {
        return Err(CliError::InvalidDescription {
            reason: "description is too short to mean anything".into(),
        });
    }
    Ok(())
}

// ── Result display ────────────────────────────────────────────────────────────

/// Show what the run settled into: per-section status plus one line per
/// failure, naming the section.
pub fn show_report(
    report: &GenerationReport,
    studio: &Studio,
    out: &OutputManager,
) -> CliResult<()> {
    if out.format() == crate::cli::OutputFormat::Json {
        println!("{}", report_json(report, studio));
        return Ok(());
    }

    if let Some(project) = studio.project() {
        out.print("")?;
        out.header(&format!("{} — sections:", project.name))?;
        for (i, section) in project.sections.iter().enumerate() {
            let status = if section.code.is_some() { "✓" } else { "✗" };
            out.print(&format!("  [{i}] {status} {}", section.name))?;
        }
    }

    for failure in &report.failures {
        out.error(&format!(
            "Failed to generate section '{}': {}",
            failure.name, failure.reason
        ))?;
    }

    if report.failures.is_empty() {
        out.success(&format!("{} sections generated", report.generated))?;
    } else {
        out.warning(&format!(
            "{} generated, {} failed — failed sections keep their previous content",
            report.generated,
            report.failures.len()
        ))?;
    }
    Ok(())
}

/// Machine-readable run summary for `--output-format json`.
fn report_json(report: &GenerationReport, studio: &Studio) -> String {
    let sections: Vec<serde_json::Value> = studio
        .project()
        .map(|p| {
            p.sections
                .iter()
                .map(|s| {
                    serde_json::json!({
                        "name": s.name,
                        "generated": s.code.is_some(),
                        "edited": s.is_edited,
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    let failures: Vec<serde_json::Value> = report
        .failures
        .iter()
        .map(|f| serde_json::json!({ "section": f.name, "reason": f.reason }))
        .collect();

    serde_json::json!({
        "generated": report.generated,
        "sections": sections,
        "failures": failures,
    })
    .to_string()
}

/// Write the assembled artifact to disk.
pub fn write_artifact(studio: &Studio, path: &Path) -> CliResult<()> {
    let html = studio.assemble().map_err(CliError::Core)?;
    std::fs::write(path, html).map_err(|source| CliError::ArtifactWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "Artifact written");
    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(args: &NewArgs, models: &GenerationModels, out: &OutputManager) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Description:    {}", args.description))?;
    out.print(&format!("  Scaffold model: {}", models.scaffold))?;
    out.print(&format!("  Section model:  {}", models.section))?;
    out.print(&format!("  Artifact:       {}", args.output.display()))?;
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
