//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No generation logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "weft",
    bin_name = "weft",
    version  = env!("CARGO_PKG_VERSION"),
    author   = "Weft contributors",
    about    = "\u{1f9f5} Describe a website, get a website",
    long_about = "Weft turns a short project description into a complete \
                  multi-section website via staged model calls, then lets \
                  you edit sections and regenerate only what changed.",
    after_help = "EXAMPLES:\n\
        \x20 weft new \"A bakery landing page\"\n\
        \x20 weft new \"A retro arcade fan site\" -o arcade.html --interactive\n\
        \x20 weft new \"A portfolio for a ceramicist\" --section-model gpt-4o\n\
        \x20 weft completions bash > /usr/share/bash-completion/completions/weft",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new website from a description.
    #[command(
        visible_alias = "n",
        about = "Generate a new website",
        after_help = "EXAMPLES:\n\
            \x20 weft new \"A bakery landing page\"\n\
            \x20 weft new \"A climbing gym site\" -o gym.html\n\
            \x20 weft new \"A newsletter signup page\" --interactive"
    )]
    New(NewArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 weft completions bash > ~/.local/share/bash-completion/completions/weft\n\
            \x20 weft completions zsh  > ~/.zfunc/_weft\n\
            \x20 weft completions fish > ~/.config/fish/completions/weft.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `weft new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Free-text description of the website to generate.
    #[arg(value_name = "DESCRIPTION", help = "What the website should be")]
    pub description: String,

    /// Where to write the assembled artifact.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        default_value = "site.html",
        help = "Output file for the assembled markup"
    )]
    pub output: PathBuf,

    /// Model used for the scaffold stage.
    #[arg(
        long = "scaffold-model",
        value_name = "MODEL",
        help = "Model for project scaffolding"
    )]
    pub scaffold_model: Option<String>,

    /// Model used for per-section generation.
    #[arg(
        long = "section-model",
        value_name = "MODEL",
        help = "Model for section generation"
    )]
    pub section_model: Option<String>,

    /// Enter the edit/regenerate session after the initial generation.
    #[arg(
        short = 'i',
        long = "interactive",
        help = "Edit sections and regenerate interactively"
    )]
    pub interactive: bool,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and generate immediately"
    )]
    pub yes: bool,

    /// Preview the run without calling the generation service.
    #[arg(long = "dry-run", help = "Show what would be generated without generating")]
    pub dry_run: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `weft completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
