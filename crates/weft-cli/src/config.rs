//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it — in particular the
//! API credential goes straight from here into the generator adapter and is
//! treated as opaque everywhere else.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`WEFT_*`, falling back to `OPENAI_API_KEY`)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Generation service settings.
    pub api: ApiConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Endpoint base URL (OpenAI-compatible).
    pub base_url: String,
    /// Model for the scaffold stage.
    pub scaffold_model: String,
    /// Model for per-section generation.
    pub section_model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://api.openai.com/v1".into(),
                scaffold_model: "gpt-4".into(),
                section_model: "gpt-4o".into(),
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults overlaid with environment variables.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = Self::default();

        if let Ok(url) = std::env::var("WEFT_BASE_URL") {
            cfg.api.base_url = url;
        }
        if let Ok(model) = std::env::var("WEFT_SCAFFOLD_MODEL") {
            cfg.api.scaffold_model = model;
        }
        if let Ok(model) = std::env::var("WEFT_SECTION_MODEL") {
            cfg.api.section_model = model;
        }

        Ok(cfg)
    }

    /// Resolve the API credential from the environment.
    ///
    /// `WEFT_API_KEY` wins; `OPENAI_API_KEY` is accepted as the conventional
    /// fallback.  Returns `None` when neither is set — the caller turns that
    /// into a configuration error with suggestions.
    pub fn resolve_api_key() -> Option<String> {
        std::env::var("WEFT_API_KEY")
            .or_else(|_| std::env::var("OPENAI_API_KEY"))
            .ok()
            .filter(|k| !k.trim().is_empty())
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.weft.toml` in the current directory.  File reading
    /// is not implemented yet; the path exists for `--help` text and future
    /// use.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "weft", "weft")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".weft.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_models_split_stages() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.api.scaffold_model, "gpt-4");
        assert_eq!(cfg.api.section_model, "gpt-4o");
    }

    #[test]
    fn default_base_url_is_openai() {
        assert_eq!(
            AppConfig::default().api.base_url,
            "https://api.openai.com/v1"
        );
    }

    #[test]
    fn config_path_is_non_empty() {
        // Just assert it doesn't panic and returns a non-empty path.
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
