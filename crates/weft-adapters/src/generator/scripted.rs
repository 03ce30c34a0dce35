//! Scripted in-memory generator.
//!
//! Deterministic `TextGenerator` for tests and offline demos: responses come
//! from substring-matched rules instead of a model, and every call is
//! recorded for inspection.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use weft_core::application::ports::{GeneratorError, TextGenerator};

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub model: String,
    pub prompt: String,
}

#[derive(Debug, Clone)]
enum Rule {
    Respond { needle: String, text: String },
    Fail { needle: String, error: GeneratorError },
}

/// Thread-safe scripted generator.
///
/// Rules are checked in insertion order against the incoming prompt; the
/// first rule whose needle is contained in the prompt wins. Prompts matching
/// no rule fall back to a fixed default response (or an error if none is
/// configured).
#[derive(Clone, Default)]
pub struct ScriptedGenerator {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    rules: Vec<Rule>,
    fallback: Option<String>,
    calls: Vec<RecordedCall>,
}

impl ScriptedGenerator {
    /// Create a generator with no rules and no fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond with `text` to any prompt containing `needle`.
    pub fn respond_to(self, needle: impl Into<String>, text: impl Into<String>) -> Self {
        self.inner.lock().unwrap().rules.push(Rule::Respond {
            needle: needle.into(),
            text: text.into(),
        });
        self
    }

    /// Fail any prompt containing `needle` with the given error.
    pub fn fail_on(self, needle: impl Into<String>, error: GeneratorError) -> Self {
        self.inner.lock().unwrap().rules.push(Rule::Fail {
            needle: needle.into(),
            error,
        });
        self
    }

    /// Respond with `text` to any prompt no rule matched.
    pub fn with_fallback(self, text: impl Into<String>) -> Self {
        self.inner.lock().unwrap().fallback = Some(text.into());
        self
    }

    /// Every call made so far, in completion order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap().calls.len()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GeneratorError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(RecordedCall {
            model: model.to_string(),
            prompt: prompt.to_string(),
        });

        for rule in &inner.rules {
            match rule {
                Rule::Respond { needle, text } if prompt.contains(needle.as_str()) => {
                    return Ok(text.clone());
                }
                Rule::Fail { needle, error } if prompt.contains(needle.as_str()) => {
                    return Err(error.clone());
                }
                _ => {}
            }
        }

        inner
            .fallback
            .clone()
            .ok_or_else(|| GeneratorError::InvalidResponse {
                message: format!("no scripted rule matched prompt for model '{model}'"),
            })
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
