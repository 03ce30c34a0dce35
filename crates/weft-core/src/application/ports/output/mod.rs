//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `weft-adapters` crate provides implementations.

use async_trait::async_trait;
use thiserror::Error;

/// Port for outbound text-generation model calls.
///
/// Implemented by:
/// - `weft_adapters::OpenAiGenerator` (production, HTTP)
/// - `weft_adapters::ScriptedGenerator` (testing, in-memory)
///
/// ## Design Notes
///
/// - One call per invocation: no streaming, no built-in retries. Callers
///   that want a retry re-invoke explicitly.
/// - `model` is an opaque identifier; the application configures one model
///   for scaffolding and one for section generation.
/// - Every call is a suspension point; callers may issue many concurrently.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run one prompt through the given model and return the raw text.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GeneratorError>;
}

/// Errors surfaced by `TextGenerator` implementations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// The request never produced a usable HTTP response.
    #[error("transport error: {message}")]
    Transport { message: String },

    /// The service answered with a non-success status.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The response arrived but carried no usable completion.
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },

    /// No credential was available to authorize the call.
    #[error("missing API key: {message}")]
    MissingApiKey { message: String },
}
