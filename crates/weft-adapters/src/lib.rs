//! Infrastructure adapters for Weft.
//!
//! This crate implements the ports defined in `weft_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod generator;

// Re-export commonly used adapters
pub use generator::{OpenAiGenerator, ScriptedGenerator};
