//! `TextGenerator` implementations.

pub mod openai;
pub mod scripted;

pub use openai::OpenAiGenerator;
pub use scripted::ScriptedGenerator;
