//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the two
//! generation stages: "scaffold a project" and "generate one section".

pub mod scaffold_service;
pub mod section_service;

pub use scaffold_service::ScaffoldService;
pub use section_service::{SectionOutcome, SectionService};
