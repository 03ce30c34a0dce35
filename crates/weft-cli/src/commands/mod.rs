//! Command handlers.  One module per subcommand; no generation logic here.

pub mod completions;
pub mod new;
