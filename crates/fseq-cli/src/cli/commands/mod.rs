//! CLI command handlers. Each command is in its own file.

mod completions;
mod plan;
mod run;

pub use completions::run_completions;
pub use plan::run_plan;
pub use run::run_rename;
