//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod graph;
pub mod run;
pub mod utils;

// Re-export main command functions
pub use graph::{execute_graph, validate_graph_args, GraphArgs, InputFormat};
pub use run::{execute_run, validate_run_args, RunArgs, RunReport};
pub use utils::{display_formats, display_version, validate_summary_file};
