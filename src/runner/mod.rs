//! Experiment runner.
//!
//! Maps (workload, system) pairs to benchmark executables and runs them
//! one at a time.

pub mod experiment;
pub mod process;

// Re-export main types
pub use experiment::{
    select_experiments, Experiment, SystemFilter, SystemVariant, Workload, WorkloadFilter,
    EXPERIMENTS,
};
pub use process::BenchmarkProcess;
