//! Experiment matrix: workload kinds, system variants and the benchmark
//! executable that covers each pair.

use clap::ValueEnum;
use std::fmt;

/// Key-access distribution driving the benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workload {
    /// Hot-key-biased access
    Skewed,
    /// Even access
    Uniform,
}

impl Workload {
    pub fn as_str(&self) -> &'static str {
        match self {
            Workload::Skewed => "skewed",
            Workload::Uniform => "uniform",
        }
    }
}

/// Engine build under comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemVariant {
    /// Baseline engine
    Origin,
    /// Modified engine
    Custom,
}

impl SystemVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemVariant::Origin => "origin",
            SystemVariant::Custom => "custom",
        }
    }
}

/// `--workload` selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum WorkloadFilter {
    #[default]
    Both,
    Skewed,
    Uniform,
}

impl WorkloadFilter {
    pub fn matches(&self, workload: Workload) -> bool {
        match self {
            WorkloadFilter::Both => true,
            WorkloadFilter::Skewed => workload == Workload::Skewed,
            WorkloadFilter::Uniform => workload == Workload::Uniform,
        }
    }
}

/// `--rocksdb` selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SystemFilter {
    #[default]
    Both,
    Origin,
    Custom,
}

impl SystemFilter {
    pub fn matches(&self, system: SystemVariant) -> bool {
        match self {
            SystemFilter::Both => true,
            SystemFilter::Origin => system == SystemVariant::Origin,
            SystemFilter::Custom => system == SystemVariant::Custom,
        }
    }
}

/// One (workload, system) pair and its executable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experiment {
    pub workload: Workload,
    pub system: SystemVariant,
    pub executable: &'static str,
}

impl Experiment {
    /// Chart file stem, e.g. `uniform_origin`
    pub fn label(&self) -> String {
        format!("{}_{}", self.workload.as_str(), self.system.as_str())
    }
}

impl fmt::Display for Experiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.workload.as_str(), self.system.as_str())
    }
}

/// Fixed experiment matrix, in run order
pub const EXPERIMENTS: [Experiment; 4] = [
    Experiment {
        workload: Workload::Uniform,
        system: SystemVariant::Origin,
        executable: "test_with_origin_rocksdb",
    },
    Experiment {
        workload: Workload::Uniform,
        system: SystemVariant::Custom,
        executable: "test_with_custom_rocksdb",
    },
    Experiment {
        workload: Workload::Skewed,
        system: SystemVariant::Origin,
        executable: "test_with_origin_rocksdb",
    },
    Experiment {
        workload: Workload::Skewed,
        system: SystemVariant::Custom,
        executable: "test_with_custom_rocksdb",
    },
];

/// Experiments matching both filters, in run order
pub fn select_experiments(
    workload: WorkloadFilter,
    system: SystemFilter,
) -> Vec<&'static Experiment> {
    EXPERIMENTS
        .iter()
        .filter(|e| workload.matches(e.workload) && system.matches(e.system))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_both() {
        let selected = select_experiments(WorkloadFilter::Both, SystemFilter::Both);
        let labels: Vec<String> = selected.iter().map(|e| e.label()).collect();
        assert_eq!(
            labels,
            vec!["uniform_origin", "uniform_custom", "skewed_origin", "skewed_custom"]
        );
    }

    #[test]
    fn test_select_single_pair() {
        let selected = select_experiments(WorkloadFilter::Skewed, SystemFilter::Custom);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].executable, "test_with_custom_rocksdb");
        assert_eq!(selected[0].to_string(), "[skewed, custom]");
    }

    #[test]
    fn test_select_by_system() {
        let selected = select_experiments(WorkloadFilter::Both, SystemFilter::Origin);
        assert!(selected.iter().all(|e| e.system == SystemVariant::Origin));
        assert_eq!(selected.len(), 2);
    }
}
