//! Benchmark subprocess execution.
//!
//! The benchmark prints one breakdown line per read. Its stdout is
//! parsed while it runs; the run blocks until the process exits.

use crate::parser::{parse_reader, Trace, TraceFormat};
use crate::utils::error::RunnerError;
use log::{debug, info, warn};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// A precompiled benchmark executable
pub struct BenchmarkProcess {
    path: PathBuf,
}

impl BenchmarkProcess {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the executable is present
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Run to completion and parse its stdout
    ///
    /// A non-zero exit status is logged but the parsed trace is still
    /// returned. No timeout, no retry.
    ///
    /// # Errors
    /// * `RunnerError::SpawnFailed` - the process could not be started
    /// * `RunnerError::Parse` - stdout is not in `format`
    /// * `RunnerError::WaitFailed` - waiting for exit failed
    pub fn run(&self, format: TraceFormat) -> Result<Trace, RunnerError> {
        info!("Starting benchmark: {}", self.path.display());

        let mut child = Command::new(&self.path)
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|source| RunnerError::SpawnFailed {
                path: self.path.clone(),
                source,
            })?;

        let stdout = child.stdout.take().ok_or(RunnerError::MissingStdout)?;

        // stdout is dropped before waiting so a failed parse cannot block the child
        let parsed = parse_reader(BufReader::new(stdout), format);

        let status = child.wait().map_err(RunnerError::WaitFailed)?;
        if status.success() {
            debug!("Benchmark exited: {}", status);
        } else {
            warn!("Benchmark {} exited with {}", self.path.display(), status);
        }

        let trace = parsed?;
        info!("Collected {} records", trace.len());
        Ok(trace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_is_the_configured_executable() {
        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("test_with_origin_rocksdb");
        let process = BenchmarkProcess::new(&exe);

        assert_eq!(process.path(), exe.as_path());
        assert!(!process.exists());

        std::fs::write(&exe, "").unwrap();
        assert!(process.exists());
    }

    #[test]
    fn test_directory_is_not_an_executable() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!BenchmarkProcess::new(dir.path()).exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_keeps_trace() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("failing_bench");
        std::fs::write(&exe, "#!/bin/sh\nprintf '7\\n9\\n'\nexit 3\n").unwrap();
        std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).unwrap();

        let trace = BenchmarkProcess::new(&exe).run(TraceFormat::Single).unwrap();
        assert_eq!(trace.len(), 2);
    }
}
