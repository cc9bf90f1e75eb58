use latency_breakdown::commands::{
    execute_graph, execute_run, validate_summary_file, GraphArgs, InputFormat, RunArgs,
};
use latency_breakdown::runner::{SystemFilter, WorkloadFilter};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn write_log(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_graph_without_file_is_clean() {
    let result = execute_graph(GraphArgs::default()).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_graph_missing_file_fails() {
    let args = GraphArgs {
        input: Some("/no/such/trace.log".into()),
        ..Default::default()
    };
    assert!(execute_graph(args).is_err());
}

#[test]
fn test_graph_breakdown_writes_chart_and_summary() {
    let log = write_log("1\t2\t0\t0\t0\t0\t0\t1\n2\t2\t1\t0\t0\t0\t0\t1\n");
    let out_dir = tempfile::tempdir().unwrap();
    let svg_path = out_dir.path().join("breakdown.svg");
    let json_path = out_dir.path().join("breakdown.json");

    let args = GraphArgs {
        input: Some(log.path().to_path_buf()),
        labels: true,
        output_svg: Some(svg_path.clone()),
        output_json: Some(json_path.clone()),
        ..Default::default()
    };

    let written = execute_graph(args).unwrap();

    assert_eq!(written, Some(svg_path.clone()));
    assert!(std::fs::read_to_string(&svg_path)
        .unwrap()
        .contains("GET_FROM_MEMTABLE_TIME"));
    assert!(validate_summary_file(json_path).is_ok());
}

#[test]
fn test_graph_timestamped_line_chart() {
    let log = write_log("1\t10000\n1\t20000\n2\t5000\n");
    let out_dir = tempfile::tempdir().unwrap();
    let svg_path = out_dir.path().join("latency.svg");

    let args = GraphArgs {
        input: Some(log.path().to_path_buf()),
        format: InputFormat::Timestamped,
        output_svg: Some(svg_path.clone()),
        ..Default::default()
    };

    execute_graph(args).unwrap();
    assert!(svg_path.exists());
}

#[test]
fn test_graph_malformed_log_fails() {
    let log = write_log("1\t2\t3\n");
    let out_dir = tempfile::tempdir().unwrap();
    let svg_path = out_dir.path().join("never.svg");

    let args = GraphArgs {
        input: Some(log.path().to_path_buf()),
        output_svg: Some(svg_path.clone()),
        ..Default::default()
    };

    assert!(execute_graph(args).is_err());
    assert!(!svg_path.exists());
}

#[test]
fn test_graph_empty_log_fails() {
    let log = write_log("");
    let out_dir = tempfile::tempdir().unwrap();

    let args = GraphArgs {
        input: Some(log.path().to_path_buf()),
        output_svg: Some(out_dir.path().join("empty.svg")),
        ..Default::default()
    };

    assert!(execute_graph(args).is_err());
}

#[test]
fn test_run_stops_at_first_missing_executable() {
    let bin_dir = tempfile::tempdir().unwrap();
    let result_dir = tempfile::tempdir().unwrap();

    // custom build present, origin build missing: the run must stop at
    // (uniform, origin) instead of skipping ahead
    std::fs::write(bin_dir.path().join("test_with_custom_rocksdb"), "").unwrap();

    let args = RunArgs {
        bin_dir: bin_dir.path().to_path_buf(),
        result_dir: result_dir.path().to_path_buf(),
        ..Default::default()
    };

    let report = execute_run(args).unwrap();

    assert!(report.charts.is_empty());
    assert_eq!(
        report.missing_executable.as_deref(),
        Some("test_with_origin_rocksdb")
    );
}

#[cfg(unix)]
fn install_script(dir: &Path, name: &str, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(unix)]
#[test]
fn test_run_benchmark_subprocess() {
    let bin_dir = tempfile::tempdir().unwrap();
    let result_dir = tempfile::tempdir().unwrap();
    let charts = result_dir.path().join("result");

    install_script(
        bin_dir.path(),
        "test_with_custom_rocksdb",
        r"printf '10\t20\t0\t0\t0\t0\t0\t5\n12\t22\t7\t0\t0\t0\t0\t5\n'",
    );

    let args = RunArgs {
        workload: WorkloadFilter::Skewed,
        system: SystemFilter::Custom,
        bin_dir: bin_dir.path().to_path_buf(),
        result_dir: charts.clone(),
        write_json: true,
        print_summary: false,
    };

    let report = execute_run(args).unwrap();

    assert_eq!(report.charts, vec![charts.join("skewed_custom.svg")]);
    assert!(report.missing_executable.is_none());
    assert!(charts.join("skewed_custom.json").exists());

    // malformed benchmark output fails the run
    install_script(bin_dir.path(), "test_with_origin_rocksdb", "echo 'not a number'");

    let args = RunArgs {
        workload: WorkloadFilter::Uniform,
        system: SystemFilter::Origin,
        bin_dir: bin_dir.path().to_path_buf(),
        result_dir: charts.clone(),
        ..Default::default()
    };

    assert!(execute_run(args).is_err());
    assert!(!charts.join("uniform_origin.svg").exists());
}

#[cfg(unix)]
#[test]
fn test_run_nonzero_exit_still_charts() {
    let bin_dir = tempfile::tempdir().unwrap();
    let result_dir = tempfile::tempdir().unwrap();

    // valid breakdown output followed by a failing exit status
    install_script(
        bin_dir.path(),
        "test_with_origin_rocksdb",
        "printf '1\\t2\\t0\\t0\\t0\\t0\\t0\\t1\\n3\\t2\\t1\\t0\\t0\\t0\\t0\\t1\\n'\nexit 3",
    );

    let args = RunArgs {
        workload: WorkloadFilter::Uniform,
        system: SystemFilter::Origin,
        bin_dir: bin_dir.path().to_path_buf(),
        result_dir: result_dir.path().to_path_buf(),
        ..Default::default()
    };

    let report = execute_run(args).unwrap();
    let chart = result_dir.path().join("uniform_origin.svg");

    assert_eq!(report.charts, vec![chart.clone()]);
    assert!(report.missing_executable.is_none());
    assert!(std::fs::read_to_string(&chart)
        .unwrap()
        .contains("GET_SNAPSHOT_TIME"));
}
