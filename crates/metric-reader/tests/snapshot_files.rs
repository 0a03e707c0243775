use std::io::Write;

use deviceinfo_core_types::Metric;
use deviceinfo_diagnostics::{DiagnosticLogger, RecordingConsole};
use deviceinfo_metric_reader::{MetricReader, SnapshotEnvironment, SnapshotError};

fn write_temp(suffix: &str, body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("temp file");
    file.write_all(body.as_bytes()).expect("write snapshot");
    file
}

#[test]
fn json_snapshot_file_feeds_reader() {
    let file = write_temp(
        ".json",
        r#"{"window": {"innerWidth": 1024, "innerHeight": 768, "screen": {"colorDepth": 24}}}"#,
    );
    let env = SnapshotEnvironment::from_path(file.path()).unwrap();
    let console = RecordingConsole::new();
    let reader = MetricReader::new(&env, DiagnosticLogger::new(&console));

    assert_eq!(reader.inner_width(), Metric::Number(1024.0));
    assert_eq!(reader.inner_height(), Metric::Number(768.0));
    assert_eq!(reader.color_depth(), Metric::Number(24.0));
    assert!(console.is_empty());
}

#[test]
fn yaml_snapshot_file_feeds_reader() {
    let file = write_temp(
        ".yml",
        "window:\n  fullScreen: true\n  screen:\n    availWidth: 2560\n",
    );
    let env = SnapshotEnvironment::from_path(file.path()).unwrap();
    let console = RecordingConsole::new();
    let reader = MetricReader::new(&env, DiagnosticLogger::new(&console));

    assert_eq!(reader.fullscreen(), Metric::Flag(true));
    assert_eq!(reader.max_width(), Metric::Number(2560.0));
}

#[test]
fn unknown_extension_is_rejected() {
    let file = write_temp(".txt", "{}");
    let err = SnapshotEnvironment::from_path(file.path()).unwrap_err();
    assert!(matches!(err, SnapshotError::UnsupportedFormat(ext) if ext == "txt"));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = SnapshotEnvironment::from_path("/nonexistent/deviceinfo/host.json").unwrap_err();
    assert!(matches!(err, SnapshotError::Io(_)));
}
