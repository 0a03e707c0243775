use assert_cmd::prelude::*;
use serde_json::Value;
use std::process::Command;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn deviceinfo() -> Command {
    let bin = assert_cmd::cargo::cargo_bin!("deviceinfo");
    Command::new(bin)
}

#[test]
fn inspect_json_report_contains_reference_values() {
    let assert = deviceinfo()
        .args(["--output", "json", "inspect", "--host"])
        .arg(fixture("desktop.json"))
        .assert()
        .success();

    let payload: Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid JSON report");
    let outcomes = payload
        .get("outcomes")
        .and_then(|v| v.as_array())
        .expect("outcomes array present");
    assert_eq!(outcomes.len(), 9);

    let text_of = |target: &str| {
        outcomes
            .iter()
            .find(|o| o["target"] == target)
            .and_then(|o| o["text"].as_str())
            .map(str::to_string)
    };
    assert_eq!(text_of("window-inner-dimension").as_deref(), Some("1024x768"));
    assert_eq!(text_of("window-outer-dimension").as_deref(), Some("1024x768"));
    assert_eq!(text_of("window-size").as_deref(), Some("Maximized"));
    assert_eq!(text_of("screen-type").as_deref(), Some("Primary Screen"));
    assert!(payload.get("run_id").and_then(|v| v.as_str()).is_some());
}

#[test]
fn inspect_with_partial_page_still_succeeds() {
    let assert = deviceinfo()
        .args(["inspect", "--host"])
        .arg(fixture("desktop.json"))
        .arg("--page")
        .arg(fixture("partial-page.yaml"))
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("window-size"));
    assert!(stdout.contains("missing target"));
}

#[test]
fn inspect_html_marks_unavailable_values() {
    let assert = deviceinfo()
        .args(["--output", "html", "inspect", "--host"])
        .arg(fixture("secondary.yaml"))
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("<span class=\"text-danger\">undefined Bit</span>"));
    assert!(stdout.contains("<span class=\"text-success\">Secondary Screen</span>"));
}

#[test]
fn inspect_fails_for_missing_snapshot() {
    deviceinfo()
        .args(["inspect", "--host", "/nonexistent/host.json"])
        .assert()
        .failure();
}

#[test]
fn classify_reports_left_top_secondary() {
    let assert = deviceinfo()
        .args([
            "--output",
            "json",
            "classify",
            "--outer",
            "800x600",
            "--avail",
            "1920x1040",
            "--position",
            "-10,-10",
        ])
        .assert()
        .success();

    let payload: Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid JSON labels");
    assert_eq!(payload["window_size"], "Restored");
    assert_eq!(payload["screen_type"], "Secondary Screen");
    assert_eq!(payload["screen_position"], "Left Top");
}

#[test]
fn targets_lists_every_slot() {
    let assert = deviceinfo().arg("targets").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert_eq!(stdout.lines().count(), 9);
    assert!(stdout.contains("screen-pixel-ratio"));
}
