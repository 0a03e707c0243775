use deviceinfo_cli::classifier::{ClassifierThresholds, ScreenRole, WindowState};
use deviceinfo_cli::core_types::TargetId;
use deviceinfo_cli::diagnostics::RecordingConsole;
use deviceinfo_cli::metric_reader::SnapshotEnvironment;
use deviceinfo_cli::presenter::{HostPage, MemoryPage, PageTemplate, SlotStatus};
use deviceinfo_cli::DeviceInfo;

fn fixture(name: &str) -> SnapshotEnvironment {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    SnapshotEnvironment::from_path(path).expect("fixture loads")
}

fn text<'a>(page: &'a MemoryPage, id: &str) -> Option<&'a str> {
    page.target(id).and_then(|slot| slot.text())
}

#[test]
fn maximized_desktop_fills_every_target() {
    let mut app = DeviceInfo::new(
        fixture("desktop.json"),
        MemoryPage::standard(),
        RecordingConsole::new(),
    );

    let report = app.execute();
    assert!(report.all_written());
    assert_eq!(report.outcomes.len(), TargetId::ALL.len());

    let page = app.page();
    assert_eq!(text(page, "window-inner-dimension"), Some("1024x768"));
    assert_eq!(text(page, "window-outer-dimension"), Some("1024x768"));
    assert_eq!(text(page, "window-max-dimension"), Some("1024x768"));
    assert_eq!(text(page, "window-size"), Some("Maximized"));
    assert_eq!(text(page, "screen-dimension"), Some("1024x768"));
    assert_eq!(text(page, "screen-pixel-ratio"), Some("2x"));
    assert_eq!(text(page, "screen-color-depth"), Some("24 Bit"));
    assert_eq!(text(page, "screen-type"), Some("Primary Screen"));
    assert_eq!(text(page, "screen-position"), Some("Center"));
    assert!(app.console().is_empty());
}

#[test]
fn secondary_monitor_snapshot_is_classified_and_flags_missing_depth() {
    let mut app = DeviceInfo::new(
        fixture("secondary.yaml"),
        MemoryPage::standard(),
        RecordingConsole::new(),
    );

    assert_eq!(app.window_size(), WindowState::Restored);
    assert_eq!(app.screen_type(), ScreenRole::Secondary);

    let report = app.execute();
    let page = app.page();
    assert_eq!(text(page, "screen-type"), Some("Secondary Screen"));
    assert_eq!(text(page, "screen-position"), Some("Left Top"));
    assert_eq!(text(page, "screen-pixel-ratio"), Some("1.25x"));
    assert_eq!(text(page, "screen-color-depth"), Some("undefined Bit"));

    let depth = report.outcome(TargetId::ScreenColorDepth).unwrap();
    assert_eq!(depth.status, SlotStatus::Failure);
    assert!(depth.written);
    assert_eq!(
        page.target("screen-color-depth").unwrap().status(),
        Some(SlotStatus::Failure)
    );
    assert_eq!(
        report.outcome(TargetId::WindowSize).unwrap().status,
        SlotStatus::Success
    );
    assert_eq!(app.console().count("warn"), 1);
}

#[test]
fn missing_targets_are_skipped_without_stopping_the_run() {
    let template_path = format!(
        "{}/tests/fixtures/partial-page.yaml",
        env!("CARGO_MANIFEST_DIR")
    );
    let template = PageTemplate::from_path(template_path).unwrap();
    let page = MemoryPage::from_template(&template).unwrap();
    let mut app = DeviceInfo::new(fixture("desktop.json"), page, RecordingConsole::new());

    let report = app.execute();

    assert_eq!(report.written_count(), 3);
    assert!(!report.outcome(TargetId::ScreenType).unwrap().written);
    assert!(report.outcome(TargetId::ScreenPosition).unwrap().written);
    assert_eq!(text(app.page(), "screen-position"), Some("Center"));
    assert_eq!(app.console().count("error"), TargetId::ALL.len() - 3);
}

#[test]
fn empty_host_degrades_to_sentinels_and_fallback_labels() {
    let mut app = DeviceInfo::new(
        SnapshotEnvironment::default(),
        MemoryPage::standard(),
        RecordingConsole::new(),
    );

    let report = app.execute();
    assert!(report.all_written());

    let page = app.page();
    assert_eq!(text(page, "window-inner-dimension"), Some("undefinedxundefined"));
    assert_eq!(text(page, "window-size"), Some("Restored"));
    assert_eq!(text(page, "screen-type"), Some("Primary Screen"));
    assert_eq!(text(page, "screen-position"), Some("Center"));
    assert_eq!(
        report
            .outcome(TargetId::WindowInnerDimension)
            .unwrap()
            .status,
        SlotStatus::Failure
    );
    assert_eq!(app.console().count("error"), 0);
    assert!(app.console().count("warn") > 0);
}

#[test]
fn minimized_window_uses_configured_size() {
    let env = fixture("desktop.json")
        .with("window.outerWidth", 160)
        .with("window.outerHeight", 28);
    let app = DeviceInfo::new(&env, MemoryPage::standard(), RecordingConsole::new());
    assert_eq!(app.window_size(), WindowState::Minimized);

    let app = app.with_thresholds(ClassifierThresholds {
        minimized_width: 36.0,
        minimized_height: 36.0,
    });
    assert_eq!(app.window_size(), WindowState::Restored);
}

#[test]
fn fullscreen_flag_wins_over_maximized() {
    let env = fixture("desktop.json").with("window.fullScreen", true);
    let mut app = DeviceInfo::new(env, MemoryPage::standard(), RecordingConsole::new());
    assert!(app.set_window_size());
    assert_eq!(text(app.page(), "window-size"), Some("Fullscreen"));
}

#[test]
fn logging_contract_through_the_application() {
    let app = DeviceInfo::new(
        fixture("desktop.json"),
        MemoryPage::standard(),
        RecordingConsole::new(),
    );

    assert!(app.log("debug", &["test"]));
    assert!(!app.log("something", &["test"]));
    assert!(!app.log("debug", &[]));

    let console = app.console();
    assert_eq!(console.entries().len(), 3);
    assert_eq!(console.count("error"), 1);
    assert_eq!(console.count("debug"), 2);
}
