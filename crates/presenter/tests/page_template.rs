use std::io::Write;

use deviceinfo_presenter::{HostPage, MemoryPage, PageError, PageTemplate};

fn write_temp(suffix: &str, body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("temp file");
    file.write_all(body.as_bytes()).expect("write template");
    file
}

#[test]
fn yaml_template_builds_partial_page() {
    let file = write_temp(
        ".yaml",
        "targets:\n  - id: window-size\n  - id: screen-position\n    label: Where\n",
    );
    let template = PageTemplate::from_path(file.path()).unwrap();
    let page = MemoryPage::from_template(&template).unwrap();

    assert_eq!(page.slots().len(), 2);
    assert_eq!(page.target("window-size").unwrap().label(), "Window Size");
    assert_eq!(page.target("screen-position").unwrap().label(), "Where");
    assert!(page.target("screen-type").is_none());
}

#[test]
fn json_template_matches_standard_layout() {
    let body = serde_json::to_string(&PageTemplate::standard()).unwrap();
    let file = write_temp(".json", &body);
    let template = PageTemplate::from_path(file.path()).unwrap();

    assert_eq!(
        MemoryPage::from_template(&template).unwrap(),
        MemoryPage::standard()
    );
}

#[test]
fn unknown_template_extension_is_rejected() {
    let file = write_temp(".ini", "targets = []");
    assert!(matches!(
        PageTemplate::from_path(file.path()),
        Err(PageError::UnsupportedFormat(ext)) if ext == "ini"
    ));
}
