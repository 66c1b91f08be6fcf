use portfolio::page::html::{PARTICLE_CANVAS_CLASS, SCROLL_TARGET_ATTR};
use portfolio::page::{Page, ABOUT_ANCHOR};

#[test]
fn test_write_html_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("index.html");

    Page::portfolio().write_html(&path).unwrap();

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(
        html.matches(&format!("class=\"{}\"", PARTICLE_CANVAS_CLASS)).count(),
        2
    );
    assert!(html.contains(&format!("{}=\"{}\"", SCROLL_TARGET_ATTR, ABOUT_ANCHOR)));
    assert!(html.contains(&format!("id=\"{}\"", ABOUT_ANCHOR)));
}

#[test]
fn test_json_export_lists_sections() {
    let json = Page::portfolio().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let sections = value["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 9);
    assert_eq!(sections[0]["section"], "hero");
    assert_eq!(sections[8]["section"], "footer");
}

#[test]
fn test_scroll_target_resolution() {
    let page = Page::portfolio();
    assert_eq!(page.scroll_target(ABOUT_ANCHOR).map(|s| s.name()), Some("about"));
    assert!(page.scroll_target("nowhere").is_none());
}
