//! Gallery load/render pipeline tests
//!
//! Exercises the load -> populate -> filter -> lookup flow against real
//! files on disk, including the failure paths that must degrade to the
//! fallback state instead of erroring out.

use std::path::PathBuf;

use folio_core::{load_portfolio, Gallery, GalleryStatus, ModalState};
use tempfile::TempDir;

/// Write `contents` as projects.json inside a fresh temp dir.
fn write_data(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("projects.json");
    std::fs::write(&path, contents).expect("write data file");
    (dir, path)
}

const SAMPLE: &str = r#"{
    "projects": [
        {
            "id": "p1",
            "title": "X",
            "shortDesc": "short",
            "fullDesc": "full",
            "tags": ["web", "ai"],
            "tech": ["Rust"],
            "contributions": ["Everything"],
            "year": "2024",
            "role": "Developer",
            "demoUrl": "https://example.com/demo"
        }
    ],
    "filters": [
        { "id": "all", "label": "All" },
        { "id": "web", "label": "Web" }
    ]
}"#;

#[tokio::test]
async fn load_populates_store_in_order() {
    let (_dir, path) = write_data(SAMPLE);

    let data = load_portfolio(&path).await.expect("load sample");
    let mut gallery = Gallery::new();
    gallery.populate(data);

    assert_eq!(gallery.status(), GalleryStatus::Ready);
    assert_eq!(gallery.projects().len(), 1);
    assert_eq!(gallery.filters().len(), 2);
    assert_eq!(gallery.active_filter(), "all");
    assert_eq!(gallery.visible_projects().len(), 1);
}

/// The scenario from the behavior contract: initial render shows the card
/// with "All" active; selecting "web" still matches; selecting an id that
/// is not in the filter list yields zero cards and no error.
#[tokio::test]
async fn filter_scenario_known_and_unknown_ids() {
    let (_dir, path) = write_data(SAMPLE);
    let mut gallery = Gallery::new();
    gallery.populate(load_portfolio(&path).await.unwrap());

    assert_eq!(gallery.visible_projects().len(), 1);

    gallery.select_filter("web");
    assert_eq!(gallery.visible_projects().len(), 1);

    gallery.select_filter("mobile");
    assert_eq!(gallery.visible_projects().len(), 0);
    assert_eq!(gallery.active_filter(), "mobile");
}

#[tokio::test]
async fn missing_keys_are_empty_lists_not_errors() {
    let (_dir, path) = write_data("{}");

    let data = load_portfolio(&path).await.expect("empty document is valid");
    assert!(data.projects.is_empty());
    assert!(data.filters.is_empty());
}

#[tokio::test]
async fn missing_file_fails_and_store_degrades() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");

    let result = load_portfolio(&path).await;
    assert!(result.is_err());

    // The UI reaction: fail() the store, which must leave it empty and
    // harmless under any later filter selection.
    let mut gallery = Gallery::new();
    gallery.fail();
    assert_eq!(gallery.status(), GalleryStatus::Failed);
    gallery.select_filter("web");
    assert!(gallery.visible_projects().is_empty());
    assert!(gallery.project_by_id("p1").is_none());
}

#[tokio::test]
async fn malformed_payload_fails() {
    let (_dir, path) = write_data("{ not json at all");
    assert!(load_portfolio(&path).await.is_err());
}

#[tokio::test]
async fn wrong_shape_payload_fails() {
    let (_dir, path) = write_data(r#"{ "projects": "not-a-list" }"#);
    assert!(load_portfolio(&path).await.is_err());
}

/// Clicking the card rendered for "b" must open the modal on project "b",
/// resolved against the full store, with action buttons decided by link
/// presence.
#[tokio::test]
async fn card_to_modal_resolution() {
    let (_dir, path) = write_data(
        r#"{
            "projects": [
                { "id": "a", "title": "First", "shortDesc": "s", "fullDesc": "f",
                  "tags": ["web"], "tech": ["Rust"], "contributions": ["c1"],
                  "year": "2023", "role": "Dev" },
                { "id": "b", "title": "Second", "shortDesc": "s", "fullDesc": "full text",
                  "tags": ["ai"], "tech": ["Rust", "Tokio"], "contributions": ["c1", "c2"],
                  "year": "2024", "role": "Lead", "demoUrl": "https://example.com" }
            ],
            "filters": [{ "id": "all", "label": "All" }]
        }"#,
    );
    let mut gallery = Gallery::new();
    gallery.populate(load_portfolio(&path).await.unwrap());

    let project = gallery.project_by_id("b").expect("b resolves").clone();
    let mut modal = ModalState::default();
    modal.open(project);

    let shown = modal.project().unwrap();
    assert_eq!(shown.title, "Second");
    assert_eq!(shown.full_desc, "full text");
    assert_eq!(shown.tech, ["Rust", "Tokio"]);
    assert_eq!(shown.contributions, ["c1", "c2"]);
    assert!(shown.demo_url.is_some());
    assert!(shown.repo_url.is_none());
}
