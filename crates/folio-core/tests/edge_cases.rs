//! Edge case and boundary condition tests
//!
//! Unusual inputs and state sequences across the gallery, modal, theme,
//! and page-shell state machines.

use folio_core::contact::{validate, ContactDraft};
use folio_core::theme::{resolve_initial, Theme};
use folio_core::{ChatLog, Gallery, ModalState, PortfolioData, Project, ProjectFilter, TypewriterCycle};

fn project(id: &str, tags: &[&str]) -> Project {
    Project {
        id: id.into(),
        title: format!("Project {id}"),
        short_desc: "short".into(),
        full_desc: "full".into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        image: None,
        image_placeholder: None,
        tech: vec![],
        contributions: vec![],
        year: "2024".into(),
        role: "Developer".into(),
        demo_url: None,
        repo_url: None,
    }
}

// ============================================================================
// Gallery boundaries
// ============================================================================

/// Selecting filters on a never-populated store is harmless
#[test]
fn filter_on_empty_store() {
    let mut gallery = Gallery::new();
    gallery.select_filter("web");
    gallery.select_filter("all");
    assert!(gallery.visible_projects().is_empty());
}

/// A project with no tags is visible only under "all"
#[test]
fn untagged_project_only_matches_all() {
    let mut gallery = Gallery::new();
    gallery.populate(PortfolioData {
        projects: vec![project("bare", &[])],
        filters: vec![ProjectFilter { id: "all".into(), label: "All".into() }],
    });

    assert_eq!(gallery.visible_projects().len(), 1);
    gallery.select_filter("web");
    assert!(gallery.visible_projects().is_empty());
}

/// Re-selecting the already-active filter is a stable no-op
#[test]
fn reselecting_active_filter() {
    let mut gallery = Gallery::new();
    gallery.populate(PortfolioData {
        projects: vec![project("a", &["web"]), project("b", &["ai"])],
        filters: vec![
            ProjectFilter { id: "all".into(), label: "All".into() },
            ProjectFilter { id: "web".into(), label: "Web".into() },
        ],
    });

    gallery.select_filter("web");
    let first: Vec<String> = gallery
        .visible_projects()
        .iter()
        .map(|p| p.id.clone())
        .collect();
    gallery.select_filter("web");
    let second: Vec<String> = gallery
        .visible_projects()
        .iter()
        .map(|p| p.id.clone())
        .collect();
    assert_eq!(first, second);
}

/// Tag matching is exact, not prefix or case-folded
#[test]
fn tag_matching_is_exact() {
    let mut gallery = Gallery::new();
    gallery.populate(PortfolioData {
        projects: vec![project("a", &["web"])],
        filters: vec![ProjectFilter { id: "all".into(), label: "All".into() }],
    });

    gallery.select_filter("We");
    assert!(gallery.visible_projects().is_empty());
    gallery.select_filter("WEB");
    assert!(gallery.visible_projects().is_empty());
    gallery.select_filter("web");
    assert_eq!(gallery.visible_projects().len(), 1);
}

// ============================================================================
// Modal state machine
// ============================================================================

/// close() on a closed modal: no state change, no panic
#[test]
fn double_close_is_safe() {
    let mut modal = ModalState::default();
    let before = modal.clone();
    modal.close();
    assert_eq!(modal, before);
}

/// Rapid open/open/close sequences land in the expected state
#[test]
fn interleaved_open_close() {
    let mut modal = ModalState::default();
    modal.open(project("a", &[]));
    modal.open(project("b", &[]));
    modal.close();
    modal.close();
    assert!(!modal.is_open());

    modal.open(project("c", &[]));
    assert_eq!(modal.project().unwrap().id, "c");
}

// ============================================================================
// Theme resolution boundaries
// ============================================================================

/// The 18:00 and 06:00 boundaries fall on the documented sides
#[test]
fn theme_hour_boundaries() {
    assert_eq!(resolve_initial(None, None, 17), Theme::Light);
    assert_eq!(resolve_initial(None, None, 18), Theme::Dark);
    assert_eq!(resolve_initial(None, None, 5), Theme::Dark);
    assert_eq!(resolve_initial(None, None, 6), Theme::Light);
}

// ============================================================================
// Page-shell state machines
// ============================================================================

/// A single-word typewriter cycle returns to the empty string
#[test]
fn typewriter_single_word_cycles_to_empty() {
    let mut tw = TypewriterCycle::new(vec!["hi".into()]);
    let mut saw_empty_after_full = false;
    let mut saw_full = false;

    for _ in 0..16 {
        let step = tw.tick();
        if step.text == "hi" {
            saw_full = true;
        }
        if saw_full && step.text.is_empty() {
            saw_empty_after_full = true;
        }
    }
    assert!(saw_full);
    assert!(saw_empty_after_full);
}

/// A draft that only fails on email reports exactly one error
#[test]
fn contact_single_invalid_field() {
    let errors = validate(&ContactDraft {
        name: "Ada".into(),
        email: "not-an-email".into(),
        message: "hi".into(),
    });
    assert!(errors.name.is_none());
    assert!(errors.message.is_none());
    assert_eq!(errors.email, Some("Please enter a valid email address"));
}

/// The chat transcript never grows from blank sends
#[test]
fn chat_ignores_blank_sends() {
    let mut log = ChatLog::default();
    let before = log.messages().len();
    for _ in 0..5 {
        log.push_visitor(" \t ");
    }
    assert_eq!(log.messages().len(), before);
}
