//! Project gallery store
//!
//! Holds the full ordered project list as loaded, the filter list, and the
//! single currently-active filter id. The store is created empty, populated
//! exactly once by a successful data load, and never persisted. A failed
//! load leaves it empty in the `Failed` state so the UI can render a static
//! fallback instead of crashing.

use crate::types::{PortfolioData, Project, ProjectFilter};

/// The reserved no-filter id. Always present in the filter list and active
/// by default.
pub const ALL_FILTER: &str = "all";

/// Load lifecycle of the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalleryStatus {
    /// Data fetch not yet resolved
    #[default]
    Loading,
    /// Populated by a successful load
    Ready,
    /// Load failed; store stays empty and the grid shows a fallback
    Failed,
}

/// In-memory project store plus the active filter.
///
/// Invariant: `visible_projects()` is always exactly
/// `{ p in projects : filter == "all" or filter in p.tags }`, in original
/// load order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gallery {
    status: GalleryStatus,
    projects: Vec<Project>,
    filters: Vec<ProjectFilter>,
    active_filter: String,
}

impl Gallery {
    /// Create an empty store in the `Loading` state with `"all"` active.
    pub fn new() -> Self {
        Self {
            status: GalleryStatus::Loading,
            projects: Vec::new(),
            filters: Vec::new(),
            active_filter: ALL_FILTER.to_string(),
        }
    }

    /// Replace the store's contents with a successfully loaded document.
    pub fn populate(&mut self, data: PortfolioData) {
        tracing::info!(
            projects = data.projects.len(),
            filters = data.filters.len(),
            "gallery populated"
        );
        self.projects = data.projects;
        self.filters = data.filters;
        self.status = GalleryStatus::Ready;
    }

    /// Record a load failure. The store stays empty.
    pub fn fail(&mut self) {
        self.status = GalleryStatus::Failed;
        self.projects.clear();
        self.filters.clear();
    }

    pub fn status(&self) -> GalleryStatus {
        self.status
    }

    /// The full unfiltered project list, in load order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn filters(&self) -> &[ProjectFilter] {
        &self.filters
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    /// Set the active filter.
    ///
    /// An id not among the known filters is still a valid filter; it simply
    /// yields zero tag matches. No error, no message.
    pub fn select_filter(&mut self, filter_id: impl Into<String>) {
        let filter_id = filter_id.into();
        if !self.filters.iter().any(|f| f.id == filter_id) && filter_id != ALL_FILTER {
            tracing::debug!(filter = %filter_id, "selecting filter with no chip");
        }
        self.active_filter = filter_id;
    }

    /// The projects visible under the active filter, in load order.
    pub fn visible_projects(&self) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.matches_filter(&self.active_filter))
            .collect()
    }

    /// Resolve a card's id against the FULL unfiltered list.
    ///
    /// Returns `None` on a miss; callers treat that as a silent no-op.
    pub fn project_by_id(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn loaded_gallery() -> Gallery {
        let mut g = Gallery::new();
        g.populate(PortfolioData {
            projects: vec![
                project("a", &["web"]),
                project("b", &["ai", "web"]),
                project("c", &["mobile"]),
            ],
            filters: vec![
                ProjectFilter { id: "all".into(), label: "All".into() },
                ProjectFilter { id: "web".into(), label: "Web".into() },
                ProjectFilter { id: "ai".into(), label: "AI".into() },
            ],
        });
        g
    }

    #[test]
    fn new_store_is_empty_and_loading() {
        let g = Gallery::new();
        assert_eq!(g.status(), GalleryStatus::Loading);
        assert!(g.projects().is_empty());
        assert_eq!(g.active_filter(), ALL_FILTER);
        assert!(g.visible_projects().is_empty());
    }

    #[test]
    fn default_filter_shows_everything_in_load_order() {
        let g = loaded_gallery();
        let ids: Vec<&str> = g.visible_projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn tag_filter_preserves_load_order() {
        let mut g = loaded_gallery();
        g.select_filter("web");
        let ids: Vec<&str> = g.visible_projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn unknown_filter_yields_empty_set() {
        let mut g = loaded_gallery();
        g.select_filter("security");
        assert!(g.visible_projects().is_empty());
        assert_eq!(g.active_filter(), "security");
    }

    #[test]
    fn lookup_uses_full_list_not_filtered_view() {
        let mut g = loaded_gallery();
        g.select_filter("ai");
        // "c" is filtered out of the view but still resolvable
        assert!(g.project_by_id("c").is_some());
        assert!(g.project_by_id("nope").is_none());
    }

    #[test]
    fn failed_load_leaves_store_empty() {
        let mut g = Gallery::new();
        g.fail();
        assert_eq!(g.status(), GalleryStatus::Failed);
        g.select_filter("web");
        assert!(g.visible_projects().is_empty());
    }

    #[test]
    fn populate_replaces_previous_contents() {
        let mut g = loaded_gallery();
        g.populate(PortfolioData {
            projects: vec![project("z", &[])],
            filters: vec![ProjectFilter { id: "all".into(), label: "All".into() }],
        });
        let ids: Vec<&str> = g.visible_projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["z"]);
        assert_eq!(g.filters().len(), 1);
    }
}
