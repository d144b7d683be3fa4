//! Core types for Folio
//!
//! The wire shape of the project data document. Field names on disk are
//! camelCase; optional display assets and links are `Option`, never empty
//! strings.

use serde::{Deserialize, Serialize};

/// One portfolio entry: display text, tags, media, and optional links.
///
/// `id` is the only lookup key and must be unique across the document;
/// card click resolution and modal population both depend on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier, stable across renders
    pub id: String,
    /// Card and modal title
    pub title: String,
    /// One-line description shown on the card
    pub short_desc: String,
    /// Long description shown in the detail modal (markdown)
    pub full_desc: String,
    /// Category labels; the first three are displayed on the card,
    /// the full list decides filter membership
    #[serde(default)]
    pub tags: Vec<String>,
    /// Display image path, relative to the data document
    #[serde(default)]
    pub image: Option<String>,
    /// Placeholder tint used when `image` is absent
    #[serde(default)]
    pub image_placeholder: Option<String>,
    /// Technology names, displayed in full in the detail view
    #[serde(default)]
    pub tech: Vec<String>,
    /// Contribution lines, rendered as a list in the detail view
    #[serde(default)]
    pub contributions: Vec<String>,
    /// Display year
    #[serde(default)]
    pub year: String,
    /// Display role
    #[serde(default)]
    pub role: String,
    /// Live demo link; renders an action button only if present
    #[serde(default)]
    pub demo_url: Option<String>,
    /// Repository link; renders an action button only if present
    #[serde(default)]
    pub repo_url: Option<String>,
}

impl Project {
    /// Whether this project belongs to the given filter.
    ///
    /// The reserved `"all"` filter matches every project; any other id
    /// matches iff it appears in the project's full tag list.
    pub fn matches_filter(&self, filter_id: &str) -> bool {
        filter_id == crate::gallery::ALL_FILTER || self.tags.iter().any(|t| t == filter_id)
    }

    /// The tags shown on the compact card (first three, in order).
    pub fn card_tags(&self) -> &[String] {
        let n = self.tags.len().min(3);
        &self.tags[..n]
    }
}

/// A tag-based view selector over the project list.
///
/// `"all"` is the reserved no-filter id and is expected to be present in
/// every data document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFilter {
    pub id: String,
    pub label: String,
}

/// The root of the project data document.
///
/// Missing keys deserialize as empty lists, not errors; an empty document
/// is valid and simply renders an empty gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioData {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub filters: Vec<ProjectFilter>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_with_tags(tags: &[&str]) -> Project {
        Project {
            id: "p".into(),
            title: "T".into(),
            short_desc: "s".into(),
            full_desc: "f".into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image: None,
            image_placeholder: None,
            tech: vec![],
            contributions: vec![],
            year: "2024".into(),
            role: "Dev".into(),
            demo_url: None,
            repo_url: None,
        }
    }

    #[test]
    fn all_filter_matches_everything() {
        assert!(project_with_tags(&[]).matches_filter("all"));
        assert!(project_with_tags(&["web"]).matches_filter("all"));
    }

    #[test]
    fn tag_filter_uses_full_tag_list() {
        let p = project_with_tags(&["web", "ai", "mobile", "devops"]);
        // "devops" is past the card's three-tag display cut but still filters
        assert!(p.matches_filter("devops"));
        assert!(!p.matches_filter("security"));
    }

    #[test]
    fn card_tags_caps_at_three() {
        let p = project_with_tags(&["a", "b", "c", "d"]);
        assert_eq!(p.card_tags(), &["a", "b", "c"]);

        let short = project_with_tags(&["a"]);
        assert_eq!(short.card_tags(), &["a"]);
    }

    #[test]
    fn missing_keys_deserialize_as_empty() {
        let data: PortfolioData = serde_json::from_str("{}").unwrap();
        assert!(data.projects.is_empty());
        assert!(data.filters.is_empty());
    }

    #[test]
    fn camel_case_wire_names() {
        let json = r##"{
            "id": "p1",
            "title": "X",
            "shortDesc": "short",
            "fullDesc": "full",
            "tags": ["web"],
            "imagePlaceholder": "#ff0000",
            "demoUrl": "https://example.com"
        }"##;
        let p: Project = serde_json::from_str(json).unwrap();
        assert_eq!(p.short_desc, "short");
        assert_eq!(p.image_placeholder.as_deref(), Some("#ff0000"));
        assert_eq!(p.demo_url.as_deref(), Some("https://example.com"));
        assert!(p.image.is_none());
        assert!(p.repo_url.is_none());
    }
}
