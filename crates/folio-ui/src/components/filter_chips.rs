//! Filter Chip Bar
//!
//! Horizontal row of toggle chips selecting the gallery's active filter.
//! Exactly one chip is marked active at a time; activation state is
//! mirrored to `aria-pressed` for assistive technology.

use dioxus::prelude::*;
use folio_core::ProjectFilter;

/// Properties for the FilterChips component
#[derive(Clone, PartialEq, Props)]
pub struct FilterChipsProps {
    /// Filters to render, in the supplied order
    pub filters: Vec<ProjectFilter>,
    /// Id of the currently active filter
    pub active: String,
    /// Handler called with the chip's filter id on click
    pub on_select: EventHandler<String>,
}

/// Displays one toggle chip per filter
///
/// The caller owns the active-filter state; this component only reports
/// clicks. An empty filter list renders nothing, matching the grid's
/// pre-load emptiness.
///
/// # Example
///
/// ```rust,ignore
/// FilterChips {
///     filters: gallery().filters().to_vec(),
///     active: gallery().active_filter().to_string(),
///     on_select: move |id| gallery.write().select_filter(id),
/// }
/// ```
#[component]
pub fn FilterChips(props: FilterChipsProps) -> Element {
    if props.filters.is_empty() {
        return VNode::empty();
    }

    rsx! {
        div {
            class: "filter-chips",
            role: "group",
            "aria-label": "Project filters",
            for filter in props.filters.iter() {
                {
                    let id = filter.id.clone();
                    let is_active = props.active == filter.id;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            class: if is_active { "filter-chip filter-chip--active" } else { "filter-chip" },
                            "aria-pressed": if is_active { "true" } else { "false" },
                            onclick: move |_| on_select.call(id.clone()),
                            "{filter.label}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use folio_core::ProjectFilter;

    fn filters() -> Vec<ProjectFilter> {
        vec![
            ProjectFilter { id: "all".into(), label: "All".into() },
            ProjectFilter { id: "web".into(), label: "Web".into() },
            ProjectFilter { id: "ai".into(), label: "AI / ML".into() },
        ]
    }

    #[test]
    fn exactly_one_chip_is_active() {
        // The active flag is derived per chip from a single id; verify the
        // derivation marks exactly one chip for any known id.
        let active = "web";
        let marked: Vec<bool> = filters().iter().map(|f| f.id == active).collect();
        assert_eq!(marked.iter().filter(|m| **m).count(), 1);
    }

    #[test]
    fn unknown_active_id_marks_no_chip() {
        let active = "mobile";
        let marked = filters().iter().filter(|f| f.id == active).count();
        assert_eq!(marked, 0);
    }
}
