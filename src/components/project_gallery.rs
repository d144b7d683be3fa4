//! Projects Section (gallery controller)
//!
//! Renders the filter chip bar and the card grid from the shared gallery
//! store, and routes card activation to the detail modal. The store is
//! populated by the root component's load effect; this section only reads
//! it and drives `select_filter`.
//!
//! Card activation resolves the id against the FULL project list, not the
//! filtered view; an unknown id is logged and dropped.

use dioxus::prelude::*;
use folio_core::GalleryStatus;
use folio_ui::FilterChips;

use crate::components::project_card::ProjectCard;
use crate::context::{use_gallery, use_modal};

#[component]
pub fn ProjectsSection() -> Element {
    let mut gallery = use_gallery();
    let mut modal = use_modal();

    let on_activate = move |id: String| {
        let project = gallery.read().project_by_id(&id).cloned();
        match project {
            Some(project) => modal.write().open(project),
            None => tracing::warn!(id = %id, "card referenced a project not in the store"),
        }
    };

    let state = gallery();

    let grid = match state.status() {
        GalleryStatus::Loading => rsx! {
            div { class: "projects-status", p { "Loading projects\u{2026}" } }
        },
        GalleryStatus::Failed => rsx! {
            div { class: "projects-status projects-status--fallback",
                p { "Unable to load projects. Please check back later." }
            }
        },
        GalleryStatus::Ready => rsx! {
            div { class: "projects-grid",
                for project in state.visible_projects() {
                    ProjectCard {
                        key: "{project.id}",
                        project: project.clone(),
                        on_activate: on_activate,
                    }
                }
            }
        },
    };

    rsx! {
        section { id: "projects", class: "section",
            h2 { class: "section__title", "Projects" }
            p { class: "section__subtitle", "Selected work, filterable by area" }

            FilterChips {
                filters: state.filters().to_vec(),
                active: state.active_filter().to_string(),
                on_select: move |id: String| gallery.write().select_filter(id),
            }

            {grid}
        }
    }
}
