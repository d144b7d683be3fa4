//! Project Card Component
//!
//! Compact gallery representation of one project: image or placeholder,
//! title, short description, and the first three tags. The whole card is
//! one activation target - pointer click, Enter, and Space all report the
//! project id to the gallery.

use dioxus::prelude::*;
use folio_core::Project;

use crate::components::project_image::ProjectImage;

#[component]
pub fn ProjectCard(project: Project, on_activate: EventHandler<String>) -> Element {
    let click_id = project.id.clone();
    let key_id = project.id.clone();

    rsx! {
        article {
            class: "project-card",
            tabindex: "0",
            role: "button",
            "aria-label": "View {project.title} details",
            onclick: move |_| on_activate.call(click_id.clone()),
            onkeydown: move |evt: KeyboardEvent| {
                let activate = match evt.key() {
                    Key::Enter => true,
                    Key::Character(c) => c == " ",
                    _ => false,
                };
                if activate {
                    evt.prevent_default();
                    on_activate.call(key_id.clone());
                }
            },

            div { class: "project-card__media",
                ProjectImage {
                    image: project.image.clone(),
                    placeholder: project.image_placeholder.clone(),
                    alt: project.title.clone(),
                }
                div { class: "project-card__overlay" }
            }

            div { class: "project-card__content",
                h3 { class: "project-card__title", "{project.title}" }
                p { class: "project-card__desc", "{project.short_desc}" }
                div { class: "project-card__tags",
                    for tag in project.card_tags() {
                        span { class: "project-card__tag", "{tag}" }
                    }
                }
            }
        }
    }
}
