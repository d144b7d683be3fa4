//! Project Detail Modal
//!
//! Expanded single-project overlay opened from a card. Close triggers:
//! the close button, a backdrop click, or Escape while open. While open
//! the page scroll is suppressed and focus starts on the close control;
//! closing restores both. Re-opening on another project swaps the content
//! without passing through the closed state.

use dioxus::prelude::*;
use folio_ui::{ButtonVariant, CloseButton};

use crate::components::project_image::ProjectImage;
use crate::context::use_modal;
use crate::dom;

/// Render the full description as HTML via pulldown-cmark
fn markdown_to_html(source: &str) -> String {
    let parser = pulldown_cmark::Parser::new(source);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}

#[component]
pub fn ProjectModal() -> Element {
    let mut modal = use_modal();

    // Scroll lock follows the open flag exactly, so an open/close round
    // trip restores the pre-open state
    use_effect(move || {
        dom::set_scroll_lock(modal().is_open());
    });

    let state = modal();
    let Some(project) = state.project().cloned() else {
        return VNode::empty();
    };

    let desc_html = markdown_to_html(&project.full_desc);
    let demo_class = ButtonVariant::Primary.class();
    let repo_class = ButtonVariant::Secondary.class();

    rsx! {
        div {
            class: "modal",
            role: "dialog",
            "aria-modal": "true",
            "aria-label": "{project.title} details",

            div {
                class: "modal__backdrop",
                onclick: move |_| modal.write().close(),
            }

            div {
                class: "modal__dialog",
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Escape {
                        modal.write().close();
                    }
                },

                header { class: "modal__header",
                    CloseButton {
                        autofocus: true,
                        onclick: move |_| modal.write().close(),
                    }
                }

                div { class: "modal__body",
                    if project.image.is_some() {
                        div { class: "modal__media",
                            ProjectImage {
                                key: "{project.id}",
                                image: project.image.clone(),
                                placeholder: project.image_placeholder.clone(),
                                alt: project.title.clone(),
                            }
                        }
                    }

                    h2 { class: "modal__title", "{project.title}" }
                    div { class: "modal__meta",
                        span { "\u{1F4C5} {project.year}" }
                        span { "\u{1F464} {project.role}" }
                    }

                    div { class: "modal__desc", dangerous_inner_html: "{desc_html}" }

                    div { class: "modal__section",
                        h3 { class: "modal__section-title", "Technologies Used" }
                        div { class: "modal__tech-list",
                            for tech in project.tech.iter() {
                                span { class: "modal__tech-item", "{tech}" }
                            }
                        }
                    }

                    div { class: "modal__section",
                        h3 { class: "modal__section-title", "My Contributions" }
                        ul { class: "modal__contributions",
                            for line in project.contributions.iter() {
                                li { "{line}" }
                            }
                        }
                    }

                    if project.demo_url.is_some() || project.repo_url.is_some() {
                        div { class: "modal__actions",
                            if let Some(demo) = project.demo_url.clone() {
                                a {
                                    href: "{demo}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    class: "{demo_class}",
                                    "Live Demo"
                                }
                            }
                            if let Some(repo) = project.repo_url.clone() {
                                a {
                                    href: "{repo}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    class: "{repo_class}",
                                    "View Code"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
