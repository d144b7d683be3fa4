//! Mobile Navigation Drawer
//!
//! Hamburger toggle plus a slide-in drawer for narrow windows (< 768px).
//! The open flag lives here and nowhere else; the drawer closes on Escape,
//! on a backdrop click, or on following a link. Page scroll is suppressed
//! while the drawer is open.

use dioxus::prelude::*;

use crate::components::nav_header::PageSection;
use crate::dom;

#[derive(Props, Clone, PartialEq)]
pub struct MobileNavProps {
    /// Current active section
    pub current: PageSection,
    /// Callback when a drawer link is followed
    pub on_navigate: EventHandler<PageSection>,
}

/// Mobile drawer navigation
#[component]
pub fn MobileNav(props: MobileNavProps) -> Element {
    let mut open = use_signal(|| false);

    // Keep the body scroll lock in step with the drawer
    use_effect(move || {
        dom::set_scroll_lock(open());
    });

    rsx! {
        button {
            class: "nav-toggle",
            "aria-expanded": if open() { "true" } else { "false" },
            "aria-label": "Toggle navigation",
            onclick: move |_| open.set(!open()),
            span { class: "nav-toggle__bar" }
            span { class: "nav-toggle__bar" }
            span { class: "nav-toggle__bar" }
        }

        if open() {
            div { class: "nav-drawer",
                div {
                    class: "nav-drawer__backdrop",
                    onclick: move |_| open.set(false),
                }
                nav {
                    class: "nav-drawer__panel",
                    tabindex: "0",
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Escape {
                            open.set(false);
                        }
                    },
                    for section in PageSection::ALL {
                        button {
                            class: if section == props.current { "nav-drawer__link nav-drawer__link--active" } else { "nav-drawer__link" },
                            onclick: move |_| {
                                open.set(false);
                                props.on_navigate.call(section);
                            },
                            "{section.display_name()}"
                        }
                    }
                }
            }
        }
    }
}
