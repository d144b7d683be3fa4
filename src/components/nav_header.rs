//! Navigation Header Component
//!
//! Desktop: sticky header with brand, section links, and the theme toggle.
//! Mobile: collapses to the drawer toggle rendered by MobileNav.

use dioxus::prelude::*;

use crate::components::mobile_nav::MobileNav;
use crate::context::use_theme;
use crate::dom;

/// Section of the single scrolling page
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PageSection {
    Home,
    About,
    Projects,
    Contact,
}

impl PageSection {
    pub const ALL: [PageSection; 4] = [
        PageSection::Home,
        PageSection::About,
        PageSection::Projects,
        PageSection::Contact,
    ];

    /// Get the display name for this section
    pub fn display_name(&self) -> &'static str {
        match self {
            PageSection::Home => "Home",
            PageSection::About => "About",
            PageSection::Projects => "Projects",
            PageSection::Contact => "Contact",
        }
    }

    /// Get the element id this section scrolls to
    pub fn anchor(&self) -> &'static str {
        match self {
            PageSection::Home => "hero",
            PageSection::About => "about",
            PageSection::Projects => "projects",
            PageSection::Contact => "contact",
        }
    }
}

/// Navigation header component
///
/// Owns the active-section state: a link is active when it was the last
/// one activated (there is no scroll-spy round trip through the webview).
/// The theme toggle flips the shared theme signal and persists the choice.
#[component]
pub fn NavHeader() -> Element {
    let mut theme = use_theme();
    let mut active = use_signal(|| PageSection::Home);

    let navigate = move |section: PageSection| {
        active.set(section);
        dom::scroll_to_section(section.anchor());
    };

    let toggle_theme = move |_| {
        let next = theme().toggled();
        theme.set(next);
        if let Err(e) = folio_core::theme::save_preference(&crate::get_theme_file(), next) {
            tracing::warn!(error = %e, "failed to persist theme preference");
        }
    };

    // Glyph and label advertise the theme the toggle switches TO
    let (toggle_glyph, toggle_label) = match theme() {
        folio_core::Theme::Dark => ("\u{2600}\u{FE0F}", "Switch to light mode"),
        folio_core::Theme::Light => ("\u{1F319}", "Switch to dark mode"),
    };

    rsx! {
        header { class: "header",
            div { class: "header__inner",
                button {
                    class: "header__brand",
                    onclick: move |_| navigate(PageSection::Home),
                    span { class: "header__brand-mark", "{{" }
                    " folio "
                    span { class: "header__brand-mark", "}}" }
                }

                nav { class: "nav",
                    for section in PageSection::ALL {
                        button {
                            class: if section == active() { "nav__link nav__link--active" } else { "nav__link" },
                            onclick: move |_| navigate(section),
                            "{section.display_name()}"
                        }
                    }
                }

                button {
                    class: "theme-toggle",
                    onclick: toggle_theme,
                    "aria-label": "{toggle_label}",
                    "{toggle_glyph}"
                }
            }
        }

        // Drawer toggle + drawer (hidden on desktop via CSS)
        MobileNav {
            current: active(),
            on_navigate: navigate,
        }
    }
}
