//! Hero Section
//!
//! Intro banner: greeting, the typewriter role line, two CTA buttons, and
//! the decorative floating icon field behind it all.

use dioxus::prelude::*;
use folio_ui::{Button, ButtonVariant, FloatingIcons};

use crate::components::typewriter::Typewriter;
use crate::dom;

/// Roles cycled by the hero line
const ROLES: [&str; 6] = [
    "Systems Programmer",
    "Web Developer",
    "Rust Enthusiast",
    "Open Source Contributor",
    "DevOps Engineer",
    "AI/ML Explorer",
];

/// Glyphs drifting behind the hero
const TECH_ICONS: [&str; 6] = [
    "\u{1F980}", // crab
    "\u{2699}\u{FE0F}", // gear
    "\u{1F310}", // globe
    "\u{26A1}", // bolt
    "\u{1F916}", // robot
    "\u{1F4E6}", // package
];

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { id: "hero", class: "hero",
            FloatingIcons {
                icons: TECH_ICONS.iter().map(|i| i.to_string()).collect::<Vec<_>>(),
            }

            div { class: "hero__content",
                p { class: "hero__kicker", "Hello, I'm" }
                h1 { class: "hero__title", "Alex Varga" }
                p { class: "hero__line",
                    Typewriter {
                        words: ROLES.iter().map(|r| r.to_string()).collect::<Vec<_>>(),
                    }
                }
                p { class: "hero__tagline",
                    "I build fast, reliable software and the occasional odd experiment. "
                    "Have a look around."
                }

                div { class: "hero__actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| dom::scroll_to_section("projects"),
                        "View Projects"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| dom::scroll_to_section("contact"),
                        "Get in Touch"
                    }
                }
            }
        }
    }
}
