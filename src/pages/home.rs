//! Home page - the single scrolling portfolio page.
//!
//! Assembles the shell sections in order. Every section initializes
//! independently; the gallery's data load is the only async work and
//! nothing here waits on it.

use dioxus::prelude::*;

use crate::components::{
    ChatWidget, ContactSection, Hero, NavHeader, ProjectModal, ProjectsSection, SkillsSection,
};

#[component]
pub fn Home() -> Element {
    rsx! {
        NavHeader {}

        main { class: "page",
            Hero {}
            SkillsSection {}
            ProjectsSection {}
            ContactSection {}
        }

        footer { class: "footer",
            p { "Built with Rust. No trackers, no cookies, no nonsense." }
        }

        ChatWidget {}
        ProjectModal {}
    }
}
