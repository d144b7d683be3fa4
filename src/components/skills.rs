//! About / Skills Section
//!
//! Short bio plus the skill bars. Bars render at zero width and fill to
//! their level shortly after mount; the CSS transition on the fill makes
//! that the reveal animation.

use dioxus::prelude::*;
use folio_ui::SkillBar;

/// Skills and their levels, in display order
const SKILLS: [(&str, u8); 6] = [
    ("Rust", 90),
    ("TypeScript", 80),
    ("Linux & Containers", 85),
    ("SQL & Storage", 75),
    ("CI/CD & Tooling", 80),
    ("Machine Learning", 60),
];

#[component]
pub fn SkillsSection() -> Element {
    let mut revealed = use_signal(|| false);

    // Flip after first paint so the width transition actually plays
    use_effect(move || {
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(300)).await;
            revealed.set(true);
        });
    });

    rsx! {
        section { id: "about", class: "section",
            h2 { class: "section__title", "About" }
            p { class: "section__subtitle", "What I do and what I'm good at" }

            div { class: "about",
                div { class: "about__bio",
                    p {
                        "I'm a software engineer who cares about systems that stay fast "
                        "and comprehensible as they grow. Most of my day is Rust and the "
                        "infrastructure around it; the rest is whatever the problem needs."
                    }
                    p {
                        "Away from the keyboard: trail running, radio kits, and far too "
                        "much coffee."
                    }
                }

                div { class: "about__skills",
                    for (label, level) in SKILLS {
                        SkillBar {
                            label: label.to_string(),
                            level: level,
                            revealed: revealed(),
                        }
                    }
                }
            }
        }
    }
}
