//! Skill Bar Component
//!
//! A labelled horizontal bar that fills to its configured level. The fill
//! width animates via a CSS transition the moment `revealed` flips true,
//! so the caller controls when the animation plays (staggered on section
//! mount in the shell).

use dioxus::prelude::*;

/// Properties for the SkillBar component
#[derive(Clone, PartialEq, Props)]
pub struct SkillBarProps {
    /// Skill name shown above the bar
    pub label: String,
    /// Fill level in percent, clamped to 0..=100
    pub level: u8,
    /// Whether the bar should show its level (false renders zero width)
    #[props(default = true)]
    pub revealed: bool,
}

/// Horizontal proficiency bar
///
/// # Example
///
/// ```rust,ignore
/// SkillBar { label: "Rust".to_string(), level: 85, revealed: shown() }
/// ```
#[component]
pub fn SkillBar(props: SkillBarProps) -> Element {
    let level = props.level.min(100);
    let width = if props.revealed { level } else { 0 };

    rsx! {
        div { class: "skill-bar",
            div { class: "skill-bar__head",
                span { class: "skill-bar__label", "{props.label}" }
                span { class: "skill-bar__level", "{level}%" }
            }
            div {
                class: "skill-bar__track",
                role: "progressbar",
                "aria-valuenow": "{level}",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                "aria-label": "{props.label} proficiency",
                div {
                    class: "skill-bar__fill",
                    style: "width: {width}%;",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn level_is_clamped() {
        // The render clamps with min(100); mirror the arithmetic here.
        assert_eq!(140u8.min(100), 100);
        assert_eq!(85u8.min(100), 85);
    }
}
