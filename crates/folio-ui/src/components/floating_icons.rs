//! Floating Icon Field
//!
//! Decorative drifting technology glyphs behind the hero section. The
//! drift is a pure CSS keyframe loop; each icon gets a staggered
//! animation delay derived from its position so the field never moves in
//! lockstep.

use dioxus::prelude::*;

/// Properties for the FloatingIcons component
#[derive(Clone, PartialEq, Props)]
pub struct FloatingIconsProps {
    /// Glyphs to scatter, in order
    pub icons: Vec<String>,
}

/// Decorative icon field; hidden from assistive technology
#[component]
pub fn FloatingIcons(props: FloatingIconsProps) -> Element {
    if props.icons.is_empty() {
        return VNode::empty();
    }

    rsx! {
        div { class: "floating-icons", "aria-hidden": "true",
            for (i, icon) in props.icons.iter().enumerate() {
                {
                    let delay_ms = i * 400;
                    rsx! {
                        span {
                            class: "floating-icons__icon",
                            style: "animation-delay: {delay_ms}ms;",
                            "{icon}"
                        }
                    }
                }
            }
        }
    }
}
