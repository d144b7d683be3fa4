//! Typewriter Component
//!
//! Renders the cycling hero line. The cadence itself lives in
//! `folio_core::TypewriterCycle`; this component just sleeps between steps
//! and writes the current prefix into a signal.

use dioxus::prelude::*;
use folio_core::TypewriterCycle;

/// Looping type/delete text cycle with a block caret
#[component]
pub fn Typewriter(words: Vec<String>) -> Element {
    let mut text = use_signal(String::new);

    use_effect(move || {
        let words = words.clone();
        spawn(async move {
            let mut cycle = TypewriterCycle::new(words);
            loop {
                let step = cycle.tick();
                text.set(step.text);
                tokio::time::sleep(std::time::Duration::from_millis(step.delay_ms)).await;
            }
        });
    });

    rsx! {
        span { class: "typewriter",
            "{text}"
            span { class: "typewriter__caret", "aria-hidden": "true" }
        }
    }
}
