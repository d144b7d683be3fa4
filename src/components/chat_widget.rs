//! Chat Widget
//!
//! Floating demo chat in the corner: a toggle bubble and a small panel
//! with a transcript and an input row. Messages are echoed into the local
//! transcript and delivered nowhere - the widget exists to be poked at.

use dioxus::prelude::*;
use folio_core::{ChatAuthor, ChatLog};
use folio_ui::{CloseButton, IconButton};

#[component]
pub fn ChatWidget() -> Element {
    let mut open = use_signal(|| false);
    let mut log = use_signal(ChatLog::default);
    let mut input = use_signal(String::new);

    let mut send = move || {
        let text = input();
        if log.write().push_visitor(&text) {
            input.set(String::new());
        }
    };

    rsx! {
        div { class: "chat-widget",
            if open() {
                div { class: "chat-widget__panel",
                    header { class: "chat-widget__header",
                        span { class: "chat-widget__title", "Chat demo" }
                        CloseButton { onclick: move |_| open.set(false) }
                    }

                    div { class: "chat-widget__body",
                        for (i, message) in log().messages().iter().enumerate() {
                            {
                                let class = match message.author {
                                    ChatAuthor::Host => "chat-widget__msg chat-widget__msg--host",
                                    ChatAuthor::Visitor => "chat-widget__msg chat-widget__msg--me",
                                };
                                rsx! {
                                    div { key: "{i}", class: "{class}", "{message.text}" }
                                }
                            }
                        }
                    }

                    div { class: "chat-widget__input-row",
                        input {
                            class: "chat-widget__input",
                            placeholder: "Type a message\u{2026}",
                            value: "{input}",
                            oninput: move |e| input.set(e.value()),
                            onkeydown: move |evt: KeyboardEvent| {
                                if evt.key() == Key::Enter {
                                    send();
                                }
                            },
                        }
                        IconButton {
                            aria_label: "Send message".to_string(),
                            onclick: move |_| send(),
                            "\u{27A4}"
                        }
                    }
                }
            }

            button {
                class: "chat-widget__toggle",
                "aria-expanded": if open() { "true" } else { "false" },
                "aria-label": "Toggle chat demo",
                onclick: move |_| open.set(!open()),
                "\u{1F4AC}"
            }
        }
    }
}
