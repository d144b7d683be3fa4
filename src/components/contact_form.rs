//! Contact Section
//!
//! Name/email/message form with per-field validation: errors appear when a
//! field loses focus or on submit, and clear as soon as the field has
//! content again. A valid submission hands a composed mail URL to the
//! system mail client (there is no delivery endpoint) and shows a success
//! banner for five seconds. A copy-address button sits alongside for
//! people who would rather use their own client directly.

use dioxus::prelude::*;
use folio_core::contact::{self, ContactDraft, ContactField, FieldErrors};
use folio_ui::{Button, ButtonVariant, Input, TextArea};

use crate::dom;

/// Where the composed mail goes
const CONTACT_EMAIL: &str = "hello@alexvarga.dev";

#[component]
pub fn ContactSection() -> Element {
    let mut draft = use_signal(ContactDraft::default);
    let mut errors = use_signal(FieldErrors::default);
    let mut sent = use_signal(|| false);
    let mut copied = use_signal(|| false);

    // Blur: validate just that field
    let check = move |field: ContactField| {
        let value = draft.read().field(field).to_string();
        errors.write().set(field, contact::validate_field(field, &value));
    };

    // Input: clear the field's error once it has content again
    let clear_if_filled = move |field: ContactField| {
        if !draft.read().field(field).trim().is_empty() {
            errors.write().set(field, None);
        }
    };

    let submit = move |_| {
        let current = draft();
        let result = contact::validate(&current);
        errors.set(result);
        if !result.is_valid() {
            return;
        }

        let url = contact::mailto_url(CONTACT_EMAIL, &current);
        tracing::info!("handing contact draft to the mail client");
        dom::open_mail(&url);

        draft.set(ContactDraft::default());
        sent.set(true);
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_secs(5)).await;
            sent.set(false);
        });
    };

    let copy_address = move |_| {
        spawn(async move {
            match arboard::Clipboard::new() {
                Ok(mut clipboard) => {
                    if clipboard.set_text(CONTACT_EMAIL).is_ok() {
                        copied.set(true);
                        tokio::time::sleep(std::time::Duration::from_secs(2)).await;
                        copied.set(false);
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "clipboard not available");
                }
            }
        });
    };

    rsx! {
        section { id: "contact", class: "section",
            h2 { class: "section__title", "Contact" }
            p { class: "section__subtitle", "Say hello - I answer everything that isn't spam" }

            div { class: "contact",
                div { class: "contact__aside",
                    p { "Prefer your own mail client?" }
                    div { class: "contact__address-row",
                        code { class: "contact__address", "{CONTACT_EMAIL}" }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: copy_address,
                            if copied() { "Copied" } else { "Copy" }
                        }
                    }
                }

                form {
                    class: "contact-form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        submit(());
                    },

                    if sent() {
                        div { class: "contact-form__success", role: "status",
                            "Thanks! Your message is on its way."
                        }
                    }

                    Input {
                        id: "contact-name".to_string(),
                        label: "Name".to_string(),
                        value: draft().name,
                        required: true,
                        placeholder: "Your name".to_string(),
                        error: errors().name.map(String::from),
                        oninput: move |v| {
                            draft.write().name = v;
                            clear_if_filled(ContactField::Name);
                        },
                        onblur: move |_| check(ContactField::Name),
                    }

                    Input {
                        id: "contact-email".to_string(),
                        label: "Email".to_string(),
                        input_type: "email".to_string(),
                        value: draft().email,
                        required: true,
                        placeholder: "you@example.com".to_string(),
                        error: errors().email.map(String::from),
                        oninput: move |v| {
                            draft.write().email = v;
                            clear_if_filled(ContactField::Email);
                        },
                        onblur: move |_| check(ContactField::Email),
                    }

                    TextArea {
                        id: "contact-message".to_string(),
                        label: "Message".to_string(),
                        value: draft().message,
                        required: true,
                        rows: 6,
                        placeholder: "What's on your mind?".to_string(),
                        error: errors().message.map(String::from),
                        oninput: move |v| {
                            draft.write().message = v;
                            clear_if_filled(ContactField::Message);
                        },
                        onblur: move |_| check(ContactField::Message),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        button_type: "submit".to_string(),
                        "Send Message"
                    }
                }
            }
        }
    }
}
