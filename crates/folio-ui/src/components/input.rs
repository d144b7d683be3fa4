//! Input Field Components
//!
//! Labelled text inputs and textareas with an inline validation slot.
//! When `error` is set the field group takes the error style and the
//! message renders below the control.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Handler called when the field loses focus
    #[props(default)]
    pub onblur: Option<EventHandler<()>>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Validation message; `None` renders a clean field
    #[props(default)]
    pub error: Option<String>,
    /// Input type (text, email, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Id for label association
    pub id: String,
}

/// Labelled single-line input with validation slot
///
/// # Example
///
/// ```rust,ignore
/// Input {
///     id: "contact-email".to_string(),
///     value: email(),
///     oninput: move |v| email.set(v),
///     onblur: move |_| check_email(),
///     label: "Email".to_string(),
///     input_type: "email".to_string(),
///     error: errors().email.map(String::from),
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let group_class = if props.error.is_some() {
        "form-group form-group--error"
    } else {
        "form-group"
    };

    rsx! {
        div { class: "{group_class}",
            if let Some(label) = &props.label {
                label { class: "form-group__label", r#for: "{props.id}", "{label}" }
            }
            input {
                id: "{props.id}",
                class: "form-group__control",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                oninput: move |e| props.oninput.call(e.value()),
                onblur: move |_| {
                    if let Some(handler) = &props.onblur {
                        handler.call(());
                    }
                },
            }
            if let Some(error) = &props.error {
                span { class: "form-group__error", "{error}" }
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes
    pub oninput: EventHandler<String>,
    /// Handler called when the field loses focus
    #[props(default)]
    pub onblur: Option<EventHandler<()>>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Textarea label
    #[props(default)]
    pub label: Option<String>,
    /// Validation message; `None` renders a clean field
    #[props(default)]
    pub error: Option<String>,
    /// Number of visible rows
    #[props(default = 5)]
    pub rows: u32,
    /// Whether the textarea is required
    #[props(default = false)]
    pub required: bool,
    /// Id for label association
    pub id: String,
}

/// Labelled multi-line input with validation slot
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let group_class = if props.error.is_some() {
        "form-group form-group--error"
    } else {
        "form-group"
    };

    rsx! {
        div { class: "{group_class}",
            if let Some(label) = &props.label {
                label { class: "form-group__label", r#for: "{props.id}", "{label}" }
            }
            textarea {
                id: "{props.id}",
                class: "form-group__control form-group__control--textarea",
                rows: "{props.rows}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                oninput: move |e| props.oninput.call(e.value()),
                onblur: move |_| {
                    if let Some(handler) = &props.onblur {
                        handler.call(());
                    }
                },
            }
            if let Some(error) = &props.error {
                span { class: "form-group__error", "{error}" }
            }
        }
    }
}
