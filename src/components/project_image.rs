//! Project Image
//!
//! Loads a project's display image from disk and embeds it as a base64
//! data URI for the webview. When the project has no image, or the read
//! fails, a tinted placeholder glyph renders instead.

use std::path::PathBuf;

use base64::Engine;
use dioxus::prelude::*;

/// Placeholder glyph shown when there is no image (folder)
const PLACEHOLDER_GLYPH: &str = "\u{1F4C1}";

/// Guess a mime type from the file extension
fn mime_for(path: &PathBuf) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Image-or-placeholder for a project card or the modal header
#[component]
pub fn ProjectImage(
    /// Image path from the data document, relative to the working directory
    image: Option<String>,
    /// Placeholder tint used when no image renders
    placeholder: Option<String>,
    /// Alt text for accessibility
    alt: String,
) -> Element {
    let mut data_uri = use_signal(|| Option::<String>::None);

    // Read and embed on mount or when the path changes
    use_effect(move || {
        let Some(raw) = image.clone() else {
            data_uri.set(None);
            return;
        };
        spawn(async move {
            let path = PathBuf::from(raw);
            match tokio::fs::read(&path).await {
                Ok(bytes) => {
                    let mime = mime_for(&path);
                    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
                    data_uri.set(Some(format!("data:{mime};base64,{encoded}")));
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "project image unreadable");
                    data_uri.set(None);
                }
            }
        });
    });

    let tint = placeholder.unwrap_or_else(|| "var(--accent)".to_string());

    match data_uri() {
        Some(uri) => rsx! {
            img {
                class: "project-image",
                src: "{uri}",
                alt: "{alt}",
            }
        },
        None => rsx! {
            div {
                class: "project-image project-image--placeholder",
                style: "background: {tint};",
                "aria-hidden": "true",
                "{PLACEHOLDER_GLYPH}"
            }
        },
    }
}
