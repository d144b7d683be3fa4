//! Webview helpers.
//!
//! The shell delegates the few page-global effects that live outside the
//! component tree (smooth scrolling, body scroll lock, the mail handoff)
//! to the webview with one-line scripts. Section ids and URLs passed in
//! here are app constants or percent-encoded, never raw user text.

use dioxus::document;

/// Smooth-scroll the page to the section with the given element id.
pub fn scroll_to_section(id: &str) {
    let js = format!(
        "document.getElementById('{id}')?.scrollIntoView({{ behavior: 'smooth', block: 'start' }});"
    );
    let _ = document::eval(&js);
}

/// Suppress or restore page scroll (modal and drawer overlays).
pub fn set_scroll_lock(locked: bool) {
    let js = if locked {
        "document.body.style.overflow = 'hidden';"
    } else {
        "document.body.style.overflow = '';"
    };
    let _ = document::eval(js);
}

/// Hand a mailto URL to the system mail client.
pub fn open_mail(url: &str) {
    let js = format!("window.location.href = '{url}';");
    let _ = document::eval(&js);
}
