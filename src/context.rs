//! Shared-state context for Folio.
//!
//! The root component provides three signals; everything below reaches
//! them through these hooks instead of prop-drilling:
//!
//! - the gallery store (project list + active filter), mutated only by the
//!   projects section
//! - the detail-modal state machine, mutated only by the modal and the
//!   cards that open it
//! - the active theme, mutated only by the header toggle

use dioxus::prelude::*;
use folio_core::{Gallery, ModalState, Theme};

/// Hook to access the gallery store from context.
///
/// # Example
///
/// ```ignore
/// let gallery = use_gallery();
/// let visible = gallery.read().visible_projects().len();
/// ```
pub fn use_gallery() -> Signal<Gallery> {
    use_context::<Signal<Gallery>>()
}

/// Hook to access the detail-modal state machine from context.
pub fn use_modal() -> Signal<ModalState> {
    use_context::<Signal<ModalState>>()
}

/// Hook to access the active theme from context.
pub fn use_theme() -> Signal<Theme> {
    use_context::<Signal<Theme>>()
}
