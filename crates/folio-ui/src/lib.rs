//! Folio UI Components
//!
//! Reusable Dioxus components shared by the portfolio shell: buttons,
//! inputs with inline validation slots, the filter chip bar, skill bars,
//! and the decorative floating icon field.
//!
//! Components here are presentation-only: state lives with the caller and
//! flows in through props; interaction flows out through `EventHandler`
//! callbacks. Anything that needs the gallery store or the modal state
//! machine belongs in the application crate, not here.

pub mod components;

pub use components::*;
