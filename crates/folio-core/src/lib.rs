//! Folio Core Library
//!
//! Domain logic for the Folio portfolio application: the project gallery
//! store, the detail-modal state machine, data loading, and the small state
//! machines behind the page shell (theme preference, typewriter cadence,
//! contact-form validation, chat transcript).
//!
//! ## Overview
//!
//! Everything in this crate is framework-free and synchronous apart from
//! [`loader::load_portfolio`], which reads the project data document with
//! `tokio::fs`. The desktop crate owns the rendering; this crate owns the
//! state and the rules:
//!
//! - **Gallery**: ordered project list + active filter. The visible set is
//!   always exactly the projects whose tags match the active filter (or all
//!   of them for the reserved `"all"` filter), in load order.
//! - **Modal**: a two-state machine (`Closed`/`Open`) with idempotent close
//!   and content-swap reopen.
//! - **Theme**: saved preference > system preference > time of day.
//!
//! ## Quick Start
//!
//! ```
//! use folio_core::{Gallery, ModalState};
//!
//! let mut gallery = Gallery::new();
//! gallery.populate(folio_core::PortfolioData::default());
//! gallery.select_filter("web");
//!
//! let mut modal = ModalState::default();
//! assert!(!modal.is_open());
//! modal.close(); // no-op on a closed modal
//! ```

pub mod chat;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod loader;
pub mod modal;
pub mod theme;
pub mod typewriter;
pub mod types;

// Re-exports
pub use chat::{ChatAuthor, ChatLog, ChatMessage};
pub use contact::{ContactDraft, FieldErrors};
pub use error::FolioError;
pub use gallery::{Gallery, GalleryStatus, ALL_FILTER};
pub use loader::load_portfolio;
pub use modal::ModalState;
pub use theme::Theme;
pub use typewriter::TypewriterCycle;
pub use types::{PortfolioData, Project, ProjectFilter};
