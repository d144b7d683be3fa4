//! Detail modal state machine
//!
//! Two states, three transitions:
//!
//! - `Closed --open(project)--> Open`
//! - `Open --close()--> Closed`
//! - `Open --open(project')--> Open` (content swap, no state change)
//!
//! The component layer owns the side effects (scroll lock, aria-hidden,
//! focus); this type owns the state so those effects always agree with it.

use crate::types::Project;

/// Open/closed state of the project detail modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(Project),
}

impl ModalState {
    /// Open the modal on `project`. Calling while already open swaps the
    /// displayed content and stays open.
    pub fn open(&mut self, project: Project) {
        *self = ModalState::Open(project);
    }

    /// Close the modal. Safe to call when already closed (no-op).
    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    /// The project currently on display, if any.
    pub fn project(&self) -> Option<&Project> {
        match self {
            ModalState::Open(p) => Some(p),
            ModalState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str) -> Project {
        Project {
            id: id.into(),
            title: format!("Project {id}"),
            short_desc: String::new(),
            full_desc: String::new(),
            tags: vec![],
            image: None,
            image_placeholder: None,
            tech: vec![],
            contributions: vec![],
            year: String::new(),
            role: String::new(),
            demo_url: None,
            repo_url: None,
        }
    }

    #[test]
    fn starts_closed() {
        let m = ModalState::default();
        assert!(!m.is_open());
        assert!(m.project().is_none());
    }

    #[test]
    fn open_then_close_round_trips() {
        let mut m = ModalState::default();
        m.open(project("a"));
        assert!(m.is_open());
        assert_eq!(m.project().unwrap().id, "a");

        m.close();
        assert_eq!(m, ModalState::Closed);
    }

    #[test]
    fn close_is_idempotent() {
        let mut m = ModalState::default();
        m.close();
        m.close();
        assert_eq!(m, ModalState::Closed);
    }

    #[test]
    fn reopen_swaps_content_without_closing() {
        let mut m = ModalState::default();
        m.open(project("a"));
        m.open(project("b"));
        assert!(m.is_open());
        assert_eq!(m.project().unwrap().id, "b");
    }
}
