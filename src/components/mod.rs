//! Page-shell and gallery components for Folio.

mod chat_widget;
mod contact_form;
mod hero;
mod mobile_nav;
mod nav_header;
mod project_card;
mod project_gallery;
mod project_image;
mod project_modal;
mod skills;
mod typewriter;

pub use chat_widget::ChatWidget;
pub use contact_form::ContactSection;
pub use hero::Hero;
pub use mobile_nav::MobileNav;
pub use nav_header::{NavHeader, PageSection};
pub use project_card::ProjectCard;
pub use project_gallery::ProjectsSection;
pub use project_image::ProjectImage;
pub use project_modal::ProjectModal;
pub use skills::SkillsSection;
pub use typewriter::Typewriter;
