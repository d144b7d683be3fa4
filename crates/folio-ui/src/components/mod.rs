//! Reusable UI components
//!
//! All components render against the class names defined by the shell's
//! global style sheet and inherit the active `data-theme` palette.

mod button;
mod filter_chips;
mod floating_icons;
mod input;
mod skill_bar;

pub use button::*;
pub use filter_chips::*;
pub use floating_icons::*;
pub use input::*;
pub use skill_bar::*;
