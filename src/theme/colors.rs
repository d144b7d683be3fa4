//! Color constants for the two themes.
//!
//! The style sheet keys everything on CSS custom properties; these
//! constants exist for the few places Rust code needs a literal color
//! (placeholder tints, log output) and must match styles.rs.

#![allow(dead_code)]

// === DARK (default) ===
pub const DARK_BG: &str = "#0e1116";
pub const DARK_BG_RAISED: &str = "#161b22";
pub const DARK_BORDER: &str = "#262d37";
pub const DARK_TEXT: &str = "#e6e9ef";
pub const DARK_TEXT_MUTED: &str = "rgba(230, 233, 239, 0.6)";

// === LIGHT ===
pub const LIGHT_BG: &str = "#f7f8fa";
pub const LIGHT_BG_RAISED: &str = "#ffffff";
pub const LIGHT_BORDER: &str = "#dde2e9";
pub const LIGHT_TEXT: &str = "#1c2330";
pub const LIGHT_TEXT_MUTED: &str = "rgba(28, 35, 48, 0.6)";

// === ACCENTS (shared) ===
pub const ACCENT: &str = "#4f8cff";
pub const ACCENT_SOFT: &str = "rgba(79, 140, 255, 0.18)";
pub const SUCCESS: &str = "#2fbf71";
pub const DANGER: &str = "#e5484d";
