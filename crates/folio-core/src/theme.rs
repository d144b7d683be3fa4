//! Theme preference
//!
//! Two themes, applied by the desktop shell as a `data-theme` attribute the
//! whole style sheet keys on. Initial resolution priority: saved preference
//! > system preference (when detectable) > time of day, with 18:00-05:59
//! counting as night. Only the explicit toggle persists a preference.

use std::path::Path;

use crate::error::FolioError;

/// Light or dark page theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The `data-theme` attribute value and on-disk spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Parse an on-disk or command-line spelling.
    pub fn parse(s: &str) -> Result<Theme, FolioError> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(FolioError::UnknownTheme(other.to_string())),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether `hour` (0-23, local) falls in the night window.
pub fn is_night_hour(hour: u32) -> bool {
    hour >= 18 || hour < 6
}

/// Resolve the theme to start with.
///
/// Priority: saved > system preference > time-based. `system_dark` is
/// `None` where the host gives us no signal, which is the normal case for
/// the desktop webview shell.
pub fn resolve_initial(saved: Option<Theme>, system_dark: Option<bool>, hour: u32) -> Theme {
    if let Some(theme) = saved {
        return theme;
    }
    match system_dark {
        Some(true) => Theme::Dark,
        Some(false) => Theme::Light,
        None => {
            if is_night_hour(hour) {
                Theme::Dark
            } else {
                Theme::Light
            }
        }
    }
}

/// Read a saved preference, if one exists and parses.
///
/// A missing file is simply no preference; an unreadable or unrecognized
/// value is logged and treated the same way rather than failing startup.
pub fn load_preference(path: &Path) -> Option<Theme> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "theme preference unreadable");
            return None;
        }
    };
    match Theme::parse(&raw) {
        Ok(theme) => Some(theme),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring saved theme");
            None
        }
    }
}

/// Persist the preference, creating the parent directory if needed.
pub fn save_preference(path: &Path, theme: Theme) -> Result<(), FolioError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, theme.as_str())?;
    tracing::debug!(path = %path.display(), theme = %theme, "theme preference saved");
    Ok(())
}

/// The current local hour, for time-based resolution.
pub fn local_hour() -> u32 {
    use chrono::Timelike;
    chrono::Local::now().hour()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_preference_wins() {
        assert_eq!(
            resolve_initial(Some(Theme::Light), Some(true), 23),
            Theme::Light
        );
    }

    #[test]
    fn system_preference_beats_clock() {
        assert_eq!(resolve_initial(None, Some(false), 23), Theme::Light);
        assert_eq!(resolve_initial(None, Some(true), 12), Theme::Dark);
    }

    #[test]
    fn night_window_is_six_pm_to_six_am() {
        assert!(is_night_hour(18));
        assert!(is_night_hour(23));
        assert!(is_night_hour(0));
        assert!(is_night_hour(5));
        assert!(!is_night_hour(6));
        assert!(!is_night_hour(17));
    }

    #[test]
    fn clock_decides_without_other_signals() {
        assert_eq!(resolve_initial(None, None, 22), Theme::Dark);
        assert_eq!(resolve_initial(None, None, 10), Theme::Light);
    }

    #[test]
    fn toggle_flips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn preference_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs").join("theme");

        assert_eq!(load_preference(&path), None);
        save_preference(&path, Theme::Light).unwrap();
        assert_eq!(load_preference(&path), Some(Theme::Light));
        save_preference(&path, Theme::Dark).unwrap();
        assert_eq!(load_preference(&path), Some(Theme::Dark));
    }

    #[test]
    fn garbage_preference_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme");
        std::fs::write(&path, "solarized").unwrap();
        assert_eq!(load_preference(&path), None);
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(Theme::parse(" dark\n").unwrap(), Theme::Dark);
        assert!(Theme::parse("blue").is_err());
    }
}
