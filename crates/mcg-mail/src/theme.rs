//! Theme preference
//!
//! The user picks light, dark or "follow the system"; the UI renders the
//! resolved light/dark value. The preference is persisted in the config
//! directory.

use anyhow::Result;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Theme preference filename in the config directory
const THEME_FILE: &str = "theme.json";

/// User's theme choice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
    System,
}

/// Theme actually applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ThemePreference {
    /// Resolve against the system appearance
    pub fn resolve(self, system_prefers_dark: bool) -> ResolvedTheme {
        match self {
            ThemePreference::Light => ResolvedTheme::Light,
            ThemePreference::Dark => ResolvedTheme::Dark,
            ThemePreference::System if system_prefers_dark => ResolvedTheme::Dark,
            ThemePreference::System => ResolvedTheme::Light,
        }
    }

    /// Next preference for the top bar toggle (light -> dark -> system)
    pub fn next(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::System,
            ThemePreference::System => ThemePreference::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
            ThemePreference::System => "System",
        }
    }
}

/// Persisted form (`{"mcg.theme": "dark"}`)
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredTheme {
    #[serde(rename = "mcg.theme")]
    theme: ThemePreference,
}

/// Load the saved preference, falling back to the default
pub fn load_preference() -> ThemePreference {
    if !config::config_exists(THEME_FILE) {
        return ThemePreference::default();
    }
    match config::load_json::<StoredTheme>(THEME_FILE) {
        Ok(stored) => stored.theme,
        Err(e) => {
            warn!("Ignoring unreadable theme preference: {:#}", e);
            ThemePreference::default()
        }
    }
}

/// Persist the preference in the config directory
pub fn save_preference(theme: ThemePreference) -> Result<()> {
    config::save_json(THEME_FILE, &StoredTheme { theme })
}

/// Load a preference from a specific file, falling back to the default
pub fn load_preference_from(path: &Path) -> ThemePreference {
    config::load_json_file::<StoredTheme>(path)
        .map(|stored| stored.theme)
        .unwrap_or_default()
}

/// Persist a preference to a specific file
pub fn save_preference_to(path: &Path, theme: ThemePreference) -> Result<()> {
    config::save_json_file(path, &StoredTheme { theme })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve() {
        assert_eq!(ThemePreference::Light.resolve(true), ResolvedTheme::Light);
        assert_eq!(ThemePreference::Dark.resolve(false), ResolvedTheme::Dark);
        assert_eq!(ThemePreference::System.resolve(true), ResolvedTheme::Dark);
        assert_eq!(ThemePreference::System.resolve(false), ResolvedTheme::Light);
    }

    #[test]
    fn test_toggle_cycles() {
        let start = ThemePreference::default();
        assert_eq!(start, ThemePreference::Light);
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn test_persist_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.json");
        save_preference_to(&path, ThemePreference::System).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"mcg.theme\": \"system\""));
        assert_eq!(load_preference_from(&path), ThemePreference::System);
    }

    #[test]
    fn test_missing_or_bad_file_uses_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.json");
        assert_eq!(load_preference_from(&path), ThemePreference::Light);

        std::fs::write(&path, r#"{"mcg.theme": "purple"}"#).unwrap();
        assert_eq!(load_preference_from(&path), ThemePreference::Light);
    }
}
