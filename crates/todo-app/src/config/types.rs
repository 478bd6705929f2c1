//! Configuration types for todo-tui
//!
//! Defines `Settings` (the parsed `config.toml`) and its sub-sections.

use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Keep the selection on a todo after toggling it, even though it moves
    /// to the other section. When false the selection stays on the same row.
    #[serde(default = "default_true")]
    pub follow_toggled: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            follow_toggled: true,
        }
    }
}

/// Icon rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Box-drawing and check-mark glyphs
    #[default]
    Unicode,
    /// Plain ASCII for terminals without good glyph coverage
    Ascii,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::Ascii => write!(f, "ascii"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub icons: IconMode,

    /// Show the key-hint footer
    #[serde(default = "default_true")]
    pub show_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            show_hints: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert!(settings.behavior.follow_toggled);
        assert!(settings.ui.show_hints);
        assert_eq!(settings.ui.icons, IconMode::Unicode);
    }

    #[test]
    fn test_settings_deserialize_partial() {
        let settings: Settings = toml::from_str("[ui]\nicons = \"ascii\"\n").unwrap();
        assert_eq!(settings.ui.icons, IconMode::Ascii);
        assert!(settings.ui.show_hints);
        assert!(settings.behavior.follow_toggled);
    }

    #[test]
    fn test_settings_deserialize_empty() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_icon_mode_display() {
        assert_eq!(IconMode::Unicode.to_string(), "unicode");
        assert_eq!(IconMode::Ascii.to_string(), "ascii");
    }

    #[test]
    fn test_unknown_icon_mode_rejected() {
        let result: Result<Settings, _> = toml::from_str("[ui]\nicons = \"nerd_fonts\"\n");
        assert!(result.is_err());
    }
}
