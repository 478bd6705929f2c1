//! Settings parser for config.toml

use std::path::{Path, PathBuf};

use super::types::Settings;
use todo_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "todo-tui";

const DEFAULT_CONFIG: &str = r#"# todo-tui configuration

[ui]
# "unicode" or "ascii"
icons = "unicode"
# Show the key-hint footer
show_hints = true

[behavior]
# Keep the selection on a todo after toggling it into the other section
follow_toggled = true
"#;

/// `<config_dir>/todo-tui/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, or from the default location when `None`.
///
/// Never fails: a missing file yields defaults, and an unreadable or
/// malformed file is logged and also yields defaults.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => {
                debug!("No config directory on this platform, using defaults");
                return Settings::default();
            }
        },
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match read_settings(&config_path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Err(e) => {
            warn!("Failed to load {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Read and parse a settings file, surfacing errors.
pub fn read_settings(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| Error::config_invalid(e.to_string()))
}

/// Write a commented default config to `path` unless one already exists.
///
/// Returns the path written (or left in place).
pub fn init_config(path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::config(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }
    }

    if path.exists() {
        info!("Config already exists at {:?}, leaving it untouched", path);
    } else {
        std::fs::write(path, DEFAULT_CONFIG)?;
        info!("Wrote default config to {:?}", path);
    }

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconMode;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_missing_file() {
        let temp = tempdir().unwrap();
        let settings = load_settings(Some(&temp.path().join("config.toml")));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        let config = r#"
[ui]
icons = "ascii"
show_hints = false

[behavior]
follow_toggled = false
"#;
        std::fs::write(&path, config).unwrap();

        let settings = load_settings(Some(&path));

        assert_eq!(settings.ui.icons, IconMode::Ascii);
        assert!(!settings.ui.show_hints);
        assert!(!settings.behavior.follow_toggled);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        // Should return defaults
        let settings = load_settings(Some(&path));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_read_settings_reports_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui]\nshow_hints = \"maybe\"\n").unwrap();

        let err = read_settings(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }

    #[test]
    fn test_init_config_writes_loadable_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let written = init_config(&path).unwrap();

        assert_eq!(written, path);
        assert_eq!(read_settings(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_init_config_is_idempotent() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui]\nicons = \"ascii\"\n").unwrap();

        init_config(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[ui]\nicons = \"ascii\"\n");
    }

    #[test]
    fn test_default_config_path_shape() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("todo-tui/config.toml"));
        }
    }
}
