//! Keybindings matching utilities.
//!
//! Provides functions to convert an AppKeyEvent to its string representation,
//! to check if a key event matches configured bindings, and to load the
//! bindings file from the data directory.

#[cfg(feature = "native")]
use std::path::{Path, PathBuf};

use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::{AppKeyEvent, KeyCode};
#[cfg(feature = "native")]
use crate::state::ConfigError;

impl KeybindingsConfig {
    /// Convert an AppKeyEvent to our string format.
    ///
    /// Examples:
    /// - KeyCode::Char('a') with no modifiers -> "a"
    /// - KeyCode::Char('c') with ctrl -> "ctrl+c"
    /// - KeyCode::Char('L') -> "shift+l"
    /// - KeyCode::Left with shift -> "shift+left"
    /// - KeyCode::Tab with shift -> "shift+tab"
    pub fn app_key_to_string(key: &AppKeyEvent) -> String {
        let mut parts = Vec::new();

        if key.ctrl {
            parts.push("ctrl");
        }
        if key.alt {
            parts.push("alt");
        }

        let key_str = match &key.code {
            KeyCode::Char(c) => {
                // Some terminals report 'L' without the shift modifier
                if c.is_uppercase() {
                    parts.push("shift");
                    c.to_lowercase().to_string()
                } else if key.shift && !c.is_alphabetic() {
                    parts.push("shift");
                    c.to_string()
                } else {
                    c.to_string()
                }
            }
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Tab => {
                if key.shift {
                    parts.push("shift");
                }
                "tab".to_string()
            }
            KeyCode::Backspace => "backspace".to_string(),
            KeyCode::Delete => "delete".to_string(),
            KeyCode::Esc => "esc".to_string(),
            KeyCode::Up => {
                if key.shift {
                    parts.push("shift");
                }
                "up".to_string()
            }
            KeyCode::Down => {
                if key.shift {
                    parts.push("shift");
                }
                "down".to_string()
            }
            KeyCode::Left => {
                if key.shift {
                    parts.push("shift");
                }
                "left".to_string()
            }
            KeyCode::Right => {
                if key.shift {
                    parts.push("shift");
                }
                "right".to_string()
            }
            KeyCode::Home => "home".to_string(),
            KeyCode::End => "end".to_string(),
            KeyCode::PageUp => "pageup".to_string(),
            KeyCode::PageDown => "pagedown".to_string(),
            KeyCode::F(n) => format!("f{}", n),
            #[cfg(feature = "native")]
            KeyCode::BackTab => {
                // BackTab is Shift+Tab
                if !parts.contains(&"shift") {
                    parts.push("shift");
                }
                "tab".to_string()
            }
            _ => return String::new(), // Unsupported key
        };

        parts.push(&key_str);
        parts.join("+")
    }

    /// Check if an AppKeyEvent matches any of the configured bindings.
    pub fn matches(key: &AppKeyEvent, bindings: &[String]) -> bool {
        let key_str = Self::app_key_to_string(key);
        if key_str.is_empty() {
            return false;
        }
        bindings.iter().any(|b| b.eq_ignore_ascii_case(&key_str))
    }

    /// Get the keybindings file path
    #[cfg(feature = "native")]
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("keybindings.yaml")
    }

    /// Load keybindings from file, returning defaults if the file doesn't exist or fails to parse.
    #[cfg(feature = "native")]
    pub fn load_or_default(data_dir: &Path) -> Self {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Self::default();
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read keybindings");
                return Self::default();
            }
        };

        match serde_saphyr::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Invalid keybindings, using defaults");
                Self::default()
            }
        }
    }

    /// Load keybindings, writing the defaults out first if no file exists yet
    /// so users have a template to edit.
    #[cfg(feature = "native")]
    pub fn load_or_init(data_dir: &Path) -> Self {
        if !Self::path(data_dir).exists() {
            let defaults = Self::default();
            if let Err(e) = defaults.save(data_dir) {
                tracing::warn!(error = %e, "Failed to write default keybindings");
            }
            return defaults;
        }
        Self::load_or_default(data_dir)
    }

    /// Save keybindings to file.
    #[cfg(feature = "native")]
    pub fn save(&self, data_dir: &Path) -> Result<(), ConfigError> {
        let path = Self::path(data_dir);
        let yaml = serde_saphyr::to_string(self).map_err(|e| {
            ConfigError::Serialize(format!("Failed to serialize keybindings: {}", e))
        })?;

        std::fs::write(path, yaml)
            .map_err(|e| ConfigError::Io(format!("Failed to write keybindings: {}", e)))
    }
}
