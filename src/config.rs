use crate::keymap::Keymap;
use crate::styles::ThemeType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Presentation settings read from `config.toml`
///
/// The file is optional and never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// UI theme: "dark", "light", or "nocolor"
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Keyboard shortcuts
    #[serde(default)]
    pub keymap: Keymap,
}

fn default_theme() -> String {
    "dark".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            keymap: Keymap::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults if it doesn't exist
    pub fn load(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!("No config at {:?}, using defaults", config_path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;

        // A dropped override no longer shadows the preset bindings for its action
        config.keymap.overrides.retain(|binding| match binding.parse() {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("Ignoring unusable key binding {:?}: {}", binding.key, e);
                false
            }
        });

        Ok(config)
    }

    /// Theme to use, with `NO_COLOR` taking precedence over the configured name
    pub fn theme_type(&self, no_color: bool) -> ThemeType {
        ThemeType::resolve(&self.theme, no_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{Action, KeymapPreset};
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.theme_type(false), ThemeType::Dark);
    }

    #[test]
    fn test_parse_theme_and_keymap() {
        let config = Config::parse(
            r#"
theme = "light"

[keymap]
preset = "emacs"

[[keymap.overrides]]
key = "o"
action = "confirm"
"#,
        )
        .unwrap();

        assert_eq!(config.theme_type(false), ThemeType::Light);
        assert_eq!(config.theme_type(true), ThemeType::NoColor);
        assert_eq!(config.keymap.preset, KeymapPreset::Emacs);
        assert_eq!(config.keymap.overrides[0].action, Action::Confirm);
    }

    #[test]
    fn test_unknown_action_is_an_error() {
        let result = Config::parse(
            r#"
[[keymap.overrides]]
key = "x"
action = "launch_rockets"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unusable_override_keeps_preset_bindings() {
        let config = Config::parse(
            r#"
[[keymap.overrides]]
key = "hyper+q"
action = "quit"

[[keymap.overrides]]
key = "ctrl+"
action = "help"
"#,
        )
        .unwrap();

        assert!(config.keymap.overrides.is_empty());
        let keymap = &config.keymap;
        assert_eq!(
            keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(Action::Quit)
        );
        assert_eq!(
            keymap.get_action(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Action::Quit)
        );
        assert_eq!(
            keymap.get_action(KeyCode::Char('?'), KeyModifiers::NONE),
            Some(Action::Help)
        );
    }
}
