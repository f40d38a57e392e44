//! Keymap configuration module
//!
//! Customizable keyboard shortcuts with preset keymaps (standard, vim, emacs)
//! and per-action overrides from the config file.

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{parse_key_string, KeyBinding, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Keymap {
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined overrides (checked before preset)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Action for a key event.
    ///
    /// When an action is overridden, the preset bindings for that action are
    /// shadowed.
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|b| b.matches(code, modifiers))
            .map(|b| b.action)
    }

    /// Overrides followed by the preset bindings they don't shadow
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|p| !self.overrides.iter().any(|o| o.action == p.action)),
        );
        bindings
    }

    /// Display string for the first key bound to an action
    pub fn key_display(&self, action: Action) -> String {
        self.all_bindings()
            .iter()
            .find(|b| b.action == action)
            .map(KeyBinding::display)
            .unwrap_or_else(|| format!("{:?}", action))
    }

    /// Footer hint for the language list
    pub fn footer_list(&self) -> String {
        format!(
            "{}/{}: Navigate | {}: Open | {}: Quit | {}: Help",
            self.key_display(Action::MoveUp),
            self.key_display(Action::MoveDown),
            self.key_display(Action::Confirm),
            self.key_display(Action::Quit),
            self.key_display(Action::Help)
        )
    }

    /// Footer hint for the detail screen
    pub fn footer_detail(&self) -> String {
        format!(
            "{}: Back | {}: Quit | {}: Help",
            self.key_display(Action::Cancel),
            self.key_display(Action::Quit),
            self.key_display(Action::Help)
        )
    }
}
