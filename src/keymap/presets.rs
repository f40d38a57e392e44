//! Preset keymaps: Standard, Vim, Emacs

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Arrows, Enter, Esc
    #[default]
    Standard,
    /// hjkl-style navigation
    Vim,
    /// Ctrl+N/P navigation
    Emacs,
}

impl KeymapPreset {
    /// Bindings for this preset, in help display order
    pub fn bindings(&self) -> Vec<KeyBinding> {
        let table: &[(&str, Action)] = match self {
            KeymapPreset::Standard => STANDARD,
            KeymapPreset::Vim => VIM,
            KeymapPreset::Emacs => EMACS,
        };
        table
            .iter()
            .map(|(key, action)| KeyBinding::new(key, *action))
            .collect()
    }

    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
            KeymapPreset::Emacs => "Emacs",
        }
    }
}

const STANDARD: &[(&str, Action)] = &[
    ("up", Action::MoveUp),
    ("down", Action::MoveDown),
    ("pageup", Action::PageUp),
    ("pagedown", Action::PageDown),
    ("home", Action::GoToTop),
    ("end", Action::GoToEnd),
    ("enter", Action::Confirm),
    ("esc", Action::Cancel),
    ("backspace", Action::Cancel),
    ("q", Action::Quit),
    ("ctrl+c", Action::Quit),
    ("?", Action::Help),
];

const VIM: &[(&str, Action)] = &[
    ("k", Action::MoveUp),
    ("up", Action::MoveUp),
    ("j", Action::MoveDown),
    ("down", Action::MoveDown),
    ("ctrl+u", Action::PageUp),
    ("pageup", Action::PageUp),
    ("ctrl+d", Action::PageDown),
    ("pagedown", Action::PageDown),
    ("g", Action::GoToTop),
    ("home", Action::GoToTop),
    ("shift+g", Action::GoToEnd),
    ("end", Action::GoToEnd),
    ("enter", Action::Confirm),
    ("l", Action::Confirm),
    ("esc", Action::Cancel),
    ("h", Action::Cancel),
    ("q", Action::Quit),
    ("ctrl+c", Action::Quit),
    ("?", Action::Help),
];

const EMACS: &[(&str, Action)] = &[
    ("ctrl+p", Action::MoveUp),
    ("up", Action::MoveUp),
    ("ctrl+n", Action::MoveDown),
    ("down", Action::MoveDown),
    ("alt+v", Action::PageUp),
    ("pageup", Action::PageUp),
    ("ctrl+v", Action::PageDown),
    ("pagedown", Action::PageDown),
    ("alt+<", Action::GoToTop), // M-<
    ("home", Action::GoToTop),
    ("alt+>", Action::GoToEnd), // M->
    ("end", Action::GoToEnd),
    ("enter", Action::Confirm),
    ("ctrl+g", Action::Cancel),
    ("esc", Action::Cancel),
    ("q", Action::Quit),
    ("ctrl+c", Action::Quit),
    ("ctrl+h", Action::Help),
    ("?", Action::Help),
];
