//! Semantic actions triggered by keyboard shortcuts

use serde::{Deserialize, Serialize};

/// All user actions understood by the screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Navigation ============
    /// Move selection up in a list
    MoveUp,
    /// Move selection down in a list
    MoveDown,
    /// Jump up by a page
    PageUp,
    /// Jump down by a page
    PageDown,
    /// Go to the first row
    GoToTop,
    /// Go to the last row
    GoToEnd,

    // ============ Selection ============
    /// Open the selected row (Enter)
    Confirm,
    /// Go back one screen (Esc)
    Cancel,

    // ============ Global ============
    Quit,
    /// Show the keybinding overlay
    Help,
}

impl Action {
    /// Human-readable description shown in the help overlay
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::PageUp => "Page up",
            Action::PageDown => "Page down",
            Action::GoToTop => "Go to top",
            Action::GoToEnd => "Go to end",
            Action::Confirm => "Open language",
            Action::Cancel => "Back",
            Action::Quit => "Quit",
            Action::Help => "Show help",
        }
    }

    /// Category used to group the help overlay
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp
            | Action::MoveDown
            | Action::PageUp
            | Action::PageDown
            | Action::GoToTop
            | Action::GoToEnd => "Navigation",
            Action::Confirm | Action::Cancel => "Selection",
            Action::Quit | Action::Help => "Global",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_category() {
        assert_eq!(Action::PageDown.category(), "Navigation");
        assert_eq!(Action::Confirm.category(), "Selection");
        assert_eq!(Action::Help.category(), "Global");
    }

    #[test]
    fn test_action_serde_names() {
        assert_eq!(serde_json::to_string(&Action::GoToEnd).unwrap(), "\"go_to_end\"");
        let action: Action = serde_json::from_str("\"move_down\"").unwrap();
        assert_eq!(action, Action::MoveDown);
    }
}
