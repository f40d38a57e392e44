//! Screen trait and associated types.
//!
//! Screens own their state, draw themselves, and answer input with a
//! [`ScreenAction`] instead of touching the navigation stack directly.

use crate::keymap::{Action, Keymap};
use crate::navigation::Route;
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;

/// Context provided for rendering screens.
pub struct RenderContext<'a> {
    /// Active keymap, for footer hints.
    pub keymap: &'a Keymap,
}

impl<'a> RenderContext<'a> {
    pub fn new(keymap: &'a Keymap) -> Self {
        Self { keymap }
    }
}

/// Context provided for handling events.
pub struct ScreenContext<'a> {
    /// Active keymap, for translating keys into actions.
    pub keymap: &'a Keymap,
}

impl<'a> ScreenContext<'a> {
    pub fn new(keymap: &'a Keymap) -> Self {
        Self { keymap }
    }

    /// Translate a terminal event into a keymap action.
    ///
    /// Only key presses count; releases and repeats reported by some
    /// terminals are ignored.
    pub fn action_for(&self, event: &Event) -> Option<Action> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.keymap.get_action(key.code, key.modifiers)
            }
            _ => None,
        }
    }
}

/// Actions that a screen can return after handling an event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScreenAction {
    /// Stay on the current screen.
    #[default]
    None,
    /// Show a new screen on top of the current one.
    Push(Route),
    /// Go back to the previous screen.
    Pop,
    /// Exit the application.
    Quit,
    /// Open the keybinding overlay.
    ShowHelp,
}

/// Trait for screen controllers.
///
/// # Example
///
/// ```rust,ignore
/// impl Screen for MyScreen {
///     fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
///         Ok(())
///     }
///
///     fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
///         match ctx.action_for(&event) {
///             Some(Action::Cancel) => Ok(ScreenAction::Pop),
///             _ => Ok(ScreenAction::None),
///         }
///     }
/// }
/// ```
pub trait Screen {
    /// Render the screen within `area`.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event and say what should happen next.
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;
}
