//! langshelf - a terminal browser for a small catalog of programming languages
//!
//! The catalog is grouped by execution model (compiled vs. interpreted). The
//! TUI shows it as a sectioned list; opening a row shows that language's
//! artwork, name, and description.

// Domain
pub mod assets;
pub mod catalog;
pub mod navigation;

// TUI
pub mod app;
pub mod components;
pub mod screens;
pub mod styles;
pub mod tui;
pub mod widgets;

// Ambient
pub mod cli;
pub mod config;
pub mod keymap;
pub mod utils;

// Re-exports for convenience
pub use catalog::{catalog, Catalog, LanguageGroup, LanguageRecord};
pub use config::Config;
pub use navigation::{Navigator, Route};

pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
