//! Screen controllers for the application.
//!
//! Each screen owns its state and handles both rendering and events. The
//! [`App`](crate::app::App) keeps one screen per route on the navigation
//! stack and routes draws and events to the one on top.
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                     App                       │
//! │   Navigator: [List, Detail(swift)]            │
//! │                        │                      │
//! │                        ▼                      │
//! │   LanguageDetailScreen.handle_event(...)      │
//! │        └─> ScreenAction::Pop                  │
//! │   Navigator: [List]                           │
//! └───────────────────────────────────────────────┘
//! ```

pub mod language_detail;
pub mod language_list;
pub mod screen_trait;

pub use language_detail::LanguageDetailScreen;
pub use language_list::LanguageListScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
