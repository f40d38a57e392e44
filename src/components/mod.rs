// Shared building blocks drawn by the screens

pub mod footer;
pub mod header;
pub mod help_overlay;

pub use footer::Footer;
pub use header::Header;
pub use help_overlay::HelpOverlay;
