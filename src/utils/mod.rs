pub mod layout;
pub mod list_navigation;
pub mod path;

pub use layout::{center_popup, center_rect, create_standard_layout};
pub use list_navigation::ListStateExt;
pub use path::{get_config_path, get_log_dir};
