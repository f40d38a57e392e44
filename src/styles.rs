//! Theme and style system for langshelf
//!
//! Every screen pulls its styles from the global [`Theme`], so switching the
//! theme at startup (config, `--theme`, or `NO_COLOR`) restyles everything.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

/// Selection indicator shown next to the selected row
pub const LIST_HIGHLIGHT_SYMBOL: &str = "» ";

static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Replace the global theme
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = Theme::new(theme_type);
}

/// Get the current theme
pub fn theme() -> Theme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Theme type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// Disable all UI colors (equivalent to `NO_COLOR=1`)
    NoColor,
}

impl ThemeType {
    /// Pick the theme from a configured name, letting `NO_COLOR` win
    pub fn resolve(name: &str, no_color: bool) -> Self {
        if no_color {
            return ThemeType::NoColor;
        }
        name.parse().unwrap_or_else(|e| {
            tracing::warn!("{}, using dark", e);
            ThemeType::Dark
        })
    }
}

impl FromStr for ThemeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(ThemeType::Dark),
            "light" => Ok(ThemeType::Light),
            "nocolor" | "no-color" | "no_color" => Ok(ThemeType::NoColor),
            other => Err(format!("Unknown theme {:?}", other)),
        }
    }
}

/// Color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub theme_type: ThemeType,
    /// Borders, the title bar, key UI elements
    pub primary: Color,
    /// Section headers in the language list
    pub secondary: Color,
    pub text: Color,
    /// Descriptions and hints
    pub text_muted: Color,
    /// Key names in hints and the selected row
    pub text_emphasis: Color,
    pub border: Color,
    pub highlight_bg: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    /// Dark theme - for dark terminal backgrounds
    pub const fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            primary: Color::Cyan,
            secondary: Color::Magenta,
            text: Color::White,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Yellow,
            border: Color::DarkGray,
            highlight_bg: Color::DarkGray,
        }
    }

    /// Light theme - darker accents for light backgrounds
    pub const fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            primary: Color::Blue,
            secondary: Color::Magenta,
            text: Color::Black,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Blue,
            border: Color::DarkGray,
            highlight_bg: Color::Gray,
        }
    }

    /// No-color theme
    ///
    /// The style helpers never set fg/bg in this mode; only modifiers.
    pub const fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,
            primary: Color::Reset,
            secondary: Color::Reset,
            text: Color::Reset,
            text_muted: Color::Reset,
            text_emphasis: Color::Reset,
            border: Color::Reset,
            highlight_bg: Color::Reset,
        }
    }

    fn is_plain(&self) -> bool {
        self.theme_type == ThemeType::NoColor
    }

    /// Title bar and detail heading
    pub fn title_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// List section header
    pub fn section_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        Style::default()
            .fg(self.secondary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().fg(self.text)
    }

    /// Secondary text such as a language's description
    pub fn muted_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted)
    }

    pub fn emphasis_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.text_emphasis)
    }

    pub fn border_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().fg(self.border)
    }

    /// Selected row
    pub fn highlight_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Style::default()
            .fg(self.text_emphasis)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }
}
