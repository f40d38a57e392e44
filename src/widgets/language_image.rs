//! The [`LanguageImage`] widget renders a language's bundled artwork.
use crate::assets::{self, Artwork};
use crate::styles::{theme, ThemeType};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

/// A widget that renders the artwork for an image key, fitted to its area
///
/// Artwork smaller than the area is centered. Artwork larger than the area
/// is cropped around its center. An unresolved key renders nothing.
///
/// # Examples
///
/// ```rust
/// use langshelf::widgets::LanguageImage;
///
/// # fn draw(frame: &mut ratatui::Frame) {
/// frame.render_widget(LanguageImage::new("rust"), frame.area());
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageImage {
    artwork: Option<&'static Artwork>,
}

impl LanguageImage {
    /// Create a widget for the given image key
    pub fn new(image: &str) -> Self {
        let artwork = assets::lookup(image);
        if artwork.is_none() {
            tracing::debug!("No artwork bundled for image key {:?}", image);
        }
        Self { artwork }
    }

    /// Whether the image key resolved to bundled artwork
    pub fn is_resolved(&self) -> bool {
        self.artwork.is_some()
    }

    fn style(artwork: &Artwork) -> Style {
        let t = theme();
        if t.theme_type == ThemeType::NoColor {
            return t.text_style();
        }
        Style::default().fg(artwork.color)
    }
}

impl Widget for LanguageImage {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(artwork) = self.artwork else {
            return;
        };
        if area.is_empty() {
            return;
        }

        let style = Self::style(artwork);
        let art_width = artwork.width();
        let art_height = artwork.height();

        // Rows/columns of the artwork skipped when cropping
        let skip_rows = art_height.saturating_sub(area.height) / 2;
        let skip_cols = art_width.saturating_sub(area.width) / 2;

        let visible_height = art_height.min(area.height);
        let visible_width = art_width.min(area.width);
        let top = area.y + (area.height - visible_height) / 2;
        let left = area.x + (area.width - visible_width) / 2;

        for (row, line) in artwork
            .lines()
            .skip(skip_rows as usize)
            .take(visible_height as usize)
            .enumerate()
        {
            let visible: String = line
                .chars()
                .skip(skip_cols as usize)
                .take(visible_width as usize)
                .collect();
            buf.set_string(left, top + row as u16, visible, style);
        }
    }
}
