use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

/// Height of the header, borders included
pub const HEADER_HEIGHT: u16 = 3;

/// Title bar shared by all screens
pub struct Header;

impl Header {
    /// Render a title bar with a breadcrumb title and a right-aligned note
    ///
    /// # Arguments
    /// * `frame` - The frame to render to
    /// * `area` - The area to render the header in
    /// * `title` - The title text (e.g., "Languages")
    /// * `note` - Short text shown on the right (e.g., "6 languages")
    ///
    /// # Returns
    /// The height of the header (for layout calculations)
    pub fn render(frame: &mut Frame, area: Rect, title: &str, note: &str) -> Result<u16> {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(t.border_style())
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(note.chars().count() as u16)])
            .split(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(title, t.title_style())),
            chunks[0],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(note, t.muted_style())).alignment(Alignment::Right),
            chunks[1],
        );

        Ok(HEADER_HEIGHT)
    }
}
