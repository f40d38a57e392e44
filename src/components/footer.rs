use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Height of the footer (1 for border, 1 for text)
pub const FOOTER_HEIGHT: u16 = 2;

/// Key hint footer
pub struct Footer;

impl Footer {
    /// Render a footer from hint text like `"↑/↓: Navigate | Enter: Open"`
    ///
    /// The part after each `": "` is treated as the key label and the part
    /// before it as the key, and each is styled separately.
    pub fn render(frame: &mut Frame, area: Rect, text: &str) -> Result<u16> {
        let t = theme();
        let mut spans = Vec::new();

        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.muted_style()));
            }
            if let Some((keys, label)) = part.split_once(": ") {
                spans.push(Span::styled(
                    format!("{}: ", keys),
                    t.emphasis_style().add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled(label.to_string(), t.text_style()));
            } else {
                spans.push(Span::styled(part.to_string(), t.text_style()));
            }
        }

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(t.border_style());
        let inner = block.inner(area);

        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            inner,
        );

        Ok(FOOTER_HEIGHT)
    }
}
