//! Help Overlay Component
//!
//! Lists the active keybindings when the user presses the help key.
//! Any key closes it.

use crate::keymap::Keymap;
use crate::styles::theme;
use crate::utils::layout::center_popup;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Renders the help overlay showing current keybindings
pub struct HelpOverlay;

impl HelpOverlay {
    /// Render the help overlay in the center of `area`
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, config_path: &str) -> Result<()> {
        let t = theme();
        let popup_area = center_popup(area, 80, 80, (70, 30));

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Keyboard Shortcuts - {} Preset ", keymap.preset.name()))
            .title_alignment(Alignment::Center)
            .title_style(t.title_style())
            .border_style(t.border_style());
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let [bindings_area, footer_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(2)]).areas(inner);

        frame.render_widget(
            Paragraph::new(Self::binding_lines(keymap)).wrap(Wrap { trim: false }),
            bindings_area,
        );

        let footer = Paragraph::new(format!(
            "Edit keybindings in: {}\nPress any key to close",
            config_path
        ))
        .style(t.muted_style())
        .alignment(Alignment::Center);
        frame.render_widget(footer, footer_area);

        Ok(())
    }

    /// One line per binding, grouped under category headings.
    ///
    /// Bindings that share a category are listed together even when the
    /// preset interleaves them with others.
    fn binding_lines(keymap: &Keymap) -> Vec<Line<'static>> {
        let t = theme();
        let bindings = keymap.all_bindings();
        let mut categories: Vec<&'static str> = Vec::new();
        for binding in &bindings {
            let category = binding.action.category();
            if !categories.contains(&category) {
                categories.push(category);
            }
        }

        let mut lines = Vec::new();
        for category in categories {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                format!("  {}", category),
                t.section_style(),
            )));
            for binding in bindings.iter().filter(|b| b.action.category() == category) {
                lines.push(Line::from(vec![
                    Span::styled(format!("    {:12}", binding.display()), t.emphasis_style()),
                    Span::styled(binding.get_description().to_string(), t.text_style()),
                ]));
            }
        }
        lines
    }
}
