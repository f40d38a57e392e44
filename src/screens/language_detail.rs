//! Language detail screen.
//!
//! Shows one language's artwork, name, and description, stacked and centered.

use crate::catalog::LanguageRecord;
use crate::components::{Footer, Header};
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::layout::{center_rect, create_standard_layout};
use crate::widgets::LanguageImage;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Language detail screen controller.
pub struct LanguageDetailScreen {
    record: LanguageRecord,
}

impl LanguageDetailScreen {
    pub fn new(record: LanguageRecord) -> Self {
        Self { record }
    }

    /// The language being shown
    pub fn record(&self) -> &LanguageRecord {
        &self.record
    }

    /// Region reserved for the image: half the width, a quarter of the height
    pub fn image_region(area: Rect) -> (u16, u16) {
        (area.width / 2, area.height / 4)
    }
}

impl Screen for LanguageDetailScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let (header_area, body_area, footer_area) = create_standard_layout(area);

        let title = format!("Languages › {}", self.record.name);
        Header::render(frame, header_area, &title, self.record.description)?;

        // Image, gap, name, description
        let (image_width, image_height) = Self::image_region(body_area);
        let content = center_rect(body_area, body_area.width, image_height + 3);
        let [image_row, _, name_row, description_row] = Layout::vertical([
            Constraint::Length(image_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(content);

        let image_area = center_rect(image_row, image_width, image_height);
        frame.render_widget(LanguageImage::new(self.record.image), image_area);

        frame.render_widget(
            Paragraph::new(Span::styled(self.record.name, t.title_style()))
                .alignment(Alignment::Center),
            name_row,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(self.record.description, t.muted_style()))
                .alignment(Alignment::Center),
            description_row,
        );

        Footer::render(frame, footer_area, &ctx.keymap.footer_detail())?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        Ok(match ctx.action_for(&event) {
            Some(Action::Cancel) => ScreenAction::Pop,
            Some(Action::Quit) => ScreenAction::Quit,
            Some(Action::Help) => ScreenAction::ShowHelp,
            _ => ScreenAction::None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets;
    use crate::catalog::catalog;
    use crate::keymap::Keymap;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn swift() -> LanguageRecord {
        catalog().record("swift").unwrap().clone()
    }

    fn render(screen: &mut LanguageDetailScreen, width: u16, height: u16) -> Vec<String> {
        let keymap = Keymap::default();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                screen
                    .render(f, f.area(), &RenderContext::new(&keymap))
                    .unwrap();
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol().to_string()).collect())
            .collect()
    }

    #[test]
    fn test_image_region_is_proportional() {
        assert_eq!(
            LanguageDetailScreen::image_region(Rect::new(0, 0, 80, 40)),
            (40, 10)
        );
    }

    #[test]
    fn test_render_shows_name_description_and_image() {
        let mut screen = LanguageDetailScreen::new(swift());
        let lines = render(&mut screen, 60, 40);
        let text = lines.join("\n");

        assert!(text.contains("Languages › Swift"));
        assert!(lines.iter().any(|l| l.trim() == "Swift"));
        assert!(lines.iter().any(|l| l.trim() == "Compiled"));

        let first_art_line = assets::lookup("swift").unwrap().lines().next().unwrap();
        assert!(lines.iter().any(|l| l.trim() == first_art_line));
    }

    #[test]
    fn test_name_is_above_description() {
        let mut screen = LanguageDetailScreen::new(swift());
        let lines = render(&mut screen, 60, 40);
        let name = lines.iter().position(|l| l.trim() == "Swift").unwrap();
        let description = lines.iter().position(|l| l.trim() == "Compiled").unwrap();
        assert_eq!(description, name + 1);
    }

    #[test]
    fn test_missing_artwork_leaves_region_blank() {
        let record = LanguageRecord {
            id: "zig",
            name: "Zig",
            image: "zig",
            description: "Compiled",
        };
        let mut screen = LanguageDetailScreen::new(record);
        let lines = render(&mut screen, 60, 40);
        assert!(lines.iter().any(|l| l.trim() == "Zig"));
    }

    #[test]
    fn test_events() {
        let keymap = Keymap::default();
        let ctx = ScreenContext::new(&keymap);
        let mut screen = LanguageDetailScreen::new(swift());
        let key = |code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE));

        assert_eq!(screen.handle_event(key(KeyCode::Esc), &ctx).unwrap(), ScreenAction::Pop);
        assert_eq!(
            screen.handle_event(key(KeyCode::Char('q')), &ctx).unwrap(),
            ScreenAction::Quit
        );
        assert_eq!(
            screen.handle_event(key(KeyCode::Enter), &ctx).unwrap(),
            ScreenAction::None
        );
        assert_eq!(screen.record(), &swift());
    }
}
