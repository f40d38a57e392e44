use crate::catalog::Catalog;
use crate::components::HelpOverlay;
use crate::config::Config;
use crate::navigation::{Navigator, Route};
use crate::screens::{
    LanguageDetailScreen, LanguageListScreen, RenderContext, Screen, ScreenAction, ScreenContext,
};
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::Frame;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};

/// Main application state
pub struct App {
    config: Config,
    config_path: PathBuf,
    catalog: &'static Catalog,
    navigator: Navigator,
    /// One screen per route on the navigation stack, bottom to top
    screens: Vec<Box<dyn Screen>>,
    show_help: bool,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, config_path: PathBuf, catalog: &'static Catalog) -> Self {
        let navigator = Navigator::new();
        let root = Self::screen_for(catalog, navigator.current());
        Self {
            config,
            config_path,
            catalog,
            navigator,
            screens: vec![root],
            show_help: false,
            should_quit: false,
        }
    }

    fn screen_for(catalog: &'static Catalog, route: &Route) -> Box<dyn Screen> {
        match route {
            Route::List => Box::new(LanguageListScreen::new(catalog)),
            Route::Detail(record) => Box::new(LanguageDetailScreen::new(record.clone())),
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_help_visible(&self) -> bool {
        self.show_help
    }

    /// Run the event loop until the user quits
    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        tui.enter()?;
        info!("TUI started with {} languages", self.catalog.len());

        let result = self.event_loop(tui);
        if let Err(e) = &result {
            error!("Event loop failed: {:#}", e);
        }

        tui.exit()?;
        result
    }

    fn event_loop(&mut self, tui: &mut Tui) -> Result<()> {
        loop {
            let mut render_result = Ok(());
            tui.terminal_mut().draw(|frame| {
                render_result = self.draw(frame);
            })?;
            render_result?;

            if self.should_quit {
                break;
            }

            // Poll for events with 250ms timeout
            if let Some(event) = tui.poll_event(Duration::from_millis(250))? {
                self.handle_event(event)?;
            }
        }
        Ok(())
    }

    /// Draw the screen on top of the navigation stack, plus the help overlay
    pub fn draw(&mut self, frame: &mut Frame) -> Result<()> {
        let area = frame.area();
        let ctx = RenderContext::new(&self.config.keymap);
        if let Some(screen) = self.screens.last_mut() {
            screen.render(frame, area, &ctx)?;
        }
        if self.show_help {
            HelpOverlay::render(
                frame,
                area,
                &self.config.keymap,
                &self.config_path.display().to_string(),
            )?;
        }
        Ok(())
    }

    /// Route an input event to the top screen and apply its action
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        if self.show_help {
            // Any key press closes the overlay
            if matches!(&event, Event::Key(key) if key.kind == KeyEventKind::Press) {
                self.show_help = false;
            }
            return Ok(());
        }

        let ctx = ScreenContext::new(&self.config.keymap);
        let action = match self.screens.last_mut() {
            Some(screen) => screen.handle_event(event, &ctx)?,
            None => ScreenAction::None,
        };
        self.apply(action);
        Ok(())
    }

    fn apply(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::None => {}
            ScreenAction::Push(route) => {
                self.screens.push(Self::screen_for(self.catalog, &route));
                self.navigator.push(route);
            }
            ScreenAction::Pop => {
                if self.navigator.pop().is_some() {
                    self.screens.pop();
                }
            }
            ScreenAction::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
            ScreenAction::ShowHelp => self.show_help = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn app() -> App {
        App::new(Config::default(), PathBuf::from("/tmp/langshelf.toml"), catalog())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
            .unwrap();
    }

    #[test]
    fn test_open_and_close_detail() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        let rust = catalog().record("rust").unwrap().clone();
        assert_eq!(app.navigator().current(), &Route::Detail(rust));
        assert_eq!(app.screens.len(), app.navigator().depth());

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.navigator().current(), &Route::List);
        assert_eq!(app.screens.len(), 1);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_list_selection_survives_detail_round_trip() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Enter);
        let kotlin = catalog().record("kotlin").unwrap().clone();
        assert_eq!(app.navigator().current(), &Route::Detail(kotlin));
    }

    #[test]
    fn test_help_overlay_swallows_next_key() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.is_help_visible());

        // 'q' closes help instead of quitting
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.is_help_visible());
        assert!(!app.should_quit());

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_quit_from_detail() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
