//! Language list screen.
//!
//! Shows the catalog as a sectioned list: a header row per group followed by
//! one row per language. Activating a language row opens its detail screen.

use crate::catalog::{Catalog, LanguageRecord};
use crate::components::{Footer, Header};
use crate::keymap::Action;
use crate::navigation::Route;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::utils::layout::create_standard_layout;
use crate::utils::list_navigation::{ListStateExt, DEFAULT_PAGE_SIZE};
use anyhow::Result;
use crossterm::event::{Event, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};
use ratatui::Frame;

/// One rendered row of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row<'a> {
    /// Section header carrying the group title
    Header(&'a str),
    /// A selectable language
    Language(&'a LanguageRecord),
}

impl Row<'_> {
    pub fn is_selectable(&self) -> bool {
        matches!(self, Row::Language(_))
    }
}

/// Flatten the catalog into display rows, in display order
pub fn rows(catalog: &Catalog) -> Vec<Row<'_>> {
    let mut rows = Vec::with_capacity(catalog.len() + catalog.groups().len());
    for group in catalog.groups() {
        rows.push(Row::Header(group.title));
        rows.extend(group.languages.iter().map(Row::Language));
    }
    rows
}

/// Language list screen controller.
pub struct LanguageListScreen {
    catalog: &'static Catalog,
    list_state: ListState,
}

impl LanguageListScreen {
    pub fn new(catalog: &'static Catalog) -> Self {
        let mut list_state = ListState::default();
        list_state.select_first_item(&Self::mask(catalog));
        Self {
            catalog,
            list_state,
        }
    }

    fn mask(catalog: &Catalog) -> Vec<bool> {
        rows(catalog).iter().map(Row::is_selectable).collect()
    }

    /// The language in the selected row, if any
    pub fn selected_record(&self) -> Option<&'static LanguageRecord> {
        let index = self.list_state.selected()?;
        match rows(self.catalog).get(index) {
            Some(Row::Language(record)) => Some(*record),
            _ => None,
        }
    }

    /// Move the selection to the row showing the language with `id`
    pub fn select_record(&mut self, id: &str) -> bool {
        let index = rows(self.catalog)
            .iter()
            .position(|row| matches!(row, Row::Language(r) if r.id == id));
        if index.is_some() {
            self.list_state.select(index);
        }
        index.is_some()
    }

    fn list_items(&self) -> Vec<ListItem<'static>> {
        let t = theme();
        rows(self.catalog)
            .into_iter()
            .map(|row| match row {
                Row::Header(title) => {
                    ListItem::new(Line::from(Span::styled(title.to_uppercase(), t.section_style())))
                }
                Row::Language(record) => ListItem::new(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(record.name, t.text_style()),
                ])),
            })
            .collect()
    }

    fn navigate(&mut self, action: Action) {
        let mask = Self::mask(self.catalog);
        match action {
            Action::MoveUp => self.list_state.move_up_by(1, &mask),
            Action::MoveDown => self.list_state.move_down_by(1, &mask),
            Action::PageUp => self.list_state.move_up_by(DEFAULT_PAGE_SIZE, &mask),
            Action::PageDown => self.list_state.move_down_by(DEFAULT_PAGE_SIZE, &mask),
            Action::GoToTop => self.list_state.select_first_item(&mask),
            Action::GoToEnd => self.list_state.select_last_item(&mask),
            _ => {}
        }
    }
}

impl Screen for LanguageListScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let (header_area, body_area, footer_area) = create_standard_layout(area);

        let note = format!(
            "{} languages in {} groups",
            self.catalog.len(),
            self.catalog.groups().len()
        );
        Header::render(frame, header_area, "Languages", &note)?;

        let list = List::new(self.list_items())
            .block(
                Block::default()
                    .borders(Borders::NONE)
                    .padding(Padding::new(1, 1, 1, 0)),
            )
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
        frame.render_stateful_widget(list, body_area, &mut self.list_state);

        Footer::render(frame, footer_area, &ctx.keymap.footer_list())?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        if let Event::Mouse(mouse) = &event {
            match mouse.kind {
                MouseEventKind::ScrollUp => self.navigate(Action::MoveUp),
                MouseEventKind::ScrollDown => self.navigate(Action::MoveDown),
                _ => {}
            }
            return Ok(ScreenAction::None);
        }

        let Some(action) = ctx.action_for(&event) else {
            return Ok(ScreenAction::None);
        };

        Ok(match action {
            Action::Confirm => {
                let mask = Self::mask(self.catalog);
                self.list_state.selected_or_first(&mask);
                match self.selected_record() {
                    Some(record) => ScreenAction::Push(Route::Detail(record.clone())),
                    None => ScreenAction::None,
                }
            }
            // The list is the root screen, so backing out leaves the app
            Action::Cancel | Action::Quit => ScreenAction::Quit,
            Action::Help => ScreenAction::ShowHelp,
            nav => {
                self.navigate(nav);
                ScreenAction::None
            }
        })
    }
}
