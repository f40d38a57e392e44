use crate::components::footer::FOOTER_HEIGHT;
use crate::components::header::HEADER_HEIGHT;
use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Split a screen into header, body, and footer areas
pub fn create_standard_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Center a `width` x `height` rect inside `area`, clamped to its size
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    centered
}

/// Popup area as a percentage of `area`, with an upper bound in cells
pub fn center_popup(area: Rect, percent_x: u16, percent_y: u16, max: (u16, u16)) -> Rect {
    let scale = |len: u16, percent: u16| (u32::from(len) * u32::from(percent) / 100) as u16;
    let width = scale(area.width, percent_x).min(max.0);
    let height = scale(area.height, percent_y).min(max.1);
    center_rect(area, width, height)
}
