//! List navigation for lists that mix selectable rows with section headers.
//!
//! Each method takes a mask with one entry per rendered row; `true` marks a
//! row that can hold the selection. Movement counts selectable rows only, so
//! headers are skipped, and clamps at both ends.

use ratatui::widgets::ListState;

/// Default page size for page up/down navigation.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Extension trait for `ListState` with header-skipping navigation.
pub trait ListStateExt {
    /// Move selection up by `count` selectable rows, stopping at the first.
    fn move_up_by(&mut self, count: usize, selectable: &[bool]);

    /// Move selection down by `count` selectable rows, stopping at the last.
    fn move_down_by(&mut self, count: usize, selectable: &[bool]);

    /// Select the first selectable row.
    fn select_first_item(&mut self, selectable: &[bool]);

    /// Select the last selectable row.
    fn select_last_item(&mut self, selectable: &[bool]);

    /// Get the selected row, initializing to the first selectable one.
    fn selected_or_first(&mut self, selectable: &[bool]) -> Option<usize>;
}

fn selectable_rows(selectable: &[bool]) -> Vec<usize> {
    selectable
        .iter()
        .enumerate()
        .filter_map(|(i, s)| s.then_some(i))
        .collect()
}

/// Position of the current selection among the selectable rows.
///
/// A selection resting on a header (or nowhere) counts as the nearest
/// selectable row at or after it.
fn current_position(state: &ListState, rows: &[usize]) -> usize {
    let current = state.selected().unwrap_or(0);
    rows.iter()
        .position(|&r| r >= current)
        .unwrap_or(rows.len().saturating_sub(1))
}

impl ListStateExt for ListState {
    fn move_up_by(&mut self, count: usize, selectable: &[bool]) {
        let rows = selectable_rows(selectable);
        if rows.is_empty() {
            return;
        }
        let pos = current_position(self, &rows).saturating_sub(count);
        self.select(Some(rows[pos]));
    }

    fn move_down_by(&mut self, count: usize, selectable: &[bool]) {
        let rows = selectable_rows(selectable);
        if rows.is_empty() {
            return;
        }
        let on_selectable = self
            .selected()
            .is_some_and(|s| selectable.get(s).copied().unwrap_or(false));
        let start = current_position(self, &rows);
        // Landing on the first row past a header already counts as one step
        let step = if on_selectable { count } else { count.saturating_sub(1) };
        let pos = (start + step).min(rows.len() - 1);
        self.select(Some(rows[pos]));
    }

    fn select_first_item(&mut self, selectable: &[bool]) {
        if let Some(&first) = selectable_rows(selectable).first() {
            self.select(Some(first));
        }
    }

    fn select_last_item(&mut self, selectable: &[bool]) {
        if let Some(&last) = selectable_rows(selectable).last() {
            self.select(Some(last));
        }
    }

    fn selected_or_first(&mut self, selectable: &[bool]) -> Option<usize> {
        let valid = self
            .selected()
            .is_some_and(|s| selectable.get(s).copied().unwrap_or(false));
        if !valid {
            self.select(None);
            self.select_first_item(selectable);
        }
        self.selected()
    }
}
