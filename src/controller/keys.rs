//! Key bindings for the table controller.
//!
//! Page navigation keys live on the paginator's own keymap; this one covers
//! row selection, column sorting and forcing a pending search.

use crate::key::{self, KeyMap};
use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// Key bindings for rows, sorting and search.
#[derive(Debug, Clone)]
pub struct TableKeyMap {
    /// Select the previous row.
    pub row_up: key::Binding,
    /// Select the next row.
    pub row_down: key::Binding,
    /// Sort by the first column.
    pub sort_first: key::Binding,
    /// Sort by the second column.
    pub sort_second: key::Binding,
    /// Sort by the third column.
    pub sort_third: key::Binding,
    /// Apply the pending search without waiting for the debounce window.
    pub submit_search: key::Binding,
}

impl Default for TableKeyMap {
    fn default() -> Self {
        Self {
            row_up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "up"),
            row_down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            sort_first: key::Binding::new(vec![KeyCode::Char('1')]).with_help("1", "sort col 1"),
            sort_second: key::Binding::new(vec![KeyCode::Char('2')]).with_help("2", "sort col 2"),
            sort_third: key::Binding::new(vec![KeyCode::Char('3')]).with_help("3", "sort col 3"),
            submit_search: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "search"),
        }
    }
}

impl TableKeyMap {
    /// The column position a sort key refers to.
    pub(super) fn sort_column(&self, msg: &KeyMsg) -> Option<usize> {
        [&self.sort_first, &self.sort_second, &self.sort_third]
            .into_iter()
            .position(|binding| binding.matches(msg))
    }
}

impl KeyMap for TableKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.row_up, &self.row_down, &self.sort_first]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.row_up, &self.row_down],
            vec![&self.sort_first, &self.sort_second, &self.sort_third],
            vec![&self.submit_search],
        ]
    }
}

