//! Pagination math and the page indicator.
//!
//! The free functions [`total_pages`] and [`slice_bounds`] do the arithmetic
//! the derivation pipeline needs. The [`Model`] renders the indicator shown
//! under the table and carries the key bindings for page navigation. It does
//! not own the page index: the controller syncs it from the derived view.
//!
//! Unlike a plain list pager, an empty result has zero pages, not one, so
//! every navigation guard fails while nothing matches.

use crate::key::{self, KeyMap as KeyMapTrait};
use crossterm::event::KeyCode;

/// Number of pages needed for `items` at `per_page` items each.
///
/// ```rust
/// use bubbletea_datatable::paginator::total_pages;
///
/// assert_eq!(total_pages(25, 10), 3);
/// assert_eq!(total_pages(20, 10), 2);
/// assert_eq!(total_pages(0, 10), 0);
/// ```
pub fn total_pages(items: usize, per_page: usize) -> usize {
    items.div_ceil(per_page.max(1))
}

/// Start (inclusive) and end (exclusive) indices of `page` within `length`
/// items. Both bounds are clamped to `length`, so a page past the end yields
/// an empty range.
///
/// ```rust
/// use bubbletea_datatable::paginator::slice_bounds;
///
/// assert_eq!(slice_bounds(0, 10, 25), (0, 10));
/// assert_eq!(slice_bounds(2, 10, 25), (20, 25));
/// assert_eq!(slice_bounds(4, 10, 25), (25, 25));
/// ```
pub fn slice_bounds(page: usize, per_page: usize, length: usize) -> (usize, usize) {
    let start = page.saturating_mul(per_page).min(length);
    let end = start.saturating_add(per_page).min(length);
    (start, end)
}

/// The type of pagination to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Type {
    /// Display pagination as Arabic numerals (e.g., "1/5").
    #[default]
    Arabic,
    /// Display pagination as dots (e.g., "• ○ ○ ○ ○").
    Dots,
}

/// Key bindings for page navigation.
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Previous page. Default keys: PageUp, Left Arrow, 'h'
    pub prev_page: key::Binding,
    /// Next page. Default keys: PageDown, Right Arrow, 'l'
    pub next_page: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::Binding::new(vec![KeyCode::PageUp, KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h", "prev page"),
            next_page: key::Binding::new(vec![
                KeyCode::PageDown,
                KeyCode::Right,
                KeyCode::Char('l'),
            ])
            .with_help("→/l", "next page"),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.prev_page, &self.next_page]]
    }
}

/// The page indicator.
///
/// # Examples
///
/// ```rust
/// use bubbletea_datatable::paginator::{Model, Type};
///
/// let mut paginator = Model::new();
/// paginator.sync(1, 3);
/// assert_eq!(paginator.view(), "2/3");
///
/// paginator.paginator_type = Type::Dots;
/// assert_eq!(paginator.view(), "○ • ○");
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// The type of pagination to display (Dots or Arabic).
    pub paginator_type: Type,
    /// The character to use for the active page in Dots mode.
    pub active_dot: String,
    /// The character to use for inactive pages in Dots mode.
    pub inactive_dot: String,
    /// The format string for Arabic mode (e.g., "%d/%d").
    pub arabic_format: String,
    /// Key bindings.
    pub keymap: PaginatorKeyMap,

    page: usize,
    total_pages: usize,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            paginator_type: Type::default(),
            active_dot: "•".to_string(),
            inactive_dot: "○".to_string(),
            arabic_format: "%d/%d".to_string(),
            keymap: PaginatorKeyMap::default(),
            page: 0,
            total_pages: 0,
        }
    }
}

impl Model {
    /// Creates a paginator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display type (builder pattern).
    pub fn with_type(mut self, paginator_type: Type) -> Self {
        self.paginator_type = paginator_type;
        self
    }

    /// Sets the active dot character for dots mode (builder pattern).
    pub fn with_active_dot(mut self, dot: &str) -> Self {
        self.active_dot = dot.to_string();
        self
    }

    /// Sets the inactive dot character for dots mode (builder pattern).
    pub fn with_inactive_dot(mut self, dot: &str) -> Self {
        self.inactive_dot = dot.to_string();
        self
    }

    /// Copies the current position from the derived view and disables the
    /// bindings that have nowhere to go.
    pub fn sync(&mut self, page: usize, total_pages: usize) {
        self.page = page;
        self.total_pages = total_pages;
        self.keymap.prev_page.set_enabled(!self.on_first_page());
        self.keymap.next_page.set_enabled(!self.on_last_page());
    }

    /// The page last synced.
    pub fn page(&self) -> usize {
        self.page
    }

    /// The page count last synced.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Returns true if on the first page.
    pub fn on_first_page(&self) -> bool {
        self.page == 0
    }

    /// Returns true if on the last page, or if there are no pages.
    pub fn on_last_page(&self) -> bool {
        self.page + 1 >= self.total_pages
    }

    /// Renders the indicator.
    ///
    /// With no pages the Arabic view reads `"0/0"` and the dots view is empty.
    pub fn view(&self) -> String {
        match self.paginator_type {
            Type::Arabic => self.arabic_view(),
            Type::Dots => self.dots_view(),
        }
    }

    fn arabic_view(&self) -> String {
        let current = if self.total_pages == 0 { 0 } else { self.page + 1 };
        self.arabic_format
            .replacen("%d", &current.to_string(), 1)
            .replacen("%d", &self.total_pages.to_string(), 1)
    }

    fn dots_view(&self) -> String {
        (0..self.total_pages)
            .map(|i| {
                if i == self.page {
                    self.active_dot.as_str()
                } else {
                    self.inactive_dot.as_str()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
