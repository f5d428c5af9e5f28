//! The interactive table: search, sort and pagination over a fixed dataset.
//!
//! [`TableController`] owns the dataset, the current [`QueryState`] and the
//! [`DerivedView`] computed from them. Every event produces a new state and
//! the view is derived again from scratch, so what is on screen is always a
//! function of the dataset and the state alone.
//!
//! Search input is debounced: [`TableController::on_search_text_changed`]
//! returns a command, and the message it eventually delivers must be fed
//! back through [`TableController::update`].
//!
//! ```rust
//! use bubbletea_datatable::controller::TableController;
//! use bubbletea_datatable::dataset::sample_inventory;
//!
//! let mut table = TableController::new(sample_inventory());
//! assert_eq!(table.total_pages(), 3);
//!
//! table.on_next_page();
//! table.on_next_page();
//! table.on_next_page(); // already on the last page
//! assert_eq!(table.current_page(), 2);
//!
//! table.on_jump_to_page("5"); // out of range, ignored
//! assert_eq!(table.current_page(), 2);
//!
//! table.on_sort_requested("price");
//! table.set_search_text("honda");
//! assert_eq!(table.visible_page().len(), 2);
//! assert_eq!(table.current_page(), 0);
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_datatable::controller::TableController;
//! use bubbletea_datatable::dataset::sample_inventory;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     table: TableController,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         (Self { table: TableController::new(sample_inventory()) }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.table.update(&msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.table.render()
//!     }
//! }
//! ```

mod keys;
#[cfg(test)]
mod tests;

pub use keys::TableKeyMap;

use crate::config::Config;
use crate::debounce;
use crate::error::Result;
use crate::key::{self, KeyMap};
use crate::paginator;
use crate::query::{self, DerivedView, QueryState};
use crate::record::{Field, Record};
use crate::table;
use bubbletea_rs::{Cmd, KeyMsg, Msg};

/// Search, sort and pagination state for one table.
#[derive(Debug, Clone)]
pub struct TableController {
    dataset: Vec<Record>,
    config: Config,
    state: QueryState,
    view: DerivedView,
    debounce: debounce::Model,
    paginator: paginator::Model,
    table: table::Model,
    /// Row, sort and search key bindings.
    pub keymap: TableKeyMap,
}

impl TableController {
    /// Creates a table over `records` with the default configuration.
    pub fn new(records: Vec<Record>) -> Self {
        Self::with_config(records, Config::default())
    }

    /// Creates a table over `records`.
    pub fn with_config(records: Vec<Record>, config: Config) -> Self {
        let state = QueryState::new(config.page_size);
        let view = query::derive(&records, &state);
        let mut paginator = paginator::Model::new().with_type(config.paginator_type);
        paginator.sync(view.current_page(), view.total_pages());

        log::debug!(
            "table created: {} records, {} per page",
            records.len(),
            state.page_size()
        );

        Self {
            debounce: debounce::Model::new(config.debounce),
            dataset: records,
            config,
            state,
            view,
            paginator,
            table: table::Model::default(),
            keymap: TableKeyMap::default(),
        }
    }

    /// Replaces the table renderer, e.g. to change columns (builder pattern).
    pub fn with_table(mut self, table: table::Model) -> Self {
        self.table = table;
        self
    }

    /// The records the table was created with.
    pub fn dataset(&self) -> &[Record] {
        &self.dataset
    }

    /// The configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current query state.
    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// The current derived view.
    pub fn view(&self) -> &DerivedView {
        &self.view
    }

    /// The search debouncer.
    pub fn debouncer(&self) -> &debounce::Model {
        &self.debounce
    }

    /// The page indicator.
    pub fn paginator(&self) -> &paginator::Model {
        &self.paginator
    }

    /// The records on the current page.
    pub fn visible_page(&self) -> Vec<&Record> {
        self.view.page_records(&self.dataset)
    }

    /// Number of pages in the filtered result. Zero when nothing matches.
    pub fn total_pages(&self) -> usize {
        self.view.total_pages()
    }

    /// Zero-based index of the current page.
    pub fn current_page(&self) -> usize {
        self.state.page_index()
    }

    /// Number of records matching the search.
    pub fn filtered_len(&self) -> usize {
        self.view.filtered_len()
    }

    /// The record under the row cursor.
    pub fn selected_record(&self) -> Option<&Record> {
        self.view
            .page_indices()
            .get(self.table.selected())
            .and_then(|&i| self.dataset.get(i))
    }

    // --- Search ---

    /// Feeds a search box change into the debouncer.
    ///
    /// The returned command delivers a message after the debounce window;
    /// pass it to [`update`](Self::update) to apply the search.
    pub fn on_search_text_changed(&mut self, text: impl Into<String>) -> Cmd {
        self.debounce.push(text)
    }

    /// Applies the pending search text now, if it differs from the last one
    /// applied. Returns true if a search ran.
    pub fn flush_search(&mut self) -> bool {
        match self.debounce.flush() {
            Some(text) => {
                self.set_search_text(text);
                true
            }
            None => false,
        }
    }

    /// Applies `text` as the search immediately, bypassing the debouncer's
    /// window. Later debounced input is compared against this text.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let next = self.state.with_search_text(text);
        log::debug!("search: {:?}", next.search_text());
        self.debounce.mark_emitted(next.search_text());
        self.apply(next);
    }

    // --- Sort ---

    /// Sorts on the field named `attribute`. Unknown names are ignored.
    pub fn on_sort_requested(&mut self, attribute: &str) {
        if let Err(err) = self.try_sort_requested(attribute) {
            log::debug!("sort request ignored: {}", err);
        }
    }

    /// Sorts on the field named `attribute`, reporting unknown names.
    pub fn try_sort_requested(&mut self, attribute: &str) -> Result<()> {
        let field: Field = attribute.parse()?;
        self.sort_by(field);
        Ok(())
    }

    /// Toggles the sort on `field`.
    pub fn sort_by(&mut self, field: Field) {
        let next = self.state.with_sort_toggled(field);
        if let Some(key) = next.sort().active() {
            log::debug!("sort: {} {}", key.field, key.direction);
        }
        self.apply(next);
    }

    // --- Pagination ---

    /// Moves to the next page, if there is one.
    pub fn on_next_page(&mut self) {
        match self.state.next_page(self.view.total_pages()) {
            Some(next) => self.apply(next),
            None => log::debug!("next page ignored: on last page"),
        }
    }

    /// Moves to the previous page, if there is one.
    pub fn on_previous_page(&mut self) {
        match self.state.previous_page() {
            Some(next) => self.apply(next),
            None => log::debug!("previous page ignored: on first page"),
        }
    }

    /// Jumps to the zero-based page in `raw`, as typed or selected by the
    /// user. Input that is not an integer, or out of range, is ignored.
    pub fn on_jump_to_page(&mut self, raw: &str) {
        if let Err(err) = self.try_jump_to_page(raw) {
            log::debug!("page jump ignored: {}", err);
        }
    }

    /// Like [`on_jump_to_page`](Self::on_jump_to_page), reporting why a
    /// request was rejected.
    pub fn try_jump_to_page(&mut self, raw: &str) -> Result<()> {
        let target = query::parse_page_input(raw)?;
        let next = self.state.try_go_to_page(target, self.view.total_pages())?;
        self.apply(next);
        Ok(())
    }

    /// Jumps to page `target` if it is within range.
    pub fn go_to_page(&mut self, target: i64) {
        match self.state.try_go_to_page(target, self.view.total_pages()) {
            Ok(next) => self.apply(next),
            Err(err) => log::debug!("page jump ignored: {}", err),
        }
    }

    // --- Events ---

    /// Handles debounce expiry and key presses.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(text) = self.debounce.update(msg) {
            self.set_search_text(text);
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            self.handle_key(key_msg);
        }

        None
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) {
        let rows = self.view.page_indices().len();

        if self.paginator.keymap.next_page.matches(key_msg) {
            self.on_next_page();
        } else if self.paginator.keymap.prev_page.matches(key_msg) {
            self.on_previous_page();
        } else if self.keymap.row_down.matches(key_msg) {
            self.table.select_next(rows);
        } else if self.keymap.row_up.matches(key_msg) {
            self.table.select_prev(rows);
        } else if self.keymap.submit_search.matches(key_msg) {
            self.flush_search();
        } else if let Some(column) = self.keymap.sort_column(key_msg) {
            if let Some(field) = self.table.columns().get(column).map(|c| c.field) {
                self.sort_by(field);
            }
        }
    }

    /// Replaces the state and derives the view again.
    fn apply(&mut self, next: QueryState) {
        let (state, view) = query::derive_clamped(&self.dataset, next, self.config.clamp);
        log::debug!(
            "derived: {} matching, page {} of {}",
            view.filtered_len(),
            state.page_index(),
            view.total_pages()
        );

        self.state = state;
        self.view = view;
        self.paginator
            .sync(self.view.current_page(), self.view.total_pages());
        self.table.reset_selection();
    }

    // --- Rendering ---

    /// Renders the table, the page indicator and a help line.
    pub fn render(&self) -> String {
        let mut output = String::new();

        if self.view.filtered_len() == 0 {
            output.push_str("No matching records\n");
        } else {
            let rows = self.visible_page();
            output.push_str(&self.table.view(&rows, self.state.sort().active()));
        }

        output.push('\n');
        output.push_str(&self.paginator.view());
        output.push_str("  ");
        output.push_str(&self.status());
        output.push('\n');

        let mut bindings = self.paginator.keymap.short_help();
        bindings.extend(self.keymap.short_help());
        output.push_str(&key::help_line(&bindings));

        output
    }

    fn status(&self) -> String {
        let total = self.view.filtered_len();
        let range = self.view.page_range();
        if range.is_empty() {
            format!("showing 0 of {}", total)
        } else {
            format!("showing {}-{} of {}", range.start + 1, range.end, total)
        }
    }
}
