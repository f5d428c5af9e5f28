#![warn(missing_docs)]

//! # bubbletea-datatable
//!
//! A searchable, sortable, paginated data table for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications.
//!
//! ## Overview
//!
//! The table holds a fixed list of records and lets the user narrow it with a
//! debounced search, order it by any column, and page through the result.
//! Its state is an immutable [`QueryState`] value; the rows on screen are a
//! [`DerivedView`] computed from the dataset and that state, always in the
//! same order: filter, then sort, then slice out the page.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`record`] | Records and the field registry used to read them |
//! | [`search`] | Case-insensitive filtering across fields |
//! | [`sort`] | Stable, toggleable column sorting |
//! | [`paginator`] | Page math and the page indicator |
//! | [`query`] | `QueryState` and the derivation pipeline |
//! | [`debounce`] | Coalescing of rapid search input |
//! | [`controller`] | `TableController`, the component itself |
//! | [`table`] | Text rendering of a page of records |
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_datatable::prelude::*;
//!
//! let mut table = TableController::new(sample_inventory());
//!
//! table.on_sort_requested("price");
//! table.on_next_page();
//! assert_eq!(table.current_page(), 1);
//!
//! let cheapest_on_page = table.visible_page()[0].price;
//! assert!(table.visible_page().iter().all(|car| car.price >= cheapest_on_page));
//! ```
//!
//! ## Logging
//!
//! State transitions are logged through the [`log`](https://docs.rs/log)
//! facade at `debug` level, debounce bookkeeping at `trace`. Install any
//! logger in the host application to see them.

pub mod config;
pub mod controller;
pub mod dataset;
pub mod debounce;
pub mod error;
pub mod key;
pub mod paginator;
pub mod query;
pub mod record;
pub mod search;
pub mod sort;
pub mod table;

pub use config::{Config, PageClamp};
pub use controller::{TableController, TableKeyMap};
pub use debounce::{DebounceMsg, Model as Debounce};
pub use error::{Error, Result};
pub use paginator::Model as Paginator;
pub use query::{derive, DerivedView, QueryState};
pub use record::{Field, Record, Value};
pub use sort::{SortDirection, SortKey, SortOrder};
pub use table::Model as Table;

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_datatable::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{Config, PageClamp};
    pub use crate::controller::{TableController, TableKeyMap};
    pub use crate::dataset::sample_inventory;
    pub use crate::debounce::{DebounceMsg, Model as Debounce};
    pub use crate::error::{Error, Result};
    pub use crate::key::{Binding, KeyMap};
    pub use crate::paginator::{Model as Paginator, Type as PaginatorType};
    pub use crate::query::{derive, DerivedView, QueryState};
    pub use crate::record::{Field, Record, Value};
    pub use crate::search::search;
    pub use crate::sort::{sort, SortDirection, SortKey, SortOrder};
    pub use crate::table::{Column, Model as Table};
}
