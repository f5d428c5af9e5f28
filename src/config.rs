//! Table configuration.
//!
//! ```rust
//! use bubbletea_datatable::config::{Config, PageClamp};
//! use std::time::Duration;
//!
//! let config = Config::new()
//!     .with_page_size(25)
//!     .with_debounce(Duration::from_millis(150))
//!     .with_clamp(PageClamp::Lazy);
//! assert_eq!(config.page_size, 25);
//!
//! // Values less than 1 are clamped to 1
//! assert_eq!(Config::new().with_page_size(0).page_size, 1);
//! ```

use crate::debounce;
use crate::paginator;
use std::time::Duration;

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// What happens to the page index when a search or sort changes the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageClamp {
    /// Pull the page index back into range after every search and sort.
    #[default]
    Eager,
    /// Leave the page index alone until the next explicit navigation. A
    /// stale index shows an empty page.
    Lazy,
}

/// Settings fixed for the lifetime of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Records per page. Always at least 1.
    pub page_size: usize,
    /// Quiescence window for search input.
    pub debounce: Duration,
    /// Page index policy after a search or sort.
    pub clamp: PageClamp,
    /// Style of the page indicator.
    pub paginator_type: paginator::Type,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            debounce: debounce::DEFAULT_DELAY,
            clamp: PageClamp::default(),
            paginator_type: paginator::Type::default(),
        }
    }
}

impl Config {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size (builder pattern). The minimum value is 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Sets the debounce window (builder pattern).
    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.debounce = delay;
        self
    }

    /// Sets the page index policy (builder pattern).
    pub fn with_clamp(mut self, clamp: PageClamp) -> Self {
        self.clamp = clamp;
        self
    }

    /// Sets the page indicator style (builder pattern).
    pub fn with_paginator_type(mut self, paginator_type: paginator::Type) -> Self {
        self.paginator_type = paginator_type;
        self
    }
}
