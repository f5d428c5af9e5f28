//! Query state and the derivation pipeline.
//!
//! [`QueryState`] is an immutable value: every transition returns a new
//! state and the caller replaces the old one. [`derive`] turns a dataset and
//! a state into the [`DerivedView`] on screen, always in the same order:
//!
//! 1. filter the dataset by the search text and count the pages,
//! 2. sort the filtered records,
//! 3. slice out the current page.
//!
//! ```rust
//! use bubbletea_datatable::dataset::sample_inventory;
//! use bubbletea_datatable::query::{derive, QueryState};
//! use bubbletea_datatable::record::Field;
//!
//! let cars = sample_inventory();
//! let state = QueryState::new(10)
//!     .with_search_text("honda")
//!     .with_sort_toggled(Field::Price);
//! let view = derive(&cars, &state);
//!
//! assert_eq!(view.filtered_len(), 2);
//! assert_eq!(view.total_pages(), 1);
//! assert!(view.page_records(&cars).iter().all(|r| r.make == "Honda"));
//! ```

use crate::config::PageClamp;
use crate::error::{Error, Result};
use crate::paginator;
use crate::record::{Field, Record};
use crate::search;
use crate::sort::{self, SortOrder};
use std::ops::Range;

/// Search text, sort order and page position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    search_text: String,
    sort: SortOrder,
    page_index: usize,
    page_size: usize,
}

impl QueryState {
    /// The initial state: no search, no sort, first page.
    pub fn new(page_size: usize) -> Self {
        Self {
            search_text: String::new(),
            sort: SortOrder::default(),
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    /// The raw search text. Empty means no filter.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// The sort order.
    pub fn sort(&self) -> &SortOrder {
        &self.sort
    }

    /// The zero-based page index.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Records per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replaces the search text. The page index is left alone.
    pub fn with_search_text(&self, text: impl Into<String>) -> Self {
        Self {
            search_text: text.into(),
            ..self.clone()
        }
    }

    /// Toggles the sort on `field`. The page index is left alone.
    pub fn with_sort_toggled(&self, field: Field) -> Self {
        Self {
            sort: self.sort.toggled(field),
            ..self.clone()
        }
    }

    /// Moves to `page` without any bounds check.
    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page_index: page,
            ..self.clone()
        }
    }

    /// Pulls the page index into `0..max(1, total_pages)`.
    pub fn clamped(&self, total_pages: usize) -> Self {
        self.with_page(self.page_index.min(total_pages.saturating_sub(1)))
    }

    /// The next page, if there is one.
    pub fn next_page(&self, total_pages: usize) -> Option<Self> {
        (self.page_index + 1 < total_pages).then(|| self.with_page(self.page_index + 1))
    }

    /// The previous page, if there is one.
    pub fn previous_page(&self) -> Option<Self> {
        (self.page_index > 0).then(|| self.with_page(self.page_index - 1))
    }

    /// Jumps to `target` if it lies within `0..total_pages`.
    pub fn try_go_to_page(&self, target: i64, total_pages: usize) -> Result<Self> {
        match usize::try_from(target) {
            Ok(page) if page < total_pages => Ok(self.with_page(page)),
            _ => Err(Error::PageOutOfRange {
                requested: target,
                total_pages,
            }),
        }
    }

    /// Like [`try_go_to_page`](Self::try_go_to_page), discarding the reason.
    pub fn go_to_page(&self, target: i64, total_pages: usize) -> Option<Self> {
        self.try_go_to_page(target, total_pages).ok()
    }
}

/// Reads a page number typed or selected by the user.
///
/// Surrounding whitespace is ignored. Anything that is not an integer is
/// rejected, so it can never pass a bounds check.
pub fn parse_page_input(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| Error::InvalidPageInput(raw.to_string()))
}

/// The filtered, sorted and paged result for one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView {
    order: Vec<usize>,
    total_pages: usize,
    page_index: usize,
    page_range: Range<usize>,
}

impl DerivedView {
    /// Dataset indices of the matching records, in display order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Dataset indices of the records on the current page.
    pub fn page_indices(&self) -> &[usize] {
        &self.order[self.page_range.clone()]
    }

    /// All matching records, in display order.
    ///
    /// A view only describes the dataset it was derived from. Indices that
    /// fall outside `dataset` are skipped.
    pub fn sorted_records<'a>(&self, dataset: &'a [Record]) -> Vec<&'a Record> {
        self.order.iter().filter_map(|&i| dataset.get(i)).collect()
    }

    /// The records on the current page. Same caveat as
    /// [`sorted_records`](Self::sorted_records).
    pub fn page_records<'a>(&self, dataset: &'a [Record]) -> Vec<&'a Record> {
        self.page_indices()
            .iter()
            .filter_map(|&i| dataset.get(i))
            .collect()
    }

    /// Number of records matching the search.
    pub fn filtered_len(&self) -> usize {
        self.order.len()
    }

    /// `ceil(filtered_len / page_size)`; zero when nothing matches.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// The zero-based page this view was sliced at.
    pub fn current_page(&self) -> usize {
        self.page_index
    }

    /// Half-open range of the current page within [`order`](Self::order).
    pub fn page_range(&self) -> Range<usize> {
        self.page_range.clone()
    }

    /// Returns true if the current page shows nothing.
    pub fn is_empty(&self) -> bool {
        self.page_range.is_empty()
    }
}

/// Runs the pipeline: filter, then sort, then slice.
pub fn derive(dataset: &[Record], state: &QueryState) -> DerivedView {
    let mut order = search::matching_indices(&state.search_text, dataset);
    let total_pages = paginator::total_pages(order.len(), state.page_size);

    sort::sort_indices(&mut order, dataset, &state.sort);

    let (start, end) = paginator::slice_bounds(state.page_index, state.page_size, order.len());
    DerivedView {
        order,
        total_pages,
        page_index: state.page_index,
        page_range: start..end,
    }
}

/// Derives the view and, under [`PageClamp::Eager`], pulls an out-of-range
/// page index back onto the last page. Returns the state actually shown.
pub fn derive_clamped(
    dataset: &[Record],
    state: QueryState,
    clamp: PageClamp,
) -> (QueryState, DerivedView) {
    let view = derive(dataset, &state);
    if clamp == PageClamp::Lazy {
        return (state, view);
    }

    let clamped = state.clamped(view.total_pages);
    if clamped == state {
        return (state, view);
    }

    let (start, end) =
        paginator::slice_bounds(clamped.page_index, clamped.page_size, view.order.len());
    let view = DerivedView {
        page_index: clamped.page_index,
        page_range: start..end,
        ..view
    };
    (clamped, view)
}
