//! Error types for the data table.
//!
//! None of these reach the user through the event API: the controller logs
//! them and leaves its state untouched. They are returned as values from the
//! `try_*` entry points so hosts can react if they want to.

use thiserror::Error;

/// Errors produced while interpreting table input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested attribute name does not match any known field.
    #[error("unknown field `{0}`")]
    UnknownField(String),

    /// A page jump request could not be read as an integer.
    #[error("invalid page input `{0}`")]
    InvalidPageInput(String),

    /// A page jump request fell outside `0..total_pages`.
    #[error("page {requested} is out of range (total pages: {total_pages})")]
    PageOutOfRange {
        /// The page the caller asked for.
        requested: i64,
        /// The number of pages available when the request was made.
        total_pages: usize,
    },
}

/// Result alias for table operations.
pub type Result<T> = std::result::Result<T, Error>;
