//! Setup errors for the page-list control.

use thiserror::Error;

/// Errors reported while constructing a page list.
///
/// Only setup can fail. Once a [`Model`](crate::pagelist::Model) exists, failures
/// (such as a page fetch going wrong) are reported through hooks and logs.
#[derive(Debug, Error)]
pub enum Error {
    /// The page or data URL was empty.
    #[error("a page URL is required")]
    MissingUrl,
    /// The total page count was zero.
    #[error("total page count must be at least 1")]
    InvalidTotalPages,
    /// The visible page budget was zero.
    #[error("visible page count must be at least 1")]
    InvalidVisibleCount,
    /// `paginationStyle` named a style that does not exist.
    #[error("pagination style `{0}` does not exist")]
    UnknownStyle(String),
    /// `language` named a locale without labels.
    #[error("language `{0}` is not supported")]
    UnknownLanguage(String),
    /// The options object could not be parsed.
    #[error("invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

/// Result alias for setup operations.
pub type Result<T> = std::result::Result<T, Error>;
