//! The page loader boundary.
//!
//! In fetch mode the page list does not know how page bodies are obtained.
//! It hands a [`PageRequest`] to a [`PageLoader`] and reacts to the result,
//! which arrives later as a [`FetchCompletedMsg`](crate::pagelist::FetchCompletedMsg).
//!
//! ```rust
//! use std::sync::Arc;
//! use bubbletea_pagelist::loader::{loader_fn, PageLoader, PageRequest};
//!
//! let loader = loader_fn(|req: PageRequest| async move {
//!     Ok(format!("<p>page {}</p>", req.page))
//! });
//! let _shared: Arc<dyn PageLoader> = Arc::new(loader);
//! ```

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

/// A request for one page body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Page to load.
    pub page: usize,
    /// Whether the body will be appended ("load more") rather than replace
    /// the current content.
    pub append: bool,
    /// Data URL with the page query attached.
    pub url: String,
}

/// Why a page could not be loaded. Carries no structured payload beyond a
/// description.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to load page: {0}")]
pub struct LoadError(pub String);

/// The future returned by a loader.
pub type LoadFuture = Pin<Box<dyn Future<Output = Result<String, LoadError>> + Send>>;

/// Fetches page bodies.
///
/// Implementations must not retry on their own behalf; the page list reports
/// failures to the caller's hooks and leaves the layout as it was.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pagelist::loader::{LoadError, LoadFuture, PageLoader, PageRequest};
///
/// struct Canned;
///
/// impl PageLoader for Canned {
///     fn load(&self, request: PageRequest) -> LoadFuture {
///         Box::pin(async move {
///             if request.page > 3 {
///                 Err(LoadError(format!("no page {}", request.page)))
///             } else {
///                 Ok(format!("rows of page {}", request.page))
///             }
///         })
///     }
/// }
/// ```
pub trait PageLoader: Send + Sync {
    /// Starts loading `request`.
    fn load(&self, request: PageRequest) -> LoadFuture;
}

/// A [`PageLoader`] backed by an async closure.
pub struct LoaderFn<F>(F);

impl<F> fmt::Debug for LoaderFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LoaderFn")
    }
}

impl<F, Fut> PageLoader for LoaderFn<F>
where
    F: Fn(PageRequest) -> Fut + Send + Sync,
    Fut: Future<Output = Result<String, LoadError>> + Send + 'static,
{
    fn load(&self, request: PageRequest) -> LoadFuture {
        Box::pin((self.0)(request))
    }
}

/// Wraps an async closure as a [`PageLoader`].
pub fn loader_fn<F, Fut>(f: F) -> LoaderFn<F>
where
    F: Fn(PageRequest) -> Fut + Send + Sync,
    Fut: Future<Output = Result<String, LoadError>> + Send + 'static,
{
    LoaderFn(f)
}
