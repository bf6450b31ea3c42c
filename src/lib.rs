#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-pagelist/")]

//! # bubbletea-pagelist
//!
//! A page-list control for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications: a row of page numbers with `…` overflow controls that either
//! links to `?page=N` URLs or fetches page data in place, and that reflows
//! itself to fit the available terminal width.
//!
//! ## Overview
//!
//! The crate is layered so every part can be used on its own:
//!
//! - [`overflow`]: the ordered pages hidden behind one `…` control.
//! - [`layout`]: which pages are visible for a given page, total and budget.
//! - [`reflow`]: fitting a layout to a width, given a [`FitOracle`].
//! - [`navigation`]: pure reactions to selection, "load more", fetch
//!   completion and resizes, producing [`Effect`]s.
//! - [`pagelist`]: the bubbletea-rs component tying it together.
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_pagelist::prelude::*;
//!
//! let config = Config::new()
//!     .with_style(PaginationStyle::AllPagesShrink)
//!     .with_current_page(5);
//! let mut list = PageList::links("/articles", 20, config).unwrap();
//! list.styles = PageListStyles::plain();
//! assert_eq!(list.view(), "< … 3 4 5 6 7 … >");
//! ```
//!
//! ## Options
//!
//! Options can also be read from the JSON object web front ends pass around:
//!
//! ```rust
//! use bubbletea_pagelist::Config;
//!
//! let config = Config::from_json(r#"{"paginationStyle": "allPagesShrink", "visiblePagesCount": 7}"#).unwrap();
//! assert_eq!(config.visible_pages_count, 7);
//! ```
//!
//! ## Focus Management
//!
//! Key bindings only apply while the list is focused:
//!
//! ```rust
//! use bubbletea_pagelist::prelude::*;
//!
//! let mut list = PageList::links("/a", 3, Config::new()).unwrap();
//! assert!(!list.focused());
//! list.focus();
//! assert!(list.focused());
//! ```

pub mod config;
pub mod error;
pub mod key;
pub mod layout;
pub mod link;
pub mod loader;
pub mod navigation;
pub mod overflow;
pub mod pagelist;
pub mod reflow;
pub mod render;
pub mod style;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// A focused component receives keyboard input; a blurred one ignores it.
/// `focus()` may return a command for the runtime to execute.
pub trait Component {
    /// Sets the component to focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use config::{Config, Language, PaginationStyle};
pub use error::{Error, Result};
pub use key::{
    matches, new_binding, with_disabled, with_help, with_keys, with_keys_str, Binding,
    Help as KeyHelp, KeyMap, KeyPress,
};
pub use layout::{advance_load_more, build, build_all, split_budget, LayoutState};
pub use link::{page_query, page_url};
pub use loader::{loader_fn, LoadError, LoadFuture, PageLoader, PageRequest};
pub use navigation::{Effect, Hook, Mode, Pending, Session};
pub use overflow::{OverflowGroup, Side};
pub use pagelist::{
    FetchCompletedMsg, HookFn, Hooks, LoadMoreMsg, Model as PageList, NavigateMsg,
    PageListKeyMap, SelectPageMsg,
};
pub use reflow::{reflow, try_restore, Direction, FitOracle, Probe};
pub use render::{Entry, RowWidth};
pub use style::PageListStyles;

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_pagelist::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Component;
    pub use crate::{Config, Error, Language, PaginationStyle};
    pub use crate::{Binding, KeyMap};
    pub use crate::{
        FetchCompletedMsg, Hooks, LoadMoreMsg, NavigateMsg, PageList, PageListKeyMap,
        SelectPageMsg,
    };
    pub use crate::{LoadError, PageLoader, PageRequest};
    pub use crate::{LayoutState, PageListStyles};
}
