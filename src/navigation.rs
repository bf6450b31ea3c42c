//! Navigation reactions.
//!
//! Every event the page list reacts to is a pure function from the current
//! [`Session`] to a new one plus a list of [`Effect`]s for the host to apply.
//! Nothing here performs I/O or touches the terminal; the
//! [`Model`](crate::pagelist::Model) turns effects into commands and content
//! updates.
//!
//! Only one fetch may be outstanding at a time. Selections and "load more"
//! requests made while a fetch is in flight are ignored, and completions
//! that do not match the outstanding fetch are dropped.

use tracing::{debug, trace, warn};

use crate::config::{Config, PaginationStyle};
use crate::layout::{advance_load_more, build, build_all, LayoutState};
use crate::link::page_url;
use crate::loader::{LoadError, PageRequest};
use crate::reflow::{reflow, Direction, FitOracle};

/// Where pages come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Every entry links to `page_url?page=N`; selecting one asks the host to
    /// navigate there.
    Links {
        /// Base URL of the paged resource.
        page_url: String,
    },
    /// Selecting an entry fetches `data_url?page=N` through a page loader.
    Fetch {
        /// Base URL of the page data.
        data_url: String,
    },
}

impl Mode {
    /// Whether pages are fetched rather than linked.
    pub fn is_fetch(&self) -> bool {
        matches!(self, Mode::Fetch { .. })
    }

    /// The URL of `page` in this mode.
    pub fn url_for(&self, page: usize, config: &Config) -> String {
        let base = match self {
            Mode::Links { page_url } => page_url,
            Mode::Fetch { data_url } => data_url,
        };
        page_url(base, page, &config.url_parameters)
    }
}

/// Caller hooks fired around fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    /// Before a selected page is fetched.
    BeforeLoadPage,
    /// After a selected page loaded.
    AfterLoadPageSuccess,
    /// After a selected page failed to load.
    AfterLoadPageError,
    /// Before "load more" fetches the next page.
    BeforeLoadMore,
    /// After "load more" appended the next page.
    AfterLoadMoreSuccess,
    /// After "load more" failed.
    AfterLoadMoreError,
}

/// Something the host has to do after a reaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Follow the link of `page`.
    Navigate {
        /// Selected page.
        page: usize,
        /// Its link target.
        href: String,
    },
    /// Start loading a page.
    Fetch(PageRequest),
    /// Replace the content of `target` with `body`.
    ReplaceContent {
        /// Content target name.
        target: String,
        /// Loaded page body.
        body: String,
    },
    /// Append `body` to the content of `target`.
    AppendContent {
        /// Content target name.
        target: String,
        /// Loaded page body.
        body: String,
    },
    /// Fire a caller hook.
    Hook(Hook),
    /// Refit the layout at the last known width.
    Reflow,
}

/// An outstanding fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pending {
    /// Page being fetched.
    pub page: usize,
    /// Whether it was requested by "load more".
    pub append: bool,
}

/// The mutable state of one page list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Current layout.
    pub layout: LayoutState,
    /// Fetch in flight, if any.
    pub pending: Option<Pending>,
    /// Width the layout was last fitted to.
    pub last_width: Option<u16>,
}

impl Session {
    /// Starts a session showing `current_page` of `total_pages`.
    pub fn new(config: &Config, current_page: usize, total_pages: usize) -> Self {
        Self {
            layout: layout_for(config, current_page, total_pages, config.visible_pages_count),
            pending: None,
            last_width: None,
        }
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }
}

/// Builds the layout for `page` in the configured style.
pub fn layout_for(config: &Config, page: usize, total_pages: usize, budget: usize) -> LayoutState {
    match config.pagination_style {
        PaginationStyle::AllPages => build_all(page, total_pages),
        PaginationStyle::AllPagesShrink => build(page, total_pages, budget),
    }
}

/// Reacts to the user selecting `page`.
///
/// # Returns
///
/// The next session and the effects to apply, in order. The selection is
/// ignored (no effects, session unchanged) when `page` is outside
/// `1..=total_pages`, when it is active and
/// `dont_load_active_or_disabled_page` is set, or while a fetch is
/// outstanding.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pagelist::config::Config;
/// use bubbletea_pagelist::navigation::{on_page_selected, Effect, Mode, Session};
///
/// let config = Config::new();
/// let mode = Mode::Links { page_url: "/items".into() };
/// let session = Session::new(&config, 1, 4);
///
/// let (next, effects) = on_page_selected(&session, &config, &mode, 3);
/// assert_eq!(effects, vec![Effect::Navigate { page: 3, href: "/items?page=3".into() }]);
/// assert_eq!(next.layout.current_page(), 3);
/// ```
pub fn on_page_selected(
    session: &Session,
    config: &Config,
    mode: &Mode,
    page: usize,
) -> (Session, Vec<Effect>) {
    let layout = &session.layout;
    if page == 0 || page > layout.total_pages() {
        trace!(page, "ignoring selection of a disabled page");
        return (session.clone(), Vec::new());
    }
    if config.dont_load_active_or_disabled_page && layout.is_active(page) {
        trace!(page, "ignoring selection of an active page");
        return (session.clone(), Vec::new());
    }
    if session.is_loading() {
        trace!(page, "ignoring selection while a fetch is outstanding");
        return (session.clone(), Vec::new());
    }

    let mut next = session.clone();
    let mut effects = Vec::new();
    match mode {
        Mode::Links { .. } => {
            debug!(page, "navigating to page");
            next.layout = layout_for(config, page, layout.total_pages(), layout.visible_count());
            effects.push(Effect::Navigate {
                page,
                href: mode.url_for(page, config),
            });
            if config.reflows() {
                effects.push(Effect::Reflow);
            }
        }
        Mode::Fetch { .. } => {
            debug!(page, "loading page");
            next.pending = Some(Pending {
                page,
                append: false,
            });
            effects.push(Effect::Hook(Hook::BeforeLoadPage));
            effects.push(Effect::Fetch(PageRequest {
                page,
                append: false,
                url: mode.url_for(page, config),
            }));
        }
    }
    (next, effects)
}

/// Reacts to the "load more" button: fetches the page after the highest
/// active page and appends it.
pub fn on_load_more(session: &Session, config: &Config, mode: &Mode) -> (Session, Vec<Effect>) {
    let layout = &session.layout;
    if !config.load_more_button || !mode.is_fetch() {
        trace!("load more is not enabled");
        return (session.clone(), Vec::new());
    }
    if layout.current_page() >= layout.total_pages() {
        trace!("ignoring load more on the last page");
        return (session.clone(), Vec::new());
    }
    if session.is_loading() {
        trace!("ignoring load more while a fetch is outstanding");
        return (session.clone(), Vec::new());
    }

    let page = layout.current_page() + 1;
    debug!(page, "loading more");
    let mut next = session.clone();
    next.pending = Some(Pending { page, append: true });
    let effects = vec![
        Effect::Hook(Hook::BeforeLoadMore),
        Effect::Fetch(PageRequest {
            page,
            append: true,
            url: mode.url_for(page, config),
        }),
    ];
    (next, effects)
}

/// Reacts to a fetch finishing.
///
/// On success the content is replaced (selection) or appended (load more)
/// and the layout follows the loaded page. On failure only the error hook
/// fires; the layout stays as it was.
pub fn on_fetch_completed(
    session: &Session,
    config: &Config,
    page: usize,
    append: bool,
    result: Result<String, LoadError>,
) -> (Session, Vec<Effect>) {
    if session.pending != Some(Pending { page, append }) {
        trace!(page, append, "dropping stale fetch completion");
        return (session.clone(), Vec::new());
    }

    let mut next = session.clone();
    next.pending = None;
    let target = config.data_element_selector.clone();
    let mut effects = Vec::new();

    match (result, append) {
        (Ok(body), false) => {
            let layout = &session.layout;
            next.layout = layout_for(config, page, layout.total_pages(), layout.visible_count());
            effects.push(Effect::ReplaceContent { target, body });
            effects.push(Effect::Hook(Hook::AfterLoadPageSuccess));
        }
        (Ok(body), true) => {
            next.layout = advance_load_more(&session.layout);
            effects.push(Effect::AppendContent { target, body });
            effects.push(Effect::Hook(Hook::AfterLoadMoreSuccess));
        }
        (Err(err), false) => {
            warn!(page, error = %err, "page failed to load");
            effects.push(Effect::Hook(Hook::AfterLoadPageError));
            return (next, effects);
        }
        (Err(err), true) => {
            warn!(page, error = %err, "load more failed");
            effects.push(Effect::Hook(Hook::AfterLoadMoreError));
            return (next, effects);
        }
    }

    if config.reflows() {
        effects.push(Effect::Reflow);
    }
    (next, effects)
}

/// Reacts to a width change.
///
/// Nothing happens when the width equals the last fitted width. A narrower
/// width only shrinks the window, a wider one only grows it, and the first
/// measurement does both.
pub fn on_resize_observed<O: FitOracle + ?Sized>(
    session: &Session,
    config: &Config,
    width: u16,
    oracle: &O,
) -> Session {
    let direction = match session.last_width {
        Some(prev) if prev == width => return session.clone(),
        Some(prev) if width < prev => Direction::Shrink,
        Some(_) => Direction::Grow,
        None => Direction::Auto,
    };
    refit(session, config, width, oracle, direction)
}

/// Refits the layout regardless of the last fitted width. Used for the
/// first render and after navigation.
pub fn force_reflow<O: FitOracle + ?Sized>(
    session: &Session,
    config: &Config,
    width: u16,
    oracle: &O,
) -> Session {
    refit(session, config, width, oracle, Direction::Auto)
}

fn refit<O: FitOracle + ?Sized>(
    session: &Session,
    config: &Config,
    width: u16,
    oracle: &O,
    direction: Direction,
) -> Session {
    let mut next = session.clone();
    next.last_width = Some(width);
    if config.reflows() {
        next.layout = reflow(&session.layout, width, oracle, direction);
    }
    next
}

#[cfg(test)]
mod tests;
