//! The page-list component.
//!
//! A [`Model`] owns one page list: its options, its [`Session`] and, in
//! fetch mode, the loaded content. It follows the bubbletea-rs update/view
//! cycle: feed it messages with [`Model::update`], execute the commands it
//! returns, render it with [`Model::view`].
//!
//! # Links mode
//!
//! ```rust
//! use bubbletea_pagelist::config::{Config, PaginationStyle};
//! use bubbletea_pagelist::pagelist::Model;
//! use bubbletea_pagelist::style::PageListStyles;
//!
//! let config = Config::new()
//!     .with_style(PaginationStyle::AllPagesShrink)
//!     .with_current_page(5);
//! let mut list = Model::links("/articles", 20, config).unwrap();
//! list.styles = PageListStyles::plain();
//! assert_eq!(list.view(), "< … 3 4 5 6 7 … >");
//! ```
//!
//! # Fetch mode
//!
//! ```rust
//! use std::sync::Arc;
//! use bubbletea_pagelist::config::Config;
//! use bubbletea_pagelist::loader::{loader_fn, LoadError, PageRequest};
//! use bubbletea_pagelist::pagelist::Model;
//!
//! let loader = loader_fn(|req: PageRequest| async move {
//!     Ok::<_, LoadError>(format!("page {}", req.page))
//! });
//! let mut list = Model::fetch("/data", 10, Config::new(), Arc::new(loader)).unwrap();
//! let cmd = list.select_page(3);
//! assert!(cmd.is_some()); // run it, then feed the resulting message back to `update`
//! assert!(list.is_loading());
//! ```

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use bubbletea_rs::{Cmd, KeyMsg, Msg, WindowSizeMsg};
use tracing::{debug, error};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::key::{self, KeyMap as KeyMapTrait};
use crate::layout::LayoutState;
use crate::loader::{LoadError, PageLoader, PageRequest};
use crate::navigation::{self, Effect, Hook, Mode, Session};
use crate::render::{self, Entry, RowWidth};
use crate::style::PageListStyles;
use crate::Component;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Asks a page list to select a page. An `id` of 0 addresses every list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectPageMsg {
    /// Target list.
    pub id: i64,
    /// Page to select.
    pub page: usize,
}

/// Asks a page list to load the next page ("load more"). An `id` of 0
/// addresses every list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadMoreMsg {
    /// Target list.
    pub id: i64,
}

/// Delivered when a page fetch finishes.
#[derive(Debug, Clone)]
pub struct FetchCompletedMsg {
    /// List that started the fetch.
    pub id: i64,
    /// Fetched page.
    pub page: usize,
    /// Whether the fetch was a "load more".
    pub append: bool,
    /// The body, or why it could not be loaded.
    pub result: std::result::Result<String, LoadError>,
}

/// Emitted in links mode when the user selects a page; the host follows
/// `href`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigateMsg {
    /// List the selection happened in.
    pub id: i64,
    /// Selected page.
    pub page: usize,
    /// Link target of the page.
    pub href: String,
}

/// A lifecycle hook. Receives the page being loaded.
pub type HookFn = Arc<dyn Fn(usize) + Send + Sync>;

/// Caller hooks fired around fetches. Unset hooks do nothing.
#[derive(Clone, Default)]
pub struct Hooks {
    /// Before a selected page is fetched.
    pub before_load_page: Option<HookFn>,
    /// After a selected page loaded.
    pub after_load_page_success: Option<HookFn>,
    /// After a selected page failed to load.
    pub after_load_page_error: Option<HookFn>,
    /// Before "load more" fetches the next page.
    pub before_load_more: Option<HookFn>,
    /// After "load more" appended the next page.
    pub after_load_more_success: Option<HookFn>,
    /// After "load more" failed.
    pub after_load_more_error: Option<HookFn>,
}

impl Hooks {
    fn get(&self, hook: Hook) -> Option<&HookFn> {
        match hook {
            Hook::BeforeLoadPage => self.before_load_page.as_ref(),
            Hook::AfterLoadPageSuccess => self.after_load_page_success.as_ref(),
            Hook::AfterLoadPageError => self.after_load_page_error.as_ref(),
            Hook::BeforeLoadMore => self.before_load_more.as_ref(),
            Hook::AfterLoadMoreSuccess => self.after_load_more_success.as_ref(),
            Hook::AfterLoadMoreError => self.after_load_more_error.as_ref(),
        }
    }

    fn fire(&self, hook: Hook, page: usize) {
        if let Some(f) = self.get(hook) {
            f(page);
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("before_load_page", &self.before_load_page.is_some())
            .field("after_load_page_success", &self.after_load_page_success.is_some())
            .field("after_load_page_error", &self.after_load_page_error.is_some())
            .field("before_load_more", &self.before_load_more.is_some())
            .field("after_load_more_success", &self.after_load_more_success.is_some())
            .field("after_load_more_error", &self.after_load_more_error.is_some())
            .finish()
    }
}

/// Key bindings of the page list.
#[derive(Debug, Clone)]
pub struct PageListKeyMap {
    /// Select the previous page.
    pub prev_page: key::Binding,
    /// Select the next page.
    pub next_page: key::Binding,
    /// Select the first page.
    pub first_page: key::Binding,
    /// Select the last page.
    pub last_page: key::Binding,
    /// Load the next page below the current content.
    pub load_more: key::Binding,
}

impl Default for PageListKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::new_binding(vec![
                key::with_keys_str(&["pgup", "left", "h"]),
                key::with_help("←/h", "prev page"),
            ]),
            next_page: key::new_binding(vec![
                key::with_keys_str(&["pgdown", "right", "l"]),
                key::with_help("→/l", "next page"),
            ]),
            first_page: key::new_binding(vec![
                key::with_keys_str(&["home", "g"]),
                key::with_help("g/home", "first page"),
            ]),
            last_page: key::new_binding(vec![
                key::with_keys_str(&["end", "G"]),
                key::with_help("G/end", "last page"),
            ]),
            load_more: key::new_binding(vec![
                key::with_keys_str(&["m"]),
                key::with_help("m", "load more"),
            ]),
        }
    }
}

impl KeyMapTrait for PageListKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page, &self.load_more]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.prev_page, &self.next_page],
            vec![&self.first_page, &self.last_page],
            vec![&self.load_more],
        ]
    }
}

/// A page-list component.
pub struct Model {
    /// Entry styles.
    pub styles: PageListStyles,
    /// Key bindings.
    pub keymap: PageListKeyMap,
    /// Lifecycle hooks.
    pub hooks: Hooks,
    config: Config,
    mode: Mode,
    loader: Option<Arc<dyn PageLoader>>,
    session: Session,
    content: String,
    focus: bool,
    id: i64,
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("id", &self.id)
            .field("mode", &self.mode)
            .field("config", &self.config)
            .field("session", &self.session)
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Creates a links-mode page list.
    ///
    /// Every entry links to `page_url?page=N` plus the configured URL
    /// parameters. Selecting a page emits a [`NavigateMsg`] for the host to
    /// follow.
    ///
    /// # Arguments
    ///
    /// * `page_url` - Base URL of the paged resource
    /// * `total_pages` - Number of pages, at least 1
    /// * `config` - Options; `config.current_page` is the starting page and is
    ///   clamped into `1..=total_pages`
    ///
    /// # Errors
    ///
    /// [`Error::MissingUrl`] for an empty URL, [`Error::InvalidTotalPages`]
    /// for zero pages and [`Error::InvalidVisibleCount`] for a zero budget.
    /// Each is logged once before being returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pagelist::config::Config;
    /// use bubbletea_pagelist::pagelist::Model;
    ///
    /// let list = Model::links("/articles", 12, Config::new().with_current_page(40)).unwrap();
    /// assert_eq!(list.layout().current_page(), 12);
    /// assert!(Model::links("", 12, Config::new()).is_err());
    /// ```
    pub fn links(page_url: &str, total_pages: usize, config: Config) -> Result<Self> {
        let mode = Mode::Links {
            page_url: page_url.to_string(),
        };
        Self::setup(mode, page_url, total_pages, config, None)
    }

    /// Creates a fetch-mode page list starting at page 1.
    ///
    /// Selecting a page runs `loader` for `data_url?page=N` inside a command;
    /// the resulting [`FetchCompletedMsg`] replaces [`content`](Self::content)
    /// when fed back to [`update`](Self::update).
    ///
    /// # Arguments
    ///
    /// * `data_url` - Base URL of the page data
    /// * `total_pages` - Number of pages, at least 1
    /// * `config` - Options
    /// * `loader` - Fetches page bodies
    ///
    /// # Errors
    ///
    /// The same setup errors as [`links`](Self::links).
    pub fn fetch(
        data_url: &str,
        total_pages: usize,
        config: Config,
        loader: Arc<dyn PageLoader>,
    ) -> Result<Self> {
        let mode = Mode::Fetch {
            data_url: data_url.to_string(),
        };
        Self::setup(mode, data_url, total_pages, config, Some(loader))
    }

    fn setup(
        mode: Mode,
        url: &str,
        total_pages: usize,
        config: Config,
        loader: Option<Arc<dyn PageLoader>>,
    ) -> Result<Self> {
        let checked = if url.is_empty() {
            Err(Error::MissingUrl)
        } else if total_pages == 0 {
            Err(Error::InvalidTotalPages)
        } else {
            config.validate()
        };
        if let Err(err) = checked {
            error!(error = %err, "page list setup failed");
            return Err(err);
        }

        let start = match mode {
            Mode::Links { .. } => config.current_page.clamp(1, total_pages),
            Mode::Fetch { .. } => 1,
        };
        let mut keymap = PageListKeyMap::default();
        keymap
            .load_more
            .set_enabled(mode.is_fetch() && config.load_more_button);

        Ok(Self {
            styles: PageListStyles::default(),
            keymap,
            hooks: Hooks::default(),
            session: Session::new(&config, start, total_pages),
            config,
            mode,
            loader,
            content: String::new(),
            focus: false,
            id: next_id(),
        })
    }

    /// Sets the hooks (builder pattern).
    pub fn with_hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Sets the styles (builder pattern).
    pub fn with_styles(mut self, styles: PageListStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Fits the layout to `width` right away, whatever width it was last
    /// fitted to (builder pattern).
    pub fn with_width(mut self, width: u16) -> Self {
        self.refit(width);
        self
    }

    /// The list's unique identifier, used to route messages.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The options this list was created with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Where pages come from.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// The current session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The current layout.
    pub fn layout(&self) -> &LayoutState {
        &self.session.layout
    }

    /// Loaded content (fetch mode).
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether a fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    /// The entries of the page row.
    pub fn entries(&self) -> Vec<Entry> {
        render::entries(&self.session.layout, &self.config, &self.mode)
    }

    /// Selects `page`.
    ///
    /// # Returns
    ///
    /// In links mode, a command yielding a [`NavigateMsg`]. In fetch mode, a
    /// command running the loader and yielding a [`FetchCompletedMsg`].
    /// `None` when the selection is ignored: the page is out of range,
    /// already active, or a fetch is still outstanding.
    pub fn select_page(&mut self, page: usize) -> Option<Cmd> {
        let (session, effects) =
            navigation::on_page_selected(&self.session, &self.config, &self.mode, page);
        self.session = session;
        self.apply(effects, page)
    }

    /// Loads the page after the highest active page and appends it.
    pub fn load_more(&mut self) -> Option<Cmd> {
        let page = self.session.layout.current_page() + 1;
        let (session, effects) = navigation::on_load_more(&self.session, &self.config, &self.mode);
        self.session = session;
        self.apply(effects, page)
    }

    /// Reacts to a new available width.
    pub fn resize(&mut self, width: u16) {
        let oracle = RowWidth::new(&self.config, &self.mode, &self.styles);
        self.session = navigation::on_resize_observed(&self.session, &self.config, width, &oracle);
    }

    fn refit(&mut self, width: u16) {
        let oracle = RowWidth::new(&self.config, &self.mode, &self.styles);
        self.session = navigation::force_reflow(&self.session, &self.config, width, &oracle);
    }

    fn complete_fetch(&mut self, done: &FetchCompletedMsg) -> Option<Cmd> {
        let (session, effects) = navigation::on_fetch_completed(
            &self.session,
            &self.config,
            done.page,
            done.append,
            done.result.clone(),
        );
        self.session = session;
        self.apply(effects, done.page)
    }

    fn apply(&mut self, effects: Vec<Effect>, page: usize) -> Option<Cmd> {
        let mut cmd = None;
        for effect in effects {
            match effect {
                Effect::Navigate { page, href } => {
                    let id = self.id;
                    cmd = Some(Box::pin(async move {
                        Some(Box::new(NavigateMsg { id, page, href }) as Msg)
                    }) as Cmd);
                }
                Effect::Fetch(request) => cmd = self.fetch_cmd(request),
                Effect::ReplaceContent { body, .. } => self.content = body,
                Effect::AppendContent { body, .. } => self.content.push_str(&body),
                Effect::Hook(hook) => self.hooks.fire(hook, page),
                Effect::Reflow => {
                    if let Some(width) = self.session.last_width {
                        self.refit(width);
                    }
                }
            }
        }
        cmd
    }

    fn fetch_cmd(&self, request: PageRequest) -> Option<Cmd> {
        let loader = self.loader.clone()?;
        let id = self.id;
        debug!(page = request.page, url = %request.url, "starting fetch");
        Some(Box::pin(async move {
            let page = request.page;
            let append = request.append;
            let result = loader.load(request).await;
            Some(Box::new(FetchCompletedMsg {
                id,
                page,
                append,
                result,
            }) as Msg)
        }))
    }

    /// Processes a message.
    ///
    /// Handles key presses (while focused), window resizes, and the page
    /// list's own messages addressed to this list. Returns a command when a
    /// fetch or a navigation has to happen.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pagelist::prelude::*;
    /// use bubbletea_rs::{KeyMsg, Msg};
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let config = Config::new().with_style(PaginationStyle::AllPagesShrink);
    /// let mut list = PageList::links("/a", 10, config).unwrap();
    /// list.focus();
    ///
    /// let right = Box::new(KeyMsg { key: KeyCode::Right, modifiers: KeyModifiers::NONE }) as Msg;
    /// let cmd = list.update(right);
    /// assert!(cmd.is_some()); // yields a NavigateMsg for "/a?page=2"
    /// assert_eq!(list.layout().current_page(), 2);
    /// ```
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        }
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.resize(size.width);
            return None;
        }
        if let Some(select) = msg.downcast_ref::<SelectPageMsg>() {
            if select.id == 0 || select.id == self.id {
                return self.select_page(select.page);
            }
            return None;
        }
        if let Some(more) = msg.downcast_ref::<LoadMoreMsg>() {
            if more.id == 0 || more.id == self.id {
                return self.load_more();
            }
            return None;
        }
        if let Some(done) = msg.downcast_ref::<FetchCompletedMsg>() {
            if done.id == self.id {
                return self.complete_fetch(done);
            }
        }
        None
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }
        let first_active = self.session.layout.first_active();
        let current = self.session.layout.current_page();
        let total = self.session.layout.total_pages();

        if self.keymap.next_page.matches(key_msg) {
            if current < total {
                return self.select_page(current + 1);
            }
        } else if self.keymap.prev_page.matches(key_msg) {
            // After "load more" the pages below `current` are already active.
            if first_active > 1 {
                return self.select_page(first_active - 1);
            }
        } else if self.keymap.first_page.matches(key_msg) {
            return self.select_page(1);
        } else if self.keymap.last_page.matches(key_msg) {
            return self.select_page(total);
        } else if self.keymap.load_more.matches(key_msg) {
            return self.load_more();
        }
        None
    }

    /// Renders the page list.
    ///
    /// Lists with a single page render nothing. In fetch mode with the
    /// "load more" button enabled, the button sits on its own line above the
    /// row until the last page is loaded.
    pub fn view(&self) -> String {
        let layout = &self.session.layout;
        if !layout.is_paginated() {
            return String::new();
        }

        let row = render::row(&self.entries(), &self.styles);
        let show_load_more = self.mode.is_fetch()
            && self.config.load_more_button
            && layout.current_page() < layout.total_pages();
        if show_load_more {
            format!(
                "{}\n{}",
                render::load_more_button(&self.config, &self.styles),
                row
            )
        } else {
            row
        }
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
