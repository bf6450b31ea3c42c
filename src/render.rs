//! Turning a layout into entries and a styled terminal row.

use lipgloss_extras::lipgloss;

use crate::config::{Config, PaginationStyle};
use crate::layout::LayoutState;
use crate::navigation::Mode;
use crate::overflow::Side;
use crate::reflow::FitOracle;
use crate::style::{PageListStyles, ELLIPSIS, NEXT_LABEL, PREV_LABEL};

/// One clickable element of the page row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// `<`: selects the page before the first active one.
    Prev {
        /// Target page.
        page: usize,
        /// Link target in links mode.
        href: Option<String>,
    },
    /// A page number.
    Page {
        /// The page.
        page: usize,
        /// Whether it is marked active.
        active: bool,
        /// Link target in links mode.
        href: Option<String>,
    },
    /// `…`: an overflow group and the pages it hides.
    Overflow {
        /// Which flank of the window it sits on.
        side: Side,
        /// Hidden pages in ascending order, each an [`Entry::Page`] carrying
        /// its own link target.
        pages: Vec<Entry>,
    },
    /// `>`: selects the page after the current one.
    Next {
        /// Target page.
        page: usize,
        /// Link target in links mode.
        href: Option<String>,
    },
}

impl Entry {
    /// The page selecting this entry leads to. Overflow controls only open
    /// their group and lead nowhere.
    pub fn target(&self) -> Option<usize> {
        match self {
            Entry::Prev { page, .. } | Entry::Page { page, .. } | Entry::Next { page, .. } => {
                Some(*page)
            }
            Entry::Overflow { .. } => None,
        }
    }
}

/// Lists the entries of the page row, left to right.
///
/// # Arguments
///
/// * `layout` - The layout to render
/// * `config` - Options deciding the style and the extra link parameters
/// * `mode` - Links mode gives every selectable entry an `href`
///
/// # Returns
///
/// `<`, the leading `…`, the window pages, the trailing `…` and `>`, in that
/// order. Empty overflow groups are hidden and produce no entry. `<` and `>`
/// only appear in the shrink style, and only when they lead to a page
/// outside the active range.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pagelist::config::{Config, PaginationStyle};
/// use bubbletea_pagelist::layout::build;
/// use bubbletea_pagelist::navigation::Mode;
/// use bubbletea_pagelist::render::{entries, Entry};
///
/// let config = Config::new().with_style(PaginationStyle::AllPagesShrink);
/// let mode = Mode::Links { page_url: "/list".into() };
/// let row = entries(&build(1, 9, 3), &config, &mode);
/// assert_eq!(
///     row[0],
///     Entry::Page { page: 1, active: true, href: Some("/list?page=1".into()) }
/// );
/// assert!(matches!(row.last(), Some(Entry::Next { page: 2, .. })));
/// ```
pub fn entries(layout: &LayoutState, config: &Config, mode: &Mode) -> Vec<Entry> {
    let href = |page: usize| match mode {
        Mode::Links { .. } => Some(mode.url_for(page, config)),
        Mode::Fetch { .. } => None,
    };
    let page_entry = |page: usize| Entry::Page {
        page,
        active: layout.is_active(page),
        href: href(page),
    };
    let shrink = config.pagination_style == PaginationStyle::AllPagesShrink;
    let first_active = layout.first_active();
    let current = layout.current_page();
    let mut out = Vec::with_capacity(layout.window_len() + 4);

    if shrink && first_active > 1 {
        out.push(Entry::Prev {
            page: first_active - 1,
            href: href(first_active - 1),
        });
    }
    if !layout.leading().is_hidden() {
        out.push(Entry::Overflow {
            side: Side::Leading,
            pages: layout.leading().pages().map(page_entry).collect(),
        });
    }
    out.extend(layout.window().map(page_entry));
    if !layout.trailing().is_hidden() {
        out.push(Entry::Overflow {
            side: Side::Trailing,
            pages: layout.trailing().pages().map(page_entry).collect(),
        });
    }
    if shrink && current < layout.total_pages() {
        out.push(Entry::Next {
            page: current + 1,
            href: href(current + 1),
        });
    }
    out
}

/// Renders entries as a single styled line.
pub fn row(entries: &[Entry], styles: &PageListStyles) -> String {
    entries
        .iter()
        .map(|entry| match entry {
            Entry::Prev { .. } => styles.nav.render(PREV_LABEL),
            Entry::Next { .. } => styles.nav.render(NEXT_LABEL),
            Entry::Overflow { .. } => styles.overflow.render(ELLIPSIS),
            Entry::Page { page, active, .. } => {
                let style = if *active {
                    &styles.active_page
                } else {
                    &styles.page
                };
                style.render(&page.to_string())
            }
        })
        .collect::<Vec<_>>()
        .join(&styles.gap)
}

/// Renders the "load more" button line.
pub fn load_more_button(config: &Config, styles: &PageListStyles) -> String {
    styles.load_more.render(config.language.load_more_label())
}

/// Measures the rendered row against the available width.
#[derive(Debug, Clone, Copy)]
pub struct RowWidth<'a> {
    config: &'a Config,
    mode: &'a Mode,
    styles: &'a PageListStyles,
}

impl<'a> RowWidth<'a> {
    /// Creates an oracle rendering rows with `styles`.
    pub fn new(config: &'a Config, mode: &'a Mode, styles: &'a PageListStyles) -> Self {
        Self {
            config,
            mode,
            styles,
        }
    }

    /// Visible width in cells of the row for `layout`.
    pub fn measure(&self, layout: &LayoutState) -> usize {
        let line = row(&entries(layout, self.config, self.mode), self.styles);
        lipgloss::width_visible(&line)
    }
}

impl FitOracle for RowWidth<'_> {
    fn fits(&self, layout: &LayoutState, available_width: u16) -> bool {
        self.measure(layout) <= available_width as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{build, build_all};
    use crate::reflow::{reflow, Direction};

    fn shrink() -> Config {
        Config::new().with_style(PaginationStyle::AllPagesShrink)
    }

    fn fetch() -> Mode {
        Mode::Fetch {
            data_url: "/data".into(),
        }
    }

    fn plain_row(layout: &LayoutState, config: &Config) -> String {
        lipgloss::strip_ansi(&row(
            &entries(layout, config, &fetch()),
            &PageListStyles::plain(),
        ))
    }

    #[test]
    fn test_shrink_row_layout() {
        let config = shrink();
        assert_eq!(plain_row(&build(5, 20, 5), &config), "< … 3 4 5 6 7 … >");
        assert_eq!(plain_row(&build(1, 20, 5), &config), "1 2 3 4 5 … >");
        assert_eq!(plain_row(&build(20, 20, 5), &config), "< … 16 17 18 19 20");
    }

    #[test]
    fn test_all_pages_row_has_no_navigation() {
        assert_eq!(plain_row(&build_all(2, 4), &Config::new()), "1 2 3 4");
    }

    #[test]
    fn test_overflow_entries_carry_hidden_pages() {
        let hidden = |entry: &Entry| match entry {
            Entry::Overflow { pages, .. } => pages.iter().filter_map(Entry::target).collect(),
            _ => Vec::new(),
        };
        let e = entries(&build(5, 9, 3), &shrink(), &fetch());
        assert!(matches!(e[1], Entry::Overflow { side: Side::Leading, .. }));
        assert_eq!(hidden(&e[1]), vec![1, 2, 3]);
        assert_eq!(e[1].target(), None);
        assert!(matches!(e[5], Entry::Overflow { side: Side::Trailing, .. }));
        assert_eq!(hidden(&e[5]), vec![7, 8, 9]);
    }

    #[test]
    fn test_links_mode_entries_carry_hrefs() {
        let config = shrink().with_url_parameter("q", "x");
        let mode = Mode::Links {
            page_url: "/list".into(),
        };
        let e = entries(&build(2, 3, 5), &config, &mode);
        assert_eq!(
            e[0],
            Entry::Prev {
                page: 1,
                href: Some("/list?page=1&q=x".into()),
            }
        );
        assert_eq!(
            e[2],
            Entry::Page {
                page: 2,
                active: true,
                href: Some("/list?page=2&q=x".into()),
            }
        );
        assert_eq!(e.last().and_then(Entry::target), Some(3));

        let e = entries(&build(10, 20, 5), &config, &mode);
        let Entry::Overflow { side, pages } = &e[1] else {
            panic!("expected the leading overflow control, got {:?}", e[1]);
        };
        assert_eq!(*side, Side::Leading);
        assert_eq!(pages.len(), 7);
        assert_eq!(
            pages[0],
            Entry::Page {
                page: 1,
                active: false,
                href: Some("/list?page=1&q=x".into()),
            }
        );
        let Entry::Overflow { pages, .. } = &e[e.len() - 2] else {
            panic!("expected the trailing overflow control");
        };
        assert_eq!(
            pages.last(),
            Some(&Entry::Page {
                page: 20,
                active: false,
                href: Some("/list?page=20&q=x".into()),
            })
        );
    }

    #[test]
    fn test_prev_skips_active_range_after_load_more() {
        let config = shrink();
        let once = crate::layout::advance_load_more(&build(1, 10, 5));
        let twice = crate::layout::advance_load_more(&once);
        assert_eq!(plain_row(&twice, &config), "1 2 3 4 5 … >");

        let mut from_three = crate::layout::advance_load_more(&build(3, 10, 5));
        from_three = crate::layout::advance_load_more(&from_three);
        let e = entries(&from_three, &config, &fetch());
        assert_eq!(
            e[0],
            Entry::Prev {
                page: 2,
                href: None,
            }
        );
    }

    #[test]
    fn test_row_width_oracle() {
        let config = shrink();
        let mode = fetch();
        let styles = PageListStyles::plain();
        let oracle = RowWidth::new(&config, &mode, &styles);

        let layout = build(5, 20, 5);
        assert_eq!(oracle.measure(&layout), "< … 3 4 5 6 7 … >".chars().count());
        assert!(oracle.fits(&layout, 17));
        assert!(!oracle.fits(&layout, 16));
    }

    #[test]
    fn test_reflow_with_rendered_row() {
        let config = shrink();
        let mode = fetch();
        let styles = PageListStyles::default();
        let oracle = RowWidth::new(&config, &mode, &styles);

        let layout = reflow(&build(50, 100, 9), 20, &oracle, Direction::Auto);
        assert!(oracle.measure(&layout) <= 20);
        assert!(layout.window().contains(&50));

        let again = reflow(&layout, 20, &oracle, Direction::Auto);
        assert_eq!(again, layout);
    }

    #[test]
    fn test_load_more_label_follows_language() {
        let config = Config::new().with_language(crate::config::Language::English);
        let label = load_more_button(&config, &PageListStyles::plain());
        assert_eq!(lipgloss::strip_ansi(&label), "Load more");
    }
}
