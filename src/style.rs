//! Styles for the page-list control.
//!
//! The default styles use `AdaptiveColor` so they read well on both light
//! and dark terminals:
//!
//! ```rust
//! use bubbletea_pagelist::style::PageListStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = PageListStyles::default();
//! styles.active_page = Style::new().bold(true).underline(true);
//! ```

use lipgloss_extras::prelude::*;

/// Label of the overflow control.
pub const ELLIPSIS: &str = "…";

/// Label of the previous-page entry.
pub const PREV_LABEL: &str = "<";

/// Label of the next-page entry.
pub const NEXT_LABEL: &str = ">";

/// Styles applied to each kind of entry.
#[derive(Debug, Clone)]
pub struct PageListStyles {
    /// Inactive page numbers.
    pub page: Style,
    /// Active page numbers.
    pub active_page: Style,
    /// `<` and `>` entries.
    pub nav: Style,
    /// `…` overflow controls.
    pub overflow: Style,
    /// The "load more" button.
    pub load_more: Style,
    /// Text placed between entries.
    pub gap: String,
}

impl Default for PageListStyles {
    fn default() -> Self {
        let subdued_color = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            page: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            active_page: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .bold(true),
            nav: Style::new().foreground(subdued_color.clone()),
            overflow: Style::new().foreground(subdued_color),
            load_more: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            gap: " ".to_string(),
        }
    }
}

impl PageListStyles {
    /// Styles that add no decoration at all, useful for plain output and
    /// exact width checks.
    pub fn plain() -> Self {
        Self {
            page: Style::new(),
            active_page: Style::new(),
            nav: Style::new(),
            overflow: Style::new(),
            load_more: Style::new(),
            gap: " ".to_string(),
        }
    }
}
