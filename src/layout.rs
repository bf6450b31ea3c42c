//! Page-list layout: which pages are shown directly and which are relegated
//! to the leading and trailing overflow groups.
//!
//! A [`LayoutState`] is built once per render with [`build`] (or
//! [`build_all`] for the all-pages style) and then adjusted in place by
//! [`reflow`](crate::reflow::reflow) and [`advance_load_more`].
//!
//! ```rust
//! use bubbletea_pagelist::layout::build;
//!
//! let layout = build(5, 20, 5);
//! assert_eq!(layout.window(), 3..=7);
//! assert_eq!(layout.leading().pages().collect::<Vec<_>>(), vec![1, 2]);
//! assert_eq!(layout.trailing().len(), 13);
//! ```

use std::ops::RangeInclusive;

use crate::overflow::{OverflowGroup, Side};

/// Splits a visible-page budget into the pages shown before and after the
/// current page.
///
/// An even budget leans right (`b/2 - 1` before, `b/2` after); an odd
/// budget is symmetric.
pub fn split_budget(budget: usize) -> (usize, usize) {
    let budget = budget.max(1);
    if budget % 2 == 0 {
        (budget / 2 - 1, budget / 2)
    } else {
        (budget / 2, budget / 2)
    }
}

/// The layout of one page list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutState {
    current_page: usize,
    first_active: usize,
    total_pages: usize,
    visible_count: usize,
    page_from: usize,
    page_to: usize,
    leading: OverflowGroup,
    trailing: OverflowGroup,
}

/// Builds the windowed layout for `current_page`.
///
/// `visible_count` pages around the current page are shown; when one side
/// of the window runs into the first or last page, its unused budget goes
/// to the other side, so the window holds exactly `visible_count` pages
/// whenever there are that many.
///
/// # Arguments
///
/// * `current_page` - The active page, clamped into `1..=total_pages`
/// * `total_pages` - Number of pages, at least 1
/// * `visible_count` - The visible-page budget; zero is treated as 1
///
/// # Examples
///
/// ```rust
/// use bubbletea_pagelist::layout::build;
///
/// // Clipped on the left: the unused budget moves right.
/// let layout = build(2, 10, 4);
/// assert_eq!(layout.window(), 1..=4);
/// assert!(layout.leading().is_empty());
///
/// // Fewer pages than the budget: everything is visible.
/// assert_eq!(build(1, 3, 5).window(), 1..=3);
/// ```
pub fn build(current_page: usize, total_pages: usize, visible_count: usize) -> LayoutState {
    debug_assert!(total_pages >= 1, "total_pages must be at least 1");
    debug_assert!(visible_count >= 1, "visible_count must be at least 1");

    let total = total_pages.max(1);
    let budget = visible_count.max(1);
    let current = current_page.clamp(1, total);

    let (from, to) = if budget >= total {
        (1, total)
    } else {
        let (left, right) = split_budget(budget);
        let from = current.saturating_sub(left).max(1);
        let to = (current + right).min(total);

        let unused_left = left - (current - from);
        let unused_right = right - (to - current);
        (
            from.saturating_sub(unused_right).max(1),
            (to + unused_left).min(total),
        )
    };

    LayoutState::with_window(current, current, total, budget, from, to)
}

/// Builds the all-pages layout: every page visible, nothing overflowed.
pub fn build_all(current_page: usize, total_pages: usize) -> LayoutState {
    let total = total_pages.max(1);
    let current = current_page.clamp(1, total);
    LayoutState::with_window(current, current, total, total, 1, total)
}

/// Advances the layout by one page for "load more".
///
/// The page after the current one becomes active too, extending the active
/// range. Overflow is only ever pulled in from the trailing side; the window
/// then sheds pages from its leading edge to stay within budget. Returns the
/// layout unchanged when already on the last page.
pub fn advance_load_more(state: &LayoutState) -> LayoutState {
    let next = state.current_page + 1;
    let mut s = state.clone();
    if next > s.total_pages {
        return s;
    }
    s.current_page = next;

    let (left, _) = split_budget(s.visible_count);
    if next > s.page_to || next > left + 1 {
        s.promote(Side::Trailing);
    }
    while s.window_len() > s.visible_count.max(1) && s.page_from < next {
        s.demote(Side::Leading);
    }

    debug_assert!(s.is_consistent());
    s
}

impl LayoutState {
    fn with_window(
        current: usize,
        first_active: usize,
        total: usize,
        budget: usize,
        from: usize,
        to: usize,
    ) -> Self {
        let state = Self {
            current_page: current,
            first_active,
            total_pages: total,
            visible_count: budget,
            page_from: from,
            page_to: to,
            leading: OverflowGroup::from_range(Side::Leading, 1..=from - 1),
            trailing: OverflowGroup::from_range(Side::Trailing, to + 1..=total),
        };
        debug_assert!(state.is_consistent());
        state
    }

    /// The highest active page; the one navigation is relative to.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The lowest active page. Differs from the current page only after
    /// "load more".
    pub fn first_active(&self) -> usize {
        self.first_active
    }

    /// Whether `page` is marked active.
    pub fn is_active(&self, page: usize) -> bool {
        (self.first_active..=self.current_page).contains(&page)
    }

    /// Total number of pages.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// The visible-page budget.
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// The visible window as an inclusive page range.
    pub fn window(&self) -> RangeInclusive<usize> {
        self.page_from..=self.page_to
    }

    /// First visible page.
    pub fn page_from(&self) -> usize {
        self.page_from
    }

    /// Last visible page.
    pub fn page_to(&self) -> usize {
        self.page_to
    }

    /// Number of visible pages.
    pub fn window_len(&self) -> usize {
        self.page_to - self.page_from + 1
    }

    /// Pages before the window.
    pub fn leading(&self) -> &OverflowGroup {
        &self.leading
    }

    /// Pages after the window.
    pub fn trailing(&self) -> &OverflowGroup {
        &self.trailing
    }

    /// The overflow group on `side`.
    pub fn overflow(&self, side: Side) -> &OverflowGroup {
        match side {
            Side::Leading => &self.leading,
            Side::Trailing => &self.trailing,
        }
    }

    /// Visible pages before the current page.
    pub fn visible_before(&self) -> usize {
        self.current_page - self.page_from
    }

    /// Visible pages after the current page.
    pub fn visible_after(&self) -> usize {
        self.page_to - self.current_page
    }

    /// Whether the layout has anything worth rendering.
    pub fn is_paginated(&self) -> bool {
        self.total_pages > 1
    }

    pub(crate) fn set_visible_count(&mut self, count: usize) {
        self.visible_count = count.max(1);
    }

    /// Moves the outermost window page on `side` into that side's overflow.
    /// Never demotes the current page; returns whether a page moved.
    pub(crate) fn demote(&mut self, side: Side) -> bool {
        match side {
            Side::Leading if self.page_from < self.current_page => {
                self.leading.put_back(self.page_from);
                self.page_from += 1;
                true
            }
            Side::Trailing if self.page_to > self.current_page => {
                self.trailing.put_back(self.page_to);
                self.page_to -= 1;
                true
            }
            _ => false,
        }
    }

    /// Moves the nearest overflow page on `side` back into the window.
    /// Returns whether a page moved.
    pub(crate) fn promote(&mut self, side: Side) -> bool {
        match side {
            Side::Leading => match self.leading.take_nearest() {
                Some(page) => {
                    debug_assert_eq!(page + 1, self.page_from);
                    self.page_from = page;
                    true
                }
                None => false,
            },
            Side::Trailing => match self.trailing.take_nearest() {
                Some(page) => {
                    debug_assert_eq!(page, self.page_to + 1);
                    self.page_to = page;
                    true
                }
                None => false,
            },
        }
    }

    /// Checks every layout invariant: the window and both overflow groups
    /// partition `1..=total_pages` in order, the current page is visible, the
    /// window fits the budget and the active range is well formed.
    pub fn is_consistent(&self) -> bool {
        let mut seen: Vec<usize> = self.leading.pages().collect();
        seen.extend(self.window());
        seen.extend(self.trailing.pages());
        let partitioned = seen.iter().copied().eq(1..=self.total_pages);

        partitioned
            && self.window().contains(&self.current_page)
            && self.first_active >= 1
            && self.first_active <= self.current_page
            && self.window_len() <= self.visible_count.max(1)
            && self.leading.is_empty() == (self.page_from == 1)
            && self.trailing.is_empty() == (self.page_to == self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(g: &OverflowGroup) -> Vec<usize> {
        g.pages().collect()
    }

    #[test]
    fn test_split_budget() {
        assert_eq!(split_budget(5), (2, 2));
        assert_eq!(split_budget(4), (1, 2));
        assert_eq!(split_budget(1), (0, 0));
        assert_eq!(split_budget(2), (0, 1));
        assert_eq!(split_budget(0), (0, 0));
    }

    #[test]
    fn test_build_centered_window() {
        let l = build(5, 20, 5);
        assert_eq!(l.window(), 3..=7);
        assert_eq!(pages(l.leading()), vec![1, 2]);
        assert_eq!(pages(l.trailing()), (8..=20).collect::<Vec<_>>());
        assert!(l.is_consistent());
    }

    #[test]
    fn test_build_fewer_pages_than_budget() {
        let l = build(1, 3, 5);
        assert_eq!(l.window(), 1..=3);
        assert!(l.leading().is_empty());
        assert!(l.trailing().is_empty());
    }

    #[test]
    fn test_build_clipped_left_donates_right() {
        let l = build(2, 10, 4);
        assert_eq!(l.window(), 1..=4);

        let l = build(1, 10, 5);
        assert_eq!(l.window(), 1..=5);
        assert!(l.leading().is_empty());
    }

    #[test]
    fn test_build_clipped_right_donates_left() {
        let l = build(10, 10, 5);
        assert_eq!(l.window(), 6..=10);
        assert!(l.trailing().is_empty());

        let l = build(9, 10, 4);
        assert_eq!(l.window(), 7..=10);
    }

    #[test]
    fn test_build_single_page() {
        let l = build(1, 1, 5);
        assert_eq!(l.window(), 1..=1);
        assert!(!l.is_paginated());
    }

    #[test]
    fn test_build_window_size_property() {
        for total in 1..=25 {
            for budget in 1..=9 {
                for current in 1..=total {
                    let l = build(current, total, budget);
                    assert!(l.is_consistent(), "{current}/{total} budget {budget}");
                    assert_eq!(l.window_len(), budget.min(total));
                    if current == 1 {
                        assert!(l.leading().is_empty());
                    }
                    if current == total {
                        assert!(l.trailing().is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn test_build_all() {
        let l = build_all(3, 7);
        assert_eq!(l.window(), 1..=7);
        assert!(l.leading().is_empty() && l.trailing().is_empty());
        assert!(l.is_active(3));
        assert!(!l.is_active(4));
    }

    #[test]
    fn test_demote_never_hides_current() {
        let mut l = build(1, 10, 3);
        assert!(!l.demote(Side::Leading));
        assert!(l.demote(Side::Trailing));
        assert!(l.demote(Side::Trailing));
        assert!(!l.demote(Side::Trailing));
        assert_eq!(l.window(), 1..=1);
        assert!(l.is_consistent());
    }

    #[test]
    fn test_load_more_within_left_half_keeps_window() {
        let l = build(1, 10, 5);
        let l = advance_load_more(&l);
        assert_eq!(l.current_page(), 2);
        assert_eq!(l.first_active(), 1);
        assert_eq!(l.window(), 1..=5);
        assert!(l.is_active(1) && l.is_active(2));
    }

    #[test]
    fn test_load_more_shifts_window_from_trailing() {
        let mut l = build(1, 10, 5);
        for _ in 0..3 {
            l = advance_load_more(&l);
        }
        assert_eq!(l.current_page(), 4);
        assert_eq!(l.window(), 2..=6);
        assert_eq!(pages(l.leading()), vec![1]);
        assert_eq!(pages(l.trailing()), vec![7, 8, 9, 10]);
        assert!(l.is_consistent());
    }

    #[test]
    fn test_load_more_pulls_hidden_next_page() {
        let mut l = build(3, 10, 5);
        // Shrink the window down to the current page only.
        while l.demote(Side::Trailing) {}
        while l.demote(Side::Leading) {}
        l.set_visible_count(1);

        let l = advance_load_more(&l);
        assert_eq!(l.current_page(), 4);
        assert_eq!(l.window(), 4..=4);
        assert!(l.is_consistent());
    }

    #[test]
    fn test_load_more_on_last_page_is_noop() {
        let l = build(10, 10, 5);
        assert_eq!(advance_load_more(&l), l);
    }
}
