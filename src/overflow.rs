//! Overflow groups: pages hidden behind a `…` control on either side of the
//! visible window.

use std::collections::VecDeque;
use std::ops::RangeInclusive;

/// Which flank of the visible window an overflow group sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Pages before the window.
    Leading,
    /// Pages after the window.
    Trailing,
}

impl Side {
    /// The other flank.
    pub fn opposite(self) -> Self {
        match self {
            Side::Leading => Side::Trailing,
            Side::Trailing => Side::Leading,
        }
    }
}

/// An ordered group of pages not directly visible.
///
/// Pages are always kept in ascending order. The *nearest* page is the one
/// adjacent to the visible window: the last page of a leading group and the
/// first page of a trailing group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverflowGroup {
    side: Side,
    pages: VecDeque<usize>,
}

impl OverflowGroup {
    /// Creates an empty group.
    pub fn new(side: Side) -> Self {
        Self {
            side,
            pages: VecDeque::new(),
        }
    }

    /// Creates a group holding every page of `range`. An empty range gives an
    /// empty group.
    pub fn from_range(side: Side, range: RangeInclusive<usize>) -> Self {
        Self {
            side,
            pages: range.collect(),
        }
    }

    /// The flank this group sits on.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Number of pages in the group.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the group holds no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// An empty group's control is not rendered.
    pub fn is_hidden(&self) -> bool {
        self.is_empty()
    }

    /// Pages in ascending order.
    pub fn pages(&self) -> impl Iterator<Item = usize> + '_ {
        self.pages.iter().copied()
    }

    /// Whether `page` is in the group.
    pub fn contains(&self, page: usize) -> bool {
        self.pages.contains(&page)
    }

    /// The page adjacent to the visible window, if any.
    pub fn nearest(&self) -> Option<usize> {
        match self.side {
            Side::Leading => self.pages.back().copied(),
            Side::Trailing => self.pages.front().copied(),
        }
    }

    /// Removes and returns the page adjacent to the visible window.
    pub fn take_nearest(&mut self) -> Option<usize> {
        match self.side {
            Side::Leading => self.pages.pop_back(),
            Side::Trailing => self.pages.pop_front(),
        }
    }

    /// Pushes a page demoted from the edge of the window.
    ///
    /// The page must sit between the group and the window: greater than every
    /// leading page, or less than every trailing page.
    pub fn put_back(&mut self, page: usize) {
        match self.side {
            Side::Leading => {
                debug_assert!(self.pages.back().map_or(true, |&p| p < page));
                self.pages.push_back(page);
            }
            Side::Trailing => {
                debug_assert!(self.pages.front().map_or(true, |&p| p > page));
                self.pages.push_front(page);
            }
        }
    }
}
