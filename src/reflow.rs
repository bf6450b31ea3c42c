//! Responsive reflow: fitting the visible window to the available width.
//!
//! Reflow moves pages between the window and the overflow groups until the
//! rendered row fits on one line. Whether a row fits is decided by a
//! [`FitOracle`]; the renderer's [`RowWidth`](crate::render::RowWidth) is the
//! oracle used by the page-list model, and any
//! `Fn(&LayoutState, u16) -> bool` closure works too.
//!
//! ```rust
//! use bubbletea_pagelist::layout::build;
//! use bubbletea_pagelist::reflow::{reflow, Direction};
//!
//! // Pretend every visible page takes four cells.
//! let oracle = |l: &bubbletea_pagelist::LayoutState, width: u16| l.window_len() * 4 <= width as usize;
//!
//! let layout = build(5, 20, 7);
//! let narrow = reflow(&layout, 12, &oracle, Direction::Shrink);
//! assert_eq!(narrow.window(), 4..=6);
//! ```

use tracing::debug;

use crate::layout::LayoutState;
use crate::overflow::Side;

/// Decides whether a layout's rendered row fits on one line.
pub trait FitOracle {
    /// Whether the row for `layout` fits within `available_width` cells.
    fn fits(&self, layout: &LayoutState, available_width: u16) -> bool;
}

impl<F> FitOracle for F
where
    F: Fn(&LayoutState, u16) -> bool,
{
    fn fits(&self, layout: &LayoutState, available_width: u16) -> bool {
        self(layout, available_width)
    }
}

/// Which way a reflow pass may move pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Only demote pages into overflow (the container got narrower).
    Shrink,
    /// Only restore pages from overflow (the container got wider).
    Grow,
    /// Shrink if the row does not fit, then grow. Used on the first pass and
    /// after navigation.
    Auto,
}

/// The outcome of tentatively restoring one overflow page.
#[derive(Debug, Clone)]
pub struct Probe {
    /// The layout with the page restored.
    pub candidate: LayoutState,
    /// Whether the candidate still fits.
    pub fits: bool,
}

/// Tentatively restores the nearest overflow page on `side`.
///
/// Returns `None` when that side has nothing to restore. The input layout is
/// never modified; the caller commits the candidate only if it fits.
pub fn try_restore<O: FitOracle + ?Sized>(
    layout: &LayoutState,
    side: Side,
    available_width: u16,
    oracle: &O,
) -> Option<Probe> {
    let mut candidate = layout.clone();
    if !candidate.promote(side) {
        return None;
    }
    let fits = oracle.fits(&candidate, available_width);
    Some(Probe { candidate, fits })
}

/// Reflows `layout` for `available_width`.
///
/// The current page always stays visible and the page count never changes.
///
/// # Arguments
///
/// * `layout` - The layout to fit
/// * `available_width` - Width of the container in cells
/// * `oracle` - Decides whether a candidate row fits
/// * `direction` - Which way pages may move
///
/// # Returns
///
/// The fitted layout. When pages moved, its visible budget is set to the new
/// window length so a later rebuild keeps the fitted size. When nothing
/// moved, the layout comes back unchanged, budget included.
pub fn reflow<O: FitOracle + ?Sized>(
    layout: &LayoutState,
    available_width: u16,
    oracle: &O,
    direction: Direction,
) -> LayoutState {
    let mut state = layout.clone();
    match direction {
        Direction::Shrink => shrink(&mut state, available_width, oracle),
        Direction::Grow => grow(&mut state, available_width, oracle),
        Direction::Auto => {
            shrink(&mut state, available_width, oracle);
            grow(&mut state, available_width, oracle);
        }
    }

    if state.window() == layout.window() {
        return state;
    }
    debug!(
        width = available_width,
        from = state.page_from(),
        to = state.page_to(),
        ?direction,
        "reflowed page list"
    );
    state.set_visible_count(state.window_len());
    debug_assert!(state.is_consistent());
    state
}

fn shrink<O: FitOracle + ?Sized>(state: &mut LayoutState, width: u16, oracle: &O) {
    while state.window_len() > 1 && !oracle.fits(state, width) {
        let side = if state.visible_after() <= state.visible_before() {
            Side::Leading
        } else {
            Side::Trailing
        };
        if !state.demote(side) {
            state.demote(side.opposite());
        }
    }
}

fn grow<O: FitOracle + ?Sized>(state: &mut LayoutState, width: u16, oracle: &O) {
    let mut leading_open = true;
    let mut trailing_open = true;

    loop {
        let leading = leading_open && !state.leading().is_empty();
        let trailing = trailing_open && !state.trailing().is_empty();
        let side = match (leading, trailing) {
            (false, false) => break,
            (true, false) => Side::Leading,
            (false, true) => Side::Trailing,
            (true, true) if state.visible_after() > state.visible_before() => Side::Leading,
            (true, true) => Side::Trailing,
        };

        match try_restore(state, side, width, oracle) {
            Some(Probe {
                candidate,
                fits: true,
            }) => *state = candidate,
            _ => match side {
                Side::Leading => leading_open = false,
                Side::Trailing => trailing_open = false,
            },
        }
    }
}
