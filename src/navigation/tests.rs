//! Tests for the navigation reactions.

use super::*;
use crate::config::PaginationStyle;
use crate::layout::LayoutState;
use tracing_test::traced_test;

fn shrink_config() -> Config {
    Config::new()
        .with_style(PaginationStyle::AllPagesShrink)
        .with_visible_pages(5)
}

fn fetch_mode() -> Mode {
    Mode::Fetch {
        data_url: "/data".to_string(),
    }
}

fn links_mode() -> Mode {
    Mode::Links {
        page_url: "/items".to_string(),
    }
}

fn at_most(n: usize) -> impl Fn(&LayoutState, u16) -> bool {
    move |l: &LayoutState, _| l.window_len() <= n
}

/// Fits `width / 3` pages.
fn three_cells(l: &LayoutState, width: u16) -> bool {
    l.window_len() * 3 <= width as usize
}

#[test]
fn test_select_in_links_mode_navigates() {
    let config = shrink_config().with_url_parameter("sort", "asc");
    let session = Session::new(&config, 1, 20);

    let (next, effects) = on_page_selected(&session, &config, &links_mode(), 9);
    assert_eq!(
        effects,
        vec![Effect::Navigate {
            page: 9,
            href: "/items?page=9&sort=asc".to_string(),
        }]
    );
    assert_eq!(next.layout.current_page(), 9);
    assert_eq!(next.layout.window(), 7..=11);
    assert!(!next.is_loading());
}

#[test]
fn test_select_in_fetch_mode_starts_fetch() {
    let config = shrink_config();
    let session = Session::new(&config, 1, 20);

    let (next, effects) = on_page_selected(&session, &config, &fetch_mode(), 4);
    assert_eq!(
        effects,
        vec![
            Effect::Hook(Hook::BeforeLoadPage),
            Effect::Fetch(PageRequest {
                page: 4,
                append: false,
                url: "/data?page=4".to_string(),
            }),
        ]
    );
    assert_eq!(next.pending, Some(Pending { page: 4, append: false }));
    // The layout only moves once the page has loaded.
    assert_eq!(next.layout, session.layout);
}

#[test]
fn test_select_active_page_is_ignored() {
    let config = shrink_config();
    let session = Session::new(&config, 3, 20);
    let (next, effects) = on_page_selected(&session, &config, &fetch_mode(), 3);
    assert!(effects.is_empty());
    assert_eq!(next, session);
}

#[test]
fn test_select_active_page_allowed_when_configured() {
    let mut config = shrink_config();
    config.dont_load_active_or_disabled_page = false;
    let session = Session::new(&config, 3, 20);
    let (_, effects) = on_page_selected(&session, &config, &fetch_mode(), 3);
    assert_eq!(effects.len(), 2);
}

#[test]
fn test_select_out_of_range_is_ignored() {
    let config = shrink_config();
    let session = Session::new(&config, 1, 5);
    assert!(on_page_selected(&session, &config, &fetch_mode(), 0).1.is_empty());
    assert!(on_page_selected(&session, &config, &fetch_mode(), 6).1.is_empty());
}

#[traced_test]
#[test]
fn test_select_while_loading_is_ignored() {
    let config = shrink_config();
    let session = Session::new(&config, 1, 20);
    let (loading, _) = on_page_selected(&session, &config, &fetch_mode(), 4);

    let (next, effects) = on_page_selected(&loading, &config, &fetch_mode(), 7);
    assert!(effects.is_empty());
    assert_eq!(next.pending, Some(Pending { page: 4, append: false }));
    assert!(logs_contain("ignoring selection while a fetch is outstanding"));
}

#[test]
fn test_fetch_success_rebuilds_layout() {
    let config = shrink_config().with_flexible(true);
    let session = Session::new(&config, 1, 20);
    let (loading, _) = on_page_selected(&session, &config, &fetch_mode(), 10);

    let (done, effects) = on_fetch_completed(&loading, &config, 10, false, Ok("body".into()));
    assert_eq!(
        effects,
        vec![
            Effect::ReplaceContent {
                target: "#pageData".to_string(),
                body: "body".to_string(),
            },
            Effect::Hook(Hook::AfterLoadPageSuccess),
            Effect::Reflow,
        ]
    );
    assert!(!done.is_loading());
    assert_eq!(done.layout.current_page(), 10);
    assert_eq!(done.layout.window(), 8..=12);
}

#[traced_test]
#[test]
fn test_fetch_failure_keeps_layout() {
    let config = shrink_config();
    let session = Session::new(&config, 1, 20);
    let (loading, _) = on_page_selected(&session, &config, &fetch_mode(), 10);

    let (done, effects) = on_fetch_completed(
        &loading,
        &config,
        10,
        false,
        Err(LoadError("timeout".into())),
    );
    assert_eq!(effects, vec![Effect::Hook(Hook::AfterLoadPageError)]);
    assert_eq!(done.layout, session.layout);
    assert!(!done.is_loading());
    assert!(logs_contain("page failed to load"));
}

#[test]
fn test_stale_completion_is_dropped() {
    let config = shrink_config();
    let session = Session::new(&config, 1, 20);
    let (loading, _) = on_page_selected(&session, &config, &fetch_mode(), 10);

    let (next, effects) = on_fetch_completed(&loading, &config, 11, false, Ok("x".into()));
    assert!(effects.is_empty());
    assert_eq!(next, loading);

    let (next, effects) = on_fetch_completed(&session, &config, 10, false, Ok("x".into()));
    assert!(effects.is_empty());
    assert_eq!(next, session);
}

#[test]
fn test_load_more_requires_button_and_fetch_mode() {
    let config = shrink_config();
    let session = Session::new(&config, 1, 20);
    assert!(on_load_more(&session, &config, &fetch_mode()).1.is_empty());

    let config = config.with_load_more_button(true);
    assert!(on_load_more(&session, &config, &links_mode()).1.is_empty());
    assert_eq!(on_load_more(&session, &config, &fetch_mode()).1.len(), 2);
}

#[test]
fn test_load_more_appends_next_page() {
    let config = shrink_config().with_load_more_button(true);
    let mode = fetch_mode();
    let mut session = Session::new(&config, 1, 20);

    for expected in 2..=4 {
        let (loading, effects) = on_load_more(&session, &config, &mode);
        assert_eq!(
            effects[1],
            Effect::Fetch(PageRequest {
                page: expected,
                append: true,
                url: format!("/data?page={expected}"),
            })
        );
        let (done, effects) =
            on_fetch_completed(&loading, &config, expected, true, Ok(format!("p{expected}")));
        assert_eq!(
            effects,
            vec![
                Effect::AppendContent {
                    target: "#pageData".to_string(),
                    body: format!("p{expected}"),
                },
                Effect::Hook(Hook::AfterLoadMoreSuccess),
            ]
        );
        session = done;
    }

    let layout = &session.layout;
    assert_eq!(layout.current_page(), 4);
    assert_eq!(layout.first_active(), 1);
    assert_eq!(layout.window(), 2..=6);
    assert!(layout.is_consistent());
}

#[test]
fn test_load_more_on_last_page_is_ignored() {
    let config = shrink_config().with_load_more_button(true);
    let session = Session::new(&config, 20, 20);
    assert!(on_load_more(&session, &config, &fetch_mode()).1.is_empty());
}

#[test]
fn test_load_more_failure_keeps_layout() {
    let config = shrink_config().with_load_more_button(true);
    let session = Session::new(&config, 1, 20);
    let (loading, _) = on_load_more(&session, &config, &fetch_mode());
    let (done, effects) =
        on_fetch_completed(&loading, &config, 2, true, Err(LoadError("gone".into())));
    assert_eq!(effects, vec![Effect::Hook(Hook::AfterLoadMoreError)]);
    assert_eq!(done.layout, session.layout);
}

#[test]
fn test_resize_same_width_is_noop() {
    let config = shrink_config().with_flexible(true);
    let session = Session::new(&config, 10, 20);
    let first = on_resize_observed(&session, &config, 9, &three_cells);
    assert_eq!(first.layout.window_len(), 3);
    assert_eq!(first.last_width, Some(9));

    let again = on_resize_observed(&first, &config, 9, &three_cells);
    assert_eq!(again, first);
}

#[test]
fn test_resize_narrower_then_wider() {
    let config = shrink_config().with_flexible(true);
    let session = on_resize_observed(&Session::new(&config, 10, 20), &config, 15, &three_cells);
    assert_eq!(session.layout.window(), 8..=12);

    let narrow = on_resize_observed(&session, &config, 6, &three_cells);
    assert_eq!(narrow.layout.window(), 10..=11);

    let wide = on_resize_observed(&narrow, &config, 21, &three_cells);
    assert_eq!(wide.layout.window_len(), 7);
    assert!(wide.layout.window().contains(&10));
}

#[test]
fn test_resize_without_flexible_only_records_width() {
    let config = shrink_config();
    let session = Session::new(&config, 10, 20);
    let next = on_resize_observed(&session, &config, 3, &at_most(1));
    assert_eq!(next.layout, session.layout);
    assert_eq!(next.last_width, Some(3));
}

#[test]
fn test_force_reflow_runs_at_same_width() {
    let config = shrink_config().with_flexible(true);
    let session = on_resize_observed(&Session::new(&config, 10, 20), &config, 15, &three_cells);

    let (loading, _) = on_page_selected(&session, &config, &fetch_mode(), 20);
    let (done, _) = on_fetch_completed(&loading, &config, 20, false, Ok(String::new()));
    let refit = force_reflow(&done, &config, 15, &three_cells);
    assert_eq!(refit.layout.window(), 16..=20);
    assert!(refit.layout.trailing().is_empty());
}

#[test]
fn test_all_pages_style_keeps_every_page_visible() {
    let config = Config::new().with_load_more_button(true);
    let session = Session::new(&config, 1, 8);
    assert_eq!(session.layout.window(), 1..=8);

    let (loading, _) = on_load_more(&session, &config, &fetch_mode());
    let (done, _) = on_fetch_completed(&loading, &config, 2, true, Ok(String::new()));
    assert_eq!(done.layout.window(), 1..=8);
    assert!(done.layout.is_active(1) && done.layout.is_active(2));
}
