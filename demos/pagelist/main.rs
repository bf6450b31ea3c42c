//! Page-list demo: a fetch-mode list over 40 pages of fake rows.
//!
//! ←/→ select pages, g/G jump to the ends, m loads more, q quits. Resize the
//! terminal to watch the row reflow.

use std::sync::Arc;
use std::time::Duration;

use bubbletea_pagelist::loader_fn;
use bubbletea_pagelist::prelude::*;
use bubbletea_rs::{quit, Cmd, KeyMsg, Model as BubbleTeaModel, Msg, Program};
use crossterm::event::KeyCode;
use lipgloss_extras::prelude::*;

const TOTAL_PAGES: usize = 40;
const ROWS_PER_PAGE: usize = 3;

fn fake_rows(page: usize) -> String {
    (1..=ROWS_PER_PAGE)
        .map(|row| format!("  item {}\n", (page - 1) * ROWS_PER_PAGE + row))
        .collect()
}

fn help_line(keymap: &PageListKeyMap) -> String {
    keymap
        .short_help()
        .iter()
        .filter(|b| b.enabled())
        .map(|b| format!("{} {}", b.help().key, b.help().desc))
        .chain(std::iter::once("q quit".to_string()))
        .collect::<Vec<_>>()
        .join(" • ")
}

struct App {
    pages: PageList,
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let loader = loader_fn(|req: PageRequest| async move {
            tokio::time::sleep(Duration::from_millis(150)).await;
            Ok::<_, LoadError>(fake_rows(req.page))
        });
        let config = Config::new()
            .with_style(PaginationStyle::AllPagesShrink)
            .with_flexible(true)
            .with_visible_pages(9)
            .with_load_more_button(true)
            .with_language(Language::English);

        let mut pages = PageList::fetch("/items", TOTAL_PAGES, config, Arc::new(loader))
            .expect("demo options are valid");
        pages.focus();
        (Self { pages }, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if matches!(key_msg.key, KeyCode::Char('q') | KeyCode::Esc) {
                return Some(quit());
            }
        }
        self.pages.update(msg)
    }

    fn view(&self) -> String {
        let title = Style::new().bold(true).render("Inventory");
        let subdued = Style::new().foreground(Color::from("241"));
        // Page 1 is shown before anything has been fetched.
        let body = if self.pages.content().is_empty() {
            fake_rows(1)
        } else {
            self.pages.content().to_string()
        };
        let status = if self.pages.is_loading() { " loading…" } else { "" };

        format!(
            "{title}{status}\n\n{body}\n{}\n\n{}\n",
            self.pages.view(),
            subdued.render(&help_line(&self.pages.keymap)),
        )
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::<App>::builder().alt_screen(true).build()?;
    program.run().await?;
    Ok(())
}
