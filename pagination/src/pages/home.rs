//! Demo host page embedding one pagination widget.
//!
//! The widget's inputs come from the URL query so the same build can be
//! tried with different sizes: `?total=&page=&item_size=&show=`.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::pagination::Pagination;
use crate::util::layout::{DEFAULT_ITEM_SIZE, DEFAULT_SHOW_ITEM_SIZE};

pub const DEMO_TOTAL_PAGES: u32 = 1_000_000;
pub const DEMO_CURRENT_PAGE: u32 = 5_000;

/// Widget inputs for the demo page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoOptions {
    pub total_pages: u32,
    pub current_page: u32,
    pub item_size: u32,
    pub show_item_size: u32,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            total_pages: DEMO_TOTAL_PAGES,
            current_page: DEMO_CURRENT_PAGE,
            item_size: DEFAULT_ITEM_SIZE,
            show_item_size: DEFAULT_SHOW_ITEM_SIZE,
        }
    }
}

impl DemoOptions {
    /// Read overrides through `lookup`; missing, malformed or zero values
    /// keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str, default: u32| {
            lookup(key)
                .and_then(|raw| raw.trim().parse::<u32>().ok())
                .filter(|value| *value > 0)
                .unwrap_or(default)
        };
        Self {
            total_pages: read("total", defaults.total_pages),
            current_page: read("page", defaults.current_page),
            item_size: read("item_size", defaults.item_size),
            show_item_size: read("show", defaults.show_item_size),
        }
    }
}

/// Caption under the widget describing the last emitted page.
pub fn selection_label(selected: Option<u32>) -> String {
    match selected {
        Some(page) => format!("Selected page: {page}"),
        None => "No page selected yet".to_owned(),
    }
}

/// Landing page: the widget plus a readout of what it emitted.
#[component]
pub fn HomePage() -> impl IntoView {
    let query = use_query_map();
    let options = DemoOptions::from_lookup(|key| query.with_untracked(|params| params.get(key)));
    let selected = RwSignal::new(None::<u32>);

    let on_page_select = move |page: u32| selected.set(Some(page));

    view! {
        <main class="demo">
            <h1 class="demo__title">"Pagination"</h1>
            <Pagination
                total_pages=options.total_pages
                current_page=options.current_page
                item_size=options.item_size
                show_item_size=options.show_item_size
                on_page_select=on_page_select
            />
            <p class="demo__selection">{move || selection_label(selected.get())}</p>
        </main>
    }
}
