//! Pagination widget with arrow stepping, page entry and a page strip.
//!
//! SYSTEM CONTEXT
//! ==============
//! Interaction rules live in `state::pagination`. This component turns DOM
//! events into state operations, then applies each resulting transition to
//! the virtual viewport and the parent's `on_page_select` callback.

use leptos::prelude::*;

use crate::components::virtual_scroll::{ScrollViewport, VirtualScrollViewport};
use crate::state::pagination::{PaginationState, ScrollRequest, Transition};
use crate::util::layout::{DEFAULT_ITEM_SIZE, DEFAULT_SHOW_ITEM_SIZE};
use crate::util::virtual_scroll::ScrollMetrics;

/// Page picker for `total_pages` pages.
///
/// Emits the newly selected page through `on_page_select` whenever the
/// current page changes. `total_pages`, `item_size` and `show_item_size` are
/// read once at creation.
#[component]
pub fn Pagination(
    total_pages: u32,
    current_page: u32,
    /// Width and height of one page entry in pixels.
    #[prop(default = DEFAULT_ITEM_SIZE)]
    item_size: u32,
    /// Number of entries visible at once when the strip is open.
    #[prop(default = DEFAULT_SHOW_ITEM_SIZE)]
    show_item_size: u32,
    #[prop(into)] on_page_select: Callback<u32>,
) -> impl IntoView {
    let initial = PaginationState::new(total_pages, current_page, item_size, show_item_size);
    let layout = *initial.layout();
    let total = initial.total_pages();
    let can_toggle = initial.can_toggle();
    let draft = RwSignal::new(initial.current_page().to_string());
    let state = RwSignal::new(initial);

    let viewport = ScrollViewport::new(ScrollMetrics::new(
        total,
        layout.item_size(),
        f64::from(layout.viewport_width()),
    ));

    let apply = move |transition: Transition| {
        if transition.is_noop() {
            return;
        }
        match transition.scroll {
            Some(ScrollRequest::ToIndex(index)) => viewport.scroll_to_index(index),
            Some(ScrollRequest::By(delta)) => viewport.scroll_by(delta),
            None => {}
        }
        if let Some(page) = transition.display {
            draft.set(page.to_string());
        }
        if let Some(page) = transition.selected {
            on_page_select.run(page);
        }
    };
    let run = move |op: fn(&mut PaginationState) -> Transition| {
        apply(state.try_update(op).unwrap_or_default());
    };
    let select = move |page: u32| {
        apply(state.try_update(|s| s.select_page(page)).unwrap_or_default());
    };

    let on_change = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        let transition = state.try_update(|s| s.enter_page(&raw)).unwrap_or_default();
        if transition.selected.is_none() {
            leptos::logging::debug_warn!("pagination: ignoring page entry {raw:?}");
        }
        apply(transition);
    };

    let item_style = layout.item_style();
    let render_item = move |index: u32| {
        let page = index + 1;
        let is_current = move || state.with(|s| s.current_page() == page);
        view! {
            <button
                class="ck-pagination__item"
                class:ck-pagination__item--current=is_current
                style=item_style.clone()
                on:click=move |_| select(page)
            >
                {page}
            </button>
        }
    };

    view! {
        <div class="ck-pagination" class:ck-pagination--open=move || state.with(PaginationState::is_open)>
            <button
                class="ck-pagination__arrow ck-pagination__arrow--left"
                title="Previous"
                on:click=move |_| run(PaginationState::scroll_left)
            >
                "‹"
            </button>
            <input
                class="ck-pagination__input"
                type="text"
                inputmode="numeric"
                aria-label="Page number"
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
                on:change=on_change
            />
            <span class="ck-pagination__total">{format!("/ {total}")}</span>
            <button
                class="ck-pagination__toggle"
                title="Show pages"
                disabled=!can_toggle
                on:click=move |_| run(PaginationState::toggle)
            >
                "⋯"
            </button>
            <div class="ck-pagination__container" style=move || state.with(PaginationState::container_style)>
                <VirtualScrollViewport
                    viewport=viewport
                    class="ck-pagination__viewport"
                    style=layout.viewport_style()
                    render_item=render_item
                />
            </div>
            <button
                class="ck-pagination__arrow ck-pagination__arrow--right"
                title="Next"
                on:click=move |_| run(PaginationState::scroll_right)
            >
                "›"
            </button>
        </div>
    }
}
