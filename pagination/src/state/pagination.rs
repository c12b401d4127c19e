//! Pagination widget state machine.
//!
//! DESIGN
//! ======
//! State is kept free of DOM types. Each operation mutates the state and
//! returns a [`Transition`] naming the side effects (viewport scroll, page
//! emission) the view layer must perform, so every interaction can be
//! exercised without a browser.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use crate::util::layout::PaginationLayout;
use crate::util::page_input::{PageInput, clamp_page, parse_page_input};

/// Viewport movement requested by a transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollRequest {
    /// Jump so that entry `index` is at the leading edge.
    ToIndex(u32),
    /// Smoothly move the viewport by a pixel delta.
    By(f64),
}

/// Side effects produced by one state operation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transition {
    pub scroll: Option<ScrollRequest>,
    /// Page to report to the parent view.
    pub selected: Option<u32>,
    /// Page number the entry box should display afterwards.
    pub display: Option<u32>,
}

impl Transition {
    fn none() -> Self {
        Self::default()
    }

    fn select(page: u32) -> Self {
        Self { scroll: None, selected: Some(page), display: Some(page) }
    }

    fn scroll(request: ScrollRequest) -> Self {
        Self { scroll: Some(request), selected: None, display: None }
    }

    fn revert(page: u32) -> Self {
        Self { scroll: None, selected: None, display: Some(page) }
    }

    pub fn is_noop(&self) -> bool {
        self.scroll.is_none() && self.selected.is_none() && self.display.is_none()
    }
}

/// Presentation state for one pagination widget.
#[derive(Clone, Debug, PartialEq)]
pub struct PaginationState {
    total_pages: u32,
    current_page: u32,
    open: bool,
    layout: PaginationLayout,
}

impl PaginationState {
    /// Build closed state for `total_pages` pages starting on `current_page`.
    ///
    /// A zero total is treated as a single page; the starting page is clamped.
    pub fn new(total_pages: u32, current_page: u32, item_size: u32, show_item_size: u32) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            total_pages,
            current_page: clamp_page(current_page, total_pages),
            open: false,
            layout: PaginationLayout::new(total_pages, item_size, show_item_size),
        }
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn layout(&self) -> &PaginationLayout {
        &self.layout
    }

    /// The list can only be opened when there is somewhere to go.
    pub fn can_toggle(&self) -> bool {
        self.total_pages > 1
    }

    pub fn container_style(&self) -> String {
        self.layout.container_style(self.open)
    }

    /// Open or close the page list. Opening centers the current page.
    pub fn toggle(&mut self) -> Transition {
        if !self.can_toggle() {
            return Transition::none();
        }
        self.open = !self.open;
        if self.open {
            Transition::scroll(self.center_request())
        } else {
            Transition::none()
        }
    }

    /// Right arrow: scroll one window forward when open, else next page.
    pub fn scroll_right(&mut self) -> Transition {
        if self.open {
            return Transition::scroll(ScrollRequest::By(f64::from(self.layout.container_width())));
        }
        if self.current_page >= self.total_pages {
            return Transition::none();
        }
        self.current_page += 1;
        Transition::select(self.current_page)
    }

    /// Left arrow: scroll one window back when open, else previous page.
    pub fn scroll_left(&mut self) -> Transition {
        if self.open {
            return Transition::scroll(ScrollRequest::By(-f64::from(self.layout.container_width())));
        }
        if self.current_page <= 1 {
            return Transition::none();
        }
        self.current_page -= 1;
        Transition::select(self.current_page)
    }

    /// A page entry was clicked: take it and close the list.
    pub fn select_page(&mut self, page: u32) -> Transition {
        self.current_page = clamp_page(page, self.total_pages);
        self.open = false;
        Transition::select(self.current_page)
    }

    /// Text committed in the entry box.
    ///
    /// Rejected text leaves the page untouched; the entry box reverts to
    /// the current page. Accepted text shows the clamped page.
    pub fn enter_page(&mut self, raw: &str) -> Transition {
        match parse_page_input(raw, self.total_pages) {
            PageInput::Rejected => Transition::revert(self.current_page),
            PageInput::Page(page) => {
                self.current_page = page;
                Transition {
                    scroll: Some(self.center_request()),
                    selected: Some(page),
                    display: Some(page),
                }
            }
        }
    }

    fn center_request(&self) -> ScrollRequest {
        ScrollRequest::ToIndex(self.layout.center_index(self.current_page))
    }
}
