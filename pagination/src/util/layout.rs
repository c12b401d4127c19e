//! Pixel geometry for the pagination widget.
//!
//! DESIGN
//! ======
//! The scroll viewport is taller than its clipping container so the native
//! horizontal scrollbar renders below the visible strip. Widths carry one
//! extra pixel for the border; heights carry two (top + bottom).

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

pub const DEFAULT_ITEM_SIZE: u32 = 30;
pub const DEFAULT_SHOW_ITEM_SIZE: u32 = 5;
/// Largest accepted entry size; larger inputs are clamped.
pub const MAX_ITEM_SIZE: u32 = 1024;

const SCROLLBAR_MASK_PX: u32 = 30;
const BORDER_PX: u32 = 1;
const FONT_PX_PER_ITEM_NUM: f64 = 12.0;
const FONT_PX_PER_ITEM_DEN: f64 = 30.0;

/// Derived sizes for one widget instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationLayout {
    item_size: u32,
    visible_items: u32,
    container_width: u32,
    container_height: u32,
}

impl PaginationLayout {
    /// Compute the layout for `total_pages` entries of `item_size` pixels,
    /// showing at most `show_item_size` of them at once.
    ///
    /// `item_size` is clamped to `[1, MAX_ITEM_SIZE]`.
    pub fn new(total_pages: u32, item_size: u32, show_item_size: u32) -> Self {
        let item_size = item_size.clamp(1, MAX_ITEM_SIZE);
        let visible_items = show_item_size.clamp(1, total_pages.max(1));
        Self {
            item_size,
            visible_items,
            container_width: item_size.saturating_mul(visible_items),
            container_height: item_size,
        }
    }

    pub fn item_size(&self) -> u32 {
        self.item_size
    }

    pub fn visible_items(&self) -> u32 {
        self.visible_items
    }

    pub fn container_width(&self) -> u32 {
        self.container_width
    }

    pub fn container_height(&self) -> u32 {
        self.container_height
    }

    /// Width in pixels of the scrollable viewport element.
    pub fn viewport_width(&self) -> u32 {
        self.container_width.saturating_add(BORDER_PX)
    }

    pub fn viewport_style(&self) -> String {
        format!(
            "width: {}px; height: {}px;",
            self.viewport_width(),
            self.container_height.saturating_add(SCROLLBAR_MASK_PX)
        )
    }

    /// Clipping container style; collapsed to zero width while closed.
    pub fn container_style(&self, open: bool) -> String {
        let width = if open { self.viewport_width() } else { 0 };
        format!("width: {width}px; height: {}px;", self.container_height.saturating_add(2 * BORDER_PX))
    }

    pub fn item_style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; font-size: {}px;",
            self.font_size_px(),
            size = self.item_size
        )
    }

    /// Label font scales with the entry: 12px text in a 30px box.
    pub fn font_size_px(&self) -> f64 {
        f64::from(self.item_size) * FONT_PX_PER_ITEM_NUM / FONT_PX_PER_ITEM_DEN
    }

    /// First index to scroll to so that `page` sits mid-window.
    ///
    /// Pages are 1-based while indices are 0-based, so this is
    /// `floor(page - visible / 2)` floored at zero.
    pub fn center_index(&self, page: u32) -> u32 {
        page.saturating_sub(self.visible_items.div_ceil(2))
    }
}
