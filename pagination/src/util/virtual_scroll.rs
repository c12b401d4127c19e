//! Windowing math for a horizontal virtual scroll list.
//!
//! Entries have a fixed width, so every quantity here is a straight
//! multiplication of index and item size. Only entries that intersect the
//! viewport (plus a small overscan margin) are materialized.

use std::ops::Range;

#[cfg(test)]
#[path = "virtual_scroll_test.rs"]
mod virtual_scroll_test;

/// Entries kept alive on each side of the viewport.
pub const DEFAULT_OVERSCAN: u32 = 2;

/// Fixed geometry of one virtual list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub item_count: u32,
    pub item_size: u32,
    pub viewport_width: f64,
    pub overscan: u32,
}

impl ScrollMetrics {
    pub fn new(item_count: u32, item_size: u32, viewport_width: f64) -> Self {
        Self {
            item_count,
            item_size: item_size.max(1),
            viewport_width: viewport_width.max(0.0),
            overscan: DEFAULT_OVERSCAN,
        }
    }

    /// Total scrollable width of all entries.
    pub fn content_width(&self) -> f64 {
        f64::from(self.item_count) * f64::from(self.item_size)
    }

    /// Largest offset that still fills the viewport.
    pub fn max_offset(&self) -> f64 {
        (self.content_width() - self.viewport_width).max(0.0)
    }

    pub fn clamp_offset(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_offset())
    }

    /// Offset of the leading edge of entry `index`.
    pub fn index_offset(&self, index: u32) -> f64 {
        f64::from(index) * f64::from(self.item_size)
    }

    /// Half-open range of entry indices to render at `offset`.
    ///
    /// Entries are included when any part of them lies inside the viewport.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rendered_range(&self, offset: f64) -> Range<u32> {
        if self.item_count == 0 {
            return 0..0;
        }
        let stride = f64::from(self.item_size);
        let offset = self.clamp_offset(offset);
        let last_index = self.item_count - 1;

        let first = ((offset / stride).floor() as u32).min(last_index);
        let viewport_end = offset + self.viewport_width;
        let last = (((viewport_end - 1e-6) / stride).floor().max(0.0) as u32).min(last_index);

        let start = first.saturating_sub(self.overscan);
        let end = last
            .saturating_add(1)
            .saturating_add(self.overscan)
            .min(self.item_count);
        start..end.max(start)
    }
}
