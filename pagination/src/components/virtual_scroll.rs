//! Horizontal virtual scroll viewport.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders a scrollable strip whose track is as wide as the full list while
//! only the entries near the viewport exist in the DOM. The `ScrollViewport`
//! handle is created by the owning component so it can drive scrolling from
//! its own event handlers.

use std::ops::Range;

use leptos::prelude::*;

use crate::util::virtual_scroll::ScrollMetrics;

/// How a programmatic scroll should move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump immediately.
    Auto,
    /// Let the browser animate.
    Smooth,
}

/// Copyable handle to one mounted viewport.
#[derive(Clone, Copy)]
pub struct ScrollViewport {
    node: NodeRef<leptos::html::Div>,
    offset: RwSignal<f64>,
    metrics: ScrollMetrics,
}

impl ScrollViewport {
    pub fn new(metrics: ScrollMetrics) -> Self {
        Self {
            node: NodeRef::new(),
            offset: RwSignal::new(0.0),
            metrics,
        }
    }

    pub fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    /// Current scroll offset in pixels, read from the element when mounted.
    pub fn measure_scroll_offset(&self) -> f64 {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = self.node.get_untracked() {
                let left: f64 = el.scroll_left().into();
                return left;
            }
        }
        self.offset.get_untracked()
    }

    /// Scroll to an absolute offset, clamped to the scrollable extent.
    pub fn scroll_to_offset(&self, offset: f64, behavior: ScrollBehavior) {
        let target = self.metrics.clamp_offset(offset);
        let scrolled = self.scroll_element(target, behavior);
        // Smooth scrolls report their progress through scroll events.
        if !scrolled || behavior == ScrollBehavior::Auto {
            self.offset.set(target);
        }
    }

    /// Bring entry `index` to the leading edge of the viewport.
    pub fn scroll_to_index(&self, index: u32) {
        self.scroll_to_offset(self.metrics.index_offset(index), ScrollBehavior::Auto);
    }

    /// Smoothly move relative to the measured offset.
    pub fn scroll_by(&self, delta: f64) {
        self.scroll_to_offset(self.measure_scroll_offset() + delta, ScrollBehavior::Smooth);
    }

    /// Entry indices currently worth rendering. Tracks the offset signal.
    pub fn rendered_range(&self) -> Range<u32> {
        self.metrics.rendered_range(self.offset.get())
    }

    fn sync_from_dom(&self) {
        let measured = self.metrics.clamp_offset(self.measure_scroll_offset());
        if (measured - self.offset.get_untracked()).abs() >= 0.5 {
            self.offset.set(measured);
        }
    }

    /// Returns whether a mounted element was scrolled.
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn scroll_element(&self, target: f64, behavior: ScrollBehavior) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = self.node.get_untracked() else {
                return false;
            };
            let options = web_sys::ScrollToOptions::new();
            options.set_left(target);
            options.set_behavior(match behavior {
                ScrollBehavior::Auto => web_sys::ScrollBehavior::Auto,
                ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            });
            el.scroll_to_with_scroll_to_options(&options);
            true
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

/// Scrollable viewport rendering `render_item(index)` for windowed entries.
#[component]
pub fn VirtualScrollViewport<F, V>(
    viewport: ScrollViewport,
    #[prop(into)] class: String,
    #[prop(into)] style: String,
    render_item: F,
) -> impl IntoView
where
    F: Fn(u32) -> V + Clone + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let metrics = viewport.metrics();
    let track_style = format!(
        "position: relative; width: {}px; height: {}px;",
        metrics.content_width(),
        metrics.item_size
    );
    let window_style = move || {
        let start = viewport.rendered_range().start;
        format!("transform: translateX({}px);", metrics.index_offset(start))
    };

    view! {
        <div class=class style=style node_ref=viewport.node on:scroll=move |_| viewport.sync_from_dom()>
            <div class="virtual-scroll__track" style=track_style>
                <div class="virtual-scroll__window" style=window_style>
                    <For each=move || viewport.rendered_range() key=|index| *index children=render_item />
                </div>
            </div>
        </div>
    }
}
