//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `pagination` is the public widget; `virtual_scroll` is the windowed
//! viewport it renders its page strip into.

pub mod pagination;
pub mod virtual_scroll;
