//! Framework-neutral helpers shared by the widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! Geometry, input parsing and windowing math live here so components only
//! wire events to them.

pub mod layout;
pub mod page_input;
pub mod virtual_scroll;
