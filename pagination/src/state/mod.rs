//! Widget state modules.
//!
//! DESIGN
//! ======
//! State carries no DOM handles so every interaction rule is testable
//! without a browser.

pub mod pagination;
