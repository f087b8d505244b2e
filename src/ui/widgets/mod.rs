//! Reusable viewer widgets.

pub mod footer;
