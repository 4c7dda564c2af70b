//! CLI library components for the contact formatter.

pub mod format;
pub mod logging;
