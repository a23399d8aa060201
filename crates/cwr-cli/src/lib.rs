//! CLI library components for the CWR toolkit.

pub mod catalog;
pub mod logging;
