//! CLI library components for the category match report.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
