//! CLI library components for the season standings tool.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
