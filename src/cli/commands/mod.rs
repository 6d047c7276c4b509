//! Subcommand implementations

pub mod analyze;
pub mod generate;
pub mod render;
