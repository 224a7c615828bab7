//! CLI subcommand implementations.

pub mod classify;
pub mod frontier;
pub mod import;
pub mod stats;
