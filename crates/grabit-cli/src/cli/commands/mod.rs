//! CLI command handlers.

mod download;

pub use download::run_downloads;
