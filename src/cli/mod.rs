//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the extraction pipeline.

pub mod extract;
pub mod summarise;

pub use extract::handle_extract;
pub use summarise::handle_summarise;
