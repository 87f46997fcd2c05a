//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `seed` - Print the demo records

pub mod args;

pub use args::{Cli, Commands};
