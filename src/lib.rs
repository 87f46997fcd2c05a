//! User Store API - In-memory user records over HTTP
//!
//! A small REST API that keeps user records in a process-local,
//! non-persistent store.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: The user record and its validated inputs
//! - **services**: Use cases over the store, behind a lock
//! - **infra**: The in-memory store and its seed data
//! - **api**: HTTP handlers, validation, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server with the demo records
//! cargo run -- serve
//!
//! # Start with an empty store on another port
//! cargo run -- serve --port 8080 --no-seed
//!
//! # Print the demo records
//! cargo run -- seed
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{NewUser, UserChanges, UserRecord};
pub use errors::{AppError, AppResult};
pub use infra::UserStore;
