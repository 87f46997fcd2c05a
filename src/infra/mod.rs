//! Infrastructure layer - Storage
//!
//! The process-local, non-persistent user store and its demo seed data.

pub mod seed;
pub mod store;

pub use seed::{seed_records, SEED_COUNT};
pub use store::UserStore;
