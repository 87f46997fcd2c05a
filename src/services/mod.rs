//! Application services layer - Use cases and business logic.
//!
//! Handlers depend on the [`UserService`] trait; [`UserManager`] is the
//! implementation backed by the in-memory store.

mod user_service;

pub use user_service::{UserManager, UserService};

#[cfg(test)]
pub use user_service::MockUserService;
