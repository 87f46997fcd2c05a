//! Domain layer - Core business entities and logic
//!
//! The user record plus the validated inputs that create and change it.
//! No HTTP or storage concerns live here.

pub mod user;

pub use user::{NewUser, UserChanges, UserRecord};
