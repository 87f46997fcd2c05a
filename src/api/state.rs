//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::UserStore;
use crate::services::{UserManager, UserService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Create application state with a manually injected service.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Create application state owning `store`.
    ///
    /// Each call yields an independent collection, so tests can run
    /// against isolated instances.
    pub fn from_store(store: UserStore) -> Self {
        Self::new(Arc::new(UserManager::new(store)))
    }
}
