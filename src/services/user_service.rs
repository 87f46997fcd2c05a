//! User service - Handles user-related business logic.
//!
//! Wraps the in-memory [`UserStore`] behind a single read/write lock so
//! concurrent requests observe a consistent collection, and maps the
//! store's not-found signals onto [`AppError::NotFound`].

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{NewUser, UserChanges, UserRecord};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserStore;

#[cfg(test)]
use mockall::automock;

/// User service trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all records in insertion order
    async fn list_users(&self) -> AppResult<Vec<UserRecord>>;

    /// Get record by ID
    async fn get_user(&self, id: &str) -> AppResult<UserRecord>;

    /// Create a record with a generated id
    async fn create_user(&self, input: NewUser) -> AppResult<UserRecord>;

    /// Merge present fields into an existing record
    async fn update_user(&self, id: &str, changes: UserChanges) -> AppResult<UserRecord>;

    /// Remove a record
    async fn delete_user(&self, id: &str) -> AppResult<()>;

    /// Number of live records
    async fn count(&self) -> usize;

    /// Seed the demo records unless already seeded
    async fn seed_once(&self);

    /// Remove everything and reset the seeded flag
    async fn clear_users(&self);

    /// Clear, then seed
    async fn reset_and_seed(&self);
}

/// Concrete implementation of UserService over the in-memory store.
#[derive(Debug, Default)]
pub struct UserManager {
    store: RwLock<UserStore>,
}

impl UserManager {
    /// Create a new user service instance owning `store`
    pub fn new(store: UserStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<Vec<UserRecord>> {
        Ok(self.store.read().await.list_users().to_vec())
    }

    async fn get_user(&self, id: &str) -> AppResult<UserRecord> {
        self.store
            .read()
            .await
            .get_user(id)
            .cloned()
            .ok_or_not_found()
    }

    async fn create_user(&self, input: NewUser) -> AppResult<UserRecord> {
        let user = self.store.write().await.create_user(input);
        tracing::info!(user_id = %user.id, name = %user.full_name(), "User created");
        Ok(user)
    }

    async fn update_user(&self, id: &str, changes: UserChanges) -> AppResult<UserRecord> {
        if changes.is_empty() {
            tracing::debug!(user_id = %id, "Update carries no field changes");
        }
        let user = self
            .store
            .write()
            .await
            .update_user(id, changes)
            .ok_or_not_found()?;
        tracing::info!(user_id = %user.id, "User updated");
        Ok(user)
    }

    async fn delete_user(&self, id: &str) -> AppResult<()> {
        if !self.store.write().await.delete_user(id) {
            return Err(AppError::NotFound);
        }
        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }

    async fn count(&self) -> usize {
        self.store.read().await.len()
    }

    async fn seed_once(&self) {
        let mut store = self.store.write().await;
        if store.seed_once() {
            tracing::info!(count = store.len(), "User store seeded");
        }
    }

    async fn clear_users(&self) {
        self.store.write().await.clear_users();
        tracing::debug!("User store cleared");
    }

    async fn reset_and_seed(&self) {
        let mut store = self.store.write().await;
        store.reset_and_seed();
        tracing::debug!(count = store.len(), "User store reset");
    }
}
