//! In-memory user store.
//!
//! The store is a plain synchronous structure. It owns the records and the
//! seeded flag; callers that share it across tasks wrap it in a lock
//! (see [`crate::services::UserManager`]).

use chrono::Utc;
use uuid::Uuid;

use super::seed::seed_records;
use crate::domain::{NewUser, UserChanges, UserRecord};

/// Authoritative in-memory collection of user records.
///
/// Records keep insertion order. Lookups are linear scans, which is fine
/// for demo-sized data.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Vec<UserRecord>,
    seeded: bool,
}

impl UserStore {
    /// Create an empty, unseeded store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the seeded records
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.seed_once();
        store
    }

    /// Append the demo records unless this store was already seeded.
    ///
    /// Returns `true` if records were added.
    pub fn seed_once(&mut self) -> bool {
        if self.seeded {
            return false;
        }
        self.users.extend(seed_records());
        self.seeded = true;
        true
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// All records in insertion order
    pub fn list_users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn get_user(&self, id: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Insert a new record with a generated id and fresh timestamps
    pub fn create_user(&mut self, input: NewUser) -> UserRecord {
        let user = UserRecord::new(self.next_id(), input, Utc::now());
        self.users.push(user.clone());
        user
    }

    /// Merge `changes` into the record with `id`.
    ///
    /// Returns `None` without touching the collection when no record matches.
    pub fn update_user(&mut self, id: &str, changes: UserChanges) -> Option<UserRecord> {
        let user = self.users.iter_mut().find(|u| u.id == id)?;
        user.apply(changes, Utc::now());
        Some(user.clone())
    }

    /// Remove the record with `id`; returns whether one was removed
    pub fn delete_user(&mut self, id: &str) -> bool {
        match self.users.iter().position(|u| u.id == id) {
            Some(index) => {
                self.users.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every record and forget that the store was seeded
    pub fn clear_users(&mut self) {
        self.users.clear();
        self.seeded = false;
    }

    /// Clear, then seed: the deterministic starting state
    pub fn reset_and_seed(&mut self) {
        self.clear_users();
        self.seed_once();
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Random id not held by any live record
    fn next_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get_user(&id).is_none() {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::seed::SEED_COUNT;

    const EMMA_ID: &str = "4b1335f4-788b-4e8d-9ed5-04b99ce430a4";

    fn john() -> NewUser {
        NewUser {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: "+1234567890".to_string(),
        }
    }

    #[test]
    fn test_reset_and_seed_yields_fixed_records() {
        let mut store = UserStore::new();
        store.create_user(john());
        store.reset_and_seed();

        let users = store.list_users();
        assert_eq!(users.len(), SEED_COUNT);
        assert_eq!(users[0].id, EMMA_ID);
        assert_eq!(users[0].email, "emma.johnson@email.com");
        assert_eq!(users[9].id, "798ada0b-a752-449c-9138-551a4850fb03");
        assert_eq!(users[9].email, "william.thomas@email.com");
    }

    #[test]
    fn test_seed_once_is_idempotent() {
        let mut store = UserStore::new();
        assert!(!store.is_seeded());

        assert!(store.seed_once());
        assert!(!store.seed_once());
        assert_eq!(store.len(), SEED_COUNT);
        assert!(store.is_seeded());
    }

    #[test]
    fn test_clear_resets_seeded_flag() {
        let mut store = UserStore::seeded();
        store.clear_users();

        assert!(store.is_empty());
        assert!(!store.is_seeded());

        assert!(store.seed_once());
        assert_eq!(store.len(), SEED_COUNT);
    }

    #[test]
    fn test_create_assigns_fresh_id_and_equal_timestamps() {
        let mut store = UserStore::seeded();
        let existing: Vec<String> = store.list_users().iter().map(|u| u.id.clone()).collect();

        let user = store.create_user(john());

        assert!(!user.id.is_empty());
        assert!(!existing.contains(&user.id));
        assert_eq!(user.created_at, user.updated_at);
        assert_eq!(store.len(), SEED_COUNT + 1);
        assert_eq!(store.list_users().last(), Some(&user));
    }

    #[test]
    fn test_create_then_get_round_trip() {
        let mut store = UserStore::new();
        let created = store.create_user(john());

        let found = store.get_user(&created.id).unwrap();
        assert_eq!(found.first_name, "John");
        assert_eq!(found.last_name, "Doe");
        assert_eq!(found.email, "john.doe@example.com");
        assert_eq!(found.phone, "+1234567890");
    }

    #[test]
    fn test_update_keeps_id_and_created_at() {
        let mut store = UserStore::seeded();
        let before = store.get_user(EMMA_ID).unwrap().clone();

        let after = store
            .update_user(
                EMMA_ID,
                UserChanges {
                    last_name: Some("Smith".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(after.id, before.id);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at >= before.updated_at);
        assert_eq!(after.last_name, "Smith");
        assert_eq!(after.first_name, before.first_name);
        assert_eq!(after.email, before.email);
        assert_eq!(after.phone, before.phone);
        assert_eq!(store.get_user(EMMA_ID), Some(&after));
    }

    #[test]
    fn test_missing_id_never_mutates() {
        let mut store = UserStore::seeded();
        let snapshot = store.list_users().to_vec();

        assert!(store.get_user("missing").is_none());
        assert!(store
            .update_user(
                "missing",
                UserChanges {
                    first_name: Some("X".to_string()),
                    ..Default::default()
                }
            )
            .is_none());
        assert!(!store.delete_user("missing"));

        assert_eq!(store.list_users(), snapshot.as_slice());
    }

    #[test]
    fn test_delete_then_get_is_not_found() {
        let mut store = UserStore::seeded();

        assert!(store.delete_user(EMMA_ID));
        assert_eq!(store.len(), SEED_COUNT - 1);
        assert!(store.get_user(EMMA_ID).is_none());
        assert!(!store.delete_user(EMMA_ID));
        assert_eq!(store.len(), SEED_COUNT - 1);
    }

    #[test]
    fn test_delete_preserves_order_of_remaining() {
        let mut store = UserStore::seeded();
        let second = store.list_users()[1].id.clone();
        let third = store.list_users()[2].id.clone();

        store.delete_user(&second);

        assert_eq!(store.list_users()[1].id, third);
    }

    #[test]
    fn test_duplicate_email_is_not_rejected() {
        // Email uniqueness is not enforced by the store.
        let mut store = UserStore::seeded();
        let mut input = john();
        input.email = "emma.johnson@email.com".to_string();

        let user = store.create_user(input);

        let matches = store
            .list_users()
            .iter()
            .filter(|u| u.email == "emma.johnson@email.com")
            .count();
        assert_eq!(matches, 2);
        assert_ne!(user.id, EMMA_ID);
    }
}
