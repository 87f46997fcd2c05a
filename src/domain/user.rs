//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User record as stored and returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Opaque unique identifier, generated server-side
    #[schema(example = "4b1335f4-788b-4e8d-9ed5-04b99ce430a4")]
    pub id: String,
    #[schema(example = "Emma")]
    pub first_name: String,
    #[schema(example = "Johnson")]
    pub last_name: String,
    #[schema(example = "emma.johnson@email.com")]
    pub email: String,
    #[schema(example = "+1-555-555-0123")]
    pub phone: String,
    /// Set once when the record is created
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// Build a fresh record; both timestamps are `now`
    pub fn new(id: String, input: NewUser, now: DateTime<Utc>) -> Self {
        Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the present fields of `changes` and refresh `updated_at`.
    ///
    /// `updated_at` never moves backwards, even if the clock does.
    pub fn apply(&mut self, changes: UserChanges, now: DateTime<Utc>) {
        if let Some(first_name) = changes.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = changes.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(phone) = changes.phone {
            self.phone = phone;
        }
        self.updated_at = now.max(self.updated_at);
    }

    /// Display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Validated input for creating a record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    /// Empty when the client omitted it
    pub last_name: String,
    pub email: String,
    /// Empty when the client omitted it
    pub phone: String,
}

/// Validated partial update; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl UserChanges {
    /// Check if no field would change
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn john() -> NewUser {
        NewUser {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: "+1234567890".to_string(),
        }
    }

    #[test]
    fn test_new_record_timestamps_match() {
        let now = Utc::now();
        let user = UserRecord::new("abc".to_string(), john(), now);

        assert_eq!(user.created_at, now);
        assert_eq!(user.updated_at, now);
        assert_eq!(user.full_name(), "John Doe");
    }

    #[test]
    fn test_apply_only_changes_present_fields() {
        let now = Utc::now();
        let mut user = UserRecord::new("abc".to_string(), john(), now);

        user.apply(
            UserChanges {
                phone: Some("+1-555-000".to_string()),
                ..Default::default()
            },
            now + Duration::seconds(5),
        );

        assert_eq!(user.phone, "+1-555-000");
        assert_eq!(user.first_name, "John");
        assert_eq!(user.email, "john.doe@example.com");
        assert_eq!(user.created_at, now);
        assert_eq!(user.updated_at, now + Duration::seconds(5));
    }

    #[test]
    fn test_apply_never_moves_updated_at_backwards() {
        let now = Utc::now();
        let mut user = UserRecord::new("abc".to_string(), john(), now);

        user.apply(UserChanges::default(), now - Duration::hours(1));

        assert_eq!(user.updated_at, now);
    }

    #[test]
    fn test_serializes_camel_case() {
        let user = UserRecord::new("abc".to_string(), john(), Utc::now());
        let json = serde_json::to_value(&user).unwrap();

        for key in ["id", "firstName", "lastName", "email", "phone", "createdAt", "updatedAt"] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(json.as_object().unwrap().len(), 7);
    }

    #[test]
    fn test_changes_is_empty() {
        assert!(UserChanges::default().is_empty());
        assert!(!UserChanges {
            email: Some("a@b.co".to_string()),
            ..Default::default()
        }
        .is_empty());
    }
}
