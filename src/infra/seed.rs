//! Fixed demo records used as the deterministic starting state.

use chrono::{DateTime, Utc};

use crate::domain::UserRecord;

/// `(id, first, last, email, phone, created, updated)`
type SeedRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

const SEED_ROWS: [SeedRow; 10] = [
    (
        "4b1335f4-788b-4e8d-9ed5-04b99ce430a4",
        "Emma",
        "Johnson",
        "emma.johnson@email.com",
        "+1-555-555-0123",
        "2023-01-15T08:30:00Z",
        "2023-08-22T14:15:30Z",
    ),
    (
        "c27d2af0-b713-4092-a73b-024d1313233f",
        "Liam",
        "Williams",
        "liam.williams@email.com",
        "+1-555-555-0456",
        "2023-02-03T12:45:15Z",
        "2023-09-10T09:22:45Z",
    ),
    (
        "02ad7f8d-9a4d-4f00-b101-7744851880a2",
        "Sophia",
        "Brown",
        "sophia.brown@email.com",
        "+1-555-555-0789",
        "2023-03-22T16:20:30Z",
        "2023-07-18T11:33:20Z",
    ),
    (
        "a3fdef38-b254-4139-b93c-7e576baf9536",
        "Noah",
        "Davis",
        "noah.davis@email.com",
        "+1-555-555-0321",
        "2023-04-07T10:15:45Z",
        "2023-09-25T15:40:10Z",
    ),
    (
        "872afdbd-639e-495f-94f0-c008799f7914",
        "Olivia",
        "Miller",
        "olivia.miller@email.com",
        "+1-555-555-0654",
        "2023-05-12T13:25:20Z",
        "2023-08-30T16:55:35Z",
    ),
    (
        "3415a2d7-8f54-4e17-8966-55d1b0219ee4",
        "Ethan",
        "Wilson",
        "ethan.wilson@email.com",
        "+1-555-555-0987",
        "2023-01-28T09:40:10Z",
        "2023-06-14T12:28:50Z",
    ),
    (
        "a81f014a-efea-40d1-9a53-ff7f329b653c",
        "Ava",
        "Moore",
        "ava.moore@email.com",
        "+1-555-555-0147",
        "2023-06-05T14:55:25Z",
        "2023-09-12T10:18:40Z",
    ),
    (
        "3d4c5f82-909d-474c-95ee-0ab44fec640e",
        "Mason",
        "Taylor",
        "mason.taylor@email.com",
        "+1-555-555-0258",
        "2023-07-19T11:30:50Z",
        "2023-09-28T13:42:15Z",
    ),
    (
        "8b5fac60-b246-4601-81e7-a517ceea1c6d",
        "Isabella",
        "Anderson",
        "isabella.anderson@email.com",
        "+1-555-555-0369",
        "2023-08-01T07:15:35Z",
        "2023-09-05T08:50:25Z",
    ),
    (
        "798ada0b-a752-449c-9138-551a4850fb03",
        "William",
        "Thomas",
        "william.thomas@email.com",
        "+1-555-555-0741",
        "2023-09-14T15:20:10Z",
        "2023-09-20T17:35:55Z",
    ),
];

/// Number of records in the seeded state
pub const SEED_COUNT: usize = SEED_ROWS.len();

/// Build the seeded records in their fixed order
pub fn seed_records() -> Vec<UserRecord> {
    SEED_ROWS
        .iter()
        .map(
            |&(id, first_name, last_name, email, phone, created_at, updated_at)| UserRecord {
                id: id.to_string(),
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: email.to_string(),
                phone: phone.to_string(),
                created_at: timestamp(created_at),
                updated_at: timestamp(updated_at),
            },
        )
        .collect()
}

/// Panics on a malformed literal in [`SEED_ROWS`]
fn timestamp(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .expect("seed timestamps are RFC 3339 literals")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_seed_has_ten_unique_records() {
        let records = seed_records();
        assert_eq!(records.len(), 10);

        let ids: HashSet<_> = records.iter().map(|u| u.id.as_str()).collect();
        let emails: HashSet<_> = records.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(ids.len(), 10);
        assert_eq!(emails.len(), 10);
    }

    #[test]
    fn test_seed_timestamps_parse() {
        let records = seed_records();
        let first = &records[0];

        assert_eq!(first.first_name, "Emma");
        assert_eq!(
            first.created_at,
            Utc.with_ymd_and_hms(2023, 1, 15, 8, 30, 0).unwrap()
        );
        assert_eq!(
            first.updated_at,
            Utc.with_ymd_and_hms(2023, 8, 22, 14, 15, 30).unwrap()
        );

        for user in &records {
            assert!(user.created_at.timestamp() > 0, "{} has a bad timestamp", user.id);
            assert!(user.updated_at >= user.created_at);
        }
    }

    #[test]
    #[should_panic(expected = "seed timestamps are RFC 3339 literals")]
    fn test_malformed_seed_timestamp_panics() {
        timestamp("2023-13-45 not a time");
    }
}
