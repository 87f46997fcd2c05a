//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Seed the demo records when the server starts
pub const DEFAULT_SEED_ON_STARTUP: bool = true;

// =============================================================================
// Responses
// =============================================================================

/// Identification payload returned by `GET /`
pub const ROOT_MESSAGE: &str = "User Store API";

/// Error message for lookups that match no record
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

/// Top-level error message for payloads that fail field validation
pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed";

/// Field error for a field sent as an explicit `null`
pub const NULL_FIELD_MESSAGE: &str = "This field may not be null.";

/// Field error for malformed email addresses
pub const INVALID_EMAIL_MESSAGE: &str = "Enter a valid email address.";
