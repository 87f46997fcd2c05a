//! User handlers.

use std::borrow::Cow;

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::api::extractors::{NonNullFields, ValidatedJson};
use crate::api::AppState;
use crate::config::INVALID_EMAIL_MESSAGE;
use crate::domain::{NewUser, UserChanges, UserRecord};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// User creation request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(
        required(message = "This field is required."),
        length(
            min = 1,
            max = 255,
            message = "Must not be blank and at most 255 characters."
        )
    )]
    #[schema(example = "John", max_length = 255)]
    pub first_name: Option<String>,

    /// Stored as an empty string when omitted
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(
        min = 1,
        max = 255,
        message = "Must not be blank and at most 255 characters."
    ))]
    #[schema(example = "Doe", max_length = 255)]
    pub last_name: Option<String>,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(
        required(message = "This field is required."),
        email(message = "Enter a valid email address."),
        custom(function = "dotted_domain"),
        length(max = 255, message = "Must be at most 255 characters.")
    )]
    #[schema(example = "john.doe@example.com")]
    pub email: Option<String>,

    /// Stored as an empty string when omitted
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(
        min = 1,
        max = 50,
        message = "Must not be blank and at most 50 characters."
    ))]
    #[schema(example = "+1234567890", max_length = 50)]
    pub phone: Option<String>,
}

impl NonNullFields for CreateUserRequest {
    const NON_NULL_FIELDS: &'static [&'static str] = USER_FIELDS;
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            first_name: req.first_name.unwrap_or_default(),
            last_name: req.last_name.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            phone: req.phone.unwrap_or_default(),
        }
    }
}

/// Partial user update; omitted fields are left unchanged.
///
/// Unknown fields, including `id` and the timestamps, are ignored.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(
        min = 1,
        max = 255,
        message = "Must not be blank and at most 255 characters."
    ))]
    #[schema(example = "Jane", max_length = 255)]
    pub first_name: Option<String>,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(
        min = 1,
        max = 255,
        message = "Must not be blank and at most 255 characters."
    ))]
    #[schema(example = "Doe", max_length = 255)]
    pub last_name: Option<String>,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(
        email(message = "Enter a valid email address."),
        custom(function = "dotted_domain"),
        length(max = 255, message = "Must be at most 255 characters.")
    )]
    #[schema(example = "jane.doe@example.com")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(
        min = 1,
        max = 50,
        message = "Must not be blank and at most 50 characters."
    ))]
    #[schema(example = "+1-555-555-0000", max_length = 50)]
    pub phone: Option<String>,
}

impl NonNullFields for UpdateUserRequest {
    const NON_NULL_FIELDS: &'static [&'static str] = USER_FIELDS;
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
        }
    }
}

/// Wire names of the writable record fields
const USER_FIELDS: &[&str] = &["firstName", "lastName", "email", "phone"];

/// Domain part made of dot-separated labels ending in an alphabetic or
/// punycode top-level label
static EMAIL_DOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)@(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+(?:[a-z]{2,63}|xn--[a-z0-9]{1,59})$",
    )
    .expect("email domain pattern is valid")
});

/// Reject addresses whose domain has no dot, like `john@example`
fn dotted_domain(email: &str) -> Result<(), ValidationError> {
    if EMAIL_DOMAIN.is_match(email) {
        return Ok(());
    }
    let mut error = ValidationError::new("email");
    error.message = Some(Cow::Borrowed(INVALID_EMAIL_MESSAGE));
    Err(error)
}

/// Strip surrounding whitespace; `null` decodes as `None` and is reported
/// by [`ValidatedJson`]
fn trimmed<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.map(|s| s.trim().to_string()))
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/user", post(create_user))
        .route(
            "/user/:id",
            get(get_user).patch(update_user).delete(delete_user),
        )
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users in insertion order", body = Vec<UserRecord>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserRecord>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserRecord),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<Created<UserRecord>> {
    let user = state.user_service.create_user(payload.into()).await?;
    Ok(Created(user))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User record", body = UserRecord),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserRecord>> {
    let user = state.user_service.get_user(&id).await?;
    Ok(Json(user))
}

/// Update user fields
#[utoipa::path(
    patch,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserRecord),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<UserRecord>> {
    let user = state.user_service.update_user(&id, payload.into()).await?;
    Ok(Json(user))
}

/// Delete user
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<NoContent> {
    state.user_service.delete_user(&id).await?;
    Ok(NoContent)
}
