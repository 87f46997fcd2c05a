//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::config::NULL_FIELD_MESSAGE;
use crate::errors::{field_errors, AppError};

/// Request bodies whose fields may be omitted but never sent as `null`.
pub trait NonNullFields {
    /// Wire names of the fields that reject an explicit `null`
    const NON_NULL_FIELDS: &'static [&'static str];
}

/// Validated JSON extractor that automatically validates requests.
///
/// Undecodable bodies become [`AppError::BadRequest`]. Decoded bodies that
/// break a field rule, or send `null` for a field listed in
/// [`NonNullFields`], become [`AppError::Validation`] listing every
/// offending field. Either way the handler never runs.
///
/// # Example
///
/// ```rust,ignore
/// use serde::Deserialize;
/// use validator::Validate;
/// use user_store_api::api::extractors::{NonNullFields, ValidatedJson};
///
/// #[derive(Deserialize, Validate)]
/// struct ContactRequest {
///     #[validate(email)]
///     email: String,
/// }
///
/// impl NonNullFields for ContactRequest {
///     const NON_NULL_FIELDS: &'static [&'static str] = &["email"];
/// }
///
/// async fn contact(ValidatedJson(payload): ValidatedJson<ContactRequest>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + NonNullFields,
    Json<Value>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        let nulls = null_fields(&raw, T::NON_NULL_FIELDS);

        let value: T = serde_json::from_value(raw)
            .map_err(|e| AppError::bad_request(format!("Failed to deserialize the JSON body: {}", e)))?;

        let mut fields = value
            .validate()
            .err()
            .map(|e| field_errors(&e))
            .unwrap_or_default();
        for field in nulls {
            fields.insert(field.to_string(), vec![NULL_FIELD_MESSAGE.to_string()]);
        }

        if !fields.is_empty() {
            return Err(AppError::Validation(fields));
        }

        Ok(ValidatedJson(value))
    }
}

/// Listed fields whose value in `raw` is an explicit `null`
fn null_fields(raw: &Value, names: &'static [&'static str]) -> Vec<&'static str> {
    let Some(object) = raw.as_object() else {
        return Vec::new();
    };
    names
        .iter()
        .copied()
        .filter(|name| object.get(*name).is_some_and(Value::is_null))
        .collect()
}
