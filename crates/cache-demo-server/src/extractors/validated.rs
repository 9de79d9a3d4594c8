//! Validating extractors
//!
//! Wrap axum's `Json` and `Path` so that every rejection becomes a
//! `ValidationError` (422) with the offending location.

use crate::error::ValidationError;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

const DATA_ERROR_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

/// JSON request body that must deserialize into `T`
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(json_rejection(rejection)),
        }
    }
}

fn json_rejection(rejection: JsonRejection) -> ValidationError {
    let msg = rejection.body_text();
    match rejection {
        JsonRejection::JsonDataError(_) => {
            let field = body_field(&msg);
            let mut loc = vec!["body"];
            if let Some(field) = field.as_deref() {
                loc.push(field);
            }
            ValidationError::new(&loc, msg, "value_error")
        }
        JsonRejection::JsonSyntaxError(_) => ValidationError::new(&["body"], msg, "json_invalid"),
        JsonRejection::MissingJsonContentType(_) => {
            ValidationError::new(&["header", "content-type"], msg, "missing_content_type")
        }
        _ => ValidationError::new(&["body"], msg, "body_error"),
    }
}

/// Best-effort name of the field a deserialization message refers to
fn body_field(msg: &str) -> Option<String> {
    if let Some(rest) = msg.split("missing field `").nth(1) {
        return rest.split('`').next().map(str::to_string);
    }

    let detail = msg.strip_prefix(DATA_ERROR_PREFIX)?;
    let (path, _) = detail.split_once(": ")?;
    if path.is_empty() || path.contains(' ') {
        return None;
    }
    Some(path.to_string())
}

/// Integer item id taken from the `{id}` path segment
pub struct ItemId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i64>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(rejection) => {
                tracing::debug!("Rejected item id: {}", rejection.body_text());
                Err(ValidationError::new(
                    &["path", "item_id"],
                    "Input should be a valid integer, unable to parse string as an integer",
                    "int_parsing",
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_field_missing() {
        let msg = format!("{}missing field `name` at line 1 column 9", DATA_ERROR_PREFIX);
        assert_eq!(body_field(&msg), Some("name".to_string()));
    }

    #[test]
    fn test_body_field_wrong_type() {
        let msg = format!(
            "{}id: invalid type: string \"one\", expected i64 at line 1 column 11",
            DATA_ERROR_PREFIX
        );
        assert_eq!(body_field(&msg), Some("id".to_string()));
    }

    #[test]
    fn test_body_field_unknown() {
        let msg = format!("{}invalid type: sequence, expected struct Item", DATA_ERROR_PREFIX);
        assert_eq!(body_field(&msg), None);
        assert_eq!(body_field("something else"), None);
    }
}
