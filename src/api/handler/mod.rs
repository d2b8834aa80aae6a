use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::schema::{self, Schema};

pub mod businesses;
pub mod photos;
pub mod reviews;
pub mod users;

pub use businesses::{
    create_business, delete_business, get_business, list_businesses, replace_business,
};
pub use photos::{create_photo, delete_photo, get_photo, update_photo};
pub use reviews::{create_review, delete_review, get_review, update_review};
pub use users::{list_user_businesses, list_user_photos, list_user_reviews};

/// Presence-validates the body, filters it down to its schema fields, and
/// deserializes the result. A type mismatch is reported the same way as a
/// missing field.
pub(crate) fn parse_body<T: DeserializeOwned>(
    body: &Value,
    schema: Schema,
    resource: &str,
) -> Result<T, ApiError> {
    if !schema::validate(body, schema) {
        return Err(invalid_body(resource));
    }

    let fields = schema::extract(body, schema);
    serde_json::from_value(Value::Object(fields)).map_err(|_| invalid_body(resource))
}

pub(crate) fn invalid_body(resource: &str) -> ApiError {
    ApiError::BadRequest(format!(
        "Request body is not a valid {} object",
        resource
    ))
}

pub(crate) fn resource_not_found(path: String) -> ApiError {
    ApiError::NotFound(format!("Requested resource {} does not exist", path))
}
