use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::grocery_item::errors::GroceryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for GroceryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            GroceryError::StoreUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "StoreUnavailable",
                "grocery.store_unavailable",
            ),
            GroceryError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
