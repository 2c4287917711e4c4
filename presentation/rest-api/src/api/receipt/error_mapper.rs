use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::receipt::errors::ReceiptError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ReceiptError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ReceiptError::InferenceFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InferenceError",
                "receipt.inference_failed",
            ),
            ReceiptError::MalformedExtraction => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "ExtractionError",
                "receipt.malformed_extraction",
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
