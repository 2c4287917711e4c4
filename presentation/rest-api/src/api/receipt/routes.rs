use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use poem_openapi::{OpenApi, payload::Json};

use business::domain::receipt::use_cases::parse::{ParseReceiptParams, ParseReceiptUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::receipt::dto::ParseReceiptPayload;
use crate::api::tags::ApiTags;

pub struct ReceiptApi {
    parse_use_case: Arc<dyn ParseReceiptUseCase>,
}

impl ReceiptApi {
    pub fn new(parse_use_case: Arc<dyn ParseReceiptUseCase>) -> Self {
        Self { parse_use_case }
    }
}

/// Receipt parsing API
///
/// Forwards an uploaded receipt photo to the inference collaborator and
/// returns its structured extraction untouched.
#[OpenApi]
impl ReceiptApi {
    /// Parse a receipt image
    ///
    /// Extracts a JSON array of grocery items from a supermarket receipt
    /// photo. The array is returned exactly as the model produced it.
    #[oai(path = "/parse-receipt", method = "post", tag = "ApiTags::Receipts")]
    async fn parse_receipt(&self, payload: ParseReceiptPayload) -> ParseReceiptResponse {
        let image_bytes = match payload.image.into_vec().await {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::error!(error = %err, "Failed to read uploaded image");
                return ParseReceiptResponse::InternalError(Json(ErrorResponse {
                    name: "ImageReadError".to_string(),
                    message: "receipt.image_unreadable".to_string(),
                }));
            }
        };

        let params = ParseReceiptParams {
            image_base64: STANDARD.encode(image_bytes),
        };

        match self.parse_use_case.execute(params).await {
            Ok(extraction) => ParseReceiptResponse::Ok(Json(extraction.items)),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ParseReceiptResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ParseReceiptResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<serde_json::Value>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
