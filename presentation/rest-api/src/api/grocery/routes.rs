use std::sync::Arc;

use poem_openapi::{OpenApi, param::Header, payload::Json};

use business::domain::grocery_item::use_cases::save::{SaveItemsParams, SaveItemsUseCase};
use business::domain::shared::value_objects::UserId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::grocery::dto::SaveItemsResponse;
use crate::api::tags::ApiTags;

pub struct GroceryApi {
    save_use_case: Arc<dyn SaveItemsUseCase>,
}

impl GroceryApi {
    pub fn new(save_use_case: Arc<dyn SaveItemsUseCase>) -> Self {
        Self { save_use_case }
    }
}

/// Grocery persistence API
///
/// Appends client-supplied grocery items into the calling user's collection.
#[OpenApi]
impl GroceryApi {
    /// Save grocery items
    ///
    /// Writes each element of the JSON array body as a new document under the
    /// user identified by the `X-User-ID` header. Writes are sequential and
    /// non-transactional: a mid-array failure leaves earlier documents in
    /// place.
    #[oai(path = "/save-items", method = "post", tag = "ApiTags::Groceries")]
    async fn save_items(
        &self,
        #[oai(name = "X-User-ID")] user_id: Header<Option<String>>,
        body: Json<serde_json::Value>,
    ) -> SaveItemsApiResponse {
        let items = match body.0 {
            serde_json::Value::Array(items) => items,
            _ => {
                return SaveItemsApiResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "grocery.body_not_an_array".to_string(),
                }));
            }
        };

        let user_id = match user_id.0.as_deref() {
            Some(uid) if !uid.is_empty() => UserId::new(uid),
            _ => {
                return SaveItemsApiResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "grocery.missing_user_id".to_string(),
                }));
            }
        };

        match self
            .save_use_case
            .execute(SaveItemsParams { user_id, items })
            .await
        {
            Ok(count) => SaveItemsApiResponse::Ok(Json(SaveItemsResponse {
                message: format!("Successfully saved {} items to Firestore.", count),
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                SaveItemsApiResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SaveItemsApiResponse {
    #[oai(status = 200)]
    Ok(Json<SaveItemsResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
