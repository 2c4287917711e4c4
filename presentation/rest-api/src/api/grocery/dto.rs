use poem_openapi::Object;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SaveItemsResponse {
    /// Human-readable confirmation including the saved item count
    pub message: String,
}
