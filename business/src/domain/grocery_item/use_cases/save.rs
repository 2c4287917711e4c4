use async_trait::async_trait;

use crate::domain::grocery_item::errors::GroceryError;
use crate::domain::shared::value_objects::UserId;

pub struct SaveItemsParams {
    pub user_id: UserId,
    pub items: Vec<serde_json::Value>,
}

#[async_trait]
pub trait SaveItemsUseCase: Send + Sync {
    /// Saves the items in order and returns the number of items requested.
    async fn execute(&self, params: SaveItemsParams) -> Result<usize, GroceryError>;
}
