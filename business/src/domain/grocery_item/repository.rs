use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

/// Repository port for the per-user groceries collection.
///
/// Append-only: every call creates a new document with a store-assigned
/// identifier. There is no update or delete lifecycle.
#[async_trait]
pub trait GroceryItemRepository: Send + Sync {
    async fn add(&self, user_id: &UserId, item: &serde_json::Value) -> Result<(), RepositoryError>;
}
