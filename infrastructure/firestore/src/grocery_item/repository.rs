use async_trait::async_trait;
use serde_json::json;

use business::domain::errors::RepositoryError;
use business::domain::grocery_item::repository::GroceryItemRepository;
use business::domain::shared::value_objects::UserId;

use crate::client::FirestoreClient;
use crate::value;

/// Application namespace shared with the front-end's collection paths.
const APP_NAMESPACE: &str = "default-app-id";

pub struct GroceryItemRepositoryFirestore {
    client: FirestoreClient,
}

impl GroceryItemRepositoryFirestore {
    pub fn new(client: FirestoreClient) -> Self {
        Self { client }
    }

    fn groceries_collection(user_id: &UserId) -> String {
        format!(
            "artifacts/{}/users/{}/groceries",
            APP_NAMESPACE,
            user_id.as_str()
        )
    }
}

#[async_trait]
impl GroceryItemRepository for GroceryItemRepositoryFirestore {
    async fn add(&self, user_id: &UserId, item: &serde_json::Value) -> Result<(), RepositoryError> {
        let fields = value::to_document_fields(item).map_err(|err| {
            tracing::error!(error = %err, "Item cannot be encoded as a Firestore document");
            RepositoryError::Persistence
        })?;

        let token = self
            .client
            .access_token()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        // Posting to the collection URL lets Firestore assign the document id.
        let url = self.client.documents_url(&Self::groceries_collection(user_id));
        let response = self
            .client
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&json!({ "fields": fields }))
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "Firestore createDocument request failed");
                RepositoryError::DatabaseError
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            tracing::error!(%status, body = %error_body, "Firestore rejected the write");
            return Err(RepositoryError::DatabaseError);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_collection_path_under_user_namespace() {
        let path = GroceryItemRepositoryFirestore::groceries_collection(&UserId::new("u1"));

        assert_eq!(path, "artifacts/default-app-id/users/u1/groceries");
    }
}
