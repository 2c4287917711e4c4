use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::grocery_item::errors::GroceryError;
use crate::domain::grocery_item::repository::GroceryItemRepository;
use crate::domain::grocery_item::use_cases::save::{SaveItemsParams, SaveItemsUseCase};
use crate::domain::logger::Logger;

/// Saves grocery items one by one into the user's collection.
///
/// The repository is optional: when the document store failed to initialize
/// at startup, every call fails with `StoreUnavailable` and the rest of the
/// service keeps running.
pub struct SaveItemsUseCaseImpl {
    pub repository: Option<Arc<dyn GroceryItemRepository>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SaveItemsUseCase for SaveItemsUseCaseImpl {
    async fn execute(&self, params: SaveItemsParams) -> Result<usize, GroceryError> {
        let repository = self
            .repository
            .as_ref()
            .ok_or(GroceryError::StoreUnavailable)?;

        self.logger.info(&format!(
            "Saving {} grocery items for user {}",
            params.items.len(),
            params.user_id
        ));

        // Writes are sequential with no transaction: the first failure aborts
        // the loop and already-written documents stay.
        for item in &params.items {
            repository.add(&params.user_id, item).await?;
        }

        // Reports the requested count, mirroring the success message contract.
        Ok(params.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;
    use serde_json::{Value, json};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    /// Records every add call so tests can assert order and ownership.
    struct RecordingRepository {
        added: Mutex<Vec<(UserId, Value)>>,
        fail_on_call: Option<usize>,
        calls: AtomicUsize,
    }

    impl RecordingRepository {
        fn new(fail_on_call: Option<usize>) -> Self {
            Self {
                added: Mutex::new(vec![]),
                fail_on_call,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl GroceryItemRepository for RecordingRepository {
        async fn add(&self, user_id: &UserId, item: &Value) -> Result<(), RepositoryError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if Some(call) == self.fail_on_call {
                return Err(RepositoryError::DatabaseError);
            }
            self.added
                .lock()
                .unwrap()
                .push((user_id.clone(), item.clone()));
            Ok(())
        }
    }

    fn three_items() -> Vec<Value> {
        vec![
            json!({"humanName": "Milk", "storage": "Fridge"}),
            json!({"humanName": "Bread", "storage": "Cupboard"}),
            json!({"humanName": "Peas", "storage": "Freezer"}),
        ]
    }

    #[tokio::test]
    async fn should_add_one_document_per_item() {
        let repository = Arc::new(RecordingRepository::new(None));
        let use_case = SaveItemsUseCaseImpl {
            repository: Some(repository.clone()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SaveItemsParams {
                user_id: UserId::new("u1"),
                items: three_items(),
            })
            .await;

        assert_eq!(result.unwrap(), 3);
        let added = repository.added.lock().unwrap();
        assert_eq!(added.len(), 3);
        assert!(added.iter().all(|(user, _)| user.as_str() == "u1"));
        assert_eq!(added[1].1["humanName"], "Bread");
    }

    #[tokio::test]
    async fn should_report_zero_for_empty_array() {
        let repository = Arc::new(RecordingRepository::new(None));
        let use_case = SaveItemsUseCaseImpl {
            repository: Some(repository.clone()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SaveItemsParams {
                user_id: UserId::new("u1"),
                items: vec![],
            })
            .await;

        assert_eq!(result.unwrap(), 0);
        assert!(repository.added.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_abort_remaining_writes_when_one_fails() {
        let repository = Arc::new(RecordingRepository::new(Some(2)));
        let use_case = SaveItemsUseCaseImpl {
            repository: Some(repository.clone()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SaveItemsParams {
                user_id: UserId::new("u1"),
                items: three_items(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            GroceryError::Repository(RepositoryError::DatabaseError)
        ));
        // No rollback: the first write stays, the third is never attempted.
        assert_eq!(repository.added.lock().unwrap().len(), 1);
        assert_eq!(repository.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn should_fail_when_store_never_initialized() {
        let use_case = SaveItemsUseCaseImpl {
            repository: None,
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SaveItemsParams {
                user_id: UserId::new("u1"),
                items: three_items(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), GroceryError::StoreUnavailable));
    }
}
