use std::sync::Arc;

use logger::TracingLogger;

use firestore::client::FirestoreClient;
use firestore::grocery_item::repository::GroceryItemRepositoryFirestore;
use gemini::client::GeminiClient;
use gemini::receipt_parser::ReceiptParserGemini;

use business::application::grocery_item::save::SaveItemsUseCaseImpl;
use business::application::receipt::parse::ParseReceiptUseCaseImpl;
use business::domain::grocery_item::repository::GroceryItemRepository;

use crate::config::firestore_config::FirestoreConfig;
use crate::config::gemini_config::GeminiConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub receipt_api: crate::api::receipt::routes::ReceiptApi,
    pub grocery_api: crate::api::grocery::routes::GroceryApi,
}

impl DependencyContainer {
    pub fn new() -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let gemini_config = GeminiConfig::from_env();
        let gemini_client = GeminiClient::new(gemini_config.api_key, gemini_config.model);
        let receipt_parser = Arc::new(ReceiptParserGemini::new(gemini_client));

        // A missing or unusable key file leaves the repository out of the
        // container; the save route then answers 500 for the process lifetime.
        let repository: Option<Arc<dyn GroceryItemRepository>> = match FirestoreConfig::from_env() {
            Some(config) => match FirestoreClient::initialize(&config.credentials_path) {
                Ok(client) => {
                    tracing::info!("Firestore client initialized");
                    Some(Arc::new(GroceryItemRepositoryFirestore::new(client)))
                }
                Err(err) => {
                    tracing::error!(error = %err, "Firestore initialization failed");
                    None
                }
            },
            None => {
                tracing::warn!("GOOGLE_APPLICATION_CREDENTIALS not set, save route degraded");
                None
            }
        };

        // Use cases
        let parse_use_case = Arc::new(ParseReceiptUseCaseImpl {
            parser: receipt_parser,
            logger: logger.clone(),
        });
        let save_use_case = Arc::new(SaveItemsUseCaseImpl { repository, logger });

        let receipt_api = crate::api::receipt::routes::ReceiptApi::new(parse_use_case);
        let grocery_api = crate::api::grocery::routes::GroceryApi::new(save_use_case);

        Self {
            health_api,
            receipt_api,
            grocery_api,
        }
    }
}
