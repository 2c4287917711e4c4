use async_trait::async_trait;

use super::errors::ReceiptError;
use super::model::ReceiptExtraction;

/// Service port for extracting grocery items from receipt images.
///
/// Takes the base64-encoded image bytes and returns the structured items the
/// model extracted. A single attempt per call; failures are not retried.
#[async_trait]
pub trait ReceiptParserService: Send + Sync {
    async fn parse(&self, image_base64: &str) -> Result<ReceiptExtraction, ReceiptError>;
}
