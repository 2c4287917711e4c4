use async_trait::async_trait;

use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::model::ReceiptExtraction;

pub struct ParseReceiptParams {
    pub image_base64: String,
}

#[async_trait]
pub trait ParseReceiptUseCase: Send + Sync {
    async fn execute(&self, params: ParseReceiptParams) -> Result<ReceiptExtraction, ReceiptError>;
}
