use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::model::ReceiptExtraction;
use crate::domain::receipt::services::ReceiptParserService;
use crate::domain::receipt::use_cases::parse::{ParseReceiptParams, ParseReceiptUseCase};

pub struct ParseReceiptUseCaseImpl {
    pub parser: Arc<dyn ReceiptParserService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ParseReceiptUseCase for ParseReceiptUseCaseImpl {
    async fn execute(&self, params: ParseReceiptParams) -> Result<ReceiptExtraction, ReceiptError> {
        self.logger.info("Parsing receipt image");

        let extraction = self.parser.parse(&params.image_base64).await?;

        self.logger.info(&format!(
            "Receipt parsed: {} items extracted",
            extraction.items.len()
        ));

        Ok(extraction)
    }
}
