#[derive(Debug, thiserror::Error)]
pub enum ReceiptError {
    /// The inference call itself failed: network error, non-success status,
    /// or a response with no generated text.
    #[error("receipt.inference_failed")]
    InferenceFailed,
    /// The model answered, but the generated text is not a JSON array.
    #[error("receipt.malformed_extraction")]
    MalformedExtraction,
}
