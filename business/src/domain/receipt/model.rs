/// Result of parsing a receipt image.
///
/// Items are kept as raw JSON values and returned to the caller verbatim.
/// The expected element shape (six fields: `receiptName`, `humanName`,
/// `quantity`, `cost`, `useByDate`, `storage`) is dictated by the extraction
/// prompt, not validated here — the only contract is "the model produced a
/// JSON array".
#[derive(Debug, Clone)]
pub struct ReceiptExtraction {
    pub items: Vec<serde_json::Value>,
}
