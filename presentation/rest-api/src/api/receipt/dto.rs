use poem_openapi::Multipart;
use poem_openapi::types::multipart::Upload;

/// Multipart payload for receipt parsing.
///
/// The file field is required; poem rejects requests without it before the
/// handler runs.
#[derive(Debug, Multipart)]
pub struct ParseReceiptPayload {
    /// Receipt photo, assumed JPEG
    pub image: Upload,
}
