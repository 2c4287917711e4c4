use poem_openapi::{OpenApi, payload::PlainText};

use crate::api::tags::ApiTags;

/// Health API for monitoring and infrastructure checks
///
/// A single liveness route: it answers regardless of collaborator state, so
/// a degraded Firestore client or a bad Gemini key never takes it down.
pub struct Api;

impl Api {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl Api {
    /// Liveness check
    ///
    /// Returns a fixed confirmation string with HTTP 200. No inputs, no side
    /// effects.
    #[oai(path = "/", method = "get", tag = "ApiTags::Health")]
    async fn home(&self) -> PlainText<String> {
        PlainText("The backend server is running!".to_string())
    }
}
