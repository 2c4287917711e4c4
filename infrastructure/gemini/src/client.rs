use reqwest::Client;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Shared Gemini HTTP client configuration.
pub struct GeminiClient {
    pub client: Client,
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            model,
            base_url: GEMINI_API_BASE.to_string(),
        }
    }

    /// Returns the generateContent endpoint URL for the configured model.
    /// The API key travels as a query parameter, not a header.
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}
