const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Configuration for Gemini API access.
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        let api_key = std::env::var("GOOGLE_API_KEY")
            .expect("GOOGLE_API_KEY environment variable must be set");
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self { api_key, model }
    }
}
