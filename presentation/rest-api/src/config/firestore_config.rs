/// Configuration for Firestore access.
///
/// Unlike the Gemini key, the credentials path is optional: without it the
/// process still serves receipt parsing, and only the save route degrades.
pub struct FirestoreConfig {
    pub credentials_path: String,
}

impl FirestoreConfig {
    pub fn from_env() -> Option<Self> {
        std::env::var("GOOGLE_APPLICATION_CREDENTIALS")
            .ok()
            .map(|credentials_path| Self { credentials_path })
    }
}
