use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use business::domain::receipt::errors::ReceiptError;
use business::domain::receipt::model::ReceiptExtraction;
use business::domain::receipt::services::ReceiptParserService;

use crate::client::GeminiClient;

const PROMPT: &str = "You are a highly accurate receipt item parser. \
Take the provided image of a grocery receipt and extract a JSON array of objects. \
Each object in the array should have the following keys: \
'receiptName' (the raw item name from the receipt), \
'humanName' (a human-readable, common name for the item), \
'quantity' (the number of units), \
'cost' (the total cost for that item, as a float), \
'useByDate' (a reasonable estimated use by date in YYYY-MM-DD format), and \
'storage' (the most likely storage location: 'Fridge', 'Freezer', 'Cupboard', or 'Countertop').\
\n\nOnly return the JSON array. Do not include any other text.";

pub struct ReceiptParserGemini {
    client: GeminiClient,
}

impl ReceiptParserGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn build_request(image_base64: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![
                    ContentPart::Text {
                        text: PROMPT.to_string(),
                    },
                    ContentPart::InlineData {
                        inline_data: InlineData {
                            mime_type: "image/jpeg".to_string(),
                            data: image_base64.to_string(),
                        },
                    },
                ],
            }],
            generation_config: Some(GenerationConfig {
                temperature: Some(0.2),
            }),
        }
    }

    /// Pulls the generated text out of the first candidate.
    fn extract_text(response: &GenerateContentResponse) -> Option<&str> {
        response
            .candidates
            .first()?
            .content
            .parts
            .iter()
            .find_map(|part| match part {
                ContentPart::Text { text } => Some(text.as_str()),
                _ => None,
            })
    }

    /// The generated text must be a JSON array; anything else is a malformed
    /// extraction and the raw text is logged for diagnosis.
    fn parse_generated_text(text: &str) -> Result<ReceiptExtraction, ReceiptError> {
        match serde_json::from_str::<serde_json::Value>(text) {
            Ok(serde_json::Value::Array(items)) => Ok(ReceiptExtraction { items }),
            Ok(_) => {
                tracing::error!(raw = %text, "Gemini returned JSON that is not an array");
                Err(ReceiptError::MalformedExtraction)
            }
            Err(err) => {
                tracing::error!(raw = %text, error = %err, "Gemini returned non-JSON text");
                Err(ReceiptError::MalformedExtraction)
            }
        }
    }
}

#[async_trait]
impl ReceiptParserService for ReceiptParserGemini {
    async fn parse(&self, image_base64: &str) -> Result<ReceiptExtraction, ReceiptError> {
        let body = Self::build_request(image_base64);

        let response = self
            .client
            .client
            .post(self.client.generate_content_url())
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "Gemini request failed");
                ReceiptError::InferenceFailed
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            tracing::error!(%status, body = %error_body, "Gemini API returned an error");
            return Err(ReceiptError::InferenceFailed);
        }

        let data: GenerateContentResponse = response.json().await.map_err(|err| {
            tracing::error!(error = %err, "Failed to decode Gemini response");
            ReceiptError::InferenceFailed
        })?;

        let text = Self::extract_text(&data).ok_or_else(|| {
            tracing::error!("Gemini response contained no generated text");
            ReceiptError::InferenceFailed
        })?;

        Self::parse_generated_text(text)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<ContentPart>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum ContentPart {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Content,
    #[serde(default)]
    #[allow(dead_code)]
    finish_reason: Option<String>,
}
