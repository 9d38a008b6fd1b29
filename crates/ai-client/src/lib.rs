use crate::error::AiError;
use async_trait::async_trait;
use configuration::settings::AiConfig;
use core_types::Property;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::json;

pub mod error;
pub mod responses;

// --- Public API ---
pub use responses::{
    ApiErrorResponse, GenerateContentResponse, ImagePayload, ListingDetails, ResearchResult,
    VideoOperation, WebSource,
};

use responses::OperationResponse;

/// The generic, abstract interface for the hosted generative-AI service.
/// This trait is the contract that the web handlers use, allowing the
/// underlying implementation (live or mock) to be swapped out.
///
/// Every method is a single thin network call. Nothing is retried here:
/// the failure model is "return the error and let the caller retry or
/// surface it."
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Writes marketing copy for a property card.
    async fn generate_description(&self, property: &Property) -> Result<String, AiError>;

    /// Answers a market research question with web grounding, collecting
    /// the sources the answer was grounded on.
    async fn market_research(&self, query: &str) -> Result<ResearchResult, AiError>;

    /// Pulls structured figures out of raw listing text.
    async fn extract_listing(&self, listing_text: &str) -> Result<ListingDetails, AiError>;

    /// Applies an edit instruction to an image and returns the edited image.
    async fn edit_image(
        &self,
        image: &ImagePayload,
        instruction: &str,
    ) -> Result<ImagePayload, AiError>;

    /// Starts a video generation job, optionally seeded with a reference image.
    async fn start_video(
        &self,
        prompt: &str,
        reference: Option<&ImagePayload>,
    ) -> Result<VideoOperation, AiError>;

    /// Fetches the current state of a video generation job. The caller owns
    /// the polling cadence.
    async fn poll_video(&self, operation: &VideoOperation) -> Result<VideoOperation, AiError>;
}

/// A concrete implementation of the `AiClient` for the Gemini REST API.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    text_model: String,
    image_model: String,
    video_model: String,
}

impl GeminiClient {
    pub fn new(ai_config: &AiConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(&ai_config.api_key).expect("Invalid API key"),
        );

        Self {
            client: reqwest::Client::builder()
                .default_headers(headers)
                .build()
                .expect("Failed to build reqwest client"),
            base_url: ai_config.base_url.trim_end_matches('/').to_string(),
            text_model: ai_config.text_model.clone(),
            image_model: ai_config.image_model.clone(),
            video_model: ai_config.video_model.clone(),
        }
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, AiError> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            serde_json::from_str::<T>(&text).map_err(|e| AiError::Deserialization(e.to_string()))
        } else {
            let api_error: ApiErrorResponse = serde_json::from_str(&text).map_err(|e| {
                AiError::Deserialization(format!(
                    "Failed to deserialize error response: {}. Original text: {}",
                    e, text
                ))
            })?;
            Err(AiError::Upstream(api_error.error.code, api_error.error.message))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AiError> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            serde_json::from_str::<T>(&text).map_err(|e| AiError::Deserialization(e.to_string()))
        } else {
            let api_error: ApiErrorResponse = serde_json::from_str(&text).map_err(|e| {
                AiError::Deserialization(format!(
                    "Failed to deserialize error response: {}. Original text: {}",
                    e, text
                ))
            })?;
            Err(AiError::Upstream(api_error.error.code, api_error.error.message))
        }
    }
}

/// Collapses a raw long-running-operation payload into the caller-facing view.
fn to_video_operation(operation: OperationResponse) -> Result<VideoOperation, AiError> {
    if let Some(error) = operation.error {
        return Err(AiError::OperationFailed(format!(
            "{} (code {})",
            error.message, error.code
        )));
    }

    let video_uri = operation
        .response
        .as_ref()
        .and_then(|result| result.generate_video_response.as_ref())
        .and_then(|result| result.generated_samples.first())
        .map(|sample| sample.video.uri.clone());

    Ok(VideoOperation {
        name: operation.name,
        done: operation.done,
        video_uri,
    })
}

#[async_trait]
impl AiClient for GeminiClient {
    async fn generate_description(&self, property: &Property) -> Result<String, AiError> {
        let prompt = format!(
            "Write a warm, factual two-paragraph marketing description for a short-term \
             rental listing at {}. The nightly rate is ${} and the property books about \
             {}% of nights. Do not invent amenities.",
            property.address, property.nightly_rate, property.occupancy_rate
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response: GenerateContentResponse = self
            .post_json(&format!("models/{}:generateContent", self.text_model), &body)
            .await?;

        response
            .text()
            .ok_or_else(|| AiError::MissingContent("description text".to_string()))
    }

    async fn market_research(&self, query: &str) -> Result<ResearchResult, AiError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": query }] }],
            "tools": [{ "google_search": {} }]
        });

        let response: GenerateContentResponse = self
            .post_json(&format!("models/{}:generateContent", self.text_model), &body)
            .await?;

        let summary = response
            .text()
            .ok_or_else(|| AiError::MissingContent("research summary".to_string()))?;
        let sources = response.grounding_sources();

        Ok(ResearchResult { summary, sources })
    }

    async fn extract_listing(&self, listing_text: &str) -> Result<ListingDetails, AiError> {
        let prompt = format!(
            "Extract the listing figures from the following real-estate listing text. \
             Omit any field the text does not state.\n\n{}",
            listing_text
        );
        // The response schema forces the model to answer with parseable JSON
        // instead of prose.
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "address":     { "type": "STRING" },
                        "price":       { "type": "NUMBER" },
                        "nightlyRate": { "type": "NUMBER" },
                        "propertyTax": { "type": "NUMBER" },
                        "insurance":   { "type": "NUMBER" },
                        "hoa":         { "type": "NUMBER" },
                        "bedrooms":    { "type": "INTEGER" },
                        "bathrooms":   { "type": "NUMBER" },
                        "summary":     { "type": "STRING" }
                    }
                }
            }
        });

        let response: GenerateContentResponse = self
            .post_json(&format!("models/{}:generateContent", self.text_model), &body)
            .await?;

        let text = response
            .text()
            .ok_or_else(|| AiError::MissingContent("extraction payload".to_string()))?;
        serde_json::from_str(&text).map_err(|e| AiError::Deserialization(e.to_string()))
    }

    async fn edit_image(
        &self,
        image: &ImagePayload,
        instruction: &str,
    ) -> Result<ImagePayload, AiError> {
        let body = json!({
            "contents": [{
                "parts": [
                    { "text": instruction },
                    { "inlineData": { "mimeType": image.mime_type, "data": image.data } }
                ]
            }]
        });

        let response: GenerateContentResponse = self
            .post_json(&format!("models/{}:generateContent", self.image_model), &body)
            .await?;

        let edited = response
            .inline_data()
            .ok_or_else(|| AiError::MissingContent("edited image".to_string()))?;

        Ok(ImagePayload {
            mime_type: edited.mime_type.clone(),
            data: edited.data.clone(),
        })
    }

    async fn start_video(
        &self,
        prompt: &str,
        reference: Option<&ImagePayload>,
    ) -> Result<VideoOperation, AiError> {
        let mut instance = json!({ "prompt": prompt });
        if let Some(image) = reference {
            instance["image"] = json!({
                "bytesBase64Encoded": image.data,
                "mimeType": image.mime_type
            });
        }
        let body = json!({ "instances": [instance] });

        let operation: OperationResponse = self
            .post_json(
                &format!("models/{}:predictLongRunning", self.video_model),
                &body,
            )
            .await?;

        to_video_operation(operation)
    }

    async fn poll_video(&self, operation: &VideoOperation) -> Result<VideoOperation, AiError> {
        // Operation names are fully-qualified resource paths.
        let refreshed: OperationResponse = self.get_json(&operation.name).await?;
        to_video_operation(refreshed)
    }
}
