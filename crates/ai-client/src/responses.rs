use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Using `#[serde(rename_all = "camelCase")]` to automatically map from JSON camelCase to Rust snake_case.

/// The response from a `POST /models/{model}:generateContent` request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A single content part. Exactly one of the fields is populated.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub text: Option<String>,
    pub inline_data: Option<InlineData>,
}

/// Base64-encoded binary content, as the API transports images.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Attribution metadata attached to a web-grounded answer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingChunk {
    pub web: Option<WebSource>,
}

/// A web page the model grounded its answer on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSource {
    pub uri: String,
    pub title: Option<String>,
}

impl GenerateContentResponse {
    /// The concatenated text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let joined: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if joined.is_empty() { None } else { Some(joined) }
    }

    /// The first inline (binary) part of the first candidate.
    pub fn inline_data(&self) -> Option<&InlineData> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .find_map(|part| part.inline_data.as_ref())
    }

    /// Every web source the first candidate grounded its answer on.
    pub fn grounding_sources(&self) -> Vec<WebSource> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.grounding_metadata.as_ref())
            .map(|metadata| {
                metadata
                    .grounding_chunks
                    .iter()
                    .filter_map(|chunk| chunk.web.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// A long-running operation as returned by the video endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResponse {
    pub name: String,
    #[serde(default)]
    pub done: bool,
    pub error: Option<OperationError>,
    pub response: Option<OperationResult>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationError {
    pub code: i32,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResult {
    pub generate_video_response: Option<GenerateVideoResponse>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoResponse {
    #[serde(default)]
    pub generated_samples: Vec<GeneratedSample>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSample {
    pub video: VideoRef,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRef {
    pub uri: String,
}

/// Represents an error response envelope from the AI API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub code: i32,
    pub message: String,
    #[serde(default)]
    pub status: String,
}

// ==============================================================================
// Domain-facing output types
// ==============================================================================

/// A web-grounded market research answer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchResult {
    pub summary: String,
    pub sources: Vec<WebSource>,
}

/// Figures pulled out of raw listing text by structured extraction.
/// Every field is optional: the model omits what the listing does not state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingDetails {
    pub address: Option<String>,
    pub price: Option<Decimal>,
    pub nightly_rate: Option<Decimal>,
    pub property_tax: Option<Decimal>,
    pub insurance: Option<Decimal>,
    pub hoa: Option<Decimal>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<Decimal>,
    pub summary: Option<String>,
}

/// A base64 image travelling to or from the image-editing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    pub mime_type: String,
    /// Base64-encoded bytes, kept opaque end to end.
    pub data: String,
}

/// The caller-facing view of a video generation job.
///
/// Returned by `start_video`, refreshed by `poll_video`; the caller owns the
/// polling cadence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoOperation {
    /// Fully-qualified operation name, e.g. "models/veo-2.0/operations/abc123".
    pub name: String,
    pub done: bool,
    /// Download URI of the finished clip, present once `done` is true.
    pub video_uri: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn text_joins_parts_of_first_candidate() {
        let json = r#"{
            "candidates": [{
                "content": { "parts": [ {"text": "A cozy"}, {"text": " cabin."} ] }
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().as_deref(), Some("A cozy cabin."));
        assert!(response.inline_data().is_none());
    }

    #[test]
    fn empty_candidates_yield_no_text() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text(), None);
        assert!(response.grounding_sources().is_empty());
    }

    #[test]
    fn grounding_sources_skip_chunks_without_web() {
        let json = r#"{
            "candidates": [{
                "content": { "parts": [ {"text": "ok"} ] },
                "groundingMetadata": {
                    "groundingChunks": [
                        { "web": { "uri": "https://example.com/str-report", "title": "STR Report" } },
                        { }
                    ]
                }
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let sources = response.grounding_sources();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].uri, "https://example.com/str-report");
    }

    #[test]
    fn listing_details_tolerate_partial_extraction() {
        let json = r#"{ "price": 450000, "nightlyRate": 200.5, "address": "12 Alpine Way" }"#;
        let details: ListingDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.price, Some(dec!(450000)));
        assert_eq!(details.nightly_rate, Some(dec!(200.5)));
        assert_eq!(details.insurance, None);
        assert_eq!(details.bedrooms, None);
    }

    #[test]
    fn operation_response_carries_video_uri_when_done() {
        let json = r#"{
            "name": "models/veo/operations/op1",
            "done": true,
            "response": {
                "generateVideoResponse": {
                    "generatedSamples": [ { "video": { "uri": "https://example.com/clip.mp4" } } ]
                }
            }
        }"#;
        let operation: OperationResponse = serde_json::from_str(json).unwrap();
        assert!(operation.done);
        let uri = operation
            .response
            .and_then(|r| r.generate_video_response)
            .and_then(|r| r.generated_samples.into_iter().next())
            .map(|s| s.video.uri);
        assert_eq!(uri.as_deref(), Some("https://example.com/clip.mp4"));
    }
}
