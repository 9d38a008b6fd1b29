use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiError {
    #[error("Failed to reach the AI service: {0}")]
    Request(#[from] reqwest::Error),

    #[error("The AI service returned an error ({0}): {1}")]
    Upstream(i32, String),

    #[error("Failed to deserialize the AI response: {0}")]
    Deserialization(String),

    #[error("The AI response did not contain the expected content: {0}")]
    MissingContent(String),

    #[error("Video generation failed: {0}")]
    OperationFailed(String),
}
