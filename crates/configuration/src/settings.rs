use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub ai: AiConfig,
}

/// Contains parameters for the HTTP API surface.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// The interface to bind, e.g. "0.0.0.0".
    pub host: String,
    pub port: u16,
}

/// Contains parameters for the hosted generative-AI service.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Root of the REST API, e.g. "https://generativelanguage.googleapis.com/v1beta".
    pub base_url: String,
    /// Static API key, sent as a request header on every call.
    pub api_key: String,
    /// Model used for descriptions, research, and structured extraction.
    pub text_model: String,
    /// Model used for image editing.
    pub image_model: String,
    /// Model used for video generation.
    pub video_model: String,
}
