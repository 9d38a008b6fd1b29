use crate::{error::AppError, AppState};
use ai_client::{ImagePayload, ListingDetails, ResearchResult, VideoOperation};
use analytics::{CalculationResult, MetricsEngine};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use core_types::Property;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct ResearchRequest {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageEditRequest {
    pub image: ImagePayload,
    pub instruction: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRequest {
    pub prompt: String,
    pub image: Option<ImagePayload>,
}

/// # GET /api/properties
pub async fn list_properties(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Property>>, AppError> {
    let properties = state.repository.get_all_properties().await?;
    Ok(Json(properties))
}

/// # POST /api/properties
pub async fn create_property(
    State(state): State<Arc<AppState>>,
    Json(property): Json<Property>,
) -> Result<(StatusCode, Json<Property>), AppError> {
    state.repository.insert_property(&property).await?;
    Ok((StatusCode::CREATED, Json(property)))
}

/// # GET /api/properties/:property_id
pub async fn get_property(
    Path(property_id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Property>, AppError> {
    let property = state.repository.get_property(property_id).await?;
    Ok(Json(property))
}

/// # PUT /api/properties/:property_id
pub async fn update_property(
    Path(property_id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
    Json(mut property): Json<Property>,
) -> Result<Json<Property>, AppError> {
    // The path is authoritative; a mismatched body id is overwritten.
    property.id = property_id;
    state.repository.update_property(&property).await?;
    Ok(Json(property))
}

/// # DELETE /api/properties/:property_id
pub async fn delete_property(
    Path(property_id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<StatusCode, AppError> {
    state.repository.delete_property(property_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// # GET /api/properties/:property_id/metrics
/// Metrics are a derived view: recomputed from the stored record on every
/// read, never persisted.
pub async fn get_property_metrics(
    Path(property_id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<CalculationResult>, AppError> {
    let property = state.repository.get_property(property_id).await?;
    let result = MetricsEngine::new().calculate(&property);
    Ok(Json(result))
}

/// # POST /api/metrics/preview
/// Computes metrics for an unsaved record. The UI calls this on every slider
/// tick, so the handler touches neither the store nor the AI service.
pub async fn preview_metrics(Json(property): Json<Property>) -> Json<CalculationResult> {
    Json(MetricsEngine::new().calculate(&property))
}

/// # POST /api/properties/:property_id/description
/// Generates marketing copy for a stored property and saves it onto the record.
pub async fn generate_description(
    Path(property_id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Property>, AppError> {
    let mut property = state.repository.get_property(property_id).await?;
    let description = state.ai.generate_description(&property).await?;
    property.description = Some(description);
    state.repository.update_property(&property).await?;
    Ok(Json(property))
}

/// # POST /api/research
pub async fn research(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ResearchRequest>,
) -> Result<Json<ResearchResult>, AppError> {
    let result = state.ai.market_research(&request.query).await?;
    Ok(Json(result))
}

/// # POST /api/listings/extract
pub async fn extract_listing(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ListingDetails>, AppError> {
    let details = state.ai.extract_listing(&request.text).await?;
    Ok(Json(details))
}

/// # POST /api/images/edit
pub async fn edit_image(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ImageEditRequest>,
) -> Result<Json<ImagePayload>, AppError> {
    let edited = state.ai.edit_image(&request.image, &request.instruction).await?;
    Ok(Json(edited))
}

/// # POST /api/videos
pub async fn start_video(
    State(state): State<Arc<AppState>>,
    Json(request): Json<VideoRequest>,
) -> Result<Json<VideoOperation>, AppError> {
    let operation = state
        .ai
        .start_video(&request.prompt, request.image.as_ref())
        .await?;
    Ok(Json(operation))
}

/// # POST /api/videos/poll
/// The browser owns the polling cadence; each call is one upstream status fetch.
pub async fn poll_video(
    State(state): State<Arc<AppState>>,
    Json(operation): Json<VideoOperation>,
) -> Result<Json<VideoOperation>, AppError> {
    let refreshed = state.ai.poll_video(&operation).await?;
    Ok(Json(refreshed))
}
