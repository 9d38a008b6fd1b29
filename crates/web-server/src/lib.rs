use ai_client::{AiClient, GeminiClient};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use configuration::AiConfig;
use std::net::SocketAddr;
use std::sync::Arc;
use store::PropertyRepository;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};
use tracing;

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub repository: PropertyRepository,
    pub ai: Arc<dyn AiClient>,
}

/// The main function to configure and run the web server.
pub async fn run_server(addr: SocketAddr, ai_config: AiConfig) -> anyhow::Result<()> {
    // Note: Tracing is initialized by the binary, not here, so embedding the
    // server in another process does not fight over the global subscriber.

    dotenvy::dotenv().ok();
    let pool = store::connect().await?;
    store::run_migrations(&pool).await?;
    let repository = PropertyRepository::new(pool);
    let ai: Arc<dyn AiClient> = Arc::new(GeminiClient::new(&ai_config));

    let app_state = Arc::new(AppState { repository, ai });
    // The browser UI is served from a different origin during development.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    // --- DEFINE THE APPLICATION ROUTES ---
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route(
            "/api/properties",
            get(handlers::list_properties).post(handlers::create_property),
        )
        .route(
            "/api/properties/:property_id",
            get(handlers::get_property)
                .put(handlers::update_property)
                .delete(handlers::delete_property),
        )
        .route(
            "/api/properties/:property_id/metrics",
            get(handlers::get_property_metrics),
        )
        .route("/api/metrics/preview", post(handlers::preview_metrics))
        .route(
            "/api/properties/:property_id/description",
            post(handlers::generate_description),
        )
        .route("/api/research", post(handlers::research))
        .route("/api/listings/extract", post(handlers::extract_listing))
        .route("/api/images/edit", post(handlers::edit_image))
        .route("/api/videos", post(handlers::start_video))
        .route("/api/videos/poll", post(handlers::poll_video))
        .with_state(app_state)
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
        // Images travel base64-encoded inside JSON bodies.
        .layer(DefaultBodyLimit::max(1024 * 1024 * 50));

    tracing::info!("Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
