use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rust_travel_api::config::Config;
use rust_travel_api::handlers::{self, AppState};

/// Main entry point for the application.
///
/// Initializes logging, loads configuration, builds the shared AI and image
/// clients, and starts the Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rust_travel_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    if config.unsplash_access_key.is_some() {
        tracing::info!("✓ Unsplash image search enabled");
    } else {
        tracing::info!("Unsplash key not set, using placeholder images only");
    }

    // Build application state
    let app_state = Arc::new(AppState::new(config.clone()));

    // AI pipeline routes with a request size limit
    let api_routes = Router::new()
        .route("/api/v1/trip-architect", post(handlers::trip_architect))
        .route("/api/v1/generate-plan", post(handlers::generate_plan))
        .route("/api/v1/spot-discovery", post(handlers::spot_discovery))
        .route("/api/v1/food-discovery", post(handlers::food_discovery))
        .route("/api/v1/places", get(handlers::places))
        .layer(
            ServiceBuilder::new()
                // Request size limit: 1MB max payload (prevents memory exhaustion)
                .layer(RequestBodyLimitLayer::new(1024 * 1024)),
        );

    // Build final app with health check outside the body limit
    let app = Router::new()
        .route("/health", get(handlers::health))
        .merge(api_routes)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
