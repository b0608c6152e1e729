//! TrainInfo HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::sync::Arc;

use anyhow::Context;
use application::{DestinationService, JourneyService};
use infrastructure::{
    AppConfig, MapsAdapter, TraccarPositionAdapter, TransitAdapter, init_logging,
};
use integration_maps::GoogleMapsResolver;
use integration_traccar::HttpTraccarClient;
use integration_transit::HafasTransitClient;
use presentation_http::{
    routes,
    shutdown::{drain_within, shutdown_signal},
    state::AppState,
};
use tokio::{net::TcpListener, sync::watch};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Largest accepted request body
const MAX_BODY_BYTES: usize = 64 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    init_logging(config.server.log_format).context("Failed to initialize logging")?;

    info!("🚆 TrainInfo v{} starting...", env!("CARGO_PKG_VERSION"));

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        device_id = config.traccar.device_id,
        home = %config.destination.home,
        away = %config.destination.away,
        "Configuration loaded"
    );

    // Initialize adapters
    let traccar = HttpTraccarClient::new(config.traccar.to_traccar_config())
        .context("Failed to initialize Traccar client")?;
    let transit = HafasTransitClient::new(&config.transit.to_transit_config())
        .context("Failed to initialize transit client")?;
    let maps = GoogleMapsResolver::new(config.maps.to_maps_config())
        .context("Failed to initialize map-link resolver")?;

    // Initialize services
    let journey_service = JourneyService::new(
        Arc::new(TraccarPositionAdapter::new(traccar)),
        Arc::new(TransitAdapter::new(transit)),
        Arc::new(MapsAdapter::new(maps)),
        DestinationService::new(config.destination.to_settings()),
    );

    let state = AppState {
        journey_service: Arc::new(journey_service),
        api_token: config.security.api_token.clone(),
    };

    // Build router
    let app = routes::create_router(state);

    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Add middleware (order matters: first added = innermost)
    let app = app
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🚀 Server listening on http://{}", addr);

    let (trigger, triggered) = watch::channel(false);
    let server = async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal(trigger))
            .await
    };

    let drain_limit = config.server.shutdown_timeout();
    if let Some(result) = drain_within(server, triggered, drain_limit).await {
        result.context("Server error")?;
    }

    info!("👋 Server shutdown complete");

    Ok(())
}
