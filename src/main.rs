use std::sync::Arc;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{any, get};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use marina::config::AppConfig;
use marina::handlers;
use marina::services::sink::LoggingLeadSink;
use marina::state::AppState;

fn cors_layer(allowed_origin: &str) -> anyhow::Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origin == "*" {
        return Ok(layer.allow_origin(Any));
    }

    let origin = HeaderValue::from_str(allowed_origin)
        .with_context(|| format!("invalid CORS_ALLOWED_ORIGIN: {allowed_origin}"))?;
    Ok(layer.allow_origin(origin))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    let cors = cors_layer(&config.cors_allowed_origin)?;

    tracing::info!("leads are logged only; no booking sink is configured");

    let state = Arc::new(AppState {
        config: config.clone(),
        sink: Box::new(LoggingLeadSink),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/services", get(handlers::catalog::list_services))
        .route("/api/booking", any(handlers::booking::submit_booking))
        .route("/api/contact", any(handlers::contact::submit_contact))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
