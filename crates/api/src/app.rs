use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tower_http::{compression::CompressionLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, security_headers_middleware, trace_id,
};
use crate::routes::{health, media, pages, submit};
use crate::services::{TemplateError, TemplateRenderer, UploadStore};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub templates: Arc<TemplateRenderer>,
    pub uploads: Arc<UploadStore>,
}

/// Startup failures while assembling the application.
#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("Failed to load templates: {0}")]
    Templates(#[from] TemplateError),

    #[error("Failed to create upload directory {0}: {1}")]
    UploadDir(String, std::io::Error),
}

pub fn create_app(config: Config, pool: PgPool) -> Result<Router, AppInitError> {
    let config = Arc::new(config);

    let templates = Arc::new(TemplateRenderer::new()?);

    let uploads = UploadStore::new(&config.uploads.dir);
    uploads
        .ensure_dir()
        .map_err(|e| AppInitError::UploadDir(config.uploads.dir.display().to_string(), e))?;

    let state = AppState {
        pool,
        config: config.clone(),
        templates,
        uploads: Arc::new(uploads),
    };

    // Pages rendered for the browser
    let page_routes = Router::new()
        .route("/", get(pages::index))
        .route("/design", get(pages::design_default))
        .route("/design/", get(pages::design_default))
        .route("/design/:design_id", get(pages::design))
        .route("/design/:design_id/", get(pages::design))
        .route("/design/:design_id/:amazon_id", get(pages::design_with_page))
        .route("/design/:design_id/:amazon_id/", get(pages::design_with_page))
        .route("/preview", get(pages::preview_redirect))
        .route("/preview/", get(pages::preview_redirect))
        .route("/preview/:amazon_id", get(pages::preview))
        .route("/preview/:amazon_id/", get(pages::preview))
        .route("/submit", post(submit::submit))
        .route("/media/uploads/:filename", get(media::serve_upload));

    // Operational routes
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    // Global middleware (order matters: bottom layers run first)
    Ok(Router::new()
        .merge(page_routes)
        .merge(public_routes)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            security_headers_middleware,
        ))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .with_state(state))
}
