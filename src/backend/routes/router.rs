/**
 * Router Configuration
 *
 * Combines the API routes, the service endpoints and the HTTP layers into
 * the application router.
 *
 * # Layout
 *
 * - `GET /` - service banner
 * - `GET /health` - liveness probe
 * - `{API_PREFIX}/...` - API routes (see `api_routes`)
 * - anything else - 404 JSON error
 *
 * # Layers
 *
 * - CORS for the configured origins, any method and header
 * - `TraceLayer` request/response spans
 */

use axum::{
    http::HeaderValue,
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let api = configure_api_routes(app_state.clone());
    let prefix = app_state.config.api_prefix.clone();

    let router = Router::new()
        .route("/", get(root))
        .route("/health", get(health));

    let router = if prefix.is_empty() {
        router.merge(api)
    } else {
        router.nest(&prefix, api)
    };

    router
        .fallback(not_found)
        .layer(cors_layer(&app_state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// CORS policy from `cors_origins`; `*` allows any origin
pub fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "Snake Arena API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "healthy",
    }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn not_found() -> BackendError {
    BackendError::not_found("Not found")
}
