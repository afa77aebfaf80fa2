/**
 * Router Configuration
 *
 * Assembles the full Axum router:
 *
 * 1. `/api/v1` - auth and user endpoints
 * 2. `/uploads` - read-only static files with permissive CORS headers
 * 3. Cross-cutting layers - CORS, compression, security headers, tracing
 * 4. Fallback handler - 404 for unknown routes
 */

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::routes::api_routes::api_routes;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `state` - Application state (store, services, token issuer)
/// * `config` - Server configuration (CORS origin, uploads directory)
pub fn create_router(state: AppState, config: &AppConfig) -> Router<()> {
    let router = Router::new().nest("/api/v1", api_routes(state.clone()));

    // Uploaded files are served read-only from any origin.
    let uploads = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .service(ServeDir::new(&config.uploads_dir));
    let router = router.nest_service("/uploads", uploads);

    let router = router
        .layer(cors_layer(&config.origin))
        .layer(CompressionLayer::new())
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(TraceLayer::new_for_http());

    // Fallback handler for 404
    let router = router.fallback(|| async { "404 Not Found" });

    router.with_state(state)
}

/// CORS for the API surface
///
/// Credentials can only be allowed together with a concrete origin;
/// a wildcard origin disables them.
fn cors_layer(origin: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    match origin.parse::<HeaderValue>() {
        Ok(value) if origin != "*" => cors.allow_origin(value).allow_credentials(true),
        _ => cors.allow_origin(Any),
    }
}
