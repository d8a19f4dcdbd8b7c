//! API route definitions

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, HeaderValue, Method},
    routing::{get, post, MethodRouter},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the full application router: health, ingestion and the device API.
///
/// `body_limit` caps request bodies in bytes; `None` accepts any size.
pub fn create_router(state: AppState, body_limit: Option<usize>) -> Router {
    let router = base_routes()
        .route(
            "/api/v1/devices",
            with_method_fallback(
                get(handlers::devices::list_devices).post(handlers::devices::create_device),
            ),
        )
        .route(
            "/api/v1/devices/:id",
            with_method_fallback(get(handlers::devices::get_device)),
        )
        .fallback(handlers::not_found)
        .with_state(state);

    apply_layers(router, body_limit)
}

/// Create the stateless router used by edge and serverless deployments
pub fn create_edge_router(body_limit: Option<usize>) -> Router {
    apply_layers(base_routes().fallback(handlers::not_found), body_limit)
}

/// Routes that need no storage
fn base_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/health",
            with_method_fallback(get(handlers::health_check)),
        )
        .route(
            "/data",
            with_method_fallback(post(handlers::ingest::receive_data)),
        )
}

fn with_method_fallback<S>(method_router: MethodRouter<S>) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    method_router.fallback(handlers::method_not_allowed)
}

/// Body limit, CORS preflight handling and the headers every response must carry.
///
/// The header layers wrap the CORS layer so their values win on preflight
/// responses too.
fn apply_layers(router: Router, body_limit: Option<usize>) -> Router {
    let body_limit = match body_limit {
        Some(max) => DefaultBodyLimit::max(max),
        None => DefaultBodyLimit::disable(),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    router
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(force_header(
            header::CONTENT_TYPE,
            "application/json",
        ))
        .layer(force_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .layer(force_header(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            "GET, POST, OPTIONS",
        ))
        .layer(force_header(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            "Content-Type",
        ))
}

fn force_header(name: HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value))
}
