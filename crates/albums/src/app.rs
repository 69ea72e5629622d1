use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        albums::{create_album, delete_album, get_album, list_albums},
        health::{livez, readyz},
        sample_data::create_sample_data,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    // API routes with CORS
    let api_routes = Router::new()
        .route("/albums", get(list_albums).post(create_album))
        .route("/albums/{id}", get(get_album).delete(delete_album))
        .layer(cors.clone());

    // Seeding waits out table provisioning on its own retry budget, so it
    // stays outside the request timeout.
    let seed_routes = Router::new()
        .route("/sample-data", get(create_sample_data))
        .layer(cors);

    let request_timeout = state.request_timeout;

    // Main application router
    Router::new()
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .merge(api_routes)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .merge(seed_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
