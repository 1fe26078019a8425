use axum::{http::StatusCode, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    config::Config,
    handlers::{health::livez, start::start},
};

/// Create the application router with all routes and middleware.
pub fn create_app(config: &Config) -> Router {
    Router::new()
        .route("/start", get(start))
        .route("/start/", get(start))
        .route("/livez", get(livez))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
}
