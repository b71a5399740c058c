pub mod config;
pub mod handlers;
pub mod openapi;
pub mod query;
pub mod sample;
pub mod stats;
pub mod store;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the service router over the given state.
pub fn app(state: handlers::AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/forecasts",
            get(handlers::list_forecasts).post(handlers::create_forecast),
        )
        .route("/api/forecasts/statistics", get(handlers::get_statistics))
        .route("/api/forecasts/generate", post(handlers::generate_samples))
        .route(
            "/api/forecasts/{id}",
            get(handlers::get_forecast)
                .put(handlers::update_forecast)
                .delete(handlers::delete_forecast),
        )
        .merge(openapi::swagger_ui())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
