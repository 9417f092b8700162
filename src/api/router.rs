use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, booking_options, cancel_visit, create_visit, get_visit, list_upcoming_visits,
};

/// Creates the API router with all visit booking endpoints
///
/// Every endpoint except /health requires the `x-user-id` header.
///
/// - GET /visits - Upcoming visits of the current user
/// - POST /visits - Book a visit
/// - GET /visits/new - Cars and booked slots for the booking form
/// - GET /visits/:id - Visit details
/// - POST /visits/:id/cancel - Cancel a visit
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route("/visits", get(list_upcoming_visits).post(create_visit))
        .route("/visits/new", get(booking_options))
        .route("/visits/:id", get(get_visit))
        .route("/visits/:id/cancel", post(cancel_visit))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
